//! Save backend-produced text (CSV exports) as a browser download.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const STAMP: &[BorrowedFormatItem<'_>] = format_description!("[year][month][day]_[hour][minute][second]");

/// `activity_logs_20250125_083012.csv` style name for an export taken at `at`.
#[must_use]
pub fn export_filename(prefix: &str, at: OffsetDateTime) -> String {
    let stamp = at.format(STAMP).unwrap_or_default();
    format!("{prefix}_{stamp}.csv")
}

/// Hand `contents` to the browser as a file named `filename`.
///
/// # Errors
///
/// The DOM call that failed, rendered for logging.
pub fn save_text(filename: &str, mime: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js = |e: wasm_bindgen::JsValue| format!("{e:?}");
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js)?;
        let document = web_sys::window().and_then(|w| w.document()).ok_or("no document")?;
        let anchor = document
            .create_element("a")
            .map_err(js)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(js)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, contents);
        Ok(())
    }
}
