//! Plain state machines behind every view. Pages wrap these in `RwSignal`s;
//! nothing here touches the DOM or the network.

pub mod drafts;
pub mod feed;
pub mod form;
pub mod listing;
pub mod pagination;
pub mod session;
pub mod summary;
pub mod toast;
pub mod ui;
