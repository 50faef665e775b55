//! Networking modules for the admin REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` describes each call, `api` executes them with the session's
//! bearer token, `error` classifies failures, and `types` defines the wire
//! schema.

pub mod api;
pub mod endpoints;
pub mod error;
pub mod types;
