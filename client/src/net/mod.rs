//! Networking for the prediction API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the two POST helpers and the error taxonomy. Every call is
//! plain JSON request/response; there is no streaming and no auth.

pub mod api;
