//! Client-side state for the prediction workflow.
//!
//! DESIGN
//! ======
//! The form module keeps submission logic pure: parsing, required-field
//! validation, and the request plan are plain functions over catalog data,
//! testable without a browser. Components hold the corresponding signals.

pub mod form;
