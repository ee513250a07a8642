//! Error types for the front end.
//!
//! Every failure in tokenizing or parsing is reported through a single
//! [`errors::Error`], which pairs an [`errors::ErrorImpl`] variant with the
//! source position of the offending text. Errors are fatal to the current
//! call: there is no recovery and no partial tree.

pub mod errors;
