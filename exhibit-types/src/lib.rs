//! Foundation types for exhibit.
//!
//! This crate defines the vocabulary shared by the representation engine
//! and the domain code that feeds it:
//! - [`Options`] — the ordered key→value mapping used for caller options,
//!   merge contexts and output mappings
//! - [`Exposable`] — the contract a domain object fulfils to be represented
//! - [`Attribute`] — what reading a named attribute yields
//! - [`EntityError`] — the error taxonomy of registration and resolution
//!
//! Values are plain [`serde_json::Value`] trees. Nothing in this crate turns
//! them into bytes; that belongs to whatever formats the response.

mod error;
mod exposable;
mod options;

pub use error::{EntityError, Result};
pub use exposable::{Attribute, Exposable};
pub use options::{Options, merge_options, options};

pub use serde_json::Value;
