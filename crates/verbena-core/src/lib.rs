//! Core domain model for verbena.
//!
//! This crate defines the [`Festival`](model::Festival) value object, the
//! taxonomy types it carries ([`Style`](taxonomy::Style) tags and the
//! [`Month`](taxonomy::Month) enumeration), and the line parser that
//! constructs festivals from delimited text.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod parse;
pub mod taxonomy;

pub use error::{Error, Result};
pub use model::Festival;
pub use taxonomy::{Month, Style};
