//! Shared domain model for the BFHL submission clients.
//!
//! This crate holds everything both the GUI and the CLI need to agree on:
//! payload parsing and `data[]` entry coercion, the fixed filter-option
//! enumeration with its label normalization rule, and the response model
//! with the rendering rules for filtered sections and file metadata.
//!
//! No I/O happens here; the HTTP boundary lives in `bfhl-client`.

mod error;
mod filter;
mod payload;
mod response;

pub use error::PayloadError;
pub use filter::{FilterOption, FilterSelection, normalize_label};
pub use payload::{Payload, value_text};
pub use response::{FileReport, NO_DATA_PLACEHOLDER, NOT_AVAILABLE, SubmitResponse};
