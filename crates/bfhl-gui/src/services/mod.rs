//! Background services
//!
//! Work that must not block the UI thread.

mod submit;

pub use submit::{SubmitOutcome, spawn_submit};
