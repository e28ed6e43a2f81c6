//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod app_state;
mod form_state;

pub use app_state::AppState;
pub use form_state::FormState;
