//! Core domain modules
//!
//! Pure building blocks shared by the controller, the renderer and the
//! shells: record types, the session store, validation rules, display
//! formatting and deadlines.

pub mod format;
pub mod store;
pub mod timer;
pub mod types;
pub mod validation;

// Re-export canonical types
pub use store::DataStore;
pub use timer::Timer;
pub use types::{Person, SubmittedEntry, UnknownVariant, ViewMode};
pub use validation::{validate_field, validate_form, Field, FieldKind, FormCheck, ValidationError};
