//! User and timer events
//!
//! Every synchronous interaction with the controller is one of these. The
//! fetch is the only asynchronous operation and goes through
//! `App::begin_load` / `App::finish_load` instead.

use crate::core::{Field, SubmittedEntry, ValidationError, ViewMode};
use crate::form::FormFields;
use crate::navigation::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A nav link was activated
    Navigate(Page),

    /// The location fragment changed outside the controller (back/forward)
    FragmentChanged(String),

    /// A view switch button was activated
    SwitchView(ViewMode),

    /// A field's value changed
    FieldInput { field: Field, value: String },

    /// A field lost focus
    FieldBlur { field: Field, value: String },

    /// The form was submitted
    Submit(FormFields),

    /// The clear button was activated
    ClearForm,

    /// The error banner was dismissed
    DismissError,

    /// The viewport changed size
    Resize,

    /// Time passed; fire any due deadlines
    Tick,
}

/// What handling an event produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Applied, nothing to report
    Done,

    /// A submission was accepted
    Submitted(SubmittedEntry),

    /// A submission was refused
    Rejected(Vec<ValidationError>),

    /// A blurred field failed its check
    Invalid(ValidationError),
}
