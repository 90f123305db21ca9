//! Presentation boundary
//!
//! The controller computes markup and visibility; a `Presentation` only
//! applies them. Element lookup is typed (`ElementId`) and markup can only be
//! built through escaping constructors or the renderer, so nothing raw
//! reaches the render target.

mod document;

pub use document::{Document, Element};

use crate::core::format;
use crate::core::{Field, ViewMode};
use crate::navigation::Page;

/// Class toggled on the active nav link and view button
pub const ACTIVE_CLASS: &str = "active";

/// Class toggled on inputs that failed validation
pub const INVALID_CLASS: &str = "invalid";

/// An HTML fragment that is safe to inject
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Escaped text
    pub fn text(raw: &str) -> Self {
        Markup(format::escape(raw))
    }

    /// Markup assembled inside this crate from escaped parts
    pub(crate) fn trusted(html: String) -> Self {
        Markup(html)
    }

    pub fn empty() -> Self {
        Markup(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every element the controller addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    /// A page section
    Page(Page),
    /// The nav link for a page
    NavLink(Page),
    /// The container holding one layout
    ViewContainer(ViewMode),
    /// The button that switches to a layout
    ViewButton(ViewMode),
    PeopleCount,
    Loading,
    ErrorBanner,
    Input(Field),
    FieldError(Field),
    SuccessNotice,
    SubmittedList,
}

impl ElementId {
    /// The element's id attribute
    pub fn dom_id(&self) -> String {
        match self {
            Self::Page(page) => format!("page-{}", page.as_str()),
            Self::NavLink(page) => format!("nav-{}", page.as_str()),
            Self::ViewContainer(mode) => format!("view-{}", mode.as_str()),
            Self::ViewButton(mode) => format!("view-btn-{}", mode.as_str()),
            Self::PeopleCount => "people-count".to_string(),
            Self::Loading => "loading".to_string(),
            Self::ErrorBanner => "error-banner".to_string(),
            Self::Input(field) => format!("field-{}", field.as_str()),
            Self::FieldError(field) => format!("error-{}", field.as_str()),
            Self::SuccessNotice => "success-notice".to_string(),
            Self::SubmittedList => "submitted-list".to_string(),
        }
    }
}

/// Render target primitives
///
/// Implementations must not interpret or transform the markup they receive.
pub trait Presentation {
    /// Replace an element's content
    fn set_markup(&mut self, id: ElementId, markup: Markup);

    /// Show or hide an element
    fn set_hidden(&mut self, id: ElementId, hidden: bool);

    /// Add or remove a class on an element
    fn toggle_class(&mut self, id: ElementId, class: &'static str, on: bool);

    /// Set the current value of a form input
    fn set_value(&mut self, field: Field, value: &str);

    /// Bring an element into the viewport
    fn scroll_into_view(&mut self, id: ElementId);

    /// Mirror state into the location fragment (without the leading `#`)
    fn set_fragment(&mut self, fragment: &str);

    /// Current location fragment, if any
    fn fragment(&self) -> Option<String>;
}
