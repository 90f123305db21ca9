//! Page navigation
//!
//! Exactly one page section is visible at a time. The active page is mirrored
//! into the location fragment so reloads and back/forward land on the same
//! page.

use serde::{Deserialize, Serialize};

use crate::core::UnknownVariant;
use crate::presentation::{ElementId, Presentation, ACTIVE_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    People,
    Form,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::People, Page::Form];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::People => "people",
            Self::Form => "form",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::People => "People",
            Self::Form => "Add Entry",
        }
    }

    /// Resolve a location fragment (`people` or `#people`) to a known page
    pub fn from_fragment(fragment: &str) -> Option<Page> {
        fragment.trim().trim_start_matches('#').parse().ok()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Page {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "page",
                value: s.to_string(),
            })
    }
}

/// Page to show first: the fragment if it names a known page, else the default
pub fn initial_page(fragment: Option<&str>, default: Page) -> Page {
    fragment.and_then(Page::from_fragment).unwrap_or(default)
}

/// Show `page` and hide every other page. The fragment is left alone.
pub fn show(view: &mut dyn Presentation, page: Page) {
    for other in Page::ALL {
        let active = other == page;
        view.set_hidden(ElementId::Page(other), !active);
        view.toggle_class(ElementId::NavLink(other), ACTIVE_CLASS, active);
    }
}

/// Activate `page`, deactivate every other page and mirror it to the fragment
pub fn activate(view: &mut dyn Presentation, page: Page) {
    show(view, page);
    view.set_fragment(page.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Document;

    #[test]
    fn test_from_fragment() {
        assert_eq!(Page::from_fragment("#people"), Some(Page::People));
        assert_eq!(Page::from_fragment("FORM"), Some(Page::Form));
        assert_eq!(Page::from_fragment("#settings"), None);
        assert_eq!(Page::from_fragment(""), None);
    }

    #[test]
    fn test_initial_page_falls_back_to_default() {
        assert_eq!(initial_page(Some("#form"), Page::Home), Page::Form);
        assert_eq!(initial_page(Some("#nope"), Page::People), Page::People);
        assert_eq!(initial_page(None, Page::Home), Page::Home);
    }

    #[test]
    fn test_activate_shows_exactly_one_page() {
        let mut doc = Document::new();
        activate(&mut doc, Page::People);

        let visible: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|p| !doc.is_hidden(ElementId::Page(*p)))
            .collect();
        assert_eq!(visible, vec![Page::People]);
        assert!(doc.has_class(ElementId::NavLink(Page::People), ACTIVE_CLASS));
        assert!(!doc.has_class(ElementId::NavLink(Page::Home), ACTIVE_CLASS));
        assert_eq!(doc.fragment().as_deref(), Some("people"));
    }

    #[test]
    fn test_show_leaves_fragment() {
        let mut doc = Document::with_fragment("form");
        show(&mut doc, Page::Home);
        assert!(!doc.is_hidden(ElementId::Page(Page::Home)));
        assert!(doc.is_hidden(ElementId::Page(Page::Form)));
        assert_eq!(doc.fragment().as_deref(), Some("form"));
    }
}
