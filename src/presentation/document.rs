//! In-memory render target
//!
//! Records what the controller asked for, element by element, and can
//! serialize the result as a complete HTML page. Used by the preview shell,
//! the snapshot command and the tests.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Write as _;

use super::{ElementId, Markup, Presentation, INVALID_CLASS};
use crate::core::format::escape;
use crate::core::{Field, FieldKind, ViewMode};
use crate::navigation::Page;

/// Reports back/forward moves of the location fragment to the shell
const FOLLOW_LOCATION_SCRIPT: &str = r#"<script>
(function () {
  function follow() {
    var hash = decodeURIComponent(location.hash.replace(/^#/, ""));
    if (!hash || hash === document.body.dataset.fragment) { return; }
    fetch("/location", {
      method: "POST",
      headers: { "Content-Type": "application/x-www-form-urlencoded" },
      body: "fragment=" + encodeURIComponent(hash)
    }).then(function () { location.reload(); });
  }
  window.addEventListener("hashchange", follow);
  window.addEventListener("pageshow", follow);
})();
</script>"#;

const STYLE: &str = r#"
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
nav { display: flex; gap: 8px; padding: 12px 24px; background: #1e293b; }
nav button { background: none; border: 0; color: #cbd5e1; font-size: 1rem; cursor: pointer; }
nav button.active { color: #fff; border-bottom: 2px solid #3b82f6; }
main { max-width: 1100px; margin: 0 auto; padding: 24px; }
.banner { background: #fee2e2; color: #991b1b; padding: 12px 16px; border-radius: 8px; display: flex; justify-content: space-between; }
.notice { background: #dcfce7; color: #166534; padding: 12px 16px; border-radius: 8px; }
.loading { color: #64748b; font-style: italic; }
.view-switch button.active { background: #3b82f6; color: #fff; }
.avatar { display: inline-flex; width: 28px; height: 28px; border-radius: 50%; background: #3b82f6; color: #fff; align-items: center; justify-content: center; font-size: 0.75rem; margin-right: 8px; }
.avatar-lg { width: 48px; height: 48px; font-size: 1rem; }
table { width: 100%; border-collapse: collapse; }
td, th { text-align: left; padding: 8px; border-bottom: 1px solid #e2e8f0; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px; }
.person-card { background: #fff; border: 1px solid #e2e8f0; border-radius: 12px; padding: 16px; }
.person-item, .submitted-item { display: flex; gap: 12px; align-items: center; padding: 8px 0; }
input.invalid { border-color: #dc2626; }
.field-error { color: #dc2626; font-size: 0.85rem; }
[hidden] { display: none !important; }
"#;

/// Recorded state of one element
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub markup: Markup,
    pub hidden: bool,
    pub classes: BTreeSet<&'static str>,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: HashMap<ElementId, Element>,
    fragment: Option<String>,
    scroll_target: Option<ElementId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a location fragment, as if the page was opened at `#fragment`
    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        Self {
            fragment: Some(fragment.into()),
            ..Self::default()
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn markup(&self, id: ElementId) -> &str {
        self.elements.get(&id).map_or("", |e| e.markup.as_str())
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.hidden)
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements
            .get(&id)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn value(&self, field: Field) -> &str {
        self.elements
            .get(&ElementId::Input(field))
            .map_or("", |e| e.value.as_str())
    }

    pub fn scroll_target(&self) -> Option<ElementId> {
        self.scroll_target
    }

    /// Forget the pending scroll once a page has been served
    pub fn clear_scroll_target(&mut self) {
        self.scroll_target = None;
    }

    fn entry(&mut self, id: ElementId) -> &mut Element {
        self.elements.entry(id).or_default()
    }

    /// ` id="..." class="..." hidden` for an element
    fn attrs(&self, id: ElementId, base_class: &str) -> String {
        let mut out = format!(" id=\"{}\"", id.dom_id());
        let mut classes: Vec<&str> = Vec::new();
        if !base_class.is_empty() {
            classes.push(base_class);
        }
        if let Some(element) = self.elements.get(&id) {
            classes.extend(element.classes.iter().copied());
        }
        if !classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", classes.join(" "));
        }
        if self.is_hidden(id) {
            out.push_str(" hidden");
        }
        out
    }

    /// Serialize the whole page
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(8 * 1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        html.push_str("<title>Roster</title>\n");
        let _ = writeln!(html, "<style>{}</style>", STYLE);
        html.push_str("</head>\n");
        let _ = writeln!(
            html,
            "<body data-fragment=\"{}\">",
            escape(self.fragment.as_deref().unwrap_or_default())
        );

        html.push_str("<nav>\n");
        for page in Page::ALL {
            let _ = writeln!(
                html,
                "<form method=\"post\" action=\"/navigate/{page}\"><button{attrs}>{label}</button></form>",
                page = page.as_str(),
                attrs = self.attrs(ElementId::NavLink(page), "nav-link"),
                label = escape(page.label()),
            );
        }
        html.push_str("</nav>\n<main>\n");

        let _ = writeln!(
            html,
            "<div{} role=\"status\">Loading people...</div>",
            self.attrs(ElementId::Loading, "loading")
        );
        let _ = writeln!(
            html,
            "<div{} role=\"alert\"><span>{}</span><form method=\"post\" action=\"/banner/dismiss\"><button>Dismiss</button></form></div>",
            self.attrs(ElementId::ErrorBanner, "banner"),
            self.markup(ElementId::ErrorBanner),
        );

        self.write_home(&mut html);
        self.write_people(&mut html);
        self.write_form(&mut html);

        html.push_str("</main>\n");
        if let Some(target) = self.scroll_target {
            let _ = writeln!(
                html,
                "<script>document.getElementById(\"{}\").scrollIntoView();</script>",
                target.dom_id()
            );
        }
        html.push_str(FOLLOW_LOCATION_SCRIPT);
        html.push_str("\n</body>\n</html>\n");
        html
    }

    fn write_home(&self, html: &mut String) {
        let _ = writeln!(
            html,
            "<section{}>\n<h1>People Directory</h1>\n<p>Browse people from the directory service or add an entry of your own.</p>\n</section>",
            self.attrs(ElementId::Page(Page::Home), "page")
        );
    }

    fn write_people(&self, html: &mut String) {
        let _ = writeln!(html, "<section{}>", self.attrs(ElementId::Page(Page::People), "page"));
        html.push_str("<h2>People</h2>\n<div class=\"view-switch\">\n");
        for mode in ViewMode::ALL {
            let _ = writeln!(
                html,
                "<form method=\"post\" action=\"/view/{mode}\"><button{attrs}>{label}</button></form>",
                mode = mode.as_str(),
                attrs = self.attrs(ElementId::ViewButton(mode), ""),
                label = escape(mode.label()),
            );
        }
        html.push_str("<form method=\"post\" action=\"/reload\"><button>Reload</button></form>\n</div>\n");
        let _ = writeln!(
            html,
            "<p{}>{}</p>",
            self.attrs(ElementId::PeopleCount, ""),
            self.markup(ElementId::PeopleCount)
        );

        let table = ElementId::ViewContainer(ViewMode::Table);
        let _ = writeln!(
            html,
            "<table{}><thead><tr><th>ID</th><th>Name</th><th>Email</th></tr></thead><tbody>{}</tbody></table>",
            self.attrs(table, ""),
            self.markup(table)
        );
        let cards = ElementId::ViewContainer(ViewMode::Cards);
        let _ = writeln!(html, "<div{}>{}</div>", self.attrs(cards, "cards"), self.markup(cards));
        let list = ElementId::ViewContainer(ViewMode::List);
        let _ = writeln!(html, "<ul{}>{}</ul>", self.attrs(list, "people-list"), self.markup(list));
        html.push_str("</section>\n");
    }

    fn write_form(&self, html: &mut String) {
        let _ = writeln!(html, "<section{}>", self.attrs(ElementId::Page(Page::Form), "page"));
        html.push_str("<h2>Add Entry</h2>\n");
        let _ = writeln!(
            html,
            "<div{} role=\"status\">{}</div>",
            self.attrs(ElementId::SuccessNotice, "notice"),
            self.markup(ElementId::SuccessNotice)
        );
        html.push_str("<form method=\"post\" action=\"/submit\" novalidate>\n");
        for field in Field::ALL {
            let input_type = match field.kind() {
                FieldKind::Number => "number",
                FieldKind::Text => "text",
            };
            let _ = writeln!(
                html,
                "<label for=\"{id}\">{label}</label>\n<input{attrs} type=\"{input_type}\" name=\"{name}\" value=\"{value}\">\n<span{error_attrs}>{error}</span>",
                id = ElementId::Input(field).dom_id(),
                label = escape(field.label()),
                attrs = self.attrs(ElementId::Input(field), ""),
                input_type = input_type,
                name = field.as_str(),
                value = escape(self.value(field)),
                error_attrs = self.attrs(ElementId::FieldError(field), "field-error"),
                error = self.markup(ElementId::FieldError(field)),
            );
        }
        html.push_str("<button type=\"submit\">Submit</button>\n");
        html.push_str("<button type=\"submit\" formaction=\"/form/clear\">Clear</button>\n</form>\n");
        html.push_str("<h3>Recent submissions</h3>\n");
        let _ = writeln!(
            html,
            "<ul{}>{}</ul>",
            self.attrs(ElementId::SubmittedList, "submitted-list"),
            self.markup(ElementId::SubmittedList)
        );
        html.push_str("</section>\n");
    }

    /// Fields currently marked invalid, in form order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.has_class(ElementId::Input(*f), INVALID_CLASS))
            .collect()
    }
}

impl Presentation for Document {
    fn set_markup(&mut self, id: ElementId, markup: Markup) {
        self.entry(id).markup = markup;
    }

    fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        self.entry(id).hidden = hidden;
    }

    fn toggle_class(&mut self, id: ElementId, class: &'static str, on: bool) {
        let element = self.entry(id);
        if on {
            element.classes.insert(class);
        } else {
            element.classes.remove(class);
        }
    }

    fn set_value(&mut self, field: Field, value: &str) {
        self.entry(ElementId::Input(field)).value = value.to_string();
    }

    fn scroll_into_view(&mut self, id: ElementId) {
        self.scroll_target = Some(id);
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = Some(fragment.to_string());
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }
}
