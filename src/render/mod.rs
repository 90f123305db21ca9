//! Markup rendering
//!
//! Pure functions from records to `Markup`. Rendering the same inputs twice
//! yields identical output; nothing here touches the presentation layer.

mod layouts;

use crate::core::format::{escape, salary, timestamp};
use crate::core::{Person, SubmittedEntry, ViewMode};
use crate::presentation::Markup;

/// Shown instead of units when there are no people
pub const EMPTY_PEOPLE: &str = "No people to display.";

/// Shown when nothing has been submitted yet
pub const EMPTY_SUBMITTED: &str = "No submissions yet.";

/// Render every person in the given layout, one unit per record
pub fn render(mode: ViewMode, people: &[Person]) -> Markup {
    if people.is_empty() {
        return Markup::trusted(empty_placeholder(mode, EMPTY_PEOPLE));
    }

    let build: fn(&Person) -> String = match mode {
        ViewMode::Table => layouts::table_row,
        ViewMode::Cards => layouts::card,
        ViewMode::List => layouts::list_item,
    };

    Markup::trusted(people.iter().map(build).collect())
}

fn empty_placeholder(mode: ViewMode, message: &str) -> String {
    match mode {
        ViewMode::Table => format!(
            "<tr class=\"empty\"><td colspan=\"3\">{}</td></tr>",
            escape(message)
        ),
        ViewMode::Cards => format!("<p class=\"empty\">{}</p>", escape(message)),
        ViewMode::List => format!("<li class=\"empty\">{}</li>", escape(message)),
    }
}

/// Render submitted entries newest first, at most `cap`
pub fn render_submitted<'a>(
    entries: impl IntoIterator<Item = &'a SubmittedEntry>,
    cap: usize,
) -> Markup {
    let items: String = entries
        .into_iter()
        .take(cap)
        .map(|entry| {
            format!(
                concat!(
                    "<li class=\"submitted-item\" data-entry-id=\"{id}\">",
                    "<span class=\"submitted-name\">{name}</span>",
                    "<span class=\"submitted-designation\">{designation}</span>",
                    "<span class=\"submitted-location\">{location}</span>",
                    "<span class=\"submitted-salary\">{salary}</span>",
                    "<time class=\"submitted-at\">{at}</time>",
                    "</li>"
                ),
                id = entry.id,
                name = escape(&entry.name),
                designation = escape(&entry.designation),
                location = escape(&entry.location),
                salary = escape(&salary(entry.salary)),
                at = escape(&timestamp(&entry.submitted_at)),
            )
        })
        .collect();

    if items.is_empty() {
        Markup::trusted(format!(
            "<li class=\"empty\">{}</li>",
            escape(EMPTY_SUBMITTED)
        ))
    } else {
        Markup::trusted(items)
    }
}

/// Summary line above the people views
pub fn people_count(count: usize) -> Markup {
    let noun = if count == 1 { "person" } else { "people" };
    Markup::text(&format!("{} {}", count, noun))
}
