//! One builder per layout. Each maps a single person to a single unit.

use crate::core::format::{escape, initials};
use crate::core::Person;

pub(super) fn table_row(person: &Person) -> String {
    format!(
        concat!(
            "<tr class=\"person-row\" data-person-id=\"{id}\">",
            "<td class=\"person-id\">{id}</td>",
            "<td class=\"person-name\"><span class=\"avatar\">{initials}</span>{name}</td>",
            "<td class=\"person-email\">{email}</td>",
            "</tr>"
        ),
        id = person.id,
        initials = escape(&initials(&person.name)),
        name = escape(&person.name),
        email = escape(&person.email),
    )
}

pub(super) fn card(person: &Person) -> String {
    format!(
        concat!(
            "<article class=\"person-card\" data-person-id=\"{id}\">",
            "<span class=\"card-id\">#{id}</span>",
            "<div class=\"avatar avatar-lg\">{initials}</div>",
            "<h3 class=\"person-name\">{name}</h3>",
            "<p class=\"person-email\">{email}</p>",
            "</article>"
        ),
        id = person.id,
        initials = escape(&initials(&person.name)),
        name = escape(&person.name),
        email = escape(&person.email),
    )
}

pub(super) fn list_item(person: &Person) -> String {
    format!(
        concat!(
            "<li class=\"person-item\" data-person-id=\"{id}\">",
            "<span class=\"avatar\">{initials}</span>",
            "<div class=\"person-details\">",
            "<span class=\"person-name\">{name}</span>",
            "<span class=\"person-email\">{email}</span>",
            "</div>",
            "<span class=\"badge\">#{id}</span>",
            "</li>"
        ),
        id = person.id,
        initials = escape(&initials(&person.name)),
        name = escape(&person.name),
        email = escape(&person.email),
    )
}
