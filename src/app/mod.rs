//! The controller
//!
//! `App` is the single owner of session state. Shells feed it events and it
//! pushes markup and visibility changes into its `Presentation`. It never
//! sleeps and never spawns; deadlines are exposed through `next_deadline`
//! and fired by `tick`.

mod events;

pub use events::{Event, Outcome};

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::{
    validate_form, DataStore, Field, Person, SubmittedEntry, Timer, ValidationError, ViewMode,
};
use crate::form::{self, FormFields};
use crate::loader::{FetchError, PeopleSource};
use crate::navigation::{self, Page};
use crate::presentation::{ElementId, Markup, Presentation, ACTIVE_CLASS};
use crate::render;

/// Behaviour knobs, usually taken from `Config`
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub default_page: Page,
    pub default_view: ViewMode,
    pub notice_duration: Duration,
    pub resize_debounce: Duration,
    pub submitted_cap: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_page: Page::Home,
            default_view: ViewMode::Table,
            notice_duration: Duration::from_secs(5),
            resize_debounce: Duration::from_millis(150),
            submitted_cap: 5,
        }
    }
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            default_page: config.ui.default_page,
            default_view: config.ui.default_view,
            notice_duration: Duration::from_secs(config.ui.notice_secs),
            resize_debounce: Duration::from_millis(config.ui.resize_debounce_ms),
            submitted_cap: config.ui.submitted_cap,
        }
    }
}

pub struct App<P: Presentation> {
    store: DataStore,
    view: P,
    settings: AppSettings,
    page: Page,
    form: FormFields,
    notice_timer: Timer,
    resize_timer: Timer,
}

impl<P: Presentation> App<P> {
    pub fn new(view: P, settings: AppSettings) -> Self {
        Self {
            store: DataStore::new(settings.default_view),
            page: settings.default_page,
            view,
            settings,
            form: FormFields::default(),
            notice_timer: Timer::default(),
            resize_timer: Timer::default(),
        }
    }

    /// Bring the presentation in line with the initial state and show the
    /// first page (from the location fragment when it names a known page)
    pub fn start(&mut self) -> Page {
        self.view.set_hidden(ElementId::Loading, true);
        self.view.set_hidden(ElementId::ErrorBanner, true);
        self.view.set_hidden(ElementId::SuccessNotice, true);
        self.reset_form_view();
        self.show_view_mode(self.store.view_mode());
        self.render_people();
        self.render_submitted();

        let fragment = self.view.fragment();
        let page = navigation::initial_page(fragment.as_deref(), self.settings.default_page);
        self.navigate_to(page);
        tracing::info!("Started on page {}", page);
        page
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn view(&self) -> &P {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut P {
        &mut self.view
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    /// Activate exactly one page section
    pub fn navigate_to(&mut self, page: Page) {
        navigation::activate(&mut self.view, page);
        self.page = page;
        tracing::debug!("Navigated to {}", page);
    }

    /// Follow a fragment the location already moved to. Unknown fragments
    /// keep the current page. The fragment is not written back.
    pub fn fragment_changed(&mut self, fragment: &str) -> Option<Page> {
        let Some(page) = Page::from_fragment(fragment) else {
            tracing::debug!("Ignoring unknown fragment {:?}", fragment);
            return None;
        };
        navigation::show(&mut self.view, page);
        self.page = page;
        tracing::debug!("Followed fragment to {}", page);
        Some(page)
    }

    // ========== People ==========

    /// Switch layout and re-render from the people already in the store
    pub fn switch_view(&mut self, mode: ViewMode) {
        self.show_view_mode(mode);
        self.store.set_view_mode(mode);
        self.render_people();
        tracing::debug!("Switched view to {}", mode);
    }

    fn show_view_mode(&mut self, mode: ViewMode) {
        for other in ViewMode::ALL {
            let active = other == mode;
            self.view.set_hidden(ElementId::ViewContainer(other), !active);
            self.view
                .toggle_class(ElementId::ViewButton(other), ACTIVE_CLASS, active);
        }
    }

    /// Render the people collection into the active layout
    pub fn render_people(&mut self) {
        let mode = self.store.view_mode();
        let people = self.store.people();
        self.view
            .set_markup(ElementId::PeopleCount, render::people_count(people.len()));
        self.view
            .set_markup(ElementId::ViewContainer(mode), render::render(mode, people));
    }

    /// Mark a load as started. Returns false when one is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.store.is_loading() {
            tracing::debug!("Load already in flight, ignoring");
            return false;
        }
        self.store.set_loading(true);
        self.view.set_hidden(ElementId::Loading, false);
        true
    }

    /// Apply the result of a fetch. The loading flag is cleared either way.
    pub fn finish_load(
        &mut self,
        result: Result<Vec<Person>, FetchError>,
    ) -> Result<&[Person], FetchError> {
        self.store.set_loading(false);
        self.view.set_hidden(ElementId::Loading, true);

        match result {
            Ok(people) => {
                tracing::info!("Loaded {} people", people.len());
                self.store.replace_people(people);
                self.view.set_hidden(ElementId::ErrorBanner, true);
                self.view.set_markup(ElementId::ErrorBanner, Markup::empty());
                self.render_people();
                Ok(self.store.people())
            }
            Err(e) => {
                tracing::warn!("Failed to load people: {}", e);
                self.store.set_error(e.user_message());
                self.view
                    .set_markup(ElementId::ErrorBanner, Markup::text(e.user_message()));
                self.view.set_hidden(ElementId::ErrorBanner, false);
                Err(e)
            }
        }
    }

    /// Fetch people from `source` and render them
    pub async fn load_people(
        &mut self,
        source: &dyn PeopleSource,
    ) -> Result<&[Person], FetchError> {
        if !self.begin_load() {
            return Ok(self.store.people());
        }
        tracing::info!("Loading people from {}", source.describe());
        let result = source.fetch_people().await;
        self.finish_load(result)
    }

    /// Hide the error banner. The error stays recorded until the next
    /// successful load.
    pub fn dismiss_error(&mut self) {
        self.view.set_hidden(ElementId::ErrorBanner, true);
    }

    // ========== Form ==========

    /// A field changed: keep the value and drop its validation mark
    pub fn field_input(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
        self.view.set_value(field, value);
        form::clear_mark(&mut self.view, field);
    }

    /// A field lost focus: keep the value and check it
    pub fn field_blur(&mut self, field: Field, value: &str) -> Result<(), ValidationError> {
        self.form.set(field, value);
        self.view.set_value(field, value);
        form::check_field(&mut self.view, field, value)
    }

    /// Validate and accept a submission
    pub fn submit(&mut self, fields: FormFields) -> Result<SubmittedEntry, Vec<ValidationError>> {
        self.submit_at(fields, Utc::now(), Instant::now())
    }

    /// `submit` with explicit clocks
    pub fn submit_at(
        &mut self,
        fields: FormFields,
        at: DateTime<Utc>,
        now: Instant,
    ) -> Result<SubmittedEntry, Vec<ValidationError>> {
        for field in Field::ALL {
            self.view.set_value(field, fields.get(field));
        }
        self.form = fields;

        let check = validate_form(|field| self.form.get(field));
        let Some(salary) = check.accepted_salary() else {
            for field in Field::ALL {
                match check.error_for(field) {
                    Some(error) => form::mark_invalid(&mut self.view, error),
                    None => form::clear_mark(&mut self.view, field),
                }
            }
            if let Some(first) = check.errors.first() {
                self.view.scroll_into_view(ElementId::Input(first.field()));
            }
            tracing::warn!("Submission rejected: {} invalid field(s)", check.errors.len());
            return Err(check.errors);
        };

        let entry = SubmittedEntry {
            id: at.timestamp_millis(),
            name: self.form.name.trim().to_string(),
            designation: self.form.designation.trim().to_string(),
            location: self.form.location.trim().to_string(),
            salary,
            submitted_at: at,
        };
        self.store.push_submitted(entry.clone());
        tracing::info!("Accepted submission {} for {}", entry.id, entry.name);

        self.clear_form();
        self.show_notice(
            &format!("Entry for {} submitted successfully.", entry.name),
            now,
        );
        self.render_submitted();
        self.view.scroll_into_view(ElementId::SubmittedList);

        Ok(entry)
    }

    /// Reset all values and validation marks
    pub fn clear_form(&mut self) {
        self.form = FormFields::default();
        self.reset_form_view();
    }

    fn reset_form_view(&mut self) {
        for field in Field::ALL {
            self.view.set_value(field, "");
            form::clear_mark(&mut self.view, field);
        }
    }

    fn show_notice(&mut self, message: &str, now: Instant) {
        self.view
            .set_markup(ElementId::SuccessNotice, Markup::text(message));
        self.view.set_hidden(ElementId::SuccessNotice, false);
        self.notice_timer.arm(now, self.settings.notice_duration);
    }

    /// Render the most recent submissions, newest first
    pub fn render_submitted(&mut self) {
        let cap = self.settings.submitted_cap;
        let markup = render::render_submitted(self.store.recent_submitted(cap), cap);
        self.view.set_markup(ElementId::SubmittedList, markup);
    }

    // ========== Timers ==========

    /// The viewport changed; re-render once it settles
    pub fn resize(&mut self, now: Instant) -> Instant {
        self.resize_timer.arm(now, self.settings.resize_debounce)
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.notice_timer.deadline(), self.resize_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fire every deadline that has passed
    pub fn tick(&mut self, now: Instant) {
        if self.notice_timer.fire_if_due(now) {
            self.view.set_hidden(ElementId::SuccessNotice, true);
            tracing::debug!("Success notice dismissed");
        }
        if self.resize_timer.fire_if_due(now) {
            self.render_people();
        }
    }

    // ========== Events ==========

    /// Route one event to its handler
    pub fn dispatch(&mut self, event: Event, now: Instant) -> Outcome {
        match event {
            Event::Navigate(page) => self.navigate_to(page),
            Event::FragmentChanged(fragment) => {
                self.fragment_changed(&fragment);
            }
            Event::SwitchView(mode) => self.switch_view(mode),
            Event::FieldInput { field, value } => self.field_input(field, &value),
            Event::FieldBlur { field, value } => {
                if let Err(error) = self.field_blur(field, &value) {
                    return Outcome::Invalid(error);
                }
            }
            Event::Submit(fields) => {
                return match self.submit_at(fields, Utc::now(), now) {
                    Ok(entry) => Outcome::Submitted(entry),
                    Err(errors) => Outcome::Rejected(errors),
                };
            }
            Event::ClearForm => self.clear_form(),
            Event::DismissError => self.dismiss_error(),
            Event::Resize => {
                self.resize(now);
            }
            Event::Tick => self.tick(now),
        }
        Outcome::Done
    }

    /// Drop every pending deadline
    pub fn cancel_timers(&mut self) {
        self.notice_timer.cancel();
        self.resize_timer.cancel();
    }

    /// Drop pending deadlines and hand back the presentation
    pub fn teardown(mut self) -> P {
        self.cancel_timers();
        tracing::debug!("Controller torn down");
        self.view
    }
}
