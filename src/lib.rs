//! roster: people directory front-end core
//!
//! This library provides:
//! - Remote loading of people records behind a `PeopleSource` seam
//! - Table, card and list renderings with escaped markup
//! - A four-field submission form with inline validation
//! - Page navigation mirrored into the location fragment
//! - A single `App` controller that owns all session state and drives a
//!   passive `Presentation`
//! - A local HTTP preview shell and a snapshot command

pub mod app;
pub mod config;
pub mod core;
pub mod form;
pub mod loader;
pub mod navigation;
pub mod presentation;
pub mod render;
pub mod transport;

pub use app::{App, AppSettings, Event, Outcome};
pub use config::Config;
pub use crate::core::{Person, SubmittedEntry, ViewMode};
pub use loader::{FetchError, HttpPeopleSource, PeopleSource};
pub use navigation::Page;
pub use presentation::{Document, Presentation};
