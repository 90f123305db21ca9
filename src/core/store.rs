//! Session state owned by the controller

use super::types::{Person, SubmittedEntry, ViewMode};

/// Everything the session knows.
///
/// People and submitted entries are kept apart; nothing ever moves a record
/// from one collection to the other.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    people: Vec<Person>,
    submitted: Vec<SubmittedEntry>,
    view_mode: ViewMode,
    loading: bool,
    error: Option<String>,
}

impl DataStore {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Default::default()
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Replace the people collection wholesale and clear any error
    pub fn replace_people(&mut self, people: Vec<Person>) {
        self.people = people;
        self.error = None;
    }

    pub fn submitted(&self) -> &[SubmittedEntry] {
        &self.submitted
    }

    pub fn push_submitted(&mut self, entry: SubmittedEntry) {
        self.submitted.push(entry);
    }

    /// Most recent submissions first, at most `cap`
    pub fn recent_submitted(&self, cap: usize) -> impl Iterator<Item = &SubmittedEntry> {
        self.submitted.iter().rev().take(cap)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: i64, name: &str) -> SubmittedEntry {
        SubmittedEntry {
            id,
            name: name.to_string(),
            designation: "Engineer".to_string(),
            location: "Remote".to_string(),
            salary: 1000,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_replace_people_clears_error() {
        let mut store = DataStore::default();
        store.set_error("boom");
        store.replace_people(vec![Person {
            id: 1,
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
        }]);
        assert_eq!(store.people().len(), 1);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_recent_submitted_newest_first_capped() {
        let mut store = DataStore::default();
        for i in 0..7 {
            store.push_submitted(entry(i, &format!("Person {}", i)));
        }
        let ids: Vec<i64> = store.recent_submitted(5).map(|e| e.id).collect();
        assert_eq!(ids, vec![6, 5, 4, 3, 2]);
        assert_eq!(store.submitted().len(), 7);
    }

    #[test]
    fn test_new_uses_view_mode() {
        let store = DataStore::new(ViewMode::Cards);
        assert_eq!(store.view_mode(), ViewMode::Cards);
        assert!(!store.is_loading());
    }
}
