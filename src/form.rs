//! Submission form values and inline validation marks

use serde::Deserialize;

use crate::core::{validate_field, Field, ValidationError};
use crate::presentation::{ElementId, Markup, Presentation, INVALID_CLASS};

/// Raw values of the four inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub name: String,
    pub designation: String,
    pub location: String,
    pub salary: String,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        designation: impl Into<String>,
        location: impl Into<String>,
        salary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            designation: designation.into(),
            location: location.into(),
            salary: salary.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Designation => &self.designation,
            Field::Location => &self.location,
            Field::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Designation => &mut self.designation,
            Field::Location => &mut self.location,
            Field::Salary => &mut self.salary,
        };
        *slot = value.into();
    }
}

/// Mark a field invalid with its message
pub fn mark_invalid(view: &mut dyn Presentation, error: &ValidationError) {
    let field = error.field();
    view.toggle_class(ElementId::Input(field), INVALID_CLASS, true);
    view.set_markup(ElementId::FieldError(field), Markup::text(&error.to_string()));
    view.set_hidden(ElementId::FieldError(field), false);
}

/// Remove a field's invalid mark and message
pub fn clear_mark(view: &mut dyn Presentation, field: Field) {
    view.toggle_class(ElementId::Input(field), INVALID_CLASS, false);
    view.set_markup(ElementId::FieldError(field), Markup::empty());
    view.set_hidden(ElementId::FieldError(field), true);
}

/// Validate one field and reflect the verdict in the view
pub fn check_field(
    view: &mut dyn Presentation,
    field: Field,
    value: &str,
) -> Result<(), ValidationError> {
    let verdict = validate_field(field, value);
    match &verdict {
        Ok(()) => clear_mark(view, field),
        Err(error) => mark_invalid(view, error),
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Document;

    #[test]
    fn test_get_set() {
        let mut fields = FormFields::default();
        fields.set(Field::Salary, "90000");
        assert_eq!(fields.get(Field::Salary), "90000");
        assert_eq!(fields.get(Field::Name), "");
    }

    #[test]
    fn test_check_field_marks_and_clears() {
        let mut doc = Document::new();

        assert!(check_field(&mut doc, Field::Name, "A").is_err());
        assert_eq!(doc.invalid_fields(), vec![Field::Name]);
        assert_eq!(
            doc.markup(ElementId::FieldError(Field::Name)),
            "Name must be at least 2 characters"
        );

        assert!(check_field(&mut doc, Field::Name, "Ann").is_ok());
        assert!(doc.invalid_fields().is_empty());
        assert_eq!(doc.markup(ElementId::FieldError(Field::Name)), "");
        assert!(doc.is_hidden(ElementId::FieldError(Field::Name)));
    }

    #[test]
    fn test_deserialize_partial_form() {
        let fields: FormFields = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert_eq!(fields.name, "Jane");
        assert_eq!(fields.salary, "");
    }
}
