//! Per-field validation rules for the submission form
//!
//! Rules are pure: a field and its raw value in, a verdict out. Callers
//! aggregate verdicts to decide whether the form as a whole is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::UnknownVariant;

/// Minimum length for text fields
pub const MIN_TEXT_LEN: usize = 2;

/// How a field's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// The form's input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Designation,
    Location,
    Salary,
}

impl Field {
    /// Form order
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Designation,
        Field::Location,
        Field::Salary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Designation => "designation",
            Self::Location => "location",
            Self::Salary => "salary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Designation => "Designation",
            Self::Location => "Location",
            Self::Salary => "Salary",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Salary => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    pub fn required(&self) -> bool {
        true
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "field",
                value: s.to_string(),
            })
    }
}

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .field.label())]
    Required { field: Field },

    #[error("{} must be at least {min} characters", .field.label())]
    TooShort { field: Field, min: usize },

    #[error("{} must be a whole number", .field.label())]
    NotANumber { field: Field },

    #[error("{} must be greater than zero", .field.label())]
    NonPositive { field: Field },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::NotANumber { field }
            | Self::NonPositive { field } => *field,
        }
    }
}

/// Check one field's raw value
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    check_value(field, value).map(|_| ())
}

/// Check one value, handing back the parsed number for numeric fields
fn check_value(field: Field, value: &str) -> Result<Option<i64>, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return if field.required() {
            Err(ValidationError::Required { field })
        } else {
            Ok(None)
        };
    }

    match field.kind() {
        FieldKind::Text => {
            if value.chars().count() < MIN_TEXT_LEN {
                return Err(ValidationError::TooShort {
                    field,
                    min: MIN_TEXT_LEN,
                });
            }
            Ok(None)
        }
        FieldKind::Number => {
            let parsed = parse_number(value).ok_or(ValidationError::NotANumber { field })?;
            if parsed <= 0 {
                return Err(ValidationError::NonPositive { field });
            }
            Ok(Some(parsed))
        }
    }
}

/// Parse a numeric field value. Accepts `90000`, `90,000` and `+90000`.
pub fn parse_number(value: &str) -> Option<i64> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<i64>().ok()
}

/// Aggregated result of checking every field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormCheck {
    pub errors: Vec<ValidationError>,
    salary: Option<i64>,
}

impl FormCheck {
    /// Valid iff every required field passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// The parsed salary, present only when the whole form is valid
    pub fn accepted_salary(&self) -> Option<i64> {
        self.salary.filter(|_| self.is_valid())
    }
}

/// Check every field, in form order
pub fn validate_form<'a>(value_of: impl Fn(Field) -> &'a str) -> FormCheck {
    let mut check = FormCheck::default();
    for field in Field::ALL {
        match check_value(field, value_of(field)) {
            Ok(Some(number)) if field == Field::Salary => check.salary = Some(number),
            Ok(_) => {}
            Err(error) => check.errors.push(error),
        }
    }
    check
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_empty() {
        assert_eq!(
            validate_field(Field::Name, "   "),
            Err(ValidationError::Required { field: Field::Name })
        );
        assert_eq!(
            validate_field(Field::Salary, ""),
            Err(ValidationError::Required {
                field: Field::Salary
            })
        );
    }

    #[test]
    fn test_text_too_short() {
        assert_eq!(
            validate_field(Field::Name, "A"),
            Err(ValidationError::TooShort {
                field: Field::Name,
                min: 2
            })
        );
        assert!(validate_field(Field::Name, "Al").is_ok());
    }

    #[test]
    fn test_number_rules() {
        assert_eq!(
            validate_field(Field::Salary, "-5"),
            Err(ValidationError::NonPositive {
                field: Field::Salary
            })
        );
        assert_eq!(
            validate_field(Field::Salary, "0"),
            Err(ValidationError::NonPositive {
                field: Field::Salary
            })
        );
        assert_eq!(
            validate_field(Field::Salary, "lots"),
            Err(ValidationError::NotANumber {
                field: Field::Salary
            })
        );
        assert!(validate_field(Field::Salary, "90,000").is_ok());
        // Short numbers are fine; the length rule is for text only
        assert!(validate_field(Field::Salary, "7").is_ok());
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::TooShort {
            field: Field::Location,
            min: 2,
        };
        assert_eq!(err.to_string(), "Location must be at least 2 characters");
        let err = ValidationError::Required {
            field: Field::Designation,
        };
        assert_eq!(err.to_string(), "Designation is required");
    }

    #[test]
    fn test_validate_form_aggregates() {
        let check = validate_form(|field| match field {
            Field::Name => "A",
            Field::Designation => "Dev",
            Field::Location => "X",
            Field::Salary => "-5",
        });
        assert!(!check.is_valid());
        let failed: Vec<Field> = check.errors.iter().map(|e| e.field()).collect();
        assert_eq!(failed, vec![Field::Name, Field::Location, Field::Salary]);
        assert!(check.error_for(Field::Designation).is_none());
    }

    #[test]
    fn test_validate_form_hands_back_salary() {
        let check = validate_form(|field| match field {
            Field::Name => "Jane Doe",
            Field::Designation => "Engineer",
            Field::Location => "Remote",
            Field::Salary => "90,000",
        });
        assert!(check.is_valid());
        assert_eq!(check.accepted_salary(), Some(90_000));

        let check = validate_form(|field| match field {
            Field::Name => "A",
            _ => "1200",
        });
        assert!(!check.is_valid());
        assert_eq!(check.accepted_salary(), None);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("Salary".parse::<Field>().unwrap(), Field::Salary);
        assert!("age".parse::<Field>().is_err());
    }
}
