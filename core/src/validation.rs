//! Client-side validation of employee input.
//!
//! Validation errors are field-scoped and never leave the client: a form
//! with any error does not build a request.

use std::fmt;

use crate::types::{Record, RecordFields};

/// Minimum length, in characters, of `name` and `city`.
pub const MIN_TEXT_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Salary,
    City,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Salary => "Salary",
            Field::City => "City",
        })
    }
}

impl Field {
    /// How the field is named when it is missing.
    pub fn required_label(self) -> &'static str {
        match self {
            Field::Name => "Employee name",
            Field::Salary => "Salary",
            Field::City => "City",
        }
    }
}

/// The first rule a field violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{} is required", .0.required_label())]
    Required(Field),
    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("Salary must be a number")]
    NotANumber,
    #[error("Salary must be positive")]
    Negative,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) | ValidationError::TooShort { field, .. } => *field,
            ValidationError::NotANumber | ValidationError::Negative => Field::Salary,
        }
    }
}

/// At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub salary: Option<ValidationError>,
    pub city: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Salary => self.salary.as_ref(),
            Field::City => self.city.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.salary.is_none() && self.city.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        [&self.name, &self.salary, &self.city]
            .into_iter()
            .filter_map(Option::as_ref)
    }
}

/// Raw text as typed into a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub salary: String,
    pub city: String,
}

impl FormInput {
    pub fn new(name: &str, salary: &str, city: &str) -> Self {
        Self {
            name: name.to_string(),
            salary: salary.to_string(),
            city: city.to_string(),
        }
    }

    /// Pre-fill from a stored employee. Salary is rendered back to text.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            salary: record.salary.to_string(),
            city: record.city.clone(),
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Salary => &mut self.salary,
            Field::City => &mut self.city,
        };
        value.clone_into(slot);
    }

    pub fn validate(&self) -> Result<RecordFields, FieldErrors> {
        let name = check_text(Field::Name, &self.name);
        let salary = parse_salary(&self.salary);
        let city = check_text(Field::City, &self.city);

        match (name, salary, city) {
            (Ok(()), Ok(salary), Ok(())) => Ok(RecordFields {
                name: self.name.clone(),
                salary,
                city: self.city.clone(),
            }),
            (name, salary, city) => Err(FieldErrors {
                name: name.err(),
                salary: salary.err(),
                city: city.err(),
            }),
        }
    }
}

fn check_text(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if value.chars().count() < MIN_TEXT_LEN {
        return Err(ValidationError::TooShort {
            field,
            min: MIN_TEXT_LEN,
        });
    }
    Ok(())
}

fn parse_salary(text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required(Field::Salary));
    }
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber)?;
    if value < 0.0 {
        return Err(ValidationError::Negative);
    }
    Ok(value)
}
