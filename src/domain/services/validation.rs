//! Payload validation.
//!
//! Candidate payloads are checked against an ordered list of [`FieldSpec`]s.
//! The first failing field wins; nothing is aggregated, so a payload with
//! several problems always reports the same single error.
//!
//! Validation runs in phases and every phase finishes before the next begins:
//!
//! 1. presence and JSON type of each declared field, in declared order ([`validate`])
//! 2. content rules on the typed draft, via the `validator` crate ([`check_contents`])
//! 3. referential checks, owned by the resource service that needs them

use serde_json::Value;
use validator::Validate;

/// Validation failure for a single field.
///
/// The `Display` output is the exact message sent back to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Incorrect field type: {0}")]
    IncorrectFieldType(String),

    /// Well-typed value that does not resolve (e.g. an unknown user id).
    #[error("Incorrect field value: {0}")]
    IncorrectFieldValue(String),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(name)
            | Self::IncorrectFieldType(name)
            | Self::IncorrectFieldValue(name) => name,
        }
    }

    /// Stable snake_case label for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::IncorrectFieldType(_) => "incorrect_field_type",
            Self::IncorrectFieldValue(_) => "incorrect_field_value",
        }
    }
}

/// JSON type a declared field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
}

impl FieldType {
    /// Check a raw JSON value against this type.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
        }
    }
}

/// Declaration of one payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub expected: FieldType,
}

impl FieldSpec {
    pub const fn required(name: &'static str, expected: FieldType) -> Self {
        Self {
            name,
            required: true,
            expected,
        }
    }
}

/// A payload whose fields can be looked up by name.
pub trait Candidate {
    /// Raw value of a field, `None` when the client did not send it.
    fn field(&self, name: &str) -> Option<&Value>;

    /// String contents of a field, empty when absent or not a string.
    ///
    /// Meant for use after [`validate`] has accepted the payload.
    fn string(&self, name: &str) -> String {
        self.field(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

/// Check presence and type of every declared field, in declared order.
///
/// JSON `null` counts as absent.
pub fn validate<C>(candidate: &C, fields: &[FieldSpec]) -> Result<(), ValidationError>
where
    C: Candidate + ?Sized,
{
    for field in fields {
        match candidate.field(field.name).filter(|v| !v.is_null()) {
            None if field.required => {
                return Err(ValidationError::MissingField(field.name.into()));
            }
            Some(value) if !field.expected.matches(value) => {
                return Err(ValidationError::IncorrectFieldType(field.name.into()));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Run the draft's `validator` rules and report the first failing field in
/// declared order.
///
/// A required field whose contents fail (an empty string) is reported as
/// missing, the same way an absent one is.
pub fn check_contents<T>(draft: &T, fields: &[FieldSpec]) -> Result<(), ValidationError>
where
    T: Validate,
{
    let errors = match draft.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };
    let failed = errors.field_errors();

    let position = |name: &str| fields.iter().position(|f| f.name == name);
    let first = failed
        .keys()
        .min_by_key(|name| position(name).unwrap_or(usize::MAX))
        .map(|name| name.to_string())
        .unwrap_or_default();

    let required = position(&first).is_some_and(|i| fields[i].required);
    Err(if required {
        ValidationError::MissingField(first)
    } else {
        ValidationError::IncorrectFieldValue(first)
    })
}
