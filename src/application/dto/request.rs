//! Request DTOs
//!
//! Candidate payloads for API request bodies. Every declared field is kept as
//! a raw JSON value so presence and type can be checked in a fixed order
//! before any typed domain value is built.

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::{check_contents, validate, Candidate, FieldSpec, FieldType, ValidationError};

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// Only a JSON object deserializes; arrays and scalars are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct UserPayload {
    pub username: Option<Value>,
}

impl From<Map<String, Value>> for UserPayload {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            username: body.remove("username"),
        }
    }
}

impl UserPayload {
    pub const FIELDS: &'static [FieldSpec] = &[FieldSpec::required("username", FieldType::String)];

    /// Validate and convert into a typed draft.
    pub fn into_draft(self) -> Result<UserDraft, ValidationError> {
        validate(&self, Self::FIELDS)?;

        let draft = UserDraft {
            username: self.string("username"),
        };
        check_contents(&draft, Self::FIELDS)?;

        Ok(draft)
    }
}

impl Candidate for UserPayload {
    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "username" => self.username.as_ref(),
            _ => None,
        }
    }
}

/// User fields that passed presence, type and content checks.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct UserDraft {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
}

/// Body of `POST /messages`.
///
/// Only a JSON object deserializes; arrays and scalars are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct MessagePayload {
    pub from: Option<Value>,
    pub to: Option<Value>,
    pub text: Option<Value>,
}

impl From<Map<String, Value>> for MessagePayload {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            from: body.remove("from"),
            to: body.remove("to"),
            text: body.remove("text"),
        }
    }
}

impl MessagePayload {
    /// Declared order decides which error a multiply-invalid payload reports.
    pub const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("from", FieldType::String),
        FieldSpec::required("to", FieldType::String),
        FieldSpec::required("text", FieldType::String),
    ];

    /// Validate and convert into a typed draft.
    ///
    /// The user references are not resolved here.
    pub fn into_draft(self) -> Result<MessageDraft, ValidationError> {
        validate(&self, Self::FIELDS)?;

        let draft = MessageDraft {
            from: self.string("from"),
            to: self.string("to"),
            text: self.string("text"),
        };
        check_contents(&draft, Self::FIELDS)?;

        Ok(draft)
    }
}

impl Candidate for MessagePayload {
    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "from" => self.from.as_ref(),
            "to" => self.to.as_ref(),
            "text" => self.text.as_ref(),
            _ => None,
        }
    }
}

/// Message fields that passed presence, type and content checks.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct MessageDraft {
    #[validate(length(min = 1, message = "Sender must not be empty"))]
    pub from: String,

    #[validate(length(min = 1, message = "Recipient must not be empty"))]
    pub to: String,

    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,
}

/// Query string of `GET /messages`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageFilterQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl MessageFilterQuery {
    /// Empty values (`?from=`) are treated as absent.
    pub fn into_filter(self) -> crate::domain::MessageFilter {
        crate::domain::MessageFilter {
            from: self.from.filter(|s| !s.is_empty()),
            to: self.to.filter(|s| !s.is_empty()),
        }
    }
}
