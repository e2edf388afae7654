//! Shared validation helpers for inbound HTTP adapters.

use actix_web::web;
use serde_json::json;

use crate::domain::{BlogId, Error, RegistrationValidationError, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    MalformedJson,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::MalformedJson => "malformed_json",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

fn field_error(field: &str, message: impl Into<String>, code: &str) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    field_error(
        field,
        format!("missing required field: {field}"),
        ErrorCode::MissingField.as_str(),
    )
}

/// Unwrap an optional payload field, reporting `missing_field` when absent.
pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_blog_id(value: &str) -> Result<BlogId, Error> {
    BlogId::new(value).map_err(|_| {
        Error::invalid_request("id must be a valid UUID").with_details(json!({
            "field": "id",
            "value": value,
            "code": ErrorCode::InvalidUuid.as_str(),
        }))
    })
}

pub(crate) fn map_registration_error(err: RegistrationValidationError) -> Error {
    let (field, code) = match &err {
        RegistrationValidationError::EmptyPassword => ("password", "empty_password"),
        RegistrationValidationError::User(inner) => match inner {
            UserValidationError::EmptyUsername => ("username", "empty_username"),
            UserValidationError::UsernameTooShort { .. } => ("username", "username_too_short"),
            UserValidationError::EmptyDisplayName => ("name", "empty_name"),
            UserValidationError::DisplayNameTooLong { .. } => ("name", "name_too_long"),
            UserValidationError::EmptyId | UserValidationError::InvalidId => ("id", "invalid_id"),
        },
    };
    field_error(field, err.to_string(), code)
}

/// JSON extractor configuration that reports body errors as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("malformed JSON body: {err}"))
            .with_details(json!({ "code": ErrorCode::MalformedJson.as_str() }))
            .into()
    })
}
