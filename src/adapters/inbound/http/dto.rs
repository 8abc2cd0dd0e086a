use serde::{Deserialize, Serialize};

use crate::domain::errors::{FieldViolation, ValidationErrors};

/// Message returned with every rejected form
pub const INVALID_FORM_MESSAGE: &str = "Invalid form data";

/// Message returned for storage and unexpected failures; detail stays in the logs
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// DTO for a contact form as sent by the site or the CLI.
///
/// The server reads the body as untyped JSON and validates it itself, so
/// this type is only used by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequestDto {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

/// DTO for a single field violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolationDto {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// DTO for every response of `POST /api/contact`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponseDto {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolationDto>>,
}

/// DTO for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
}

// Conversion implementations

impl From<&FieldViolation> for FieldViolationDto {
    fn from(violation: &FieldViolation) -> Self {
        FieldViolationDto {
            field: violation.field.as_str().to_string(),
            code: violation.code.as_str().to_string(),
            message: violation.message.clone(),
        }
    }
}

impl ContactResponseDto {
    pub fn accepted(message: &str) -> Self {
        ContactResponseDto {
            success: true,
            message: message.to_string(),
            errors: None,
        }
    }

    pub fn invalid(errors: &ValidationErrors) -> Self {
        ContactResponseDto {
            success: false,
            message: INVALID_FORM_MESSAGE.to_string(),
            errors: Some(errors.violations().iter().map(Into::into).collect()),
        }
    }

    pub fn failure() -> Self {
        ContactResponseDto {
            success: false,
            message: GENERIC_FAILURE_MESSAGE.to_string(),
            errors: None,
        }
    }
}

impl HealthResponseDto {
    pub fn ok() -> Self {
        HealthResponseDto {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{ContactField, ViolationCode};
    use serde_json::json;

    #[test]
    fn test_accepted_omits_errors() {
        let body = serde_json::to_value(ContactResponseDto::accepted("Thanks!")).unwrap();
        assert_eq!(body, json!({ "success": true, "message": "Thanks!" }));
    }

    #[test]
    fn test_invalid_lists_violations() {
        let errors = ValidationErrors::new(vec![FieldViolation::new(
            ContactField::Email,
            ViolationCode::InvalidString,
            "Valid email is required",
        )]);

        let body = serde_json::to_value(ContactResponseDto::invalid(&errors)).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Invalid form data",
                "errors": [{
                    "field": "email",
                    "code": "invalid_string",
                    "message": "Valid email is required"
                }]
            })
        );
    }

    #[test]
    fn test_failure_is_generic() {
        let body = serde_json::to_value(ContactResponseDto::failure()).unwrap();
        assert_eq!(
            body,
            json!({ "success": false, "message": GENERIC_FAILURE_MESSAGE })
        );
    }

    #[test]
    fn test_request_without_company() {
        let dto: ContactRequestDto = serde_json::from_value(json!({
            "name": "Jane",
            "email": "jane@example.com",
            "message": "Hello there"
        }))
        .unwrap();
        assert_eq!(dto.company, None);
        assert!(serde_json::to_value(&dto).unwrap().get("company").is_none());
    }
}
