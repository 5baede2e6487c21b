use regex::Regex;

use super::models::RegisterRequest;
use crate::common::{ValidationResult, Validator};

/// Loose email shape check; deliverability is the mail server's problem.
fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

/// ISO calendar date, YYYY-MM-DD
fn is_valid_date(value: &str) -> bool {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

impl Validator<RegisterRequest> for RegisterRequest {
    fn validate(&self, data: &RegisterRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Name is required");
        }

        if data.name.len() > 100 {
            result.add_error("name", "Name must not exceed 100 characters");
        }

        if !is_valid_email(data.email.trim()) {
            result.add_error("email", "A valid email address is required");
        }

        if data.password.is_empty() {
            result.add_error("password", "Password is required");
        }

        // bcrypt ignores input beyond 72 bytes
        if data.password.len() > 72 {
            result.add_error("password", "Password must not exceed 72 characters");
        }

        if let Some(dob) = &data.dob {
            if !is_valid_date(dob) {
                result.add_error("dob", "Date of birth must be in YYYY-MM-DD format");
            }
        }

        result
    }
}
