//! Passenger validation rules
//!
//! # Validation Rules
//!
//! - Name is required
//! - Flight number is required and must be an airline designator
//!   (two characters, at least one a letter) followed by 1-4 digits
//! - Contact is required; a contact that looks like neither a phone number
//!   nor an e-mail address produces a warning, not an error

use crate::passenger::{normalize_flight_no, NewPassenger};

/// Result of passenger validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the passenger is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for passenger registrations
pub struct PassengerValidator;

impl PassengerValidator {
    /// Validates registration details
    pub fn validate(request: &NewPassenger) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if request.name.trim().is_empty() {
            result.add_error("Passenger name is required");
        }

        Self::validate_flight_no(&request.flight_no, &mut result);
        Self::validate_contact(&request.contact, &mut result);

        result
    }

    fn validate_flight_no(raw: &str, result: &mut ValidationResult) {
        let flight_no = normalize_flight_no(raw);
        if flight_no.is_empty() {
            result.add_error("Flight number is required");
            return;
        }
        if !is_flight_number(&flight_no) {
            result.add_error(format!("Invalid flight number: {}", raw.trim()));
        }
    }

    fn validate_contact(raw: &str, result: &mut ValidationResult) {
        let contact = raw.trim();
        if contact.is_empty() {
            result.add_error("Contact is required");
            return;
        }
        if !is_phone_number(contact) && !is_email(contact) {
            result.add_warning(format!("Contact is neither a phone number nor an e-mail: {}", contact));
        }
    }
}

fn is_flight_number(flight_no: &str) -> bool {
    let chars: Vec<char> = flight_no.chars().collect();
    if chars.len() < 3 || chars.len() > 6 {
        return false;
    }
    let (designator, number) = chars.split_at(2);
    designator.iter().all(|c| c.is_ascii_alphanumeric())
        && designator.iter().any(|c| c.is_ascii_alphabetic())
        && number.iter().all(|c| c.is_ascii_digit())
}

fn is_phone_number(contact: &str) -> bool {
    let body = contact.strip_prefix('+').unwrap_or(contact);
    if !body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (7..=15).contains(&digits)
}

fn is_email(contact: &str) -> bool {
    match contact.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
