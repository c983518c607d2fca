#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Why a submission was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    InvalidEmail,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            FormError::MissingFields => "Please fill in all fields.",
            FormError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

/// Shown when a submission passes validation.
pub const CONFIRMATION_MESSAGE: &str = "Thank you! We'll be in touch shortly.";

/// Trimmed, validated form contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Trims all three fields, then requires each to be non-empty and the email
/// to look like an address. Missing fields are reported before a bad email.
pub fn validate_contact(
    name: &str,
    email: &str,
    message: &str,
) -> Result<ContactMessage, FormError> {
    let name = name.trim();
    let email = email.trim();
    let message = message.trim();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }

    Ok(ContactMessage {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

/// Minimal address shape: an `@` preceded by a non-whitespace character and
/// followed, within the same non-whitespace run, by a `.` with text on both
/// sides.
pub fn is_valid_email(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' || i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        let mut run = 0usize;
        for j in i + 1..chars.len() {
            if chars[j].is_whitespace() {
                break;
            }
            if chars[j] == '.'
                && run > 0
                && chars.get(j + 1).map_or(false, |next| !next.is_whitespace())
            {
                return true;
            }
            run += 1;
        }
    }
    false
}
