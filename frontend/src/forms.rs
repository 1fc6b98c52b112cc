//! Validation and the stand-in submission path for the auth and contact forms.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("`{0}` doesn't look like an email address")]
    InvalidEmail(String),
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("please accept the terms to continue")]
    TermsNotAccepted,
}

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AuthRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub agree_terms: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// Password strength on a 0 to 4 scale: one point each for length, an
/// uppercase letter, a digit and a symbol.
pub fn password_strength(password: &str) -> usize {
    if password.is_empty() {
        return 0;
    }
    [
        password.chars().count() >= MIN_PASSWORD_LEN,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ]
    .iter()
    .filter(|&&hit| hit)
    .count()
}

pub fn strength_label(strength: usize) -> &'static str {
    match strength {
        0 | 1 => "Weak",
        2 => "Fair",
        3 => "Good",
        _ => "Strong",
    }
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

pub fn validate_email(email: &str) -> Result<(), FormError> {
    require(email, "Email")?;
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(FormError::InvalidEmail(email.to_string()))
    }
}

impl AuthRequest {
    pub fn validate(&self, mode: AuthMode) -> Result<(), FormError> {
        if mode == AuthMode::SignUp {
            require(&self.name, "Name")?;
        }
        validate_email(&self.email)?;
        require(&self.password, "Password")?;
        if mode == AuthMode::SignUp {
            if self.password.chars().count() < MIN_PASSWORD_LEN {
                return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
            }
            if !self.agree_terms {
                return Err(FormError::TermsNotAccepted);
            }
        }
        Ok(())
    }
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        require(&self.name, "Name")?;
        validate_email(&self.email)?;
        require(&self.message, "Message")
    }
}

/// JSON body that would have been posted; only ever logged.
pub fn preview_payload<T: Serialize>(request: &T) -> String {
    serde_json::to_string_pretty(request).unwrap_or_else(|err| format!("<unserializable: {}>", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_scores() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 0);
        assert_eq!(password_strength("abcdefgh"), 1);
        assert_eq!(password_strength("Abcdefgh"), 2);
        assert_eq!(password_strength("Abcdefg1"), 3);
        assert_eq!(password_strength("Abcdef1!"), 4);
        assert_eq!(strength_label(4), "Strong");
        assert_eq!(strength_label(0), "Weak");
    }

    #[test]
    fn emails() {
        assert!(validate_email("maya@mattr.ai").is_ok());
        assert!(validate_email(" maya@studio.co.uk ").is_ok());
        assert_eq!(validate_email(""), Err(FormError::Missing("Email")));
        assert!(matches!(validate_email("maya"), Err(FormError::InvalidEmail(_))));
        assert!(validate_email("maya@localhost").is_err());
        assert!(validate_email("@mattr.ai").is_err());
        assert!(validate_email("ma ya@mattr.ai").is_err());
        assert!(validate_email("maya@@mattr.ai").is_err());
        assert!(validate_email("maya@mattr.").is_err());
    }

    #[test]
    fn sign_up_needs_terms_and_length() {
        let mut request = AuthRequest {
            name: "Maya".into(),
            email: "maya@mattr.ai".into(),
            password: "short".into(),
            agree_terms: false,
        };
        assert!(request.validate(AuthMode::SignIn).is_ok());
        assert_eq!(request.validate(AuthMode::SignUp), Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN)));
        request.password = "long enough".into();
        assert_eq!(request.validate(AuthMode::SignUp), Err(FormError::TermsNotAccepted));
        request.agree_terms = true;
        assert!(request.validate(AuthMode::SignUp).is_ok());
        request.name.clear();
        assert_eq!(request.validate(AuthMode::SignUp), Err(FormError::Missing("Name")));
    }

    #[test]
    fn contact_requires_message() {
        let request = ContactRequest {
            name: "Jo".into(),
            email: "jo@example.com".into(),
            company: String::new(),
            message: "   ".into(),
        };
        assert_eq!(request.validate(), Err(FormError::Missing("Message")));
        assert_eq!(FormError::Missing("Message").to_string(), "Message is required");
    }

    #[test]
    fn payload_preview_never_includes_password() {
        let request = AuthRequest { password: "hunter22".into(), email: "a@b.co".into(), ..Default::default() };
        let json = preview_payload(&request);
        assert!(json.contains("a@b.co"));
        assert!(!json.contains("hunter22"));
    }
}
