use rust_i18n::t;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err(t!("login.email_required").to_string());
    }
    if password.is_empty() {
        return Err(t!("login.password_required").to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_filled_credentials() {
        assert!(validate_credentials("admin@example.com", "secret").is_ok());
    }

    #[test]
    fn rejects_blank_email() {
        let message = validate_credentials("   ", "secret").unwrap_err();
        assert_eq!(message, "Enter your email address");
    }

    #[test]
    fn rejects_empty_password() {
        assert!(validate_credentials("admin@example.com", "").is_err());
    }
}
