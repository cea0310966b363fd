//! Synchronous field validators for the registration form. Each returns the
//! inline error text shown under the field.

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    Ok(())
}

/// E.164-shaped phone check: leading `+`, 8 to 15 digits, country code not
/// starting with 0. Spaces, dashes and parentheses are ignored so formatted
/// input like `"+971 50 000 0000"` passes.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let compact: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if compact.is_empty() {
        return Err("Phone number is required".to_string());
    }

    let digits = match compact.strip_prefix('+') {
        Some(rest) => rest,
        None => return Err("Please enter a valid phone number".to_string()),
    };

    let well_formed = digits.chars().all(|c| c.is_ascii_digit())
        && (8..=15).contains(&digits.len())
        && !digits.starts_with('0');

    if !well_formed {
        return Err("Please enter a valid phone number".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_non_blank() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn phone_accepts_e164() {
        assert!(validate_phone("+971500000000").is_ok());
        assert!(validate_phone("+971 50 000 0000").is_ok());
        assert!(validate_phone("+14155552671").is_ok());
    }

    #[test]
    fn phone_rejects_malformed_numbers() {
        assert!(validate_phone("").is_err());
        assert!(validate_phone("971500000000").is_err()); // no leading +
        assert!(validate_phone("+0715000000").is_err()); // zero country code
        assert!(validate_phone("+97150").is_err()); // too short
        assert!(validate_phone("+9715000000000000").is_err()); // too long
        assert!(validate_phone("+97150ab0000").is_err()); // letters
    }

    #[test]
    fn password_requires_six_characters() {
        assert!(validate_password("").is_err());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }
}
