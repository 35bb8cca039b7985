use crate::features::verify::request::Channel;
use regex::Regex;

/// Keeps the first and last character of the local part.
pub fn mask_email(email: &str) -> String {
    let Ok(pattern) = Regex::new(r"^(?P<first>[^@])(?P<middle>[^@]*)(?P<last>[^@])@(?P<domain>.+)$")
    else {
        return email.to_string();
    };
    match pattern.captures(email) {
        Some(caps) => format!(
            "{}{}{}@{}",
            &caps["first"],
            "*".repeat(caps["middle"].chars().count()),
            &caps["last"],
            &caps["domain"]
        ),
        None => email.to_string(),
    }
}

/// Keeps the first three and last four digits.
pub fn mask_phone(phone: &str) -> String {
    let Ok(pattern) = Regex::new(r"^(?P<head>\+?\d{3})(?P<middle>\d+)(?P<tail>\d{4})$") else {
        return phone.to_string();
    };
    match pattern.captures(phone) {
        Some(caps) => format!(
            "{}{}{}",
            &caps["head"],
            "*".repeat(caps["middle"].len()),
            &caps["tail"]
        ),
        None => phone.to_string(),
    }
}

pub fn mask(channel: Channel, address: &str) -> String {
    match channel {
        Channel::Email => mask_email(address),
        Channel::Phone => mask_phone(address.rsplit('/').next().unwrap_or(address)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_email_local_part() {
        assert_eq!(mask_email("alice@example.com"), "a***e@example.com");
        assert_eq!(mask_email("ab@example.com"), "ab@example.com");
        assert_eq!(mask_email("a@b.com"), "a@b.com");
        assert_eq!(mask_email("not-an-email"), "not-an-email");
    }

    #[test]
    fn masks_phone_middle_digits() {
        assert_eq!(mask_phone("15512345678"), "155****5678");
        assert_eq!(mask_phone("+15512345678"), "+155****5678");
        assert_eq!(mask_phone("1234567"), "1234567");
    }

    #[test]
    fn phone_mask_ignores_organization_prefix() {
        assert_eq!(mask(Channel::Phone, "org1/15512345678"), "155****5678");
        assert_eq!(mask(Channel::Email, "alice@example.com"), "a***e@example.com");
    }
}
