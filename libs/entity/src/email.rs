use once_cell::sync::Lazy;
use regex::Regex;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

// dot-atom local part @ hostname made of DNS labels, ASCII only
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$",
    )
    .expect("email pattern compiles")
});

/// Checks an address against the booking email rules.
///
/// Cheap length checks run before the pattern, and the DNS limits run after
/// it, so the first failing rule short-circuits. Never panics on input.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }

    if !EMAIL_RE.is_match(email) {
        return false;
    }

    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    if local.len() > MAX_LOCAL_LEN {
        return false;
    }

    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    if !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| label.len() <= MAX_LABEL_LEN)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(validate_email("user@domain.com"));
        assert!(validate_email("user+tag@mail.sub.domain.co.uk"));
        assert!(validate_email("first.last@example.org"));
        assert!(validate_email("USER@EXAMPLE.COM"));
        assert!(validate_email("o'brien{x}@my-host.io"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!validate_email(""));
        assert!(!validate_email("plainaddress"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("@domain.com"));
        assert!(!validate_email("user..name@domain.com"));
        assert!(!validate_email(".user@domain.com"));
        assert!(!validate_email("user name@domain.com"));
        assert!(!validate_email("user@domain..com"));
    }

    #[test]
    fn test_rejects_hyphen_at_domain_edges() {
        assert!(!validate_email("user@-bad-.com"));
        assert!(!validate_email("user@bad-.com"));
        assert!(!validate_email("user@domain.com-"));
    }

    #[test]
    fn test_rejects_non_ascii_letters() {
        // U+017F and U+212A case-fold to `s` and `k`
        assert!(!validate_email("\u{17F}@domain.com"));
        assert!(!validate_email("user@\u{212A}.com"));
        assert!(!validate_email("\u{212A}elvin@ex.com"));
        assert!(!validate_email("jos\u{E9}@domain.com"));
    }

    #[test]
    fn test_requires_dot_in_domain() {
        assert!(!validate_email("user@localhost"));
    }

    #[test]
    fn test_length_limits() {
        // Arrange
        let local_64 = format!("{}@domain.com", "a".repeat(64));
        let local_65 = format!("{}@domain.com", "a".repeat(65));
        let label_63 = format!("user@{}.com", "b".repeat(63));
        let label_64 = format!("user@{}.com", "b".repeat(64));
        let total_255 = format!(
            "user@{}.{}.{}.{}.com",
            "c".repeat(60),
            "d".repeat(60),
            "e".repeat(60),
            "f".repeat(63)
        );

        // Act & Assert
        assert!(validate_email(&local_64));
        assert!(!validate_email(&local_65));
        assert!(validate_email(&label_63));
        assert!(!validate_email(&label_64));
        assert_eq!(total_255.len(), 255);
        assert!(!validate_email(&total_255));
    }
}
