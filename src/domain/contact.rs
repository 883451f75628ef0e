use validator::ValidateEmail;

use crate::constants::MOBILE_NO_PATTERN;

#[derive(Debug, Clone)]
pub struct EmailObject(String);

impl EmailObject {
    pub fn parse(s: String) -> Result<EmailObject, String> {
        if s.validate_email() {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid email address.", s))
        }
    }
}

impl AsRef<str> for EmailObject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Local mobile number, `0xxxxxxxxx` or `+84xxxxxxxxx` form.
#[derive(Debug, Clone)]
pub struct PhoneObject(String);

impl PhoneObject {
    pub fn parse(s: String) -> Result<PhoneObject, String> {
        if MOBILE_NO_PATTERN.is_match(s.trim()) {
            Ok(Self(s.trim().to_string()))
        } else {
            Err(format!("{} is not a valid mobile number.", s))
        }
    }
}

impl AsRef<str> for PhoneObject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {

    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use quickcheck_macros::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::domain::{EmailObject, PhoneObject};

    #[derive(Debug, Clone)]
    struct ValidEmailFixture(pub String);

    impl quickcheck::Arbitrary for ValidEmailFixture {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
            let email = SafeEmail().fake_with_rng(&mut rng);

            Self(email)
        }
    }

    #[quickcheck]
    fn valid_emails_are_parsed_successfully(valid_email: ValidEmailFixture) -> bool {
        EmailObject::parse(valid_email.0).is_ok()
    }

    #[test]
    fn email_missing_at_symbol_is_rejected() {
        assert!(EmailObject::parse("customer.example.com".to_string()).is_err());
    }

    #[test]
    fn empty_email_is_rejected() {
        assert!(EmailObject::parse("".to_string()).is_err());
    }

    #[test]
    fn local_mobile_numbers_are_parsed_successfully() {
        for number in ["0912345678", "0351234567", "84981234567", "+84981234567"] {
            assert!(
                PhoneObject::parse(number.to_string()).is_ok(),
                "{} should be valid",
                number
            );
        }
    }

    #[test]
    fn malformed_mobile_numbers_are_rejected() {
        for number in ["", "12345", "0212345678", "091234567", "09123456789", "abc"] {
            assert!(
                PhoneObject::parse(number.to_string()).is_err(),
                "{} should be invalid",
                number
            );
        }
    }
}
