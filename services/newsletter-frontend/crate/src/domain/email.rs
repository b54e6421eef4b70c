use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately stricter than a general purpose email check: the top level
// domain is capped at four letters.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("valid email pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// The input is empty, or whitespace only.
    Empty,
    /// The input does not match the accepted address shape.
    Malformed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: &str) -> Result<SubscriberEmail, EmailError> {
        if s.trim().is_empty() {
            Err(EmailError::Empty)
        } else if EMAIL_PATTERN.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(EmailError::Malformed)
        }
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubscriberEmail::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;
    use speculoos::prelude::*;

    use super::{EmailError, SubscriberEmail};

    #[test]
    fn empty_string_should_be_rejected() {
        assert_that(&SubscriberEmail::parse("")).is_err_containing(EmailError::Empty);
    }

    #[test]
    fn whitespace_only_should_be_rejected() {
        assert_that(&SubscriberEmail::parse("   ")).is_err_containing(EmailError::Empty);
    }

    #[test]
    fn email_missing_at_symbol_should_be_rejected() {
        assert_that(&SubscriberEmail::parse("ursuladomain.com"))
            .is_err_containing(EmailError::Malformed);
    }

    #[test]
    fn email_missing_subject_should_be_rejected() {
        assert_that(&SubscriberEmail::parse("@domain.com"))
            .is_err_containing(EmailError::Malformed);
    }

    #[test]
    fn email_missing_domain_suffix_should_be_rejected() {
        assert_that(&SubscriberEmail::parse("bad@")).is_err_containing(EmailError::Malformed);
    }

    #[test]
    fn one_letter_suffix_should_be_rejected() {
        assert_that(&SubscriberEmail::parse("a@b.c")).is_err_containing(EmailError::Malformed);
    }

    #[test]
    fn five_letter_suffix_should_be_rejected() {
        assert_that(&SubscriberEmail::parse("curator@example.museum"))
            .is_err_containing(EmailError::Malformed);
    }

    #[test]
    fn plain_address_should_be_accepted() {
        let email = SubscriberEmail::parse("a@b.com").expect("valid address");
        assert_that(&email.as_ref()).is_equal_to("a@b.com");
    }

    #[test]
    fn dots_dashes_and_underscores_should_be_accepted() {
        assert_that(&SubscriberEmail::parse("first.last_name-x@mail-host.example.org")).is_ok();
    }

    #[derive(Debug, Clone)]
    struct ValidEmailFixture(pub String);

    impl quickcheck::Arbitrary for ValidEmailFixture {
        fn arbitrary(_g: &mut quickcheck::Gen) -> Self {
            let email = SafeEmail().fake();
            Self(email)
        }
    }

    #[quickcheck_macros::quickcheck]
    fn valid_emails_should_be_parsed_successfully(valid_email: ValidEmailFixture) -> bool {
        SubscriberEmail::parse(&valid_email.0).is_ok()
    }
}
