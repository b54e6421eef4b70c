//! The signup form state machine. Owns every form field, drives validation,
//! and decides when a submission may be issued. The machine is plain Rust so
//! the whole flow can be exercised without a browser; the banner component
//! translates DOM events into these transitions.

use newsletter_common::signup::SignupRequest;

use crate::domain::email::{EmailError, SubscriberEmail};
use crate::domain::regions;

pub const EMAIL_REQUIRED: &str = "Please enter your email address.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const COUNTRY_REQUIRED: &str = "Country is required.";
pub const SUBMIT_FAILED: &str = "Something went wrong. Please try again later.";

/// Whether the email text has been checked since it was last edited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EmailValidation {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

/// Per field messages, cleared the moment the field is edited again.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub country: Option<&'static str>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Terminal for the session: the form is replaced by a confirmation.
    Succeeded,
    /// Interactive again, with the generic retry message on display.
    Failed,
}

/// How a submission attempt ended. Success is strictly status 201; every
/// other status, 2xx included, counts as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Responded(u16),
    TransportFailed,
}

#[derive(Debug, Default)]
pub struct SignupForm {
    email: String,
    email_validation: EmailValidation,
    errors: FieldErrors,
    country: String,
    province: String,
    status: SubmitStatus,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The email field changed: drop any email error, forget the previous
    /// validation verdict, and store the new text.
    pub fn edit_email(&mut self, text: String) {
        self.errors.email = None;
        self.email_validation = EmailValidation::Unchecked;
        self.email = text;
        self.clear_failed_submission();
    }

    /// The email field lost focus: validate what was typed.
    pub fn blur_email(&mut self) {
        self.validate_email();
    }

    pub fn select_country(&mut self, country: String) {
        self.errors.country = None;
        self.country = country;
        // Province options are country dependent, a stale pick makes no sense.
        self.province.clear();
        self.clear_failed_submission();
    }

    pub fn select_province(&mut self, province: String) {
        self.province = province;
    }

    /// Gate a submission attempt. Returns the request to put on the wire once
    /// every check passes, and flips the machine to `Submitting`; returns
    /// `None` when the attempt is halted, with the blocking field marked.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if matches!(self.status, SubmitStatus::Submitting | SubmitStatus::Succeeded) {
            return None;
        }

        if self.email_validation != EmailValidation::Valid {
            self.validate_email();
            return None;
        }

        if self.country.is_empty() {
            self.errors.country = Some(COUNTRY_REQUIRED);
            return None;
        }

        self.status = SubmitStatus::Submitting;
        let province = if self.province.is_empty() {
            None
        } else {
            Some(self.province.clone())
        };
        Some(SignupRequest {
            email: self.email.clone(),
            country: self.country.clone(),
            province,
        })
    }

    /// Record how the in-flight submission ended. Runs on success and on
    /// failure alike, so `Submitting` is always left behind.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.status = match outcome {
            SubmitOutcome::Responded(201) => SubmitStatus::Succeeded,
            SubmitOutcome::Responded(_) | SubmitOutcome::TransportFailed => SubmitStatus::Failed,
        };
    }

    /// The submit control is inert while a submission is in flight, after the
    /// terminal success, and until the email text is present and validated.
    pub fn submit_disabled(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting | SubmitStatus::Succeeded)
            || self.email.is_empty()
            || self.email_validation != EmailValidation::Valid
    }

    /// The sub-list to offer for the current country, `None` hides the
    /// province selector entirely.
    pub fn province_options(&self) -> Option<&'static [&'static str]> {
        if self.country.is_empty() {
            return None;
        }
        regions::provinces_for(&self.country)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn email_validation(&self) -> EmailValidation {
        self.email_validation
    }

    pub fn email_error(&self) -> Option<&'static str> {
        self.errors.email
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn country_error(&self) -> Option<&'static str> {
        self.errors.country
    }

    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn succeeded(&self) -> bool {
        self.status == SubmitStatus::Succeeded
    }

    pub fn submit_failed(&self) -> bool {
        self.status == SubmitStatus::Failed
    }

    fn validate_email(&mut self) {
        match SubscriberEmail::parse(&self.email) {
            Ok(_) => {
                self.email_validation = EmailValidation::Valid;
                self.errors.email = None;
            }
            Err(EmailError::Empty) => {
                self.email_validation = EmailValidation::Invalid;
                self.errors.email = Some(EMAIL_REQUIRED);
            }
            Err(EmailError::Malformed) => {
                self.email_validation = EmailValidation::Invalid;
                self.errors.email = Some(EMAIL_INVALID);
            }
        }
    }

    // A failed attempt stops being advertised as soon as the user edits the
    // form again; the next submission starts from a clean slate.
    fn clear_failed_submission(&mut self) {
        if self.status == SubmitStatus::Failed {
            self.status = SubmitStatus::Idle;
        }
    }
}
