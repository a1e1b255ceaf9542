use fnv::FnvHashMap;
use regex::Regex;
use std::time::Duration;

use super::constants::{
    MESSAGE_MIN_CHARS, SEND_SUCCESS_MESSAGE, SIMULATED_SEND_DELAY, SUCCESS_MESSAGE_TTL,
};

const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The `name`/`id` attribute used by the form inputs.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormRecord {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

pub type FieldErrors = FnvHashMap<Field, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationRules {
    /// Whether the form collects (and requires) an email address.
    pub collect_email: bool,
    /// Minimum trimmed message length in characters; `None` disables it.
    pub message_min_chars: Option<usize>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            collect_email: true,
            message_min_chars: Some(MESSAGE_MIN_CHARS),
        }
    }
}

pub struct ContactValidator {
    rules: ValidationRules,
    email: Regex,
}

impl ContactValidator {
    pub fn new(rules: ValidationRules) -> anyhow::Result<Self> {
        Ok(Self {
            rules,
            email: Regex::new(EMAIL_PATTERN)?,
        })
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    /// Check every field independently. An empty map means the record may
    /// be submitted.
    pub fn validate(&self, record: &ContactFormRecord) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if record.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required".to_string());
        }

        if self.rules.collect_email {
            // Only the presence check trims; the pattern sees the raw value.
            if record.email.trim().is_empty() {
                errors.insert(Field::Email, "Email is required".to_string());
            } else if !self.is_valid_email(&record.email) {
                errors.insert(Field::Email, "Invalid email address".to_string());
            }
        }

        if record.subject.trim().is_empty() {
            errors.insert(Field::Subject, "Subject is required".to_string());
        }

        let message = record.message.trim();
        if message.is_empty() {
            errors.insert(Field::Message, "Message is required".to_string());
        } else if let Some(min) = self.rules.message_min_chars {
            if message.chars().count() < min {
                errors.insert(
                    Field::Message,
                    format!("Message must be at least {min} characters"),
                );
            }
        }

        errors
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitTiming {
    pub send_delay: Duration,
    pub success_ttl: Duration,
}

impl Default for SubmitTiming {
    fn default() -> Self {
        Self {
            send_delay: SIMULATED_SEND_DELAY,
            success_ttl: SUCCESS_MESSAGE_TTL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are stored on the form.
    Rejected,
    /// A send is already in flight.
    Busy,
    /// Accepted; the caller should call `finish_send` after the send delay.
    Sending,
}

/// Contact form state: field values, inline errors and the simulated send.
pub struct ContactForm {
    validator: ContactValidator,
    record: ContactFormRecord,
    errors: FieldErrors,
    phase: SubmitPhase,
    result_message: Option<&'static str>,
}

impl ContactForm {
    pub fn new(rules: ValidationRules) -> anyhow::Result<Self> {
        Ok(Self {
            validator: ContactValidator::new(rules)?,
            record: ContactFormRecord::default(),
            errors: FieldErrors::default(),
            phase: SubmitPhase::Idle,
            result_message: None,
        })
    }

    pub fn record(&self) -> &ContactFormRecord {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn result_message(&self) -> Option<&'static str> {
        self.result_message
    }

    /// Store a new value. Clears that field's error only; nothing is
    /// re-validated until the next submit.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
        self.errors.remove(&field);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase == SubmitPhase::Sending {
            return SubmitOutcome::Busy;
        }
        self.errors = self.validator.validate(&self.record);
        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected;
        }
        self.phase = SubmitPhase::Sending;
        SubmitOutcome::Sending
    }

    /// Complete the simulated send: show the success message and clear the
    /// fields. Ignored unless a send is in flight.
    pub fn finish_send(&mut self) -> bool {
        if self.phase != SubmitPhase::Sending {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        self.record = ContactFormRecord::default();
        self.result_message = Some(SEND_SUCCESS_MESSAGE);
        true
    }

    pub fn clear_result(&mut self) {
        self.result_message = None;
    }
}
