//! Client-side contact form state.
//!
//! There is no submission transport; an accepted submission just points the
//! visitor at the direct email address.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Body,
}

/// Outcome of the last submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Invalid(Vec<Field>),
    Accepted,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub status: ContactStatus,
}

impl ContactForm {
    /// Apply an edit. Any edit clears a previous submission outcome.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Body => self.body = value,
        }
        self.status = ContactStatus::Idle;
    }

    /// Validate the current fields and record the outcome. Returns whether
    /// the submission was accepted. The subject is optional.
    pub fn submit(&mut self) -> bool {
        let invalid = self.invalid_fields();
        if invalid.is_empty() {
            self.status = ContactStatus::Accepted;
            true
        } else {
            self.status = ContactStatus::Invalid(invalid);
            false
        }
    }

    pub fn field_invalid(&self, field: Field) -> bool {
        matches!(&self.status, ContactStatus::Invalid(fields) if fields.contains(&field))
    }

    fn invalid_fields(&self) -> Vec<Field> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(Field::Name);
        }
        if !EMAIL.is_match(self.email.trim()) {
            invalid.push(Field::Email);
        }
        if self.body.trim().is_empty() {
            invalid.push(Field::Body);
        }
        invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Robin".to_string());
        form.edit(Field::Email, "robin@example.com".to_string());
        form.edit(Field::Body, "Hello there".to_string());
        form
    }

    #[test]
    fn accepts_a_complete_form() {
        let mut form = filled();
        assert!(form.submit());
        assert_eq!(form.status, ContactStatus::Accepted);
    }

    #[test]
    fn subject_is_optional() {
        let mut form = filled();
        form.edit(Field::Subject, String::new());
        assert!(form.submit());
    }

    #[test]
    fn flags_missing_and_malformed_fields() {
        let mut form = filled();
        form.edit(Field::Email, "not-an-address".to_string());
        form.edit(Field::Body, "   ".to_string());

        assert!(!form.submit());
        assert!(form.field_invalid(Field::Email));
        assert!(form.field_invalid(Field::Body));
        assert!(!form.field_invalid(Field::Name));
    }

    #[test]
    fn editing_clears_the_last_outcome() {
        let mut form = filled();
        form.edit(Field::Email, "broken".to_string());
        form.submit();
        assert!(form.field_invalid(Field::Email));

        form.edit(Field::Email, "robin@example.com".to_string());
        assert_eq!(form.status, ContactStatus::Idle);
    }
}
