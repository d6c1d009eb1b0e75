//! The post submission form and its field-level errors.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Raw form data submitted when creating a post.
///
/// Deserialized from the url-encoded request body. Validation turns it
/// either into a post or into a [`FormErrors`] the template renders
/// next to the fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PostForm {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters."))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty."))]
    pub content: String,
}

impl PostForm {
    /// Validate the submission, collecting per-field messages on failure.
    pub fn check(&self) -> Result<(), FormErrors> {
        self.validate().map_err(FormErrors::from)
    }
}

/// Per-field validation messages, in field declaration order.
#[derive(Debug, Clone, Default)]
pub struct FormErrors {
    pub title: Vec<String>,
    pub content: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = Self::default();
        for (field, errs) in errors.field_errors() {
            let messages = errs.iter().map(|e| {
                e.message
                    .clone()
                    .map(|m| m.into_owned())
                    .unwrap_or_else(|| "Invalid value.".to_string())
            });
            match &*field {
                "title" => out.title.extend(messages),
                "content" => out.content.extend(messages),
                _ => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_form_passes() {
        let form = PostForm {
            title: "Hello".into(),
            content: "World".into(),
        };
        assert!(form.check().is_ok());
    }

    #[test]
    fn empty_fields_collect_messages() {
        let form = PostForm::default();
        let errors = form.check().unwrap_err();
        assert_eq!(errors.title.len(), 1);
        assert_eq!(errors.content.len(), 1);
        assert!(!errors.is_empty());
    }

    #[test]
    fn overlong_title_is_rejected() {
        let form = PostForm {
            title: "x".repeat(201),
            content: "body".into(),
        };
        let errors = form.check().unwrap_err();
        assert!(!errors.title.is_empty());
        assert!(errors.content.is_empty());
    }
}
