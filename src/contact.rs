//! Contact Form Status
//!
//! Maps form endpoint responses to the status line under the form.

use serde::Deserialize;

use crate::error::SubmitError;

/// Status line shown under the contact form
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(SubmitError),
}

impl FormStatus {
    pub fn message(&self) -> String {
        match self {
            FormStatus::Idle => String::new(),
            FormStatus::Sending => "Sending...".to_string(),
            FormStatus::Sent => "Thanks! Your message has been sent.".to_string(),
            FormStatus::Failed(err) => failure_message(err),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormStatus::Failed(_))
    }
}

fn failure_message(err: &SubmitError) -> String {
    match err {
        SubmitError::NotConfigured => {
            "Form not configured. Please replace the Formspree ID in the form action.".to_string()
        }
        SubmitError::Rejected(messages) => messages.join(" "),
        SubmitError::Server(_) => "Oops, there was an error. Please try again later.".to_string(),
        SubmitError::Network(_) => {
            "Network error. If running locally, start a server (e.g., “npx http-server .”) and try again."
                .to_string()
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    errors: Vec<FieldError>,
}

#[derive(Debug, Deserialize)]
struct FieldError {
    #[serde(default)]
    message: String,
}

/// Classify a completed response from the form endpoint
pub fn classify_response(ok: bool, status: u16, body: Option<&str>) -> FormStatus {
    if ok {
        return FormStatus::Sent;
    }
    let messages: Vec<String> = body
        .and_then(|b| serde_json::from_str::<ErrorPayload>(b).ok())
        .map(|p| p.errors.into_iter().map(|e| e.message).collect())
        .unwrap_or_default();
    if messages.is_empty() {
        FormStatus::Failed(SubmitError::Server(status))
    } else {
        FormStatus::Failed(SubmitError::Rejected(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let status = classify_response(true, 200, None);
        assert_eq!(status, FormStatus::Sent);
        assert_eq!(status.message(), "Thanks! Your message has been sent.");
        assert!(!status.is_error());
    }

    #[test]
    fn test_field_errors_are_joined() {
        let body = r#"{"errors":[{"field":"email","message":"should be an email"},{"message":"is required"}]}"#;
        let status = classify_response(false, 422, Some(body));
        assert_eq!(
            status,
            FormStatus::Failed(SubmitError::Rejected(vec![
                "should be an email".into(),
                "is required".into()
            ]))
        );
        assert_eq!(status.message(), "should be an email is required");
        assert!(status.is_error());
    }

    #[test]
    fn test_empty_errors_is_generic() {
        let status = classify_response(false, 500, Some(r#"{"errors":[]}"#));
        assert_eq!(status.message(), "Oops, there was an error. Please try again later.");
    }

    #[test]
    fn test_unparseable_body_is_generic() {
        let status = classify_response(false, 502, Some("<html>bad gateway</html>"));
        assert_eq!(status, FormStatus::Failed(SubmitError::Server(502)));
        assert_eq!(classify_response(false, 500, None), FormStatus::Failed(SubmitError::Server(500)));
    }

    #[test]
    fn test_distinct_messages() {
        let not_configured = FormStatus::Failed(SubmitError::NotConfigured).message();
        let network = FormStatus::Failed(SubmitError::Network("offline".into())).message();
        let server = FormStatus::Failed(SubmitError::Server(500)).message();
        assert!(not_configured.starts_with("Form not configured"));
        assert!(network.starts_with("Network error"));
        assert_ne!(not_configured, server);
        assert_ne!(network, server);
        assert_eq!(FormStatus::Sending.message(), "Sending...");
        assert!(!FormStatus::Sending.is_error());
        assert_eq!(FormStatus::Idle.message(), "");
    }

    #[test]
    fn test_failed_status_survives_clone() {
        // Status lives in a signal, which hands out clones
        let status = FormStatus::Failed(SubmitError::Rejected(vec!["Email is invalid".into()]));
        let copy = status.clone();
        assert_eq!(copy, status);
        assert_eq!(copy.message(), "Email is invalid");
        assert!(copy.is_error());
    }
}
