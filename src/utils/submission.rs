use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use thiserror::Error;

use crate::utils::api::HttpSubmitter;

/// Why an email signup did not go through. The display text is shown to
/// the visitor under the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("We couldn't reach our server. Please try again later.")]
    Network(String),
    #[error("Signup failed (status {status}). Please try again later.")]
    Rejected { status: u16 },
}

/// Receives captured email addresses.
pub trait SubmissionHandler {
    fn submit(&self, email: String) -> LocalBoxFuture<'static, Result<(), SubmissionError>>;
}

/// Accepts everything and only writes a log line.
pub struct LogSubmitter;

impl SubmissionHandler for LogSubmitter {
    fn submit(&self, email: String) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        log::info!("Captured launch signup for {}", mask_email(&email));
        future::ready(Ok(())).boxed_local()
    }
}

/// Shared handle passed down as a component property.
#[derive(Clone)]
pub struct Submitter(Rc<dyn SubmissionHandler>);

impl Submitter {
    pub fn new(handler: impl SubmissionHandler + 'static) -> Self {
        Self(Rc::new(handler))
    }

    /// HTTP when `SUBSCRIBE_URL` was set at build time, the log sink otherwise.
    pub fn from_config() -> Self {
        match HttpSubmitter::from_config() {
            Some(http) => Self::new(http),
            None => {
                log::info!("SUBSCRIBE_URL not set, signups will only be logged");
                Self::new(LogSubmitter)
            }
        }
    }

    pub fn submit(&self, email: String) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        self.0.submit(email)
    }
}

impl PartialEq for Submitter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Loose `local@domain` check matching what a browser email input accepts.
pub fn validate_email(raw: &str) -> Result<String, SubmissionError> {
    let email = raw.trim();
    let (local, domain) = email.split_once('@').ok_or(SubmissionError::InvalidEmail)?;
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err(SubmissionError::InvalidEmail);
    }
    Ok(email.to_string())
}

/// Keeps addresses out of logs.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((_, domain)) => format!("***@{}", domain),
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(validate_email("  ana@cafcohome.com ").unwrap(), "ana@cafcohome.com");
        assert!(validate_email("root@localhost").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "   ", "no-at-sign", "@domain.com", "user@", "a@b@c", "sp ace@x.com", "u@.com"] {
            assert_eq!(validate_email(bad), Err(SubmissionError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn masking_hides_local_part() {
        assert_eq!(mask_email("ana@cafcohome.com"), "***@cafcohome.com");
        assert_eq!(mask_email("garbage"), "***");
    }

    #[test]
    fn errors_read_as_user_messages() {
        assert_eq!(
            SubmissionError::Rejected { status: 503 }.to_string(),
            "Signup failed (status 503). Please try again later."
        );
        assert!(!SubmissionError::Network("dns".into()).to_string().contains("dns"));
    }

    #[test]
    fn log_submitter_always_succeeds() {
        let submitter = Submitter::new(LogSubmitter);
        let result = futures::executor::block_on(submitter.submit("ana@cafcohome.com".into()));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn submitters_compare_by_identity() {
        let a = Submitter::new(LogSubmitter);
        let b = Submitter::new(LogSubmitter);
        assert!(a == a.clone());
        assert!(a != b);
    }
}
