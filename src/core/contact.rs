//! Contact enquiries and where they are kept.

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Assignment kinds offered on the enquiry form. Unlike the calculator this
/// list has an open-ended `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnquiryType {
    Essay,
    Report,
    Dissertation,
    Coursework,
    Presentation,
    Other,
}

impl Display for EnquiryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EnquiryType::Essay => "Essay",
                EnquiryType::Report => "Report",
                EnquiryType::Dissertation => "Dissertation",
                EnquiryType::Coursework => "Coursework",
                EnquiryType::Presentation => "Presentation",
                EnquiryType::Other => "Other",
            }
        )
    }
}

impl FromStr for EnquiryType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "essay" => Ok(EnquiryType::Essay),
            "report" => Ok(EnquiryType::Report),
            "dissertation" => Ok(EnquiryType::Dissertation),
            "coursework" => Ok(EnquiryType::Coursework),
            "presentation" => Ok(EnquiryType::Presentation),
            "other" => Ok(EnquiryType::Other),
            _ => Err(anyhow!("Invalid assignment type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub assignment_type: Option<EnquiryType>,
    /// Free text, as typed on the form ("about 3000").
    pub word_count: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub message: String,
}

impl ContactForm {
    /// Checks required fields and the e-mail address shape.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            bail!("Missing required field(s): {}", missing.join(", "));
        }

        if !is_plausible_email(self.email.trim()) {
            bail!("Invalid email address: {}", self.email.trim());
        }
        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
    pub form: ContactForm,
}

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Stores a validated form and returns its reference.
    async fn save(&self, form: &ContactForm) -> Result<String>;
    /// All stored submissions, oldest first.
    async fn list(&self) -> Result<Vec<StoredSubmission>>;
}

/// Formats a store sequence number as a submission reference.
pub fn reference_for(sequence: u64) -> String {
    format!("Q-{sequence:06}")
}
