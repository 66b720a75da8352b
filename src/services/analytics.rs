use crate::config::AnalyticsSettings;
use crate::models::{
    AgeGroup, Gender, Interest, MinistryRecord, Situation, StateInLife, VisitorAnswers,
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// The submission endpoint rejects oversized payloads wholesale, so the
// same cap is enforced before sending
const MAX_MINISTRY_NAME_CHARS: usize = 100;

/// Errors that can occur when recording quiz submissions
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid submission: {0}")]
    InvalidSubmission(#[from] validator::ValidationErrors),
}

/// The quiz answers portion of a submission
///
/// A declined gender question goes over the wire as an absent field, which
/// the endpoint treats the same as unanswered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionAnswers {
    pub age: AgeGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// One completed quiz, ready to submit
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmissionRecord {
    pub answers: SubmissionAnswers,
    #[validate(length(max = 10))]
    pub states: Vec<StateInLife>,
    #[validate(length(max = 10))]
    pub interests: Vec<Interest>,
    #[validate(length(max = 10))]
    #[serde(rename = "situation")]
    pub situations: Vec<Situation>,
    #[validate(length(max = 20), custom(function = "validate_ministry_names"))]
    pub ministries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub session_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

fn validate_ministry_names(names: &[String]) -> Result<(), ValidationError> {
    for name in names {
        if name.chars().count() > MAX_MINISTRY_NAME_CHARS {
            return Err(ValidationError::new("ministry_name_too_long"));
        }
    }
    Ok(())
}

impl SubmissionRecord {
    /// Build a submission from the visitor's answers and the list shown
    /// to them
    ///
    /// Guidance entries are dropped; an empty ministries list already tells
    /// the dashboards the quiz came up empty.
    pub fn new(answers: &VisitorAnswers, recommendations: &[MinistryRecord]) -> Self {
        let ministries = recommendations
            .iter()
            .filter(|m| !m.is_placeholder())
            .map(|m| m.name.clone())
            .collect();

        Self {
            answers: SubmissionAnswers {
                age: answers.age_group,
                gender: answers.gender.as_gender(),
            },
            states: answers.states.clone(),
            interests: answers.interests.clone(),
            situations: answers.situations.clone(),
            ministries,
            client_id: None,
            session_id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// Attach a stable visitor identifier for return-visit reporting
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// Client for the quiz submission endpoint
#[derive(Clone)]
pub struct AnalyticsClient {
    endpoint: String,
    client: Client,
    enabled: bool,
}

impl AnalyticsClient {
    /// Create a new analytics client
    pub fn new(endpoint: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            client,
            enabled: true,
        }
    }

    pub fn from_settings(settings: &AnalyticsSettings) -> Self {
        let mut analytics_client = Self::new(settings.endpoint.clone(), settings.timeout_secs);
        analytics_client.enabled = settings.enabled;
        analytics_client
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one quiz submission
    pub async fn submit(&self, record: &SubmissionRecord) -> Result<(), AnalyticsError> {
        if !self.enabled {
            tracing::debug!("Analytics disabled, dropping submission {}", record.session_id);
            return Ok(());
        }

        record.validate()?;

        let response = self.client.post(&self.endpoint).json(record).send().await?;

        if !response.status().is_success() {
            return Err(AnalyticsError::ApiError(format!(
                "Failed to record submission: {}",
                response.status()
            )));
        }

        tracing::debug!("Recorded submission {}", record.session_id);

        Ok(())
    }

    /// Record a submission without holding up the caller
    ///
    /// Reporting must never break the quiz, so failures are logged and
    /// swallowed.
    pub fn submit_detached(&self, record: SubmissionRecord) {
        let analytics_client = self.clone();
        tokio::spawn(async move {
            if let Err(err) = analytics_client.submit(&record).await {
                tracing::warn!("Dropping submission {}: {}", record.session_id, err);
            }
        });
    }
}
