use crate::config::CatalogSettings;
use crate::models::{Catalog, MinistryRecord, UnknownTag};
use reqwest::Client;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading the ministry catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the catalog endpoint
///
/// Fetches the published ministry map and normalizes it into strict
/// records before anything downstream sees it. The endpoint reflects
/// whatever the admin screens last saved, so rows arrive in every shape
/// the store has ever written: tag lists as real arrays, as JSON arrays
/// inside a string (old TEXT columns), or as a single bare tag.
pub struct CatalogClient {
    endpoint: String,
    client: Client,
    retry_attempts: u32,
    retry_base_delay: Duration,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(endpoint: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            client,
            retry_attempts: 3,
            retry_base_delay: Duration::from_millis(500),
        }
    }

    pub fn from_settings(settings: &CatalogSettings) -> Self {
        let mut catalog_client = Self::new(settings.endpoint.clone(), settings.timeout_secs);
        catalog_client.retry_attempts = settings.retry_attempts;
        catalog_client.retry_base_delay = Duration::from_millis(settings.retry_base_delay_ms);
        catalog_client
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and normalize the catalog once
    pub async fn fetch(&self) -> Result<Catalog, CatalogError> {
        tracing::debug!("Fetching ministry catalog from: {}", self.endpoint);

        let response = self.client.post(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch catalog: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let raw: RawCatalog = serde_json::from_str(&body)
            .map_err(|e| CatalogError::InvalidResponse(format!("Failed to parse catalog: {}", e)))?;

        let total = raw.0.len();
        let catalog = normalize_catalog(raw);

        tracing::info!("Loaded ministry catalog ({} of {} rows usable)", catalog.len(), total);

        Ok(catalog)
    }

    /// Fetch with a bounded number of attempts and doubling backoff
    ///
    /// Exhaustion surfaces the last error; callers render the load-failure
    /// guidance entry in that case instead of breaking the quiz.
    pub async fn fetch_with_retry(&self) -> Result<Catalog, CatalogError> {
        let attempts = self.retry_attempts.max(1);
        let mut delay = self.retry_base_delay;
        let mut attempt = 1;

        loop {
            match self.fetch().await {
                Ok(catalog) => return Ok(catalog),
                Err(err) => {
                    if attempt >= attempts {
                        tracing::error!("Catalog fetch failed after {} attempts: {}", attempts, err);
                        return Err(err);
                    }
                    tracing::warn!(
                        "Catalog fetch attempt {}/{} failed: {}, retrying in {:?}",
                        attempt,
                        attempts,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                    attempt += 1;
                }
            }
        }
    }
}

/// One catalog row before normalization, every field still loose
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: Option<Value>,
    description: Option<Value>,
    details: Option<Value>,
    #[serde(alias = "age_groups")]
    age: Option<Value>,
    #[serde(alias = "genders")]
    gender: Option<Value>,
    #[serde(alias = "states")]
    state: Option<Value>,
    #[serde(alias = "interests")]
    interest: Option<Value>,
    #[serde(alias = "situations")]
    situation: Option<Value>,
    active: Option<Value>,
}

/// The fetched map with document order intact
///
/// Parsed straight off the wire with a map visitor: going through a JSON
/// map type would re-sort the keys, and display order is editorial.
#[derive(Debug, Default)]
struct RawCatalog(Vec<(String, RawRecord)>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawCatalogVisitor;

        impl<'de> Visitor<'de> for RawCatalogVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of ministry key to ministry data")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RawCatalog, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    match serde_json::from_value::<RawRecord>(value) {
                        Ok(record) => entries.push((key, record)),
                        Err(err) => {
                            tracing::debug!("Skipping non-object catalog row {}: {}", key, err)
                        }
                    }
                }
                Ok(RawCatalog(entries))
            }
        }

        deserializer.deserialize_map(RawCatalogVisitor)
    }
}

fn normalize_catalog(raw: RawCatalog) -> Catalog {
    let mut catalog = Catalog::with_capacity(raw.0.len());
    for (key, record) in raw.0 {
        if let Some(ministry) = normalize_record(key, record) {
            catalog.insert(ministry);
        }
    }
    catalog
}

/// Turn one loose row into a strict record
///
/// Rows without a usable name cannot be rendered and are dropped; every
/// other defect degrades to an unconstrained field, never to an error.
fn normalize_record(key: String, raw: RawRecord) -> Option<MinistryRecord> {
    let name = match raw.name.as_ref().and_then(Value::as_str).map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            tracing::debug!("Skipping catalog row {} without a usable name", key);
            return None;
        }
    };

    Some(MinistryRecord {
        name,
        description: text_field(raw.description),
        details: text_field(raw.details),
        age_groups: tag_field(raw.age, &key, "age"),
        genders: tag_field(raw.gender, &key, "gender"),
        states: tag_field(raw.state, &key, "state"),
        interests: tag_field(raw.interest, &key, "interest"),
        situations: tag_field(raw.situation, &key, "situation"),
        active: raw.active.as_ref().and_then(Value::as_bool).unwrap_or(true),
        key,
    })
}

fn text_field(value: Option<Value>) -> String {
    match value {
        Some(Value::String(text)) => text,
        _ => String::new(),
    }
}

/// Normalize one tag field to a strict list
///
/// Accepts absent, null, an array of tag strings, a JSON array inside a
/// string, or a single bare tag. Unknown tags are dropped one by one;
/// any other shape makes the whole field unconstrained.
fn tag_field<T>(value: Option<Value>, key: &str, field: &'static str) -> Vec<T>
where
    T: FromStr<Err = UnknownTag> + PartialEq,
{
    let raw_tags: Vec<String> = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => {
            let mut tags = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(tag) => tags.push(tag),
                    other => {
                        tracing::debug!(
                            "Non-string {} entry {} on {}, treating field as unconstrained",
                            field,
                            other,
                            key
                        );
                        return Vec::new();
                    }
                }
            }
            tags
        }
        // Old TEXT columns hold the array as JSON inside a string; a few
        // hand-edited rows hold one bare tag
        Some(Value::String(text)) => match serde_json::from_str::<Vec<String>>(&text) {
            Ok(tags) => tags,
            Err(_) => vec![text],
        },
        Some(other) => {
            tracing::debug!(
                "Unusable {} field {} on {}, treating as unconstrained",
                field,
                other,
                key
            );
            return Vec::new();
        }
    };

    let mut tags = Vec::with_capacity(raw_tags.len());
    for tag in &raw_tags {
        match tag.trim().to_lowercase().parse::<T>() {
            Ok(parsed) => {
                if !tags.contains(&parsed) {
                    tags.push(parsed);
                }
            }
            Err(err) => tracing::debug!("Dropping tag on {}: {}", key, err),
        }
    }
    tags
}
