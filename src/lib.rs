//! Ministry Match - recommendation engine for the St. Edward ministry finder
//!
//! This library powers the parish "Find Your Ministry" quiz. Visitors answer
//! a short questionnaire (age group, gender, states in life, situations,
//! interests) and get back the ministries that fit them, in the order parish
//! staff arranged the catalog, with guidance entries filled in when nothing
//! else applies.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use core::{partition, Matcher, Partitioned};
pub use models::{
    AgeGroup, Catalog, Gender, GenderAnswer, Interest, MinistryRecord, QuizForm, Situation,
    StateInLife, VisitorAnswers,
};
pub use services::{AnalyticsClient, CatalogCache, CatalogClient, SubmissionRecord};
