// Service exports
pub mod analytics;
pub mod cache;
pub mod catalog;

pub use analytics::{AnalyticsClient, AnalyticsError, SubmissionAnswers, SubmissionRecord};
pub use cache::{CacheError, CacheStats, CatalogCache};
pub use catalog::{CatalogClient, CatalogError};
