// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod partition;

pub use filters::{
    matches_age, matches_gender, matches_interest, matches_situation, matches_state,
    matches_visitor, serves_only_children, welcome_committee_allowed,
};
pub use matcher::Matcher;
pub use partition::{partition, Partitioned};
