// Model exports
pub mod answers;
pub mod domain;
pub mod vocab;

pub use answers::{QuizForm, QuizFormError, VisitorAnswers};
pub use domain::{
    Catalog, MinistryRecord, ELEMENTARY_CORE_KEYS, ELEMENTARY_SCOUTING_KEY, FAMILY_FALLBACK_KEYS,
    UNIVERSAL_KEY, WELCOME_KEY,
};
pub use vocab::{
    AgeGroup, Gender, GenderAnswer, Interest, Situation, StateInLife, UnknownTag, CHILD_AGE_GROUPS,
};
