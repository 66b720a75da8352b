use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A tag string that does not belong to its vocabulary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {vocab} tag: {tag:?}")]
pub struct UnknownTag {
    pub vocab: &'static str,
    pub tag: String,
}

impl UnknownTag {
    fn new(vocab: &'static str, tag: &str) -> Self {
        Self {
            vocab,
            tag: tag.to_string(),
        }
    }
}

/// Life-stage age groups, ordered youngest to oldest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Infant,
    #[serde(alias = "kid")]
    Elementary,
    JuniorHigh,
    HighSchool,
    CollegeYoungAdult,
    MarriedParents,
    JourneyingAdults,
}

/// The age groups that mark a ministry as serving children
pub const CHILD_AGE_GROUPS: [AgeGroup; 4] = [
    AgeGroup::Infant,
    AgeGroup::Elementary,
    AgeGroup::JuniorHigh,
    AgeGroup::HighSchool,
];

impl AgeGroup {
    pub const ALL: [AgeGroup; 7] = [
        AgeGroup::Infant,
        AgeGroup::Elementary,
        AgeGroup::JuniorHigh,
        AgeGroup::HighSchool,
        AgeGroup::CollegeYoungAdult,
        AgeGroup::MarriedParents,
        AgeGroup::JourneyingAdults,
    ];

    /// True for the four school-age groups counted as children
    pub fn is_child(self) -> bool {
        CHILD_AGE_GROUPS.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Infant => "infant",
            AgeGroup::Elementary => "elementary",
            AgeGroup::JuniorHigh => "junior-high",
            AgeGroup::HighSchool => "high-school",
            AgeGroup::CollegeYoungAdult => "college-young-adult",
            AgeGroup::MarriedParents => "married-parents",
            AgeGroup::JourneyingAdults => "journeying-adults",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "infant" => Ok(AgeGroup::Infant),
            // "kid" is the spelling used by older catalog rows
            "elementary" | "kid" => Ok(AgeGroup::Elementary),
            "junior-high" => Ok(AgeGroup::JuniorHigh),
            "high-school" => Ok(AgeGroup::HighSchool),
            "college-young-adult" => Ok(AgeGroup::CollegeYoungAdult),
            "married-parents" => Ok(AgeGroup::MarriedParents),
            "journeying-adults" => Ok(AgeGroup::JourneyingAdults),
            _ => Err(UnknownTag::new("age", s)),
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender a ministry is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(UnknownTag::new("gender", s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visitor's gender answer; Skip never filters anything out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GenderAnswer {
    Male,
    Female,
    #[default]
    #[serde(alias = "prefer-not-to-say", alias = "other")]
    Skip,
}

impl GenderAnswer {
    pub fn as_str(self) -> &'static str {
        match self {
            GenderAnswer::Male => "male",
            GenderAnswer::Female => "female",
            GenderAnswer::Skip => "skip",
        }
    }

    /// The ministry-side gender this answer selects, if any
    pub fn as_gender(self) -> Option<Gender> {
        match self {
            GenderAnswer::Male => Some(Gender::Male),
            GenderAnswer::Female => Some(Gender::Female),
            GenderAnswer::Skip => None,
        }
    }
}

impl FromStr for GenderAnswer {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(GenderAnswer::Male),
            "female" => Ok(GenderAnswer::Female),
            "skip" | "prefer-not-to-say" | "other" => Ok(GenderAnswer::Skip),
            _ => Err(UnknownTag::new("gender", s)),
        }
    }
}

impl fmt::Display for GenderAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// States in life; NoneOfAbove acts as a wildcard against state-restricted ministries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StateInLife {
    Single,
    Married,
    Parent,
    NoneOfAbove,
}

impl StateInLife {
    pub fn as_str(self) -> &'static str {
        match self {
            StateInLife::Single => "single",
            StateInLife::Married => "married",
            StateInLife::Parent => "parent",
            StateInLife::NoneOfAbove => "none-of-above",
        }
    }
}

impl FromStr for StateInLife {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(StateInLife::Single),
            "married" => Ok(StateInLife::Married),
            "parent" => Ok(StateInLife::Parent),
            "none-of-above" => Ok(StateInLife::NoneOfAbove),
            _ => Err(UnknownTag::new("state", s)),
        }
    }
}

impl fmt::Display for StateInLife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interest areas; All matches every ministry, Kids additionally pulls in
/// ministries that serve only child age groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interest {
    Fellowship,
    Service,
    Prayer,
    Education,
    Music,
    Support,
    #[serde(alias = "children")]
    Kids,
    All,
}

impl Interest {
    pub const ALL_TAGS: [Interest; 8] = [
        Interest::Fellowship,
        Interest::Service,
        Interest::Prayer,
        Interest::Education,
        Interest::Music,
        Interest::Support,
        Interest::Kids,
        Interest::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Interest::Fellowship => "fellowship",
            Interest::Service => "service",
            Interest::Prayer => "prayer",
            Interest::Education => "education",
            Interest::Music => "music",
            Interest::Support => "support",
            Interest::Kids => "kids",
            Interest::All => "all",
        }
    }
}

impl FromStr for Interest {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fellowship" => Ok(Interest::Fellowship),
            "service" => Ok(Interest::Service),
            "prayer" => Ok(Interest::Prayer),
            "education" => Ok(Interest::Education),
            "music" => Ok(Interest::Music),
            "support" => Ok(Interest::Support),
            "kids" | "children" => Ok(Interest::Kids),
            "all" => Ok(Interest::All),
            _ => Err(UnknownTag::new("interest", s)),
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the visitor relates to the parish right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Situation {
    NewToStedward,
    ReturningToChurch,
    NewToNashville,
    CurrentParishioner,
    JustCurious,
    SituationNoneOfAbove,
}

impl Situation {
    pub fn as_str(self) -> &'static str {
        match self {
            Situation::NewToStedward => "new-to-stedward",
            Situation::ReturningToChurch => "returning-to-church",
            Situation::NewToNashville => "new-to-nashville",
            Situation::CurrentParishioner => "current-parishioner",
            Situation::JustCurious => "just-curious",
            Situation::SituationNoneOfAbove => "situation-none-of-above",
        }
    }
}

impl FromStr for Situation {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new-to-stedward" => Ok(Situation::NewToStedward),
            "returning-to-church" => Ok(Situation::ReturningToChurch),
            "new-to-nashville" => Ok(Situation::NewToNashville),
            "current-parishioner" => Ok(Situation::CurrentParishioner),
            "just-curious" => Ok(Situation::JustCurious),
            "situation-none-of-above" => Ok(Situation::SituationNoneOfAbove),
            _ => Err(UnknownTag::new("situation", s)),
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
