use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::vocab::{AgeGroup, GenderAnswer, Interest, Situation, StateInLife, CHILD_AGE_GROUPS};

/// A completed set of quiz answers
///
/// Construction goes through [`QuizForm`], so an age group is always
/// present. Everything else may be empty; an empty list constrains
/// nothing on the visitor's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorAnswers {
    #[serde(alias = "age_group", rename = "ageGroup")]
    pub age_group: AgeGroup,
    #[serde(default)]
    pub gender: GenderAnswer,
    #[serde(alias = "states_in_life", rename = "statesInLife", default)]
    pub states: Vec<StateInLife>,
    #[serde(alias = "situation", default)]
    pub situations: Vec<Situation>,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl VisitorAnswers {
    pub fn is_parent(&self) -> bool {
        self.states.contains(&StateInLife::Parent)
    }

    pub fn wants_kids_interest(&self) -> bool {
        self.interests.contains(&Interest::Kids)
    }

    pub fn wants_everything(&self) -> bool {
        self.interests.contains(&Interest::All)
    }

    /// Age groups the visitor effectively shops for: their own, widened to
    /// all child groups when they are a parent or asked for children's
    /// ministries
    pub fn effective_ages(&self) -> Vec<AgeGroup> {
        let mut ages = vec![self.age_group];
        if self.is_parent() || self.wants_kids_interest() {
            for age in CHILD_AGE_GROUPS {
                if !ages.contains(&age) {
                    ages.push(age);
                }
            }
        }
        ages
    }
}

/// Errors from finishing an incomplete quiz
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizFormError {
    #[error("the age group question was not answered")]
    MissingAgeGroup,
}

/// Quiz state, one transition per question
///
/// Selection rules that the quiz UI enforces live here so every caller
/// gets them: single and married exclude each other, the two
/// none-of-the-above answers clear their whole question, and "show me
/// everything" clears the other interests (and is cleared by them).
#[derive(Debug, Clone, Default)]
pub struct QuizForm {
    age_group: Option<AgeGroup>,
    gender: GenderAnswer,
    states: Vec<StateInLife>,
    situations: Vec<Situation>,
    interests: Vec<Interest>,
}

impl QuizForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_age(&mut self, age_group: AgeGroup) {
        self.age_group = Some(age_group);
    }

    pub fn answer_gender(&mut self, gender: GenderAnswer) {
        self.gender = gender;
    }

    /// Select or deselect a state in life
    pub fn toggle_state(&mut self, state: StateInLife) {
        if remove(&mut self.states, state) {
            return;
        }
        match state {
            StateInLife::NoneOfAbove => self.states.clear(),
            StateInLife::Single => {
                remove(&mut self.states, StateInLife::Married);
                remove(&mut self.states, StateInLife::NoneOfAbove);
            }
            StateInLife::Married => {
                remove(&mut self.states, StateInLife::Single);
                remove(&mut self.states, StateInLife::NoneOfAbove);
            }
            StateInLife::Parent => {
                remove(&mut self.states, StateInLife::NoneOfAbove);
            }
        }
        self.states.push(state);
    }

    /// Select or deselect a situation
    pub fn toggle_situation(&mut self, situation: Situation) {
        if remove(&mut self.situations, situation) {
            return;
        }
        if situation == Situation::SituationNoneOfAbove {
            self.situations.clear();
        } else {
            remove(&mut self.situations, Situation::SituationNoneOfAbove);
        }
        self.situations.push(situation);
    }

    /// Select or deselect an interest
    pub fn toggle_interest(&mut self, interest: Interest) {
        if remove(&mut self.interests, interest) {
            return;
        }
        if interest == Interest::All {
            self.interests.clear();
        } else {
            remove(&mut self.interests, Interest::All);
        }
        self.interests.push(interest);
    }

    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }

    pub fn gender(&self) -> GenderAnswer {
        self.gender
    }

    pub fn states(&self) -> &[StateInLife] {
        &self.states
    }

    pub fn situations(&self) -> &[Situation] {
        &self.situations
    }

    pub fn interests(&self) -> &[Interest] {
        &self.interests
    }

    /// Close the quiz and produce the answers the engine consumes
    pub fn finish(self) -> Result<VisitorAnswers, QuizFormError> {
        let age_group = self.age_group.ok_or(QuizFormError::MissingAgeGroup)?;
        Ok(VisitorAnswers {
            age_group,
            gender: self.gender,
            states: self.states,
            situations: self.situations,
            interests: self.interests,
        })
    }
}

fn remove<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
    if let Some(pos) = items.iter().position(|i| *i == item) {
        items.remove(pos);
        true
    } else {
        false
    }
}
