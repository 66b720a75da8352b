use crate::models::{
    AgeGroup, GenderAnswer, Interest, MinistryRecord, Situation, StateInLife, VisitorAnswers,
    WELCOME_KEY,
};

/// Check whether a ministry matches the visitor on every criterion
///
/// All criteria must hold. `effective_ages` is the visitor's widened age
/// set, computed once per quiz run rather than per record.
#[inline]
pub fn matches_visitor(
    ministry: &MinistryRecord,
    answers: &VisitorAnswers,
    effective_ages: &[AgeGroup],
) -> bool {
    // The store filters inactive rows; tolerate ones that slip through
    if !ministry.active {
        return false;
    }

    if !matches_age(ministry, effective_ages) {
        return false;
    }

    if !matches_gender(ministry, answers.gender) {
        return false;
    }

    if !matches_state(ministry, &answers.states) {
        return false;
    }

    if !matches_situation(ministry, &answers.situations) {
        return false;
    }

    matches_interest(ministry, answers)
}

/// Age criterion: unconstrained, or overlapping the visitor's effective ages
#[inline]
pub fn matches_age(ministry: &MinistryRecord, effective_ages: &[AgeGroup]) -> bool {
    if ministry.age_groups.is_empty() {
        return true;
    }
    ministry.age_groups.iter().any(|age| effective_ages.contains(age))
}

/// Gender criterion: a skipped answer never filters
#[inline]
pub fn matches_gender(ministry: &MinistryRecord, answer: GenderAnswer) -> bool {
    if ministry.genders.is_empty() {
        return true;
    }
    match answer.as_gender() {
        None => true,
        Some(gender) => ministry.genders.contains(&gender),
    }
}

/// State criterion: none-of-above is an explicit wildcard, while an empty
/// selection leaves state-restricted ministries out
#[inline]
pub fn matches_state(ministry: &MinistryRecord, states: &[StateInLife]) -> bool {
    if ministry.states.is_empty() {
        return true;
    }
    if states.contains(&StateInLife::NoneOfAbove) {
        return true;
    }
    ministry.states.iter().any(|state| states.contains(state))
}

/// Situation criterion: situational ministries need a matching situation
#[inline]
pub fn matches_situation(ministry: &MinistryRecord, situations: &[Situation]) -> bool {
    if ministry.situations.is_empty() {
        return true;
    }
    ministry.situations.iter().any(|s| situations.contains(s))
}

/// Interest criterion
///
/// "Show me everything" on either side short-circuits to a match. A
/// visitor who asked for children's ministries also reaches any ministry
/// that serves only child age groups, whatever its interest tags say.
/// An empty selection is treated as unconstrained here; the matcher turns
/// that case into go-back guidance before any predicate runs.
#[inline]
pub fn matches_interest(ministry: &MinistryRecord, answers: &VisitorAnswers) -> bool {
    if answers.interests.is_empty() || answers.wants_everything() {
        return true;
    }
    if ministry.interests.is_empty() || ministry.interests.contains(&Interest::All) {
        return true;
    }
    if ministry.interests.iter().any(|i| answers.interests.contains(i)) {
        return true;
    }
    answers.wants_kids_interest() && serves_only_children(ministry)
}

/// The new-parishioner entry is gated by its key, not its tags: it stays
/// hidden unless the visitor said they are new to the parish
#[inline]
pub fn welcome_committee_allowed(ministry: &MinistryRecord, situations: &[Situation]) -> bool {
    ministry.key != WELCOME_KEY || situations.contains(&Situation::NewToStedward)
}

/// True when a ministry serves child age groups exclusively
#[inline]
pub fn serves_only_children(ministry: &MinistryRecord) -> bool {
    !ministry.age_groups.is_empty() && ministry.age_groups.iter().all(|age| age.is_child())
}
