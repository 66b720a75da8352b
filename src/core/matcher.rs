use crate::core::filters::{matches_visitor, welcome_committee_allowed};
use crate::models::{
    AgeGroup, Catalog, Interest, MinistryRecord, VisitorAnswers, ELEMENTARY_CORE_KEYS,
    ELEMENTARY_SCOUTING_KEY, FAMILY_FALLBACK_KEYS, UNIVERSAL_KEY,
};
use tracing::debug;

/// Recommendation engine
///
/// Pure over its inputs: one pass through the catalog in document order,
/// the layered fallbacks, then the universal entry is promoted to the
/// front. Every outcome is a non-empty list of entries; failure states
/// come back as synthetic guidance entries, never as errors.
#[derive(Debug, Clone, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Produce the ordered, deduplicated recommendation list for one
    /// completed quiz
    pub fn recommend(&self, catalog: &Catalog, answers: &VisitorAnswers) -> Vec<MinistryRecord> {
        if catalog.is_empty() {
            debug!("Catalog is empty, returning load-failure guidance");
            return vec![MinistryRecord::unable_to_load()];
        }

        // A visitor can reach results without touching the interests
        // question; send them back instead of matching on nothing
        if answers.interests.is_empty() {
            debug!("No interests selected, returning go-back guidance");
            return vec![MinistryRecord::choose_interests()];
        }

        let effective_ages = answers.effective_ages();

        let mut matches: Vec<MinistryRecord> = Vec::new();
        let candidates = catalog
            .iter()
            .filter(|m| welcome_committee_allowed(m, &answers.situations))
            .filter(|m| matches_visitor(m, answers, &effective_ages));
        for ministry in candidates {
            push_unique(&mut matches, ministry.clone());
        }

        if matches.is_empty() && (answers.is_parent() || answers.wants_kids_interest()) {
            debug!("Family visitor matched nothing, merging family entries");
            self.merge_from_catalog(&mut matches, catalog, &FAMILY_FALLBACK_KEYS);
        }

        if answers.age_group == AgeGroup::Elementary && matches.len() < 2 {
            debug!("Thin elementary results ({} matched), adding core entries", matches.len());
            self.merge_from_catalog(&mut matches, catalog, &ELEMENTARY_CORE_KEYS);
            if answers.interests.contains(&Interest::Fellowship) || answers.wants_everything() {
                self.merge_from_catalog(&mut matches, catalog, &[ELEMENTARY_SCOUTING_KEY]);
            }
        }

        if matches.is_empty() {
            debug!("Nothing matched, returning contact guidance");
            return vec![MinistryRecord::lets_connect()];
        }

        promote_universal(&mut matches);
        matches
    }

    /// Pull the named entries out of the catalog, skipping keys the parish
    /// has not published and entries already in the list
    fn merge_from_catalog(&self, matches: &mut Vec<MinistryRecord>, catalog: &Catalog, keys: &[&str]) {
        for key in keys {
            if let Some(ministry) = catalog.get(key) {
                if ministry.active {
                    push_unique(matches, ministry.clone());
                }
            }
        }
    }
}

fn push_unique(matches: &mut Vec<MinistryRecord>, ministry: MinistryRecord) {
    if !matches.iter().any(|m| m.identity() == ministry.identity()) {
        matches.push(ministry);
    }
}

/// Move the universal entry to the front when it matched, keeping the
/// relative order of everything else
fn promote_universal(matches: &mut Vec<MinistryRecord>) {
    if let Some(pos) = matches.iter().position(|m| m.identity() == UNIVERSAL_KEY) {
        if pos > 0 {
            let universal = matches.remove(pos);
            matches.insert(0, universal);
        }
    }
}
