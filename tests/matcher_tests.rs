// Integration tests for the recommendation pipeline

use ministry_match::core::{partition, Matcher};
use ministry_match::models::{
    AgeGroup, Catalog, GenderAnswer, Interest, Situation, StateInLife, VisitorAnswers,
};

// A cross-section of the real catalog, in staff display order
const CATALOG_JSON: &str = r#"{
    "welcome-committee": {
        "name": "Welcome to St. Edward!",
        "description": "We would love to help you get settled in the parish.",
        "situation": ["new-to-stedward"]
    },
    "mass": {
        "name": "Come to Mass!",
        "description": "The source and summit of the Christian life.",
        "interest": ["prayer", "all"]
    },
    "adoration-guild": {
        "name": "Adoration Guild",
        "interest": ["prayer"]
    },
    "lectors": {
        "name": "Lectors",
        "age": ["college-young-adult", "married-parents", "journeying-adults"],
        "interest": ["prayer", "service"]
    },
    "landings": {
        "name": "Landings (Returning Catholics)",
        "situation": ["returning-to-church"]
    },
    "st-edward-school": {
        "name": "St. Edward School",
        "age": ["infant", "elementary", "junior-high"],
        "interest": ["education"]
    },
    "prep-kids": {
        "name": "PREP Religious Education",
        "age": ["elementary", "junior-high"],
        "interest": ["education"]
    },
    "cub-scouts": {
        "name": "Cub Scouts",
        "age": ["elementary"],
        "interest": ["fellowship"]
    },
    "youth-group": {
        "name": "Youth Group",
        "age": ["junior-high", "high-school"],
        "interest": ["fellowship"]
    },
    "young-adults": {
        "name": "Young Adults Group",
        "age": ["college-young-adult"],
        "interest": ["fellowship"]
    },
    "moms-group": {
        "name": "Moms Group",
        "age": ["married-parents"],
        "gender": ["female"],
        "state": ["parent"],
        "interest": ["fellowship", "support"]
    },
    "knights-of-columbus": {
        "name": "Knights of Columbus",
        "age": ["college-young-adult", "married-parents", "journeying-adults"],
        "gender": ["male"],
        "interest": ["fellowship", "service"]
    },
    "meal-train-provide": {
        "name": "Meal Train (Provide Meals)",
        "interest": ["service"]
    },
    "totus-tuus-kids": {
        "name": "Totus Tuus (Kids)",
        "age": ["elementary", "junior-high"],
        "interest": ["education", "fellowship"]
    },
    "choir-adults": {
        "name": "Adult Choir",
        "age": ["college-young-adult", "married-parents", "journeying-adults"],
        "interest": ["music"]
    },
    "legacy-bingo": {
        "name": "Parish Bingo Night",
        "interest": ["fellowship"],
        "active": false
    }
}"#;

fn parish_catalog() -> Catalog {
    serde_json::from_str(CATALOG_JSON).expect("fixture catalog should parse")
}

fn create_test_answers(age_group: AgeGroup, interests: Vec<Interest>) -> VisitorAnswers {
    VisitorAnswers {
        age_group,
        gender: GenderAnswer::Skip,
        states: vec![],
        situations: vec![],
        interests,
    }
}

fn names(results: &[ministry_match::models::MinistryRecord]) -> Vec<&str> {
    results.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn test_married_parent_scenario() {
    let catalog: Catalog = serde_json::from_str(
        r#"{
            "mass": {
                "name": "Come to Mass!",
                "interest": ["prayer", "all"]
            },
            "moms": {
                "name": "Moms Group",
                "age": ["married-parents"],
                "gender": ["female"],
                "state": ["parent"],
                "interest": ["fellowship"]
            }
        }"#,
    )
    .unwrap();

    let answers = VisitorAnswers {
        age_group: AgeGroup::MarriedParents,
        gender: GenderAnswer::Female,
        states: vec![StateInLife::Parent],
        situations: vec![],
        interests: vec![Interest::Fellowship],
    };

    let results = Matcher::new().recommend(&catalog, &answers);

    assert_eq!(names(&results), vec!["Come to Mass!", "Moms Group"]);
}

#[test]
fn test_elementary_browser_scenario() {
    let catalog: Catalog = serde_json::from_str(
        r#"{
            "mass": {
                "name": "Come to Mass!",
                "interest": ["prayer", "all"]
            },
            "moms": {
                "name": "Moms Group",
                "age": ["married-parents"],
                "gender": ["female"],
                "state": ["parent"],
                "interest": ["fellowship"]
            }
        }"#,
    )
    .unwrap();

    // A child browsing everything still does not get parent-only groups:
    // the child-age expansion only runs for parents and kids-interest picks
    let answers = VisitorAnswers {
        age_group: AgeGroup::Elementary,
        gender: GenderAnswer::Skip,
        states: vec![StateInLife::Single],
        situations: vec![],
        interests: vec![Interest::All],
    };

    let results = Matcher::new().recommend(&catalog, &answers);

    assert_eq!(names(&results), vec!["Come to Mass!"]);
}

#[test]
fn test_no_duplicates_for_any_answer_combination() {
    let catalog = parish_catalog();
    let matcher = Matcher::new();

    for &age_group in &AgeGroup::ALL {
        for interests in [
            vec![Interest::All],
            vec![Interest::Fellowship],
            vec![Interest::Kids, Interest::Education],
            vec![Interest::Prayer, Interest::Music, Interest::Support],
        ] {
            let mut answers = create_test_answers(age_group, interests);
            answers.states = vec![StateInLife::Parent];

            let results = matcher.recommend(&catalog, &answers);
            for (i, ministry) in results.iter().enumerate() {
                for other in &results[i + 1..] {
                    assert_ne!(
                        ministry.identity(),
                        other.identity(),
                        "duplicate {} for age {:?}",
                        ministry.identity(),
                        age_group
                    );
                }
            }
        }
    }
}

#[test]
fn test_mass_leads_whenever_it_matches() {
    let catalog = parish_catalog();
    let matcher = Matcher::new();

    for &age_group in &AgeGroup::ALL {
        let answers = create_test_answers(age_group, vec![Interest::Fellowship]);
        let results = matcher.recommend(&catalog, &answers);

        assert!(!results.is_empty());
        assert_eq!(
            results[0].name, "Come to Mass!",
            "expected Mass first for age {:?}",
            age_group
        );
    }
}

#[test]
fn test_results_keep_catalog_order_after_the_lead() {
    let catalog = parish_catalog();
    let answers = create_test_answers(AgeGroup::JourneyingAdults, vec![Interest::Prayer]);

    let results = Matcher::new().recommend(&catalog, &answers);

    // Adoration Guild precedes Lectors in the catalog document
    assert_eq!(names(&results), vec!["Come to Mass!", "Adoration Guild", "Lectors"]);
}

#[test]
fn test_unconstrained_record_matches_everyone() {
    let catalog: Catalog = serde_json::from_str(
        r#"{
            "open-door": { "name": "Open Door" }
        }"#,
    )
    .unwrap();
    let matcher = Matcher::new();

    for &age_group in &AgeGroup::ALL {
        for gender in [GenderAnswer::Male, GenderAnswer::Female, GenderAnswer::Skip] {
            let mut answers = create_test_answers(age_group, vec![Interest::Music]);
            answers.gender = gender;
            answers.states = vec![StateInLife::Single];
            answers.situations = vec![Situation::JustCurious];

            let results = matcher.recommend(&catalog, &answers);
            assert!(
                results.iter().any(|m| m.name == "Open Door"),
                "unconstrained record missing for age {:?}",
                age_group
            );
        }
    }
}

#[test]
fn test_skipping_gender_is_never_exclusionary() {
    let catalog = parish_catalog();
    let matcher = Matcher::new();

    let mut answers = create_test_answers(AgeGroup::MarriedParents, vec![Interest::Fellowship]);
    answers.states = vec![StateInLife::Parent];

    answers.gender = GenderAnswer::Female;
    let for_women = Matcher::new().recommend(&catalog, &answers);
    assert!(names(&for_women).contains(&"Moms Group"));
    assert!(!names(&for_women).contains(&"Knights of Columbus"));

    answers.gender = GenderAnswer::Skip;
    let unstated = matcher.recommend(&catalog, &answers);
    assert!(names(&unstated).contains(&"Moms Group"));
    assert!(names(&unstated).contains(&"Knights of Columbus"));
}

#[test]
fn test_show_me_everything_ignores_interest_tags() {
    let catalog = parish_catalog();
    let answers = create_test_answers(AgeGroup::CollegeYoungAdult, vec![Interest::All]);

    let results = Matcher::new().recommend(&catalog, &answers);
    let listed = names(&results);

    // Everything an unstated-gender young adult can join, whatever its tags
    assert!(listed.contains(&"Adult Choir"));
    assert!(listed.contains(&"Young Adults Group"));
    assert!(listed.contains(&"Meal Train (Provide Meals)"));
    assert!(!listed.contains(&"Youth Group"));
}

#[test]
fn test_empty_catalog_yields_load_failure_entry() {
    let answers = create_test_answers(AgeGroup::HighSchool, vec![Interest::Fellowship]);

    let results = Matcher::new().recommend(&Catalog::new(), &answers);

    assert_eq!(results.len(), 1);
    assert!(results[0].is_placeholder());
    assert_eq!(results[0].name, "Ministries Temporarily Unavailable");
}

#[test]
fn test_no_interests_redirects_to_interests_step() {
    let catalog = parish_catalog();
    let mut answers = create_test_answers(AgeGroup::JourneyingAdults, vec![]);
    answers.states = vec![StateInLife::Married];
    answers.situations = vec![Situation::NewToStedward];

    let results = Matcher::new().recommend(&catalog, &answers);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Please Select Your Interests");
}

#[test]
fn test_every_age_group_gets_a_non_empty_answer() {
    let catalog = parish_catalog();
    let matcher = Matcher::new();

    for &age_group in &AgeGroup::ALL {
        for &interest in &Interest::ALL_TAGS {
            let answers = create_test_answers(age_group, vec![interest]);
            let results = matcher.recommend(&catalog, &answers);
            assert!(
                !results.is_empty(),
                "empty result for age {:?} interest {:?}",
                age_group,
                interest
            );
        }
    }
}

#[test]
fn test_welcome_committee_reserved_for_newcomers() {
    let catalog = parish_catalog();
    let matcher = Matcher::new();

    let mut answers = create_test_answers(AgeGroup::MarriedParents, vec![Interest::All]);
    let settled = matcher.recommend(&catalog, &answers);
    assert!(!names(&settled).contains(&"Welcome to St. Edward!"));

    answers.situations = vec![Situation::NewToStedward];
    let newcomer = matcher.recommend(&catalog, &answers);
    assert!(names(&newcomer).contains(&"Welcome to St. Edward!"));
}

#[test]
fn test_family_suggestions_when_a_parent_matches_nothing() {
    // No universal entry here, so a parent can genuinely strike out
    let catalog: Catalog = serde_json::from_str(
        r#"{
            "st-edward-school": {
                "name": "St. Edward School",
                "age": ["infant", "elementary", "junior-high"],
                "interest": ["education"]
            },
            "prep-kids": {
                "name": "PREP Religious Education",
                "age": ["elementary", "junior-high"],
                "interest": ["education"]
            },
            "moms-group": {
                "name": "Moms Group",
                "age": ["married-parents"],
                "gender": ["female"],
                "state": ["parent"],
                "interest": ["fellowship", "support"]
            },
            "choir-adults": {
                "name": "Adult Choir",
                "age": ["college-young-adult", "married-parents", "journeying-adults"],
                "interest": ["music"]
            }
        }"#,
    )
    .unwrap();

    let answers = VisitorAnswers {
        age_group: AgeGroup::JourneyingAdults,
        gender: GenderAnswer::Male,
        states: vec![StateInLife::Parent],
        situations: vec![],
        // Nothing below serves journeying adults interested in service
        interests: vec![Interest::Service],
    };

    let results = Matcher::new().recommend(&catalog, &answers);

    // The family staples come back in their fixed order, constraints aside
    assert_eq!(
        names(&results),
        vec!["St. Edward School", "PREP Religious Education", "Moms Group"]
    );
}

#[test]
fn test_elementary_child_with_thin_results_gets_school_staples() {
    let catalog: Catalog = serde_json::from_str(
        r#"{
            "mass": {
                "name": "Come to Mass!",
                "interest": ["prayer", "all"]
            },
            "st-edward-school": {
                "name": "St. Edward School",
                "age": ["infant", "elementary", "junior-high"],
                "interest": ["education"]
            },
            "prep-kids": {
                "name": "PREP Religious Education",
                "age": ["elementary", "junior-high"],
                "interest": ["education"]
            },
            "cub-scouts": {
                "name": "Cub Scouts",
                "age": ["elementary"],
                "interest": ["fellowship"]
            },
            "choir-adults": {
                "name": "Adult Choir",
                "age": ["college-young-adult", "married-parents", "journeying-adults"],
                "interest": ["music"]
            }
        }"#,
    )
    .unwrap();
    let matcher = Matcher::new();

    // Only Mass matches a music-minded child, so the staples fill in
    let thin = matcher.recommend(
        &catalog,
        &create_test_answers(AgeGroup::Elementary, vec![Interest::Music]),
    );
    assert_eq!(
        names(&thin),
        vec!["Come to Mass!", "St. Edward School", "PREP Religious Education"]
    );

    // Scouting joins only for fellowship browsing, and two real matches
    // already suppress the fill-in entirely
    let fellowship = matcher.recommend(
        &catalog,
        &create_test_answers(AgeGroup::Elementary, vec![Interest::Fellowship]),
    );
    assert_eq!(names(&fellowship), vec!["Come to Mass!", "Cub Scouts"]);
}

#[test]
fn test_lets_connect_when_nothing_applies() {
    let catalog: Catalog = serde_json::from_str(
        r#"{
            "young-adults": {
                "name": "Young Adults Group",
                "age": ["college-young-adult"],
                "interest": ["fellowship"]
            }
        }"#,
    )
    .unwrap();

    let answers = create_test_answers(AgeGroup::JourneyingAdults, vec![Interest::Music]);
    let results = Matcher::new().recommend(&catalog, &answers);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Let's Connect You!");
    assert!(results[0].details.contains("(615) 833-5520"));
}

#[test]
fn test_inactive_records_never_surface() {
    let catalog = parish_catalog();
    let matcher = Matcher::new();

    for &age_group in &AgeGroup::ALL {
        let results = matcher.recommend(
            &catalog,
            &create_test_answers(age_group, vec![Interest::All]),
        );
        assert!(
            !names(&results).contains(&"Parish Bingo Night"),
            "inactive record offered to {:?}",
            age_group
        );
    }
}

#[test]
fn test_parent_sees_child_ministries_alongside_their_own() {
    let catalog = parish_catalog();

    let answers = VisitorAnswers {
        age_group: AgeGroup::MarriedParents,
        gender: GenderAnswer::Female,
        states: vec![StateInLife::Married, StateInLife::Parent],
        situations: vec![],
        interests: vec![Interest::Education, Interest::Support],
    };

    let results = Matcher::new().recommend(&catalog, &answers);
    let listed = names(&results);

    assert!(listed.contains(&"St. Edward School"));
    assert!(listed.contains(&"PREP Religious Education"));
    assert!(listed.contains(&"Moms Group"));
}

#[test]
fn test_partition_splits_but_never_loses_entries() {
    let catalog = parish_catalog();

    let answers = VisitorAnswers {
        age_group: AgeGroup::MarriedParents,
        gender: GenderAnswer::Skip,
        states: vec![StateInLife::Parent],
        situations: vec![],
        interests: vec![Interest::All],
    };

    let results = Matcher::new().recommend(&catalog, &answers);
    let total = results.len();
    let split = partition(results);

    assert_eq!(split.adults.len() + split.children.len(), total);
    for adult in &split.adults {
        assert!(!split.children.iter().any(|c| c.identity() == adult.identity()));
    }

    let child_names: Vec<&str> = split.children.iter().map(|m| m.name.as_str()).collect();
    assert!(child_names.contains(&"Cub Scouts"));
    assert!(!child_names.contains(&"Come to Mass!"));
}
