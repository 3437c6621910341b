//! Per-synset structural rules (S001–S005).
//!
//! None of these have a fix; their violations count in every mode.

use crate::error::{Check, Violation};
use crate::parse::{Dataset, RelType, Synset};

/// Lex file consistency for every category unit (S002, S003).
///
/// A synset declared in `wn-noun.animal.json` must carry `lexname`
/// `noun.animal` and a part of speech equivalent to the unit's category.
pub fn check_lex_files(dataset: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();

    for unit in &dataset.units {
        for synset in dataset.unit_synsets(unit) {
            if synset.lexname != unit.lexname {
                violations.push(Violation::new(
                    "S002",
                    Check::LexFile,
                    format!(
                        "{} declared in {} but listed as {}",
                        synset.id, unit.lexname, synset.lexname
                    ),
                ));
            }
            if !unit.pos.equivalent(synset.part_of_speech) {
                violations.push(Violation::new(
                    "S003",
                    Check::LexFile,
                    format!(
                        "{} declared in {} but has wrong POS {}",
                        synset.id, unit.lexname, synset.part_of_speech
                    ),
                ));
            }
        }
    }

    violations
}

/// S001: a synset must be realized by at least one sense.
pub fn check_not_empty(dataset: &Dataset, synset: &Synset) -> Option<Violation> {
    if !dataset.members_of(&synset.id).is_empty() {
        return None;
    }
    Some(Violation::new(
        "S001",
        Check::Membership,
        format!("Empty synset {}", synset.id),
    ))
}

/// S005: every relation target must be a synset of the dataset.
pub fn check_targets_exist(dataset: &Dataset, synset: &Synset) -> Vec<Violation> {
    synset
        .relations
        .iter()
        .filter(|r| dataset.get_synset(&r.target).is_none())
        .map(|r| {
            Violation::new(
                "S005",
                Check::Reference,
                format!(
                    "Relation target not found {} ={}=> {}",
                    synset.id, r.rel_type, r.target
                ),
            )
        })
        .collect()
}

/// S004: hypernym edges stay within one (equivalent) part of speech.
pub fn check_cross_category(dataset: &Dataset, synset: &Synset) -> Vec<Violation> {
    let mut violations = Vec::new();

    for target in synset.targets(RelType::Hypernym) {
        let Some(parent) = dataset.get_synset(target) else {
            continue;
        };
        if !synset.part_of_speech.equivalent(parent.part_of_speech) {
            violations.push(Violation::new(
                "S004",
                Check::CrossCategory,
                format!("Cross-part-of-speech hypernym {} => {}", synset.id, target),
            ));
        }
    }

    violations
}
