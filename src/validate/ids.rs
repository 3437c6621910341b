//! Identifier grammars for entries, senses and synsets.
//!
//! All three are anchored, case-sensitive matches behind a shared prefix
//! token (`ewn` by default):
//!
//! - entry: `<prefix>-[A-Za-z0-9_.-]+`
//! - synset: `<prefix>-NNNNNNNN-[nvars]`
//! - sense: `<prefix>-<lemma>-[nvars]-NNNNNNNN-NN`

use std::sync::LazyLock;

use regex::Regex;

pub const DEFAULT_PREFIX: &str = "ewn";

#[derive(Debug, Clone)]
pub struct IdGrammar {
    entry: Regex,
    synset: Regex,
    sense: Regex,
}

impl IdGrammar {
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let p = regex::escape(prefix);
        Ok(IdGrammar {
            entry: Regex::new(&format!(r"^{p}-[A-Za-z0-9_.\-]+$"))?,
            synset: Regex::new(&format!(r"^{p}-[0-9]{{8}}-[nvars]$"))?,
            sense: Regex::new(&format!(r"^{p}-[A-Za-z0-9_.\-]+-[nvars]-[0-9]{{8}}-[0-9]{{2}}$"))?,
        })
    }

    pub fn is_valid_entry_id(&self, id: &str) -> bool {
        self.entry.is_match(id)
    }

    pub fn is_valid_synset_id(&self, id: &str) -> bool {
        self.synset.is_match(id)
    }

    pub fn is_valid_sense_id(&self, id: &str) -> bool {
        self.sense.is_match(id)
    }
}

static DEFAULT_GRAMMAR: LazyLock<Result<IdGrammar, regex::Error>> =
    LazyLock::new(|| IdGrammar::new(DEFAULT_PREFIX));

/// Entry id check under the default prefix.
pub fn is_valid_entry_id(id: &str) -> bool {
    DEFAULT_GRAMMAR
        .as_ref()
        .is_ok_and(|g| g.is_valid_entry_id(id))
}

/// Synset id check under the default prefix.
pub fn is_valid_synset_id(id: &str) -> bool {
    DEFAULT_GRAMMAR
        .as_ref()
        .is_ok_and(|g| g.is_valid_synset_id(id))
}

/// Sense id check under the default prefix.
pub fn is_valid_sense_id(id: &str) -> bool {
    DEFAULT_GRAMMAR
        .as_ref()
        .is_ok_and(|g| g.is_valid_sense_id(id))
}
