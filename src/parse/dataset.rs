//! Indexed, read-only view over all loaded category units.

use std::collections::HashMap;

use super::graph::HypernymGraph;
use super::types::{LexUnit, LexicalEntry, PartOfSpeech, Synset};
use crate::error::DatasetError;

/// A category unit after merging: its tag, category and the synsets it declares.
#[derive(Debug, Clone)]
pub struct UnitIndex {
    pub lexname: String,
    pub pos: PartOfSpeech,
    /// Positions in `Dataset::synsets`.
    pub synsets: Vec<usize>,
}

/// An entry/sense pair realizing a synset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub entry_id: String,
    pub sense_id: String,
}

pub struct Dataset {
    pub entries: Vec<LexicalEntry>,
    pub synsets: Vec<Synset>,
    pub units: Vec<UnitIndex>,
    pub hypernyms: HypernymGraph,
    synset_indices: HashMap<String, usize>,
    members: HashMap<String, Vec<Member>>,
}

impl Dataset {
    /// Merge units in the given order and build the lookup indices.
    pub fn build(units: Vec<LexUnit>) -> Result<Self, DatasetError> {
        let mut entries = Vec::new();
        let mut synsets = Vec::new();
        let mut unit_indices = Vec::with_capacity(units.len());
        let mut synset_indices = HashMap::new();

        for unit in units {
            let mut declared = Vec::with_capacity(unit.doc.synsets.len());
            for synset in unit.doc.synsets {
                let idx = synsets.len();
                if synset_indices.insert(synset.id.clone(), idx).is_some() {
                    return Err(DatasetError::DuplicateSynset(synset.id));
                }
                declared.push(idx);
                synsets.push(synset);
            }
            entries.extend(unit.doc.entries);
            unit_indices.push(UnitIndex {
                lexname: unit.lexname,
                pos: unit.pos,
                synsets: declared,
            });
        }

        let mut members: HashMap<String, Vec<Member>> = HashMap::new();
        for entry in &entries {
            for sense in &entry.senses {
                members.entry(sense.synset.clone()).or_default().push(Member {
                    entry_id: entry.id.clone(),
                    sense_id: sense.id.clone(),
                });
            }
        }

        let hypernyms = HypernymGraph::build(&synsets);

        tracing::info!(
            units = unit_indices.len(),
            entries = entries.len(),
            synsets = synsets.len(),
            hypernym_edges = hypernyms.edge_count(),
            "dataset indexed"
        );

        Ok(Dataset {
            entries,
            synsets,
            units: unit_indices,
            hypernyms,
            synset_indices,
            members,
        })
    }

    pub fn synset_by_id(&self, id: &str) -> Result<&Synset, DatasetError> {
        self.get_synset(id)
            .ok_or_else(|| DatasetError::NotFound(id.to_string()))
    }

    pub fn get_synset(&self, id: &str) -> Option<&Synset> {
        self.synset_indices.get(id).map(|&idx| &self.synsets[idx])
    }

    /// Entry/sense pairs realizing the synset; empty when nothing points at it.
    pub fn members_of(&self, synset_id: &str) -> &[Member] {
        self.members
            .get(synset_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Synsets declared in a unit, in declaration order.
    pub fn unit_synsets<'a>(&'a self, unit: &'a UnitIndex) -> impl Iterator<Item = &'a Synset> {
        unit.synsets.iter().map(|&idx| &self.synsets[idx])
    }
}
