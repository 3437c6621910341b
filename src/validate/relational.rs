//! Graph rules over synset relations (R001–R003).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Check, CheckError, Violation};
use crate::fix::FixOp;
use crate::parse::{Dataset, RelType};

// ---------------------------------------------------------------------------
// R001: every relation with a declared inverse is mirrored
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingInverse {
    pub source: String,
    pub rel_type: RelType,
    pub target: String,
    pub inverse: RelType,
}

impl MissingInverse {
    pub fn violation(&self) -> Violation {
        Violation::new(
            "R001",
            Check::Symmetry,
            format!(
                "No symmetric relation for {} ={}=> {}",
                self.source, self.rel_type, self.target
            ),
        )
    }

    /// Add the inverse edge on the target side.
    pub fn fix(&self) -> FixOp {
        FixOp::AddRelation {
            from: self.target.clone(),
            rel_type: self.inverse,
            to: self.source.clone(),
        }
    }
}

pub fn check_symmetry(dataset: &Dataset) -> Vec<MissingInverse> {
    let mut found = Vec::new();

    for synset in &dataset.synsets {
        for rel in &synset.relations {
            let Some(inverse) = rel.rel_type.inverse() else {
                continue;
            };
            let Some(target) = dataset.get_synset(&rel.target) else {
                continue;
            };
            if !target.has_relation(inverse, &synset.id) {
                found.push(MissingInverse {
                    source: synset.id.clone(),
                    rel_type: rel.rel_type,
                    target: target.id.clone(),
                    inverse,
                });
            }
        }
    }

    found
}

// ---------------------------------------------------------------------------
// R002: no hypernym edge is implied by a two-hop hypernym path
// ---------------------------------------------------------------------------

/// `source => target` is redundant because `source => via => target` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedundantHypernym {
    pub source: String,
    pub via: String,
    pub target: String,
}

impl RedundantHypernym {
    pub fn violation(&self) -> Violation {
        Violation::new(
            "R002",
            Check::Transitive,
            format!(
                "Transitive error for {} => {} => {}",
                self.source, self.via, self.target
            ),
        )
    }

    /// Delete the direct edge, never the witness path.
    pub fn fix(&self) -> FixOp {
        FixOp::DeleteRelation {
            from: self.source.clone(),
            to: self.target.clone(),
        }
    }
}

/// One finding per witness, so a direct edge may be reported more than once.
pub fn check_transitive(dataset: &Dataset) -> Vec<RedundantHypernym> {
    let mut found = Vec::new();

    for synset in &dataset.synsets {
        for via_id in synset.targets(RelType::Hypernym) {
            let Some(via) = dataset.get_synset(via_id) else {
                continue;
            };
            for target in via.targets(RelType::Hypernym) {
                // A self-loop on `via` would make the first hop its own witness.
                if target == via_id {
                    continue;
                }
                if synset.has_relation(RelType::Hypernym, target) {
                    found.push(RedundantHypernym {
                        source: synset.id.clone(),
                        via: via.id.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }
    }

    found
}

// ---------------------------------------------------------------------------
// R003: the hypernym hierarchy is acyclic
// ---------------------------------------------------------------------------

/// A chain of hypernym steps that reached a node it already contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypernymLoop {
    pub chain: Vec<String>,
    pub repeated: String,
}

impl HypernymLoop {
    pub fn violation(&self) -> Violation {
        Violation::new(
            "R003",
            Check::Cycle,
            format!(
                "Loop in chain [{}] => {}",
                self.chain.join(", "),
                self.repeated
            ),
        )
    }

    pub fn into_error(self) -> CheckError {
        CheckError::Cycle {
            chain: self.chain,
            repeated: self.repeated,
        }
    }
}

pub fn check_cycles(dataset: &Dataset) -> Vec<HypernymLoop> {
    if !dataset.hypernyms.is_cyclic() {
        return Vec::new();
    }
    ChainWalk::new(dataset).run()
}

/// Worklist of hypernym paths, indexed by the node each path ends at.
///
/// Synsets are visited in declaration order. Visiting `X` takes the chains
/// parked at `X` (or starts `[X]` if there are none) and extends them by each
/// hypernym of their terminal. A step onto a node already in the chain is a
/// loop: it is recorded and the longer chain parks at that node. Otherwise the
/// extended chain keeps walking if its new terminal was already visited, or
/// parks there until that node's turn comes.
struct ChainWalk<'a> {
    dataset: &'a Dataset,
    parked: HashMap<&'a str, Vec<Vec<&'a str>>>,
    visited: HashSet<&'a str>,
    loops: Vec<HypernymLoop>,
}

impl<'a> ChainWalk<'a> {
    fn new(dataset: &'a Dataset) -> Self {
        ChainWalk {
            dataset,
            parked: HashMap::new(),
            visited: HashSet::new(),
            loops: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<HypernymLoop> {
        let dataset = self.dataset;
        for synset in &dataset.synsets {
            let id = synset.id.as_str();
            self.visited.insert(id);
            let chains = self.parked.remove(id).unwrap_or_else(|| vec![vec![id]]);
            self.extend(chains);
        }
        self.loops
    }

    fn extend(&mut self, chains: Vec<Vec<&'a str>>) {
        let dataset = self.dataset;
        let mut queue: VecDeque<Vec<&'a str>> = chains.into();

        while let Some(chain) = queue.pop_front() {
            let Some(&terminal) = chain.last() else {
                continue;
            };
            let Some(synset) = dataset.get_synset(terminal) else {
                continue;
            };
            for parent in synset.targets(RelType::Hypernym) {
                let Some(parent) = dataset.get_synset(parent).map(|s| s.id.as_str()) else {
                    continue;
                };
                let repeated = chain.contains(&parent);
                let mut next = chain.clone();
                next.push(parent);

                if repeated {
                    self.loops.push(HypernymLoop {
                        chain: chain.iter().map(|s| s.to_string()).collect(),
                        repeated: parent.to_string(),
                    });
                    self.parked.entry(parent).or_default().push(next);
                } else if self.visited.contains(parent) {
                    queue.push_back(next);
                } else {
                    self.parked.entry(parent).or_default().push(next);
                }
            }
        }
    }
}
