//! petgraph-based directed graph of the hypernym edges.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{RelType, Synset};

pub struct HypernymGraph {
    pub graph: DiGraph<String, ()>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl HypernymGraph {
    /// Build from synsets in declaration order. Edges to unknown targets are skipped.
    pub fn build(synsets: &[Synset]) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for synset in synsets {
            let idx = graph.add_node(synset.id.clone());
            node_indices.insert(synset.id.clone(), idx);
        }

        for synset in synsets {
            let source = node_indices[&synset.id];
            for target in synset.targets(RelType::Hypernym) {
                if let Some(&t) = node_indices.get(target) {
                    graph.add_edge(source, t, ());
                }
            }
        }

        HypernymGraph {
            graph,
            node_indices,
        }
    }

    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
