//! Integration tests for symmetry, transitive redundancy and loop detection.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use proptest::prelude::*;
use wncheck::error::CheckError;
use wncheck::fix::FixOp;
use wncheck::parse::{LexUnit, RelType};
use wncheck::report::{Collector, Mode};
use wncheck::validate::{self, relational};

// =============================================================================
// R001: symmetry
// =============================================================================

#[test]
fn r001_missing_hyponym() {
    use RelType::*;
    let ds = dataset(vec![nouns(vec![
        (1, vec![]),
        (2, vec![(Hypernym, noun(1))]),
    ])]);
    let found = relational::check_symmetry(&ds);
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].violation().message,
        format!("No symmetric relation for {} =hypernym=> {}", noun(2), noun(1))
    );
    assert_eq!(
        found[0].fix(),
        FixOp::AddRelation {
            from: noun(1),
            rel_type: Hyponym,
            to: noun(2),
        }
    );
}

#[test]
fn r001_self_inverse_and_uninvertible_types() {
    use RelType::*;
    let ds = dataset(vec![nouns(vec![
        (1, vec![(Similar, noun(2)), (Also, noun(2))]),
        (2, vec![]),
    ])]);
    let found = relational::check_symmetry(&ds);
    // `similar` needs `similar` back, `also` has no inverse.
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].rel_type, Similar);
    assert_eq!(found[0].inverse, Similar);
}

#[test]
fn r001_wrong_inverse_type_does_not_count() {
    use RelType::*;
    let ds = dataset(vec![nouns(vec![
        (1, vec![(MeroPart, noun(2))]),
        (2, vec![(HoloMember, noun(1))]),
    ])]);
    let found = relational::check_symmetry(&ds);
    let rels: Vec<RelType> = found.iter().map(|m| m.rel_type).collect();
    assert_eq!(rels, vec![MeroPart, HoloMember]);
}

// =============================================================================
// R002: transitive redundancy
// =============================================================================

#[test]
fn r002_redundant_direct_hypernym() {
    let ds = dataset(two_issue_units());
    let found = relational::check_transitive(&ds);
    assert_eq!(found.len(), 1);
    assert_eq!(
        found[0].violation().message,
        format!(
            "Transitive error for {} => {} => {}",
            noun(3),
            noun(2),
            noun(1)
        )
    );
    assert_eq!(
        found[0].fix(),
        FixOp::DeleteRelation {
            from: noun(3),
            to: noun(1),
        }
    );
}

#[test]
fn r002_each_witness_reports_the_same_edge() {
    use RelType::*;
    // 4 -> 1 directly, and via both 2 and 3.
    let ds = dataset(vec![nouns(vec![
        (1, vec![]),
        (2, vec![(Hypernym, noun(1))]),
        (3, vec![(Hypernym, noun(1))]),
        (4, vec![(Hypernym, noun(2)), (Hypernym, noun(3)), (Hypernym, noun(1))]),
    ])]);
    let found = relational::check_transitive(&ds);
    let vias: Vec<&str> = found.iter().map(|r| r.via.as_str()).collect();
    assert_eq!(vias, vec![noun(2), noun(3)]);
    let fixes: Vec<FixOp> = found.iter().map(|r| r.fix()).collect();
    assert_eq!(fixes[0], fixes[1]);
}

#[test]
fn r002_only_hypernym_hops_count() {
    use RelType::*;
    let ds = dataset(vec![nouns(vec![
        (1, vec![]),
        (2, vec![(MeroPart, noun(1))]),
        (3, vec![(Hypernym, noun(2)), (Hypernym, noun(1))]),
    ])]);
    assert!(relational::check_transitive(&ds).is_empty());
}

// =============================================================================
// R003: loops
// =============================================================================

#[test]
fn r003_acyclic_hierarchy_has_no_loops() {
    let ds = dataset(two_issue_units());
    assert!(!ds.hypernyms.is_cyclic());
    assert!(relational::check_cycles(&ds).is_empty());
}

#[test]
fn r003_loop_in_declaration_order() {
    let ds = dataset(loop_units([1, 2, 3]));
    let loops = relational::check_cycles(&ds);
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].chain, vec![noun(1), noun(2), noun(3)]);
    assert_eq!(loops[0].repeated, noun(1));
    assert_eq!(
        loops[0].violation().message,
        format!(
            "Loop in chain [{}, {}, {}] => {}",
            noun(1),
            noun(2),
            noun(3),
            noun(1)
        )
    );
}

#[test]
fn r003_loop_found_whatever_the_order() {
    for order in [[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]] {
        let ds = dataset(loop_units(order));
        let loops = relational::check_cycles(&ds);
        assert!(!loops.is_empty(), "order {:?}", order);
        for l in &loops {
            assert!(l.chain.contains(&l.repeated), "order {:?}: {:?}", order, l);
        }
    }
}

#[test]
fn r003_reverse_order_reports_more_than_once() {
    let ds = dataset(loop_units([3, 2, 1]));
    let loops = relational::check_cycles(&ds);
    assert_eq!(loops.len(), 2);
    assert_eq!(loops[0].chain, vec![noun(2), noun(3), noun(1)]);
    assert_eq!(loops[0].repeated, noun(2));
    assert_eq!(loops[1].chain, vec![noun(3), noun(1), noun(2)]);
    assert_eq!(loops[1].repeated, noun(3));
}

#[test]
fn r003_self_loop() {
    use RelType::*;
    let ds = dataset(vec![nouns(vec![(1, vec![(Hypernym, noun(1)), (Hyponym, noun(1))])])]);
    let loops = relational::check_cycles(&ds);
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].chain, vec![noun(1)]);
    assert_eq!(loops[0].repeated, noun(1));
    assert_eq!(ds.hypernyms.edge_count(), 1);
}

#[test]
fn r003_fix_mode_aborts() {
    let ds = dataset(loop_units([1, 2, 3]));
    let mut sink = Collector::default();
    let err = validate::validate(&ds, &grammar(), Mode::Fix, &mut sink).unwrap_err();
    assert!(err.is_unfixable());
    match err {
        CheckError::Cycle { chain, repeated } => {
            assert_eq!(chain, vec![noun(1), noun(2), noun(3)]);
            assert_eq!(repeated, noun(1));
        }
        other => panic!("expected a loop abort, got {:?}", other),
    }
    assert!(sink.fixes.is_empty());
    assert!(sink.violations.is_empty());
}

#[test]
fn r003_report_mode_counts_loops() {
    let ds = dataset(loop_units([1, 2, 3]));
    let mut sink = Collector::default();
    let summary =
        validate::validate(&ds, &grammar(), Mode::Report, &mut sink).unwrap();
    assert_eq!(sink.codes(), vec!["R003"]);
    assert_eq!(summary.errors, 1);
}

// =============================================================================
// Fixes are idempotent
// =============================================================================

const TYPES: [RelType; 6] = [
    RelType::Hypernym,
    RelType::Hyponym,
    RelType::MeroPart,
    RelType::HoloPart,
    RelType::Similar,
    RelType::Also,
];

fn random_units(edges: &[(u32, u32, usize)]) -> Vec<LexUnit> {
    let synsets = (1..=6)
        .map(|n| {
            let rels: Vec<(RelType, String)> = edges
                .iter()
                .filter(|(from, _, _)| *from == n)
                .map(|(_, to, t)| (TYPES[*t], noun(*to)))
                .collect();
            (n, rels)
        })
        .collect();
    vec![nouns(synsets)]
}

proptest! {
    #[test]
    fn symmetry_fixes_leave_nothing_to_fix(
        edges in prop::collection::vec((1u32..=6, 1u32..=6, 0usize..TYPES.len()), 0..20)
    ) {
        let mut units = random_units(&edges);
        let ops: Vec<FixOp> = relational::check_symmetry(&dataset(units.clone()))
            .iter()
            .map(|m| m.fix())
            .collect();
        let all_adds = ops.iter().all(|op| matches!(op, FixOp::AddRelation { .. }));
        prop_assert!(all_adds);
        apply(&mut units, &ops);
        prop_assert!(relational::check_symmetry(&dataset(units)).is_empty());
    }

    #[test]
    fn transitive_fixes_leave_nothing_to_fix(
        edges in prop::collection::vec((1u32..=6, 1u32..=6, Just(0usize)), 0..20)
    ) {
        let mut units = random_units(&edges);
        let ops: Vec<FixOp> = relational::check_transitive(&dataset(units.clone()))
            .iter()
            .map(|r| r.fix())
            .collect();
        apply(&mut units, &ops);
        prop_assert!(relational::check_transitive(&dataset(units)).is_empty());
    }
}
