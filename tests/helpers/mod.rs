use wncheck::fix::FixOp;
use wncheck::parse::*;
use wncheck::validate::IdGrammar;
use wncheck::validate::ids::DEFAULT_PREFIX;

// =============================================================================
// Ids
// =============================================================================

/// Synset id `ewn-0000000N-<pos>`.
pub fn sid(n: u32, pos: PartOfSpeech) -> String {
    format!("ewn-{:08}-{}", n, pos.code())
}

pub fn noun(n: u32) -> String {
    sid(n, PartOfSpeech::Noun)
}

pub fn grammar() -> IdGrammar {
    IdGrammar::new(DEFAULT_PREFIX).unwrap()
}

// =============================================================================
// Entity builders
// =============================================================================

pub fn synset(id: &str, pos: PartOfSpeech, lexname: &str, rels: &[(RelType, &str)]) -> Synset {
    Synset {
        id: id.into(),
        part_of_speech: pos,
        lexname: lexname.into(),
        relations: rels
            .iter()
            .map(|(rel_type, target)| SynsetRelation {
                rel_type: *rel_type,
                target: (*target).into(),
            })
            .collect(),
    }
}

/// Entry with one sense pointing at `synset_id`, with ids derived from it.
pub fn entry_for(synset_id: &str, pos: PartOfSpeech) -> LexicalEntry {
    let digits = &synset_id[4..12];
    let lemma = format!("w{}", digits);
    LexicalEntry {
        id: format!("ewn-{}-{}", lemma, pos.code()),
        lemma: lemma.clone(),
        part_of_speech: pos,
        senses: vec![Sense {
            id: format!("ewn-{}-{}-{}-01", lemma, pos.code(), digits),
            synset: synset_id.into(),
            sense_key: None,
        }],
    }
}

pub fn unit(lexname: &str, entries: Vec<LexicalEntry>, synsets: Vec<Synset>) -> LexUnit {
    LexUnit {
        lexname: lexname.into(),
        pos: PartOfSpeech::from_lexname(lexname).expect("known category"),
        doc: LexUnitDoc { entries, synsets },
    }
}

/// Unit where every synset has one member.
pub fn covered_unit(lexname: &str, synsets: Vec<Synset>) -> LexUnit {
    let entries = synsets
        .iter()
        .map(|s| entry_for(&s.id, s.part_of_speech))
        .collect();
    unit(lexname, entries, synsets)
}

/// Covered `noun.tops` unit of noun synsets.
pub fn nouns(synsets: Vec<(u32, Vec<(RelType, String)>)>) -> LexUnit {
    let synsets = synsets
        .into_iter()
        .map(|(n, rels)| {
            let rels: Vec<(RelType, &str)> = rels.iter().map(|(t, s)| (*t, s.as_str())).collect();
            synset(&noun(n), PartOfSpeech::Noun, "noun.tops", &rels)
        })
        .collect();
    covered_unit("noun.tops", synsets)
}

pub fn dataset(units: Vec<LexUnit>) -> Dataset {
    Dataset::build(units).expect("dataset builds")
}

// =============================================================================
// Applying fixes (what a downstream editing tool would do)
// =============================================================================

pub fn apply(units: &mut [LexUnit], ops: &[FixOp]) {
    for op in ops {
        match op {
            FixOp::AddRelation { from, rel_type, to } => {
                if let Some(s) = find_mut(units, from) {
                    s.relations.push(SynsetRelation {
                        rel_type: *rel_type,
                        target: to.clone(),
                    });
                }
            }
            FixOp::DeleteRelation { from, to } => {
                if let Some(s) = find_mut(units, from) {
                    s.relations.retain(|r| &r.target != to);
                }
                if let Some(s) = find_mut(units, to) {
                    s.relations.retain(|r| &r.target != from);
                }
            }
        }
    }
}

fn find_mut<'a>(units: &'a mut [LexUnit], id: &str) -> Option<&'a mut Synset> {
    units
        .iter_mut()
        .flat_map(|u| u.doc.synsets.iter_mut())
        .find(|s| s.id == id)
}

// =============================================================================
// Scenario datasets
// =============================================================================

/// One missing `holo_part` inverse and one redundant hypernym; nothing else wrong.
///
/// ```text
/// 1 <-hyper- 2 <-hyper- 3,  3 -hyper-> 1 (redundant),  4 -mero_part-> 1
/// ```
pub fn two_issue_units() -> Vec<LexUnit> {
    use RelType::*;
    vec![nouns(vec![
        (1, vec![(Hyponym, noun(2)), (Hyponym, noun(3))]),
        (2, vec![(Hypernym, noun(1)), (Hyponym, noun(3))]),
        (3, vec![(Hypernym, noun(2)), (Hypernym, noun(1))]),
        (4, vec![(MeroPart, noun(1))]),
    ])]
}

/// Hypernym loop 1 -> 2 -> 3 -> 1 with all inverses present.
pub fn loop_units(order: [u32; 3]) -> Vec<LexUnit> {
    use RelType::*;
    let rels = |n: u32| -> Vec<(RelType, String)> {
        let up = n % 3 + 1;
        let down = (n + 1) % 3 + 1;
        vec![(Hypernym, noun(up)), (Hyponym, noun(down))]
    };
    vec![nouns(order.iter().map(|&n| (n, rels(n))).collect())]
}
