//! Consistency checks over a loaded dataset.
//!
//! Checks run in a fixed order and stream their results into a [`Sink`]:
//! lex files, entry and sense ids, per-synset rules, symmetry, transitive
//! redundancy, loops. Fix mode swaps the fixable findings for `FixOp`s and
//! aborts on the first finding that has no fix.

pub mod ids;
pub mod relational;
pub mod structural;

use crate::error::{Check, CheckError, Violation};
use crate::fix::FixOp;
use crate::parse::Dataset;
use crate::report::{Mode, Sink, Summary};

pub use ids::IdGrammar;

/// Run every check against `dataset`.
pub fn validate(
    dataset: &Dataset,
    grammar: &IdGrammar,
    mode: Mode,
    sink: &mut dyn Sink,
) -> Result<Summary, CheckError> {
    let mut run = Run {
        mode,
        sink,
        errors: 0,
        fixes: 0,
    };

    let lex_files = structural::check_lex_files(dataset);
    tracing::debug!(found = lex_files.len(), "lex file check");
    for v in &lex_files {
        run.count(v)?;
    }

    check_identifiers(dataset, grammar, &mut run)?;

    for synset in &dataset.synsets {
        if !grammar.is_valid_synset_id(&synset.id) {
            run.invalid_id("I003", &synset.id)?;
        }
        if let Some(v) = structural::check_not_empty(dataset, synset) {
            run.count(&v)?;
        }
        for v in structural::check_targets_exist(dataset, synset) {
            run.count(&v)?;
        }
        for v in structural::check_cross_category(dataset, synset) {
            run.count(&v)?;
        }
    }

    let missing = relational::check_symmetry(dataset);
    tracing::debug!(found = missing.len(), "symmetry check");
    for m in &missing {
        run.fixable(&m.violation(), || m.fix())?;
    }

    let redundant = relational::check_transitive(dataset);
    tracing::debug!(found = redundant.len(), "transitive check");
    for r in &redundant {
        run.fixable(&r.violation(), || r.fix())?;
    }

    let loops = relational::check_cycles(dataset);
    tracing::debug!(found = loops.len(), "loop check");
    for l in loops {
        if mode == Mode::Fix {
            return Err(l.into_error());
        }
        run.count(&l.violation())?;
    }

    let summary = Summary {
        mode,
        errors: run.errors,
        fixes: run.fixes,
    };
    tracing::info!(
        errors = summary.errors,
        fixes = summary.fixes,
        "validation finished"
    );
    Ok(summary)
}

fn check_identifiers(
    dataset: &Dataset,
    grammar: &IdGrammar,
    run: &mut Run<'_>,
) -> Result<(), CheckError> {
    for entry in &dataset.entries {
        if !grammar.is_valid_entry_id(&entry.id) {
            run.invalid_id("I001", &entry.id)?;
        }
        for sense in &entry.senses {
            if !grammar.is_valid_sense_id(&sense.id) {
                run.invalid_id("I002", &sense.id)?;
            }
        }
    }
    Ok(())
}

struct Run<'s> {
    mode: Mode,
    sink: &'s mut dyn Sink,
    errors: usize,
    fixes: usize,
}

impl Run<'_> {
    /// Print and count, whatever the mode.
    fn count(&mut self, violation: &Violation) -> Result<(), CheckError> {
        tracing::trace!(code = violation.code, check = %violation.check, "violation");
        self.sink.violation(violation)?;
        self.errors += 1;
        Ok(())
    }

    fn invalid_id(&mut self, code: &'static str, id: &str) -> Result<(), CheckError> {
        if self.mode == Mode::Fix {
            return Err(CheckError::InvalidId(id.to_string()));
        }
        self.count(&Violation::new(
            code,
            Check::Identifier,
            format!("Invalid ID {}", id),
        ))
    }

    fn fixable(
        &mut self,
        violation: &Violation,
        fix: impl FnOnce() -> FixOp,
    ) -> Result<(), CheckError> {
        match self.mode {
            Mode::Report => self.count(violation),
            Mode::Fix => {
                self.sink.fix(&fix())?;
                self.fixes += 1;
                Ok(())
            }
        }
    }
}
