//! Corrective edit operations and their textual forms.
//!
//! Checks never touch the dataset. A fixable violation becomes a `FixOp`,
//! and a `FixSerializer` turns it into a line for whatever tool applies it.

use std::io;

use serde::Serialize;

use crate::parse::RelType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum FixOp {
    /// Add `from =rel_type=> to`.
    #[serde(rename_all = "camelCase")]
    AddRelation {
        from: String,
        rel_type: RelType,
        to: String,
    },
    /// Delete every relation `from => to`. Deleting an absent edge is a no-op.
    DeleteRelation { from: String, to: String },
}

pub trait FixSerializer {
    /// One output line for `op`, without the trailing newline.
    fn render(&self, op: &FixOp) -> io::Result<String>;
}

/// Shell-style command lines for a relation editing tool.
#[derive(Debug, Clone)]
pub struct ChangeRelationScript {
    pub tool: String,
}

pub const DEFAULT_FIX_TOOL: &str = "change-relation";

impl Default for ChangeRelationScript {
    fn default() -> Self {
        ChangeRelationScript {
            tool: DEFAULT_FIX_TOOL.to_string(),
        }
    }
}

impl FixSerializer for ChangeRelationScript {
    fn render(&self, op: &FixOp) -> io::Result<String> {
        Ok(match op {
            FixOp::AddRelation { from, rel_type, to } => format!(
                "{} --add --new-relation {} {} {}",
                self.tool, rel_type, from, to
            ),
            FixOp::DeleteRelation { from, to } => {
                format!("{} --delete {} {}", self.tool, from, to)
            }
        })
    }
}

/// One JSON object per operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLines;

impl FixSerializer for JsonLines {
    fn render(&self, op: &FixOp) -> io::Result<String> {
        Ok(serde_json::to_string(op)?)
    }
}
