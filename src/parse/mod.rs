//! Parse phase: category unit JSON → Rust types + indexed dataset.

pub mod dataset;
pub mod graph;
pub mod types;

use std::fs;
use std::path::Path;

pub use dataset::{Dataset, Member, UnitIndex};
pub use graph::HypernymGraph;
pub use types::*;

use crate::error::DatasetError;

const UNIT_PREFIX: &str = "wn-";
const UNIT_SUFFIX: &str = ".json";

/// Deserialize one category unit. `lexname` is the unit's tag, e.g. `noun.animal`.
pub fn parse_unit(lexname: &str, json: &str) -> Result<LexUnit, DatasetError> {
    let pos = PartOfSpeech::from_lexname(lexname)
        .ok_or_else(|| DatasetError::UnknownCategory(lexname.to_string()))?;
    let doc = serde_json::from_str::<LexUnitDoc>(json).map_err(|e| DatasetError::Json {
        unit: lexname.to_string(),
        source: e,
    })?;
    Ok(LexUnit {
        lexname: lexname.to_string(),
        pos,
        doc,
    })
}

/// Lex file tag for a unit file name, or `None` if the name is not `wn-<tag>.json`.
pub fn unit_lexname(file_name: &str) -> Option<&str> {
    file_name
        .strip_prefix(UNIT_PREFIX)?
        .strip_suffix(UNIT_SUFFIX)
        .filter(|tag| !tag.is_empty())
}

/// Load every `wn-*.json` unit in `dir`, in file name order, and index them.
pub fn load_dir(dir: &Path) -> Result<Dataset, DatasetError> {
    let read_err = |source| DatasetError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for dirent in fs::read_dir(dir).map_err(read_err)? {
        let dirent = dirent.map_err(read_err)?;
        let name = dirent.file_name().to_string_lossy().into_owned();
        if let Some(lexname) = unit_lexname(&name) {
            files.push((lexname.to_string(), dirent.path()));
        }
    }
    if files.is_empty() {
        return Err(DatasetError::NoUnits(dir.to_path_buf()));
    }
    files.sort();

    let mut units = Vec::with_capacity(files.len());
    for (lexname, path) in files {
        let json = fs::read_to_string(&path).map_err(|source| DatasetError::Io {
            path: path.clone(),
            source,
        })?;
        let unit = parse_unit(&lexname, &json)?;
        if unit.doc.synsets.is_empty() {
            tracing::warn!(lexname = %unit.lexname, "category unit declares no synsets");
        }
        units.push(unit);
    }

    Dataset::build(units)
}
