//! Input handling module
//!
//! Documents come either from text files (one document per file, the file
//! stem is the id) or from a JSON dataset holding ids and texts.

pub mod dataset;
pub mod file_reader;
pub mod glob_resolver;

pub use dataset::load_dataset;
pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::progress::ProgressReporter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: String,
    /// Raw document text
    pub text: String,
}

/// Read every file as a document, in the given order
pub fn load_files(paths: &[PathBuf], progress: &mut ProgressReporter) -> Result<Vec<Document>> {
    let ids = document_ids(paths);
    progress.init_files(paths.len() as u64);

    let mut documents = Vec::with_capacity(paths.len());
    for (path, id) in paths.iter().zip(ids) {
        let text = FileReader::read_text(path)?;
        log::debug!("Read '{}' ({} bytes) as document '{}'", path.display(), text.len(), id);
        progress.file_completed(&id);
        documents.push(Document { id, text });
    }

    progress.finish();
    Ok(documents)
}

/// Document ids for a list of files
///
/// The file stem is used unless two files share it, in which case those files
/// keep their full path.
pub fn document_ids(paths: &[PathBuf]) -> Vec<String> {
    let mut stem_counts: HashMap<String, usize> = HashMap::new();
    for path in paths {
        *stem_counts.entry(stem(path)).or_default() += 1;
    }

    paths
        .iter()
        .map(|path| {
            let stem = stem(path);
            if stem_counts.get(&stem).copied().unwrap_or_default() > 1 {
                path.display().to_string()
            } else {
                stem
            }
        })
        .collect()
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
