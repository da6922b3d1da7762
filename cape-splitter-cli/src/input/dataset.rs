//! JSON dataset loading
//!
//! A dataset is either an array of `{"id": ..., "text": ...}` records or an
//! object mapping ids to texts. Both keep the order of the file.

use super::{Document, FileReader};
use crate::error::CliError;
use anyhow::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Records(Vec<Document>),
    Map(IndexMap<String, String>),
}

/// Load documents from a JSON dataset file
pub fn load_dataset(path: &Path) -> Result<Vec<Document>> {
    let content = FileReader::read_text(path)?;
    let documents = parse_dataset(&content)?;
    log::info!(
        "Loaded {} documents from dataset {}",
        documents.len(),
        path.display()
    );
    Ok(documents)
}

/// Parse dataset JSON
pub fn parse_dataset(content: &str) -> Result<Vec<Document>> {
    let dataset: DatasetFile = serde_json::from_str(content).map_err(|_| {
        CliError::InvalidDataset(
            "expected an array of {\"id\", \"text\"} records or an object of id to text".into(),
        )
    })?;

    Ok(match dataset {
        DatasetFile::Records(documents) => documents,
        DatasetFile::Map(map) => map
            .into_iter()
            .map(|(id, text)| Document { id, text })
            .collect(),
    })
}
