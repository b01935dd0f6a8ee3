//! Filesystem helpers for reading/writing the customer list.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

use crate::population::CustomerRecord;

/// Result returned after writing a population file.
#[derive(Debug, Clone)]
pub struct PopulationWriteOutcome {
    pub path: PathBuf,
    pub records: usize,
    pub hash: String,
}

/// Writes the customers as a pretty-printed JSON array and returns its hash.
pub fn write_population<P: AsRef<Path>>(
    path: P,
    records: &[CustomerRecord],
) -> Result<PopulationWriteOutcome> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed creating output directory {:?}", parent))?;
    }
    let payload = serde_json::to_vec_pretty(records)
        .with_context(|| format!("Failed serializing customers for {:?}", path))?;
    let hash = compute_hash(&payload);
    let mut file =
        fs::File::create(path).with_context(|| format!("Failed opening output file {:?}", path))?;
    file.write_all(&payload)
        .with_context(|| format!("Failed writing output file {:?}", path))?;
    Ok(PopulationWriteOutcome {
        path: path.to_path_buf(),
        records: records.len(),
        hash,
    })
}

/// Loads a customer list if the file exists. Unknown habit labels fail.
pub fn read_population<P: AsRef<Path>>(path: P) -> Result<Option<Vec<CustomerRecord>>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read(path).with_context(|| format!("Failed reading customers {:?}", path))?;
    let records = serde_json::from_slice(&data)
        .with_context(|| format!("Failed parsing customers {:?}", path))?;
    Ok(Some(records))
}

/// Computes a lowercase hex SHA-256 hash of the provided bytes.
pub fn compute_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{:x}", digest)
}
