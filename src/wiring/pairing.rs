//! Decoded placement of components onto positions

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The components occupying one left/right position slot.
///
/// Components are 1-indexed in decoder output, matching the pairing
/// file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPair {
    pub left_component: usize,
    pub right_component: usize,
}

/// A full decoded solution: one `PositionPair` per position, ordered by
/// position. Created fresh by every decode call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pairs: Vec<PositionPair>,
}

impl Pairing {
    /// Create a pairing from per-position pairs
    pub fn new(pairs: Vec<PositionPair>) -> Self {
        Self { pairs }
    }

    /// Number of positions
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the pairing holds no positions
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pairs in position order
    pub fn pairs(&self) -> &[PositionPair] {
        &self.pairs
    }

    /// Render as the pairing file format: one line per position,
    /// `<left> <right>` with 1-indexed components
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        for pair in &self.pairs {
            output.push_str(&format!(
                "{} {}\n",
                pair.left_component, pair.right_component
            ));
        }
        output
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Save a pairing to a file in the configured output format
pub fn save_pairing_to_file<P: AsRef<Path>>(
    pairing: &Pairing,
    path: P,
    format: &OutputFormat,
) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let content = match format {
        OutputFormat::Text => pairing.to_text(),
        OutputFormat::Json => pairing.to_json().context("Failed to serialize pairing")?,
    };

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pairing file: {}", path.as_ref().display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Pairing {
        Pairing::new(vec![
            PositionPair {
                left_component: 2,
                right_component: 1,
            },
            PositionPair {
                left_component: 1,
                right_component: 2,
            },
        ])
    }

    #[test]
    fn test_text_format() {
        assert_eq!(sample().to_text(), "2 1\n1 2\n");
    }

    #[test]
    fn test_save_to_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/soln.txt");

        save_pairing_to_file(&sample(), &path, &OutputFormat::Text).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "2 1\n1 2\n");
    }

    #[test]
    fn test_save_to_file_as_json() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("soln.json");

        let pairing = sample();
        save_pairing_to_file(&pairing, &path, &OutputFormat::Json).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let restored: Pairing = serde_json::from_str(&content).unwrap();
        assert_eq!(restored, pairing);
    }

    #[test]
    fn test_json_round_trip() {
        let pairing = sample();
        let json = pairing.to_json().unwrap();
        let restored: Pairing = serde_json::from_str(&json).unwrap();

        assert_eq!(pairing, restored);
    }
}
