//! Connectivity matrix loading and access

use crate::error::WiringError;
use anyhow::{Context, Result};
use std::path::Path;

/// The required connectivity between left and right components.
///
/// Entry `(i, j) = 1` means left component `i` must be wired to right
/// component `j`. The matrix is square, `n` is its row count, and it is
/// immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityMatrix {
    rows: Vec<Vec<u8>>,
}

impl ConnectivityMatrix {
    /// Build a matrix from raw rows.
    ///
    /// Fails on a zero-row input and on any row whose width differs
    /// from the row count, so every constructed matrix is square.
    /// Entry values are not validated here; the encoder rejects
    /// anything outside {0, 1} when it emits the singleton clauses.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, WiringError> {
        if rows.is_empty() {
            return Err(WiringError::EmptyInstance);
        }
        let size = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != size {
                return Err(WiringError::Ragged {
                    row,
                    width: entries.len(),
                    size,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Number of components per side
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Entry at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.rows[row][col]
    }

    /// Number of mandated connections
    pub fn connection_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&bit| bit == 1).count())
            .sum()
    }
}

/// Load a connectivity matrix from an instance file
pub fn load_instance_from_file<P: AsRef<Path>>(path: P) -> Result<ConnectivityMatrix> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read instance file: {}", path.as_ref().display()))?;

    parse_instance_from_string(&content)
        .with_context(|| format!("Failed to parse instance file: {}", path.as_ref().display()))
}

/// Parse a connectivity matrix from instance text.
///
/// Each line is one row; the character `f` denotes connection-absent and
/// any other character denotes connection-present. The permissive
/// alphabet is deliberate and matches the instance files in the wild.
/// Blank lines are skipped. Every row must be exactly `n` characters
/// wide, where `n` is the number of rows.
pub fn parse_instance_from_string(content: &str) -> Result<ConnectivityMatrix> {
    let rows: Vec<Vec<u8>> = content
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|ch| u8::from(ch != 'f')).collect())
        .collect();

    Ok(ConnectivityMatrix::from_rows(rows)?)
}

/// Create example instance files for the setup subcommand.
///
/// Existing files are left untouched unless `force` is set.
pub fn create_example_instances<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let instances = [
        // Diagonal connectivity, solvable with the identity placement
        ("inst-1.txt", "tff\nftf\nfft\n"),
        // Anti-diagonal connectivity, forces a reversal of one side
        ("inst-2.txt", "fft\nftf\ntff\n"),
        // Single off-diagonal connection
        ("inst-3.txt", "ftf\nfff\nfff\n"),
    ];

    for (name, content) in instances {
        let path = dir.join(name);
        if path.exists() && !force {
            continue;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
