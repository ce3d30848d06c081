//! Solver output parsing

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// The set of variables a SAT solver reported true.
///
/// The decoder only ever asks whether a positive variable id is a
/// member; negative literals in the solver output assert falsehood and
/// are dropped at parse time, as is the DIMACS `0` terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverSolution {
    true_literals: HashSet<i32>,
}

impl SolverSolution {
    /// Build a solution from the ids reported true
    pub fn from_true_literals<I: IntoIterator<Item = i32>>(literals: I) -> Self {
        Self {
            true_literals: literals.into_iter().filter(|&lit| lit > 0).collect(),
        }
    }

    /// Whether the solver asserted this variable true
    pub fn contains(&self, variable: i32) -> bool {
        self.true_literals.contains(&variable)
    }

    /// Number of variables asserted true
    pub fn len(&self) -> usize {
        self.true_literals.len()
    }

    /// Whether no variable was asserted true
    pub fn is_empty(&self) -> bool {
        self.true_literals.is_empty()
    }
}

/// Load a solver solution from a file
pub fn load_solution_from_file<P: AsRef<Path>>(path: P) -> Result<SolverSolution> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read solution file: {}", path.as_ref().display()))?;

    parse_solution_from_string(&content)
        .with_context(|| format!("Failed to parse solution file: {}", path.as_ref().display()))
}

/// Parse a solver solution from its single-line text form.
///
/// The first whitespace-separated token is the solver's status marker
/// and is skipped; the remaining tokens are signed literals.
pub fn parse_solution_from_string(content: &str) -> Result<SolverSolution> {
    let mut tokens = content.split_whitespace();

    if tokens.next().is_none() {
        anyhow::bail!("Solution is empty, expected a status marker and literals");
    }

    let literals: Vec<i32> = tokens
        .map(|token| {
            token
                .parse::<i32>()
                .with_context(|| format!("Invalid literal token: {:?}", token))
        })
        .collect::<Result<_>>()?;

    Ok(SolverSolution::from_true_literals(literals))
}
