//! CNF generation for the non-crossing wiring problem

use super::{Clause, Cnf, VariableScheme};
use crate::error::WiringError;
use crate::wiring::ConnectivityMatrix;
use anyhow::Result;
use itertools::Itertools;

/// Generates the wiring problem's CNF from a connectivity matrix.
///
/// Five clause families are emitted:
///
/// 1. singleton: unit clauses fixing every `c(i, j)` to the matrix bit
/// 2. existence: every component occupies at least one position per side
/// 3. uniqueness: every position holds at most one component per side
/// 4. connection: `w(posL, posR)` holds iff the components placed at
///    those positions are matrix-connected
/// 5. no-crossing: no two wires may invert their left/right order
///
/// Existence and uniqueness together force each side's placement to be a
/// permutation of the components, so any satisfying assignment encodes
/// two bijections plus a non-crossing wire set realizing the matrix.
pub struct Encoder {
    scheme: VariableScheme,
}

impl Encoder {
    /// Create an encoder over the given variable scheme
    pub fn new(scheme: VariableScheme) -> Self {
        Self { scheme }
    }

    /// Create an encoder sized for the given matrix
    pub fn for_matrix(matrix: &ConnectivityMatrix) -> Self {
        Self::new(VariableScheme::new(matrix.size()))
    }

    /// The variable scheme in use
    pub fn scheme(&self) -> &VariableScheme {
        &self.scheme
    }

    /// Encode the matrix into a complete CNF
    pub fn encode(&self, matrix: &ConnectivityMatrix) -> Result<Cnf> {
        if matrix.size() != self.scheme.size() {
            anyhow::bail!(
                "Matrix size {} does not match scheme size {}",
                matrix.size(),
                self.scheme.size()
            );
        }

        let mut cnf = Cnf::new(self.scheme.variable_count());
        cnf.extend(self.singleton_clauses(matrix)?);
        cnf.extend(self.existence_clauses()?);
        cnf.extend(self.uniqueness_clauses()?);
        cnf.extend(self.connection_clauses()?);
        cnf.extend(self.no_crossing_clauses()?);
        Ok(cnf)
    }

    /// The exact number of clauses `encode` emits for an instance of
    /// size `n`
    pub fn expected_clause_count(n: usize) -> usize {
        let pairs = n * (n - 1) / 2;
        n * n + 2 * n + 2 * n * pairs + 2 * n.pow(4) + pairs * pairs
    }

    /// Unit clauses pinning the `c` family to the input matrix
    fn singleton_clauses(&self, matrix: &ConnectivityMatrix) -> Result<Vec<Clause>> {
        let n = self.scheme.size();
        let mut clauses = Vec::with_capacity(n * n);

        for i in 0..n {
            for j in 0..n {
                let var = self.scheme.connected(i, j)?;
                match matrix.get(i, j) {
                    0 => clauses.push(Clause::unit(-var)),
                    1 => clauses.push(Clause::unit(var)),
                    value => {
                        return Err(WiringError::Matrix {
                            row: i,
                            col: j,
                            value,
                        }
                        .into())
                    }
                }
            }
        }

        Ok(clauses)
    }

    /// Every component occupies at least one position, on each side
    fn existence_clauses(&self) -> Result<Vec<Clause>> {
        let n = self.scheme.size();
        let mut clauses = Vec::with_capacity(2 * n);

        for comp in 0..n {
            let left: Vec<i32> = (0..n)
                .map(|pos| self.scheme.left(comp, pos))
                .try_collect()?;
            clauses.push(Clause::new(left));

            let right: Vec<i32> = (0..n)
                .map(|pos| self.scheme.right(comp, pos))
                .try_collect()?;
            clauses.push(Clause::new(right));
        }

        Ok(clauses)
    }

    /// No position holds two distinct components, on each side
    fn uniqueness_clauses(&self) -> Result<Vec<Clause>> {
        let n = self.scheme.size();
        let mut clauses = Vec::new();

        for pos in 0..n {
            for (comp1, comp2) in (0..n).tuple_combinations() {
                clauses.push(Clause::binary(
                    -self.scheme.left(comp1, pos)?,
                    -self.scheme.left(comp2, pos)?,
                ));
                clauses.push(Clause::binary(
                    -self.scheme.right(comp1, pos)?,
                    -self.scheme.right(comp2, pos)?,
                ));
            }
        }

        Ok(clauses)
    }

    /// A wire is drawn between two positions exactly when the components
    /// placed there are matrix-connected
    fn connection_clauses(&self) -> Result<Vec<Clause>> {
        let n = self.scheme.size();
        let mut clauses = Vec::with_capacity(2 * n.pow(4));

        for comp_l in 0..n {
            for comp_r in 0..n {
                for pos_l in 0..n {
                    for pos_r in 0..n {
                        let left = self.scheme.left(comp_l, pos_l)?;
                        let right = self.scheme.right(comp_r, pos_r)?;
                        let connected = self.scheme.connected(comp_l, comp_r)?;
                        let wire = self.scheme.wire(pos_l, pos_r)?;

                        clauses.push(Clause::new(vec![-left, -right, -connected, wire]));
                        clauses.push(Clause::new(vec![-left, -right, -wire, connected]));
                    }
                }
            }
        }

        Ok(clauses)
    }

    /// Forbid every wire pair whose right endpoints invert the order of
    /// their left endpoints
    fn no_crossing_clauses(&self) -> Result<Vec<Clause>> {
        let n = self.scheme.size();
        let mut clauses = Vec::new();

        for (pos_l1, pos_l2) in (0..n).tuple_combinations() {
            for (pos_r2, pos_r1) in (0..n).tuple_combinations() {
                // pos_l1 < pos_l2 and pos_r2 < pos_r1: wires
                // (pos_l1, pos_r1) and (pos_l2, pos_r2) would cross
                clauses.push(Clause::binary(
                    -self.scheme.wire(pos_l1, pos_r1)?,
                    -self.scheme.wire(pos_l2, pos_r2)?,
                ));
            }
        }

        Ok(clauses)
    }
}

/// Summary of an encoding run
#[derive(Debug, Clone, Copy)]
pub struct EncodingStatistics {
    pub size: usize,
    pub variable_count: usize,
    pub clause_count: usize,
}

impl EncodingStatistics {
    /// Gather statistics for an encoded instance
    pub fn for_cnf(scheme: &VariableScheme, cnf: &Cnf) -> Self {
        Self {
            size: scheme.size(),
            variable_count: cnf.variable_count(),
            clause_count: cnf.clause_count(),
        }
    }
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Encoding Statistics:")?;
        writeln!(f, "  Instance size: {}", self.size)?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Clauses: {}", self.clause_count)?;
        Ok(())
    }
}
