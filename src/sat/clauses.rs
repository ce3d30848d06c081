//! Clause and CNF value types

/// A SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self {
            literals: vec![lit1, lit2],
        }
    }

    /// Check if clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// A complete CNF formula: clause list plus declared variable count.
///
/// Built append-only by the encoder, then handed to the DIMACS writer.
/// The clause order carries no meaning for the solver; it is fixed only
/// so the rendered output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    variable_count: usize,
    clauses: Vec<Clause>,
}

impl Cnf {
    /// Create an empty formula over `variable_count` variables
    pub fn new(variable_count: usize) -> Self {
        Self {
            variable_count,
            clauses: Vec::new(),
        }
    }

    /// Append a clause
    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Append every clause from an iterator
    pub fn extend<I: IntoIterator<Item = Clause>>(&mut self, clauses: I) {
        self.clauses.extend(clauses);
    }

    /// Declared variable count for the DIMACS header
    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    /// Number of clauses
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The clauses in emission order
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}
