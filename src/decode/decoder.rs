//! Reconstructing the position pairing from a satisfying assignment

use super::SolverSolution;
use crate::error::{Side, WiringError};
use crate::sat::VariableScheme;
use crate::wiring::{Pairing, PositionPair};
use anyhow::Result;

/// Decodes a solver's true-literal set back into a per-position pairing.
///
/// For each position the decoder looks up which component the `l` family
/// places there and which the `r` family places there, merging the two
/// passes by position key. A genuinely satisfying assignment has exactly
/// one component per position on each side (the existence and uniqueness
/// clauses guarantee it); anything else is rejected as malformed rather
/// than silently mispaired.
pub struct Decoder {
    scheme: VariableScheme,
}

impl Decoder {
    /// Create a decoder over the given variable scheme
    pub fn new(scheme: VariableScheme) -> Self {
        Self { scheme }
    }

    /// The variable scheme in use
    pub fn scheme(&self) -> &VariableScheme {
        &self.scheme
    }

    /// Decode the solution into a pairing, one entry per position with
    /// 1-indexed components
    pub fn decode(&self, solution: &SolverSolution) -> Result<Pairing> {
        let n = self.scheme.size();
        let mut pairs = Vec::with_capacity(n);

        for position in 0..n {
            let left = self.component_at(solution, position, Side::Left)?;
            let right = self.component_at(solution, position, Side::Right)?;
            pairs.push(PositionPair {
                left_component: left + 1,
                right_component: right + 1,
            });
        }

        Ok(Pairing::new(pairs))
    }

    /// Find the single component the solution places at `position` on
    /// the given side
    fn component_at(
        &self,
        solution: &SolverSolution,
        position: usize,
        side: Side,
    ) -> Result<usize> {
        let n = self.scheme.size();
        let mut found = Vec::new();

        for component in 0..n {
            let variable = match side {
                Side::Left => self.scheme.left(component, position)?,
                Side::Right => self.scheme.right(component, position)?,
            };
            if solution.contains(variable) {
                found.push(component);
            }
        }

        match found.as_slice() {
            [component] => Ok(*component),
            _ => Err(WiringError::Alignment {
                position,
                side,
                found: found.len(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(n: usize) -> VariableScheme {
        VariableScheme::new(n)
    }

    // Solution placing components by the given position -> component
    // permutations, with no wire or connection literals (the decoder
    // never consults those families).
    fn placement_solution(
        scheme: &VariableScheme,
        left_at: &[usize],
        right_at: &[usize],
    ) -> SolverSolution {
        let mut literals = Vec::new();
        for (pos, (&lc, &rc)) in left_at.iter().zip(right_at).enumerate() {
            literals.push(scheme.left(lc, pos).unwrap());
            literals.push(scheme.right(rc, pos).unwrap());
        }
        SolverSolution::from_true_literals(literals)
    }

    #[test]
    fn test_identity_pairing() {
        let scheme = scheme(2);
        let solution = placement_solution(&scheme, &[0, 1], &[0, 1]);

        let pairing = Decoder::new(scheme).decode(&solution).unwrap();
        assert_eq!(
            pairing.pairs(),
            &[
                PositionPair {
                    left_component: 1,
                    right_component: 1
                },
                PositionPair {
                    left_component: 2,
                    right_component: 2
                },
            ]
        );
    }

    #[test]
    fn test_trivial_pairing() {
        let scheme = scheme(1);
        let solution = placement_solution(&scheme, &[0], &[0]);

        let pairing = Decoder::new(scheme).decode(&solution).unwrap();
        assert_eq!(
            pairing.pairs(),
            &[PositionPair {
                left_component: 1,
                right_component: 1
            }]
        );
    }

    #[test]
    fn test_mixed_permutations() {
        let scheme = scheme(3);
        let solution = placement_solution(&scheme, &[2, 0, 1], &[1, 2, 0]);

        let pairing = Decoder::new(scheme).decode(&solution).unwrap();
        assert_eq!(
            pairing.pairs(),
            &[
                PositionPair {
                    left_component: 3,
                    right_component: 2
                },
                PositionPair {
                    left_component: 1,
                    right_component: 3
                },
                PositionPair {
                    left_component: 2,
                    right_component: 1
                },
            ]
        );
    }

    #[test]
    fn test_vacant_position_is_rejected() {
        let scheme = scheme(2);
        // Left component at position 1 is missing
        let solution = SolverSolution::from_true_literals(vec![
            scheme.left(0, 0).unwrap(),
            scheme.right(0, 0).unwrap(),
            scheme.right(1, 1).unwrap(),
        ]);

        let err = Decoder::new(scheme).decode(&solution).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WiringError>(),
            Some(&WiringError::Alignment {
                position: 1,
                side: Side::Left,
                found: 0
            })
        );
    }

    #[test]
    fn test_doubly_occupied_position_is_rejected() {
        let scheme = scheme(2);
        let solution = SolverSolution::from_true_literals(vec![
            scheme.left(0, 0).unwrap(),
            scheme.left(1, 0).unwrap(),
            scheme.right(0, 0).unwrap(),
        ]);

        let err = Decoder::new(scheme).decode(&solution).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WiringError>(),
            Some(&WiringError::Alignment {
                position: 0,
                side: Side::Left,
                found: 2
            })
        );
    }

    #[test]
    fn test_empty_solution_is_rejected() {
        let scheme = scheme(1);
        let solution = SolverSolution::default();
        assert!(Decoder::new(scheme).decode(&solution).is_err());
    }
}
