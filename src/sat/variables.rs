//! Variable scheme for the wiring SAT encoding

use crate::error::WiringError;

/// Maps the encoding's boolean variables to DIMACS ids.
///
/// Four variable families share the id space `[1, 4n²]`, laid out as
/// contiguous 1-based ranges in the fixed order `l, r, w, c`:
///
/// - `l(component, position)`: component occupies a left position
/// - `r(component, position)`: component occupies a right position
/// - `w(left_pos, right_pos)`: a wire runs between two positions
/// - `c(left_comp, right_comp)`: two components are matrix-connected
///
/// The scheme is a pure function of `n`: no allocation, no interior
/// state, and the (family, indices) → id mapping is a bijection onto
/// each family's `n²`-wide range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableScheme {
    size: usize,
}

impl VariableScheme {
    /// Create a scheme for an instance with `size` components per side
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of components (and positions) per side
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of variables, `4n²`, as declared in the DIMACS header
    pub fn variable_count(&self) -> usize {
        4 * self.size * self.size
    }

    /// Variable asserting that `component` occupies left `position`
    pub fn left(&self, component: usize, position: usize) -> Result<i32, WiringError> {
        self.check(component)?;
        self.check(position)?;
        Ok((self.size * position + component + 1) as i32)
    }

    /// Variable asserting that `component` occupies right `position`
    pub fn right(&self, component: usize, position: usize) -> Result<i32, WiringError> {
        self.check(component)?;
        self.check(position)?;
        let base = self.size * self.size;
        Ok((base + self.size * position + component + 1) as i32)
    }

    /// Variable asserting a wire between `left_pos` and `right_pos`
    pub fn wire(&self, left_pos: usize, right_pos: usize) -> Result<i32, WiringError> {
        self.check(left_pos)?;
        self.check(right_pos)?;
        let base = 2 * self.size * self.size;
        Ok((base + self.size * left_pos + right_pos + 1) as i32)
    }

    /// Variable asserting that `left_comp` and `right_comp` are connected
    pub fn connected(&self, left_comp: usize, right_comp: usize) -> Result<i32, WiringError> {
        self.check(left_comp)?;
        self.check(right_comp)?;
        let base = 3 * self.size * self.size;
        Ok((base + self.size * left_comp + right_comp + 1) as i32)
    }

    fn check(&self, index: usize) -> Result<(), WiringError> {
        if index >= self.size {
            return Err(WiringError::Range {
                index,
                size: self.size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_family_ranges_are_contiguous() {
        let scheme = VariableScheme::new(3);

        assert_eq!(scheme.left(0, 0).unwrap(), 1);
        assert_eq!(scheme.left(2, 2).unwrap(), 9);
        assert_eq!(scheme.right(0, 0).unwrap(), 10);
        assert_eq!(scheme.right(2, 2).unwrap(), 18);
        assert_eq!(scheme.wire(0, 0).unwrap(), 19);
        assert_eq!(scheme.wire(2, 2).unwrap(), 27);
        assert_eq!(scheme.connected(0, 0).unwrap(), 28);
        assert_eq!(scheme.connected(2, 2).unwrap(), 36);
        assert_eq!(scheme.variable_count(), 36);
    }

    #[test]
    fn test_bijection_over_full_id_space() {
        for n in 1..=5 {
            let scheme = VariableScheme::new(n);
            let mut seen = HashSet::new();

            for a in 0..n {
                for b in 0..n {
                    seen.insert(scheme.left(a, b).unwrap());
                    seen.insert(scheme.right(a, b).unwrap());
                    seen.insert(scheme.wire(a, b).unwrap());
                    seen.insert(scheme.connected(a, b).unwrap());
                }
            }

            // 4n² distinct ids covering [1, 4n²]
            assert_eq!(seen.len(), scheme.variable_count());
            assert_eq!(*seen.iter().min().unwrap(), 1);
            assert_eq!(*seen.iter().max().unwrap(), scheme.variable_count() as i32);
        }
    }

    #[test]
    fn test_out_of_range_arguments() {
        let scheme = VariableScheme::new(2);

        assert!(scheme.left(0, 1).is_ok());
        assert_eq!(
            scheme.left(2, 0),
            Err(WiringError::Range { index: 2, size: 2 })
        );
        assert!(scheme.right(0, 2).is_err());
        assert!(scheme.wire(2, 0).is_err());
        assert!(scheme.connected(0, 2).is_err());
    }

    #[test]
    fn test_trivial_instance() {
        let scheme = VariableScheme::new(1);

        assert_eq!(scheme.left(0, 0).unwrap(), 1);
        assert_eq!(scheme.right(0, 0).unwrap(), 2);
        assert_eq!(scheme.wire(0, 0).unwrap(), 3);
        assert_eq!(scheme.connected(0, 0).unwrap(), 4);
        assert_eq!(scheme.variable_count(), 4);
    }
}
