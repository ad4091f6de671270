//! Bounded percentage value object.

use crate::domain::{DomainError, DomainResult};

/// Integer percentage constrained to `[0, 100]`.
///
/// The bound is enforced on construction and on every assignment, not only
/// at creation. This is the one value object the schema actually validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PerCent(i16);

impl PerCent {
    pub fn new(value: i16) -> DomainResult<Self> {
        Self::check(value)?;
        Ok(Self(value))
    }

    pub fn get(self) -> i16 {
        self.0
    }

    /// Reassign the value, rejecting anything outside `[0, 100]`.
    pub fn set(&mut self, value: i16) -> DomainResult<()> {
        Self::check(value)?;
        self.0 = value;
        Ok(())
    }

    fn check(value: i16) -> DomainResult<()> {
        if (0..=100).contains(&value) {
            Ok(())
        } else {
            Err(DomainError::InvalidValue(format!(
                "PerCent out of range [0,100]: {}",
                value
            )))
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_inclusive_range() {
        for v in 0..=100 {
            assert_eq!(PerCent::new(v).unwrap().get(), v);
        }
    }

    #[test]
    fn rejects_out_of_range_on_construction() {
        assert!(PerCent::new(-1).is_err());
        assert!(PerCent::new(101).is_err());
        assert!(PerCent::new(i16::MAX).is_err());
    }

    #[test]
    fn rejects_out_of_range_on_assignment() {
        let mut p = PerCent::new(50).unwrap();
        assert!(p.set(101).is_err());
        // Failed assignment leaves the value untouched.
        assert_eq!(p.get(), 50);
        p.set(100).unwrap();
        assert_eq!(p.get(), 100);
    }
}
