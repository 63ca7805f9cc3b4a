//! Expected length difference between source and translation

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, Result};

/// Linear heuristic `offset - source_len / divisor`
///
/// Length checks use it to decide whether a translation is suspiciously
/// short or long. Without a divisor the difference is the constant `offset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRule {
    #[serde(default)]
    pub offset: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub divisor: Option<i64>,
}

impl LengthRule {
    /// Constant difference, independent of the source length
    pub const fn constant(offset: i64) -> Self {
        Self {
            offset,
            divisor: None,
        }
    }

    pub const fn linear(offset: i64, divisor: i64) -> Self {
        Self {
            offset,
            divisor: Some(divisor),
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match self.divisor {
            Some(d) if d <= 0 => Err(ProfileError::InvalidConfig(format!(
                "Length divisor must be positive, got {d}"
            ))),
            _ => Ok(()),
        }
    }

    /// Expected difference for a source text of `source_len` characters
    ///
    /// Integer division; lengths are never negative, so flooring and
    /// truncation agree.
    pub fn difference(&self, source_len: usize) -> i64 {
        match self.divisor {
            Some(divisor) if divisor > 0 => {
                let len = i64::try_from(source_len).unwrap_or(i64::MAX);
                self.offset - len / divisor
            }
            _ => self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_difference() {
        let rule = LengthRule::linear(10, 2);
        assert_eq!(rule.difference(0), 10);
        assert_eq!(rule.difference(20), 0);
        assert_eq!(rule.difference(5), 8);
        assert_eq!(rule.difference(41), -10);
    }

    #[test]
    fn test_constant_difference() {
        let rule = LengthRule::constant(0);
        assert_eq!(rule.difference(0), 0);
        assert_eq!(rule.difference(1000), 0);
    }

    #[test]
    fn test_divisor_validation() {
        assert!(LengthRule::linear(10, 0).validate().is_err());
        assert!(LengthRule::linear(10, -2).validate().is_err());
        assert!(LengthRule::linear(10, 2).validate().is_ok());
        assert!(LengthRule::default().validate().is_ok());
    }
}
