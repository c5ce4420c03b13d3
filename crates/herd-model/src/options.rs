//! Settings that drive derived values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Age in months at which an animal is scheduled for slaughter.
///
/// The projected slaughter date of every resolved slot is its birthdate plus
/// this many calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SlaughterAge(u32);

impl SlaughterAge {
    pub const MIN_MONTHS: u32 = 1;
    pub const MAX_MONTHS: u32 = 24;

    pub fn new(months: u32) -> Result<Self> {
        if !(Self::MIN_MONTHS..=Self::MAX_MONTHS).contains(&months) {
            return Err(ModelError::InvalidSlaughterAge {
                value: months,
                min: Self::MIN_MONTHS,
                max: Self::MAX_MONTHS,
            });
        }
        Ok(Self(months))
    }

    pub fn months(self) -> u32 {
        self.0
    }
}

impl Default for SlaughterAge {
    fn default() -> Self {
        Self(Self::MIN_MONTHS)
    }
}

impl TryFrom<u32> for SlaughterAge {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<SlaughterAge> for u32 {
    fn from(value: SlaughterAge) -> Self {
        value.0
    }
}

impl fmt::Display for SlaughterAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("1 Monat"),
            months => write!(f, "{months} Monate"),
        }
    }
}
