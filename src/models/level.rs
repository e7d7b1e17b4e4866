use std::fmt;

use serde::{Deserialize, Serialize};

/// HSK proficiency levels covered by the app. Encoded on the wire as the bare
/// level number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum HskLevel {
    Hsk3,
    Hsk4,
    Hsk5,
    Hsk6,
}

impl HskLevel {
    pub const ALL: [HskLevel; 4] = [
        HskLevel::Hsk3,
        HskLevel::Hsk4,
        HskLevel::Hsk5,
        HskLevel::Hsk6,
    ];

    pub fn number(self) -> u8 {
        match self {
            HskLevel::Hsk3 => 3,
            HskLevel::Hsk4 => 4,
            HskLevel::Hsk5 => 5,
            HskLevel::Hsk6 => 6,
        }
    }
}

impl Default for HskLevel {
    fn default() -> Self {
        HskLevel::Hsk3
    }
}

impl TryFrom<u8> for HskLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(HskLevel::Hsk3),
            4 => Ok(HskLevel::Hsk4),
            5 => Ok(HskLevel::Hsk5),
            6 => Ok(HskLevel::Hsk6),
            other => Err(format!("unsupported HSK level {other}")),
        }
    }
}

impl From<HskLevel> for u8 {
    fn from(level: HskLevel) -> Self {
        level.number()
    }
}

impl fmt::Display for HskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSK {}", self.number())
    }
}
