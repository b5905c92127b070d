use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResoError;

/// Named nuclide-data source a provider can serve.
///
/// Passed explicitly through every provider call; the engine never relies on
/// a provider-side notion of a "current" database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Database {
    EndfVii,
    EndfViii,
}

impl Database {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndfVii => "ENDF_VII",
            Self::EndfViii => "ENDF_VIII",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Database {
    type Err = ResoError;

    fn from_str(s: &str) -> std::result::Result<Self, ResoError> {
        match s {
            "ENDF_VII" => Ok(Self::EndfVii),
            "ENDF_VIII" => Ok(Self::EndfViii),
            other => Err(ResoError::UnknownDatabase(other.to_string())),
        }
    }
}
