//! Morning and evening prayer sessions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A daily office session.
///
/// Plans without a morning/evening split ignore the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Morning,
    Evening,
}

impl Session {
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Morning => "morning",
            Session::Evening => "evening",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Session {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" | "mattins" | "matins" => Ok(Session::Morning),
            "evening" | "evensong" => Ok(Session::Evening),
            other => Err(format!("Unknown session '{other}' (expected morning or evening)")),
        }
    }
}
