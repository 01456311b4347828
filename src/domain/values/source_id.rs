use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upstream provider identity. The declaration order is the merge priority:
/// on a price tie the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Fiat,
    Gold,
    Crypto,
}

impl SourceId {
    pub const ALL: [SourceId; 3] = [SourceId::Fiat, SourceId::Gold, SourceId::Crypto];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Fiat => "fiat",
            SourceId::Gold => "gold",
            SourceId::Crypto => "crypto",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fiat" | "arz" | "currency" => Ok(SourceId::Fiat),
            "gold" => Ok(SourceId::Gold),
            "crypto" => Ok(SourceId::Crypto),
            _ => Err(format!(
                "Unknown source: '{s}'. Use 'fiat', 'gold' or 'crypto'"
            )),
        }
    }
}
