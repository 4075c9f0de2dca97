//! The binary consensus value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary consensus value.
///
/// `Unknown` is a placeholder only: faulty participants are seeded with it,
/// and it never appears as a legitimate proposal or decision output.
///
/// Serialized as `"0"`, `"1"`, and `"?"` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "?")]
    Unknown,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Value::Zero => "0",
            Value::One => "1",
            Value::Unknown => "?",
        };
        f.write_str(symbol)
    }
}

impl std::str::FromStr for Value {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Value::Zero),
            "1" => Ok(Value::One),
            "?" => Ok(Value::Unknown),
            other => Err(format!("invalid value symbol: {other:?}")),
        }
    }
}
