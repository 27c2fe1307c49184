use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::OrderError;

/// Provider integration that produced an order.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "String")]
pub enum ShiftType {
    #[serde(rename = "side")]
    SideShift,
    #[serde(rename = "exolix")]
    Exolix,
    #[serde(rename = "changenow")]
    ChangeNow,
}

impl ShiftType {
    pub const ALL: [ShiftType; 3] = [ShiftType::SideShift, ShiftType::Exolix, ShiftType::ChangeNow];

    /// Short identifier used on the wire and as the default order tag.
    pub fn tag(&self) -> &'static str {
        match self {
            ShiftType::SideShift => "side",
            ShiftType::Exolix => "exolix",
            ShiftType::ChangeNow => "changenow",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ShiftType {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftType::ALL
            .into_iter()
            .find(|t| t.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrderError::UnknownShiftType(s.to_string()))
    }
}

impl TryFrom<String> for ShiftType {
    type Error = OrderError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}
