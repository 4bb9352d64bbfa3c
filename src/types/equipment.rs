//! Definition for the [`Equipment`] type, implemented by an enum.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// The trailer a load travels in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    #[default]
    DryVan,
    Refrigerated,
    Flatbed,
}

impl Equipment {
    /// All equipment types, in the order a picker shows them.
    pub const ALL: [Equipment; 3] = [Equipment::DryVan, Equipment::Refrigerated, Equipment::Flatbed];

    /// The kebab-case label used on the wire and in forms.
    pub fn label(&self) -> &'static str {
        match self {
            Equipment::DryVan => "dry-van",
            Equipment::Refrigerated => "refrigerated",
            Equipment::Flatbed => "flatbed",
        }
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Equipment {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Equipment::ALL
            .into_iter()
            .find(|equipment| equipment.label() == s)
            .ok_or_else(|| QuoteError::UnknownEquipment(s.to_string()))
    }
}
