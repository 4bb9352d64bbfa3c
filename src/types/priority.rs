//! Definition for the [`Priority`] type, implemented by an enum.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Requested service level. Higher priority pays more per mile and the
/// driver team covers more hours per day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    #[default]
    Standard,
    Expedited,
    Urgent,
}

impl Priority {
    /// All priorities, slowest first.
    pub const ALL: [Priority; 3] = [Priority::Standard, Priority::Expedited, Priority::Urgent];

    /// The kebab-case label used on the wire and in forms.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Standard => "standard",
            Priority::Expedited => "expedited",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.label() == s)
            .ok_or_else(|| QuoteError::UnknownPriority(s.to_string()))
    }
}

#[cfg(test)]
mod priority_tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("standard".parse::<Priority>(), Ok(Priority::Standard));
        assert_eq!("expedited".parse::<Priority>(), Ok(Priority::Expedited));
        assert_eq!("urgent".parse::<Priority>(), Ok(Priority::Urgent));
        assert_eq!(
            "asap".parse::<Priority>(),
            Err(QuoteError::UnknownPriority("asap".to_string()))
        );
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Priority::Expedited.to_string(), "expedited");
        assert_eq!(Priority::default(), Priority::Standard);
    }
}
