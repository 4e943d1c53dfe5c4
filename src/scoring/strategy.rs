//! Weighting strategies.
//!
//! A strategy selects the coefficients that combine the four sub-scores
//! (urgency, importance, effort, dependency) into a final score.

use serde::{Deserialize, Serialize};

/// Named weighting scheme for combining sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Favor small tasks - rewards quick wins
    FastestWins,
    /// Favor important tasks and tasks others are blocked on
    HighImpact,
    /// Favor tasks closest to their due date
    DeadlineDriven,
    /// Balanced default across all four sub-scores
    SmartBalance,
}

/// Coefficients applied to the four sub-scores.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Weights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl Strategy {
    /// Parse a strategy name. Unrecognized names fall back to `SmartBalance`.
    pub fn parse(name: &str) -> Self {
        match name {
            "fastest_wins" => Strategy::FastestWins,
            "high_impact" => Strategy::HighImpact,
            "deadline_driven" => Strategy::DeadlineDriven,
            _ => Strategy::SmartBalance,
        }
    }

    /// Canonical strategy name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
            Strategy::SmartBalance => "smart_balance",
        }
    }

    pub(crate) fn weights(&self) -> Weights {
        match self {
            Strategy::FastestWins => Weights {
                urgency: 1.0,
                importance: 1.5,
                effort: 4.0,
                dependency: 0.0,
            },
            Strategy::HighImpact => Weights {
                urgency: 1.5,
                importance: 4.0,
                effort: 0.0,
                dependency: 1.5,
            },
            Strategy::DeadlineDriven => Weights {
                urgency: 4.0,
                importance: 1.5,
                effort: 0.0,
                dependency: 1.0,
            },
            Strategy::SmartBalance => Weights {
                urgency: 2.5,
                importance: 2.0,
                effort: 1.5,
                dependency: 2.0,
            },
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::SmartBalance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_strategies() {
        assert_eq!(Strategy::parse("fastest_wins"), Strategy::FastestWins);
        assert_eq!(Strategy::parse("high_impact"), Strategy::HighImpact);
        assert_eq!(Strategy::parse("deadline_driven"), Strategy::DeadlineDriven);
        assert_eq!(Strategy::parse("smart_balance"), Strategy::SmartBalance);
    }

    #[test]
    fn test_parse_unrecognized_falls_back_to_smart_balance() {
        assert_eq!(Strategy::parse("turbo_mode"), Strategy::SmartBalance);
        assert_eq!(Strategy::parse(""), Strategy::SmartBalance);
    }

    #[test]
    fn test_round_trips_wire_name() {
        for name in ["fastest_wins", "high_impact", "deadline_driven", "smart_balance"] {
            assert_eq!(Strategy::parse(name).as_str(), name);
        }
    }
}
