use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "Unknown difficulty '{}', expected easy, medium or hard",
                other
            )),
        }
    }
}

/// Chance (in percent) that the bot plays its heuristic strategy instead of
/// a uniformly random move, per difficulty tier. The exact values are
/// tuning, not correctness, so they are data rather than literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotSettings {
    pub easy_heuristic_percent: u32,
    pub medium_heuristic_percent: u32,
    pub hard_heuristic_percent: u32,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            easy_heuristic_percent: 0,
            medium_heuristic_percent: 50,
            hard_heuristic_percent: 75,
        }
    }
}

impl BotSettings {
    pub fn heuristic_percent(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy_heuristic_percent,
            Difficulty::Medium => self.medium_heuristic_percent,
            Difficulty::Hard => self.hard_heuristic_percent,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        for (tier, percent) in [
            ("easy", self.easy_heuristic_percent),
            ("medium", self.medium_heuristic_percent),
            ("hard", self.hard_heuristic_percent),
        ] {
            if percent > 100 {
                return Err(format!(
                    "Heuristic percent for {} must be between 0 and 100, got {}",
                    tier, percent
                ));
            }
        }
        Ok(())
    }
}
