#![allow(dead_code)]

//! Score tiering: maps the numeric score to a qualitative label for
//! display. Thresholds are presentation policy and live only here; the
//! parser stores the raw number.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// score > 90
    Excellent,
    /// 80 < score <= 90
    Strong,
    /// score <= 80
    NeedsWork,
}

impl ScoreTier {
    pub fn from_score(score: u32) -> Self {
        if score > 90 {
            ScoreTier::Excellent
        } else if score > 80 {
            ScoreTier::Strong
        } else {
            ScoreTier::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent match",
            ScoreTier::Strong => "Strong match",
            ScoreTier::NeedsWork => "Needs work",
        }
    }
}
