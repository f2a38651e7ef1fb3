// ⚖️ Scoring Engine - combine every rule into a single score
// Stateless: nothing is cached here, the registry owns scores

use serde::{Deserialize, Serialize};

use crate::receipt::Receipt;
use crate::rules::Rule;

/// Total points for a receipt: the sum of every rule's output,
/// saturating at `u64::MAX`
pub fn compute_score(receipt: &Receipt) -> u64 {
    Rule::ALL
        .iter()
        .map(|rule| rule.points(receipt))
        .fold(0u64, u64::saturating_add)
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// Points awarded by a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePoints {
    pub rule: Rule,
    pub points: u64,
}

/// Per-rule contributions for one receipt, in rule order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u64,
    pub rules: Vec<RulePoints>,
}

impl ScoreBreakdown {
    pub fn for_receipt(receipt: &Receipt) -> Self {
        let rules: Vec<RulePoints> = Rule::ALL
            .iter()
            .map(|&rule| RulePoints {
                rule,
                points: rule.points(receipt),
            })
            .collect();

        let total = rules
            .iter()
            .map(|r| r.points)
            .fold(0u64, u64::saturating_add);

        ScoreBreakdown { total, rules }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Points contributed by one rule
    pub fn points_for(&self, rule: Rule) -> u64 {
        self.rules
            .iter()
            .find(|r| r.rule == rule)
            .map(|r| r.points)
            .unwrap_or(0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
