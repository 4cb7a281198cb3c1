//! Domain models shared by the store implementations and the API layer

use serde::{Deserialize, Serialize};

/// A stored question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Fields for creating a question
///
/// All three fields are required; the category becomes immutable once
/// the row exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// Partial update for a question
///
/// `None` means "leave the stored value unchanged", never "clear".
/// The category is deliberately absent: it cannot be updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A stored answer, immutable after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub content: String,
}

/// A single vote ledger entry value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    /// Signed unit value as stored in the ledger
    pub fn value(self) -> i16 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }

    /// Parse a raw vote value; only +1 and -1 are valid
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Vote::Up),
            -1 => Some(Vote::Down),
            _ => None,
        }
    }
}

/// Aggregated score for one vote ledger
///
/// Derived, never persisted. Computed freshly from the ledger on every
/// request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Count of +1 entries
    pub plus: i64,
    /// Count of -1 entries
    pub minus: i64,
    /// Signed sum of all entries
    pub score: i64,
}

impl ScoreSummary {
    /// Reduce a vote ledger into a summary.
    ///
    /// An empty ledger yields `{plus: 0, minus: 0, score: 0}`.
    pub fn tally<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i16>,
    {
        let mut summary = ScoreSummary::default();
        for value in values {
            if value == 1 {
                summary.plus += 1;
            } else if value == -1 {
                summary.minus += 1;
            }
            summary.score += i64::from(value);
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_values() {
        assert_eq!(Vote::Up.value(), 1);
        assert_eq!(Vote::Down.value(), -1);
    }

    #[test]
    fn test_vote_from_value() {
        assert_eq!(Vote::from_value(1), Some(Vote::Up));
        assert_eq!(Vote::from_value(-1), Some(Vote::Down));
        assert_eq!(Vote::from_value(0), None);
        assert_eq!(Vote::from_value(2), None);
        assert_eq!(Vote::from_value(-2), None);
    }

    #[test]
    fn test_tally_empty_ledger() {
        let summary = ScoreSummary::tally([]);
        assert_eq!(summary, ScoreSummary { plus: 0, minus: 0, score: 0 });
    }

    #[test]
    fn test_tally_mixed_ledger() {
        let summary = ScoreSummary::tally([1, 1, -1]);
        assert_eq!(summary.plus, 2);
        assert_eq!(summary.minus, 1);
        assert_eq!(summary.score, 1);
    }

    #[test]
    fn test_tally_all_negative() {
        let summary = ScoreSummary::tally([-1, -1, -1]);
        assert_eq!(summary, ScoreSummary { plus: 0, minus: 3, score: -3 });
    }

    #[test]
    fn test_tally_matches_plus_minus_difference() {
        let ledger = [1, -1, 1, 1, -1, 1];
        let summary = ScoreSummary::tally(ledger);
        assert_eq!(summary.score, summary.plus - summary.minus);
    }

    #[test]
    fn test_score_summary_serializes_flat() {
        let summary = ScoreSummary { plus: 2, minus: 1, score: 1 };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json, serde_json::json!({"plus": 2, "minus": 1, "score": 1}));
    }

    #[test]
    fn test_question_patch_default_is_no_change() {
        let patch = QuestionPatch::default();
        assert!(patch.title.is_none());
        assert!(patch.description.is_none());
    }
}
