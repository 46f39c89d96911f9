// src/scoring.rs

use serde::{Deserialize, Serialize};

/// Scoring policy for a test.
///
/// Closed set on the wire: anything other than `"general"` or `"special"` is
/// rejected during deserialization, so an unknown method can never reach the
/// scorer and silently produce a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMethod {
    /// Every correct answer is worth 1 point.
    General,
    /// Points escalate by question position: 1.1 / 2.1 / 3.1.
    Special,
}

impl ScoringMethod {
    /// Wire / database form of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            ScoringMethod::General => "general",
            ScoringMethod::Special => "special",
        }
    }

    /// Points awarded for a correct answer at 0-based question index `i`.
    fn points(self, i: usize) -> f64 {
        match self {
            ScoringMethod::General => 1.0,
            ScoringMethod::Special => {
                if i < 30 {
                    1.1
                } else if i < 60 {
                    2.1
                } else {
                    3.1
                }
            }
        }
    }
}

/// Grades a submitted answer sequence against the test's answer key.
///
/// Answers are compared position-by-position up to `answers.len()`. An index
/// with no counterpart in `correct` counts as a mismatch. Mismatched
/// positions are reported 1-based, in ascending order.
///
/// Returns `(score, wrong_questions)`.
pub fn score(answers: &[i32], correct: &[i32], method: ScoringMethod) -> (f64, Vec<i32>) {
    let mut total = 0.0;
    let mut wrong_questions = Vec::new();

    for (i, answer) in answers.iter().enumerate() {
        if correct.get(i) == Some(answer) {
            total += method.points(i);
        } else {
            wrong_questions.push(i as i32 + 1);
        }
    }

    (total, wrong_questions)
}
