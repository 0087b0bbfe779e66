//! Problem clarity: how concretely the problem statement is framed.

use crate::core::text::TextScan;

const PROBLEM_TERMS: &[&str] = &[
    "problem",
    "problems",
    "issue",
    "issues",
    "challenge",
    "challenges",
    "pain",
    "struggle",
    "struggles",
    "struggling",
    "difficult",
    "frustrating",
    "frustrated",
];
const AUDIENCE_TERMS: &[&str] = &[
    "people",
    "users",
    "customers",
    "businesses",
    "owners",
    "teams",
    "consumers",
];
const URGENCY_TERMS: &[&str] = &[
    "need",
    "needs",
    "want",
    "wants",
    "require",
    "requires",
    "must",
    "daily",
    "every day",
    "urgent",
];
const MIN_SPECIFIC_CHARS: usize = 20;

/// Additive score; 2 points each for length, problem wording, audience,
/// a quantity and urgency.
pub fn score(problem: &str) -> i32 {
    let scan = TextScan::new(problem);
    let mut score = 0;
    if problem.chars().count() > MIN_SPECIFIC_CHARS {
        score += 2;
    }
    if scan.contains_any(PROBLEM_TERMS) {
        score += 2;
    }
    if scan.contains_any(AUDIENCE_TERMS) {
        score += 2;
    }
    if scan.has_digit() {
        score += 2;
    }
    if scan.contains_any(URGENCY_TERMS) {
        score += 2;
    }
    score.min(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_problem() {
        // length, struggle, users, daily
        assert_eq!(score("Users struggle to track expenses daily"), 8);
    }

    #[test]
    fn test_full_marks() {
        assert_eq!(score("40% of customers need a fix for this billing problem"), 10);
    }

    #[test]
    fn test_empty_problem() {
        assert_eq!(score(""), 0);
        assert_eq!(score("short"), 0);
    }
}
