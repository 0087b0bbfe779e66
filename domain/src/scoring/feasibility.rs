//! Feasibility: solution concreteness, team strength and competitive room.

use crate::core::text::TextScan;
use crate::idea::IdeaComponents;

const DELIVERY_TERMS: &[&str] = &["technology", "app", "platform", "service", "tool"];
const EASE_TERMS: &[&str] = &["simple", "easy"];
const EXPERIENCE_TERMS: &[&str] = &["experience", "experienced", "expert", "experts"];
const TECHNICAL_TERMS: &[&str] = &[
    "developer",
    "developers",
    "engineer",
    "engineers",
    "technical",
];
const BUSINESS_TERMS: &[&str] = &["business", "marketing", "sales"];
const ROOM_TERMS: &[&str] = &["few", "limited", "niche"];
const EDGE_TERMS: &[&str] = &["advantage", "unique"];
const MIN_DETAILED_SOLUTION_CHARS: usize = 30;

/// Whether the team description signals experience.
pub fn team_is_experienced(team: &str) -> bool {
    TextScan::new(team).contains_any(EXPERIENCE_TERMS)
}

/// Additive score over solution, team and competition text.
pub fn score(components: &IdeaComponents) -> i32 {
    let solution = IdeaComponents::meaningful(&components.solution);
    let team = TextScan::new(IdeaComponents::meaningful(&components.team));
    let competition = TextScan::new(IdeaComponents::meaningful(&components.competition));
    let solution_scan = TextScan::new(solution);

    let mut score = 0;
    if solution.chars().count() > MIN_DETAILED_SOLUTION_CHARS {
        score += 2;
    }
    if solution_scan.contains_any(DELIVERY_TERMS) {
        score += 1;
    }
    if solution_scan.contains_any(EASE_TERMS) {
        score += 1;
    }

    if team.contains_any(EXPERIENCE_TERMS) {
        score += 2;
    }
    if team.contains_any(TECHNICAL_TERMS) {
        score += 1;
    }
    if team.contains_any(BUSINESS_TERMS) {
        score += 1;
    }

    if competition.contains_any(ROOM_TERMS) {
        score += 2;
    }
    if competition.contains_any(EDGE_TERMS) {
        score += 1;
    }
    score
}
