//! The scoring engine and its per-dimension formulas.
//!
//! | Dimension | Range | Source |
//! |-----------|-------|--------|
//! | problemClarity | 0-10 | [`problem`] |
//! | marketPotential | 0-10 | [`market`], blended with trends |
//! | feasibility | 1-10 | [`feasibility`] |
//! | technicalComplexity | 1-10 (3-10 for B2B/platform) | [`complexity`] |
//! | monetizationViability | 0-10 | [`monetization`] |
//! | timeToMarket | 1-10 | [`time_to_market`] |
//! | competition | 1-10 | [`competition`], replaced by competitor count |

pub mod competition;
pub mod complexity;
pub mod engine;
pub mod feasibility;
pub mod market;
pub mod monetization;
pub mod problem;
pub mod scores;
pub mod time_to_market;

pub use engine::{ScoreSheet, score_idea};
pub use scores::{Dimension, Rating, Scores};
