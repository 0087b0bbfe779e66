//! External and local signals gathered about an idea.
//!
//! Each submodule owns one provider's payload record plus the pure analysis
//! that turns raw observations into it. Network access lives elsewhere.

pub mod competitors;
pub mod feasibility;
pub mod funding;
pub mod sentiment;
pub mod trends;

pub use competitors::{CompetitionLevel, Competitor, CompetitorReport, SearchHit};
pub use feasibility::FeasibilityReport;
pub use funding::MarketData;
pub use sentiment::{ForumPost, KeywordSentiment, SentimentLabel, SentimentReport};
pub use trends::{KeywordTrend, TrendDirection, TrendsReport};
