//! Competitor discovery: query planning, result filtering and landscape insights.

use crate::core::string::char_prefix;
use serde::{Deserialize, Serialize};

/// Most competitors kept per report.
pub const MAX_COMPETITORS: usize = 10;
/// Most search queries issued per report.
pub const MAX_QUERIES: usize = 3;
/// Most hits kept from a single results page.
pub const MAX_HITS_PER_QUERY: usize = 5;
const MAX_SNIPPET_CHARS: usize = 200;

const EXCLUDED_PATTERNS: &[&str] = &[
    "wikipedia",
    "wiki",
    "reddit",
    "quora",
    "stackoverflow",
    "youtube",
    "news",
    "blog",
    "article",
    "definition",
    "github",
    "documentation",
    "tutorial",
    "how to",
];

const COMMERCIAL_INDICATORS: &[&str] = &[
    "company", "startup", "software", "platform", "solution", "service", "app", "tool",
    "business", "saas",
];

/// Search queries for a keyword set, in issue order (not yet truncated).
pub fn search_queries(keywords: &[String]) -> Vec<String> {
    let mut queries = Vec::with_capacity(keywords.len() * 2 + 2);
    for keyword in keywords {
        queries.push(format!("\"{keyword}\" startup company"));
        queries.push(format!("\"{keyword}\" software solution"));
    }
    if keywords.len() > 1 {
        let combined = keywords[..2].join(" ");
        queries.push(format!("\"{combined}\" competitors"));
        queries.push(format!("\"{combined}\" alternatives"));
    }
    queries
}

/// One organic result from a search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchHit {
    /// Commercial-looking result that is not an encyclopedia, forum or article.
    pub fn is_commercial(&self) -> bool {
        let text = format!("{} {}", self.title, self.snippet).to_lowercase();
        !EXCLUDED_PATTERNS.iter().any(|p| text.contains(p))
            && COMMERCIAL_INDICATORS.iter().any(|p| text.contains(p))
    }

    /// Query-word occurrences, plus 2 when the title names a startup or company.
    pub fn relevance(&self, query: &str) -> u32 {
        let text = format!("{} {}", self.title, self.snippet).to_lowercase();
        let query = query.to_lowercase().replace(['"', '\''], "");
        let mut score: u32 = query
            .split(' ')
            .filter(|word| word.chars().count() > 2)
            .map(|word| text.matches(word).count() as u32)
            .sum();

        let title = self.title.to_lowercase();
        if title.contains("startup") || title.contains("company") {
            score += 2;
        }
        score
    }
}

/// Keep commercial hits from one page, most relevant first.
pub fn rank_hits(hits: Vec<SearchHit>, query: &str) -> Vec<(SearchHit, u32)> {
    let mut ranked: Vec<(SearchHit, u32)> = hits
        .into_iter()
        .filter(|hit| !hit.title.is_empty() && !hit.url.is_empty() && hit.is_commercial())
        .take(MAX_HITS_PER_QUERY)
        .map(|hit| {
            let score = hit.relevance(query);
            (hit, score)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Hostname with a leading `www.` removed.
pub fn normalize_domain(host: &str) -> String {
    let host = host.trim().to_lowercase();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub domain: String,
    pub relevance_score: u32,
    pub search_query: String,
}

/// Discovered competitors, unique by domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorReport {
    pub competitors: Vec<Competitor>,
    pub total_count: usize,
    pub search_keywords: Vec<String>,
    pub search_queries: Vec<String>,
}

impl CompetitorReport {
    pub fn new(search_keywords: Vec<String>, search_queries: Vec<String>) -> Self {
        Self {
            search_keywords,
            search_queries,
            ..Default::default()
        }
    }

    /// Add a ranked hit unless its domain was seen or the report is full.
    /// `domain` must already be normalized.
    pub fn admit(&mut self, hit: SearchHit, relevance: u32, domain: String, query: &str) -> bool {
        if self.competitors.len() >= MAX_COMPETITORS
            || self.competitors.iter().any(|c| c.domain == domain)
        {
            return false;
        }
        self.competitors.push(Competitor {
            title: hit.title,
            url: hit.url,
            snippet: char_prefix(&hit.snippet, MAX_SNIPPET_CHARS),
            domain,
            relevance_score: relevance,
            search_query: query.to_string(),
        });
        self.total_count = self.competitors.len();
        true
    }

    pub fn level(&self) -> CompetitionLevel {
        CompetitionLevel::from_count(self.total_count)
    }

    pub fn top_domains(&self, n: usize) -> Vec<&str> {
        self.competitors
            .iter()
            .take(n)
            .map(|c| c.domain.as_str())
            .collect()
    }

    /// Landscape insights and recommendations from the discovered count.
    pub fn analysis(&self) -> WebResearchAnalysis {
        let count = self.total_count;
        let (insight, recommendation) = match self.level() {
            CompetitionLevel::None => (
                "No direct competitors found - potential blue ocean or very niche market".to_string(),
                "Validate market demand and consider pivot if market too small",
            ),
            CompetitionLevel::Low => (
                format!("Limited competition with {count} identified competitors"),
                "Move quickly to establish market presence",
            ),
            CompetitionLevel::Moderate => (
                "Moderate competition in the space".to_string(),
                "Focus on differentiation and unique value proposition",
            ),
            CompetitionLevel::High => (
                format!("Highly competitive market with {count}+ players"),
                "Consider niche positioning or significant innovation",
            ),
        };

        let mut key_insights = vec![insight];
        if !self.competitors.is_empty() {
            key_insights.push(format!("Top competitors: {}", self.top_domains(3).join(", ")));
            let high_relevance = self
                .competitors
                .iter()
                .filter(|c| c.relevance_score > 3)
                .count();
            if high_relevance as f64 > self.competitors.len() as f64 * 0.7 {
                key_insights.push("High relevance competitors found - direct competition likely".to_string());
            }
        }

        WebResearchAnalysis {
            competitive_level: self.level(),
            key_insights,
            recommendations: vec![recommendation.to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    None,
    Low,
    Moderate,
    High,
}

impl CompetitionLevel {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1..=3 => Self::Low,
            4..=8 => Self::Moderate,
            _ => Self::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebResearchAnalysis {
    pub competitive_level: CompetitionLevel,
    pub key_insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// How much evidence backs a competition assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
    VeryLow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedAssessment {
    pub confidence: Confidence,
    pub overall_assessment: String,
    pub strategic_recommendations: Vec<String>,
}

/// Merge stated competition text with optional web research.
pub fn combined_assessment(
    report: Option<&CompetitorReport>,
    stated: Option<&str>,
) -> CombinedAssessment {
    let (confidence, overall) = match (report, stated) {
        (Some(_), Some(_)) => (
            Confidence::High,
            "Analysis based on both stated competition and web research",
        ),
        (Some(_), None) => (
            Confidence::Medium,
            "Analysis based primarily on web research findings",
        ),
        (None, Some(_)) => (
            Confidence::Low,
            "Analysis based only on provided competition description",
        ),
        (None, None) => (
            Confidence::VeryLow,
            "Limited competition analysis due to insufficient data",
        ),
    };

    let strategic: &[&str] = match report.map(CompetitorReport::level) {
        Some(CompetitionLevel::None) => &[
            "First-mover advantage opportunity - validate market quickly",
            "Consider why no competitors exist - market size or technical barriers?",
        ],
        Some(CompetitionLevel::Low) => &[
            "Early market with room for growth - establish strong brand",
            "Study existing competitors to understand market needs",
        ],
        Some(CompetitionLevel::Moderate) => &[
            "Differentiate through unique features or superior execution",
            "Consider partnerships or acquisition opportunities",
        ],
        Some(CompetitionLevel::High) => &[
            "Highly competitive - focus on niche market segment",
            "Significant innovation or cost advantage required",
        ],
        None => &[],
    };

    CombinedAssessment {
        confidence,
        overall_assessment: overall.to_string(),
        strategic_recommendations: strategic.iter().map(|s| s.to_string()).collect(),
    }
}
