//! Community-discussion sentiment over forum posts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keywords searched per report.
pub const MAX_SENTIMENT_KEYWORDS: usize = 3;
/// Communities searched per keyword, in order.
pub const SUBREDDITS: &[&str] = &["startups", "entrepreneur"];

const POSITIVE_WORDS: &[&str] = &[
    "great", "awesome", "excellent", "love", "amazing", "fantastic", "perfect", "recommend",
    "useful", "helpful",
];
const NEGATIVE_WORDS: &[&str] = &[
    "terrible", "awful", "hate", "worst", "useless", "scam", "avoid", "disappointed",
    "frustrated", "problem",
];
const THEMES: &[&str] = &[
    "startup",
    "business",
    "technology",
    "innovation",
    "market",
    "customer",
    "product",
    "service",
    "growth",
    "funding",
];
const TOP_THEMES: usize = 5;
const TOP_DISCUSSIONS_PER_KEYWORD: usize = 5;
const TOP_DISCUSSIONS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub permalink: String,
}

impl ForumPost {
    /// Lexicon sentiment in [-1, 1]; `None` when the post never names `keyword`.
    pub fn sentiment(&self, keyword: &str) -> Option<f64> {
        let text = format!("{} {}", self.title, self.selftext).to_lowercase();
        if !text.contains(&keyword.to_lowercase()) {
            return None;
        }

        let hits = |words: &[&str]| -> f64 {
            words.iter().map(|w| text.matches(w).count() as f64).sum()
        };
        let mut sentiment = 0.5 * hits(POSITIVE_WORDS) - 0.5 * hits(NEGATIVE_WORDS);
        sentiment += (self.score as f64 / 10.0).clamp(-1.0, 1.0) * 0.3;
        Some(sentiment.clamp(-1.0, 1.0))
    }

    fn relevance(&self, keyword: &str) -> f64 {
        let mut relevance = 0.0;
        if self.title.to_lowercase().contains(&keyword.to_lowercase()) {
            relevance += 3.0;
        }
        relevance += (self.score as f64 / 10.0).min(2.0);
        relevance += (self.num_comments as f64 / 20.0).min(1.0);
        relevance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > 0.3 {
            Self::Positive
        } else if score < -0.3 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCount {
    pub theme: String,
    pub mentions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discussion {
    pub title: String,
    pub score: i64,
    pub comments: u64,
    pub subreddit: String,
    pub relevance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSentiment {
    pub keyword: String,
    pub sentiment: SentimentLabel,
    pub sentiment_score: f64,
    pub total_posts: usize,
    pub avg_score: f64,
    pub total_comments: u64,
    pub themes: Vec<ThemeCount>,
    pub top_discussions: Vec<Discussion>,
}

impl KeywordSentiment {
    /// Analyze the posts found for one keyword. `None` when there are none.
    pub fn analyze(keyword: &str, posts: &[ForumPost]) -> Option<Self> {
        if posts.is_empty() {
            return None;
        }

        let scored: Vec<f64> = posts.iter().filter_map(|p| p.sentiment(keyword)).collect();
        let avg_sentiment = if scored.is_empty() {
            0.0
        } else {
            scored.iter().sum::<f64>() / scored.len() as f64
        };

        let mut themes = BTreeMap::new();
        for post in posts {
            count_themes(&post.title, &mut themes);
        }

        let mut discussions: Vec<Discussion> = posts
            .iter()
            .filter(|p| p.score > 0 || p.num_comments > 5)
            .map(|p| Discussion {
                title: p.title.clone(),
                score: p.score,
                comments: p.num_comments,
                subreddit: p.subreddit.clone(),
                relevance: p.relevance(keyword),
            })
            .collect();
        sort_by_relevance(&mut discussions);
        discussions.truncate(TOP_DISCUSSIONS_PER_KEYWORD);

        Some(Self {
            keyword: keyword.to_string(),
            sentiment: SentimentLabel::from_score(avg_sentiment),
            sentiment_score: round2(avg_sentiment),
            total_posts: posts.len(),
            avg_score: posts.iter().map(|p| p.score as f64).sum::<f64>() / posts.len() as f64,
            total_comments: posts.iter().map(|p| p.num_comments).sum(),
            themes: top_themes(themes),
            top_discussions: discussions,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentReport {
    pub keywords: Vec<String>,
    pub overall_sentiment: SentimentLabel,
    pub sentiment_score: f64,
    pub total_posts: usize,
    pub total_comments: u64,
    pub keyword_results: Vec<KeywordSentiment>,
    pub themes: Vec<ThemeCount>,
    pub top_discussions: Vec<Discussion>,
    pub market_insights: Vec<String>,
}

impl SentimentReport {
    pub fn aggregate(keywords: Vec<String>, results: Vec<KeywordSentiment>) -> Self {
        if results.is_empty() {
            return Self {
                keywords,
                overall_sentiment: SentimentLabel::Neutral,
                sentiment_score: 0.0,
                total_posts: 0,
                total_comments: 0,
                keyword_results: Vec::new(),
                themes: Vec::new(),
                top_discussions: Vec::new(),
                market_insights: vec!["No discussion data available for analysis".to_string()],
            };
        }

        let avg = results.iter().map(|r| r.sentiment_score).sum::<f64>() / results.len() as f64;

        let mut themes = BTreeMap::new();
        for theme in results.iter().flat_map(|r| &r.themes) {
            *themes.entry(theme.theme.clone()).or_insert(0) += theme.mentions;
        }
        let themes = top_themes(themes);

        let mut discussions: Vec<Discussion> = results
            .iter()
            .flat_map(|r| r.top_discussions.iter().cloned())
            .collect();
        sort_by_relevance(&mut discussions);
        discussions.truncate(TOP_DISCUSSIONS);

        let market_insights = market_insights(&results, &themes);
        Self {
            keywords,
            overall_sentiment: SentimentLabel::from_score(avg),
            sentiment_score: round2(avg),
            total_posts: results.iter().map(|r| r.total_posts).sum(),
            total_comments: results.iter().map(|r| r.total_comments).sum(),
            keyword_results: results,
            themes,
            top_discussions: discussions,
            market_insights,
        }
    }

    pub fn has_data(&self) -> bool {
        self.total_posts > 0
    }
}

fn market_insights(results: &[KeywordSentiment], themes: &[ThemeCount]) -> Vec<String> {
    let mut insights = Vec::new();

    let positive = results.iter().filter(|r| r.sentiment_score > 0.2).count();
    let negative = results.iter().filter(|r| r.sentiment_score < -0.2).count();
    if positive > negative {
        insights.push("Generally positive sentiment detected in discussions".to_string());
    } else if negative > positive {
        insights.push("Some negative sentiment found - investigate potential concerns".to_string());
    }

    let engagement: u64 = results.iter().map(|r| r.total_comments).sum();
    if engagement > 50 {
        insights.push("High engagement levels suggest active market interest".to_string());
    } else if engagement < 10 {
        insights.push("Limited discussion volume may indicate niche market".to_string());
    }

    if !themes.is_empty() {
        let names: Vec<&str> = themes.iter().take(3).map(|t| t.theme.as_str()).collect();
        insights.push(format!("Key discussion themes: {}", names.join(", ")));
    }
    insights
}

fn count_themes(title: &str, themes: &mut BTreeMap<String, u32>) {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    for word in cleaned.split_whitespace() {
        if THEMES.contains(&word) {
            *themes.entry(word.to_string()).or_insert(0) += 1;
        }
    }
}

/// Most-mentioned first; ties alphabetical.
fn top_themes(themes: BTreeMap<String, u32>) -> Vec<ThemeCount> {
    let mut counts: Vec<ThemeCount> = themes
        .into_iter()
        .map(|(theme, mentions)| ThemeCount { theme, mentions })
        .collect();
    counts.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    counts.truncate(TOP_THEMES);
    counts
}

fn sort_by_relevance(discussions: &mut [Discussion]) {
    discussions.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, body: &str, score: i64, comments: u64) -> ForumPost {
        ForumPost {
            title: title.to_string(),
            selftext: body.to_string(),
            score,
            num_comments: comments,
            subreddit: "startups".to_string(),
            permalink: String::new(),
        }
    }

    #[test]
    fn test_post_sentiment() {
        let p = post("Budget app review", "great and helpful budget tool", 10, 0);
        // 2 positive hits * 0.5 + 1.0 * 0.3 = 1.3 -> clamped
        assert_eq!(p.sentiment("budget"), Some(1.0));

        let p = post("Budget apps are a scam", "", 0, 0);
        assert_eq!(p.sentiment("budget"), Some(-0.5));

        assert_eq!(post("Unrelated", "", 5, 0).sentiment("budget"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SentimentLabel::from_score(0.31), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.3), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.31), SentimentLabel::Negative);
    }

    #[test]
    fn test_keyword_analysis() {
        let posts = vec![
            post("Budget startup growth", "love it", 20, 10),
            post("Budget startup question", "", 0, 0),
        ];
        let result = KeywordSentiment::analyze("budget", &posts).unwrap();
        assert_eq!(result.total_posts, 2);
        assert_eq!(result.total_comments, 10);
        assert_eq!(result.themes[0], ThemeCount { theme: "startup".into(), mentions: 2 });
        assert_eq!(result.top_discussions.len(), 1);
        assert!(KeywordSentiment::analyze("budget", &[]).is_none());
    }

    #[test]
    fn test_empty_aggregate() {
        let report = SentimentReport::aggregate(vec!["x".into()], vec![]);
        assert!(!report.has_data());
        assert_eq!(report.overall_sentiment, SentimentLabel::Neutral);
        assert_eq!(report.market_insights.len(), 1);
    }

    #[test]
    fn test_aggregate_insights() {
        let posts = vec![post("Budget tool is great", "awesome", 20, 60)];
        let result = KeywordSentiment::analyze("budget", &posts).unwrap();
        let report = SentimentReport::aggregate(vec!["budget".into()], vec![result]);
        assert_eq!(report.overall_sentiment, SentimentLabel::Positive);
        assert!(report.market_insights.iter().any(|i| i.contains("positive sentiment")));
        assert!(report.market_insights.iter().any(|i| i.contains("High engagement")));
    }
}
