//! Community sentiment from Reddit's public search listing.

use crate::http;
use async_trait::async_trait;
use ideascore_application::{AnalysisProvider, ProviderError, RateLimiter};
use ideascore_domain::signals::sentiment::{MAX_SENTIMENT_KEYWORDS, SUBREDDITS};
use ideascore_domain::signals::{ForumPost, KeywordSentiment};
use ideascore_domain::{AnalysisRequest, ProviderKind, ProviderPayload, SentimentReport};
use serde::Deserialize;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

const POSTS_PER_SUBREDDIT: &str = "10";

pub struct RedditSentimentProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    data: RawPost,
}

#[derive(Debug, Deserialize)]
struct RawPost {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    selftext: Option<String>,
    #[serde(default)]
    score: Option<i64>,
    #[serde(default)]
    num_comments: Option<u64>,
    #[serde(default)]
    subreddit: Option<String>,
    #[serde(default)]
    permalink: Option<String>,
}

impl From<RawPost> for ForumPost {
    fn from(raw: RawPost) -> Self {
        ForumPost {
            title: raw.title.unwrap_or_default(),
            selftext: raw.selftext.unwrap_or_default(),
            score: raw.score.unwrap_or(0),
            num_comments: raw.num_comments.unwrap_or(0),
            subreddit: raw.subreddit.unwrap_or_default(),
            permalink: raw.permalink.unwrap_or_default(),
        }
    }
}

impl RedditSentimentProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn subreddit_posts(
        &self,
        subreddit: &str,
        keyword: &str,
        pacer: &RateLimiter,
    ) -> Result<Vec<ForumPost>, ProviderError> {
        pacer.wait().await;
        let listing: Listing = http::get_json(
            self.client
                .get(format!("{}/r/{}/search.json", self.base_url, subreddit))
                .query(&[
                    ("q", keyword),
                    ("restrict_sr", "1"),
                    ("limit", POSTS_PER_SUBREDDIT),
                    ("sort", "relevance"),
                ]),
        )
        .await?;
        Ok(listing_posts(listing))
    }
}

fn listing_posts(listing: Listing) -> Vec<ForumPost> {
    listing
        .data
        .children
        .into_iter()
        .map(|child| ForumPost::from(child.data))
        .filter(|post| !post.title.is_empty())
        .collect()
}

#[async_trait]
impl AnalysisProvider for RedditSentimentProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Sentiment
    }

    async fn fetch(
        &self,
        request: &AnalysisRequest,
        pacer: &RateLimiter,
    ) -> Result<ProviderPayload, ProviderError> {
        let keywords = request.keywords.as_slice();
        if keywords.is_empty() {
            return Err(ProviderError::EmptyQuery);
        }

        let mut results = Vec::new();
        let mut answered = 0;
        let mut last_error = None;

        for keyword in keywords.iter().take(MAX_SENTIMENT_KEYWORDS) {
            let mut posts = Vec::new();
            for subreddit in SUBREDDITS {
                match self.subreddit_posts(subreddit, keyword, pacer).await {
                    Ok(found) => {
                        answered += 1;
                        posts.extend(found);
                    }
                    Err(e) => {
                        warn!("r/{} search failed for {:?}: {}", subreddit, keyword, e);
                        last_error = Some(e);
                    }
                }
            }
            debug!("sentiment: {} posts for {:?}", posts.len(), keyword);
            results.extend(KeywordSentiment::analyze(keyword, &posts));
        }

        if answered == 0
            && let Some(e) = last_error
        {
            return Err(e);
        }
        Ok(ProviderPayload::Sentiment(SentimentReport::aggregate(
            keywords.to_vec(),
            results,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_posts_maps_fields() {
        let body = r#"{
          "kind": "Listing",
          "data": {
            "children": [
              {"kind": "t3", "data": {
                "title": "Is invoicing software worth it?",
                "selftext": null,
                "score": 42,
                "num_comments": 7,
                "subreddit": "startups",
                "permalink": "/r/startups/comments/abc/"
              }},
              {"kind": "t3", "data": {"title": "", "score": 1}}
            ]
          }
        }"#;
        let listing: Listing = serde_json::from_str(body).unwrap();
        let posts = listing_posts(listing);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Is invoicing software worth it?");
        assert_eq!(posts[0].selftext, "");
        assert_eq!(posts[0].score, 42);
        assert_eq!(posts[0].num_comments, 7);
        assert_eq!(posts[0].subreddit, "startups");
    }

    #[test]
    fn test_listing_without_children() {
        let listing: Listing = serde_json::from_str(r#"{"data": {}}"#).unwrap();
        assert!(listing_posts(listing).is_empty());
    }

    #[tokio::test]
    async fn test_empty_keywords_rejected() {
        let provider = RedditSentimentProvider::new(reqwest::Client::new(), DEFAULT_BASE_URL);
        let request = AnalysisRequest::new(Default::default(), Default::default());
        let result = provider.fetch(&request, &RateLimiter::unpaced()).await;
        assert_eq!(result, Err(ProviderError::EmptyQuery));
    }
}
