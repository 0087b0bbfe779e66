//! Search-interest trends via the public Google Trends web API.
//!
//! Each keyword takes two requests: `explore` returns widget descriptors and
//! the `TIMESERIES` widget's token, then `widgetdata/multiline` returns the
//! 12-month interest series. Both responses carry an anti-JSON-hijacking
//! prefix that is stripped before decoding.

use crate::http;
use async_trait::async_trait;
use ideascore_application::{AnalysisProvider, ProviderError, RateLimiter};
use ideascore_domain::signals::KeywordTrend;
use ideascore_domain::{AnalysisRequest, ProviderKind, ProviderPayload, TrendsReport};
use serde_json::{Value, json};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://trends.google.com/trends/api";

const TIMESERIES_WIDGET: &str = "TIMESERIES";
const TIME_RANGE: &str = "today 12-m";
const GEO: &str = "US";

pub struct GoogleTrendsProvider {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTrendsProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn keyword_series(
        &self,
        keyword: &str,
        pacer: &RateLimiter,
    ) -> Result<Vec<u32>, ProviderError> {
        let explore_req = json!({
            "comparisonItem": [{ "keyword": keyword, "geo": GEO, "time": TIME_RANGE }],
            "category": 0,
            "property": "",
        });

        let explore_req = explore_req.to_string();

        pacer.wait().await;
        let body = http::get_text(
            self.client
                .get(format!("{}/explore", self.base_url))
                .query(&[("hl", "en-US"), ("tz", "0"), ("req", explore_req.as_str())]),
        )
        .await?;
        let (token, request) = timeseries_widget(&body)?;
        let request = request.to_string();

        pacer.wait().await;
        let body = http::get_text(
            self.client
                .get(format!("{}/widgetdata/multiline", self.base_url))
                .query(&[
                    ("hl", "en-US"),
                    ("tz", "0"),
                    ("req", request.as_str()),
                    ("token", token.as_str()),
                ]),
        )
        .await?;
        parse_timeline(&body)
    }
}

#[async_trait]
impl AnalysisProvider for GoogleTrendsProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Trends
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

        let mut trends = Vec::new();
        let mut last_error = None;
        for keyword in keywords {
            match self.keyword_series(keyword, pacer).await {
                Ok(series) => {
                    debug!("trends: {} points for {:?}", series.len(), keyword);
                    trends.extend(KeywordTrend::from_series(keyword, &series));
                }
                Err(e) => {
                    warn!("trends lookup failed for {:?}: {}", keyword, e);
                    last_error = Some(e);
                }
            }
        }

        if trends.is_empty()
            && let Some(e) = last_error
        {
            return Err(e);
        }
        Ok(ProviderPayload::Trends(TrendsReport::new(
            keywords.to_vec(),
            trends,
        )))
    }
}

/// Decode a Trends body, skipping the `)]}'` guard line.
fn decode_guarded(body: &str) -> Result<Value, ProviderError> {
    let start = body
        .find('{')
        .ok_or_else(|| ProviderError::Parse("no JSON object in response".to_string()))?;
    serde_json::from_str(&body[start..]).map_err(|e| ProviderError::Parse(e.to_string()))
}

/// Token and request descriptor of the interest-over-time widget.
fn timeseries_widget(body: &str) -> Result<(String, Value), ProviderError> {
    let explore = decode_guarded(body)?;
    let widget = explore["widgets"]
        .as_array()
        .and_then(|widgets| {
            widgets
                .iter()
                .find(|w| w["id"].as_str() == Some(TIMESERIES_WIDGET))
        })
        .ok_or_else(|| ProviderError::Parse("missing TIMESERIES widget".to_string()))?;

    let token = widget["token"]
        .as_str()
        .ok_or_else(|| ProviderError::Parse("widget has no token".to_string()))?;
    if widget["request"].is_null() {
        return Err(ProviderError::Parse("widget has no request".to_string()));
    }
    Ok((token.to_string(), widget["request"].clone()))
}

/// First value of every timeline point. Empty when the keyword has no data.
fn parse_timeline(body: &str) -> Result<Vec<u32>, ProviderError> {
    let data = decode_guarded(body)?;
    let Some(points) = data["default"]["timelineData"].as_array() else {
        return Ok(Vec::new());
    };
    Ok(points
        .iter()
        .filter_map(|p| p["value"][0].as_u64())
        .map(|v| v.min(u32::MAX as u64) as u32)
        .collect())
}
