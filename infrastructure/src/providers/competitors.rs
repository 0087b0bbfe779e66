//! Competitor discovery by scraping DuckDuckGo's HTML results page.

use crate::http;
use async_trait::async_trait;
use ideascore_application::{AnalysisProvider, ProviderError, RateLimiter};
use ideascore_domain::signals::SearchHit;
use ideascore_domain::signals::competitors::{
    MAX_QUERIES, normalize_domain, rank_hits, search_queries,
};
use ideascore_domain::{AnalysisRequest, CompetitorReport, ProviderKind, ProviderPayload};
use reqwest::Url;
use scraper::{Html, Selector};
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com/html/";

pub struct WebSearchCompetitorProvider {
    client: reqwest::Client,
    base_url: String,
}

impl WebSearchCompetitorProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn search(
        &self,
        query: &str,
        pacer: &RateLimiter,
    ) -> Result<Vec<SearchHit>, ProviderError> {
        pacer.wait().await;
        let page = http::get_text(self.client.get(&self.base_url).query(&[("q", query)])).await?;
        parse_results(&page)
    }
}

#[async_trait]
impl AnalysisProvider for WebSearchCompetitorProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Competitors
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

        let queries: Vec<String> = search_queries(keywords)
            .into_iter()
            .take(MAX_QUERIES)
            .collect();
        let mut report = CompetitorReport::new(keywords.to_vec(), queries.clone());
        let mut answered = 0;
        let mut last_error = None;

        for query in &queries {
            let hits = match self.search(query, pacer).await {
                Ok(hits) => hits,
                Err(e) => {
                    warn!("competitor search failed for {:?}: {}", query, e);
                    last_error = Some(e);
                    continue;
                }
            };
            answered += 1;
            debug!("competitor search {:?}: {} raw hits", query, hits.len());

            for (hit, relevance) in rank_hits(hits, query) {
                let Some(domain) = result_domain(&hit.url) else {
                    continue;
                };
                report.admit(hit, relevance, domain, query);
            }
        }

        if answered == 0
            && let Some(e) = last_error
        {
            return Err(e);
        }
        Ok(ProviderPayload::Competitors(report))
    }
}

/// Organic results in page order. Ads carry the `result--ad` class and are skipped.
fn parse_results(page: &str) -> Result<Vec<SearchHit>, ProviderError> {
    let selector = |css: &str| {
        Selector::parse(css).map_err(|e| ProviderError::Other(format!("bad selector {css}: {e}")))
    };
    let result_sel = selector(".result")?;
    let link_sel = selector("a.result__a")?;
    let snippet_sel = selector(".result__snippet")?;

    let document = Html::parse_document(page);
    let hits = document
        .select(&result_sel)
        .filter(|result| {
            !result
                .value()
                .classes()
                .any(|class| class == "result--ad")
        })
        .filter_map(|result| {
            let link = result.select(&link_sel).next()?;
            let href = link.value().attr("href")?;
            let title = collapse_whitespace(&link.text().collect::<String>());
            let snippet = result
                .select(&snippet_sel)
                .next()
                .map(|s| collapse_whitespace(&s.text().collect::<String>()))
                .unwrap_or_default();
            Some(SearchHit {
                title,
                url: resolve_href(href)?,
                snippet,
            })
        })
        .collect();
    Ok(hits)
}

/// Unwrap DuckDuckGo's `/l/?uddg=` redirect into the target URL.
fn resolve_href(href: &str) -> Option<String> {
    let absolute = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };
    let url = Url::parse(&absolute).ok()?;

    let is_redirect = url
        .host_str()
        .is_some_and(|host| host.ends_with("duckduckgo.com"))
        && url.path().starts_with("/l/");
    if is_redirect {
        return url
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, target)| target.into_owned());
    }
    Some(url.to_string())
}

fn result_domain(url: &str) -> Option<String> {
    let url = Url::parse(url).ok()?;
    url.host_str().map(normalize_domain)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
