//! Startup, funding-round and investor data from the Crunchbase v4 API.
//!
//! The three lookups are independent: each one that fails is logged and left
//! out of the aggregate. Only when all three fail does the fetch fail.

use crate::http;
use async_trait::async_trait;
use chrono::Datelike;
use ideascore_application::{AnalysisProvider, ProviderError, RateLimiter};
use ideascore_domain::signals::funding::{
    FundingPatterns, FundingRound, Investor, InvestorEcosystem, Organization, StartupLandscape,
};
use ideascore_domain::{AnalysisRequest, MarketData, ProviderKind, ProviderPayload};
use serde_json::Value;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.crunchbase.com/api/v4";
pub const DEFAULT_API_KEY_ENV: &str = "CRUNCHBASE_API_KEY";

const API_KEY_HEADER: &str = "X-cb-user-key";

pub struct CrunchbaseFundingProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl CrunchbaseFundingProvider {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    async fn search(
        &self,
        api_key: &str,
        collection: &str,
        params: &[(&str, &str)],
        pacer: &RateLimiter,
    ) -> Result<Value, ProviderError> {
        pacer.wait().await;
        http::get_json(
            self.client
                .get(format!("{}/searches/{}", self.base_url, collection))
                .header(API_KEY_HEADER, api_key)
                .header(reqwest::header::ACCEPT, "application/json")
                .query(params),
        )
        .await
    }
}

#[async_trait]
impl AnalysisProvider for CrunchbaseFundingProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Funding
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn cache_key(&self, request: &AnalysisRequest) -> String {
        format!("{}:{}", request.keywords.cache_key(), request.industry)
    }

    async fn fetch(
        &self,
        request: &AnalysisRequest,
        pacer: &RateLimiter,
    ) -> Result<ProviderPayload, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::NotConfigured)?;
        let industry = request.industry.as_str();
        let query = request.keywords.as_slice().join(" OR ");

        let organization_params = [
            ("query", query.as_str()),
            ("limit", "50"),
            ("order", "created_at DESC"),
            ("categories", industry),
        ];
        let round_params = [
            ("limit", "100"),
            ("order", "announced_on DESC"),
            ("categories", industry),
        ];
        let principal_params = [
            ("limit", "50"),
            ("order", "created_at DESC"),
            ("categories", industry),
        ];

        let (startups, rounds, investors) = tokio::join!(
            self.search(api_key, "organizations", &organization_params, pacer),
            self.search(api_key, "funding_rounds", &round_params, pacer),
            self.search(api_key, "principals", &principal_params, pacer),
        );

        let mut last_error = None;
        let mut settle = |label: &str, outcome: Result<Value, ProviderError>| match outcome {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("crunchbase {} lookup failed: {}", label, e);
                last_error = Some(e);
                None
            }
        };
        let startups = settle("organizations", startups);
        let rounds = settle("funding_rounds", rounds);
        let investors = settle("principals", investors);

        if startups.is_none()
            && rounds.is_none()
            && investors.is_none()
            && let Some(e) = last_error
        {
            return Err(e);
        }

        let current_year = chrono::Utc::now().year();
        let landscape =
            startups.map(|body| StartupLandscape::analyze(&organizations(&body), current_year));
        let funding =
            rounds.map(|body| FundingPatterns::analyze(&funding_rounds(&body), current_year));
        let ecosystem =
            investors.map(|body| InvestorEcosystem::from_investors(active_investors(&body)));
        debug!(
            "crunchbase: landscape={} funding={} investors={}",
            landscape.is_some(),
            funding.is_some(),
            ecosystem.is_some()
        );

        Ok(ProviderPayload::Funding(MarketData::aggregate(
            request.keywords.as_slice().to_vec(),
            industry,
            landscape,
            funding,
            ecosystem,
        )))
    }
}

fn entities(body: &Value) -> impl Iterator<Item = &Value> {
    body["entities"]
        .as_array()
        .into_iter()
        .flatten()
        .map(|entity| &entity["properties"])
}

fn string_at(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

/// An identifier is either a bare string or an object with a `value`.
fn identifier(value: &Value) -> Option<String> {
    string_at(value).or_else(|| string_at(&value["value"]))
}

/// Year from `{"year": 2021}`, `{"value": "2021-03-01"}` or `"2021-03-01"`.
fn year_of(value: &Value) -> Option<i32> {
    if let Some(year) = value["year"].as_i64() {
        return i32::try_from(year).ok();
    }
    identifier(value)?.get(..4)?.parse().ok()
}

fn organizations(body: &Value) -> Vec<Organization> {
    entities(body)
        .filter_map(|p| {
            Some(Organization {
                name: string_at(&p["name"])?,
                founded_year: year_of(&p["founded_on"]),
                categories: p["categories"]
                    .as_array()
                    .into_iter()
                    .flatten()
                    .filter_map(identifier)
                    .collect(),
                location: identifier(&p["location_identifiers"][0]),
                total_funding_usd: p["total_funding_usd"].as_f64(),
                funding_stage: string_at(&p["last_funding_type"]),
            })
        })
        .collect()
}

fn funding_rounds(body: &Value) -> Vec<FundingRound> {
    entities(body)
        .filter_map(|p| {
            let amount_usd = p["money_raised"]["value_usd"].as_f64()?;
            (amount_usd > 0.0).then(|| FundingRound {
                amount_usd,
                year: year_of(&p["announced_on"]),
                stage: string_at(&p["investment_type"]),
                organization_name: identifier(&p["organization_identifier"]),
            })
        })
        .collect()
}

fn active_investors(body: &Value) -> Vec<Investor> {
    entities(body)
        .filter(|p| {
            let title = p["primary_job_title"].as_str().unwrap_or_default();
            let groups = &p["primary_organization"]["category_groups"];
            title.to_lowercase().contains("investor")
                || groups
                    .as_array()
                    .into_iter()
                    .flatten()
                    .filter_map(Value::as_str)
                    .any(|g| g.to_lowercase().contains("investor"))
        })
        .filter_map(|p| {
            Some(Investor {
                name: string_at(&p["name"])?,
                organization: identifier(&p["primary_organization"]),
                job_title: string_at(&p["primary_job_title"]),
                investment_count: p["num_investments"]
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok()),
            })
        })
        .collect()
}
