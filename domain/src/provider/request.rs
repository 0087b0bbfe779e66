//! Input handed to every analysis provider.

use crate::idea::{IdeaComponents, KeywordSet, infer_industry};

/// Everything a provider may look at for one validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub components: IdeaComponents,
    pub keywords: KeywordSet,
    /// Industry tag used to scope firmographic lookups.
    pub industry: String,
}

impl AnalysisRequest {
    pub fn new(components: IdeaComponents, keywords: KeywordSet) -> Self {
        let industry = infer_industry(&components).to_string();
        Self {
            components,
            keywords,
            industry,
        }
    }
}
