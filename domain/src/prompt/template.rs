//! Prompt templates for the generative text provider

use crate::provider::ValidationContext;
use crate::scoring::{Dimension, Scores};

/// Templates for each generative step
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for component extraction
    pub fn extraction_system() -> &'static str {
        "You are an expert startup analyst. Extract key components from startup ideas with precision and clarity. Always return valid JSON."
    }

    /// User prompt for component extraction
    pub fn extraction_prompt(description: &str) -> String {
        format!(
            r#"Extract structured information from this startup idea description. Return a JSON object with these exact fields:

{{
  "problem": "Clear description of the problem being solved",
  "solution": "The proposed solution or product",
  "market": "Target market and market potential information",
  "competition": "Information about competitors or alternatives",
  "team": "Team information if mentioned, or 'Not specified' if not mentioned"
}}

Startup idea description: "{}"

Important: Return only valid JSON, no additional text or explanation."#,
            description
        )
    }

    /// System prompt for keyword ranking
    pub fn keywords_system() -> &'static str {
        "You are an expert at identifying relevant market research keywords. Always return valid JSON arrays."
    }

    /// User prompt for keyword ranking
    pub fn keywords_prompt(idea_text: &str) -> String {
        format!(
            r#"Extract 3-5 relevant keywords for market research from this startup idea:

"{}"

Focus on:
- Industry/market keywords
- Problem domain keywords
- Technology/solution keywords
- Target audience keywords

Return a JSON array of strings: ["keyword1", "keyword2", "keyword3"]

Important: Return only the JSON array, no additional text."#,
            idea_text.trim()
        )
    }

    /// System prompt for feedback synthesis
    pub fn synthesis_system() -> &'static str {
        "You are a senior startup advisor. Provide concise, actionable insights based on validation data. Be direct and specific in recommendations."
    }

    /// User prompt for feedback synthesis
    pub fn synthesis_prompt(scores: &Scores, context: &ValidationContext) -> String {
        let mut prompt = String::from("Analyze this startup validation data and provide strategic insights:\n\nSCORES:\n");

        for (dimension, value) in scores.iter() {
            let hint = match dimension {
                Dimension::TechnicalComplexity => " (higher = simpler)",
                Dimension::TimeToMarket => " (higher = faster)",
                Dimension::Competition => " (higher = less competitive)",
                _ => "",
            };
            prompt.push_str(&format!("- {}: {}/10{}\n", dimension.label(), value, hint));
        }
        prompt.push_str(&format!("- Overall: {}/10\n", scores.overall()));

        if let Some(trends) = context.trends() {
            prompt.push_str(&format!(
                "\nMARKET TRENDS: {} avg search interest, {} keywords analyzed\n",
                trends.avg_interest,
                trends.trends.len()
            ));
        }
        if let Some(competitors) = context.competitors() {
            prompt.push_str(&format!(
                "\nCOMPETITION: {} competitors found\n",
                competitors.total_count
            ));
        }
        if let Some(sentiment) = context.sentiment() {
            prompt.push_str(&format!(
                "\nCOMMUNITY SENTIMENT: {} across {} posts\n",
                sentiment.overall_sentiment.as_str(),
                sentiment.total_posts
            ));
        }
        if let Some(data) = context.funding() {
            prompt.push_str(&format!(
                "\nFUNDING LANDSCAPE ({}): market score {}/10\n",
                data.industry, data.market_score
            ));
        }

        prompt.push_str(
            r#"
Provide a concise strategic assessment covering:
1. Key strengths (2-3 points)
2. Major concerns (2-3 points)
3. Strategic recommendations (3-4 points)
4. Next steps (2-3 specific actions)

Be specific and actionable. Focus on the most impactful insights."#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderKind, ProviderPayload, ProviderResult};
    use crate::signals::competitors::CompetitorReport;

    #[test]
    fn test_extraction_prompt_embeds_description() {
        let prompt = PromptTemplate::extraction_prompt("Dog walking app");
        assert!(prompt.contains("\"Dog walking app\""));
        assert!(prompt.contains("\"team\""));
    }

    #[test]
    fn test_synthesis_prompt_lists_scores_and_signals() {
        let scores = Scores::from_fn(|_| 6);
        let mut context = ValidationContext::new();
        context.insert(
            ProviderKind::Competitors,
            ProviderResult::Success(ProviderPayload::Competitors(CompetitorReport::default())),
        );
        let prompt = PromptTemplate::synthesis_prompt(&scores, &context);
        assert!(prompt.contains("- Time to Market: 6/10 (higher = faster)"));
        assert!(prompt.contains("- Overall: 6/10"));
        assert!(prompt.contains("COMPETITION: 0 competitors found"));
        assert!(!prompt.contains("MARKET TRENDS"));
    }
}
