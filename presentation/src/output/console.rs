//! Console output formatter for validation reports

use super::envelope::Envelope;
use colored::{ColoredString, Colorize};
use ideascore_application::{ProviderAvailability, ValidationReport};
use ideascore_domain::{Dimension, ProviderStatus, Rating};

const BAR_WIDTH: usize = 10;
const TOP_DOMAINS: usize = 3;

/// Formats validation reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete report
    pub fn format(report: &ValidationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Idea Validation Report"));
        output.push('\n');

        let overall = report.scores.overall();
        output.push_str(&format!(
            "\n{} {} {}\n",
            "Overall:".cyan().bold(),
            format!("{overall:.2}/10").bold(),
            Self::rating_label(report.rating)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Keywords:".cyan().bold(),
            report.keywords.as_slice().join(", ")
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Industry:".cyan().bold(),
            report.industry
        ));

        if let Some(components) = &report.extracted_components {
            output.push_str(&Self::section_header("Extracted Components"));
            for (label, value) in [
                ("Problem", &components.problem),
                ("Solution", &components.solution),
                ("Market", &components.market),
                ("Competition", &components.competition),
                ("Team", &components.team),
            ] {
                output.push_str(&format!("  {:<12} {}\n", format!("{label}:"), value));
            }
        }

        output.push_str(&Self::section_header("Scores"));
        for (dimension, value) in report.scores.iter() {
            output.push_str(&format!(
                "  {:<22} {} {:>2}/10\n",
                dimension.label(),
                Self::score_bar(value),
                value
            ));
        }

        output.push_str(&Self::section_header("Signals"));
        for (kind, status) in &report.providers {
            output.push_str(&format!(
                "  {} {:<12} {}\n",
                Self::status_mark(*status),
                kind.as_str(),
                status.as_str().dimmed()
            ));
        }
        for line in Self::signal_highlights(report) {
            output.push_str(&format!("  {} {}\n", "*".cyan(), line));
        }

        output.push_str(&Self::section_header("Feedback"));
        for line in &report.feedback.overall {
            output.push_str(&format!("{}\n", line));
        }
        for dimension in Dimension::ALL {
            let notes = report.feedback.notes(dimension);
            if notes.is_empty() {
                continue;
            }
            output.push_str(&format!("\n{}\n", dimension.label().yellow().bold()));
            for note in notes {
                output.push_str(&format!("  * {}\n", note));
            }
        }

        if !report.feedback.suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".green().bold()));
            for suggestion in &report.feedback.suggestions {
                output.push_str(&format!("  * {}\n", suggestion));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON envelope
    pub fn format_json(report: &ValidationReport) -> String {
        serde_json::to_string_pretty(&Envelope::ok(report))
            .unwrap_or_else(|_| "{\"success\":false}".to_string())
    }

    /// Format an error as JSON envelope
    pub fn format_error_json(message: &str) -> String {
        serde_json::to_string_pretty(&Envelope::error(message))
            .unwrap_or_else(|_| "{\"success\":false}".to_string())
    }

    /// Provider and generator availability
    pub fn format_status(
        providers: &[ProviderAvailability],
        generator: Option<(&str, bool)>,
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Providers"));
        for provider in providers {
            let mark = match (provider.enabled, provider.configured) {
                (true, true) => "v".green(),
                (true, false) => "!".yellow(),
                (false, _) => "-".dimmed(),
            };
            output.push_str(&format!(
                "  {} {:<12} {:<9} {}\n",
                mark,
                provider.kind.as_str(),
                if provider.enabled { "enabled" } else { "disabled" },
                if provider.configured { "configured" } else { "not configured" }
            ));
        }

        output.push_str(&Self::section_header("Text generator"));
        match generator {
            Some((model, true)) => output.push_str(&format!("  {} {}\n", "v".green(), model)),
            Some((model, false)) => output.push_str(&format!(
                "  {} {} (no API key, using heuristics)\n",
                "!".yellow(),
                model
            )),
            None => output.push_str(&format!("  {} disabled\n", "-".dimmed())),
        }

        output
    }

    fn signal_highlights(report: &ValidationReport) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(trends) = &report.trends_analysis
            && trends.has_data()
        {
            lines.push(format!(
                "Search interest averages {}/100 across {} keyword(s)",
                trends.avg_interest, trends.valid_results
            ));
        }
        if let Some(competitors) = &report.competitor_analysis {
            let mut line = format!("{} competitor(s) found", competitors.total_count);
            let domains = competitors.top_domains(TOP_DOMAINS);
            if !domains.is_empty() {
                line.push_str(&format!(": {}", domains.join(", ")));
            }
            lines.push(line);
        }
        if let Some(sentiment) = &report.sentiment_analysis
            && sentiment.has_data()
        {
            lines.push(format!(
                "Community sentiment is {} over {} post(s)",
                sentiment.overall_sentiment.as_str(),
                sentiment.total_posts
            ));
        }
        if let Some(market) = &report.market_data
            && market.has_data()
        {
            lines.push(format!("Funding market score {}/10", market.market_score));
        }
        if let Some(feasibility) = &report.feasibility {
            lines.push(format!(
                "Estimated time to market: {}",
                feasibility.time_to_market.estimate
            ));
        }
        lines
    }

    fn score_bar(value: u8) -> String {
        let filled = usize::from(value).min(BAR_WIDTH);
        let bar = format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled));
        match value {
            8..=10 => bar.green().to_string(),
            5..=7 => bar.yellow().to_string(),
            _ => bar.red().to_string(),
        }
    }

    fn rating_label(rating: Rating) -> ColoredString {
        let label = format!("({})", rating.as_str());
        match rating {
            Rating::Excellent | Rating::Good => label.green().bold(),
            Rating::Average => label.yellow().bold(),
            Rating::Poor | Rating::VeryPoor => label.red().bold(),
        }
    }

    fn status_mark(status: ProviderStatus) -> ColoredString {
        match status {
            ProviderStatus::Success => "v".green(),
            ProviderStatus::Failure => "x".red(),
            ProviderStatus::Disabled | ProviderStatus::NotConfigured => "-".dimmed(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
