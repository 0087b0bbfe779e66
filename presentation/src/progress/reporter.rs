//! Progress reporting for validation runs

use colored::Colorize;
use ideascore_application::{Stage, ValidationProgress};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use ideascore_domain::{ProviderKind, ProviderStatus};
use std::sync::Mutex;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Reports progress with indicatif bars on stderr
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
            stage_bar: Mutex::new(None),
        }
    }

    fn signals_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.stage_bar.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn provider_line(kind: ProviderKind, status: ProviderStatus) -> String {
    match status {
        ProviderStatus::Success => format!("{} {}", "v".green(), kind),
        ProviderStatus::Failure => format!("{} {}", "x".red(), kind),
        ProviderStatus::Disabled | ProviderStatus::NotConfigured => {
            format!("{} {} ({})", "-".dimmed(), kind, status.as_str())
        }
    }
}

impl ValidationProgress for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        let pb = if stage == Stage::Signals {
            let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
            pb.set_style(Self::signals_style());
            pb
        } else {
            let pb = self.multi.add(ProgressBar::new_spinner());
            pb.set_style(Self::spinner_style());
            pb
        };
        pb.set_prefix(stage.as_str());
        pb.enable_steady_tick(TICK);

        *self.bar() = Some(pb);
    }

    fn on_provider_complete(&self, kind: ProviderKind, status: ProviderStatus) {
        if let Some(pb) = self.bar().as_ref() {
            pb.set_message(provider_line(kind, status));
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, _stage: Stage) {
        if let Some(pb) = self.bar().take() {
            pb.finish_with_message(format!("{}", "done".green()));
        }
    }
}

/// Simple line-based progress (no fancy UI)
pub struct SimpleProgress;

impl ValidationProgress for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, total_tasks: usize) {
        if stage == Stage::Signals {
            eprintln!(
                "{} {} ({} providers)",
                "->".cyan(),
                stage.as_str().bold(),
                total_tasks
            );
        } else {
            eprintln!("{} {}", "->".cyan(), stage.as_str().bold());
        }
    }

    fn on_provider_complete(&self, kind: ProviderKind, status: ProviderStatus) {
        eprintln!("  {}", provider_line(kind, status));
    }

    fn on_stage_complete(&self, _stage: Stage) {}
}
