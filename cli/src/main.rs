//! CLI entrypoint for ideascore
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser};
use ideascore_application::{ValidateIdeaError, ValidateIdeaUseCase};
use ideascore_domain::ValidationRequest;
use ideascore_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, build_client, build_generator, build_registry,
};
use ideascore_presentation::{
    Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, ValidateArgs,
    set_color_enabled,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "ideascore.log";

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };
    config.validate().context("invalid configuration")?;
    set_color_enabled(config.output.color);

    info!("Starting ideascore");

    match cli.command {
        Some(Command::Validate(args)) => validate(args, config, cli.quiet).await,
        Some(Command::Status) => status(&config),
        None => {
            Cli::command().print_help()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logging based on verbosity level, overridden by `RUST_LOG` when set.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

async fn validate(args: ValidateArgs, mut config: FileConfig, quiet: bool) -> Result<ExitCode> {
    if args.offline {
        config.go_offline();
    }
    for kind in &args.disable {
        config.providers.disable(*kind);
    }

    let format = args
        .output
        .or(config.output.format.map(|format| match format {
            FileOutputFormat::Pretty => OutputFormat::Pretty,
            FileOutputFormat::Json => OutputFormat::Json,
        }))
        .unwrap_or(OutputFormat::Pretty);

    let request = match &args.input {
        Some(path) => read_request(path)?,
        None => args.inline_request(),
    };

    // === Dependency Injection ===
    let client = build_client(config.timeout()).context("failed to build HTTP client")?;
    let registry = Arc::new(build_registry(&config, &client));
    let generator = build_generator(&config, &client);
    debug!(
        providers = registry.len(),
        generator = generator.as_ref().map(|g| g.model_name()).unwrap_or("none"),
        "wired validation pipeline"
    );

    let use_case = ValidateIdeaUseCase::new(registry, generator, &config.validation_params());

    let result = if quiet {
        use_case.execute(request).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(request, &progress).await
    };

    match (result, format) {
        (Ok(report), OutputFormat::Pretty) => println!("{}", ConsoleFormatter::format(&report)),
        (Ok(report), OutputFormat::Json) => println!("{}", ConsoleFormatter::format_json(&report)),
        (Err(ValidateIdeaError::Input(e)), OutputFormat::Json) => {
            println!("{}", ConsoleFormatter::format_error_json(&e.to_string()));
            return Ok(ExitCode::from(2));
        }
        (Err(e), OutputFormat::Pretty) => return Err(e.into()),
    }

    Ok(ExitCode::SUCCESS)
}

fn read_request(path: &Path) -> Result<ValidationRequest> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&body)
        .with_context(|| format!("{} is not a valid request", path.display()))
}

fn status(config: &FileConfig) -> Result<ExitCode> {
    let client = build_client(config.timeout()).context("failed to build HTTP client")?;
    let registry = build_registry(config, &client);
    let generator = build_generator(config, &client);

    println!(
        "{}",
        ConsoleFormatter::format_status(
            &registry.availability(),
            generator
                .as_ref()
                .map(|g| (g.model_name(), g.is_configured())),
        )
    );
    Ok(ExitCode::SUCCESS)
}
