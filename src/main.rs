use std::time::Duration;

use clap::Parser;
use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use helprx_rust::{api, cli, config, encoder, error, form, render, session};

use api::GeminiClient;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use form::PatientForm;
use session::Session;

/// Every failure of the analysis flow reads the same to the user; the real
/// cause goes to the diagnostic log.
const GENERIC_FAILURE: &str =
    "Unable to process request. Please try again later or check your network.";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "helprx_rust=debug,helprx_common=debug"
    } else {
        "helprx_rust=info,helprx_common=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze {
            age,
            weight,
            symptoms,
            image,
            json,
        } => {
            let form = PatientForm {
                age,
                weight,
                symptoms,
                image,
            };

            if let Err(err) = run_analyze(form, json).await {
                tracing::error!(error = %err, "analysis failed");
                eprintln!("\n{GENERIC_FAILURE}");
                std::process::exit(1);
            }
        }

        Commands::Config { set_api_key, show } => {
            if let Err(err) = run_config(set_api_key, show) {
                eprintln!("✗ {err}");
                std::process::exit(1);
            }
        }
    }
}

async fn run_analyze(mut form: PatientForm, json: bool) -> Result<()> {
    println!("🩺 HelpRX - Symptom Analyzer\n");

    form.complete_interactively()?;

    // Credential check comes before any I/O
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;
    let client = GeminiClient::new(
        api_key,
        config.model.clone(),
        Duration::from_secs(config.timeout_seconds),
    )?;

    let inline_image = match &form.image {
        Some(path) => {
            tracing::debug!(path = %path.display(), "encoding upload");
            Some(encoder::encode_image(path).await?)
        }
        None => None,
    };
    let request = form.to_request(inline_image)?;

    let mut session = Session::new();
    session.submit()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Analyzing symptoms...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.analyze(&request).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(analysis) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", render::render_analysis(&analysis));
            }
            session.complete(analysis)?;
            Ok(())
        }
        Err(err) => {
            session.fail(GENERIC_FAILURE)?;
            Err(err)
        }
    }
}

fn run_config(set_api_key: Option<String>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(key) = set_api_key {
        config.set_api_key(key)?;
        println!("✔ API key saved");
    }

    if show {
        println!("Configuration:");
        println!("  model: {}", config.model);
        println!("  timeout: {}s", config.timeout_seconds);
        println!(
            "  API key: {}",
            if config.api_key.is_some() { "set" } else { "not set" }
        );
    }

    Ok(())
}
