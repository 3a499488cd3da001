//! Mailsmith CLI
//!
//! Command-line interface for generating email drafts and smoke-testing
//! the configured provider.

#![allow(clippy::print_stdout)]

mod config;

use std::time::Duration;

use ai_core::ProviderKind;
use clap::{Parser, Subcommand};
use config::AppConfig;
use domain::{DraftLength, EmailRequest, Relationship, Tone, VariationSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Mailsmith CLI
#[derive(Parser)]
#[command(name = "mailsmith")]
#[command(author, version, about = "AI email draft generator", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate three email drafts from a context description
    Generate {
        /// What the email should say
        context: String,

        /// Voice for the drafts: professional, friendly, firm, chaotic
        #[arg(short, long, default_value = "professional")]
        tone: Tone,

        /// Who the email is addressed to
        #[arg(short, long, default_value = "colleague")]
        relationship: Relationship,

        /// Length band: short, medium, long
        #[arg(short, long, default_value = "medium")]
        length: DraftLength,

        /// Provider path override: gemini or gateway
        #[arg(short, long)]
        provider: Option<ProviderKind>,
    },

    /// Run repeated generations against the live provider and tally results
    Smoke {
        /// Number of generation attempts
        #[arg(short, long, default_value = "3")]
        runs: u32,

        /// Pause between attempts in milliseconds
        #[arg(short, long, default_value = "1000")]
        delay_ms: u64,

        /// Provider path override: gemini or gateway
        #[arg(short, long)]
        provider: Option<ProviderKind>,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Render a variation set as plain text
fn render_variations(set: &VariationSet) -> String {
    let mut out = String::new();
    for variation in set {
        out.push_str(&format!(
            "── Draft {} [{}] ──\nSubject: {}\n\n{}\n\n",
            variation.id, variation.tone, variation.subject, variation.body
        ));
    }
    out
}

/// Contexts cycled through by the smoke command
const SMOKE_CONTEXTS: &[&str] = &[
    "The bug fix has been deployed and tested successfully.",
    "I need to reschedule our Tuesday sync to Thursday afternoon.",
    "Thanks for the detailed review feedback on the proposal draft.",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut app_config = AppConfig::load()?;

    match cli.command {
        Commands::Generate {
            context,
            tone,
            relationship,
            length,
            provider,
        } => {
            if let Some(provider) = provider {
                app_config.ai.provider = provider;
            }
            let generator = app_config.ai.build_generator()?;
            let request = EmailRequest::new(context, tone, relationship, length);

            match generator.generate(&request).await {
                Ok(set) => {
                    println!("✉️  Generated {} drafts:\n", set.len());
                    print!("{}", render_variations(&set));
                },
                Err(e) => {
                    println!("❌ Generation failed: {e}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Smoke {
            runs,
            delay_ms,
            provider,
        } => {
            if let Some(provider) = provider {
                app_config.ai.provider = provider;
            }
            let generator = app_config.ai.build_generator()?;

            let mut passed = 0u32;
            let mut failed = 0u32;

            for run in 0..runs {
                if run > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }

                let context = SMOKE_CONTEXTS[(run as usize) % SMOKE_CONTEXTS.len()];
                let request = EmailRequest::new(
                    context,
                    Tone::Professional,
                    Relationship::Colleague,
                    DraftLength::Short,
                );

                // One wholesale retry per failed attempt
                let result = match generator.generate(&request).await {
                    Ok(set) => Ok(set),
                    Err(first) => {
                        println!("⚠️  Run {} failed ({first}), retrying…", run + 1);
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                        generator.generate(&request).await
                    },
                };

                match result {
                    Ok(set) => {
                        passed += 1;
                        println!("✅ Run {}: {} drafts", run + 1, set.len());
                    },
                    Err(e) => {
                        failed += 1;
                        println!("❌ Run {}: {e}", run + 1);
                    },
                }
            }

            println!("\n📊 Smoke result: {passed} passed, {failed} failed");
            if failed > 0 {
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
