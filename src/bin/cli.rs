//! Review Lens CLI
//!
//! Terminal front end for the review dashboard:
//! - Show KPI cards, the sentiment chart, aspect tiles and the review table
//! - Ask questions about the reviews
//! - List preset questions
//! - Generate a default config file

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use review_lens::client::ReviewsClient;
use review_lens::config::{generate_default_config, Config};
use review_lens::render::{render_ask, render_dashboard};
use review_lens::session::DashboardSession;
use review_lens::telemetry::{init_tracing, with_bootstrap_logging};
use review_lens::view::{AskPhase, Event, QUICK_QUESTIONS};
use review_lens::{AspectKey, SentimentFilter};

#[derive(Parser)]
#[command(name = "review-lens")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Customer-review sentiment dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Review API base URL (overrides config and environment)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load reviews and print the dashboard
    Show {
        /// Overall sentiment (all, positive, neutral, negative)
        #[arg(short, long, default_value = "all")]
        sentiment: SentimentFilter,
        /// Case-insensitive text search over complaint, source and language
        #[arg(short = 'q', long)]
        search: Option<String>,
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Aspect whose counts feed the chart
        #[arg(long)]
        focus: Option<AspectKey>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Ask a question about the reviews
    Ask {
        /// Question text
        question: Option<String>,
        /// Ask preset question N (1-5) instead
        #[arg(short, long, conflicts_with = "question")]
        preset: Option<usize>,
    },

    /// List the preset questions
    Presets,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = with_bootstrap_logging(|| Config::discover(cli.config.as_deref()))
        .context("loading configuration")?;
    if let Some(url) = cli.api_url {
        config.backend.base_url = url;
    }
    init_tracing(&config.logging);

    match cli.command {
        Commands::Show {
            sentiment,
            search,
            from,
            to,
            focus,
            format,
        } => {
            let session = DashboardSession::new(ReviewsClient::new(&config.backend)?);

            let loaded = session.mount().await;

            let mut events = vec![
                Event::SentimentSelected(sentiment),
                Event::DateFromChanged(from),
                Event::DateToChanged(to),
            ];
            if let Some(search) = search {
                events.push(Event::SearchChanged(search));
            }
            if let Some(key) = focus {
                events.push(Event::AspectToggled(key));
            }
            for event in events {
                session.dispatch(event).await;
            }

            let view = session.view().await;
            match format {
                OutputFormat::Table => print!("{}", render_dashboard(&view)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }

            if let Err(e) = loaded {
                eprintln!();
                eprintln!("Cannot load reviews from {}", config.backend.base_url);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Ask { question, preset } => {
            let event = match (question, preset) {
                (_, Some(n)) if (1..=QUICK_QUESTIONS.len()).contains(&n) => {
                    Event::PresetChosen(n - 1)
                }
                (_, Some(n)) => bail!("Preset must be between 1 and {}, got {}", QUICK_QUESTIONS.len(), n),
                (Some(question), None) if !question.trim().is_empty() => {
                    Event::QuestionEdited(question)
                }
                _ => bail!("Nothing to ask: give a question or --preset N"),
            };

            let session = DashboardSession::new(ReviewsClient::new(&config.backend)?);
            let manual = matches!(event, Event::QuestionEdited(_));
            session.dispatch(event).await;
            if manual {
                session.dispatch(Event::AskSubmitted).await;
            }

            let view = session.view().await;
            print!("{}", render_ask(&view.ask));
            if view.ask.phase == AskPhase::Errored {
                std::process::exit(1);
            }
        }

        Commands::Presets => {
            for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
                println!("{}. {}", i + 1, question);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            if let Some(path) = output {
                std::fs::write(&path, content)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("Config written to {:?}", path);
            } else {
                print!("{}", content);
            }
        }
    }

    Ok(())
}
