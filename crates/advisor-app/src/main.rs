//! Advisor binary - composition root.
//!
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML and initialize tracing
//! 3. Build the knowledge base and chat assistant
//! 4. Dispatch the requested subcommand

mod cli;
mod repl;

use clap::Parser;
use serde::Serialize;

use advisor_chat::{ChatAssistant, Reply};
use advisor_core::config::AdvisorConfig;
use advisor_core::logging;
use advisor_intent::{CategoryScore, KnowledgeBase};

use cli::{CliArgs, Command};

/// JSON shape printed by `advisor ask --json`.
#[derive(Serialize)]
struct AskOutput<'a> {
    query: &'a str,
    reply: &'a Reply,
    #[serde(skip_serializing_if = "Option::is_none")]
    scores: Option<Vec<CategoryScore>>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config, then tracing at the configured level.
    let config_file = args.resolve_config_path();
    let loaded = AdvisorConfig::load(&config_file);
    let mut config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AdvisorConfig::default(),
    };
    logging::init(&args.resolve_log_level(&config.general.log_level))?;

    match loaded {
        Ok(_) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Err(e) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Config unavailable, using defaults"
        ),
    }
    tracing::debug!("Starting advisor v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = args.resolve_knowledge_path() {
        config.knowledge.path = Some(path);
    }

    match args.command {
        Command::Check { file } => {
            let kb = KnowledgeBase::load(&file)?;
            println!(
                "{}: ok ({} categories, fallback \"{}\")",
                file.display(),
                kb.len(),
                kb.fallback().id
            );
        }
        Command::Categories => {
            let assistant = ChatAssistant::from_config(&config)?;
            let kb = assistant.classifier().knowledge();
            for (i, category) in kb.categories().iter().enumerate() {
                let action = category
                    .action
                    .as_ref()
                    .map(|a| format!(" -> {} ({})", a.label, a.link))
                    .unwrap_or_default();
                println!(
                    "{:>2}. {} [{}]{}",
                    i + 1,
                    category.id,
                    category.keywords.join(", "),
                    action
                );
            }
            println!(" -. {} (fallback)", kb.fallback().id);
        }
        Command::Ask {
            query,
            json,
            explain,
        } => {
            let assistant = ChatAssistant::from_config(&config)?;
            let prepared = assistant.prepare(&query.join(" "))?;
            let reply = assistant.respond(&prepared);
            let scores = explain.then(|| assistant.classifier().scores(&prepared));

            if json {
                let output = AskOutput {
                    query: &prepared,
                    reply: &reply,
                    scores,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", repl::render_message(&reply.message));
                if let Some(scores) = scores {
                    println!();
                    for s in scores {
                        println!("  {:<24} {}", s.id, s.score);
                    }
                    println!("  => {}", reply.category_id);
                }
            }
        }
        Command::Chat => {
            let assistant = ChatAssistant::from_config(&config)?;
            repl::run_chat(&assistant).await?;
        }
        Command::Console => {
            repl::run_console().await?;
        }
    }

    Ok(())
}
