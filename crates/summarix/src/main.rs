//! # Summarix CLI (`smx`)
//!
//! The `smx` binary summarizes plain-text documents and answers questions
//! about a generated summary.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `smx summarize [FILE]` | Extractively summarize a file (or stdin) |
//! | `smx chat "<QUERY>"` | Ask a question about a summary |
//! | `smx serve` | Start the JSON HTTP API server |
//!
//! ## Examples
//!
//! ```bash
//! # Summarize a file to 30% of its sentences, with statistics
//! smx summarize article.txt --ratio 0.3 --stats
//!
//! # Summarize stdin
//! curl -s https://example.com/article.txt | smx summarize
//!
//! # Ask about a saved summary
//! smx chat "give me the key points" --summary-file summary.txt
//!
//! # Serve the HTTP API (bind address from config, default 127.0.0.1:7700)
//! smx serve --config ./smx.toml
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use summarix::{config, input, server};

/// Summarix — extractive summarization and summary Q&A.
///
/// All commands accept an optional `--config` flag pointing to a TOML
/// configuration file; built-in defaults apply when it is omitted.
#[derive(Parser)]
#[command(
    name = "smx",
    about = "Summarix — extractive text summarization with a summary Q&A chat",
    version,
    long_about = "Summarix condenses a document by selecting its most representative \
    sentences (frequency-weighted, re-emitted in original order) and answers follow-up \
    questions about the summary via intent-matched responses."
)]
struct Cli {
    /// Path to configuration file (TOML). Built-in defaults when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Extractively summarize a document.
    ///
    /// Reads plain text from FILE or stdin, selects the highest-scoring
    /// sentences for the target ratio, and prints them in original
    /// document order.
    Summarize {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,

        /// Target summary length as a fraction of the sentence count,
        /// in (0, 1]. Defaults to `summary.default_ratio` from config.
        #[arg(long)]
        ratio: Option<f64>,

        /// Print compression statistics after the summary.
        #[arg(long)]
        stats: bool,
    },

    /// Ask a question about a previously generated summary.
    ///
    /// Classifies the query into an intent (topics, key points, shorter
    /// version, explanation, length) and prints the composed answer.
    Chat {
        /// The question to ask.
        query: String,

        /// File containing the summary; reads stdin when omitted.
        #[arg(long)]
        summary_file: Option<PathBuf>,
    },

    /// Start the JSON HTTP API server.
    ///
    /// Binds to `[server].bind` from the configuration and exposes
    /// `/api/summarize`, `/api/chat`, and `/health`.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Summarize { file, ratio, stats } => {
            let text = input::read_text(file.as_deref())?;
            let ratio = ratio.unwrap_or(cfg.summary.default_ratio);
            let out = summarix_core::summarize(&text, ratio)?;

            println!("{}", out.summary);
            if stats {
                println!();
                println!("Summary Stats");
                println!("=============");
                println!(
                    "  Original:    {} words, {} chars",
                    out.stats.original_words, out.stats.original_chars
                );
                println!(
                    "  Summary:     {} words, {} chars",
                    out.stats.summary_words, out.stats.summary_chars
                );
                println!("  Compression: {:.1}%", out.stats.compression_ratio);
            }
        }
        Commands::Chat {
            query,
            summary_file,
        } => {
            let summary = input::read_text(summary_file.as_deref())?;
            let reply = summarix_core::answer(&query, &summary)?;
            println!("[{}]", reply.intent.as_str());
            println!("{}", reply.answer);
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
