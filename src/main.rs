use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use linemap::naming::output_file_name;
use linemap::remote::{RemoteClient, SummaryView};
use linemap::report::generate;
use linemap::storage::write_atomic;
use linemap::xml::{encode_report, encode_text};

#[derive(Parser)]
#[command(name = "linemap")]
#[command(about = "Line-by-line comparison of two text files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two files locally and write an XML report
    Compare {
        first: PathBuf,
        second: PathBuf,
        /// Directory for the report (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Print the XML report instead of writing it
        #[arg(long, conflicts_with_all = ["json", "text"])]
        stdout: bool,
        /// Print a plain-text rendering instead of writing XML
        #[arg(long, conflicts_with = "json")]
        text: bool,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Upload two files to a linemap server and download its report
    Submit {
        /// Server base URL
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        url: String,
        first: PathBuf,
        second: PathBuf,
        /// Directory for the report (defaults to current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first,
            second,
            out_dir,
            stdout,
            text,
            json,
        } => {
            let report = generate(&first, &second)?;
            if text {
                print!("{}", encode_text(&report));
                return Ok(());
            }
            let xml = encode_report(&report);
            if stdout {
                print!("{}", xml);
                return Ok(());
            }

            let out_dir = out_dir.unwrap_or(std::env::current_dir().context("get current dir")?);
            let path = out_dir.join(output_file_name(&report.source_file().name));
            write_atomic(&path, xml.as_bytes())
                .with_context(|| format!("write {}", path.display()))?;

            let summary = SummaryView::from(&report.comparison.summary);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "output_file": path,
                        "summary": summary,
                    }))
                    .context("serialize summary json")?
                );
            } else {
                println!("{}", path.display());
                println!(
                    "exact={} similar={} different={} unpaired={} similarity={}",
                    summary.exact_matches,
                    summary.similar_matches,
                    summary.differences,
                    summary.unpaired_lines,
                    summary.similarity_score
                );
            }
        }
        Commands::Submit {
            url,
            first,
            second,
            out_dir,
        } => {
            let out_dir = out_dir.unwrap_or(std::env::current_dir().context("get current dir")?);
            let client = RemoteClient::new(&url)?;
            let submitted = client.submit(&first, &second, &out_dir)?;
            println!("{}", submitted.response.message);
            println!("{}", submitted.path.display());
            if let Some(summary) = submitted.response.summary {
                println!("similarity={}", summary.similarity_score);
            }
        }
    }

    Ok(())
}
