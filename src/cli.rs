// src/cli.rs
//! Command-line surface: one-shot subcommands plus the interactive
//! submit-and-review loop.

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write as _};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::{AnalysisClient, ConfigManager};
use crate::dashboard;
use crate::error::ClientError;
use crate::session::{AnalysisSession, UploadMode};

#[derive(Parser)]
#[command(name = "hiresense")]
#[command(about = "Analyze and optimize your professional profile", version)]
pub struct Cli {
    /// Analysis service base URL (overrides HIRESENSE_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload a resume file (PDF or DOCX) for analysis
    Resume { file: PathBuf },
    /// Analyze a public LinkedIn profile URL
    Linkedin { url: String },
    /// List previously stored analyses
    History,
    /// Render one stored analysis by id
    Show { id: String },
    /// Submit and review analyses in a prompt loop
    Interactive,
}

pub async fn handle_command(cli: Cli, config: &ConfigManager) -> Result<()> {
    let base_url = cli
        .api_url
        .unwrap_or_else(|| config.service.analysis_api_url.clone());
    let client = AnalysisClient::new(base_url)?;

    match cli.command {
        Command::Resume { file } => {
            let mut session = AnalysisSession::new(client);
            let spinner = busy_spinner("Analyzing your resume...");
            let outcome = session.submit_resume(&file).await;
            spinner.finish_and_clear();

            let analysis = outcome.map_err(|e| anyhow::anyhow!("Upload failed: {e}"))?;
            print!("{}", dashboard::render(analysis));
        }

        Command::Linkedin { url } => {
            let mut session = AnalysisSession::new(client);
            let spinner = busy_spinner("Analyzing LinkedIn profile...");
            let outcome = session.submit_linkedin(&url).await;
            spinner.finish_and_clear();

            let analysis = outcome.map_err(|e| anyhow::anyhow!("Analysis failed: {e}"))?;
            print!("{}", dashboard::render(analysis));
        }

        Command::History => {
            let analyses = client.get_analyses().await?;
            print!("{}", dashboard::render_history(&analyses));
        }

        Command::Show { id } => {
            let analysis = client.get_analysis(&id).await?;
            print!("{}", dashboard::render(&analysis));
        }

        Command::Interactive => run_interactive(AnalysisSession::new(client)).await?,
    }

    Ok(())
}

/// Prompt loop mirroring the submission form: pick a mode, submit, review
/// the dashboard, reset, repeat.
async fn run_interactive(mut session: AnalysisSession) -> Result<()> {
    println!("{}", style("HIRESENSE").bold());
    println!("{}", style("Analyze & Optimize Your Professional Profile").dim());
    println!();

    let stdin = io::stdin();
    let mut mode = UploadMode::default();

    loop {
        if let Some(analysis) = session.current() {
            println!("{}", dashboard::render(analysis));

            loop {
                print!("[n]ew analysis or [q]uit > ");
                io::stdout().flush()?;
                let Some(line) = read_line(&stdin)? else {
                    return Ok(());
                };
                match line.trim() {
                    "n" | "new" => {
                        session.reset();
                        break;
                    }
                    "q" | "quit" => return Ok(()),
                    _ => {}
                }
            }
            continue;
        }

        match mode {
            UploadMode::Resume => {
                print!("Resume file (PDF or DOCX), [s]witch mode, [q]uit > ")
            }
            UploadMode::LinkedIn => {
                print!("LinkedIn profile URL, [s]witch mode, [q]uit > ")
            }
        }
        io::stdout().flush()?;

        let Some(line) = read_line(&stdin)? else {
            return Ok(());
        };
        let input = line.trim().to_string();

        match input.as_str() {
            "" => continue,
            "q" | "quit" => return Ok(()),
            "s" | "switch" => {
                mode = mode.toggled();
                continue;
            }
            _ => {}
        }

        let spinner = busy_spinner(match mode {
            UploadMode::Resume => "Analyzing your resume...",
            UploadMode::LinkedIn => "Analyzing LinkedIn profile...",
        });
        let outcome = match mode {
            UploadMode::Resume => session.submit_resume(Path::new(&input)).await.map(|_| ()),
            UploadMode::LinkedIn => session.submit_linkedin(&input).await.map(|_| ()),
        };
        spinner.finish_and_clear();

        if let Err(e) = outcome {
            alert(mode, &e);
        }
    }
}

fn alert(mode: UploadMode, e: &ClientError) {
    // Precondition messages already read as full instructions
    if matches!(e, ClientError::Validation(_)) {
        eprintln!("{} {}", style("!").yellow().bold(), e);
        return;
    }

    let prefix = match mode {
        UploadMode::Resume => "Upload failed",
        UploadMode::LinkedIn => "Analysis failed",
    };
    eprintln!("{} {}: {}", style("✗").red().bold(), prefix, e);
}

fn busy_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn read_line(stdin: &io::Stdin) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = stdin.lock().read_line(&mut line)?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
