//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sitegrade::grader::{self, GradeOptions};

use crate::commands;

/// sitegrade - Grade HTML pages for the presence of required elements
#[derive(Parser, Debug)]
#[command(
    name = "sitegrade",
    version,
    about = "Grade HTML pages for the presence of required elements",
    long_about = "Check a page, from disk or over HTTP, against a JSON list of CSS\n\
                  selectors and report which ones the page satisfies.\n\n\
                  The JSON report is written to the outfile and echoed to stdout."
)]
pub struct Cli {
    /// Path to the JSON checks file
    #[arg(short, long, default_value = grader::DEFAULT_CHECKS_FILE)]
    pub checks: PathBuf,

    /// Path to the HTML file to grade
    #[arg(short, long, default_value = grader::DEFAULT_HTML_FILE)]
    pub file: PathBuf,

    /// Path the JSON report is written to
    #[arg(short, long, default_value = grader::DEFAULT_OUTFILE)]
    pub outfile: PathBuf,

    /// Grade this URL instead of the file
    #[arg(short, long)]
    pub url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve an HTML page over HTTP instead of grading it
    Serve {
        /// Path to the HTML file to serve
        #[arg(short, long, default_value = grader::DEFAULT_HTML_FILE)]
        file: PathBuf,

        /// Port to listen on (falls back to $PORT, then 5000)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Some(Command::Serve { file, port }) => commands::serve(&file, port),
        None => commands::check(GradeOptions {
            checks: cli.checks,
            file: cli.file,
            outfile: cli.outfile,
            url: cli.url,
        }),
    }
}
