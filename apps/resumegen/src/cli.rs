//! Command-line surface: the presentation layer driving the session core.
//!
//! Every mutating command re-reads and reprints session state afterwards;
//! backend failures are caught here, logged, and reduced to a generic notice.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::error;

use crate::backend::{ArtifactKind, HttpBackend};
use crate::config::Config;
use crate::models::document::ResumeDocument;
use crate::preview::render_text;
use crate::session::Session;
use crate::style::{filter_gallery, StyleConfig};

#[derive(Parser, Debug)]
#[command(
    name = "resumegen",
    about = "Build, preview, and export resumes from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a structural text preview of the resume (default command)
    Preview(DocumentArgs),
    /// List gallery templates, optionally filtered by layout id or tag
    Gallery {
        /// Filter key: a layout id, a color/font id, or a tag like "company"
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Request a rendered artifact from the backend and save it locally
    Download {
        #[arg(value_enum)]
        format: Format,
        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Polish the summary — or one experience description — with AI
    Polish {
        #[command(flatten)]
        document: DocumentArgs,
        /// Experience entry index to polish instead of the summary
        #[arg(long)]
        experience: Option<usize>,
    },
    /// Generate a profile summary from the whole resume
    Summarize(DocumentArgs),
}

#[derive(Args, Debug, Default)]
struct DocumentArgs {
    /// Path to a resume document JSON file (omit for an empty document)
    #[arg(long)]
    resume: Option<PathBuf>,
    #[arg(long, default_value = "modern")]
    layout: String,
    #[arg(long, default_value = "blue")]
    color: String,
    #[arg(long, default_value = "sans")]
    font: String,
    /// Explicit accent hex value, overriding the palette color
    #[arg(long)]
    custom_color: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Pdf,
    Docx,
}

impl From<Format> for ArtifactKind {
    fn from(format: Format) -> ArtifactKind {
        match format {
            Format::Pdf => ArtifactKind::Pdf,
            Format::Docx => ArtifactKind::Docx,
        }
    }
}

impl DocumentArgs {
    fn style_config(&self) -> StyleConfig {
        match &self.custom_color {
            Some(hex) => StyleConfig::with_custom_color(&self.layout, &self.font, hex),
            None => StyleConfig::new(&self.layout, &self.color, &self.font),
        }
    }

    fn load_document(&self) -> Result<ResumeDocument> {
        match &self.resume {
            None => Ok(ResumeDocument::default()),
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("cannot read resume file {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("cannot parse resume file {}", path.display()))
            }
        }
    }
}

fn make_session(config: &Config, args: &DocumentArgs) -> Result<Session> {
    let backend = Arc::new(HttpBackend::new(config.api_url.clone()));
    let mut session = Session::new(backend, &config.download_dir).with_document(args.load_document()?);
    session.config = args.style_config();
    Ok(session)
}

pub async fn run(config: Config) -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Preview(DocumentArgs::default()));

    match command {
        Command::Preview(args) => {
            let session = make_session(&config, &args)?;
            print!("{}", render_text(&session.render_preview()));
        }

        Command::Gallery { filter } => {
            let presets = filter_gallery(&filter);
            for preset in &presets {
                println!(
                    "{:>3}  {:<32} {} / {} / {}  [{}]",
                    preset.id,
                    preset.name,
                    preset.layout,
                    preset.color,
                    preset.font,
                    preset.tags.join(", ")
                );
            }
            println!("{} templates", presets.len());
        }

        Command::Download { format, document } => {
            let session = make_session(&config, &document)?;
            match session.download(format.into()).await {
                Ok(path) => println!("Saved {}", path.display()),
                Err(err) => {
                    error!("download failed: {err}");
                    println!("{}", err.user_notice());
                }
            }
        }

        Command::Polish {
            document,
            experience,
        } => {
            let mut session = make_session(&config, &document)?;
            let result = match experience {
                Some(index) => session.polish_experience(index).await,
                None => session.polish_summary().await,
            };
            match result {
                Ok(true) => println!("{}", serde_json::to_string_pretty(&session.document)?),
                Ok(false) => println!("Nothing to polish."),
                Err(err) => {
                    error!("polish failed: {err}");
                    println!("{}", err.user_notice());
                }
            }
        }

        Command::Summarize(args) => {
            let mut session = make_session(&config, &args)?;
            match session.generate_summary().await {
                Ok(()) => println!("{}", serde_json::to_string_pretty(&session.document)?),
                Err(err) => {
                    error!("summary generation failed: {err}");
                    println!("{}", err.user_notice());
                }
            }
        }
    }

    Ok(())
}
