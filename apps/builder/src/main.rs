use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use builder::api::ApiClient;
use builder::config::Config;
use builder::pages::{BuilderPage, GalleryPage, LogNotifier, PreviewPage, PreviewState};
use builder::render::{self, Layout};

#[derive(Parser)]
#[command(
    name = "builder",
    version,
    about = "Resume builder: template previews and backend-driven rendering"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the builder-page preview for a template to an HTML file
    Preview {
        /// Template id to seed and render (e.g. 2, 6, 11)
        #[arg(long)]
        template: String,
        #[arg(long, default_value = "preview.html")]
        out: PathBuf,
    },
    /// Render a gallery preview (category-seeded) for a template
    Gallery {
        #[arg(long)]
        template: String,
        #[arg(long, default_value = "gallery.html")]
        out: PathBuf,
    },
    /// Fetch a saved resume from the backend and render it
    Fetch {
        /// Persisted resume id
        #[arg(long)]
        id: String,
        #[arg(long, default_value = "resume.html")]
        out: PathBuf,
    },
    /// List the template catalog (built-in set when the backend is down)
    Templates,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (resolves the backend origin)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting builder v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let backend = Arc::new(ApiClient::new(config.api_base_url.clone()));

    match cli.command {
        Command::Preview { template, out } => {
            info!(
                "template {template} resolves to the {} layout",
                Layout::for_template_id(&template).key()
            );
            let page = BuilderPage::new(backend, Arc::new(LogNotifier), &template);
            write_document(&out, &render::render_document(page.draft()))?;
        }
        Command::Gallery { template, out } => {
            let page = GalleryPage::new(backend);
            let template = page.template(&template).await;
            info!("previewing template {} ({})", template.name, template.category);
            let record = page.preview_record(&template);
            write_document(&out, &render::render_document(&record))?;
        }
        Command::Fetch { id, out } => {
            let mut page = PreviewPage::new(backend, id);
            page.load().await;
            match page.state() {
                PreviewState::Loaded(resume) => {
                    write_document(&out, &render::render_document(resume))?;
                }
                _ => println!("Resume not found"),
            }
        }
        Command::Templates => {
            let page = GalleryPage::new(backend);
            for template in page.templates().await {
                println!("{:>3}  {} ({})", template.id, template.name, template.category);
            }
        }
    }

    Ok(())
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    std::fs::write(path, document)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {}", path.display());
    Ok(())
}
