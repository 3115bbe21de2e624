//! Artstyle CLI - upload paintings to the art style prediction service
//!
//! ```bash
//! artstyle predict starry_night.jpg          # Upload and print the result page URL
//! artstyle predict a.png --preview-out p.txt # Also save the preview data URI
//! artstyle preview starry_night.jpg          # Print the image as a data URI
//! artstyle home                              # Print the home page URL
//! ```
//!
//! The server defaults to `http://localhost:5001`; set `ARTSTYLE_SERVER_URL`
//! (or a `.env` file) or pass `--server` to change it.

use artstyle::native::{ConsoleNotifier, FilePreview, HttpTransport, LocalFile, PrintNavigator};
use artstyle::{data_uri, ClientConfig, ImageFile, UploadController};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "artstyle")]
#[command(about = "Upload paintings to the art style prediction service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image and print the result page URL
    Predict {
        /// Image file (png, jpg, jpeg)
        image: PathBuf,

        /// Prediction service URL (default: $ARTSTYLE_SERVER_URL or http://localhost:5001)
        #[arg(short, long)]
        server: Option<String>,

        /// Write the preview data URI to this file
        #[arg(long)]
        preview_out: Option<PathBuf>,
    },

    /// Print an image as a data URI
    Preview {
        /// Image file
        image: PathBuf,
    },

    /// Print the home page URL
    Home {
        /// Prediction service URL
        #[arg(short, long)]
        server: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            image,
            server,
            preview_out,
        } => cmd_predict(&image, server.as_deref(), preview_out).await,

        Commands::Preview { image } => cmd_preview(&image).await,

        Commands::Home { server } => cmd_home(server.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(server: Option<&str>) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let config = match server {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    Ok(config)
}

async fn cmd_predict(
    image: &Path,
    server: Option<&str>,
    preview_out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(server)?;
    eprintln!("📄 Uploading {} to {}", image.display(), config.server_url());

    let file = LocalFile::open(image).await?;

    let controller = UploadController::new(
        HttpTransport::new(config.clone()),
        FilePreview::new(preview_out),
        ConsoleNotifier,
        PrintNavigator::new(config),
    );

    match controller.handle_selection(Some(file)).await {
        Some(outcome) if outcome.is_redirect() => Ok(()),
        _ => std::process::exit(1),
    }
}

async fn cmd_preview(image: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = LocalFile::open(image).await?;
    let bytes = file.read_bytes().await?;
    println!("{}", data_uri(&file.mime_type(), &bytes));
    Ok(())
}

fn cmd_home(server: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(server)?;

    let controller = UploadController::new(
        HttpTransport::new(config.clone()),
        FilePreview::default(),
        ConsoleNotifier,
        PrintNavigator::new(config),
    );
    controller.reset();

    Ok(())
}
