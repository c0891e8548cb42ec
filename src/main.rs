use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use vonixdocs::core::config::{self, CliOverrides, DocsConfig};
use vonixdocs::tui;

#[derive(Parser)]
#[command(name = "vonixdocs", version, about = "Terminal browser for the VonixCore documentation")]
struct Args {
    /// Page to open, e.g. /economy
    route: Option<String>,

    /// Read docs from <DIR>/docs/*.md instead of the bundled copy
    #[arg(long, value_name = "DIR", conflicts_with = "docs_url")]
    docs_dir: Option<PathBuf>,

    /// Fetch docs from <URL>/docs/*.md
    #[arg(long, value_name = "URL")]
    docs_url: Option<String>,

    /// Number code block lines
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Never touch the system clipboard
    #[arg(long)]
    no_clipboard: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vonixdocs.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("vonixdocs.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        DocsConfig::default()
    });
    let cli = CliOverrides {
        route: args.route,
        docs_dir: args.docs_dir,
        docs_url: args.docs_url,
        line_numbers: args.line_numbers,
        no_clipboard: args.no_clipboard,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!("vonixdocs starting up with content root: {:?}", resolved.content_root);

    tui::run(resolved)
}
