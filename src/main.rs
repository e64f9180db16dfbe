use clap::Parser;
use ontoview::headless::{render_outline, HeadlessOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ontoview", about = "ontoview: browse and search ontology class trees")]
struct Cli {
    /// Ontology snapshot (JSON) to open.
    snapshot: Option<PathBuf>,

    /// Start with this search term applied.
    #[arg(long, short)]
    search: Option<String>,

    /// Print the visible class outline to stdout and exit instead of
    /// starting the TUI. Requires SNAPSHOT.
    #[arg(long, requires = "snapshot")]
    headless: bool,

    /// With --headless, expand every class before printing.
    #[arg(long, requires = "headless")]
    expand_all: bool,

    /// Write debug logs to /tmp/ontoview-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ontoview-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ontoview debug log started, tail -f /tmp/ontoview-debug.log");
    }

    if cli.headless {
        if let Some(path) = cli.snapshot.as_deref() {
            let opts = HeadlessOptions {
                search: cli.search,
                expand_all: cli.expand_all,
            };
            print!("{}", render_outline(path, &opts)?);
        }
        return Ok(());
    }

    ontoview_tui::run(cli.snapshot.as_deref(), cli.search.as_deref())
}
