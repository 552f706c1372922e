use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docnotes::launcher::SystemLauncher;
use docnotes::{App, AppConfig, NotesError, Outcome};

#[derive(Parser)]
#[command(name = "docnotes")]
#[command(version, about = "Open subject notes alongside their documentation")]
struct Cli {
    /// Directory to search for notes.json manifests
    #[arg(default_value = ".")]
    search_dir: PathBuf,
}

/// Initialize tracing on stderr so stdout stays clean for the menus
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "docnotes=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load();
    let app = App::new(&config, SystemLauncher::new(config.editor.clone()));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match app.run(&cli.search_dir, &mut input, &mut output) {
        Ok(Outcome::Opened { notes_path, url, .. }) => {
            tracing::debug!("Opened {} and {}", notes_path.display(), url);
        }
        Ok(Outcome::Cancelled) => {}
        Ok(Outcome::NothingFound) => print_nothing_found(&cli.search_dir, &config),
        Err(NotesError::SearchRootMissing(dir)) => {
            println!(
                "ERROR: NO SUCH DIRECTORY \"{}\"",
                dir.display().to_string().to_uppercase()
            );
            print_nothing_found(&cli.search_dir, &config);
        }
        Err(NotesError::InvalidManifest { path, reason }) => {
            println!("ERROR: INVALID MANIFEST \"{}\": {}", path.display(), reason);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn print_nothing_found(search_dir: &std::path::Path, config: &AppConfig) {
    println!(
        "no directories with \"{}\" found in \"{}\"",
        config.manifest_file,
        search_dir.display()
    );
}
