use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use phonebook_cli::config::{PhonebookPaths, Settings, StorageFormat};
use phonebook_cli::storage::open_store;
use phonebook_cli::ui::run_menu;

#[derive(Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Terminal-based interactive phone book",
    long_about = "A single-user phone book for the terminal. Add people, attach \
                  phone numbers, look entries up by name, and list everything, \
                  with the data persisted to a flat file between runs."
)]
struct Cli {
    /// Storage format (overrides the configured one for this run)
    #[arg(short, long, value_enum)]
    format: Option<StorageFormat>,

    /// Phone book file (overrides the default location for this run)
    #[arg(long, env = "PHONEBOOK_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = PhonebookPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(format) = cli.format {
        settings.format = format;
    }

    match cli.command {
        Some(Commands::Config) => {
            println!("phonebook-cli Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Storage format: {:?}", settings.format);
            println!(
                "  Phone book file: {}",
                cli.file
                    .unwrap_or_else(|| paths.phonebook_file(settings.format))
                    .display()
            );
        }
        None => {
            paths.ensure_directories()?;

            let path = cli
                .file
                .unwrap_or_else(|| paths.phonebook_file(settings.format));
            let store = open_store(settings.format, path);

            let had_previous = store.path().exists();
            let mut directory = store.load()?;
            if !had_previous {
                println!("No previous phone book found.");
            }

            let stdin = io::stdin();
            run_menu(
                &mut directory,
                store.as_ref(),
                stdin.lock(),
                io::stdout(),
            )?;
        }
    }

    Ok(())
}
