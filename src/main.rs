use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use contact_book::cli::{handle_contact_command, run_shell, ContactCommands};
use contact_book::config::{paths::DATA_DIR_ENV, ContactsPaths, Settings};
use contact_book::display::{format_config, Painter};
use contact_book::services::BookService;

#[derive(Parser)]
#[command(
    name = "contacts",
    author = "Kaylee Beyene",
    version,
    about = "Terminal address book with birthday reminders",
    long_about = "contacts keeps names, phone numbers and birthdays in a local \
                  address book and tells you whose birthday is coming up. Run it \
                  without a subcommand to start the interactive assistant."
)]
struct Cli {
    /// Directory holding the address book, settings and audit log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant (default)
    #[command(alias = "bot")]
    Shell,

    /// Show current configuration and paths
    Config,

    #[command(flatten)]
    Contact(ContactCommands),
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn main() -> Result<ExitCode> {
    // stderr keeps diagnostics out of command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => ContactsPaths::with_base_dir(dir),
        None => ContactsPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let painter = Painter::new(settings.color_output && !cli.no_color);

    match cli.command {
        Some(Commands::Config) => {
            print!("{}", format_config(&paths, &settings));
        }
        Some(Commands::Contact(cmd)) => {
            let mut service = BookService::open(&paths, &settings)?;
            match handle_contact_command(&mut service, cmd, today()) {
                Ok(reply) => println!("{}", painter.reply(&reply)),
                Err(e) => {
                    eprintln!("{}", painter.error(&e));
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::Shell) | None => {
            let mut service = BookService::open(&paths, &settings)?;
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            run_shell(&mut service, painter, stdin.lock(), &mut stdout, today)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
