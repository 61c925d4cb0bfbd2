mod terminal;

use std::fmt;

use services::ai::GenerationConfig;
use services::{AppServices, Clock};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutor_core::model::{DifficultyGrade, Subject};

use crate::terminal::{HomeDefaults, Terminal};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidGrade { raw: String },
    InvalidSubject { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidGrade { raw } => write!(f, "invalid --grade value: {raw}"),
            ArgsError::InvalidSubject { raw } => write!(f, "invalid --subject value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  tutor [--grade <1-12>] [--subject <name>] [--skip-verify]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --grade        preselect the difficulty grade on the home page");
    eprintln!("  --subject      preselect Physics, Chemistry, Biology or Mathematics");
    eprintln!("  --skip-verify  do not check the API key before starting");
    eprintln!();
    eprintln!("Environment (a .env file is read if present):");
    eprintln!("  TUTOR_API_KEY (or OPENROUTER_API_KEY), TUTOR_API_BASE_URL,");
    eprintln!("  TUTOR_MODEL, TUTOR_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    grade: Option<DifficultyGrade>,
    subject: Option<Subject>,
    skip_verify: bool,
    help: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--grade" => {
                    let value = require_value(&mut args, "--grade")?;
                    let grade = value
                        .parse::<DifficultyGrade>()
                        .map_err(|_| ArgsError::InvalidGrade { raw: value.clone() })?;
                    parsed.grade = Some(grade);
                }
                "--subject" => {
                    let value = require_value(&mut args, "--subject")?;
                    let subject = value
                        .parse::<Subject>()
                        .map_err(|_| ArgsError::InvalidSubject { raw: value.clone() })?;
                    parsed.subject = Some(subject);
                }
                "--skip-verify" => parsed.skip_verify = true,
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing() {
    // Log to stderr so lessons and prompts on stdout stay readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();
    init_tracing();

    let config = GenerationConfig::from_env()?;
    info!(base_url = config.base_url(), model = config.model(), "configuration loaded");

    let services = AppServices::new(config, Clock::system())?;
    if args.skip_verify {
        warn!("skipping API key verification");
    } else {
        services.verify_credentials().await?;
    }

    let defaults = HomeDefaults {
        subject: args.subject,
        grade: args.grade,
    };
    let mut terminal = Terminal::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        services.session_loop(),
        defaults,
    );
    terminal.run().await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
