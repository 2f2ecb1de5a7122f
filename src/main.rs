use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use interval::config::Settings;
use interval::i18n::{CatalogTranslator, English, Translator};
use interval::interval::{is_valid_phrase, parse_phrase, to_seconds};
use interval::{IntervalField, RawInput, Unit};

#[derive(Parser, Debug)]
#[command(name = "interval")]
#[command(about = "Normalize, store and display duration values")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// JSON message catalog for unit names
    #[arg(long)]
    catalog: Option<String>,

    /// Amount used when no value is given
    #[arg(long, allow_hyphen_values = true)]
    default_amount: Option<i64>,

    /// Unit for the default amount and for zero display
    #[arg(long)]
    default_unit: Option<Unit>,

    /// Include a seconds component in display text
    #[arg(long)]
    show_seconds: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a value: JSON number, string, {"amount", "period"} or null
    Normalize {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Format a seconds count
    Format {
        #[arg(allow_hyphen_values = true)]
        seconds: i64,
    },
    /// Parse a phrase such as "2 years, 3 days"
    Parse {
        #[arg(allow_hyphen_values = true)]
        phrase: String,
    },
    /// Check that a phrase describes a non-zero duration
    Check {
        #[arg(allow_hyphen_values = true)]
        phrase: String,
    },
    /// Write the effective settings to the config file
    Init,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_translator(path: Option<&str>) -> Result<Box<dyn Translator>> {
    match path {
        Some(path) => Ok(Box::new(CatalogTranslator::load(path)?)),
        None => Ok(Box::new(English)),
    }
}

/// JSON when it parses, otherwise a bare phrase
fn read_input(raw: &str) -> Result<RawInput> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => RawInput::from_json(value).with_context(|| format!("invalid input {}", raw)),
        Err(_) => Ok(RawInput::Phrase(raw.to_string())),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load settings, flags win over the file
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(amount) = args.default_amount {
        settings.default_amount = amount;
    }
    if let Some(unit) = args.default_unit {
        settings.default_unit = unit;
    }
    if args.show_seconds {
        settings.show_seconds = true;
    }
    if args.catalog.is_some() {
        settings.catalog_path = args.catalog.clone();
    }

    init_logging(&settings.log_level);

    if let Command::Init = args.command {
        settings.save(args.config.as_deref())?;
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let translator = load_translator(settings.catalog_path.as_deref())?;
    let field = IntervalField::from_settings(&settings, translator);

    match args.command {
        Command::Normalize { input } => {
            let duration = field.normalize(read_input(&input)?)?;
            let report = json!({
                "duration": duration,
                "seconds": field.serialize(&duration),
                "display": field.display(&duration),
                "table": field.table_display(&duration),
                "edit": field.edit_value(&duration, false),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Format { seconds } => {
            println!("{}", field.formatter().from_seconds(seconds, settings.show_seconds));
        }
        Command::Parse { phrase } => {
            let duration =
                parse_phrase(&phrase).with_context(|| format!("cannot parse {:?}", phrase))?;
            let report = json!({
                "duration": duration,
                "seconds": to_seconds(&duration),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Check { phrase } => {
            if !is_valid_phrase(&phrase) {
                println!("invalid");
                std::process::exit(1);
            }
            println!("valid");
        }
        Command::Init => {}
    }

    Ok(())
}
