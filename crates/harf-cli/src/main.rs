//! harf - Arabic text utilities from the command line
//!
//! Shapes Arabic text into presentation forms, spells numbers in Arabic
//! words, and exposes the normalization helpers of `harf-text`.

use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use harf_text::{
    Config, Decomposition, Shaper, decompose, normalize, number_phrase, parse_number,
    remove_harakat, tashkeel, to_arabic_digits, to_english_digits,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Arabic text shaping, normalization and number spelling
#[derive(Parser, Debug)]
#[command(name = "harf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite Arabic letters into contextual presentation forms
    Shape {
        #[command(flatten)]
        input: TextInput,

        /// Replace lam + alef with ligatures (output gets shorter)
        #[arg(long)]
        ligatures: bool,

        /// Treat tatweel and ZWJ as word breaks
        #[arg(long = "no-join-causing")]
        no_join_causing: bool,

        /// Remove harakat before shaping
        #[arg(long = "strip-harakat")]
        strip_harakat: bool,

        /// Print per-character glyph information as JSON
        #[arg(long)]
        json: bool,
    },

    /// Spell integers in Arabic words
    Spell {
        /// Integers, in Western or Arabic-Indic digits
        #[arg(required = true, allow_hyphen_values = true)]
        numbers: Vec<String>,

        /// Print the decomposition alongside the words as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove harakat and unify letter variants
    Normalize {
        #[command(flatten)]
        input: TextInput,
    },

    /// Remove harakat only
    StripHarakat {
        #[command(flatten)]
        input: TextInput,
    },

    /// Convert digits between Western and Arabic-Indic
    Digits {
        /// Target digit set
        #[arg(long, value_enum, default_value_t = DigitSet::Arabic)]
        to: DigitSet,

        #[command(flatten)]
        input: TextInput,
    },

    /// Add the genitive kasra after prepositions
    Tashkeel {
        #[command(flatten)]
        input: TextInput,
    },
}

/// Digit set for conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DigitSet {
    /// Arabic-Indic digits (٠١٢)
    Arabic,
    /// Western digits (012)
    English,
}

/// Text given on the command line, or stdin when omitted
#[derive(Args, Debug)]
struct TextInput {
    /// Text to process (joined with spaces); reads stdin when empty
    text: Vec<String>,
}

impl TextInput {
    fn read(&self) -> Result<String> {
        if !self.text.is_empty() {
            return Ok(self.text.join(" "));
        }

        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read text from stdin")?;
        Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// JSON record for one spelled number
#[derive(Serialize)]
struct SpelledNumber<'a> {
    input: &'a str,
    value: i128,
    words: String,
    decomposition: Decomposition,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&cli, &mut out)?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Shape {
            input,
            ligatures,
            no_join_causing,
            strip_harakat,
            json,
        } => {
            let config = Config::new()
                .lam_alef_ligatures(*ligatures)
                .join_causing(!*no_join_causing)
                .strip_harakat(*strip_harakat);
            tracing::info!("Shaping with {:?}", config);

            let shaped = Shaper::new(config).analyze(&input.read()?);
            if *json {
                serde_json::to_writer_pretty(&mut *out, &shaped)
                    .context("Failed to write JSON")?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", shaped)?;
            }
        }

        Command::Spell { numbers, json } => {
            for raw in numbers {
                let value = parse_number(raw).with_context(|| format!("Cannot read {:?}", raw))?;
                let words = number_phrase(value)
                    .with_context(|| format!("Cannot spell {}", value))?
                    .to_string();

                if *json {
                    let record = SpelledNumber {
                        input: raw,
                        value,
                        words,
                        decomposition: decompose(value)?,
                    };
                    serde_json::to_writer(&mut *out, &record).context("Failed to write JSON")?;
                    writeln!(out)?;
                } else {
                    writeln!(out, "{}", words)?;
                }
            }
        }

        Command::Normalize { input } => writeln!(out, "{}", normalize(&input.read()?))?,

        Command::StripHarakat { input } => writeln!(out, "{}", remove_harakat(&input.read()?))?,

        Command::Digits { to, input } => {
            let text = input.read()?;
            let converted = match to {
                DigitSet::Arabic => to_arabic_digits(&text),
                DigitSet::English => to_english_digits(&text),
            };
            writeln!(out, "{}", converted)?;
        }

        Command::Tashkeel { input } => writeln!(out, "{}", tashkeel(&input.read()?))?,
    }

    Ok(())
}
