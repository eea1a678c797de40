use anyhow::{Context, Result};
use clap::Parser;
use keycalc::core::{EngineConfig, KeyEvent};
use keycalc::engine::{Engine, EngineBuilder};
use keycalc::script::parse_script;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stillwater::validation::Validation;

#[derive(Parser)]
#[command(name = "keycalc")]
#[command(about = "Drive the keypad calculator with key scripts")]
struct Cli {
    /// Key script, e.g. `2 0 0 + 1 0 % =`. Reads stdin line by line when omitted.
    script: Vec<String>,

    /// Maximum digits in the entry being typed
    #[arg(long)]
    max_digits: Option<usize>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the display after every key
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    let mut engine = build_engine(&cli)?;

    if !cli.script.is_empty() {
        let script = cli.script.join(" ");
        if let Some(keys) = parse_or_report(&script) {
            run_keys(&mut engine, keys, cli.trace);
        }
        println!("{}", engine.display_text());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let Some(keys) = parse_or_report(&line) else {
            continue;
        };
        run_keys(&mut engine, keys, cli.trace);
        writeln!(stdout, "{}", engine.display_text())?;
        stdout.flush()?;
    }

    Ok(())
}

fn build_engine(cli: &Cli) -> Result<Engine> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            EngineConfig::from_json(&json)
                .with_context(|| format!("invalid config in {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(max) = cli.max_digits {
        config.max_entry_digits = Some(max);
    }

    Ok(EngineBuilder::new().config(config).build()?)
}

fn parse_or_report(script: &str) -> Option<Vec<KeyEvent>> {
    match parse_script(script) {
        Validation::Success(keys) => Some(keys),
        Validation::Failure(errors) => {
            for error in errors.iter() {
                eprintln!("error: {error}");
            }
            None
        }
    }
}

fn run_keys(engine: &mut Engine, keys: Vec<KeyEvent>, trace: bool) {
    for key in keys {
        engine.handle(key);
        if trace {
            println!("{:>4}  {}", key.to_string(), engine.display_text());
        }
    }
}
