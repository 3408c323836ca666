//! Attach dictionary glosses to the terms of an indexed lexicon.
//!
//! Glosses come from a CSV file (`term,gloss`), typically saved from an
//! earlier dictionary lookup.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;

use uyghurtran::lexicon::{gloss_row, read_lexicon, StaticGlosses};

#[derive(Parser)]
#[command(name = "uyghur-glosses")]
#[command(version, about = "Attach glosses to an indexed lexicon")]
struct Args {
    /// Lexicon with `<index>,<terms>` rows
    input: PathBuf,

    /// CSV file with `term,gloss` columns
    #[arg(short = 'g', long = "glosses")]
    glosses: PathBuf,

    /// Where to write the glossed rows (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let data = fs::read_to_string(&args.glosses)
        .with_context(|| format!("could not read {}", args.glosses.display()))?;
    let glosses = StaticGlosses::from_csv(&data)
        .with_context(|| format!("invalid gloss file {}", args.glosses.display()))?;
    info!("loaded {} glosses", glosses.len());

    let file = File::open(&args.input)
        .with_context(|| format!("could not open {}", args.input.display()))?;
    let rows = read_lexicon(BufReader::new(file))?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    for row in &rows {
        writeln!(writer, "{}", gloss_row(row, &glosses))?;
    }
    writer.flush()?;

    eprintln!("{}", format!("Glossed {} rows", rows.len()).green());
    Ok(())
}
