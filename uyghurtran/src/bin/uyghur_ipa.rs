//! Add broad IPA transcriptions to a list of Uyghur words.
//!
//! Each line of the input holds one or more tab-separated entries in the
//! Latin orthography. Output is one `<original>;<transcription>` line per
//! entry.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use uyghurtran::wordlist::transcribe_lines;

#[derive(Parser)]
#[command(name = "uyghur-ipa")]
#[command(version, about = "Add broad IPA transcription to a Uyghur word list")]
struct Args {
    /// Word list, one entry per line (stdin if omitted)
    input: Option<PathBuf>,

    /// Where to write the transcriptions (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("could not create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let count = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("could not open {}", path.display()))?;
            transcribe_lines(BufReader::new(file), writer)
        }
        None => transcribe_lines(io::stdin().lock(), writer),
    }
    .context("could not transcribe word list")?;

    eprintln!("{}", format!("Transcribed {count} entries").green());
    Ok(())
}
