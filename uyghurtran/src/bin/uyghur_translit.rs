//! Convert a Uyghur text file from one orthography to another.
//!
//! `INPUT SOURCE TARGET [OUTPUT]`; without OUTPUT the input file is
//! overwritten. `--list` and `--show SOURCE TARGET` need no INPUT.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use strum::IntoEnumIterator;
use tabled::{settings::Style, Table, Tabled};

use uyghurtran::{Converter, Orthography};

#[derive(Parser)]
#[command(name = "uyghur-translit")]
#[command(version, about = "Convert Uyghur text between orthographies")]
struct Args {
    /// List the registered orthographies and exit
    #[arg(long)]
    list: bool,

    /// Print the grapheme pairs used for SOURCE -> TARGET and exit
    #[arg(long, num_args = 2, value_names = ["SOURCE", "TARGET"])]
    show: Option<Vec<String>>,

    /// Input text file
    #[arg(required_unless_present_any = ["list", "show"])]
    input: Option<PathBuf>,

    /// Orthography of the input
    #[arg(required_unless_present_any = ["list", "show"])]
    source: Option<String>,

    /// Orthography to convert to
    #[arg(required_unless_present_any = ["list", "show"])]
    target: Option<String>,

    /// Output file (defaults to overwriting INPUT)
    output: Option<PathBuf>,
}

#[derive(Tabled)]
struct SystemRow {
    #[tabled(rename = "Orthography")]
    name: &'static str,
    #[tabled(rename = "Case-sensitive")]
    case_sensitive: bool,
}

#[derive(Tabled)]
struct PairRow {
    #[tabled(rename = "Source")]
    source: &'static str,
    #[tabled(rename = "Target")]
    target: String,
}

fn parse_pair(source: &str, target: &str) -> Result<(Orthography, Orthography)> {
    Ok((source.parse()?, target.parse()?))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.list {
        let rows = Orthography::iter().map(|o| SystemRow {
            name: o.name(),
            case_sensitive: o.is_case_sensitive(),
        });
        println!("{}", Table::new(rows).with(Style::rounded()));
        return Ok(());
    }

    if let Some(pair) = &args.show {
        let (source, target) = parse_pair(&pair[0], &pair[1])?;
        let converter = Converter::between(source, target)?;
        let rows = converter.pairs().iter().map(|(from, to)| PairRow {
            source: *from,
            target: if to.is_empty() {
                "(deleted)".to_string()
            } else {
                to.to_string()
            },
        });
        println!("{}", Table::new(rows).with(Style::rounded()));
        return Ok(());
    }

    let (Some(input), Some(source), Some(target)) = (&args.input, &args.source, &args.target)
    else {
        bail!("INPUT, SOURCE and TARGET are required");
    };
    let (source, target) = parse_pair(source, target)?;
    let converter = Converter::between(source, target)?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("could not read {}", input.display()))?;
    let converted = converter.convert(&text);

    let output = args.output.as_ref().unwrap_or(input);
    fs::write(output, converted)
        .with_context(|| format!("could not write {}", output.display()))?;

    eprintln!(
        "{} {} -> {} written to {}",
        "Converted".green(),
        source.to_string().blue(),
        target.to_string().blue(),
        output.display()
    );
    Ok(())
}
