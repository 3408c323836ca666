use std::fs::read_to_string;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::info;

use rewriterule::normalize::nfc_normalize;
use rewriterule::tableparse::parse_table;
use rewriterule::{apply_all, RewriteTable};

/// Apply CSV rewrite tables (headers `pattern,replacement`) to text, one
/// table after another.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Rewrite table; repeat to chain tables in the given order
    #[arg(short = 't', long = "table", required = true)]
    tables: Vec<PathBuf>,

    /// Input text file (stdin if omitted)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut tables: Vec<RewriteTable> = Vec::new();
    for path in &cli.tables {
        let data = read_to_string(path)
            .with_context(|| format!("could not read table {}", path.display()))?;
        let name = path.display().to_string();
        let table = parse_table(&name, &data)
            .with_context(|| format!("invalid table {}", path.display()))?;
        info!("loaded {} rules from {}", table.len(), name);
        tables.push(table);
    }
    eprintln!("{}", format!("Loaded {} table(s)", tables.len()).green());

    let text = match &cli.input {
        Some(path) => read_to_string(path)
            .with_context(|| format!("could not read input {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("could not read stdin")?;
            buf
        }
    };

    let refs: Vec<&RewriteTable> = tables.iter().collect();
    print!("{}", apply_all(&refs, &nfc_normalize(&text)));
    Ok(())
}
