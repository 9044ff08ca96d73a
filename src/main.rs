use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stringtrail::{Cursor, StringCollection};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stringtrail", about = "String collection traversal demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the canonical demonstration scenario.
    Demo,
    /// Load strings from a file and traverse them.
    Traverse {
        /// Input file (one string per line, blank lines skipped).
        file: PathBuf,
        /// Also run a filtered traversal keeping strings longer than this.
        #[arg(long)]
        min_len: Option<usize>,
        /// Also run a filtered traversal keeping strings containing this.
        #[arg(long)]
        contains: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Traverse {
            file,
            min_len,
            contains,
        } => run_traverse(file, min_len, contains)?,
    }

    Ok(())
}

fn run_demo() {
    let mut strings = StringCollection::new();
    strings.add("hourglass");
    strings.add("cat");
    strings.add("manifestation");
    strings.add("city");

    println!("Sequential traversal:");
    print_all(strings.cursor());

    println!("Filtered traversal (length > 5):");
    print_all(strings.filtered_cursor(|s| s.len() > 5));
}

fn run_traverse(
    path: PathBuf,
    min_len: Option<usize>,
    contains: Option<String>,
) -> Result<()> {
    let strings = load_strings(&path)
        .with_context(|| format!("failed to load strings from {}", path.display()))?;

    println!("Sequential traversal:");
    print_all(strings.cursor());

    if let Some(min_len) = min_len {
        println!("Filtered traversal (length > {min_len}):");
        print_all(strings.filtered_cursor(move |s| s.len() > min_len));
    }

    if let Some(needle) = contains {
        println!("Filtered traversal (containing \"{needle}\"):");
        print_all(strings.filtered_cursor(move |s| s.contains(&needle)));
    }

    Ok(())
}

fn load_strings(path: &PathBuf) -> Result<StringCollection> {
    let reader = BufReader::new(File::open(path)?);
    let mut strings = StringCollection::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        strings.add(trimmed);
    }

    Ok(strings)
}

fn print_all(cursor: impl Cursor<Item = String>) {
    for element in cursor.into_iter() {
        println!("{element}");
    }
}
