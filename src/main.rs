use std::collections::HashSet;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing_subscriber::filter::LevelFilter;

use freqmine::{mine, MinSupport, MinerConfig, MiningResult, RawTransaction, TransactionStore};

/// Find frequent itemsets in a basket file with the A-Priori algorithm.
///
/// Each line of the input is one transaction, items separated by
/// whitespace. Results are written one itemset per line: the item names,
/// then the support count.
#[derive(Parser)]
#[command(version, about)]
#[command(group(ArgGroup::new("support").required(true)))]
struct Cli {
    /// Input basket file
    #[arg(short, long)]
    input: PathBuf,

    /// Minimum support as an absolute transaction count
    #[arg(short = 's', long, group = "support")]
    min_count: Option<usize>,

    /// Minimum support as a fraction of the total transaction count
    #[arg(short = 'f', long, group = "support")]
    min_frac: Option<f64>,

    /// Stop after itemsets of this size
    #[arg(short = 'k', long)]
    max_size: Option<usize>,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose progress logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .with_writer(io::stderr)
        .init();

    let contents = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let raw_transactions = parse_baskets(&contents);

    let store = TransactionStore::new(&raw_transactions)
        .with_context(|| format!("loading {}", cli.input.display()))?;

    let min_support = match (cli.min_count, cli.min_frac) {
        (Some(count), None) => MinSupport::Count(count),
        (None, Some(fraction)) => MinSupport::Fraction(fraction),
        _ => unreachable!("clap enforces exactly one support flag"),
    };
    let mut config = MinerConfig::new(min_support);
    if let Some(max_size) = cli.max_size {
        config = config.with_max_size(max_size);
    }

    let result = mine(&store, &config)?;

    match cli.output {
        Some(path) => {
            let file = fs::File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_itemsets(BufWriter::new(file), &store, &result)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            write_itemsets(BufWriter::new(io::stdout().lock()), &store, &result)
                .context("writing results")?;
        }
    }

    Ok(())
}

/// One transaction per line, items separated by whitespace. Blank lines are
/// skipped and repeated items within a line are dropped, keeping the first
/// occurrence.
fn parse_baskets(contents: &str) -> Vec<RawTransaction> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut seen: HashSet<&str> = HashSet::new();
            line.split_whitespace()
                .filter(|&item| seen.insert(item))
                .collect()
        })
        .collect()
}

fn write_itemsets(
    mut out: impl Write,
    store: &TransactionStore,
    result: &MiningResult,
) -> io::Result<()> {
    for (itemset, count) in result.sorted_itemsets() {
        writeln!(out, "{}\t{}", store.decode(itemset).join(" "), count)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_baskets() {
        let baskets = parse_baskets("bread milk\n\nmilk cereal eggs\n");
        assert_eq!(
            baskets,
            vec![vec!["bread", "milk"], vec!["milk", "cereal", "eggs"]]
        );
    }

    #[test]
    fn drops_repeated_items_within_a_line() {
        let baskets = parse_baskets("bread milk bread\n");
        assert_eq!(baskets, vec![vec!["bread", "milk"]]);
    }

    #[test]
    fn renders_sorted_itemsets_with_counts() {
        let store = TransactionStore::new(&[
            vec!["bread", "milk"],
            vec!["bread", "milk"],
            vec!["milk"],
        ])
        .unwrap();
        let result = mine(&store, &MinerConfig::new(MinSupport::Count(2))).unwrap();

        let mut rendered = Vec::new();
        write_itemsets(&mut rendered, &store, &result).unwrap();

        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            "bread\t2\nmilk\t3\nbread milk\t2\n"
        );
    }
}
