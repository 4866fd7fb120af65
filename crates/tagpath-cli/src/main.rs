use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tagpath::{parse_str_with_config, resolve, Config};

#[derive(Debug, Parser)]
#[command(
    name = "tagpath",
    version,
    about = "Parse bracket-tag markup and answer attribute path queries"
)]
struct Args {
    /// Input file (defaults to stdin). First line holds the markup line
    /// count and query count, followed by that many markup lines and
    /// query lines.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Reject unbalanced documents and mismatched close tags
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let input = read_input(&args.input)?;
    let lines = run(&input, args.strict)?;
    write_output(&args.output, &lines)
}

fn run(input: &str, strict: bool) -> Result<Vec<String>> {
    let mut lines = input.lines();

    let header = lines.next().context("missing header line")?;
    let mut counts = header.split_whitespace();
    let markup_lines: usize = counts
        .next()
        .context("missing markup line count")?
        .parse()
        .context("invalid markup line count")?;
    let query_count: usize = counts
        .next()
        .context("missing query count")?
        .parse()
        .context("invalid query count")?;

    let markup: Vec<&str> = lines.by_ref().take(markup_lines).collect();
    if markup.len() < markup_lines {
        bail!("expected {markup_lines} markup lines, got {}", markup.len());
    }
    let document = markup.join("\n");

    let config = Config {
        strict,
        ..Config::default()
    };
    let doc = parse_str_with_config(&document, config)?;

    let queries: Vec<&str> = lines.take(query_count).collect();
    if queries.len() < query_count {
        bail!("expected {query_count} queries, got {}", queries.len());
    }

    Ok(queries
        .iter()
        .filter_map(|query| resolve(&doc, query).into_line())
        .collect())
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, lines: &[String]) -> Result<()> {
    let mut data = lines.join("\n");
    if !data.is_empty() {
        data.push('\n');
    }
    match path {
        Some(path) => std::fs::write(path, &data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(data.as_bytes())
                .context("failed to write stdout")?;
            Ok(())
        }
    }
}
