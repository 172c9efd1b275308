//! Command-line shell for the generator demos. One subcommand per demo;
//! text output mirrors the lab hand-out (first 50 entries shown, the
//! rest summarized by count), `--json` emits the full report instead.

use std::time::Instant;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use genlab::cities::MIN_NAME_LEN;
use genlab::keyspace::KEYSPACE_SIZE;
use genlab::sampler;
use genlab::Result;
use genlab::{filter_long_cities, first_n, letter_combinations, partition_and_generate};

/// How many result lines to show before summarizing the remainder.
const PREVIEW_LIMIT: usize = 50;

#[derive(Parser)]
#[command(
    name = "genlab",
    version,
    about = "Generator teaching lab: letter combinations, a polynomial sampler, a city-name filter"
)]
struct Cli {
    /// Emit results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate two-letter combinations
    Combos {
        /// How many combinations to produce (values above 676 are clamped)
        #[arg(long, default_value_t = 50)]
        count: i64,

        /// Generate sequentially instead of with the four-way partition
        #[arg(long)]
        sequential: bool,
    },
    /// Sample f(x) = 0.1x^2 + 5x - 2 over an inclusive range
    Sample {
        #[arg(long, default_value_t = sampler::DEFAULT_START, allow_negative_numbers = true)]
        start: f64,

        #[arg(long, default_value_t = sampler::DEFAULT_END, allow_negative_numbers = true)]
        end: f64,

        #[arg(long, default_value_t = sampler::DEFAULT_STEP)]
        step: f64,

        /// How many samples to show
        #[arg(long, default_value_t = 20)]
        count: usize,
    },
    /// Filter a whitespace-separated list down to long city names
    Cities {
        /// City names separated by spaces
        names: String,
    },
}

#[derive(Serialize)]
struct CombosReport {
    mode: &'static str,
    total: usize,
    elapsed_secs: f64,
    combinations: Vec<String>,
}

#[derive(Serialize)]
struct SampleReport {
    start: f64,
    end: f64,
    step: f64,
    values: Vec<f64>,
}

#[derive(Serialize)]
struct CitiesReport {
    total: usize,
    cities: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Combos { count, sequential } => run_combos(count, sequential, cli.json),
        Command::Sample {
            start,
            end,
            step,
            count,
        } => run_sample(start, end, step, count, cli.json),
        Command::Cities { names } => run_cities(&names, cli.json),
    }
}

fn run_combos(count: i64, sequential: bool, json: bool) -> Result<()> {
    let start = Instant::now();
    let (mode, combinations) = if sequential {
        let n = count.max(0) as usize;
        ("sequential", first_n(letter_combinations(), n))
    } else {
        ("partitioned", partition_and_generate(count))
    };
    let elapsed = start.elapsed().as_secs_f64();

    if json {
        let report = CombosReport {
            mode,
            total: combinations.len(),
            elapsed_secs: elapsed,
            combinations,
        };
        println!("{}", to_json(&report));
        return Ok(());
    }

    println!(
        "Generated {} of {} combinations in {:.6}s [{}]",
        combinations.len(),
        KEYSPACE_SIZE,
        elapsed,
        mode
    );
    println!();
    print!("{}", render_preview(&combinations));
    Ok(())
}

fn run_sample(start: f64, end: f64, step: f64, count: usize, json: bool) -> Result<()> {
    let samples = sampler::sample_polynomial(start, end, step)?;
    let values = first_n(samples, count);

    if json {
        let report = SampleReport {
            start,
            end,
            step,
            values,
        };
        println!("{}", to_json(&report));
        return Ok(());
    }

    println!(
        "f(x) = 0.1x^2 + 5x - 2 over [{start}, {end}], step {step}, first {} values:",
        values.len()
    );
    for (i, value) in values.iter().enumerate() {
        println!("{:3}. {:10.4}", i + 1, value);
    }
    Ok(())
}

fn run_cities(names: &str, json: bool) -> Result<()> {
    let cities = filter_long_cities(names)?;

    if json {
        let report = CitiesReport {
            total: cities.len(),
            cities,
        };
        println!("{}", to_json(&report));
        return Ok(());
    }

    if cities.is_empty() {
        println!("No cities longer than {MIN_NAME_LEN} characters");
        return Ok(());
    }

    println!(
        "Found {} cities longer than {MIN_NAME_LEN} characters:",
        cities.len()
    );
    for (i, city) in cities.iter().enumerate() {
        println!("{}. {}", i + 1, city);
    }
    Ok(())
}

/// First [`PREVIEW_LIMIT`] entries, one per line, with the remainder
/// summarized by count.
fn render_preview(items: &[String]) -> String {
    let mut out = String::new();
    for item in items.iter().take(PREVIEW_LIMIT) {
        out.push_str(item);
        out.push('\n');
    }
    if items.len() > PREVIEW_LIMIT {
        out.push_str(&format!("\n... and {} more\n", items.len() - PREVIEW_LIMIT));
    }
    out
}

fn to_json<T: Serialize>(report: &T) -> String {
    serde_json::to_string_pretty(report).expect("report serialization")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos(n: usize) -> Vec<String> {
        first_n(letter_combinations(), n)
    }

    #[test]
    fn short_lists_render_without_summary() {
        assert_eq!(render_preview(&combos(3)), "aa\nab\nac\n");
    }

    #[test]
    fn long_lists_are_summarized() {
        let rendered = render_preview(&combos(60));
        assert_eq!(rendered.lines().filter(|l| !l.is_empty()).count(), 51);
        assert!(rendered.ends_with("... and 10 more\n"));
    }

    #[test]
    fn exactly_the_limit_renders_everything() {
        let rendered = render_preview(&combos(PREVIEW_LIMIT));
        assert_eq!(rendered.lines().count(), PREVIEW_LIMIT);
        assert!(!rendered.contains("more"));
    }
}
