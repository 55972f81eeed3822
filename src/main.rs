use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use vino_stats::data::derive::{GAMMA_FIELD, with_gamma};
use vino_stats::data::loader::load_file;
use vino_stats::report::html::render_page;
use vino_stats::stats::grouped::grouped_stats;

/// The class column records are partitioned by.
const GROUP_FIELD: &str = "Alcohol";
/// The raw metric column.
const FLAVANOIDS_FIELD: &str = "Flavanoids";

const USAGE: &str = "usage: vino-stats <DATASET.{json,csv}> [-o REPORT.html]";

fn parse_args() -> Result<(PathBuf, PathBuf)> {
    let mut input: Option<PathBuf> = None;
    let mut output = PathBuf::from("wine-report.html");

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let value = args.next().with_context(|| format!("missing value after {arg}"))?;
                output = PathBuf::from(value);
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            other => bail!("unexpected argument '{other}'\n{USAGE}"),
        }
    }

    let input = input.context(USAGE)?;
    Ok((input, output))
}

fn main() -> Result<()> {
    env_logger::init();

    let (input, output) = parse_args()?;

    let dataset = load_file(&input)?;
    if dataset.is_empty() {
        bail!("{} contains no records", input.display());
    }
    let classes = dataset
        .unique_values
        .get(GROUP_FIELD)
        .map_or(0, |vals| vals.len());
    log::info!("{classes} distinct '{GROUP_FIELD}' classes");

    // The two metric paths are independent computations over the same
    // read-only dataset; Gamma needs the derived column attached first.
    let flavanoids = grouped_stats(&dataset, GROUP_FIELD, FLAVANOIDS_FIELD)?;
    let augmented = with_gamma(&dataset);
    let gamma = grouped_stats(&augmented, GROUP_FIELD, GAMMA_FIELD)?;

    let page = render_page(&[flavanoids, gamma]);
    std::fs::write(&output, page)
        .with_context(|| format!("writing report to {}", output.display()))?;

    log::info!("Wrote report to {}", output.display());
    println!("Report written to {}", output.display());
    Ok(())
}
