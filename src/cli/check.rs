use clap::Args;

use crate::cli::{LengthsArgs, OutputFormat, RegionInput};
use crate::core::region::{ContigLengths, ParsedRegion};
use crate::parsing::region::{parse_region_with, InvalidRegionError};

type CheckResult = (String, Result<ParsedRegion, InvalidRegionError>);

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: RegionInput,

    #[command(flatten)]
    pub lengths: LengthsArgs,
}

pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let dictionary = args.lengths.load()?;
    let lengths = dictionary.as_ref().map(|d| d as &dyn ContigLengths);
    let check_bounds = args.lengths.check_bounds();

    let results: Vec<CheckResult> = args
        .input
        .read()?
        .into_iter()
        .map(|text| {
            let result = parse_region_with(&text, lengths, check_bounds);
            (text, result)
        })
        .collect();

    let invalid = results.iter().filter(|(_, r)| r.is_err()).count();

    if verbose {
        eprintln!(
            "Checked {} regions: {} valid, {invalid} invalid",
            results.len(),
            results.len() - invalid
        );
    }

    match format {
        OutputFormat::Text => print_text(&results),
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Tsv => print_tsv(&results),
    }

    if invalid > 0 {
        anyhow::bail!("{invalid} of {} regions are invalid", results.len());
    }

    Ok(())
}

fn print_text(results: &[CheckResult]) {
    for (text, result) in results {
        match result {
            Ok(region) => println!("OK    {text} -> {region}"),
            Err(e) => println!("FAIL  {text}: {}", e.reason),
        }
    }
}

fn print_json(results: &[CheckResult]) -> anyhow::Result<()> {
    let output: Vec<_> = results
        .iter()
        .map(|(text, result)| match result {
            Ok(region) => serde_json::json!({
                "input": text,
                "valid": true,
                "region": region,
            }),
            Err(e) => serde_json::json!({
                "input": text,
                "valid": false,
                "error": e.reason.to_string(),
            }),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(results: &[CheckResult]) {
    println!("input\tvalid\terror");
    for (text, result) in results {
        match result {
            Ok(_) => println!("{text}\ttrue\t."),
            Err(e) => println!("{text}\tfalse\t{}", e.reason),
        }
    }
}
