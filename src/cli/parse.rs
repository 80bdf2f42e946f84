use clap::Args;

use crate::cli::{LengthsArgs, OutputFormat, RegionInput};
use crate::core::region::{ContigLengths, ParsedRegion};
use crate::parsing::region::parse_region_with;

#[derive(Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: RegionInput,

    #[command(flatten)]
    pub lengths: LengthsArgs,
}

pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let dictionary = args.lengths.load()?;
    let lengths = dictionary.as_ref().map(|d| d as &dyn ContigLengths);
    let check_bounds = args.lengths.check_bounds();

    let mut parsed = Vec::new();
    for text in args.input.read()? {
        let region = parse_region_with(&text, lengths, check_bounds)?;
        if verbose {
            eprintln!("Parsed '{text}' as {region}");
        }
        parsed.push((text, region));
    }

    match format {
        OutputFormat::Text => print_text(&parsed),
        OutputFormat::Json => print_json(&parsed)?,
        OutputFormat::Tsv => print_tsv(&parsed),
    }

    Ok(())
}

fn print_text(parsed: &[(String, ParsedRegion)]) {
    for (text, region) in parsed {
        println!("{text}");
        println!("  Name:  {}", region.name);
        println!("  Start: {}", region.start);
        match region.end {
            Some(end) => println!("  End:   {end}"),
            None => println!("  End:   (open)"),
        }
    }
}

fn print_json(parsed: &[(String, ParsedRegion)]) -> anyhow::Result<()> {
    let output: Vec<_> = parsed
        .iter()
        .map(|(text, region)| {
            serde_json::json!({
                "input": text,
                "name": region.name,
                "start": region.start,
                "end": region.end,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(parsed: &[(String, ParsedRegion)]) {
    println!("input\tname\tstart\tend");
    for (text, region) in parsed {
        let end = region.end.map_or_else(|| ".".to_string(), |e| e.to_string());
        println!("{text}\t{}\t{}\t{end}", region.name, region.start);
    }
}
