use std::fs;
use std::path::PathBuf;

use bar_chart_rs::render::SvgDocument;
use bar_chart_rs::statistics::{ChartCatalog, decode_statistics_response};
use bar_chart_rs::telemetry;
use chrono::{Local, NaiveDate};

#[derive(Debug)]
struct CliArgs {
    catalog_path: Option<PathBuf>,
    date: Option<NaiveDate>,
    chart_id: String,
    response_path: PathBuf,
    output_path: PathBuf,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let catalog = match &args.catalog_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartCatalog::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => {
            ChartCatalog::statistics_today(args.date.unwrap_or_else(|| Local::now().date_naive()))
        }
    };
    let definition = catalog.get(&args.chart_id).map_err(|err| err.to_string())?;

    let raw = fs::read_to_string(&args.response_path).map_err(|err| {
        format!(
            "failed to read `{}`: {err}",
            args.response_path.display()
        )
    })?;
    let data =
        decode_statistics_response(&raw, definition.series).map_err(|err| err.to_string())?;

    let mut document = SvgDocument::new().with_container(definition.container.clone());
    let layout = catalog
        .render(&mut document, &args.chart_id, &data)
        .map_err(|err| err.to_string())?;
    document
        .write_svg(&definition.container, &args.output_path)
        .map_err(|err| err.to_string())?;

    println!(
        "rendered `{}` ({} bars) to {}",
        args.chart_id,
        layout.bars.len(),
        args.output_path.display()
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut catalog_path: Option<PathBuf> = None;
    let mut date: Option<NaiveDate> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --catalog".to_owned())?;
                catalog_path = Some(PathBuf::from(value));
            }
            "--date" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --date".to_owned())?;
                let parsed = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|err| format!("invalid --date `{value}`: {err}"))?;
                date = Some(parsed);
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin render_statistics_chart -- [--catalog <path>] [--date <YYYY-MM-DD>] <chart-id> <response.json> <out.svg>"
                );
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => {
                return Err(format!("unknown argument `{arg}`"));
            }
            _ => positional.push(arg),
        }
    }

    let [chart_id, response_path, output_path]: [String; 3] = positional
        .try_into()
        .map_err(|_| "expected <chart-id> <response.json> <out.svg>".to_owned())?;

    Ok(CliArgs {
        catalog_path,
        date,
        chart_id,
        response_path: PathBuf::from(response_path),
        output_path: PathBuf::from(output_path),
    })
}
