// File: crates/speed-chart-cli/src/main.rs
// Summary: CLI that loads an animal speed CSV, cleans it and renders the bar chart to SVG/PNG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use speed_chart_core::clean::rejected;
use speed_chart_core::types::TOP_N;
use speed_chart_core::{
    clean_with_limit, load_records, theme, ChartOptions, ContainerSize, Source, SpeedChartComponent,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "data/sample_animals.csv";

#[derive(Parser)]
#[command(name = "speed-chart", version, about = "Render the top animal speeds as a bar chart")]
struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load, clean and render the chart.
    Render(RenderArgs),
    /// Print the cleaned dataset as a table.
    Inspect(InspectArgs),
}

#[derive(Args)]
struct InputArgs {
    /// CSV path or http(s) URL.
    #[arg(env = "SPEED_CHART_INPUT", default_value = DEFAULT_INPUT)]
    input: String,

    /// How many of the fastest records to keep (1 to 40).
    #[arg(
        long,
        default_value_t = TOP_N,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=TOP_N as u64),
    )]
    top: usize,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// SVG output path.
    #[arg(long, default_value = "target/out/animal_speed.svg")]
    svg: PathBuf,

    /// Also rasterize to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Container width; clamped to at least 600.
    #[arg(long)]
    width: Option<u32>,

    /// Container height; clamped to at least 400.
    #[arg(long)]
    height: Option<u32>,

    /// Theme preset (light, dark).
    #[arg(long, default_value = "light")]
    theme: String,

    /// Chart title; defaults to "Top N Fastest Animals by Speed".
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args)]
struct InspectArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Also list rows dropped by validation.
    #[arg(long)]
    rejected: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => render(args),
        Command::Inspect(args) => inspect(args),
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let top_n = args.input.top;
    let options = ChartOptions {
        theme: theme::find(&args.theme),
        title: args.title.unwrap_or_else(|| ChartOptions::default_title(top_n)),
        top_n,
        ..ChartOptions::default()
    };
    let container = ContainerSize { width: args.width, height: args.height };
    let source = Source::parse(&args.input.input);

    let mut component = SpeedChartComponent::new(options, container);
    let count = component.mount_and_load(&source).len();
    if count == 0 {
        info!(%source, "no valid records; the chart is empty");
    }

    let chart = component.chart();
    let theme = &chart.options.theme;
    speed_chart_core::svg::write_svg(component.surface(), theme, &args.svg)
        .with_context(|| format!("writing {}", args.svg.display()))?;
    println!("Wrote {} ({count} bars)", args.svg.display());

    if let Some(png) = &args.png {
        speed_chart_core::raster::write_png(component.surface(), theme, png)
            .with_context(|| format!("writing {}", png.display()))?;
        println!("Wrote {}", png.display());
    }
    Ok(())
}

fn inspect(args: InspectArgs) -> Result<()> {
    let source = Source::parse(&args.input.input);
    let records = load_records(&source).with_context(|| format!("failed to load '{source}'"))?;

    if args.rejected {
        for (row, raw, why) in rejected(&records) {
            println!("skip row {:>4}: {:?} ({why})", row + 1, raw.name);
        }
    }

    let dataset = clean_with_limit(records, args.input.top);
    println!("{:>3}  {:<28} {:>10}  {}", "#", "name", "speed", "category");
    for (i, d) in dataset.iter().enumerate() {
        println!("{:>3}  {:<28} {:>10.2}  {}", i + 1, d.name(), d.value(), d.category());
    }
    println!("{} record(s)", dataset.len());
    Ok(())
}
