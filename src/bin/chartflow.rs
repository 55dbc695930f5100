use std::{
    path::{Path, PathBuf},
    str::FromStr as _,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chartflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a chart document to SVG.
    Render(RenderArgs),
    /// Build a chart document (parse, validate, resolve scales) without rendering it.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output SVG path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Replace a data source before rendering: `name=values.json` (repeatable, applied in order).
    #[arg(long = "data", value_parser = parse_data_arg)]
    data: Vec<(String, PathBuf)>,

    /// Target tick count for linear axes.
    #[arg(long, default_value_t = 10)]
    ticks: usize,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input chart JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn parse_data_arg(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=path, got '{s}'"))?;
    if name.is_empty() || path.is_empty() {
        return Err(format!("expected name=path, got '{s}'"));
    }
    Ok((name.to_owned(), PathBuf::from(path)))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
    }
}

/// Log level from `CHARTFLOW_LOG` (`error`..`trace`); quiet by default.
fn init_logging() {
    let level = std::env::var("CHARTFLOW_LOG")
        .ok()
        .and_then(|v| tracing::Level::from_str(v.trim()).ok())
        .unwrap_or(tracing::Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_spec(path: &Path) -> anyhow::Result<chartflow::ChartSpec> {
    chartflow::ChartSpec::from_path(path)
        .with_context(|| format!("load chart spec '{}'", path.display()))
}

fn read_records(path: &Path) -> anyhow::Result<Vec<chartflow::Record>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read data file '{}'", path.display()))?;
    chartflow::records_from_json(&text).with_context(|| format!("parse data file '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let spec = read_spec(&args.in_path)?;
    let opts = chartflow::RenderOptions {
        tick_count: args.ticks,
        ..chartflow::RenderOptions::default()
    };
    let view = chartflow::View::build_with_options(&spec, opts)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("start async runtime")?;
    let markup = rt.block_on(async {
        for (name, path) in &args.data {
            let values = read_records(path)?;
            view.set_data(name, values)
                .await
                .with_context(|| format!("set data '{name}'"))?;
        }
        let out = view.render_as_svg(chartflow::RenderTarget::Markup).await?;
        anyhow::Ok(out.markup)
    })?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, &markup)
                .with_context(|| format!("write SVG '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{markup}"),
    }
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let spec = read_spec(&args.in_path)?;
    chartflow::View::from_spec(&spec)
        .with_context(|| format!("build chart '{}'", args.in_path.display()))?;
    let sources = spec.data_source_names();
    println!("ok: {} data source(s): {}", sources.len(), sources.join(", "));
    Ok(())
}
