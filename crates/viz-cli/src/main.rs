// File: crates/viz-cli/src/main.rs
// Summary: CLI loads a CSV and renders the country scatter (+ linked detail chart) or the season bar chart.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use viz_core::charts::scatter::LOCATION;
use viz_core::{
    arithmetic_mean, linear_regression, mean_of_products, theme, variance, BarChart, DetailChart, OutputFormat,
    RasterOptions, ScatterChart, Scene, Table, VizConfig,
};

#[derive(Debug, Parser)]
#[command(name = "viz", version, about = "Render scatter and bar charts from CSV files")]
struct Cli {
    /// TOML file with render settings
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Colour theme (light, dark)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Raise log verbosity (-v debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Directory receiving the rendered files
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// svg, png or both
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Population over time for one country, plus its fertility/life-expectancy chart
    Scatter {
        csv: PathBuf,
        /// Country code to draw (defaults to the configured country, else the first one)
        #[arg(long, conflicts_with = "all")]
        country: Option<String>,
        /// Render every country in the file
        #[arg(long)]
        all: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Average viewers per season as bars with an average line
    Bars {
        csv: PathBuf,
        /// Overlay the least-squares fit of viewers over seasons
        #[arg(long)]
        regression: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the selectable countries in first-appearance order
    Countries { csv: PathBuf },
    /// Mean, variance and least-squares fit for two numeric columns
    Stats {
        csv: PathBuf,
        #[arg(long)]
        x: String,
        #[arg(long)]
        y: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

fn init_tracing(verbose: u8) {
    let default = if verbose > 0 { "viz=debug,viz_core=debug" } else { "viz=info,viz_core=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = load_config(cli.config.as_deref(), cli.theme)?;
    match cli.command {
        Command::Scatter { csv, country, all, output } => {
            output.apply(&mut cfg);
            let table = load_table(&csv)?;
            let theme = theme::find(&cfg.theme);
            let scatter = ScatterChart::new(&table, theme)?;
            let detail = DetailChart::new(&table, theme)?;

            let selected = if all {
                scatter.countries()
            } else if let Some(c) = country {
                vec![c]
            } else {
                let preferred = &cfg.scatter.default_country;
                let c = scatter
                    .default_country(preferred)
                    .context("no countries found in the location column")?;
                if &c != preferred {
                    warn!(preferred = %preferred, using = %c, "default country not in data");
                }
                vec![c]
            };

            let mut used = HashSet::new();
            for c in &selected {
                let stem = unique_stem(c, &mut used);
                write_scene(&scatter.build(c)?, &cfg, &format!("scatter_{stem}"))?;
                write_scene(&detail.build(c)?, &cfg, &format!("detail_{stem}"))?;
            }
            info!(countries = selected.len(), "scatter charts done");
        }
        Command::Bars { csv, regression, output } => {
            output.apply(&mut cfg);
            cfg.bars.show_regression |= regression;
            let table = load_table(&csv)?;
            let chart = BarChart::new(&table, theme::find(&cfg.theme), cfg.bars.clone())?;
            info!(seasons = chart.seasons().len(), average = chart.average(), "bar chart ready");
            write_scene(&chart.build(), &cfg, "bars")?;
        }
        Command::Countries { csv } => {
            let table = load_table(&csv)?;
            table.require(&[LOCATION])?;
            for c in table.unique(LOCATION) {
                println!("{c}");
            }
        }
        Command::Stats { csv, x, y } => {
            let table = load_table(&csv)?;
            table.require(&[x.as_str(), y.as_str()])?;
            let xs = table.column(&x)?;
            let ys = table.column(&y)?;
            println!("{x}: mean {:.4}, variance {:.4}", arithmetic_mean(&xs)?, variance(&xs)?);
            println!("{y}: mean {:.4}, variance {:.4}", arithmetic_mean(&ys)?, variance(&ys)?);
            println!("mean of products: {:.4}", mean_of_products(&xs, &ys)?);
            match linear_regression(&xs, &ys) {
                Ok(fit) => println!("fit: {y} = {:.6} * {x} + {:.6}", fit.slope, fit.intercept),
                Err(err) => println!("fit: unavailable ({err})"),
            }
        }
    }
    Ok(())
}

impl OutputArgs {
    fn apply(self, cfg: &mut VizConfig) {
        if let Some(dir) = self.out_dir {
            cfg.out_dir = dir;
        }
        if let Some(format) = self.format {
            cfg.format = format;
        }
    }
}

fn load_config(path: Option<&Path>, theme: Option<String>) -> Result<VizConfig> {
    let mut cfg = match path {
        Some(p) => VizConfig::from_file(p)?,
        None => VizConfig::default(),
    };
    cfg.apply_env()?;
    if let Some(t) = theme {
        cfg.theme = t;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn load_table(path: &Path) -> Result<Table> {
    let table = Table::from_path(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(path = %path.display(), rows = table.len(), "loaded csv");
    if table.is_empty() {
        anyhow::bail!("no rows loaded from '{}', check headers/delimiter", path.display());
    }
    Ok(table)
}

/// Write `scene` as `<out_dir>/<name>.svg` and/or `.png` per the configured format.
fn write_scene(scene: &Scene, cfg: &VizConfig, name: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if cfg.format.svg() {
        let out = cfg.out_dir.join(format!("{name}.svg"));
        scene.render_to_svg(&out)?;
        written.push(out);
    }
    if cfg.format.png() {
        let out = cfg.out_dir.join(format!("{name}.png"));
        let opts = RasterOptions { scale: cfg.raster_scale, ..RasterOptions::default() };
        scene.render_to_png(&opts, &out)?;
        written.push(out);
    }
    for p in &written {
        println!("Wrote {}", p.display());
    }
    Ok(written)
}

/// Country codes become file-name safe stems.
fn file_stem(country: &str) -> String {
    let stem: String = country
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() { "unnamed".to_string() } else { stem }
}

/// `file_stem` with a numeric suffix when another country already produced the same stem.
fn unique_stem(country: &str, used: &mut HashSet<String>) -> String {
    let base = file_stem(country);
    let mut stem = base.clone();
    let mut n = 2;
    while !used.insert(stem.clone()) {
        stem = format!("{base}_{n}");
        n += 1;
    }
    if stem != base {
        warn!(country, stem = %stem, "file name already taken, using a suffix");
    }
    stem
}
