use clap::{Parser, Subcommand};
use gp_plot::{
    AxesPair, Axis, Color, CommandSink, Plot, PlotConfig, PlotResult, PlotStyle, ProcessError,
    ProcessResult, Range, Smooth,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gp")]
#[command(about = "Live gnuplot windows fed through a pipe", long_about = None)]
struct Cli {
    /// Plot configuration (YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Window title
    #[arg(long, global = true, default_value = "Plot")]
    title: String,

    /// Print the gnuplot commands instead of starting gnuplot
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot x^2 over [0, 5)
    Parabola,
    /// Plot a random walk with a smoothed overlay of the same data
    RandomWalk {
        /// Number of steps
        #[arg(long, default_value_t = 1000)]
        steps: u32,
        /// Seed for the step generator
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Plot x^2 on the left axis and sin(2x) on the right axis
    DualAxis,
    /// Plot numeric rows read from a file or stdin, one point per line
    Stream {
        /// Input file (defaults to stdin)
        input: Option<PathBuf>,
        /// Redraw after this many rows
        #[arg(long, default_value_t = 100)]
        update_every: usize,
        /// Plot style keyword (points, lines, linespoints, ...)
        #[arg(long, default_value = "lines")]
        style: PlotStyle,
    },
}

fn main() -> PlotResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PlotConfig::load(path)?,
        None => PlotConfig::default(),
    };
    let plot = if cli.dry_run {
        Plot::with_sink(&cli.title, EchoSink(io::stdout()), &config)
    } else {
        Plot::with_config(&cli.title, &config)?
    };

    let wait = match cli.command {
        Commands::Parabola => cmd_parabola(&plot)?,
        Commands::RandomWalk { steps, seed } => cmd_random_walk(&plot, steps, seed)?,
        Commands::DualAxis => cmd_dual_axis(&plot)?,
        Commands::Stream {
            input,
            update_every,
            style,
        } => cmd_stream(&plot, input.as_deref(), update_every.max(1), style)?,
    };

    if wait && !cli.dry_run {
        wait_for_enter()?;
    }
    Ok(())
}

fn cmd_parabola(plot: &Plot) -> PlotResult<bool> {
    let series = plot.create_series("x^2");
    series.append_all(steps(0.0, 5.0, 0.1).map(|x| (x, x * x)))?;
    plot.update()?;
    Ok(true)
}

fn cmd_random_walk(plot: &Plot, steps: u32, seed: u64) -> PlotResult<bool> {
    plot.set_font_with_size("Arial", 10);

    let walk = plot.create_series("Random Walk");
    walk.set_style(PlotStyle::Lines).set_color(Color::STEEL_BLUE);
    let smoothed = plot.create_series_sharing("Random Walk (Smoothed)", &walk);
    smoothed
        .set_style(PlotStyle::Lines)
        .set_line_width(5.0)
        .set_color(Color::RED.fade_f64(0.5))
        .set_smooth(Smooth::Bezier);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut y = 0i64;
    let points = (0..steps).map(|x| {
        let point = (x, y);
        y += if rng.random_bool(0.5) { 1 } else { -1 };
        point
    });
    let sent = walk.append_all(points)?;
    info!(points = sent, "random walk sent");

    plot.update()?;
    Ok(true)
}

fn cmd_dual_axis(plot: &Plot) -> PlotResult<bool> {
    plot.set_range(Axis::Y2, Range::new(-1.5, 1.5));

    let square = plot.create_series("x^2");
    square.set_style(PlotStyle::Lines);
    let sine = plot.create_series("sin(2x)");
    sine.set_style(PlotStyle::Lines)
        .set_smooth(Smooth::CSplines)
        .set_axes(AxesPair::X1Y2);

    for x in steps(0.0, 5.0, 0.1) {
        square.append((x, x * x))?;
        sine.append((x, (2.0 * x).sin()))?;
    }

    plot.update()?;
    Ok(true)
}

fn cmd_stream(
    plot: &Plot,
    input: Option<&Path>,
    update_every: usize,
    style: PlotStyle,
) -> PlotResult<bool> {
    let name = input.map_or_else(|| "stdin".to_string(), |path| path.display().to_string());
    let series = plot.create_series(name);
    series.set_style(style);

    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut rows = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let values: Result<Vec<f64>, _> = line.split_whitespace().map(str::parse::<f64>).collect();
        let Ok(mut values) = values else {
            warn!(line = index + 1, "skipping non-numeric row");
            continue;
        };
        // A lone value is plotted against its row number.
        if values.len() == 1 {
            values.insert(0, rows as f64);
        }
        series.append_row(values)?;
        rows += 1;
        if rows % update_every == 0 {
            plot.update()?;
        }
    }
    plot.update()?;
    info!(rows, "input exhausted");

    // Reading stdin consumed it; nothing is left to wait on.
    Ok(input.is_some())
}

/// Writes command text to stdout.
struct EchoSink(io::Stdout);

impl CommandSink for EchoSink {
    fn send(&mut self, bytes: &[u8]) -> ProcessResult<()> {
        self.0.write_all(bytes).map_err(ProcessError::Write)
    }
}

/// `start, start + step, ...` below `end`.
fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    (0..)
        .map(move |i| start + f64::from(i) * step)
        .take_while(move |&x| x < end)
}

fn wait_for_enter() -> PlotResult<()> {
    println!("Press ENTER to exit...");
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(())
}
