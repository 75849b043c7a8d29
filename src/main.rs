use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

use trajectory_lab::config;
use trajectory_lab::core::input::{Field, RawInput, RawValue};
use trajectory_lab::core::trajectory::{TrajectoryInput, compute};
use trajectory_lab::logging::init_tracing;
use trajectory_lab::render::{ChartRenderer, CsvReport, JsonReport, Renderer, TextReport};
use trajectory_lab::TrajectoryError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Projectile trajectory calculator. Fields that are missing or not numbers
/// fall back to x0=0, y0=0, angle=45, velocity=20, acceleration=9.8.
#[derive(Parser, Debug)]
#[command(name = "trajectory_lab", version)]
struct Cli {
    /// Initial x position (m)
    #[arg(long, allow_hyphen_values = true)]
    x0: Option<String>,

    /// Initial y position (m)
    #[arg(long, allow_hyphen_values = true)]
    y0: Option<String>,

    /// Launch angle (degrees)
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    angle: Option<String>,

    /// Initial speed (m/s)
    #[arg(short = 'v', long, allow_hyphen_values = true)]
    velocity: Option<String>,

    /// Downward acceleration (m/s^2); 0 gives uniform motion
    #[arg(short = 'g', long, allow_hyphen_values = true)]
    acceleration: Option<String>,

    /// TOML file with any of x0, y0, angle, velocity, acceleration
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Ask for each field on stdin
    #[arg(short, long)]
    prompt: bool,

    /// Report printed to stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write a chart to this .svg or .png file
    #[arg(long)]
    plot: Option<PathBuf>,

    /// Write a timestamped SVG chart into TRAJECTORY_OUTPUT_DIR
    #[arg(long, conflicts_with = "plot")]
    save_plot: bool,
}

impl Cli {
    fn flag_input(&self) -> RawInput {
        let value = |v: &Option<String>| v.clone().map(RawValue::from);
        RawInput {
            x0: value(&self.x0),
            y0: value(&self.y0),
            angle: value(&self.angle),
            velocity: value(&self.velocity),
            acceleration: value(&self.acceleration),
        }
    }
}

fn read_field(
    field: Field,
    input: &mut impl BufRead,
) -> Result<Option<RawValue>, TrajectoryError> {
    print!("{} [{}]: ", field.label(), field.default_value());
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 || line.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(RawValue::from(line.trim())))
}

fn get_inputs_from_user() -> Result<RawInput, TrajectoryError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    let mut raw = RawInput::default();
    for field in Field::ALL {
        raw.set(field, read_field(field, &mut handle)?);
    }
    Ok(raw)
}

fn gather_input(cli: &Cli) -> Result<TrajectoryInput, TrajectoryError> {
    let mut raw = match &cli.scenario {
        Some(path) => {
            let raw = config::load_scenario(path)?;
            info!(path = %path.display(), "loaded scenario");
            raw
        }
        None => RawInput::default(),
    };
    if cli.prompt {
        raw = raw.overlay(get_inputs_from_user()?);
    }
    raw = raw.overlay(cli.flag_input());

    for field in raw.defaulted_fields() {
        warn!(
            field = field.key(),
            default = field.default_value(),
            "could not parse value, using default"
        );
    }
    Ok(raw.resolve())
}

fn default_plot_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    config::output_dir().join(format!("trajectory-{stamp}.svg"))
}

fn run(cli: Cli) -> Result<(), TrajectoryError> {
    let input = gather_input(&cli)?;
    let trajectory = compute(input);
    debug!(
        is_uniform = trajectory.result.is_uniform,
        motion = %trajectory.result.motion_kind(),
        "classified motion"
    );

    let stdout = io::stdout();
    let out = stdout.lock();
    let mut report: Box<dyn Renderer> = match cli.format {
        OutputFormat::Table => Box::new(TextReport::new(out)),
        OutputFormat::Json => Box::new(JsonReport::new(out)),
        OutputFormat::Csv => Box::new(CsvReport::new(out)),
    };
    report.render(&trajectory.result, &trajectory.points)?;

    let plot_path = if cli.save_plot {
        Some(default_plot_path())
    } else {
        cli.plot.clone()
    };
    if let Some(path) = plot_path {
        let mut chart = ChartRenderer::new(path, config::plot_size(), input)?;
        chart.render(&trajectory.result, &trajectory.points)?;
        info!(path = %chart.path().display(), "wrote chart");
    }

    Ok(())
}

fn main() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(%err, "trajectory calculation failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
