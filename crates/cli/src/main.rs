#![deny(unsafe_code)]
//! CLI binary for the circle-art animation engine.
//!
//! Subcommands:
//! - `render`: run the composition N frames, write a PNG
//! - `inspect`: run N frames, print the animation state and figure transforms,
//!   optionally for one figure kind
//! - `list`: print the figure kinds in draw order

mod error;

use circle_art_core::{Canvas, Color, NoiseConfig};
use circle_art_scene::{FigureKind, RasterSurface, Scene, SceneReport, LAYOUT};
use clap::{Args, Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "circle-art", about = "Noise-driven circle composition renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by every subcommand that runs the animation.
#[derive(Args)]
struct RunArgs {
    /// Number of frames to advance before output (`render` needs at least 1).
    #[arg(short, long, default_value_t = 120)]
    frames: usize,

    /// Pointer position as X,Y in canvas units, applied before the first frame.
    #[arg(long, value_parser = parse_pointer, allow_hyphen_values = true)]
    pointer: Option<(f64, f64)>,

    /// Seed for the figure noise seeds.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Noise configuration as a JSON object (missing keys use defaults).
    #[arg(long, default_value = "{}")]
    config: String,

    /// Background color as a hex string.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the composition and write the last frame as a PNG.
    Render {
        #[command(flatten)]
        run: RunArgs,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Run the composition and print state and per-figure transforms.
    Inspect {
        #[command(flatten)]
        run: RunArgs,

        /// Only report figures of this kind (see `list`).
        #[arg(long)]
        figure: Option<String>,
    },
    /// List figure kinds in draw order.
    List,
}

fn parse_pointer(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok((coord(x)?, coord(y)?))
}

fn build_scene(run: &RunArgs) -> Result<Scene, CliError> {
    let params: serde_json::Value = serde_json::from_str(&run.config)
        .map_err(|e| CliError::Input(format!("invalid --config JSON: {e}")))?;
    let config = NoiseConfig::from_json(&params)?;

    let standard = Canvas::standard();
    let background = match &run.background {
        Some(hex) => Color::from_hex(hex).map_err(|e| CliError::Input(e.to_string()))?,
        None => standard.background(),
    };
    let canvas = Canvas::new(standard.width(), standard.height(), background)?;

    let mut scene = Scene::with_canvas(canvas, config, run.seed)?;
    if let Some((x, y)) = run.pointer {
        scene.pointer_moved(x, y);
    }
    Ok(scene)
}

/// Advances a fresh scene `run.frames` times and reports it, keeping only
/// figures of kind `figure` when one is named.
fn inspect_report(run: &RunArgs, figure: Option<&str>) -> Result<SceneReport, CliError> {
    let only = figure.map(FigureKind::from_name).transpose()?;
    let mut scene = build_scene(run)?;
    for _ in 0..run.frames {
        scene.advance();
    }
    let mut report = scene.report();
    if let Some(kind) = only {
        report.figures.retain(|f| f.kind == kind);
    }
    Ok(report)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            if cli.json {
                let figures: Vec<_> = LAYOUT
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "kind": p.kind,
                            "x": p.position.x,
                            "y": p.position.y,
                            "scale": p.scale,
                        })
                    })
                    .collect();
                let info = serde_json::json!({ "figures": figures });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Figures:");
                for p in LAYOUT {
                    println!(
                        "  {:<18} at ({:>5.1}, {:>5.1}) scale {:.2}",
                        p.kind, p.position.x, p.position.y, p.scale
                    );
                }
                println!("Kinds: {}", FigureKind::list_names().join(", "));
            }
        }
        Command::Render { run, output } => {
            if run.frames == 0 {
                return Err(CliError::Input("render needs --frames of at least 1".into()));
            }
            let mut scene = build_scene(&run)?;
            let canvas = *scene.canvas();
            let mut surface =
                RasterSurface::new(canvas.width() as u32, canvas.height() as u32)?;
            for _ in 0..run.frames {
                scene.render_frame(&mut surface);
            }
            circle_art_scene::snapshot::write_png(&surface, &output)?;
            log::info!("wrote {}", output.display());

            if cli.json {
                let info = serde_json::json!({
                    "frames": run.frames,
                    "seed": run.seed,
                    "clock": scene.state().clock(),
                    "motion_intensity": scene.state().motion_intensity(),
                    "time_scale": scene.state().time_scale(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} frames (seed {}, clock {:.3}) -> {}",
                    run.frames,
                    run.seed,
                    scene.state().clock(),
                    output.display()
                );
            }
        }
        Command::Inspect { run, figure } => {
            let report = inspect_report(&run, figure.as_deref())?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let state = report.state;
                println!(
                    "clock {:.4}  intensity {:.3}  time-scale {:.3}",
                    state.clock(),
                    state.motion_intensity(),
                    state.time_scale()
                );
                for figure in &report.figures {
                    let t = figure.transform;
                    println!(
                        "  {:<18} pos ({:>7.2}, {:>7.2})  rot {:>+6.3}  scale {:.3}",
                        figure.kind, t.translation.x, t.translation.y, t.rotation, t.scale
                    );
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
