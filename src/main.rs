use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

use helixmaze::config::{Bias, Params, Seed};
use helixmaze::grid::Pos;
use helixmaze::maze::{Maze, Metrics};
use helixmaze::render::{self, RenderOptions};
use helixmaze::{Timing, logging, survey};

/// Generate a helical cylinder maze and a PNG preview of it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Columns around the circumference
    #[arg(long, default_value_t = 24)]
    width: i32,

    /// Rows along the axis, including the two margin rows
    #[arg(long, default_value_t = 16)]
    height: i32,

    /// Row shift when crossing the seam
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    helix: i32,

    /// Numeric or text seed
    #[arg(long, default_value = "42")]
    seed: String,

    /// Corridor length dial; only the magnitude (0-10) matters
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    complexity: i32,

    /// Direction weights as LEFT,RIGHT,UP,DOWN
    #[arg(long, value_parser = parse_bias)]
    bias: Option<Bias>,

    /// Exit cell as X,Y
    #[arg(long, value_parser = parse_pair)]
    start: Option<(i64, i64)>,

    /// Preview pixels per cell
    #[arg(long, default_value_t = 12)]
    scale: usize,

    /// Tint dead ends in the preview
    #[arg(long)]
    dead_ends: bool,

    /// Output directory for the preview image
    #[arg(long, default_value = "artifacts")]
    out: PathBuf,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Survey this many consecutive seeds instead of generating one maze
    #[arg(long)]
    trials: Option<u64>,

    /// Log level or filter directive (overridden by HELIXMAZE_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_bias(s: &str) -> Result<Bias, String> {
    let v: Vec<u32> = s
        .split(',')
        .map(|p| p.trim().parse::<u32>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    match v[..] {
        [left, right, up, down] => Ok(Bias { left, right, up, down }),
        _ => Err(format!("expected four weights, got {}", v.len())),
    }
}

fn parse_pair(s: &str) -> Result<(i64, i64), String> {
    let (x, y) = s.split_once(',').ok_or("expected X,Y")?;
    let x = x.trim().parse::<i64>().map_err(|e| format!("{x:?}: {e}"))?;
    let y = y.trim().parse::<i64>().map_err(|e| format!("{y:?}: {e}"))?;
    Ok((x, y))
}

#[derive(Serialize)]
struct Summary<'a> {
    width: usize,
    height: usize,
    helix: usize,
    entry: Pos,
    exit: Pos,
    metrics: &'a Metrics,
    solution: &'a [Pos],
    timings: &'a [Timing],
}

fn summarize<'a>(maze: &'a Maze, timings: &'a [Timing]) -> Summary<'a> {
    let g = maze.grid();
    Summary {
        width: g.width(),
        height: g.height(),
        helix: g.helix(),
        entry: maze.entry_cell(),
        exit: maze.exit_cell(),
        metrics: maze.metrics(),
        solution: maze.solution_path(),
        timings,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(&args.log_level) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let params = Params {
        width: args.width,
        height: args.height,
        helix: args.helix,
        seed: Seed::Text(args.seed.clone()),
        complexity: args.complexity,
        bias: args.bias.unwrap_or_default(),
        start: args.start,
        ..Params::default()
    };

    if let Some(n) = args.trials {
        let base = params.seed.to_u64();
        return match survey::survey(&params, base..base.saturating_add(n)) {
            Ok(report) => {
                if args.json {
                    match serde_json::to_string_pretty(&report) {
                        Ok(s) => println!("{s}"),
                        Err(e) => {
                            error!(error = %e, "failed to serialize report");
                            return ExitCode::FAILURE;
                        }
                    }
                } else {
                    println!(
                        "{} runs, {} ok, {} failed, mean solution {:.1}, mean dead ends {:.1}, longest {}",
                        report.runs,
                        report.successes,
                        report.failures,
                        report.mean_solution_len,
                        report.mean_dead_ends,
                        report.longest_solution
                    );
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "invalid parameters");
                ExitCode::FAILURE
            }
        };
    }

    info!(
        width = args.width,
        height = args.height,
        helix = args.helix,
        seed = %args.seed,
        complexity = args.complexity,
        "generating maze"
    );

    let (maze, timings) = match helixmaze::generate(&params) {
        Ok(r) => r,
        Err(e) => {
            error!(error = %e, "no maze");
            return ExitCode::FAILURE;
        }
    };

    for t in &timings {
        info!("{:20} {:8.3} ms", t.name, t.ms);
    }

    let opts = RenderOptions {
        scale: args.scale,
        show_dead_ends: args.dead_ends,
        ..RenderOptions::default()
    };
    let raster = render::render_maze(&maze, &opts);
    if let Err(e) = std::fs::create_dir_all(&args.out) {
        error!(error = %e, dir = %args.out.display(), "failed to create output directory");
        return ExitCode::FAILURE;
    }
    let path = args.out.join("maze.png");
    if let Err(e) = image::save_buffer(
        &path,
        &raster.rgba,
        raster.w as u32,
        raster.h as u32,
        image::ColorType::Rgba8,
    ) {
        error!(error = %e, path = %path.display(), "failed to save preview");
        return ExitCode::FAILURE;
    }
    info!(path = %path.display(), "saved preview");

    let summary = summarize(&maze, &timings);
    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                error!(error = %e, "failed to serialize summary");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let m = maze.metrics();
        println!(
            "entry ({}, {})  exit ({}, {})  solution {} cells  dead ends {}  {}",
            summary.entry.x,
            summary.entry.y,
            summary.exit.x,
            summary.exit.y,
            m.solution_len,
            m.dead_ends,
            m.difficulty.name()
        );
    }

    ExitCode::SUCCESS
}
