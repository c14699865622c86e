//! Draws the sample polygon set and two arc chains onto one canvas.
//!
//! Usage:
//! ```text
//! cargo run                                # writes and shows both images
//! cargo run -- --no-show                   # write only
//! cargo run -- --out-dir target/drawings   # choose the output directory
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use arcpath::canvas::SystemViewer;
use arcpath::geometry::{Polygon, TrajectorySegment};
use arcpath::{RenderConfig, Result, Session};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn,arcpath=info";

struct Args {
    show: bool,
    out_dir: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut args = Args {
        show: true,
        out_dir: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--no-show" => args.show = false,
            "--out-dir" => {
                let dir = iter.next().ok_or("--out-dir needs a directory")?;
                args.out_dir = Some(PathBuf::from(dir));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn run(args: &Args) -> Result<()> {
    let mut config = RenderConfig::default();
    if let Some(dir) = &args.out_dir {
        config = config.with_output_dir(dir);
    }

    let mut session = Session::new(config)?;
    if args.show {
        session = session.with_viewer(Box::new(SystemViewer));
    }

    let polygons = [Polygon::from(
        &[(0.3, 1.1), (0.8, 0.2), (1.3, 1.1), (0.15, 0.5), (1.45, 0.5), (0.3, 1.1)][..],
    )];
    session.draw_polygons(&polygons)?;
    session.export_polygons()?;

    let mut spiral = Vec::new();
    let mut radius = 0.0;
    for _ in 1..20 {
        radius += 0.01;
        spiral.push(TrajectorySegment::new(0.5, radius));
    }
    spiral.push(TrajectorySegment::new(0.6, -0.2));
    session.draw_arcs(&spiral)?;
    session.export_arcs()?;

    session.reset_chain();
    session.draw_arcs(&[
        TrajectorySegment::new(0.5, -0.2),
        TrajectorySegment::new(0.5, -0.4),
    ])?;
    session.export_arcs()
}

/// WARN for everything and INFO for arcpath, unless RUST_LOG is set
/// (e.g. RUST_LOG=arcpath=trace).
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "drawing failed");
            ExitCode::FAILURE
        }
    }
}
