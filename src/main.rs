use std::fs;
use std::path::{Path, PathBuf};

use bezcog::kurbo::{BezPath, Point};
use bezcog::{compute_moments, marker, BatchReport, MomentConfig, MomentError, SubpathMode};
use clap::{Parser, ValueEnum};
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "bezcog", about = "Area and centre of gravity of closed bezier paths")]
struct Cli {
    /// SVG path data, one argument per path (e.g. "M0 0 L1 0 L1 1 Z")
    paths: Vec<String>,

    /// File with one SVG path per line ('#' starts a comment)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// How paths with several subpaths are measured
    #[arg(long, value_enum, default_value_t = Subpaths::Single)]
    subpaths: Subpaths,

    /// Integrate quadratic segments instead of rejecting them
    #[arg(long)]
    quadratic: bool,

    /// Leave open subpaths open instead of closing them to their start
    #[arg(long)]
    no_implicit_close: bool,

    /// Areas at or below this magnitude have no centroid
    #[arg(long, default_value = "0")]
    tolerance: f64,

    /// Print marker outlines (SVG path data) at every centroid
    #[arg(long)]
    markers: bool,

    /// Marker radius
    #[arg(long, default_value = "10")]
    radius: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Subpaths {
    /// Reject paths with more than one subpath
    Single,
    /// Every subpath adds positive mass
    Independent,
    /// Oppositely wound subpaths are holes
    Winding,
}

impl From<Subpaths> for SubpathMode {
    fn from(s: Subpaths) -> Self {
        match s {
            Subpaths::Single => SubpathMode::Single,
            Subpaths::Independent => SubpathMode::Independent,
            Subpaths::Winding => SubpathMode::Winding,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = MomentConfig {
        subpaths: cli.subpaths.into(),
        quadratic_segments: cli.quadratic,
        close_open_subpaths: !cli.no_implicit_close,
        area_tolerance: cli.tolerance,
    };

    let mut sources = cli.paths.clone();
    if let Some(file) = &cli.file {
        sources.extend(read_path_file(file)?);
    }
    if sources.is_empty() {
        return Err("no paths given (pass SVG path data or --file)".into());
    }

    eprintln!();
    eprintln!("  bezcog \u{00b7} {} paths", sources.len());
    eprintln!();

    let results = sources
        .par_iter()
        .map(|data| parse_path(data).and_then(|path| compute_moments(path.elements(), &config)))
        .collect();
    let report = BatchReport::from_results(results);

    for (i, (result, centroid)) in report
        .paths
        .iter()
        .zip(report.centroids(config.area_tolerance))
        .enumerate()
    {
        let label = format!("Path {}", i + 1);
        match (result, centroid) {
            (Ok(m), Ok(c)) => {
                println!("  {:<11} area {:.6}  centroid ({:.6}, {:.6})", label, m.area, c.x, c.y);
                print_markers(&cli, c);
            }
            (Ok(m), Err(e)) => println!("  {:<11} area {:.6}  {}", label, m.area, e),
            (Err(e), _) => println!("  {:<11} {}", label, e),
        }
    }

    match report.combined_centroid(config.area_tolerance) {
        Some(Ok(c)) => {
            let area = report.combined.map(|m| m.area).unwrap_or_default();
            println!("  {:<11} area {:.6}  centroid ({:.6}, {:.6})", "Combined", area, c.x, c.y);
            print_markers(&cli, c);
        }
        Some(Err(e)) => println!("  {:<11} {}", "Combined", e),
        None => {}
    }

    eprintln!();
    eprintln!("  \u{2713} {} of {} paths measured", report.measured(), report.paths.len());
    eprintln!();

    Ok(())
}

fn parse_path(data: &str) -> Result<BezPath, MomentError> {
    BezPath::from_svg(data).map_err(|e| MomentError::InvalidPath(e.to_string()))
}

/// One path per non-blank line; `#` starts a comment line.
fn read_path_file(file: &Path) -> std::io::Result<Vec<String>> {
    let text = fs::read_to_string(file)?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

fn print_markers(cli: &Cli, center: Point) {
    if !cli.markers {
        return;
    }
    println!("  {:<11} {}", "Crosshair", marker::crosshair(center, cli.radius).to_svg());
    println!("  {:<11} {}", "Diamond", marker::diamond(center, cli.radius).to_svg());
}
