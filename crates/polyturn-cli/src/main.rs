//! polyturn CLI — prints the vertices, edges, and turning angles of a
//! regular polygon.
//!
//! With no arguments this analyzes the 20 x 10 four-vertex shape. The
//! descriptor can be adjusted with flags or loaded from a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use polyturn_kernel::{analyze, ReportSink, ShapeDescriptor};
use polyturn_math::{Point3, Vec3};

#[derive(Parser)]
#[command(name = "polyturn")]
#[command(about = "Turning angles of regular polygons", long_about = None)]
struct Cli {
    /// Shape extent along X
    #[arg(long, default_value_t = 20.0)]
    width: f64,

    /// Shape extent along Y
    #[arg(long, default_value_t = 10.0)]
    height: f64,

    /// Shape extent along Z
    #[arg(long, default_value_t = 0.0)]
    depth: f64,

    /// Number of polygon vertices
    #[arg(long, default_value_t = 4)]
    vertices: usize,

    /// Load the shape descriptor from a JSON file instead of the flags
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Sink that prints every sequence through the logger, one indexed line
/// per element.
struct ConsoleSink;

impl ConsoleSink {
    fn log_triples(&self, label: &str, triples: impl Iterator<Item = (f64, f64, f64)>) {
        log::info!("{label}:");
        for (i, (x, y, z)) in triples.enumerate() {
            log::info!("[{i}] - x: {x} y: {y} z: {z}");
        }
    }
}

impl ReportSink for ConsoleSink {
    fn points(&mut self, label: &str, points: &[Point3]) {
        self.log_triples(label, points.iter().map(|p| (p.x, p.y, p.z)));
    }

    fn vectors(&mut self, label: &str, vectors: &[Vec3]) {
        self.log_triples(label, vectors.iter().map(|v| (v.x, v.y, v.z)));
    }

    fn scalars(&mut self, label: &str, values: &[f64]) {
        log::info!("{label}:");
        for (i, v) in values.iter().enumerate() {
            log::info!("[{i}] - {v}");
        }
    }
}

fn load_descriptor(path: &Path) -> Result<ShapeDescriptor> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading descriptor file {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("parsing descriptor file {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let descriptor = match &cli.config {
        Some(path) => load_descriptor(path)?,
        None => ShapeDescriptor::new(cli.width, cli.height, cli.depth, cli.vertices),
    };

    analyze(&descriptor, &mut ConsoleSink)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_match_reference_shape() {
        let cli = Cli::parse_from(["polyturn"]);
        assert_eq!(cli.width, 20.0);
        assert_eq!(cli.height, 10.0);
        assert_eq!(cli.depth, 0.0);
        assert_eq!(cli.vertices, 4);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_descriptor_from_json() {
        let json = r#"{"width": 6.0, "height": 6.0, "depth": 0.0, "vertex_count": 6}"#;
        let dir = std::env::temp_dir().join("polyturn-cli-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("hexagon.json");
        fs::write(&path, json).unwrap();

        let descriptor = load_descriptor(&path).unwrap();
        assert_eq!(descriptor.vertex_count, 6);
        assert_eq!(descriptor.height, 6.0);
    }

    #[test]
    fn test_missing_descriptor_file() {
        let err = load_descriptor(Path::new("/nonexistent/shape.json")).unwrap_err();
        assert!(err.to_string().contains("reading descriptor file"));
    }
}
