//! quadsub — subdivide a closed quad mesh and recompute its normals.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quad_io::{load_quads, save_quads};
use quad_normals::vertex_normals;
use quad_subdivide::{subdivide_faces, SubdivideParams};

/// Catmull-Clark subdivision for closed quad meshes.
#[derive(Parser)]
#[command(name = "quadsub")]
#[command(version, about = "Catmull-Clark subdivision for closed quad meshes")]
struct Cli {
    /// Input quad mesh file (twelve floats per face line).
    input: PathBuf,

    /// Number of subdivision levels to apply.
    #[arg(short, long, default_value_t = 1)]
    subdivisions: u32,

    /// Write the subdivided mesh and recomputed normals here.
    /// Refuses to overwrite an existing file.
    #[arg(short, long)]
    outfile: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let faces = load_quads(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!("Loaded {} faces from {}", faces.len(), cli.input.display());

    let params = SubdivideParams::new().with_levels(cli.subdivisions);
    let faces = subdivide_faces(&faces, &params)
        .with_context(|| format!("subdivision at {} levels failed", cli.subdivisions))?;
    info!("Subdivided to {} faces", faces.len());

    if let Some(outfile) = &cli.outfile {
        let normals = vertex_normals(&faces);
        save_quads(&faces, &normals, outfile)
            .with_context(|| format!("failed to write {}", outfile.display()))?;
        info!("Wrote {} faces to {}", faces.len(), outfile.display());
    }

    Ok(())
}
