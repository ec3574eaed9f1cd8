use std::path::{ Path, PathBuf };

use anyhow::{ Context, Result };
use clap::{ Parser, Subcommand };

use ray_tracer_core::canvas::{ Canvas, ImageFormat };
use ray_tracer_core::consts::{
    OUTPUT_DIR,
    PROJECTILE_CANVAS_WIDTH,
    PROJECTILE_CANVAS_HEIGHT,
    CLOCK_CANVAS_SIZE,
};
use ray_tracer_core::demo;
use ray_tracer_core::description::TransformDescription;

/// Demo programs for the ray tracer's tuple, matrix and transform core.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Directory rendered images are written to.
    #[clap(long, default_value = OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Image format for rendered canvases (ppm or png).
    #[clap(long, default_value = "ppm")]
    format: ImageFormat,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plots the flight of a projectile.
    Projectile {
        #[clap(long, default_value_t = PROJECTILE_CANVAS_WIDTH)]
        width: usize,

        #[clap(long, default_value_t = PROJECTILE_CANVAS_HEIGHT)]
        height: usize,
    },

    /// Draws the hour marks of a clock face.
    Clock {
        #[clap(long, default_value_t = CLOCK_CANVAS_SIZE)]
        size: usize,
    },

    /// Prints some observations about inverses and transposes.
    Reflect,

    /// Builds the transform in a JSON description and applies it to the
    /// description's points.
    Transform {
        description: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Projectile { width, height } => {
            let canvas = demo::projectile_canvas(width, height)
                .context("plotting the projectile")?;
            save(&canvas, &cli.output_dir, "projectile", cli.format)?;
        },

        Command::Clock { size } => {
            let canvas = demo::clock_face(size);
            save(&canvas, &cli.output_dir, "clock", cli.format)?;
        },

        Command::Reflect => {
            let reflections = demo::matrix_reflections()
                .context("computing matrix reflections")?;
            println!("{}", reflections);
        },

        Command::Transform { description } => {
            let desc = TransformDescription::load(&description)
                .with_context(|| format!("reading {}", description.display()))?;

            println!("{}\n", desc.transform().matrix());
            for (before, after) in desc.apply() {
                println!("({})  ->  ({})", before, after);
            }
        },
    }

    Ok(())
}

fn save(canvas: &Canvas, dir: &Path, stem: &str, format: ImageFormat) -> Result<()> {
    let name = format!("{}.{}", stem, format.extension());
    let path = canvas.save(dir, &name)
        .with_context(|| format!("saving {}", name))?;

    println!("Saved render to {}.", path.display());
    Ok(())
}
