#![deny(unsafe_code)]
//! CLI binary for the generative poster.
//!
//! Subcommands:
//! - `render`: generate a poster and write it as a PNG
//! - `scene`: generate a poster and dump the scene as JSON
//! - `list`: print available palette modes and shape kinds

mod config;
mod error;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use config::{GenArgs, Settings};
use error::CliError;
use poster_core::{compose_poster, PaletteMode, Scene, ShapeKind};
use poster_render::{compose_canvas, compose_canvas_with_title, RasterOptions, TitleFont};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "poster", version, about = "Generative poster CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a poster and write a PNG.
    Render {
        #[command(flatten)]
        gen: GenArgs,

        /// Image width in pixels.
        #[arg(short = 'W', long, default_value_t = poster_render::DEFAULT_WIDTH)]
        width: usize,

        /// Image height in pixels.
        #[arg(short = 'H', long, default_value_t = poster_render::DEFAULT_HEIGHT)]
        height: usize,

        /// TrueType/OpenType font used to draw the title in the top-left corner.
        #[arg(long, value_name = "FONT")]
        title_font: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "poster.png")]
        output: PathBuf,
    },
    /// Generate a poster and dump its scene as JSON.
    Scene {
        #[command(flatten)]
        gen: GenArgs,

        /// Output file path (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List palette modes and shape kinds.
    List,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn generate(gen: &GenArgs) -> Result<(Settings, Scene), CliError> {
    let settings = gen.resolve()?;
    let mut scene = compose_poster(&settings.params)?;
    scene.background = settings.background;
    Ok((settings, scene))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes = PaletteMode::list_names();
            let shapes = ShapeKind::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "shapes": shapes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
                println!("Shapes:");
                println!("  {}", shapes.join(", "));
            }
        }
        Command::Render {
            gen,
            width,
            height,
            title_font,
            output,
        } => {
            let (settings, scene) = generate(&gen)?;
            let options = RasterOptions { width, height };
            options.validate()?;
            let canvas = match &title_font {
                Some(path) => {
                    let mut font = TitleFont::load(path)?;
                    compose_canvas_with_title(&scene, &options, &mut font)?
                }
                None => compose_canvas(&scene, &options)?,
            };
            poster_render::snapshot::write_png(&canvas, &output)?;

            let p = settings.params;
            if cli.json {
                let info = serde_json::json!({
                    "title": scene.title,
                    "params": p,
                    "background": settings.background.to_hex(),
                    "width": width,
                    "height": height,
                    "title_drawn": title_font.is_some(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", scene.title);
                eprintln!(
                    "rendered {} layers ({width}x{height}, seed {}, wobble {}) -> {}",
                    p.layer_count,
                    p.seed,
                    p.wobble,
                    output.display()
                );
            }
        }
        Command::Scene { gen, output } => {
            let (_, scene) = generate(&gen)?;
            let body = serde_json::to_string_pretty(&scene)?;
            match output {
                Some(path) => {
                    fs::write(&path, body)
                        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
                    if cli.json {
                        let info = serde_json::json!({
                            "title": scene.title,
                            "layers": scene.len(),
                            "output": path.display().to_string(),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        eprintln!("wrote {} layers -> {}", scene.len(), path.display());
                    }
                }
                None => println!("{body}"),
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
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
