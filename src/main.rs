use anyhow::{Context, Result};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use shapeboard::app::{LayersApp, PainterApp};
use shapeboard::config::Config;
use shapeboard::demo::layers_scene;
use shapeboard::draw::Color;
use shapeboard::input::{Script, Step};
use shapeboard::painter::{ColorPicker, Painter};
use shapeboard::runtime::{self, FrameOptions};
use shapeboard::util::{Point, color_to_name};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "shapeboard")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SHAPEBOARD_GIT_HASH"), ")"),
    about = "Interactive 2D canvas painter and layered scene with hit-testing"
)]
struct Cli {
    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint rectangles by replaying a drag script
    Painter(PainterArgs),
    /// Click through the layered shape scene
    Layers(LayersArgs),
}

#[derive(Args, Debug)]
struct PainterArgs {
    /// Input script (TOML list of [[step]] tables)
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Write the final frame to this PNG file
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Write every frame into this directory
    #[arg(long, value_name = "DIR")]
    frames_dir: Option<PathBuf>,

    /// Initial picker color (name or #rrggbb), overrides painter.default_color
    #[arg(long, short = 'c', value_name = "COLOR")]
    color: Option<String>,

    /// Config file to use instead of ~/.config/shapeboard/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct LayersArgs {
    /// Click at client coordinates X,Y (repeatable)
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_point)]
    clicks: Vec<Point>,

    /// Input script replayed before the clicks
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final frame to this PNG file
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/shapeboard/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate '{x}'"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate '{y}'"))?;
    Ok(Point::new(x, y))
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run_painter(args: PainterArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let script = Script::load(&args.script)?;

    let initial = match &args.color {
        Some(value) => value
            .parse::<Color>()
            .with_context(|| format!("Invalid --color value '{value}'"))?,
        None => config.painter.default_color.to_color(),
    };

    let mut canvas = config.build_canvas()?;
    let mut app = PainterApp::new(
        Painter::new(config.paint_style()),
        ColorPicker::new(initial),
    );
    let options = FrameOptions {
        frames_dir: args.frames_dir,
        ..FrameOptions::from_config(&config.render)
    };

    log::info!(
        "Painting on a {}x{} canvas (dpr {:.1})",
        canvas.width(),
        canvas.height(),
        canvas.device_pixel_ratio()
    );
    let stats = runtime::run(&mut app, &mut canvas, script.steps, &options)?;

    if let Some(output) = &args.output {
        canvas.write_png(output)?;
    }

    println!(
        "Painted {} rectangle(s) in {} frame(s)",
        app.painter.shapes.len(),
        stats.frames
    );
    for (index, rect) in app.painter.shapes.iter().enumerate() {
        let (min, max) = (rect.min(), rect.max());
        println!(
            "  #{index}: ({:.0}, {:.0}) - ({:.0}, {:.0}) {}",
            min.x,
            min.y,
            max.x,
            max.y,
            rect.color.to_hex()
        );
    }
    Ok(())
}

fn run_layers(args: LayersArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let mut steps = match &args.script {
        Some(path) => Script::load(path)?.steps,
        None => Vec::new(),
    };
    steps.extend(
        args.clicks
            .iter()
            .map(|point| Step::Click { x: point.x, y: point.y }),
    );

    let (scene, _) = layers_scene(config.canvas.background.to_color());
    let mut canvas = config.build_canvas()?;
    let mut app = LayersApp::new(scene);
    runtime::run(
        &mut app,
        &mut canvas,
        steps,
        &FrameOptions::from_config(&config.render),
    )?;

    if let Some(output) = &args.output {
        canvas.write_png(output)?;
    }

    for click in &app.clicks {
        match (click.target, click.target_state) {
            (Some(id), Some((kind, color))) => println!(
                "click ({:.0}, {:.0}) -> {kind} #{} now {}",
                click.client.x,
                click.client.y,
                id.index(),
                color_to_name(&color)
            ),
            _ => println!(
                "click ({:.0}, {:.0}) -> no shape",
                click.client.x, click.client.y
            ),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    match cli.command {
        Some(Command::Painter(args)) => run_painter(args),
        Some(Command::Layers(args)) => run_layers(args),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_click_points() {
        assert_eq!(parse_point("100,100").unwrap(), Point::new(100.0, 100.0));
        assert_eq!(parse_point(" 2.5 , -4 ").unwrap(), Point::new(2.5, -4.0));
        assert!(parse_point("100").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
