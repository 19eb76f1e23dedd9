//! Rectangle Calculator CLI
//!
//! Usage:
//!   rectangle-calculator [OPTIONS] [PERIMETER] [AREA]
//!
//! Options:
//!   -s, --stylesheet <FILE>  Stylesheet file for color palette (TOML format)
//!   -o, --output <FILE>      Write the SVG to a file instead of stdout
//!   --summary                Print only the dimensions
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use rectangle_calculator::{
    calculate, LayoutConfig, RenderConfig, SolverConfig, Stylesheet, SvgConfig,
};

#[derive(Parser)]
#[command(name = "rectangle-calculator")]
#[command(about = "Find a rectangle's sides from its perimeter and area, and draw it")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Perimeter of the rectangle
    perimeter: Option<String>,

    /// Area of the rectangle
    area: Option<String>,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print only the dimensions, no drawing
    #[arg(long)]
    summary: bool,

    /// Canvas width
    #[arg(long, default_value_t = 400.0)]
    width: f64,

    /// Canvas height
    #[arg(long, default_value_t = 300.0)]
    height: f64,

    /// Margin kept free around the shape
    #[arg(long, default_value_t = 40.0)]
    padding: f64,

    /// Relative tolerance for a slightly negative discriminant
    #[arg(long, default_value_t = 0.0)]
    epsilon: f64,

    /// Omit the XML declaration
    #[arg(long)]
    no_xml_declaration: bool,

    /// Debug mode: log the computed geometry
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let (perimeter, area) = match (&cli.perimeter, &cli.area) {
        (Some(p), Some(a)) => (p.as_str(), a.as_str()),
        (None, None) => {
            print_intro();
            return;
        }
        _ => {
            eprintln!("Error: both PERIMETER and AREA are required");
            std::process::exit(2);
        }
    };

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let config = RenderConfig::new()
        .with_solver(SolverConfig::new().with_epsilon(cli.epsilon))
        .with_layout(
            LayoutConfig::new()
                .with_canvas_size(cli.width, cli.height)
                .with_padding(cli.padding),
        )
        .with_svg(SvgConfig::new().with_standalone(!cli.no_xml_declaration))
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug);

    let calc = match calculate(perimeter, area, &config) {
        Ok(calc) => calc,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.summary {
        println!("{}", calc.summary());
        return;
    }

    eprintln!("{}", calc.summary());
    let svg = calc.to_svg(&config);
    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            info!("wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
}

fn print_intro() {
    println!(
        r#"Rectangle Calculator - find a rectangle from its perimeter and area

USAGE:
    rectangle-calculator [OPTIONS] <PERIMETER> <AREA>

OPTIONS:
    -s, --stylesheet   Custom color palette (TOML file)
    -o, --output       Write the SVG to a file
    --summary          Print only the dimensions
    --width/--height   Canvas size (default 400x300)
    --padding          Free margin around the shape (default 40)
    --epsilon          Tolerance for near-square inputs
    -d, --debug        Log the computed geometry
    -h, --help         Print help

EXAMPLE:
    rectangle-calculator 20 16 > rect.svg

The dimensions are printed to stderr and the drawing to stdout.
Perimeter 20 and area 16 give an 8.00 x 2.00 rectangle."#
    );
}
