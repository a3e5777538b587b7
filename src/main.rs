//! Floorplan Engine CLI
//!
//! Usage:
//!   floorplan-engine [OPTIONS] [WIDTH] [LENGTH]
//!
//! Options:
//!   -r, --requirements <TEXT>  Free-text requirements
//!   -s, --style <STYLE>        Architectural style
//!   --response <FILE>          Generative response to build the plan from
//!   --format <FORMAT>          Output format: svg or json
//!   --summarize <FILE>...      Summarize saved plan JSON files
//!   --compare <A> <B>          Compare two saved plan JSON files
//!   --catalog                  Show the room catalog
//!   -h, --help                 Print help

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::debug;

use floorplan_engine::layout::catalog::archetype;
use floorplan_engine::{
    fallback_plan, generate, render_with_lint, CannedResponse, FallbackReason, FloorPlan,
    GenerateConfig, LayoutConfig, Palette, PlanComparison, PlanRequest, PortfolioSummary,
    Provenance, RenderConfig, RoomType, SvgConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Parser)]
#[command(name = "floorplan-engine")]
#[command(about = "Deterministic floor-plan layout and rendering")]
struct Cli {
    /// Plan width in meters
    width: Option<f64>,

    /// Plan length in meters
    length: Option<f64>,

    /// Free-text requirements, used in descriptions
    #[arg(short, long)]
    requirements: Option<String>,

    /// Architectural style (modern, traditional, contemporary, minimalist, colonial)
    #[arg(short, long)]
    style: Option<String>,

    /// Number of floors
    #[arg(short, long)]
    floors: Option<u32>,

    /// Generative response text to build the plan from instead of the standard program
    #[arg(long, value_name = "FILE")]
    response: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "svg")]
    format: Format,

    /// Palette file for room colours (TOML format)
    #[arg(short, long, value_name = "FILE")]
    palette: Option<PathBuf>,

    /// Layout configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report bounds, overlap and area problems on stderr
    #[arg(long)]
    lint: bool,

    /// Reject dimensions outside 6-30 m and zero floors
    #[arg(long)]
    validate: bool,

    /// Pixels per meter in SVG output
    #[arg(long, default_value_t = 50.0)]
    scale: f64,

    /// Leave furniture out of SVG output
    #[arg(long)]
    no_furniture: bool,

    /// Draw electrical points
    #[arg(long)]
    electrical: bool,

    /// Draw plumbing points
    #[arg(long)]
    plumbing: bool,

    /// Summarize saved plans (JSON files)
    #[arg(long, value_name = "FILE", num_args = 1..)]
    summarize: Vec<PathBuf>,

    /// Compare two saved plans (JSON files)
    #[arg(long, value_names = ["A", "B"], num_args = 2)]
    compare: Vec<PathBuf>,

    /// Show the room catalog
    #[arg(long)]
    catalog: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.catalog {
        print_catalog();
        return;
    }

    if !cli.summarize.is_empty() {
        let plans: Vec<FloorPlan> = cli.summarize.iter().map(|p| load_plan(p)).collect();
        print_json(&PortfolioSummary::from_plans(&plans));
        return;
    }

    if let [first, second] = cli.compare.as_slice() {
        let comparison = PlanComparison::between(&load_plan(first), &load_plan(second));
        print_json(&comparison);
        return;
    }

    let (width, length) = match (cli.width, cli.length) {
        (Some(w), Some(l)) => (w, l),
        _ => {
            print_intro();
            return;
        }
    };

    let layout = match &cli.config {
        Some(path) => match LayoutConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Palette::default(),
    };

    let mut request = PlanRequest::new(width, length);
    if let Some(text) = cli.requirements {
        request = request.with_requirements(text);
    }
    if let Some(style) = cli.style {
        request = request.with_style(style);
    }
    if let Some(floors) = cli.floors {
        request = request.with_floors(floors);
    }

    if cli.validate {
        if let Err(e) = request.validate() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let plan = match &cli.response {
        Some(path) => {
            let source = match CannedResponse::from_file(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error reading response '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            let config = GenerateConfig::new().with_layout(layout.clone());
            let generated = generate(&request, &source, &config);
            if let Provenance::Fallback { reason } = &generated.provenance {
                report_fallback(reason, path);
            }
            for report in generated.placement.iter().filter(|r| r.outcome.is_degraded()) {
                debug!("room {} was {}", report.room_id, report.outcome);
            }
            generated.plan
        }
        None => fallback_plan(&request, &layout),
    };

    match cli.format {
        Format::Json => match plan.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Format::Svg => {
            let svg = SvgConfig::new()
                .with_pixels_per_meter(cli.scale)
                .with_furniture(!cli.no_furniture)
                .with_electrical(cli.electrical)
                .with_plumbing(cli.plumbing);
            let config = RenderConfig::new()
                .with_layout(layout)
                .with_svg(svg)
                .with_palette(palette)
                .with_lint(cli.lint);

            let (svg, warnings) = render_with_lint(&plan, &config);
            for warning in &warnings {
                eprintln!("warning: {}", warning);
            }
            println!("{}", svg);
        }
    }
}

fn load_plan(path: &Path) -> FloorPlan {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    };
    match serde_json::from_str(&content) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Error parsing plan '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn report_fallback(reason: &FallbackReason, path: &Path) {
    eprintln!("warning: using the standard program instead of the response");
    match reason {
        FallbackReason::Source(message) => eprintln!("{}", message),
        FallbackReason::Decode { error, payload } => {
            let filename = path.display().to_string();
            eprint!("{}", error.format(payload, &filename));
        }
    }
}

fn print_catalog() {
    println!("ROOM CATALOG\n============\n");
    for room_type in RoomType::ALL {
        let entry = archetype(room_type);
        println!("{:<10} {}", room_type.as_str(), entry.flooring);
        println!("           {}\n", entry.description);
    }
}

fn print_intro() {
    println!(
        r#"Floorplan Engine - Deterministic floor-plan layout

USAGE:
    floorplan-engine [OPTIONS] <WIDTH> <LENGTH>

OPTIONS:
    -r, --requirements   Free-text requirements
    -s, --style          Architectural style
    -f, --floors         Number of floors
    --response <FILE>    Build from a generative response instead of the standard program
    --format svg|json    Output format (default svg)
    -p, --palette        Custom colour palette (TOML file)
    -c, --config         Layout configuration (TOML file)
    --lint               Report layout problems on stderr
    --summarize <FILE>…  Summarize saved plans
    --compare <A> <B>    Compare two saved plans
    --catalog            Show the room catalog
    -h, --help           Print help

QUICK START:
    floorplan-engine 12 15 > plan.svg

This lays out the standard 13-room program on a 12m x 15m footprint.
Set RUST_LOG=debug to trace the pipeline."#
    );
}
