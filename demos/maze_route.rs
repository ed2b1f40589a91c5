//! Find and print the shortest route through a maze file.
//!
//! Run: cargo run --bin maze-route -- demos/mazes/spiral.txt --from 0,0 --to 2,2

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use wallpath_core::Point;
use wallpath_demos::{parse_maze, parse_point, render_route};
use wallpath_paths::Pathfinder;

/// Command line arguments for maze-route.
#[derive(Parser, Debug)]
#[command(name = "maze-route")]
#[command(about = "Shortest route through a maze of per-cell wall masks")]
#[command(version)]
struct RouteArgs {
    /// Maze file: one hex wall-mask digit per cell, top row first
    maze: PathBuf,

    /// Start cell as X,Y
    #[arg(long, value_parser = parse_point)]
    from: Point,

    /// Goal cell as X,Y
    #[arg(long, value_parser = parse_point)]
    to: Point,

    /// Print the route as JSON instead of a drawing
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = RouteArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a non-empty route was found.
fn run(args: &RouteArgs) -> Result<bool, Box<dyn Error>> {
    let text = fs::read_to_string(&args.maze)?;
    let grid = parse_maze(&text)?;
    info!(
        "loaded {}x{} maze from {}",
        grid.width(),
        grid.height(),
        args.maze.display()
    );

    let route = Pathfinder::new().route(args.from, args.to, &grid);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print!("{}", render_route(&grid, args.from, &route));
        if route.is_empty() {
            println!("no route from {} to {}", args.from, args.to);
        } else {
            println!("{} steps, cost {}", route.len(), route.cost());
        }
    }
    Ok(!route.is_empty())
}
