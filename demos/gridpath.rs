//! Run a grid search from the command line.
//!
//! ```text
//! gridpath --map demos/maps/detour.txt --algorithm dijkstra
//! gridpath --random --seed 7 --all
//! RUST_LOG=debug gridpath --map demos/maps/detour.txt --json
//! ```

use std::path::PathBuf;

use clap::Parser;
use gridpath_core::{Grid, Point, Scatter};
use gridpath_demos::{comparison_table, render_overlay, summary};
use gridpath_search::{Algorithm, Engine, SearchConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text map to load (`.` `~` `^` `#`, with `S` and `E` endpoints)
    #[arg(short, long, conflicts_with = "random")]
    map: Option<PathBuf>,

    /// Generate a random map instead of loading one
    #[arg(short, long)]
    random: bool,

    /// Rows of the random map (clamped to 5..=20; columns are rows * 1.8)
    #[arg(long, default_value_t = 12)]
    size: i32,

    /// Seed for the random map
    #[arg(long)]
    seed: Option<u64>,

    /// Wall density of the random map, in percent
    #[arg(long, default_value_t = Scatter::default().walls)]
    walls: u32,

    /// Search algorithm: bfs, dfs, dijkstra or astar
    #[arg(short, long, default_value = "astar")]
    algorithm: Algorithm,

    /// Scale of the A* heuristic (1 keeps it optimal)
    #[arg(long, default_value_t = 1.0)]
    heuristic_weight: f64,

    /// Run every algorithm and print a comparison
    #[arg(long)]
    all: bool,

    /// Print the run result as JSON instead of a map
    #[arg(long)]
    json: bool,
}

fn load_grid(cli: &Cli) -> Result<Grid, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.map {
        let text = std::fs::read_to_string(path)?;
        return Ok(Grid::parse(&text)?);
    }
    let mut grid = Grid::with_size(cli.size);
    grid.set_start(Point::ZERO)?;
    grid.set_end(Point::at(grid.height() - 1, grid.width() - 1))?;
    let scatter = Scatter {
        walls: cli.walls,
        ..Scatter::default()
    };
    match cli.seed {
        Some(seed) => scatter.apply(&mut grid, &mut StdRng::seed_from_u64(seed)),
        None => scatter.apply(&mut grid, &mut rand::rng()),
    };
    Ok(grid)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.map.is_none() && !cli.random {
        return Err("pass --map <file> or --random".into());
    }

    let grid = load_grid(&cli)?;
    let config = SearchConfig::default().with_heuristic_weight(cli.heuristic_weight);
    let mut engine = Engine::new(grid.bounds());

    if cli.all {
        let mut results = Vec::with_capacity(Algorithm::ALL.len());
        for algorithm in Algorithm::ALL {
            results.push(engine.run_placed(&grid, algorithm, &config)?);
        }
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            print!("{grid}");
            println!();
            print!("{}", comparison_table(&results));
        }
        return Ok(());
    }

    let result = engine.run_placed(&grid, cli.algorithm, &config)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_overlay(&grid, &engine));
        println!("{}", summary(&result));
    }
    Ok(())
}
