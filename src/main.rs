mod cli;

use atty::Stream;
use cli::*;
use clap::Parser;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde_json::json;
use std::{time::{Instant, Duration}, error::Error};
use mazegen::{
    config::MazeConfig,
    leaderboard::{JsonFileStore, Leaderboard},
    maze::Maze,
    query::Query,
    render::{render_maze, save_image},
    search::find_matching_seeds_parallel,
};
use simple_logger::SimpleLogger;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();
    match args.verbosity {
        0 => SimpleLogger::new().with_level(log::LevelFilter::Warn).init()?,
        1 => SimpleLogger::new().with_level(log::LevelFilter::Info).init()?,
        _ => SimpleLogger::new().with_level(log::LevelFilter::max()).init()?,
    }

    // Run the desired command.
    match args.subcommand {
        Commands::Generate { seed, width, height, config, fragments, seeded_fragments, text, json, render_options } => {
            let maze = match config {
                Some(path) => MazeConfig::load_or_random(path).generate(),
                None => Maze::generate(width, height, seed),
            };
            let fragment_positions = if seeded_fragments {
                maze.place_fragments_seeded(fragments)
            }
            else {
                maze.place_fragments(fragments)
            };

            if text {
                print!("{}", maze);
                println!("Seed: {}", maze.seed());
            }
            else if json {
                let output = json!({
                    "maze": &maze,
                    "fragments": &fragment_positions,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            else {
                let filename = format!("output/maze_{}x{}_{}.png", maze.width(), maze.height(), maze.seed());
                let _ = std::fs::create_dir("output");
                save_image(&render_maze(&maze, &fragment_positions, &render_options)?, &filename)?;
                println!("🧭 Saved maze image as \"{}\"", filename);
            }
        },
        Commands::Config => {
            println!("{}", MazeConfig::random().to_json()?);
        },
        Commands::Search { query, timeout_s, num } => {
            let query = Query::try_from(query.as_str())?;
            let start_time = Instant::now();
            let deadline = (timeout_s > 0).then(|| Instant::now() + Duration::from_secs(timeout_s));

            let progress_bar = ProgressBar::new_spinner()
                .with_style(ProgressStyle::default_spinner().template("{spinner} {elapsed_precise} [{per_sec}, {pos} searched]")?);

            if !atty::is(Stream::Stdout) {
                progress_bar.finish_and_clear();
            }

            let num = num as usize;
            let result_recv = find_matching_seeds_parallel(&query, deadline, Some(num), Some(&progress_bar));

            let mut num_found = 0;
            for seed in result_recv.try_iter().take(num) {
                num_found += 1;
                progress_bar.suspend(|| println!("{}", seed));
            }

            progress_bar.finish_and_clear();
            if atty::is(Stream::Stdout) {
                eprintln!("🧭 Found {} matching seed(s) in {}s.", num_found, start_time.elapsed().as_secs());
            }
        },
        Commands::Stats { query, num_to_search } => {
            let query = Query::try_from(query.as_str())?;
            let num_matched = (0..num_to_search).into_par_iter()
                .progress_count(num_to_search as u64)
                .filter(|_| {
                    let seed: f64 = rand::random();
                    query.matches(seed)
                })
                .count();
            println!(
                "🧭 Searched {} mazes and found {} ({:.03}%) that match the condition '{}'.",
                num_to_search, num_matched, (num_matched as f32 / num_to_search.max(1) as f32) * 100.0, &query
            );
        },
        Commands::Submit { name, time, board } => {
            let mut leaderboard = Leaderboard::new(JsonFileStore::new(&board));
            let entry = leaderboard.submit(&name, time)?;
            let place = leaderboard.top(usize::MAX)?
                .iter()
                .position(|e| e == &entry)
                .map(|i| (i + 1).to_string())
                .unwrap_or_else(|| "unranked".to_string());
            println!("🧭 Recorded {}s for '{}' (place: {}).", entry.time, entry.name, place);
        },
        Commands::Rank { num, board } => {
            let mut leaderboard = Leaderboard::new(JsonFileStore::new(&board));
            let entries = leaderboard.top(num)?;
            if entries.is_empty() {
                println!("No times recorded yet.");
            }
            for (i, entry) in entries.iter().enumerate() {
                println!("{:>3}. {:<20} {:>6}s  {}", i + 1, entry.name, entry.time, entry.date.to_rfc3339());
            }
        },
    }

    Ok(())
}
