use std::path::PathBuf;

use mazegen::{
    config::{DEFAULT_HEIGHT, DEFAULT_WIDTH},
    leaderboard::DEFAULT_TOP_N,
    parse_seed,
    render::MazeRenderOptions,
    session::DEFAULT_TOTAL_FRAGMENTS,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(name="mazerunner", author, version, about, long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Commands,

    #[clap(
        global = true,
        short = 'v',
        action = clap::ArgAction::Count,
        help = VERBOSE_HELP,
    )]
    pub verbosity: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a maze and render an image of it.
    Generate {
        #[clap(
            value_parser = |s: &str| parse_seed(s).map_err(|e| e.to_string()),
            allow_negative_numbers = true,
            help = SEED_HELP,
        )]
        seed: Option<f64>,

        #[clap(short = 'W', long = "width", default_value_t = DEFAULT_WIDTH)]
        width: usize,

        #[clap(short = 'H', long = "height", default_value_t = DEFAULT_HEIGHT)]
        height: usize,

        #[clap(
            short = 'c',
            long = "config",
            help = "Read seed and size from a maze config JSON file. Falls back to a random config if it can't be read.",
            conflicts_with_all = ["seed", "width", "height"],
        )]
        config: Option<PathBuf>,

        #[clap(short = 'f', long = "fragments", default_value_t = DEFAULT_TOTAL_FRAGMENTS, help = "Number of fragments to place")]
        fragments: usize,

        #[clap(long = "seeded-fragments", help = SEEDED_FRAGMENTS_HELP)]
        seeded_fragments: bool,

        #[clap(short = 't', long = "text", help = "Print the maze as text instead of rendering an image")]
        text: bool,

        #[clap(long = "json", conflicts_with = "text", help = "Print the maze and fragments as JSON")]
        json: bool,

        #[clap(flatten)]
        render_options: MazeRenderOptions,
    },

    /// Print a fresh maze config (random seed, default size) as JSON.
    Config,

    /// Search for seeds matching a specified condition.
    #[clap(arg_required_else_help = true)]
    Search {
        #[clap(
            help = QUERY_HELP,
            long_help = QUERY_LONG_HELP,
        )]
        query: String,

        #[clap(
            default_value_t = 10,
            short = 't',
            long = "timeout",
            help = "The maximum time to search for a maze, in seconds. If set to 0, search indefinitely"
        )]
        timeout_s: u64,

        #[clap(
            default_value_t = 1,
            short = 'n',
            long = "num",
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Number of seeds to attempt to find. Must be at least 1."
        )]
        num: u64,
    },

    /// Calculate statistics on what proportion of seeds match a given condition.
    #[clap(arg_required_else_help = true)]
    Stats {
        #[clap(
            help = QUERY_HELP,
            long_help = QUERY_LONG_HELP,
        )]
        query: String,

        #[clap(
            default_value = "10000",
            short = 'n',
            long = "num-to-search",
            help = "Number of seeds to check. Larger sample sizes will produce more reliable results."
        )]
        num_to_search: usize,
    },

    /// Record a completion time on the leaderboard.
    #[clap(arg_required_else_help = true)]
    Submit {
        #[clap(help = "Player name. Cut off after 20 characters.")]
        name: String,

        #[clap(help = "Completion time in seconds.")]
        time: f64,

        #[clap(short = 'b', long = "board", default_value = DEFAULT_BOARD, help = BOARD_HELP)]
        board: PathBuf,
    },

    /// Show the fastest times on the leaderboard.
    Rank {
        #[clap(short = 'n', long = "num", default_value_t = DEFAULT_TOP_N)]
        num: usize,

        #[clap(short = 'b', long = "board", default_value = DEFAULT_BOARD, help = BOARD_HELP)]
        board: PathBuf,
    },
}

const DEFAULT_BOARD: &str = "leaderboard.json";
const QUERY_HELP: &str = "A condition to search for in generated mazes.";
const QUERY_LONG_HELP: &str = r##"
A string with one or more query conditions, joined by '&'. Mazerunner will attempt
to find a seed matching all conditions.

Each condition has the form "WxH METRIC </=/> NUM", where WxH is the maze size.
Available metrics:
- "path": number of cells on the route from the entrance to the exit.
  Example: "10x10 path > 40" for long, winding mazes.
- "deadends": number of cells with only one way in or out.
- "junctions": number of cells where the route branches three or more ways.
"##;
const SEED_HELP: &str = r##"The seed to generate. Any number, including fractions; 0 is a valid seed.
A random seed is used if omitted. Examples: "42", "0.6152370".
"##;
const SEEDED_FRAGMENTS_HELP: &str = "Place fragments using the maze seed, so the whole round is reproducible.";
const BOARD_HELP: &str = "The leaderboard file. Created if it doesn't exist.";
const VERBOSE_HELP: &str = "Enable debug logging. Repeat up to 2 times to increase verbosity.";
