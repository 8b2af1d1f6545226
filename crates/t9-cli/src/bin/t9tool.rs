use clap::{Parser, Subcommand};

use t9_cli::commands::{accuracy_ops, index_ops};
use t9_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "t9tool", about = "T9 keypad index diagnostics")]
struct Cli {
    /// Settings TOML to use instead of the built-in defaults
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the digit sequence of each word
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Rank candidates for digit sequences
    Rank {
        /// Popular word list, most frequent first
        popular_file: String,
        /// General dictionary word list
        dict_file: String,
        /// Digit sequences to rank
        #[arg(required = true)]
        digits: Vec<String>,
        /// Show at most this many candidates per sequence
        #[arg(short, long)]
        n: Option<usize>,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show index size
    Stats {
        /// Popular word list, most frequent first
        popular_file: String,
        /// General dictionary word list
        dict_file: String,
    },
    /// Type keypad keys (0-9, *, #) into a session and print the result
    Simulate {
        /// Popular word list, most frequent first
        popular_file: String,
        /// General dictionary word list
        dict_file: String,
        /// Key presses, e.g. "43556#0"
        keys: String,
    },
    /// Check leading candidates against a TOML corpus
    Accuracy {
        /// Popular word list, most frequent first
        popular_file: String,
        /// General dictionary word list
        dict_file: String,
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Show passing cases too
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Some(ref path) = cli.settings {
        index_ops::load_settings(path);
    }

    match cli.command {
        Command::Encode { words } => index_ops::encode_cmd(&words),
        Command::Rank {
            popular_file,
            dict_file,
            digits,
            n,
            json,
        } => {
            let index = index_ops::load_index(&popular_file, &dict_file);
            index_ops::rank_cmd(&index, &digits, n, json);
        }
        Command::Stats {
            popular_file,
            dict_file,
        } => {
            let index = index_ops::load_index(&popular_file, &dict_file);
            index_ops::stats_cmd(&index);
        }
        Command::Simulate {
            popular_file,
            dict_file,
            keys,
        } => {
            let index = index_ops::load_index(&popular_file, &dict_file);
            index_ops::simulate_cmd(index, &keys);
        }
        Command::Accuracy {
            popular_file,
            dict_file,
            corpus_file,
            verbose,
            json,
        } => {
            let index = index_ops::load_index(&popular_file, &dict_file);
            accuracy_ops::accuracy_cmd(&index, &corpus_file, verbose, json);
        }
    }
}
