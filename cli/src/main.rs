use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use en_textkit::{casing, make_plural, make_singular, pluralize, Direction, RuleRegistry};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(name = "en-textkit")]
#[clap(about = "Inflects English words and converts identifiers between case styles")]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints the plural form of each word.
    Plural {
        #[clap(required = true)]
        words: Vec<String>,
    },
    /// Prints the singular form of each word.
    Singular {
        #[clap(required = true)]
        words: Vec<String>,
    },
    /// Prints the count followed by the word, inflected to match the count.
    Count {
        #[clap(allow_hyphen_values = true)]
        count: i64,
        word: String,
    },
    /// Converts identifiers to title case ("user_name" => "User Name").
    Title {
        #[clap(required = true)]
        words: Vec<String>,
    },
    /// Converts underscored identifiers to a sentence ("user_name" => "User name").
    Humanize {
        #[clap(required = true)]
        words: Vec<String>,
    },
    /// Converts identifiers to Pascal case ("user_name" => "UserName").
    Pascal {
        #[clap(long)]
        #[clap(help = "Join the words with underscores instead of running them together.")]
        keep_underscores: bool,
        #[clap(required = true)]
        words: Vec<String>,
    },
    /// Converts identifiers to camel case ("user_name" => "userName").
    Camel {
        #[clap(required = true)]
        words: Vec<String>,
    },
    /// Converts Pascal or camel case identifiers to snake case.
    Underscore {
        #[clap(required = true)]
        words: Vec<String>,
    },
    /// Adds an ordinal suffix to each number ("2" => "2nd").
    Ordinal {
        #[clap(required = true)]
        numbers: Vec<String>,
    },
    /// Lists the built-in rules, highest priority first.
    Rules {
        #[clap(long)]
        #[clap(help = "List the singular rules instead of the plural rules.")]
        singular: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(command = ?args.command, "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in run(args.command) {
        writeln!(out, "{}", line).context("Could not write to stdout")?;
    }
    Ok(())
}

fn run(command: Command) -> Vec<String> {
    match command {
        Command::Plural { words } => map_words(&words, |w| make_plural(w).into_owned()),
        Command::Singular { words } => map_words(&words, |w| make_singular(w).into_owned()),
        Command::Count { count, word } => vec![pluralize(count, &word)],
        Command::Title { words } => map_words(&words, casing::to_title_case),
        Command::Humanize { words } => map_words(&words, casing::humanize),
        Command::Pascal {
            keep_underscores,
            words,
        } => map_words(&words, |w| casing::to_pascal_case_with(w, !keep_underscores)),
        Command::Camel { words } => map_words(&words, casing::to_camel_case),
        Command::Underscore { words } => map_words(&words, casing::add_underscores),
        Command::Ordinal { numbers } => map_words(&numbers, casing::add_ordinal_suffix),
        Command::Rules { singular } => {
            let direction = if singular {
                Direction::Singular
            } else {
                Direction::Plural
            };
            RuleRegistry::english()
                .rules(direction)
                .by_priority()
                .map(|rule| {
                    format!(
                        "{:>3}  {}  =>  {}",
                        rule.priority(),
                        rule.pattern(),
                        rule.replacement(),
                    )
                })
                .collect()
        }
    }
}

fn map_words<F>(words: &[String], f: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    words.iter().map(|w| f(w)).collect()
}
