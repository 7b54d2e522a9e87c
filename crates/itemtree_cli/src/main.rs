//! Command-line driver for the item tree transformation.
//!
//! # Responsibility
//! - Read a JSON array of items from a file or stdin.
//! - Print the flattened tree as an indented listing or JSON rows.

use clap::{Parser, ValueEnum};
use itemtree_core::{
    default_log_level, init_logging, Item, ItemOrdering, ItemResult, ItemService,
    TransformOptions, UnreachablePolicy,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Flatten parent-pointer items into an indented, depth-annotated listing
#[derive(Debug, Parser)]
#[command(name = "itemtree")]
#[command(version)]
#[command(long_about = None)]
struct CliArgs {
    /// Items JSON file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Print result rows as JSON instead of an indented listing
    #[arg(long)]
    json: bool,

    /// Fail on cycles instead of dropping unreachable items
    #[arg(long)]
    strict: bool,

    /// Sort top-level items too (input order by default)
    #[arg(long)]
    sort_top_level: bool,

    /// Deepest allowed depth; top-level items have depth 0
    #[arg(long)]
    max_depth: Option<usize>,

    /// Sibling ordering
    #[arg(long, value_enum, default_value = "seq")]
    order: OrderArg,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    /// Ascending sequence id
    Seq,
    /// Case-insensitive name
    Name,
}

impl CliArgs {
    fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            unreachable: if self.strict {
                UnreachablePolicy::Reject
            } else {
                UnreachablePolicy::Exclude
            },
            max_depth: self.max_depth,
            sort_top_level: self.sort_top_level,
        }
    }

    fn ordering(&self) -> ItemOrdering {
        match self.order {
            OrderArg::Seq => ItemOrdering::Sequence,
            OrderArg::Name => ItemOrdering::NameCaseInsensitive,
        }
    }

    fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("itemtree: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<String, String> {
    if let Some(log_dir) = &args.log_dir {
        let log_dir = log_dir
            .to_str()
            .ok_or_else(|| format!("log dir is not valid UTF-8: {}", log_dir.display()))?;
        init_logging(default_log_level(), log_dir).map_err(|err| err.to_string())?;
    }

    let raw = match args.input_path() {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            buffer
        }
    };

    let items: Vec<Item> =
        serde_json::from_str(&raw).map_err(|err| format!("invalid items json: {err}"))?;
    let results = ItemService::with_ordering(args.ordering())
        .transform(&items, &args.transform_options())
        .map_err(|err| err.to_string())?;

    if args.json {
        let mut rendered =
            serde_json::to_string_pretty(&results).map_err(|err| err.to_string())?;
        rendered.push('\n');
        Ok(rendered)
    } else {
        Ok(render_listing(&results))
    }
}

fn render_listing(results: &[ItemResult]) -> String {
    results
        .iter()
        .map(|result| format!("{}{} (id={})\n", "  ".repeat(result.depth), result.name, result.id))
        .collect()
}
