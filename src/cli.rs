//! CLI module
//!
//! This module provides the command-line interface functionality for the todolist tool.
//! Nothing is persisted: each invocation builds a list from its arguments and renders it.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;

use crate::{TodoHandle, TodoList};

pub const DEFAULT_TITLE: &str = "Today's Todos";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a list from the given items and print it
    Show(ShowArgs),

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args)]
struct ShowArgs {
    /// Todo descriptions, in order
    items: Vec<String>,

    /// List title
    #[arg(short, long, env = "TODOLIST_TITLE", default_value = DEFAULT_TITLE)]
    title: String,

    /// Mark the todo at this index as done (repeatable)
    #[arg(long = "done", value_name = "INDEX")]
    done: Vec<usize>,

    /// Mark the todo at this index as not done (repeatable)
    #[arg(long = "undone", value_name = "INDEX")]
    undone: Vec<usize>,

    /// Remove the todo at this index before marking (repeatable, applied in order)
    #[arg(long = "remove", value_name = "INDEX")]
    remove: Vec<usize>,

    /// Which todos to print
    #[arg(long, value_enum, default_value_t = Filter::All)]
    filter: Filter,

    /// Print the list as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Filter {
    All,
    Done,
    Pending,
}

/// Run the CLI application
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show(args) => {
            let list = build_list(&args)?;
            if args.json {
                println!("{}", render_json(&list)?);
            } else {
                print_list(&list);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            // Generate completions for the specified shell
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut io::stdout());
            Ok(())
        }
    }
}

fn build_list(args: &ShowArgs) -> crate::Result<TodoList> {
    let mut list = TodoList::new(args.title.clone());
    list.extend(args.items.iter().map(|item| TodoHandle::new(item.as_str())));

    for &index in &args.remove {
        list.remove_at(index)?;
    }
    for &index in &args.done {
        list.mark_done_at(index)?;
    }
    for &index in &args.undone {
        list.mark_undone_at(index)?;
    }

    Ok(match args.filter {
        Filter::All => list,
        Filter::Done => list.all_done(),
        Filter::Pending => list.all_not_done(),
    })
}

fn render_json(list: &TodoList) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&list.snapshot())
}

fn print_list(list: &TodoList) {
    println!("{}", list.header().bold());
    for todo in list {
        let line = todo.to_string();
        if todo.is_done() {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
}
