// Browse the pattern catalog and run any runnable demo by name.

use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use design_patterns::catalog::{self, Category, PatternInfo};
use design_patterns::logging;

#[derive(Parser)]
#[command(name = "patterns")]
#[command(about = "Catalog of classic design patterns with runnable Rust examples")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every pattern
    List {
        /// Only show one category (creational, structural, behavioral)
        #[arg(long)]
        category: Option<String>,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe a single pattern
    Show { name: String },
    /// Run a pattern's demo, by pattern name or binary name
    Run { name: String },
}

fn render_list(patterns: &[&PatternInfo], json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, patterns)?;
        writeln!(out)?;
        return Ok(());
    }

    for info in patterns {
        let marker = if info.is_runnable() { "runnable" } else { "documented" };
        let name = format!("{:<16}", info.name);
        writeln!(out, "{} {:<12} {}", name.bold(), info.category, marker.dimmed())?;
    }
    Ok(())
}

fn render_show(info: &PatternInfo, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", info.name.bold().underline())?;
    writeln!(out, "{} {}", "Category:".cyan(), info.category)?;
    writeln!(out, "  {}", info.category.summary())?;
    writeln!(out, "{}", "Intent:".cyan())?;
    writeln!(out, "  {}", info.intent)?;
    if info.is_runnable() {
        let bins: Vec<&str> = info.demos.iter().map(|d| d.bin_name()).collect();
        writeln!(out, "{} {}", "Demos:".cyan(), bins.join(", "))?;
    }
    Ok(())
}

fn execute(command: Command, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::List { category, json } => {
            let patterns: Vec<&PatternInfo> = match category {
                Some(name) => {
                    let category: Category = name.parse()?;
                    catalog::by_category(category).collect()
                }
                None => catalog::catalog().iter().collect(),
            };
            render_list(&patterns, json, out)?;
        }
        Command::Show { name } => {
            let info = catalog::lookup(&name)?;
            render_show(info, out)?;
        }
        Command::Run { name } => {
            catalog::run_demo(&name, out)
                .with_context(|| format!("could not run '{}'", name))?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    execute(cli.command, &mut io::stdout().lock())
}

// ============================================================================
// Tests
// ============================================================================
