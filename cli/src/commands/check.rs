//! # Healthbot Check Command
//!
//! File: cli/src/commands/check.rs
//!
//! ## Overview
//!
//! `healthbot check` loads the configured dataset exactly as `chat` would and
//! prints a short summary. A missing or malformed dataset makes the command
//! fail with a non-zero exit status, which is handy after editing the JSON.
//!
//! Example output:
//!
//! ```text
//! Knowledge base: built-in dataset
//! Entries:   14
//! Keywords:  49
//! Responses: 54
//! Knowledge base OK.
//! ```
//!
use super::startup;
use clap::Parser;
use healthbot::core::error::Result;
use healthbot::knowledge::KnowledgeBase;
use std::path::Path;

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Also list every entry's keywords and response count.
    #[arg(short, long)]
    pub list: bool,
}

pub fn handle_check(args: CheckArgs, dataset: Option<&Path>) -> Result<()> {
    let startup = startup(dataset)?;
    let kb = &startup.kb;

    println!("Knowledge base: {}", startup.source);
    println!("Entries:   {}", kb.len());
    println!("Keywords:  {}", kb.keyword_count());
    println!("Responses: {}", kb.response_count());
    if args.list {
        print_entries(kb);
    }
    println!("Knowledge base OK.");
    Ok(())
}

fn print_entries(kb: &KnowledgeBase) {
    for (index, entry) in kb.entries().iter().enumerate() {
        println!(
            "  #{:<3} {} ({} responses)",
            index,
            entry.keywords().join(", "),
            entry.responses().len()
        );
    }
}
