//! `eggshell links` - lookup links for every combination
//!
//! Renders each combination followed by the nine item links its fragments
//! point at, in a shape meant for pasting into a forum post. `--break-at`
//! splits the run into two posts.

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::CombinationSet;
use crate::source::RecordSource;

/// Marker emitted between pages of the link list
const POST_BREAK: &str = "BREAK THE POSTS HERE";

pub fn run(output: &Output, combinations: &Path, break_at: Option<usize>) -> Result<()> {
    let set = CombinationSet::load(combinations)
        .with_context(|| format!("Failed to load combinations from {}", combinations.display()))?;
    output.verbose_ctx("links", &format!("Read {} combinations", set.len()));

    if output.is_json() {
        let items: Vec<_> = set
            .combinations()
            .iter()
            .map(|combination| {
                serde_json::json!({
                    "combination": combination.to_string(),
                    "links": combination
                        .fragments()
                        .map(|f| f.link())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        output.data(&items);
        return Ok(());
    }

    for (index, combination) in set.combinations().iter().enumerate() {
        if break_at.is_some_and(|n| n == index && index > 0) {
            println!();
            println!("{}", POST_BREAK);
        }

        println!();
        println!("{}", combination);
        let links: String = combination.fragments().map(|f| f.link()).collect();
        println!("{}", links);
    }

    Ok(())
}
