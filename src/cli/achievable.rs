//! `eggshell achievable` - combinations the inventory can assemble

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{achievable, CombinationSet, Inventory};
use crate::source::RecordSource;

pub fn run(output: &Output, combinations: &Path, inventory: &Path) -> Result<()> {
    let set = CombinationSet::load(combinations)
        .with_context(|| format!("Failed to load combinations from {}", combinations.display()))?;
    output.verbose_ctx("achievable", &format!("Read {} combinations", set.len()));

    let held = Inventory::load(inventory)
        .with_context(|| format!("Failed to load inventory from {}", inventory.display()))?;
    output.verbose_ctx(
        "achievable",
        &format!("Inventory covers {} fragment kinds", held.held().len()),
    );

    let able = achievable(&set, &held);

    if output.is_json() {
        let items: Vec<_> = able
            .iter()
            .map(|combination| {
                serde_json::json!({
                    "combination": combination.to_string(),
                    "fragments": combination
                        .fragments()
                        .map(|f| f.to_string())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        output.data(&items);
    } else if able.is_empty() {
        println!("No combinations can be assembled yet.");
    } else {
        println!("Achievable combinations ({} of {}):", able.len(), set.len());
        println!("{:<12} FRAGMENTS", "COMBINATION");
        println!("{}", "-".repeat(60));
        for combination in able {
            let fragments: Vec<String> =
                combination.fragments().map(|f| f.to_string()).collect();
            println!("{:<12} {}", combination.to_string(), fragments.join(" "));
        }
    }

    Ok(())
}
