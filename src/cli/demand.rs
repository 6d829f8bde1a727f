//! `eggshell demand` - total demand per fragment across the combination list

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::CombinationSet;
use crate::source::RecordSource;

pub fn run(output: &Output, combinations: &Path) -> Result<()> {
    let set = CombinationSet::load(combinations)
        .with_context(|| format!("Failed to load combinations from {}", combinations.display()))?;
    output.verbose_ctx("demand", &format!("Read {} combinations", set.len()));

    if output.is_json() {
        output.data(set.demand());
    } else if set.is_empty() {
        println!("No combinations found.");
    } else {
        println!(
            "Demand across {} combinations ({} fragments total):",
            set.len(),
            set.demand().total()
        );
        println!("{:<10} {:>6}", "FRAGMENT", "COUNT");
        println!("{}", "-".repeat(17));
        for (fragment, count) in set.demand().iter() {
            println!("{:<10} {:>6}", fragment.to_string(), count);
        }
    }

    Ok(())
}
