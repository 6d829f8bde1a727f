//! `eggshell reconcile` - fragments still needed and fragments in surplus

use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{reconcile, CombinationSet, Delta, Inventory};
use crate::source::RecordSource;

pub fn run(output: &Output, combinations: &Path, inventory: &Path) -> Result<()> {
    let set = CombinationSet::load(combinations)
        .with_context(|| format!("Failed to load combinations from {}", combinations.display()))?;
    let held = Inventory::load(inventory)
        .with_context(|| format!("Failed to load inventory from {}", inventory.display()))?;

    output.verbose_ctx(
        "reconcile",
        &format!(
            "{} combinations demand {} fragments; {} held",
            set.len(),
            set.demand().total(),
            held.held().total()
        ),
    );

    let report = reconcile(&set, &held);

    if output.is_json() {
        output.data(&report);
        return Ok(());
    }

    if report.needed.is_empty() {
        println!("No fragments are still needed.");
    } else {
        println!("Still needed ({}):", report.needed.len());
        print_deltas(&report.needed, "NEED");
    }

    output.blank();

    if report.surplus.is_empty() {
        println!("No fragments in surplus.");
    } else {
        println!("Surplus ({}):", report.surplus.len());
        print_deltas(&report.surplus, "EXTRA");
    }

    Ok(())
}

fn print_deltas(deltas: &[Delta], amount_label: &str) {
    println!("{:<10} {:>6} {:>8} {:>6}", "FRAGMENT", amount_label, "DEMAND", "HELD");
    println!("{}", "-".repeat(34));
    for delta in deltas {
        println!(
            "{:<10} {:>6} {:>8} {:>6}",
            delta.fragment.to_string(),
            delta.amount,
            delta.demand,
            delta.held
        );
    }
}
