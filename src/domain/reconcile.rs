//! Reconciling demand against an inventory
//!
//! Pure derivations over a combination set and an inventory. Nothing here
//! holds state or performs I/O; callers render the reports.

use serde::Serialize;

use super::combination::{Combination, CombinationSet};
use super::fragment::FragmentId;
use super::inventory::Inventory;

/// Combinations the inventory can assemble right now, in list order
///
/// A combination counts as achievable when every one of its nine fragments
/// is present at all (held >= 1). The check is deliberately not
/// consumable: a single held fragment satisfies every combination that
/// wants it, since possession is tracked per fragment kind, not per use.
pub fn achievable<'a>(set: &'a CombinationSet, inventory: &Inventory) -> Vec<&'a Combination> {
    set.combinations()
        .iter()
        .filter(|combination| combination.fragments().all(|fragment| inventory.has(fragment)))
        .collect()
}

/// One fragment's standing relative to total demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delta {
    pub fragment: FragmentId,

    /// How many more are needed, or how many extras are held
    pub amount: u32,

    /// Total required across all combinations
    pub demand: u32,

    /// Total currently held
    pub held: u32,
}

/// Per-fragment shortfalls and extras
///
/// Both lists run in descending order of the raw demand-minus-held
/// difference: most urgent need first, largest surplus last. Ties fall
/// back to fragment id order. Fragments whose demand and held counts
/// match appear in neither list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Reconciliation {
    pub needed: Vec<Delta>,
    pub surplus: Vec<Delta>,
}

/// Compares every demanded fragment's required count with the held count
pub fn reconcile(set: &CombinationSet, inventory: &Inventory) -> Reconciliation {
    let mut diffs: Vec<(FragmentId, i64)> = set
        .demand()
        .iter()
        .map(|(fragment, demand)| {
            let held = inventory.count(fragment);
            (fragment, i64::from(demand) - i64::from(held))
        })
        .collect();

    // Tally iteration is ascending by fragment id, so the stable sort
    // leaves ties in id order.
    diffs.sort_by(|a, b| b.1.cmp(&a.1));

    let mut report = Reconciliation::default();
    for (fragment, diff) in diffs {
        if diff == 0 {
            continue;
        }

        let delta = Delta {
            fragment,
            amount: diff.unsigned_abs() as u32,
            demand: set.demand().count(fragment),
            held: inventory.count(fragment),
        };

        if diff > 0 {
            report.needed.push(delta);
        } else {
            report.surplus.push(delta);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::super::fragment::Kind;
    use super::*;

    fn id(s: &str) -> FragmentId {
        s.parse().unwrap()
    }

    fn set(combinations: &[&str]) -> CombinationSet {
        combinations.iter().map(|s| s.parse().unwrap()).collect()
    }

    /// One of every fragment the given combinations need
    fn one_of_each(combinations: &[&str]) -> Inventory {
        let mut inventory = Inventory::new();
        for combination in combinations {
            let parsed: Combination = combination.parse().unwrap();
            for fragment in parsed.fragments() {
                inventory.record(fragment, 1);
            }
        }
        inventory
    }

    #[test]
    fn achievable_requires_every_fragment_present() {
        let targets = set(&["aaaaaaaaa"]);

        let mut inventory = one_of_each(&["aaaaaaaaa"]);
        assert_eq!(achievable(&targets, &inventory).len(), 1);

        inventory.record(id("9a"), 0);
        assert!(achievable(&targets, &inventory).is_empty());
    }

    #[test]
    fn shared_fragments_are_not_consumed_between_combinations() {
        // Both combinations need 1a; a single held 1a satisfies both.
        let targets = set(&["aaaaaaaaa", "abbbbbbbb"]);
        let inventory = one_of_each(&["aaaaaaaaa", "abbbbbbbb"]);
        assert_eq!(inventory.count(id("1a")), 1);

        assert_eq!(achievable(&targets, &inventory).len(), 2);
    }

    #[test]
    fn achievable_preserves_list_order() {
        let targets = set(&["bbbbbbbbb", "aaaaaaaaa"]);
        let inventory = one_of_each(&["aaaaaaaaa", "bbbbbbbbb"]);

        let order: Vec<String> = achievable(&targets, &inventory)
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(order, vec!["bbbbbbbbb", "aaaaaaaaa"]);
    }

    #[test]
    fn reconcile_splits_needed_and_surplus() {
        // Demand: 1a x5, 1b x2. Held: 1a x3, 1b x4.
        let targets = set(&[
            "aaaaaaaaa",
            "aaaaaaaaa",
            "aaaaaaaaa",
            "aaaaaaaaa",
            "aaaaaaaaa",
            "bbbbbbbbb",
            "bbbbbbbbb",
        ]);
        assert_eq!(targets.demand().count(id("1a")), 5);
        assert_eq!(targets.demand().count(id("1b")), 2);

        let mut inventory = Inventory::new();
        inventory.record(id("1a"), 3);
        inventory.record(id("1b"), 4);

        let report = reconcile(&targets, &inventory);

        let needed_1a = report.needed.iter().find(|d| d.fragment == id("1a")).unwrap();
        assert_eq!(needed_1a.amount, 2);
        assert_eq!(needed_1a.demand, 5);
        assert_eq!(needed_1a.held, 3);
        assert!(report.surplus.iter().all(|d| d.fragment != id("1a")));

        let surplus_1b = report.surplus.iter().find(|d| d.fragment == id("1b")).unwrap();
        assert_eq!(surplus_1b.amount, 2);
        assert_eq!(surplus_1b.demand, 2);
        assert_eq!(surplus_1b.held, 4);
        assert!(report.needed.iter().all(|d| d.fragment != id("1b")));
    }

    #[test]
    fn balanced_fragments_appear_in_neither_list() {
        let targets = set(&["aaaaaaaaa"]);
        let inventory = one_of_each(&["aaaaaaaaa"]);

        let report = reconcile(&targets, &inventory);
        assert!(report.needed.is_empty());
        assert!(report.surplus.is_empty());
    }

    #[test]
    fn fragments_outside_demand_are_not_reported() {
        let targets = set(&["aaaaaaaaa"]);
        let mut inventory = one_of_each(&["aaaaaaaaa"]);
        inventory.record(id("1e"), 7);

        let report = reconcile(&targets, &inventory);
        assert!(report.surplus.iter().all(|d| d.fragment != id("1e")));
    }

    #[test]
    fn reports_run_most_urgent_first_largest_surplus_last() {
        // Demand: every 'a' fragment x2, every 'b' fragment x1.
        let targets = set(&["aaaaaaaaa", "aaaaaaaaa", "bbbbbbbbb"]);

        // 1a missing (diff 2), 2a short by one (diff 1), the rest of the
        // 'a' row balanced; 1b over by two (diff -2), 2b over by one
        // (diff -1), the rest of the 'b' row balanced.
        let mut inventory = one_of_each(&["bbbbbbbbb"]);
        inventory.record(id("2a"), 1);
        for position in 3..=9 {
            inventory.record(FragmentId::new(position, Kind::A).unwrap(), 2);
        }
        inventory.record(id("1b"), 3);
        inventory.record(id("2b"), 2);

        let report = reconcile(&targets, &inventory);

        let needed: Vec<FragmentId> = report.needed.iter().map(|d| d.fragment).collect();
        assert_eq!(needed, vec![id("1a"), id("2a")]);

        let surplus: Vec<FragmentId> = report.surplus.iter().map(|d| d.fragment).collect();
        assert_eq!(surplus, vec![id("2b"), id("1b")]);
    }
}
