//! The inventory paste source
//!
//! Pasted inventory text repeats one record shape: a header line opening
//! with the `Egg` marker and carrying the fragment code in parentheses,
//! arbitrary blank padding, then a count line of the exact form
//! `x<digits>`. A count always belongs to the most recent header.

use regex::Regex;

use crate::domain::{FragmentId, Inventory, Tally};

use super::{RecordSource, SourceError};

/// Marker that opens every fragment header line
const HEADER_MARKER: &str = "Egg";

impl RecordSource for Inventory {
    fn parse_source(text: &str) -> Result<Self, SourceError> {
        // The code sits in parentheses near the end of the header; item
        // names can themselves contain parentheses, so the last valid
        // group wins.
        let header_code = Regex::new(r"\(([1-9][a-e])\)").unwrap();
        let count_line = Regex::new(r"^x([0-9]+)$").unwrap();

        let mut inventory = Inventory::new();
        let mut current: Option<FragmentId> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let entry = raw.trim();
            if entry.is_empty() {
                continue;
            }

            if entry.starts_with(HEADER_MARKER) {
                let code = header_code
                    .captures_iter(entry)
                    .last()
                    .ok_or_else(|| SourceError::MalformedHeader {
                        line,
                        text: entry.to_string(),
                    })?;

                current = Some(code[1].parse().map_err(|_| SourceError::MalformedHeader {
                    line,
                    text: entry.to_string(),
                })?);
            } else if let Some(count) = count_line.captures(entry) {
                let Some(fragment) = current else {
                    return Err(SourceError::OrphanCount {
                        line,
                        text: entry.to_string(),
                    });
                };

                let count: u32 =
                    count[1]
                        .parse()
                        .map_err(|_| SourceError::UnrecognizedLine {
                            line,
                            text: entry.to_string(),
                        })?;

                inventory.record(fragment, count);
            } else {
                return Err(SourceError::UnrecognizedLine {
                    line,
                    text: entry.to_string(),
                });
            }
        }

        Ok(inventory)
    }

    fn tally(&self) -> &Tally {
        self.held()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> FragmentId {
        s.parse().unwrap()
    }

    #[test]
    fn reads_a_single_record() {
        let inventory = Inventory::parse_source("Egg Fragment (1a)\n\nx4\n").unwrap();
        assert_eq!(inventory.count(id("1a")), 4);
    }

    #[test]
    fn tolerates_arbitrary_blank_padding() {
        let text = "\n\nEgg Fragment (1a)\nx4\n   \n\n\nEgg Fragment (2a)\n\n\nx5\n\nEgg Fragment (3a)\nx20\n";
        let inventory = Inventory::parse_source(text).unwrap();

        assert_eq!(inventory.count(id("1a")), 4);
        assert_eq!(inventory.count(id("2a")), 5);
        assert_eq!(inventory.count(id("3a")), 20);
        assert_eq!(inventory.held().len(), 3);
    }

    #[test]
    fn takes_the_last_parenthesized_code_on_a_header() {
        let inventory = Inventory::parse_source("Egg Fragment (rare) (7e)\nx2\n").unwrap();
        assert_eq!(inventory.count(id("7e")), 2);

        // When a name embeds something code-shaped, the trailing code
        // still wins.
        let inventory = Inventory::parse_source("Egg Fragment (2b) keepsake (7e)\nx3\n").unwrap();
        assert_eq!(inventory.count(id("7e")), 3);
        assert_eq!(inventory.count(id("2b")), 0);
    }

    #[test]
    fn last_count_for_a_fragment_wins() {
        let text = "Egg Fragment (1a)\nx4\nEgg Fragment (1a)\nx9\n";
        let inventory = Inventory::parse_source(text).unwrap();
        assert_eq!(inventory.count(id("1a")), 9);
    }

    #[test]
    fn count_before_any_header_is_an_orphan() {
        let err = Inventory::parse_source("\nx4\n").unwrap_err();
        assert!(matches!(err, SourceError::OrphanCount { line: 2, .. }));
    }

    #[test]
    fn header_without_a_code_fails() {
        let err = Inventory::parse_source("Egg Fragment\nx4\n").unwrap_err();
        assert!(matches!(err, SourceError::MalformedHeader { line: 1, .. }));
    }

    #[test]
    fn header_with_an_alien_code_fails() {
        // (0a) and (1f) are outside the fragment alphabet, so the header
        // carries no recognizable code at all.
        let err = Inventory::parse_source("Egg Fragment (0a)\nx4\n").unwrap_err();
        assert!(matches!(err, SourceError::MalformedHeader { line: 1, .. }));
    }

    #[test]
    fn unrecognized_lines_abort_the_load() {
        let err = Inventory::parse_source("Egg Fragment (1a)\ntotal: 4\n").unwrap_err();
        assert!(matches!(err, SourceError::UnrecognizedLine { line: 2, .. }));
    }

    #[test]
    fn counts_must_match_the_exact_form() {
        let err = Inventory::parse_source("Egg Fragment (1a)\nx4 extra\n").unwrap_err();
        assert!(matches!(err, SourceError::UnrecognizedLine { .. }));
    }

    #[test]
    fn tally_exposes_held_counts() {
        let inventory = Inventory::parse_source("Egg Fragment (1a)\nx4\n").unwrap();
        assert_eq!(inventory.tally().count(id("1a")), 4);
    }
}
