//! The combination list source
//!
//! One combination per non-blank line, nine letters from a-e, case
//! normalized. Encounter order is preserved; demand accumulates in the
//! same pass.

use crate::domain::{CombinationSet, Tally};

use super::{RecordSource, SourceError};

impl RecordSource for CombinationSet {
    fn parse_source(text: &str) -> Result<Self, SourceError> {
        let mut set = CombinationSet::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let combination = line
                .parse()
                .map_err(|source| SourceError::MalformedCombination {
                    line: index + 1,
                    source,
                })?;

            set.push(combination);
        }

        Ok(set)
    }

    fn tally(&self) -> &Tally {
        self.demand()
    }
}
