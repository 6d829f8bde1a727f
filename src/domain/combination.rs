//! Target combinations and the demand they create
//!
//! A combination is an ordered run of exactly nine kind letters; the letter
//! at index i-1 names the fragment needed at position i (so `daddecbca`
//! needs 1d, 2a, 3d, ..., 9a). The combination list as a whole induces a
//! demand tally over the 45 fragment kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::fragment::{FragmentId, Kind};
use super::tally::Tally;

/// Number of fragments in every combination
pub const COMBINATION_LEN: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombinationError {
    #[error("Combination '{0}' must be exactly 9 letters, got {1}")]
    WrongLength(String, usize),

    #[error("Combination '{0}' contains letter '{1}' outside a-e")]
    UnknownKind(String, char),
}

/// An ordered target of nine fragment kinds
///
/// Parsing trims, lowercases, and rejects anything that is not exactly
/// nine letters from the fragment alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Combination {
    kinds: [Kind; COMBINATION_LEN],
}

impl Combination {
    /// Kind required at each position, in order
    pub fn kinds(&self) -> &[Kind; COMBINATION_LEN] {
        &self.kinds
    }

    /// The nine fragments needed to assemble this combination,
    /// positions 1 through 9 in order
    pub fn fragments(&self) -> impl Iterator<Item = FragmentId> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| FragmentId::from_parts(i as u8 + 1, *kind))
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.kinds {
            write!(f, "{}", kind)?;
        }
        Ok(())
    }
}

impl FromStr for Combination {
    type Err = CombinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();

        let letters: Vec<char> = s.chars().collect();
        if letters.len() != COMBINATION_LEN {
            return Err(CombinationError::WrongLength(s.clone(), letters.len()));
        }

        let mut kinds = [Kind::A; COMBINATION_LEN];
        for (i, letter) in letters.into_iter().enumerate() {
            kinds[i] =
                Kind::from_char(letter).map_err(|_| CombinationError::UnknownKind(s.clone(), letter))?;
        }

        Ok(Self { kinds })
    }
}

impl TryFrom<String> for Combination {
    type Error = CombinationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Combination> for String {
    fn from(combination: Combination) -> Self {
        combination.to_string()
    }
}

/// The ordered list of target combinations plus the demand they create
///
/// Combinations keep their encounter order; downstream reporting and
/// paging depend on it. Demand is accumulated as combinations are pushed,
/// in a single pass, and never recomputed.
#[derive(Debug, Clone, Default)]
pub struct CombinationSet {
    combinations: Vec<Combination>,
    demand: Tally,
}

impl CombinationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a combination, folding its nine fragments into the demand
    pub fn push(&mut self, combination: Combination) {
        for fragment in combination.fragments() {
            self.demand.add(fragment, 1);
        }
        self.combinations.push(combination);
    }

    /// Combinations in the order they were read
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Total demand per fragment across every combination
    pub fn demand(&self) -> &Tally {
        &self.demand
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

impl FromIterator<Combination> for CombinationSet {
    fn from_iter<I: IntoIterator<Item = Combination>>(iter: I) -> Self {
        let mut set = CombinationSet::new();
        for combination in iter {
            set.push(combination);
        }
        set
    }
}
