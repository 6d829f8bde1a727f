//! Fragment identifiers and the external item numbering
//!
//! A fragment is one collectible unit, identified by a position (1-9) and a
//! kind letter (a-e). The canonical form is `"{position}{kind}"`, e.g. `4c`.
//! The site numbers every fragment's item page as
//! `436 + 9 * kind_index + position`, with kinds indexed a=0 through e=4.
//! That arithmetic is an external contract and must not change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Base URL of the external item lookup pages
pub const ITEM_INFO_URL: &str = "http://www.clickcritters.com/iteminfo.php?itemid=";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FragmentError {
    #[error("Fragment position must be 1-9, got {0}")]
    PositionOutOfRange(u8),

    #[error("Unknown fragment kind '{0}': expected a-e")]
    UnknownKind(char),

    #[error("Invalid fragment code: expected position then kind (e.g. '4c'), got '{0}'")]
    InvalidFormat(String),
}

/// The five fragment kinds, in their fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    A,
    B,
    C,
    D,
    E,
}

impl Kind {
    /// Every kind, in order
    pub const ALL: [Kind; 5] = [Kind::A, Kind::B, Kind::C, Kind::D, Kind::E];

    /// Zero-based index in the fixed a=0 through e=4 ordering
    pub fn index(self) -> u32 {
        match self {
            Kind::A => 0,
            Kind::B => 1,
            Kind::C => 2,
            Kind::D => 3,
            Kind::E => 4,
        }
    }

    /// Parses a kind letter, accepting either case
    pub fn from_char(c: char) -> Result<Self, FragmentError> {
        match c.to_ascii_lowercase() {
            'a' => Ok(Kind::A),
            'b' => Ok(Kind::B),
            'c' => Ok(Kind::C),
            'd' => Ok(Kind::D),
            'e' => Ok(Kind::E),
            other => Err(FragmentError::UnknownKind(other)),
        }
    }

    /// The lowercase letter for this kind
    pub fn as_char(self) -> char {
        match self {
            Kind::A => 'a',
            Kind::B => 'b',
            Kind::C => 'c',
            Kind::D => 'd',
            Kind::E => 'e',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A fragment identifier: position 1-9 plus kind letter
///
/// Ordering follows the external item numbering (kind first, then
/// position), so sorted output walks the item pages in id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FragmentId {
    kind: Kind,
    position: u8,
}

impl FragmentId {
    /// Creates a fragment id, validating the position range
    pub fn new(position: u8, kind: Kind) -> Result<Self, FragmentError> {
        if !(1..=9).contains(&position) {
            return Err(FragmentError::PositionOutOfRange(position));
        }
        Ok(Self { kind, position })
    }

    /// Crate-internal constructor for positions already known to be 1-9
    pub(crate) fn from_parts(position: u8, kind: Kind) -> Self {
        debug_assert!((1..=9).contains(&position));
        Self { kind, position }
    }

    /// Position within the combination, 1-9
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Kind letter
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Numeric id of this fragment's item lookup page
    pub fn item_id(&self) -> u32 {
        436 + 9 * self.kind.index() + u32::from(self.position)
    }

    /// HTML link to the item lookup page, labelled with the canonical code
    pub fn link(&self) -> String {
        format!("<a href=\"{}{}\">{}</a>", ITEM_INFO_URL, self.item_id(), self)
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.position, self.kind)
    }
}

impl FromStr for FragmentId {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(position), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(FragmentError::InvalidFormat(s.to_string()));
        };

        let position = position
            .to_digit(10)
            .ok_or_else(|| FragmentError::InvalidFormat(s.to_string()))?;

        Self::new(position as u8, Kind::from_char(kind)?)
    }
}

impl TryFrom<String> for FragmentId {
    type Error = FragmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FragmentId> for String {
    fn from(id: FragmentId) -> Self {
        id.to_string()
    }
}
