//! Symbol pattern definitions.
//!
//! A symbol is an ordered list of parts, each a polyline in symbol space
//! (unit-ish coordinates, y up) with an optional fill flag. Symbols are
//! stamped at point locations, scaled and y-flipped into pixel space.

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// One stroke of a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPart {
    pub path: Vec<Point>,
    #[serde(default)]
    pub filled: bool,
}

impl SymbolPart {
    pub fn new(path: Vec<Point>) -> Self {
        Self {
            path,
            filled: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }
}

/// A named symbol built from parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolPattern {
    pub name: String,
    pub parts: Vec<SymbolPart>,
}

impl SymbolPattern {
    pub fn new(name: impl Into<String>, parts: Vec<SymbolPart>) -> Self {
        Self {
            name: name.into(),
            parts,
        }
    }
}
