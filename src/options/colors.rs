use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::geometry::{Element, BOND_COLOR, HBOND_COLOR};

/// Color palette for atoms and bonds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB color for covalent bond cylinders.
    pub bond: [f32; 3],
    /// RGB color for hydrogen-bond cylinders.
    pub hydrogen_bond: [f32; 3],
    /// Per-element RGB overrides keyed by element symbol.
    pub elements: FxHashMap<String, [f32; 3]>,
}

impl Default for ColorOptions {
    fn default() -> Self {
        let elements = Element::ALL
            .into_iter()
            .map(|e| (e.symbol().to_owned(), e.default_color()))
            .collect();
        Self {
            bond: BOND_COLOR,
            hydrogen_bond: HBOND_COLOR,
            elements,
        }
    }
}

impl ColorOptions {
    /// Color for an element, falling back to its built-in CPK color.
    #[must_use]
    pub fn element(&self, element: Element) -> [f32; 3] {
        self.elements
            .get(element.symbol())
            .copied()
            .unwrap_or_else(|| element.default_color())
    }
}
