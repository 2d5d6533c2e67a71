use serde::{Deserialize, Serialize};

/// Chemical element of a displayed atom.
///
/// Only selects color and sphere size; nothing is simulated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Element {
    /// Carbon.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Phosphorus.
    P,
    /// Sulfur.
    S,
    /// Hydrogen.
    H,
}

impl Element {
    /// Every supported element, in a fixed order.
    pub const ALL: [Self; 6] =
        [Self::C, Self::N, Self::O, Self::P, Self::S, Self::H];

    /// One- or two-letter element symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::S => "S",
            Self::H => "H",
        }
    }

    /// Parse an element symbol (case-insensitive).
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.symbol().eq_ignore_ascii_case(symbol.trim()))
    }

    /// CPK-style RGB color.
    #[must_use]
    pub fn default_color(self) -> [f32; 3] {
        match self {
            Self::C => [0.56, 0.56, 0.56],
            Self::N => [0.19, 0.31, 0.97],
            Self::O => [1.0, 0.05, 0.05],
            Self::P => [1.0, 0.5, 0.0],
            Self::S => [1.0, 1.0, 0.19],
            Self::H => [1.0, 1.0, 1.0],
        }
    }

    /// Sphere radius in scene units. Hydrogen smallest, P/S largest.
    #[must_use]
    pub fn display_radius(self) -> f32 {
        match self {
            Self::H => 0.25,
            Self::C => 0.4,
            Self::N => 0.38,
            Self::O => 0.36,
            Self::P | Self::S => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for element in Element::ALL {
            assert_eq!(Element::from_symbol(element.symbol()), Some(element));
        }
        assert_eq!(Element::from_symbol(" o "), Some(Element::O));
        assert_eq!(Element::from_symbol("Fe"), None);
    }

    #[test]
    fn radii_distinguish_elements() {
        assert!(Element::H.display_radius() < Element::O.display_radius());
        assert!(Element::O.display_radius() < Element::C.display_radius());
        assert!(Element::C.display_radius() < Element::P.display_radius());
    }
}
