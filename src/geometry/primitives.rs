use glam::{Quat, Vec3};

use super::element::Element;

/// Shortest bond the builders are allowed to emit.
pub const MIN_BOND_LENGTH: f32 = 1e-4;

/// Index of an atom inside its [`MoleculeGroup`](super::MoleculeGroup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomId(pub usize);

/// A displayed atom: a colored sphere at a fixed position.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Element, used only for color and size.
    pub element: Element,
    /// Position in scene units.
    pub position: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// RGB color.
    pub color: [f32; 3],
}

/// What a bond cylinder depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondKind {
    /// Covalent bond (structural).
    #[default]
    Covalent,
    /// Inferred hydrogen bond, drawn for illustration only.
    HydrogenBond,
}

/// A displayed bond: a cylinder from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    /// First endpoint.
    pub start: Vec3,
    /// Second endpoint.
    pub end: Vec3,
    /// RGB color.
    pub color: [f32; 3],
    /// Covalent or hydrogen bond.
    pub kind: BondKind,
}

/// Create an atom sphere. Callers pick the radius per element.
#[must_use]
pub fn make_atom(
    position: Vec3,
    element: Element,
    color: [f32; 3],
    radius: f32,
) -> Atom {
    Atom {
        element,
        position,
        radius,
        color,
    }
}

/// Create a covalent bond between two points.
///
/// Returns `None` for coincident endpoints, which have no direction.
#[must_use]
pub fn make_bond(start: Vec3, end: Vec3, color: [f32; 3]) -> Option<Bond> {
    if start.distance(end) < MIN_BOND_LENGTH {
        return None;
    }
    Some(Bond {
        start,
        end,
        color,
        kind: BondKind::Covalent,
    })
}

impl Bond {
    /// Cylinder length (Euclidean distance between endpoints).
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Unit vector from `start` to `end`.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.end - self.start).normalize_or_zero()
    }

    /// Cylinder center.
    #[must_use]
    pub fn midpoint(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// Shortest-arc rotation taking +Y onto the bond direction.
    ///
    /// Roll about the bond axis is left undefined; cylinders are radially
    /// symmetric.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Y, self.direction())
    }

    /// Whether this is an illustrative hydrogen bond.
    #[must_use]
    pub fn is_hydrogen_bond(&self) -> bool {
        self.kind == BondKind::HydrogenBond
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn bond_length_is_endpoint_distance() {
        let bond =
            make_bond(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0), [1.0; 3]).unwrap();
        assert!((bond.length() - 5.0).abs() < EPS);
        assert!((bond.midpoint() - Vec3::new(1.5, 2.0, 0.0)).length() < EPS);
    }

    #[test]
    fn orientation_maps_up_onto_direction() {
        let bond = make_bond(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, -1.0, 3.0),
            [1.0; 3],
        )
        .unwrap();
        let rotated = bond.orientation() * Vec3::Y;
        assert!((rotated - bond.direction()).length() < EPS);
    }

    #[test]
    fn orientation_handles_antiparallel_direction() {
        let bond =
            make_bond(Vec3::ZERO, Vec3::new(0.0, -2.0, 0.0), [1.0; 3]).unwrap();
        let rotated = bond.orientation() * Vec3::Y;
        assert!((rotated - Vec3::NEG_Y).length() < EPS);
    }

    #[test]
    fn degenerate_bond_is_rejected() {
        assert!(make_bond(Vec3::ONE, Vec3::ONE, [1.0; 3]).is_none());
    }

    #[test]
    fn atom_keeps_caller_radius() {
        let atom = make_atom(Vec3::X, Element::N, [0.0, 0.0, 1.0], 0.7);
        assert_eq!(atom.radius, 0.7);
        assert_eq!(atom.element, Element::N);
    }
}
