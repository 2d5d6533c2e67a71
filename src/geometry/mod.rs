//! Geometry primitives and construction kernels.
//!
//! Atoms are spheres, bonds are cylinders oriented by the shortest-arc
//! rotation from +Y onto the bond direction. A [`MoleculeGroup`] owns both
//! and guarantees every bond was created between two of its own atoms.

/// Parametric ring, fused-ring, helix, chain and branch construction.
pub mod construct;
mod element;
mod group;
mod primitives;

pub use element::Element;
pub use group::{
    GeometryIssue, MoleculeGroup, BOND_COLOR, COINCIDENT_TOLERANCE,
    HBOND_COLOR,
};
pub use primitives::{
    make_atom, make_bond, Atom, AtomId, Bond, BondKind, MIN_BOND_LENGTH,
};
