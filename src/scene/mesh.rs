use glam::{Quat, Vec3};

use crate::geometry::{Atom, Bond, BondKind, Element, MoleculeGroup};
use crate::options::ColorOptions;

/// Cylinder radius for covalent bonds.
pub const BOND_RADIUS: f32 = 0.1;
/// Cylinder radius for hydrogen bonds (drawn thinner).
pub const HBOND_RADIUS: f32 = 0.05;

/// Opaque handle to a mesh attached to a [`Scene`](super::Scene).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u64);

/// Renderer-agnostic drawable.
#[derive(Debug, Clone, PartialEq)]
pub enum Mesh {
    /// Atom sphere.
    Sphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
        /// RGB color.
        color: [f32; 3],
        /// Element the sphere depicts.
        element: Element,
    },
    /// Bond cylinder, modeled as a unit +Y cylinder scaled and rotated.
    Cylinder {
        /// Cylinder center.
        midpoint: Vec3,
        /// Cylinder length along its axis.
        length: f32,
        /// Rotation taking +Y onto the cylinder axis.
        orientation: Quat,
        /// Cylinder radius.
        radius: f32,
        /// RGB color.
        color: [f32; 3],
        /// Covalent or hydrogen bond.
        kind: BondKind,
    },
}

impl Mesh {
    /// Sphere for an atom, colored from the palette.
    #[must_use]
    pub fn from_atom(atom: &Atom, colors: &ColorOptions) -> Self {
        Self::Sphere {
            center: atom.position,
            radius: atom.radius,
            color: colors.element(atom.element),
            element: atom.element,
        }
    }

    /// Cylinder for a bond, colored and sized by bond kind.
    #[must_use]
    pub fn from_bond(bond: &Bond, colors: &ColorOptions) -> Self {
        let (radius, color) = match bond.kind {
            BondKind::Covalent => (BOND_RADIUS, colors.bond),
            BondKind::HydrogenBond => (HBOND_RADIUS, colors.hydrogen_bond),
        };
        Self::Cylinder {
            midpoint: bond.midpoint(),
            length: bond.length(),
            orientation: bond.orientation(),
            radius,
            color,
            kind: bond.kind,
        }
    }

    /// Whether this is an atom sphere.
    #[must_use]
    pub fn is_sphere(&self) -> bool {
        matches!(self, Self::Sphere { .. })
    }

    /// World-space endpoints of a cylinder; `None` for spheres.
    #[must_use]
    pub fn cylinder_endpoints(&self) -> Option<(Vec3, Vec3)> {
        match self {
            Self::Cylinder {
                midpoint,
                length,
                orientation,
                ..
            } => {
                let half = *orientation * Vec3::Y * (*length * 0.5);
                Some((*midpoint - half, *midpoint + half))
            }
            Self::Sphere { .. } => None,
        }
    }
}

/// Meshes for a whole molecule: every atom sphere, then every bond
/// cylinder, in group order.
#[must_use]
pub fn meshes_for(group: &MoleculeGroup, colors: &ColorOptions) -> Vec<Mesh> {
    group
        .atoms()
        .iter()
        .map(|atom| Mesh::from_atom(atom, colors))
        .chain(group.bonds().iter().map(|bond| Mesh::from_bond(bond, colors)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecules::MoleculeKind;

    #[test]
    fn cylinder_spans_bond_endpoints() {
        let group = MoleculeKind::Glucose.build();
        let colors = ColorOptions::default();
        for bond in group.bonds() {
            let mesh = Mesh::from_bond(bond, &colors);
            let (a, b) = mesh.cylinder_endpoints().unwrap();
            assert!((a - bond.start).length() < 1e-4);
            assert!((b - bond.end).length() < 1e-4);
        }
    }

    #[test]
    fn hydrogen_bonds_use_thin_palette_cylinders() {
        let group = MoleculeKind::AlphaHelix.build();
        let colors = ColorOptions::default();
        let hbond = group.hydrogen_bonds().next().unwrap();
        assert!(matches!(
            Mesh::from_bond(hbond, &colors),
            Mesh::Cylinder { radius, color, .. }
                if radius == HBOND_RADIUS && color == colors.hydrogen_bond
        ));
    }

    #[test]
    fn one_mesh_per_atom_and_bond() {
        let group = MoleculeKind::Atp.build();
        let meshes = meshes_for(&group, &ColorOptions::default());
        assert_eq!(meshes.len(), group.atom_count() + group.bond_count());
        let spheres = meshes.iter().filter(|m| m.is_sphere()).count();
        assert_eq!(spheres, group.atom_count());
    }
}
