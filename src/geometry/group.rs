use glam::Vec3;

use super::element::Element;
use super::primitives::{
    make_atom, make_bond, Atom, AtomId, Bond, BondKind, MIN_BOND_LENGTH,
};

/// Covalent bond cylinder color.
pub const BOND_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// Hydrogen-bond cylinder color (distinct from covalent bonds).
pub const HBOND_COLOR: [f32; 3] = [0.0, 0.75, 1.0];

/// Two atoms closer than this are considered coincident.
pub const COINCIDENT_TOLERANCE: f32 = 1e-3;

/// Structural defect reported by [`MoleculeGroup::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryIssue {
    /// A bond endpoint does not sit on any atom of the group.
    DanglingBond(usize),
    /// A bond shorter than [`MIN_BOND_LENGTH`].
    ZeroLengthBond(usize),
    /// Two distinct atoms share a position.
    CoincidentAtoms(AtomId, AtomId),
}

/// A built molecule: named, ordered atoms and bonds with explicit
/// coordinates.
///
/// Groups are produced by the builders in [`crate::molecules`] and never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeGroup {
    name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl MoleculeGroup {
    /// Create an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            atoms: Vec::new(),
            bonds: Vec::new(),
        }
    }

    /// Group name (the molecule id it was built for).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Atoms in insertion order.
    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Bonds in insertion order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Number of atoms.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds (covalent and hydrogen).
    #[must_use]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Read access to one atom.
    #[must_use]
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id.0)
    }

    /// Position of an atom created by this group.
    #[must_use]
    pub fn position(&self, id: AtomId) -> Vec3 {
        self.atoms[id.0].position
    }

    // -- Construction --

    /// Add an atom with the element's default color and radius.
    pub fn add_atom(&mut self, element: Element, position: Vec3) -> AtomId {
        self.push_atom(make_atom(
            position,
            element,
            element.default_color(),
            element.display_radius(),
        ))
    }

    /// Add a fully specified atom.
    pub fn push_atom(&mut self, atom: Atom) -> AtomId {
        let id = AtomId(self.atoms.len());
        self.atoms.push(atom);
        id
    }

    /// Bond two atoms of this group.
    pub fn add_bond(&mut self, a: AtomId, b: AtomId) {
        self.push_bond(a, b, BondKind::Covalent);
    }

    /// Draw an illustrative hydrogen bond between two atoms.
    pub fn add_hydrogen_bond(&mut self, donor: AtomId, acceptor: AtomId) {
        self.push_bond(donor, acceptor, BondKind::HydrogenBond);
    }

    /// Add an atom at `position` and bond it to `parent`.
    pub fn attach(
        &mut self,
        parent: AtomId,
        element: Element,
        position: Vec3,
    ) -> AtomId {
        let id = self.add_atom(element, position);
        self.add_bond(parent, id);
        id
    }

    fn push_bond(&mut self, a: AtomId, b: AtomId, kind: BondKind) {
        let color = match kind {
            BondKind::Covalent => BOND_COLOR,
            BondKind::HydrogenBond => HBOND_COLOR,
        };
        match make_bond(self.position(a), self.position(b), color) {
            Some(mut bond) => {
                bond.kind = kind;
                self.bonds.push(bond);
            }
            None => log::warn!(
                "{}: skipped zero-length bond between atoms {} and {}",
                self.name,
                a.0,
                b.0
            ),
        }
    }

    // -- Queries --

    /// Hydrogen bonds only.
    pub fn hydrogen_bonds(&self) -> impl Iterator<Item = &Bond> {
        self.bonds.iter().filter(|b| b.is_hydrogen_bond())
    }

    /// Covalent bonds only.
    pub fn covalent_bonds(&self) -> impl Iterator<Item = &Bond> {
        self.bonds.iter().filter(|b| !b.is_hydrogen_bond())
    }

    /// First atom within [`COINCIDENT_TOLERANCE`] of `position`.
    #[must_use]
    pub fn find_atom_at(&self, position: Vec3) -> Option<AtomId> {
        self.atoms
            .iter()
            .position(|a| a.position.distance(position) < COINCIDENT_TOLERANCE)
            .map(AtomId)
    }

    /// Mean atom position (origin for an empty group).
    #[must_use]
    pub fn centroid(&self) -> Vec3 {
        if self.atoms.is_empty() {
            return Vec3::ZERO;
        }
        self.atoms.iter().map(|a| a.position).sum::<Vec3>()
            / self.atoms.len() as f32
    }

    /// Radius of the sphere around [`centroid`](Self::centroid) that
    /// encloses every atom sphere.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        let centroid = self.centroid();
        self.atoms
            .iter()
            .map(|a| a.position.distance(centroid) + a.radius)
            .fold(0.0_f32, f32::max)
    }

    /// Report dangling bonds, zero-length bonds and coincident atoms.
    #[must_use]
    pub fn validate(&self) -> Vec<GeometryIssue> {
        let mut issues = Vec::new();
        for (i, bond) in self.bonds.iter().enumerate() {
            if bond.length() < MIN_BOND_LENGTH {
                issues.push(GeometryIssue::ZeroLengthBond(i));
            }
            if self.find_atom_at(bond.start).is_none()
                || self.find_atom_at(bond.end).is_none()
            {
                issues.push(GeometryIssue::DanglingBond(i));
            }
        }
        for (i, a) in self.atoms.iter().enumerate() {
            for (j, b) in self.atoms.iter().enumerate().skip(i + 1) {
                if a.position.distance(b.position) < COINCIDENT_TOLERANCE {
                    issues.push(GeometryIssue::CoincidentAtoms(
                        AtomId(i),
                        AtomId(j),
                    ));
                }
            }
        }
        issues
    }
}
