//! Amino acids and protein secondary structure.

use glam::Vec3;

use crate::geometry::construct::{branch, helix, BackboneResidue, HelixSpec};
use crate::geometry::{AtomId, Element, MoleculeGroup};

/// Residues in the displayed helix.
pub const HELIX_RESIDUES: usize = 12;
/// Residues per strand in the displayed sheet.
pub const SHEET_RESIDUES: usize = 6;

/// Axial rise per residue along an extended strand.
const STRAND_RISE: f32 = 3.4;
/// Interstrand spacing.
const STRAND_GAP: f32 = 4.8;
/// Out-of-plane pleat of alternating Cα atoms.
const PLEAT: f32 = 0.5;

/// L-alanine: Cα with amino, carboxyl, methyl and Hα substituents.
#[must_use]
pub fn alanine() -> MoleculeGroup {
    let mut group = MoleculeGroup::new("alanine");
    let ca = group.add_atom(Element::C, Vec3::ZERO);
    let subs = branch(
        &mut group,
        ca,
        &[
            (Element::N, Vec3::new(-1.2, 0.7, 0.0)),
            (Element::C, Vec3::new(1.3, 0.6, 0.0)),
            (Element::C, Vec3::new(0.0, -0.9, 1.2)),
            (Element::H, Vec3::new(0.0, -0.6, -0.9)),
        ],
    );
    let [n, carboxyl, methyl] = [subs[0], subs[1], subs[2]];

    let _ = branch(
        &mut group,
        n,
        &[
            (Element::H, Vec3::new(-0.5, 0.7, 0.4)),
            (Element::H, Vec3::new(-0.6, 0.2, -0.7)),
        ],
    );
    let oxygens = branch(
        &mut group,
        carboxyl,
        &[
            (Element::O, Vec3::new(0.5, 1.1, 0.0)),
            (Element::O, Vec3::new(1.0, -0.8, 0.0)),
        ],
    );
    let _ = branch(&mut group, oxygens[1], &[(Element::H, Vec3::new(0.8, -0.4, 0.0))]);
    let _ = branch(
        &mut group,
        methyl,
        &[
            (Element::H, Vec3::new(0.9, -0.4, 0.4)),
            (Element::H, Vec3::new(-0.9, -0.4, 0.4)),
            (Element::H, Vec3::new(0.0, -0.5, 0.9)),
        ],
    );
    group
}

/// Alpha helix: parametric backbone, Cβ on every residue, i → i−4
/// backbone hydrogen bonds.
#[must_use]
pub fn alpha_helix() -> MoleculeGroup {
    alpha_helix_with(HELIX_RESIDUES)
}

/// Alpha helix with a chosen residue count.
#[must_use]
pub fn alpha_helix_with(residues: usize) -> MoleculeGroup {
    let mut group = MoleculeGroup::new("alpha_helix");
    let spec = HelixSpec {
        residues,
        ..HelixSpec::default()
    };
    for BackboneResidue { ca, .. } in helix(&mut group, &spec) {
        let position = group.position(ca);
        let radial = Vec3::new(position.x, 0.0, position.z).normalize_or_zero();
        let _ = branch(&mut group, ca, &[(Element::C, radial * 1.5)]);
    }
    group
}

/// One extended strand along ±X at height `y`. Carbonyls alternate
/// toward (`+toward`) and away from the partner strand.
fn strand(
    group: &mut MoleculeGroup,
    y: f32,
    direction: f32,
    origin_x: f32,
    toward: f32,
) -> Vec<BackboneResidue> {
    let mut residues: Vec<BackboneResidue> = Vec::with_capacity(SHEET_RESIDUES);
    for i in 0..SHEET_RESIDUES {
        let x = origin_x + direction * STRAND_RISE * i as f32;
        let pleat = if i % 2 == 0 { PLEAT } else { -PLEAT };
        let n = group.add_atom(Element::N, Vec3::new(x, y, 0.0));
        let ca = group.add_atom(
            Element::C,
            Vec3::new(x + direction * 1.1, y, pleat),
        );
        let c = group.add_atom(Element::C, Vec3::new(x + direction * 2.2, y, 0.0));
        let facing = if i % 2 == 0 { toward } else { -toward };
        let o = group.attach(c, Element::O, Vec3::new(x + direction * 2.2, y + facing * 1.2, 0.0));
        group.add_bond(n, ca);
        group.add_bond(ca, c);
        let _ = branch(group, ca, &[(Element::C, Vec3::Z * pleat.signum() * 1.5)]);
        if let Some(prev) = residues.last() {
            group.add_bond(prev.c, n);
        }
        residues.push(BackboneResidue { n, ca, c, o });
    }
    residues
}

/// Two-stranded antiparallel beta sheet with interstrand N···O hydrogen
/// bonds between facing residues.
#[must_use]
pub fn beta_sheet() -> MoleculeGroup {
    let mut group = MoleculeGroup::new("beta_sheet");
    let last = (SHEET_RESIDUES - 1) as f32;
    let lower = strand(&mut group, 0.0, 1.0, 0.0, 1.0);
    let upper = strand(
        &mut group,
        STRAND_GAP,
        -1.0,
        STRAND_RISE * last + 2.2,
        -1.0,
    );

    // An even residue's carbonyl faces the partner strand's amide at the
    // mirrored index.
    let pairs = |donors: &[BackboneResidue], acceptors: &[BackboneResidue]| {
        (0..SHEET_RESIDUES)
            .step_by(2)
            .map(|i| (donors[SHEET_RESIDUES - 1 - i].n, acceptors[i].o))
            .collect::<Vec<(AtomId, AtomId)>>()
    };
    let mut hbonds = pairs(&upper, &lower);
    hbonds.extend(pairs(&lower, &upper));
    for (donor, acceptor) in hbonds {
        group.add_hydrogen_bond(donor, acceptor);
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alanine_is_valid() {
        let group = alanine();
        assert_eq!(group.atom_count(), 13);
        assert_eq!(group.bond_count(), 12);
        assert!(group.validate().is_empty());
    }

    #[test]
    fn helix_hydrogen_bond_count_is_residues_minus_four() {
        for residues in 5..=16 {
            let group = alpha_helix_with(residues);
            assert_eq!(group.hydrogen_bonds().count(), residues - 4);
            assert!(group.validate().is_empty());
        }
    }

    #[test]
    fn helix_hydrogen_bonds_pair_amide_n_with_carbonyl_o() {
        let group = alpha_helix();
        for bond in group.hydrogen_bonds() {
            let donor = group.find_atom_at(bond.start).and_then(|id| group.atom(id));
            let acceptor = group.find_atom_at(bond.end).and_then(|id| group.atom(id));
            assert_eq!(donor.map(|a| a.element), Some(Element::N));
            assert_eq!(acceptor.map(|a| a.element), Some(Element::O));
        }
    }

    #[test]
    fn sheet_hydrogen_bonds_span_the_strand_gap() {
        let group = beta_sheet();
        assert_eq!(group.hydrogen_bonds().count(), SHEET_RESIDUES);
        for bond in group.hydrogen_bonds() {
            assert!((bond.start.x - bond.end.x).abs() < 1e-4);
            assert!((bond.length() - (STRAND_GAP - 1.2)).abs() < 1e-4);
        }
        assert!(group.validate().is_empty());
    }
}
