//! Sugar rings: glucose (pyranose) and fructose (furanose).

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::{outward, ring_center};
use crate::geometry::construct::{branch, radial_substituent, ring};
use crate::geometry::{AtomId, Element, MoleculeGroup};

const PYRANOSE_RADIUS: f32 = 1.5;
const FURANOSE_RADIUS: f32 = 1.3;
const HYDROXYL_DISTANCE: f32 = 1.0;

/// Hydroxyl oxygen radially outward from a ring carbon, plus its hydrogen
/// tilted alternately above/below the ring plane.
fn hydroxyl(
    group: &mut MoleculeGroup,
    center: Vec3,
    carbon: AtomId,
    up: bool,
) -> AtomId {
    let o = radial_substituent(
        group,
        center,
        carbon,
        Element::O,
        HYDROXYL_DISTANCE,
    );
    let tilt = if up { Vec3::Z } else { Vec3::NEG_Z };
    let dir = outward(group, center, o);
    let _ = branch(group, o, &[(Element::H, dir * 0.55 + tilt * 0.55)]);
    o
}

/// Exocyclic CH2OH: carbon radially out from `ring_atom`, hydroxyl O
/// lifted out of the ring plane.
fn hydroxymethyl(group: &mut MoleculeGroup, center: Vec3, ring_atom: AtomId) {
    let c = radial_substituent(group, center, ring_atom, Element::C, 1.2);
    let dir = outward(group, center, c);
    let o = group.attach(
        c,
        Element::O,
        group.position(c) + dir * 0.9 + Vec3::Z * 0.6,
    );
    let _ = branch(group, o, &[(Element::H, dir * 0.6 - Vec3::Z * 0.2)]);
}

/// β-D-glucopyranose: six-membered ring (O5, C1..C5), hydroxyls on
/// C1..C4, CH2OH on C5.
#[must_use]
pub fn glucose() -> MoleculeGroup {
    let mut group = MoleculeGroup::new("glucose");
    let ids = ring(
        &mut group,
        Vec3::ZERO,
        PYRANOSE_RADIUS,
        &[
            Element::O,
            Element::C,
            Element::C,
            Element::C,
            Element::C,
            Element::C,
        ],
        0.0,
    );
    let center = ring_center(&group, &ids);
    for (k, &carbon) in ids[1..5].iter().enumerate() {
        let _ = hydroxyl(&mut group, center, carbon, k % 2 == 0);
    }
    hydroxymethyl(&mut group, center, ids[5]);
    group
}

/// β-D-fructofuranose: five-membered ring (O5, C2..C5), the anomeric C2
/// carrying both a hydroxyl and CH2OH (C1), CH2OH (C6) on C5.
#[must_use]
pub fn fructose() -> MoleculeGroup {
    let mut group = MoleculeGroup::new("fructose");
    let ids = ring(
        &mut group,
        Vec3::ZERO,
        FURANOSE_RADIUS,
        &[Element::O, Element::C, Element::C, Element::C, Element::C],
        FRAC_PI_2,
    );
    let center = ring_center(&group, &ids);

    // Anomeric carbon: OH below the ring, C1 above it.
    let c2 = ids[1];
    let dir = outward(&group, center, c2);
    let attached = branch(
        &mut group,
        c2,
        &[
            (Element::O, dir * 0.8 - Vec3::Z * 0.6),
            (Element::C, dir * 0.8 + Vec3::Z * 0.8),
        ],
    );
    let _ = branch(&mut group, attached[0], &[(Element::H, dir * 0.6)]);
    let o1 = group.attach(
        attached[1],
        Element::O,
        group.position(attached[1]) + dir * 0.9 + Vec3::Z * 0.4,
    );
    let _ = branch(&mut group, o1, &[(Element::H, Vec3::Z * 0.7)]);

    let _ = hydroxyl(&mut group, center, ids[2], true);
    let _ = hydroxyl(&mut group, center, ids[3], false);
    hydroxymethyl(&mut group, center, ids[4]);
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BondKind;

    #[test]
    fn glucose_has_pyranose_composition() {
        let group = glucose();
        let count = |element| {
            group.atoms().iter().filter(|a| a.element == element).count()
        };
        assert_eq!(count(Element::C), 6);
        assert_eq!(count(Element::O), 6);
        assert!(group.validate().is_empty());
    }

    #[test]
    fn glucose_ring_closes() {
        let group = glucose();
        // O5 (atom 0) bonds to both C1 and C5.
        let o5 = group.atoms()[0].position;
        let ring_bonds = group
            .bonds()
            .iter()
            .filter(|b| b.kind == BondKind::Covalent)
            .filter(|b| b.start == o5 || b.end == o5)
            .count();
        assert_eq!(ring_bonds, 2);
    }

    #[test]
    fn fructose_has_furanose_composition() {
        let group = fructose();
        let count = |element| {
            group.atoms().iter().filter(|a| a.element == element).count()
        };
        assert_eq!(count(Element::C), 6);
        assert_eq!(count(Element::O), 6);
        assert!(group.validate().is_empty());
    }
}
