//! Adenosine triphosphate: purine base, ribose, triphosphate tail.

use std::f32::consts::TAU;

use glam::Vec3;

use super::{outward, ring_center};
use crate::geometry::construct::{
    branch, chain, fused_ring, radial_substituent, ring, seeded_ring,
    RingWalk,
};
use crate::geometry::{AtomId, Element, MoleculeGroup};

const RING_BOND: f32 = 1.35;
const RIBOSE_RADIUS: f32 = 1.3;
const GLYCOSIDIC_BOND: f32 = 1.45;

/// Pyrimidine half of adenine in walk order: C4, C5, C6, N1, C2, N3.
const PYRIMIDINE: [Element; 6] = [
    Element::C,
    Element::C,
    Element::C,
    Element::N,
    Element::C,
    Element::N,
];

/// Imidazole half in walk order: C5, C4, N9, C8, N7.
const IMIDAZOLE: [Element; 5] =
    [Element::C, Element::C, Element::N, Element::C, Element::N];

/// Purine skeleton: the pyrimidine ring and the imidazole fused onto its
/// C4-C5 edge.
fn purine_rings(group: &mut MoleculeGroup) -> [Vec<AtomId>; 2] {
    let six = RingWalk::hexagon(Vec3::Z, 0.0).with_elements(&PYRIMIDINE);
    let five = RingWalk::pentagon(Vec3::Z, 0.0).with_elements(&IMIDAZOLE);

    let pyrimidine =
        seeded_ring(group, [Vec3::ZERO, Vec3::X * RING_BOND], &six);
    let imidazole = fused_ring(group, [pyrimidine[1], pyrimidine[0]], &five);
    [pyrimidine, imidazole]
}

/// Adenine; returns N9, the glycosidic nitrogen, and the imidazole
/// center.
fn adenine(group: &mut MoleculeGroup) -> (AtomId, Vec3) {
    let [pyrimidine, imidazole] = purine_rings(group);

    // 6-amino group on C6.
    let six_center = ring_center(group, &pyrimidine);
    let _ = radial_substituent(group, six_center, pyrimidine[2], Element::N, 1.35);

    (imidazole[2], ring_center(group, &imidazole))
}

/// Ribose ring oriented so C1' points back at `n9`; returns the ring ids
/// (O4', C1', C2', C3', C4') and center.
fn ribose(
    group: &mut MoleculeGroup,
    n9: AtomId,
    base_center: Vec3,
) -> (Vec<AtomId>, Vec3) {
    let away = outward(group, base_center, n9);
    let center =
        group.position(n9) + away * (GLYCOSIDIC_BOND + RIBOSE_RADIUS);
    let toward_base = -away;
    let start_angle = toward_base.y.atan2(toward_base.x) - TAU / 5.0;
    let ids = ring(
        group,
        center,
        RIBOSE_RADIUS,
        &[Element::O, Element::C, Element::C, Element::C, Element::C],
        start_angle,
    );
    group.add_bond(n9, ids[1]);

    // 2'- and 3'-hydroxyls below and above the ring plane.
    for (&carbon, tilt) in ids[2..4].iter().zip([-0.5, 0.5]) {
        let dir = outward(group, center, carbon);
        let _ = branch(group, carbon, &[(Element::O, dir * 1.0 + Vec3::Z * tilt)]);
    }
    (ids, center)
}

/// Alternating bridge/phosphorus chain from C5' with non-bridging
/// oxygens on each phosphorus.
fn triphosphate(group: &mut MoleculeGroup, c5: AtomId, away: Vec3) {
    let side = Vec3::Z.cross(away).normalize_or_zero();
    let step = |k: usize| {
        let zig = if k % 2 == 0 { side * 0.5 } else { -side * 0.5 };
        away * 1.3 + zig
    };
    let links: Vec<(Element, Vec3)> = [
        Element::O,
        Element::P,
        Element::O,
        Element::P,
        Element::O,
        Element::P,
    ]
    .into_iter()
    .enumerate()
    .map(|(k, element)| (element, step(k)))
    .collect();
    let tail = chain(group, c5, links);

    for (k, &atom) in tail.iter().enumerate() {
        if group.atom(atom).map(|a| a.element) != Some(Element::P) {
            continue;
        }
        let mut oxygens = vec![
            (Element::O, Vec3::Z * 1.4),
            (Element::O, -Vec3::Z * 1.4),
        ];
        if k + 1 == tail.len() {
            // Terminal γ-phosphate carries a third oxygen.
            oxygens.push((Element::O, away * 1.4));
        }
        let _ = branch(group, atom, &oxygens);
    }
}

/// ATP: adenine N9 glycosidically bonded to ribose C1', triphosphate
/// on C5'.
#[must_use]
pub fn atp() -> MoleculeGroup {
    let mut group = MoleculeGroup::new("atp");
    let (n9, base_center) = adenine(&mut group);
    let (sugar, sugar_center) = ribose(&mut group, n9, base_center);

    let c4 = sugar[4];
    let c5 = radial_substituent(&mut group, sugar_center, c4, Element::C, 1.4);
    let away = outward(&group, sugar_center, c5);
    triphosphate(&mut group, c5, away);
    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atp_composition() {
        let group = atp();
        let count = |element| {
            group.atoms().iter().filter(|a| a.element == element).count()
        };
        assert_eq!(count(Element::C), 10);
        assert_eq!(count(Element::N), 5);
        assert_eq!(count(Element::P), 3);
        // ribose O4', 2'-OH, 3'-OH + 3 bridging + 7 non-bridging.
        assert_eq!(count(Element::O), 13);
        assert!(group.validate().is_empty());
    }

    #[test]
    fn purine_rings_share_c4_c5_edge() {
        let mut group = MoleculeGroup::new("purine");
        let [pyrimidine, imidazole] = purine_rings(&mut group);
        assert_eq!((pyrimidine.len(), imidazole.len()), (6, 5));
        assert_eq!(&imidazole[..2], &[pyrimidine[1], pyrimidine[0]]);
        // 6 + 3 atoms, 6 + 4 ring bonds.
        assert_eq!(group.atom_count(), 9);
        assert_eq!(group.bond_count(), 10);
        assert!(group.validate().is_empty());
    }

    #[test]
    fn glycosidic_bond_links_base_to_sugar() {
        let group = atp();
        let lengths: Vec<f32> = group
            .bonds()
            .iter()
            .filter(|b| {
                let start = group.find_atom_at(b.start).and_then(|id| group.atom(id));
                let end = group.find_atom_at(b.end).and_then(|id| group.atom(id));
                matches!(
                    (start.map(|a| a.element), end.map(|a| a.element)),
                    (Some(Element::N), Some(Element::C))
                ) && b.length() > 1.44
            })
            .map(|b| b.length())
            .collect();
        assert_eq!(lengths.len(), 1);
        assert!((lengths[0] - GLYCOSIDIC_BOND).abs() < 1e-3);
    }
}
