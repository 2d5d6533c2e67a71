//! Lipids: a saturated fatty acid, a phosphatidylcholine, and cholesterol.

use glam::Vec3;

use super::{outward, ring_center};
use crate::geometry::construct::{
    branch, carbon_links, chain, fused_ring, seeded_ring, zigzag_steps,
    RingWalk,
};
use crate::geometry::{AtomId, Element, MoleculeGroup};

/// Carbon–carbon advance along a zig-zag tail.
const TAIL_ADVANCE: f32 = 1.25;
/// Sideways zig of alternating tail atoms.
const TAIL_ZIG: f32 = 0.45;
/// Steroid ring bond length.
const RING_BOND: f32 = 1.4;
/// Chair/envelope pucker of steroid ring atoms.
const RING_PUCKER: f32 = 0.25;

/// Carboxyl oxygens (C=O and C–OH) on a carboxyl carbon.
fn carboxyl(group: &mut MoleculeGroup, carbon: AtomId, away: Vec3, side: Vec3) {
    let oxygens = branch(
        group,
        carbon,
        &[
            (Element::O, away * 0.7 + side * 1.0),
            (Element::O, away * 0.7 - side * 1.0),
        ],
    );
    let _ = branch(group, oxygens[1], &[(Element::H, away * 0.6)]);
}

/// Palmitic acid (C16:0): carboxyl head and a 15-carbon zig-zag tail.
#[must_use]
pub fn palmitic_acid() -> MoleculeGroup {
    let mut group = MoleculeGroup::new("palmitic_acid");
    let c1 = group.add_atom(Element::C, Vec3::ZERO);
    carboxyl(&mut group, c1, Vec3::NEG_X, Vec3::Y);
    let _ = chain(
        &mut group,
        c1,
        carbon_links(zigzag_steps(
            15,
            Vec3::X * TAIL_ADVANCE,
            Vec3::Y * TAIL_ZIG,
        )),
    );
    group
}

/// Ester oxygen, carbonyl carbon with its =O, and a hanging acyl tail.
fn acyl_tail(
    group: &mut MoleculeGroup,
    glycerol_carbon: AtomId,
    carbonyl_side: Vec3,
    length: usize,
) {
    let links = chain(
        group,
        glycerol_carbon,
        [(Element::O, Vec3::NEG_Y * 1.2), (Element::C, Vec3::NEG_Y * 1.2)],
    );
    let carbonyl = links[1];
    let _ = branch(group, carbonyl, &[(Element::O, carbonyl_side * 1.1 + Vec3::Y * 0.3)]);
    let _ = chain(
        group,
        carbonyl,
        carbon_links(zigzag_steps(
            length,
            Vec3::NEG_Y * TAIL_ADVANCE,
            Vec3::X * TAIL_ZIG,
        )),
    );
}

/// Phosphatidylcholine: choline–phosphate–glycerol head with two
/// saturated acyl tails hanging below.
#[must_use]
pub fn phospholipid() -> MoleculeGroup {
    let mut group = MoleculeGroup::new("phospholipid");

    let n = group.add_atom(Element::N, Vec3::new(0.0, 7.5, 0.0));
    let _ = branch(
        &mut group,
        n,
        &[
            (Element::C, Vec3::new(1.0, 0.6, 0.0)),
            (Element::C, Vec3::new(-1.0, 0.6, 0.0)),
            (Element::C, Vec3::new(0.0, 0.6, 1.0)),
        ],
    );

    let backbone = chain(
        &mut group,
        n,
        [
            (Element::C, Vec3::new(0.6, -1.2, 0.0)),
            (Element::C, Vec3::new(-0.6, -1.2, 0.0)),
            (Element::O, Vec3::new(0.6, -1.2, 0.0)),
            (Element::P, Vec3::new(-0.6, -1.2, 0.0)),
            (Element::O, Vec3::new(0.6, -1.2, 0.0)),
            (Element::C, Vec3::new(-0.6, -1.2, 0.0)),
            (Element::C, Vec3::new(-1.3, -0.6, 0.0)),
            (Element::C, Vec3::new(-1.7, 0.6, 0.0)),
        ],
    );
    let phosphorus = backbone[3];
    let _ = branch(
        &mut group,
        phosphorus,
        &[
            (Element::O, Vec3::new(-1.3, 0.2, 0.0)),
            (Element::O, Vec3::new(0.0, 0.2, 1.3)),
        ],
    );

    // sn-2 on the middle glycerol carbon, sn-1 on the terminal one.
    acyl_tail(&mut group, backbone[6], Vec3::X, 14);
    acyl_tail(&mut group, backbone[7], Vec3::NEG_X, 14);
    group
}

/// Ids of the four steroid rings (A, B, C six-membered, D five-membered).
///
/// Each ring after A starts with the two atoms it shares with the ring
/// before it.
pub(crate) fn steroid_core(group: &mut MoleculeGroup) -> [Vec<AtomId>; 4] {
    let hex = RingWalk::hexagon(Vec3::Z, RING_PUCKER);
    let pent = RingWalk::pentagon(Vec3::Z, RING_PUCKER);
    let a = seeded_ring(group, [Vec3::ZERO, Vec3::X * RING_BOND], &hex);
    let b = fused_ring(group, [a[3], a[2]], &hex);
    let c = fused_ring(group, [b[3], b[2]], &hex);
    let d = fused_ring(group, [c[3], c[2]], &pent);
    [a, b, c, d]
}

/// Cholesterol: fused 6-6-6-5 steroid nucleus, 3β-hydroxyl, angular
/// methyls at the A/B and C/D junctions, and the isooctyl side chain on
/// ring D.
#[must_use]
pub fn cholesterol() -> MoleculeGroup {
    let mut group = MoleculeGroup::new("cholesterol");
    let [a, _b, _c, d] = steroid_core(&mut group);

    // 3β-OH on the free end of ring A.
    let a_center = ring_center(&group, &a);
    let hydroxyl_dir = outward(&group, a_center, a[5]);
    let oh = branch(&mut group, a[5], &[(Element::O, hydroxyl_dir * 1.4)]);
    let _ = branch(&mut group, oh[0], &[(Element::H, hydroxyl_dir * 0.6 + Vec3::Z * 0.5)]);

    // C19 on the A/B junction, C18 on the C/D junction, both axial.
    let _ = branch(&mut group, a[3], &[(Element::C, Vec3::Z * 1.5)]);
    let _ = branch(&mut group, d[1], &[(Element::C, Vec3::Z * 1.5)]);

    // Side chain from C17, the ring-D atom next to the C18 junction.
    let c17 = d[2];
    let d_center = ring_center(&group, &d);
    let out = outward(&group, d_center, c17);
    let side = Vec3::Z.cross(out).normalize_or_zero();
    let tail = chain(
        &mut group,
        c17,
        carbon_links(zigzag_steps(5, out * 1.1, side * 0.6)),
    );
    // C21 on C20, C26/C27 on C25.
    let _ = branch(&mut group, tail[0], &[(Element::C, Vec3::Z * 1.4)]);
    let _ = branch(
        &mut group,
        tail[4],
        &[
            (Element::C, out * 0.9 + Vec3::Z * 1.0),
            (Element::C, out * 0.9 - Vec3::Z * 1.0),
        ],
    );
    group
}
