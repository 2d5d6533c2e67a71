//! Parametric construction kernels shared by the molecule builders.
//!
//! Every kernel appends to an existing [`MoleculeGroup`] and returns the
//! ids of the atoms it placed, so builders can chain them: a ring's atoms
//! become anchors for a fused ring, a chain's last atom becomes the
//! parent of a branch, and so on.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};

use super::element::Element;
use super::group::MoleculeGroup;
use super::primitives::AtomId;

// ---------------------------------------------------------------------------
// Simple rings
// ---------------------------------------------------------------------------

/// Place `elements.len()` atoms evenly on a circle in the XY plane and
/// bond them cyclically.
///
/// Atom `i` sits at angle `start_angle + i * 2π / n`.
pub fn ring(
    group: &mut MoleculeGroup,
    center: Vec3,
    radius: f32,
    elements: &[Element],
    start_angle: f32,
) -> Vec<AtomId> {
    let n = elements.len();
    let ids: Vec<AtomId> = elements
        .iter()
        .enumerate()
        .map(|(i, &element)| {
            let angle = start_angle + i as f32 * TAU / n as f32;
            let offset = Vec3::new(angle.cos(), angle.sin(), 0.0) * radius;
            group.add_atom(element, center + offset)
        })
        .collect();
    close_cycle(group, &ids);
    ids
}

/// Attach a substituent radially outward from a ring atom, `distance`
/// beyond it along the center→atom direction.
pub fn radial_substituent(
    group: &mut MoleculeGroup,
    center: Vec3,
    ring_atom: AtomId,
    element: Element,
    distance: f32,
) -> AtomId {
    let position = group.position(ring_atom);
    let outward = (position - center).normalize_or_zero();
    group.attach(ring_atom, element, position + outward * distance)
}

fn close_cycle(group: &mut MoleculeGroup, ids: &[AtomId]) {
    for pair in ids.windows(2) {
        group.add_bond(pair[0], pair[1]);
    }
    if let (Some(&first), Some(&last)) = (ids.first(), ids.last()) {
        if ids.len() > 2 {
            group.add_bond(last, first);
        }
    }
}

// ---------------------------------------------------------------------------
// Fused rings
// ---------------------------------------------------------------------------

static CARBON_RING: [Element; 6] = [Element::C; 6];

/// Parameters of an anchor-based ring walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingWalk<'a> {
    /// Total ring size, anchors included.
    pub size: usize,
    /// Axis the bond direction is rotated about at each step.
    pub normal: Vec3,
    /// Alternating displacement along `normal` for the new atoms.
    pub pucker: f32,
    /// Element per ring position; missing positions are carbon.
    pub elements: &'a [Element],
}

impl<'a> RingWalk<'a> {
    /// A six-membered carbon ring (60° turns).
    #[must_use]
    pub fn hexagon(normal: Vec3, pucker: f32) -> Self {
        Self {
            size: 6,
            normal,
            pucker,
            elements: &CARBON_RING,
        }
    }

    /// A five-membered carbon ring (72° turns).
    #[must_use]
    pub fn pentagon(normal: Vec3, pucker: f32) -> Self {
        Self {
            size: 5,
            normal,
            pucker,
            elements: &CARBON_RING[..5],
        }
    }

    /// Same walk with heteroatoms at the given ring positions.
    #[must_use]
    pub fn with_elements(self, elements: &'a [Element]) -> Self {
        Self { elements, ..self }
    }

    /// Element at ring position `k`.
    #[must_use]
    pub fn element(&self, k: usize) -> Element {
        self.elements.get(k).copied().unwrap_or(Element::C)
    }

    /// Exterior turn angle in radians: 2π / size.
    #[must_use]
    pub fn turn_angle(&self) -> f32 {
        TAU / self.size as f32
    }
}

/// Build a ring starting from two existing atoms.
///
/// The first bond direction is `anchors[0] → anchors[1]`; each further
/// atom advances by the same bond length after rotating the direction by
/// [`RingWalk::turn_angle`] about the walk normal. New atoms alternate a
/// `±pucker` offset along the normal. The last atom is bonded back to
/// `anchors[0]`.
///
/// The returned ids start with the two anchors. To fuse another ring onto
/// edge `(ids[k], ids[k + 1])`, pass `[ids[k + 1], ids[k]]` as its anchors
/// so the new ring grows on the far side of the shared edge.
pub fn fused_ring(
    group: &mut MoleculeGroup,
    anchors: [AtomId; 2],
    walk: &RingWalk,
) -> Vec<AtomId> {
    let [first, second] = anchors;
    let normal = walk.normal.normalize_or_zero();
    let start = group.position(first);
    // Walk in the plane through the first anchor; puckered anchors would
    // otherwise tilt every step out of plane.
    let edge = (group.position(second) - start).reject_from_normalized(normal);
    let bond_length = edge.length();
    let mut direction = edge.normalize_or_zero();
    let mut cursor = start + edge;
    let turn = Quat::from_axis_angle(normal, walk.turn_angle());

    let mut ids = vec![first, second];
    for k in 2..walk.size {
        direction = turn * direction;
        cursor += direction * bond_length;
        let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
        let position = cursor + normal * walk.pucker * sign;
        let previous = ids[ids.len() - 1];
        ids.push(group.attach(previous, walk.element(k), position));
    }
    if let Some(&last) = ids.last() {
        group.add_bond(last, first);
    }
    ids
}

/// Seed a standalone ring from two fresh atoms, then walk it.
pub fn seeded_ring(
    group: &mut MoleculeGroup,
    seeds: [Vec3; 2],
    walk: &RingWalk,
) -> Vec<AtomId> {
    let a = group.add_atom(walk.element(0), seeds[0]);
    let b = group.add_atom(walk.element(1), seeds[1]);
    group.add_bond(a, b);
    fused_ring(group, [a, b], walk)
}

// ---------------------------------------------------------------------------
// Helices
// ---------------------------------------------------------------------------

/// Parametric alpha-helix backbone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixSpec {
    /// Number of residues.
    pub residues: usize,
    /// Cα distance from the helix axis.
    pub radius: f32,
    /// Axial rise per residue.
    pub rise: f32,
    /// Angular advance per residue, radians.
    pub turn: f32,
    /// Angular offset of N (behind) and C (ahead) relative to Cα.
    pub backbone_spread: f32,
    /// Axial offset of N (below) and C (above) relative to Cα.
    pub backbone_lift: f32,
}

impl Default for HelixSpec {
    fn default() -> Self {
        Self {
            residues: 12,
            radius: 2.3,
            rise: 1.5,
            turn: 100_f32.to_radians(),
            backbone_spread: 25_f32.to_radians(),
            backbone_lift: 0.5,
        }
    }
}

/// Backbone atoms of one helix residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackboneResidue {
    /// Amide nitrogen.
    pub n: AtomId,
    /// Alpha carbon.
    pub ca: AtomId,
    /// Carbonyl carbon.
    pub c: AtomId,
    /// Carbonyl oxygen.
    pub o: AtomId,
}

/// Residue spacing of alpha-helix backbone hydrogen bonds.
pub const HELIX_HBOND_SPAN: usize = 4;

/// Build a helical backbone with i → i−4 N···O hydrogen bonds.
pub fn helix(
    group: &mut MoleculeGroup,
    spec: &HelixSpec,
) -> Vec<BackboneResidue> {
    let point = |angle: f32, radius: f32, y: f32| {
        Vec3::new(radius * angle.cos(), y, radius * angle.sin())
    };

    let mut residues: Vec<BackboneResidue> = Vec::with_capacity(spec.residues);
    for i in 0..spec.residues {
        let angle = i as f32 * spec.turn;
        let y = i as f32 * spec.rise;

        let ca = group.add_atom(Element::C, point(angle, spec.radius, y));
        let n = group.add_atom(
            Element::N,
            point(
                angle - spec.backbone_spread,
                spec.radius,
                y - spec.backbone_lift,
            ),
        );
        let c_angle = angle + spec.backbone_spread;
        let c_pos = point(c_angle, spec.radius, y + spec.backbone_lift);
        let c = group.add_atom(Element::C, c_pos);
        let outward = Vec3::new(c_angle.cos(), 0.0, c_angle.sin());
        let o = group.add_atom(Element::O, c_pos + outward * 0.8 + Vec3::Y);

        group.add_bond(n, ca);
        group.add_bond(ca, c);
        group.add_bond(c, o);
        if let Some(prev) = residues.last() {
            group.add_bond(prev.c, n);
        }
        if i >= HELIX_HBOND_SPAN {
            group.add_hydrogen_bond(n, residues[i - HELIX_HBOND_SPAN].o);
        }
        residues.push(BackboneResidue { n, ca, c, o });
    }
    residues
}

// ---------------------------------------------------------------------------
// Chains and branches
// ---------------------------------------------------------------------------

/// Zig-zag step vectors: `advance` each step, plus `zig` with alternating
/// sign so consecutive atoms do not line up.
#[must_use]
pub fn zigzag_steps(count: usize, advance: Vec3, zig: Vec3) -> Vec<Vec3> {
    (0..count)
        .map(|k| if k % 2 == 0 { advance + zig } else { advance - zig })
        .collect()
}

/// Grow a chain from `anchor`, each atom offset from its predecessor by
/// its step vector and bonded to it.
pub fn chain(
    group: &mut MoleculeGroup,
    anchor: AtomId,
    links: impl IntoIterator<Item = (Element, Vec3)>,
) -> Vec<AtomId> {
    let mut previous = anchor;
    links
        .into_iter()
        .map(|(element, step)| {
            let position = group.position(previous) + step;
            previous = group.attach(previous, element, position);
            previous
        })
        .collect()
}

/// Carbon links for [`chain`] from plain step vectors.
pub fn carbon_links(steps: Vec<Vec3>) -> impl Iterator<Item = (Element, Vec3)> {
    steps.into_iter().map(|step| (Element::C, step))
}

/// Attach substituents at fixed offsets from a parent atom.
pub fn branch(
    group: &mut MoleculeGroup,
    parent: AtomId,
    substituents: &[(Element, Vec3)],
) -> Vec<AtomId> {
    let origin = group.position(parent);
    substituents
        .iter()
        .map(|&(element, offset)| group.attach(parent, element, origin + offset))
        .collect()
}
