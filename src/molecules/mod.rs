//! Procedural molecule builders.
//!
//! [`MoleculeKind`] is the closed set of molecules the viewer can show.
//! Each kind dispatches to a zero-argument, deterministic builder that
//! returns a fresh, independent [`MoleculeGroup`].

mod carbohydrate;
mod lipid;
mod nucleotide;
mod protein;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use carbohydrate::{fructose, glucose};
pub use lipid::{cholesterol, palmitic_acid, phospholipid};
pub use nucleotide::atp;
pub use protein::{
    alanine, alpha_helix, alpha_helix_with, beta_sheet, HELIX_RESIDUES,
    SHEET_RESIDUES,
};

use crate::geometry::{AtomId, MoleculeGroup};

/// Every molecule the builders know how to construct.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoleculeKind {
    /// β-D-glucopyranose.
    Glucose,
    /// β-D-fructofuranose.
    Fructose,
    /// L-alanine.
    Alanine,
    /// Palmitic acid (C16:0).
    PalmiticAcid,
    /// Phosphatidylcholine.
    Phospholipid,
    /// Cholesterol.
    Cholesterol,
    /// Adenosine triphosphate.
    Atp,
    /// Alpha-helix backbone.
    AlphaHelix,
    /// Antiparallel beta sheet.
    BetaSheet,
}

impl MoleculeKind {
    /// All kinds in menu order.
    pub const ALL: [Self; 9] = [
        Self::Glucose,
        Self::Fructose,
        Self::Alanine,
        Self::PalmiticAcid,
        Self::Phospholipid,
        Self::Cholesterol,
        Self::Atp,
        Self::AlphaHelix,
        Self::BetaSheet,
    ];

    /// Stable string identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Glucose => "glucose",
            Self::Fructose => "fructose",
            Self::Alanine => "alanine",
            Self::PalmiticAcid => "palmitic_acid",
            Self::Phospholipid => "phospholipid",
            Self::Cholesterol => "cholesterol",
            Self::Atp => "atp",
            Self::AlphaHelix => "alpha_helix",
            Self::BetaSheet => "beta_sheet",
        }
    }

    /// Look up a kind by its identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    /// Build this molecule's geometry.
    #[must_use]
    pub fn build(self) -> MoleculeGroup {
        let group = match self {
            Self::Glucose => glucose(),
            Self::Fructose => fructose(),
            Self::Alanine => alanine(),
            Self::PalmiticAcid => palmitic_acid(),
            Self::Phospholipid => phospholipid(),
            Self::Cholesterol => cholesterol(),
            Self::Atp => atp(),
            Self::AlphaHelix => alpha_helix(),
            Self::BetaSheet => beta_sheet(),
        };
        log::debug!(
            "built {}: {} atoms, {} bonds",
            group.name(),
            group.atom_count(),
            group.bond_count()
        );
        group
    }
}

/// Mean position of a set of ring atoms.
pub(crate) fn ring_center(group: &MoleculeGroup, ids: &[AtomId]) -> Vec3 {
    if ids.is_empty() {
        return Vec3::ZERO;
    }
    ids.iter().map(|&id| group.position(id)).sum::<Vec3>() / ids.len() as f32
}

/// Unit vector from `center` toward an atom.
pub(crate) fn outward(group: &MoleculeGroup, center: Vec3, id: AtomId) -> Vec3 {
    (group.position(id) - center).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for kind in MoleculeKind::ALL {
            assert_eq!(MoleculeKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(MoleculeKind::from_id("caffeine"), None);
    }

    #[test]
    fn every_build_is_nonempty_and_self_consistent() {
        for kind in MoleculeKind::ALL {
            let group = kind.build();
            assert!(group.atom_count() > 0, "{kind:?} has no atoms");
            assert!(group.bond_count() > 0, "{kind:?} has no bonds");
            assert!(
                group.validate().is_empty(),
                "{kind:?}: {:?}",
                group.validate()
            );
            assert_eq!(group.name(), kind.id());
        }
    }

    #[test]
    fn builds_are_deterministic() {
        for kind in MoleculeKind::ALL {
            assert_eq!(kind.build(), kind.build(), "{kind:?} differs");
        }
    }

    #[test]
    fn every_bond_endpoint_is_an_atom_of_the_group() {
        for kind in MoleculeKind::ALL {
            let group = kind.build();
            for bond in group.bonds() {
                assert!(group.find_atom_at(bond.start).is_some());
                assert!(group.find_atom_at(bond.end).is_some());
            }
        }
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        for kind in MoleculeKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.id()));
        }
    }
}
