//! Molecule registry: identifier → builder + descriptive metadata.
//!
//! Constructed once at startup and treated as immutable afterwards; pass
//! it by reference to whatever needs to resolve molecule ids.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::geometry::MoleculeGroup;
use crate::molecules::MoleculeKind;

/// Descriptive text shown next to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoleculeInfo {
    /// Display title.
    pub title: &'static str,
    /// Molecule class (carbohydrate, lipid, ...).
    pub class: &'static str,
    /// Biochemical role.
    pub role: &'static str,
    /// Short structural descriptor.
    pub structure: &'static str,
    /// Notable feature.
    pub feature: &'static str,
}

/// One registry row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Which builder to run.
    pub kind: MoleculeKind,
    /// Metadata for the info panel.
    pub info: MoleculeInfo,
}

impl RegistryEntry {
    /// Unique string identifier.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Run this entry's builder.
    #[must_use]
    pub fn build(&self) -> MoleculeGroup {
        self.kind.build()
    }
}

/// Ordered, id-indexed collection of registry entries.
#[derive(Debug, Clone)]
pub struct MoleculeRegistry {
    entries: Vec<RegistryEntry>,
    index: FxHashMap<&'static str, usize>,
}

impl MoleculeRegistry {
    /// Registry from explicit entries. Later duplicates of an id are
    /// dropped.
    #[must_use]
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut index = FxHashMap::default();
        for entry in entries {
            if index.contains_key(entry.id()) {
                log::warn!("duplicate molecule id '{}' ignored", entry.id());
                continue;
            }
            let _ = index.insert(entry.id(), kept.len());
            kept.push(entry);
        }
        Self {
            entries: kept,
            index,
        }
    }

    /// Every molecule the builders support, in menu order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(
            MoleculeKind::ALL
                .into_iter()
                .map(|kind| RegistryEntry {
                    kind,
                    info: standard_info(kind),
                })
                .collect(),
        )
    }

    /// Look up an entry. `None` means "molecule not found"; callers treat
    /// it as a no-op.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RegistryEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Identifiers in stable menu order.
    #[must_use]
    pub fn list_ids(&self) -> Vec<&'static str> {
        self.entries.iter().map(RegistryEntry::id).collect()
    }

    /// Entries in menu order.
    #[must_use]
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Build the molecule registered under `id`.
    #[must_use]
    pub fn build(&self, id: &str) -> Option<MoleculeGroup> {
        self.get(id).map(RegistryEntry::build)
    }

    /// Number of registered molecules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MoleculeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_info(kind: MoleculeKind) -> MoleculeInfo {
    match kind {
        MoleculeKind::Glucose => MoleculeInfo {
            title: "Glucose",
            class: "Carbohydrate (monosaccharide)",
            role: "Primary fuel for glycolysis and cellular respiration",
            structure: "Six-membered pyranose ring",
            feature: "Hydroxyl groups on every ring carbon",
        },
        MoleculeKind::Fructose => MoleculeInfo {
            title: "Fructose",
            class: "Carbohydrate (monosaccharide)",
            role: "Fruit sugar; enters glycolysis as fructose-6-phosphate",
            structure: "Five-membered furanose ring",
            feature: "Ketose with CH2OH on both sides of the anomeric carbon",
        },
        MoleculeKind::Alanine => MoleculeInfo {
            title: "Alanine",
            class: "Amino acid",
            role: "Protein building block; alanine cycle nitrogen carrier",
            structure: "Chiral alpha carbon with methyl side chain",
            feature: "Smallest chiral amino acid",
        },
        MoleculeKind::PalmiticAcid => MoleculeInfo {
            title: "Palmitic Acid",
            class: "Lipid (saturated fatty acid)",
            role: "Energy storage; end product of fatty acid synthase",
            structure: "16-carbon zig-zag chain with carboxyl head",
            feature: "No double bonds, so the tail packs tightly",
        },
        MoleculeKind::Phospholipid => MoleculeInfo {
            title: "Phosphatidylcholine",
            class: "Lipid (glycerophospholipid)",
            role: "Major component of cell membranes",
            structure: "Choline-phosphate-glycerol head, two acyl tails",
            feature: "Amphipathic: polar head, hydrophobic tails",
        },
        MoleculeKind::Cholesterol => MoleculeInfo {
            title: "Cholesterol",
            class: "Lipid (sterol)",
            role: "Membrane fluidity buffer; steroid hormone precursor",
            structure: "Four fused rings (6-6-6-5) with isooctyl tail",
            feature: "Rigid planar ring system with a single hydroxyl",
        },
        MoleculeKind::Atp => MoleculeInfo {
            title: "ATP",
            class: "Nucleotide",
            role: "Universal energy currency of the cell",
            structure: "Adenine + ribose + triphosphate chain",
            feature: "High-energy phosphoanhydride bonds",
        },
        MoleculeKind::AlphaHelix => MoleculeInfo {
            title: "Alpha Helix",
            class: "Protein secondary structure",
            role: "Most common protein secondary structure",
            structure: "Right-handed coil, 3.6 residues per turn",
            feature: "Backbone hydrogen bonds from residue i to i-4",
        },
        MoleculeKind::BetaSheet => MoleculeInfo {
            title: "Beta Sheet",
            class: "Protein secondary structure",
            role: "Rigid structural sheets in fibrous and globular proteins",
            structure: "Two antiparallel extended strands",
            feature: "Interstrand hydrogen bonds between facing residues",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_lists_every_kind_in_order() {
        let registry = MoleculeRegistry::standard();
        let expected: Vec<&str> =
            MoleculeKind::ALL.iter().map(|k| k.id()).collect();
        assert_eq!(registry.list_ids(), expected);
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let registry = MoleculeRegistry::standard();
        assert!(registry.get("unobtainium").is_none());
        assert!(registry.build("unobtainium").is_none());
    }

    #[test]
    fn get_returns_matching_metadata() {
        let registry = MoleculeRegistry::standard();
        let entry = registry.get("cholesterol").unwrap();
        assert_eq!(entry.kind, MoleculeKind::Cholesterol);
        assert_eq!(entry.info.title, "Cholesterol");
    }

    #[test]
    fn builds_are_independent() {
        let registry = MoleculeRegistry::standard();
        let a = registry.build("glucose").unwrap();
        let b = registry.build("glucose").unwrap();
        assert_eq!(a, b);
        assert!(!std::ptr::eq(a.atoms().as_ptr(), b.atoms().as_ptr()));
    }

    #[test]
    fn duplicate_ids_keep_first_entry() {
        let entry = RegistryEntry {
            kind: MoleculeKind::Atp,
            info: standard_info(MoleculeKind::Atp),
        };
        let mut dup = entry.clone();
        dup.info.title = "Other";
        let registry = MoleculeRegistry::new(vec![entry, dup]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("atp").unwrap().info.title, "ATP");
    }
}
