// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Core of a biochemistry learning app: procedural 3D molecule geometry,
//! an interactive viewer session, saved views, and an enzyme-kinetics lab.
//!
//! Nothing in here talks to a GPU or a browser. Molecule builders produce
//! plain atom/bond groups, the viewer session drives an abstract
//! [`scene::Scene`], and persistence goes through an injected
//! [`storage::KeyValueStore`].
//!
//! # Key entry points
//!
//! - [`registry::MoleculeRegistry`] - molecule id to builder and metadata
//! - [`viewer::ViewerSession`] - load/rotate/zoom/auto-spin state machine
//! - [`storage::ViewStore`] - persisted named views
//! - [`kinetics::KineticsLab`] - Michaelis-Menten data generation and
//!   grid-search fitting
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Data flow
//!
//! The registry resolves an id to a builder, the builder returns an
//! immutable [`geometry::MoleculeGroup`], and the viewer session turns it
//! into scene meshes, disposing the previous molecule's meshes first.
//! Pointer input only touches the [`camera::ViewTransform`], never the
//! geometry.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod input;
pub mod kinetics;
pub mod molecules;
pub mod options;
pub mod registry;
pub mod scene;
pub mod storage;
pub mod viewer;

pub use error::LabError;
