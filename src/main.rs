//! Command-line front end for the biolab core.
//!
//! ```text
//! biolab molecules
//! biolab show cholesterol --frames 120
//! biolab kinetics --km 40 --smax 400 --seed 7
//! biolab views save "Top down" atp --zoom 12
//! ```
//!
//! Output goes through the logger; set `RUST_LOG=debug` for build and
//! mesh statistics.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use biolab::camera::ViewTransform;
use biolab::kinetics::{KineticsLab, RawKineticsInput};
use biolab::options::Options;
use biolab::registry::MoleculeRegistry;
use biolab::scene::DisplayList;
use biolab::storage::{FileStore, ViewStore};
use biolab::viewer::{ViewSnapshot, ViewerSession};
use clap::{Args, Parser, Subcommand};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "biolab")]
#[command(version)]
#[command(about = "Molecule viewer core and enzyme-kinetics lab", long_about = None)]
struct Cli {
    /// TOML options preset to load instead of the defaults
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Directory for persisted saved views
    #[arg(long, global = true, default_value = ".biolab")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the molecules the viewer can show
    Molecules,
    /// Load a molecule into an offscreen display list and spin it
    Show {
        /// Molecule id (see `biolab molecules`)
        id: String,
        /// Idle-rotation frames to simulate at the reference frame rate
        #[arg(long, default_value = "0")]
        frames: u32,
    },
    /// Generate Michaelis-Menten data and fit Km/Vmax
    Kinetics(KineticsArgs),
    /// Manage saved views
    #[command(subcommand)]
    Views(ViewsCommand),
}

#[derive(Args, Debug)]
struct KineticsArgs {
    /// Enzyme concentration [E]
    #[arg(long, default_value = "1")]
    enzyme: String,
    /// Turnover number kcat
    #[arg(long, default_value = "100")]
    kcat: String,
    /// Michaelis constant Km
    #[arg(long, default_value = "50")]
    km: String,
    /// Maximum substrate concentration
    #[arg(long, default_value = "300")]
    smax: String,
    /// Substrate step
    #[arg(long, default_value = "10")]
    step: String,
    /// Disable the multiplicative noise
    #[arg(long)]
    no_noise: bool,
    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum ViewsCommand {
    /// List saved views
    List,
    /// Save a view of a molecule
    Save {
        /// View name
        name: String,
        /// Molecule id
        molecule: String,
        /// Rotation about x (radians)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        rx: f32,
        /// Rotation about y (radians)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        ry: f32,
        /// Camera distance
        #[arg(long)]
        zoom: Option<f32>,
    },
    /// Delete a saved view by id
    Delete {
        /// View id
        id: u64,
    },
    /// Delete every saved view
    Clear,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    let options = match &cli.options {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Options::default(),
    };
    let registry = MoleculeRegistry::standard();

    match cli.command {
        Commands::Molecules => list_molecules(&registry),
        Commands::Show { id, frames } => {
            show(&registry, &options, &id, frames)?;
        }
        Commands::Kinetics(args) => kinetics(&options, &args),
        Commands::Views(cmd) => views(&registry, &options, &cli.store, cmd)?,
    }
    Ok(())
}

fn list_molecules(registry: &MoleculeRegistry) {
    for entry in registry.entries() {
        log::info!(
            "{:<14} {:<22} {}",
            entry.id(),
            entry.info.title,
            entry.info.class
        );
    }
}

fn show(
    registry: &MoleculeRegistry,
    options: &Options,
    id: &str,
    frames: u32,
) -> Result<()> {
    let mut session =
        ViewerSession::with_options(registry, DisplayList::new(), options);
    if !session.load(id) {
        bail!("unknown molecule '{id}'");
    }
    let dt = 1.0 / options.viewer.reference_fps;
    for _ in 0..frames {
        session.tick(dt);
    }

    if let Some(info) = session.current() {
        log::info!("{} ({})", info.title, info.class);
        log::info!("role: {}", info.role);
        log::info!("structure: {}", info.structure);
        log::info!("feature: {}", info.feature);
    }
    let scene = session.scene();
    log::info!(
        "{} meshes: {} atoms, {} bonds",
        scene.len(),
        scene.sphere_count(),
        scene.cylinder_count()
    );
    let view = session.view();
    log::info!(
        "rotation ({:.3}, {:.3}, {:.3}) at distance {:.1}",
        view.rotation.x,
        view.rotation.y,
        view.rotation.z,
        view.distance
    );
    Ok(())
}

fn kinetics(options: &Options, args: &KineticsArgs) {
    let mut lab = KineticsLab::new(options.kinetics.clone());
    lab.set_raw(&RawKineticsInput {
        enzyme: args.enzyme.clone(),
        kcat: args.kcat.clone(),
        km: args.km.clone(),
        smax: args.smax.clone(),
        step: args.step.clone(),
    });
    lab.set_noise_enabled(!args.no_noise);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let data = lab.generate(&mut rng);
    log::info!(
        "generated {} points, true Vmax = {}, true Km = {}",
        data.len(),
        data.true_vmax,
        data.true_km
    );
    for p in &data.points {
        log::info!("S = {:>8.2}  v = {:>8.3}", p.s, p.v);
    }
    let true_vmax = data.true_vmax;

    if let Some(fit) = lab.fit() {
        log::info!(
            "fitted Km = {}, Vmax = {} (Vmax error {:.1}%), RMSE = {:.4}",
            fit.km,
            fit.vmax,
            fit.vmax_error_percent(true_vmax),
            fit.rmse
        );
    }
}

fn views(
    registry: &MoleculeRegistry,
    options: &Options,
    dir: &Path,
    cmd: ViewsCommand,
) -> Result<()> {
    let store = FileStore::open(dir)
        .with_context(|| format!("opening store {}", dir.display()))?;
    let mut views = ViewStore::open(store);

    match cmd {
        ViewsCommand::List => {
            if views.is_empty() {
                log::info!("no saved views");
            }
            for v in views.list_views() {
                log::info!(
                    "{}  {:<20} {:<14} zoom {:.1}  {}",
                    v.id,
                    v.name,
                    v.molecule,
                    v.zoom,
                    v.time
                );
            }
        }
        ViewsCommand::Save {
            name,
            molecule,
            rx,
            ry,
            zoom,
        } => {
            let mut session = ViewerSession::with_options(
                registry,
                DisplayList::new(),
                options,
            );
            let requested = ViewSnapshot {
                molecule,
                rotation: Vec3::new(rx, ry, 0.0),
                zoom: zoom.unwrap_or_else(|| {
                    ViewTransform::from_options(&options.viewer).distance
                }),
            };
            if !requested.is_finite() {
                bail!("rotation and zoom must be finite numbers");
            }
            if !session.restore(&requested) {
                bail!("unknown molecule '{}'", requested.molecule);
            }
            match views.save_view(&name, session.snapshot().as_ref())? {
                Some(id) => log::info!("saved view {id}"),
                None => bail!("view name must not be empty"),
            }
        }
        ViewsCommand::Delete { id } => {
            if !views.delete_view(id)? {
                log::warn!("no view with id {id}");
            }
        }
        ViewsCommand::Clear => views.clear_all()?,
    }
    Ok(())
}
