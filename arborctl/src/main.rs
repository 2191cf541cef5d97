mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use arbor_config::{ArborConfig, ConfigLoader, ConfigLoaderOptions, ConfigSource};
use arbor_core::{FolderStore, sample};
use arbor_model::{Folder, OrgId};
use clap::{Args as ClapArgs, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::render::Format;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "arborctl", version)]
#[command(about = "Inspect and reorganize path-based folder hierarchies")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct GlobalArgs {
    /// Configuration file (TOML or JSON); overrides ARBOR_CONFIG_PATH
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Alternate .env file
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// JSON folder collection to operate on (overrides config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Reject duplicate names, orphans and inconsistent paths on load
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random sample forest
    Generate {
        /// Write the generated collection to this file
        #[arg(long)]
        out: Option<PathBuf>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Number of organizations (overrides config)
        #[arg(long)]
        orgs: Option<usize>,
    },
    /// List every folder of one organization
    List {
        /// Organization id; defaults to the configured organization
        #[arg(long)]
        org: Option<OrgId>,
    },
    /// List the descendants of a folder
    Children {
        /// Folder name to anchor the query on
        #[arg(long)]
        name: String,
        /// Organization id; defaults to the configured organization
        #[arg(long)]
        org: Option<OrgId>,
    },
    /// Move a folder and its subtree below another folder
    Move {
        /// Folder to move
        #[arg(long)]
        name: String,
        /// New parent folder
        #[arg(long)]
        to: String,
        /// Resolve both names only within this organization
        #[arg(long)]
        org: Option<OrgId>,
        /// Write the resulting collection to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.global)?;
    run(cli, config)
}

fn load_config(args: &GlobalArgs) -> Result<ArborConfig> {
    let load = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: args.config.clone(),
        env_file: args.env_file.clone(),
        search_dir: None,
    })
    .load()
    .context("failed to load configuration")?;

    let mut config = load.config;
    if let Some(data) = &args.data {
        config.data_file = Some(data.clone());
    }
    if args.strict {
        config.strict = true;
    }

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_level))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if load.env_file_loaded {
        debug!("loaded .env file");
    }
    match &load.source {
        ConfigSource::Default => debug!("using default configuration"),
        ConfigSource::EnvInline => {
            debug!("configuration loaded from inline environment json")
        }
        ConfigSource::Explicit(path)
        | ConfigSource::EnvPath(path)
        | ConfigSource::File(path) => {
            debug!(path = %path.display(), "configuration loaded from file")
        }
    }

    Ok(config)
}

fn run(cli: Cli, config: ArborConfig) -> Result<()> {
    let format = cli.global.format;

    match cli.command {
        Command::Generate { out, seed, orgs } => {
            let mut spec = config.sample.clone();
            if let Some(orgs) = orgs {
                spec.orgs = orgs;
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let folders = sample::generate(&spec, &mut rng)
                .context("failed to generate sample folders")?;
            info!(count = folders.len(), "generated sample folders");

            write_if_requested(out.as_deref().or(config.output_file.as_deref()), &folders)?;
            print!("{}", render::render(&folders, format)?);
        }
        Command::List { org } => {
            let store = open_store(&config)?;
            let org = org.unwrap_or(config.default_org);
            let folders = store.folders_by_org(org);
            print!("{}", render::render(&folders, format)?);
        }
        Command::Children { name, org } => {
            let store = open_store(&config)?;
            let org = org.unwrap_or(config.default_org);
            let folders = store
                .children_of(org, &name)
                .with_context(|| format!("failed to list children of '{name}'"))?;
            print!("{}", render::render(&folders, format)?);
        }
        Command::Move { name, to, org, out } => {
            let store = open_store(&config)?;
            let folders = match org {
                Some(org) => store.move_within_org(org, &name, &to),
                None => store.move_folder(&name, &to),
            }
            .with_context(|| format!("failed to move '{name}' to '{to}'"))?;

            write_if_requested(out.as_deref().or(config.output_file.as_deref()), &folders)?;
            print!("{}", render::render(&folders, format)?);
        }
    }

    Ok(())
}

/// Load the configured data file, or fall back to the built-in four-folder
/// example under the default organization.
fn open_store(config: &ArborConfig) -> Result<FolderStore> {
    let folders = match &config.data_file {
        Some(path) => sample::load_json(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => {
            debug!(org_id = %config.default_org, "no data file configured, using example folders");
            sample::fixture(config.default_org)
                .context("failed to build example folders")?
        }
    };

    if config.strict {
        FolderStore::try_new(folders).context("folder collection failed validation")
    } else {
        Ok(FolderStore::new(folders))
    }
}

fn write_if_requested(path: Option<&Path>, folders: &[Folder]) -> Result<()> {
    if let Some(path) = path {
        sample::write_json(path, folders)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), count = folders.len(), "wrote folders");
    }
    Ok(())
}
