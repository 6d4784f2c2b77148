mod display;
mod import;
mod interactive;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::display::{display_import_summary, display_json, display_view};
use laroulette_core::config::{Theme, TrackerConfig, load_config, save_config};
use laroulette_core::tracker::Tracker;

#[derive(Parser)]
#[command(name = "laroulette", about = "Suivi des séries et retards à la roulette")]
struct Cli {
    /// Fichier de configuration JSON
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Taille maximale de l'historique (remplace la configuration)
    #[arg(long, global = true)]
    max_history: Option<usize>,

    /// Thème clair (le thème sombre est utilisé par défaut)
    #[arg(long, global = true)]
    light: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Saisir les numéros au fil des tirages (mode par défaut)
    Jouer,

    /// Calculer séries et retards pour une liste de numéros (du plus ancien au plus récent)
    Stats {
        /// Numéros sortis, 1-36
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Importer les numéros depuis un fichier CSV (un numéro par ligne, `;` comme séparateur)
    Import {
        /// Chemin vers le fichier CSV
        #[arg(short, long)]
        file: PathBuf,

        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Écrire une configuration par défaut
    Config {
        /// Fichier de sortie
        #[arg(short, long, default_value = "laroulette.json")]
        output: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<TrackerConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TrackerConfig::default(),
    };
    if let Some(max_history) = cli.max_history {
        config.max_history = max_history;
    }
    if cli.light {
        config.theme = Theme::Light;
    }
    config.validate()?;
    tracing::debug!(?config, "configuration chargée");
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.command {
        None | Some(Command::Jouer) => cmd_play(&config),
        Some(Command::Stats { numbers, json }) => cmd_stats(&config, &numbers, json),
        Some(Command::Import { file, json }) => cmd_import(&config, &file, json),
        Some(Command::Config { output }) => cmd_config(&config, &output),
    }
}

fn cmd_play(config: &TrackerConfig) -> Result<()> {
    let mut tracker = Tracker::new(config);
    interactive::run_interactive(&mut tracker)
}

fn cmd_stats(config: &TrackerConfig, numbers: &[i64], json: bool) -> Result<()> {
    let mut tracker = Tracker::new(config);
    for &n in numbers {
        tracker
            .add(n)
            .with_context(|| format!("Numéro refusé ({} numéros déjà pris en compte)", tracker.history().len()))?;
    }
    render(&tracker, config, json)
}

fn cmd_import(config: &TrackerConfig, file: &Path, json: bool) -> Result<()> {
    let mut tracker = Tracker::new(config);
    let result = import::import_csv(&mut tracker, file)?;
    if !json {
        display_import_summary(&result);
    }
    render(&tracker, config, json)
}

fn cmd_config(config: &TrackerConfig, output: &Path) -> Result<()> {
    save_config(config, output)?;
    println!("Configuration écrite dans {}", output.display());
    Ok(())
}

fn render(tracker: &Tracker, config: &TrackerConfig, json: bool) -> Result<()> {
    let view = tracker.view();
    if json {
        display_json(&view)
    } else {
        display_view(&view, config.max_history);
        Ok(())
    }
}
