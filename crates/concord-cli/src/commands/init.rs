//! concord init command

use std::path::{Path, PathBuf};

use clap::Args;
use concord_usecase::bootstrap;
use tracing::info;

use super::seed::print_report;
use crate::config::{ConcordConfig, IdStrategy};
use crate::output::Output;

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,

    /// How new record ids are chosen
    #[arg(long, value_enum)]
    pub id_strategy: Option<IdStrategy>,

    /// Do not seed default accounts
    #[arg(long)]
    pub no_seed: bool,
}

impl InitCommand {
    pub fn run(
        &self,
        config_path: &Path,
        data_dir: Option<&Path>,
        output: &Output,
    ) -> anyhow::Result<()> {
        if config_path.exists() && !self.force {
            output.warn(&format!(
                "{} already exists, keeping it (use --force to overwrite)",
                config_path.display()
            ));
        } else {
            let mut config = ConcordConfig::default();
            if let Some(dir) = data_dir {
                config.data_dir = PathBuf::from(dir);
            }
            if let Some(strategy) = self.id_strategy {
                config.id_strategy = strategy;
            }
            config.seed_defaults = !self.no_seed;
            config.save(config_path)?;
            info!(path = %config_path.display(), "Wrote configuration");
            output.success(&format!("Wrote {}", config_path.display()));
        }

        let config = ConcordConfig::load(config_path)?;
        let mut store = config.open_store()?;
        output.success(&format!("Data directory {}", config.data_dir.display()));

        if config.seed_defaults {
            let report = bootstrap(&mut store)?;
            print_report(output, &report)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_and_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concord.json");

        InitCommand {
            force: false,
            id_strategy: Some(IdStrategy::Sequential),
            no_seed: false,
        }
        .run(&path, None, &Output::new(true))
        .unwrap();

        let config = ConcordConfig::load(&path).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(dir.path().join("data/concord.users.json").is_file());
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concord.yaml");
        std::fs::write(&path, "seedDefaults: false\nkeyPrefix: mine.\n").unwrap();

        InitCommand {
            force: false,
            id_strategy: Some(IdStrategy::Sequential),
            no_seed: false,
        }
        .run(&path, None, &Output::new(true))
        .unwrap();

        let config = ConcordConfig::load(&path).unwrap();
        assert_eq!(config.key_prefix, "mine.");
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(!dir.path().join("data/mine.users.json").exists());
    }
}
