//! Settings resolution: command-line flags over the optional TOML file over
//! built-in defaults.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use snake_pit_core::PitConfig;

use crate::Cli;

const DEFAULT_ROWS: u32 = 12;
const DEFAULT_COLUMNS: u32 = 18;
const DEFAULT_SNAKES: usize = 28;

const MINI_ROWS: u32 = 3;
const MINI_COLUMNS: u32 = 3;
const MINI_SNAKES: usize = 2;

/// Contents of a `--config` file. Every table and key is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    limits: PitConfig,
    game: GameTable,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct GameTable {
    rows: Option<u32>,
    columns: Option<u32>,
    snakes: Option<usize>,
    seed: Option<u64>,
}

/// Fully resolved parameters of one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) rows: u32,
    pub(crate) columns: u32,
    pub(crate) snakes: usize,
    pub(crate) seed: u64,
    pub(crate) limits: PitConfig,
}

impl Settings {
    /// Explicit flags win, then `--mini`, then the file, then the defaults.
    pub(crate) fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let game = file.game;
        let (rows, columns, snakes) = if cli.mini {
            (MINI_ROWS, MINI_COLUMNS, MINI_SNAKES)
        } else {
            (
                game.rows.unwrap_or(DEFAULT_ROWS),
                game.columns.unwrap_or(DEFAULT_COLUMNS),
                game.snakes.unwrap_or(DEFAULT_SNAKES),
            )
        };

        Self {
            rows: cli.rows.unwrap_or(rows),
            columns: cli.columns.unwrap_or(columns),
            snakes: cli.snakes.unwrap_or(snakes),
            seed: cli.seed.or(game.seed).unwrap_or_else(rand::random),
            limits: file.limits,
        }
    }
}

/// Reads and parses a TOML config file.
pub(crate) fn load(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid config file at {}", path.display()))
}

fn parse(contents: &str) -> Result<FileConfig> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("snake-pit").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn defaults_describe_the_classic_pit() {
        let settings = Settings::resolve(&cli(&["--seed", "9"]), FileConfig::default());
        assert_eq!(
            settings,
            Settings {
                rows: 12,
                columns: 18,
                snakes: 28,
                seed: 9,
                limits: PitConfig::default(),
            }
        );
    }

    #[test]
    fn mini_flag_selects_the_small_pit() {
        let settings = Settings::resolve(&cli(&["--mini", "--seed", "1"]), FileConfig::default());
        assert_eq!((settings.rows, settings.columns, settings.snakes), (3, 3, 2));
    }

    #[test]
    fn flags_override_the_file() {
        let file = parse(
            r#"
            [limits]
            max_snakes = 50

            [game]
            rows = 5
            columns = 6
            snakes = 7
            seed = 99
            "#,
        )
        .expect("valid config");

        let settings = Settings::resolve(&cli(&["--columns", "10"]), file);

        assert_eq!(settings.rows, 5);
        assert_eq!(settings.columns, 10);
        assert_eq!(settings.snakes, 7);
        assert_eq!(settings.seed, 99);
        assert_eq!(settings.limits, PitConfig::new(20, 40, 50));
    }

    #[test]
    fn missing_seed_is_drawn_at_random() {
        let first = Settings::resolve(&cli(&[]), FileConfig::default());
        let second = Settings::resolve(&cli(&[]), FileConfig::default());
        assert_ne!(first.seed, second.seed);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("[game]\nlives = 3\n").is_err());
        assert!(parse("[arena]\n").is_err());
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(parse("").expect("empty config"), FileConfig::default());
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = load(Path::new("/definitely/not/here.toml")).expect_err("missing file");
        assert!(format!("{error:#}").contains("/definitely/not/here.toml"));
    }
}
