use crate::error::ConfigError;
use crate::grid::{Grid, PopType};
use crate::rules::GameRules;
use std::env;

pub const ENV_SEED: &str = "TORUS_LIFE_SEED";
pub const ENV_RULE: &str = "TORUS_LIFE_RULE";
pub const ENV_STRATEGY: &str = "TORUS_LIFE_STRATEGY";
pub const ENV_PERCENTAGE: &str = "TORUS_LIFE_PERCENTAGE";

/// Everything needed to build and seed a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Width and height of one cell in pixels.
    pub cell_size: [u32; 2],
    /// Initial board size in pixels.
    pub board_size: [u32; 2],
    pub rules: GameRules,
    pub strategy: PopType,
    /// Probability used by [`PopType::Percentage`].
    pub percentage: Option<f32>,
    /// Optional RNG seed for reproducible populations.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size: [10, 10],
            board_size: [100, 100],
            rules: GameRules::default(),
            strategy: PopType::Percentage,
            percentage: Some(0.3),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Defaults overridden by `TORUS_LIFE_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Values that fail to parse are logged and skipped.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(e) => log::warn!("Ignoring {ENV_SEED}={raw:?}: {e}"),
            }
        }
        if let Some(raw) = lookup(ENV_RULE) {
            match GameRules::lookup(&raw) {
                Ok(rules) => self.rules = rules,
                Err(e) => log::warn!("Ignoring {ENV_RULE}={raw:?}: {e}"),
            }
        }
        if let Some(raw) = lookup(ENV_STRATEGY) {
            match raw.parse() {
                Ok(strategy) => self.strategy = strategy,
                Err(e) => log::warn!("Ignoring {ENV_STRATEGY}={raw:?}: {e}"),
            }
        }
        if let Some(raw) = lookup(ENV_PERCENTAGE) {
            match raw.trim().parse::<f32>() {
                Ok(p) if (0.0..=1.0).contains(&p) => self.percentage = Some(p),
                Ok(p) => log::warn!("Ignoring {ENV_PERCENTAGE}={p}: must be between 0.0 and 1.0"),
                Err(e) => log::warn!("Ignoring {ENV_PERCENTAGE}={raw:?}: {e}"),
            }
        }
        self
    }

    /// An unpopulated grid with these settings.
    pub fn build(&self) -> Result<Grid, ConfigError> {
        let mut grid = Grid::new(self.cell_size, self.board_size)?.with_rules(self.rules);
        if let Some(seed) = self.seed {
            grid.reseed(seed);
        }
        Ok(grid)
    }

    /// Build the grid and run the configured population once.
    pub fn build_populated(&self) -> Result<Grid, ConfigError> {
        let mut grid = self.build()?;
        grid.populate(self.strategy, self.percentage)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn overrides_apply() {
        let config = SimConfig::default().with_overrides(vars(&[
            (ENV_SEED, "17"),
            (ENV_RULE, "HighLife"),
            (ENV_STRATEGY, "edges"),
            (ENV_PERCENTAGE, "0.5"),
        ]));
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.rules, GameRules::high_life());
        assert_eq!(config.strategy, PopType::Edges);
        assert_eq!(config.percentage, Some(0.5));
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let config = SimConfig::default().with_overrides(vars(&[
            (ENV_SEED, "-3"),
            (ENV_RULE, "B9/S1"),
            (ENV_STRATEGY, "spiral"),
            (ENV_PERCENTAGE, "2"),
        ]));
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn default_builds_ten_by_ten() {
        let config = SimConfig { seed: Some(5), ..SimConfig::default() };
        let grid = config.build_populated().unwrap();
        assert_eq!(grid.cells().len(), 100);
        assert_eq!(grid.pixel_size(true), [100, 100]);
    }

    #[test]
    fn missing_percentage_surfaces_as_config_error() {
        let config = SimConfig { percentage: None, ..SimConfig::default() };
        assert!(matches!(config.build_populated(), Err(ConfigError::Populate(_))));
    }
}
