use super::GameRules;
use std::fmt;

/// Broad behavior class of a rule preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    /// Every pattern is eventually copied across the board
    Replication,
    /// No cell survives, patterns spread by birth alone
    Seeder,
    /// Settles into static, picture-like structures
    Picture,
    /// Conway-like chaotic behavior
    Life,
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleFamily::Replication => "Replication",
            RuleFamily::Seeder => "Seeder",
            RuleFamily::Picture => "Picture",
            RuleFamily::Life => "Life",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulePreset {
    pub name: &'static str,
    pub family: RuleFamily,
    pub rules: GameRules,
}

const fn preset(name: &'static str, family: RuleFamily, birth: &[u8], survival: &[u8]) -> RulePreset {
    RulePreset {
        name,
        family,
        rules: GameRules::new(birth, survival),
    }
}

/// Built-in rule presets, in cycling order.
pub const PRESETS: [RulePreset; 15] = [
    preset("Replicator", RuleFamily::Replication, &[1, 3, 5, 7], &[1, 3, 5, 7]),
    preset("Fredkin", RuleFamily::Replication, &[1, 3, 5, 7], &[0, 2, 4, 6, 8]),
    preset("Seeds", RuleFamily::Seeder, &[2], &[]),
    preset("Live Free or Die", RuleFamily::Seeder, &[2], &[0]),
    preset("Life Without Death", RuleFamily::Picture, &[3], &[0, 1, 2, 3, 4, 5, 6, 7, 8]),
    preset("Mazectric", RuleFamily::Picture, &[3], &[1, 2, 3, 4]),
    preset("Maze", RuleFamily::Picture, &[3], &[1, 2, 3, 4, 5]),
    preset("Conway's Life", RuleFamily::Life, &[3], &[2, 3]),
    preset("HighLife", RuleFamily::Life, &[3, 6], &[2, 3]),
    preset("Move", RuleFamily::Life, &[3, 6, 8], &[2, 4, 5]),
    preset("DryLife", RuleFamily::Life, &[3, 7], &[2, 3]),
    preset("Pedestrian Life", RuleFamily::Life, &[3, 8], &[2, 3]),
    preset("Flock", RuleFamily::Life, &[3], &[1, 2]),
    preset("2x2", RuleFamily::Life, &[3, 6], &[1, 2, 5]),
    preset("Day & Night", RuleFamily::Life, &[3, 6, 7, 8], &[3, 4, 6, 7, 8]),
];

impl RulePreset {
    /// Case-insensitive lookup by name.
    pub fn by_name(name: &str) -> Option<&'static RulePreset> {
        let name = name.trim();
        PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Position of the preset matching `rules`, if any.
    pub fn index_of(rules: &GameRules) -> Option<usize> {
        PRESETS.iter().position(|p| p.rules == *rules)
    }

    /// Preset after `index`, wrapping around.
    pub fn next(index: usize) -> (usize, &'static RulePreset) {
        let i = (index + 1) % PRESETS.len();
        (i, &PRESETS[i])
    }

    /// Preset before `index`, wrapping around.
    pub fn previous(index: usize) -> (usize, &'static RulePreset) {
        let i = (index % PRESETS.len() + PRESETS.len() - 1) % PRESETS.len();
        (i, &PRESETS[i])
    }
}
