//! Conway-style Life on a toroidal grid with per-cell gradient colors.
pub mod ant;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod rules;

pub use ant::{Ant, AntRules, Heading, Turn};
pub use cell::{Cell, Transition, NEIGHBOR_COUNT};
pub use color::{ChannelPermutation, Rgb};
pub use config::SimConfig;
pub use error::{ConfigError, PopulateError, RuleParseError};
pub use frame::Frame;
pub use grid::{Dimensions, Grid, PopType};
pub use rules::{GameRules, NeighborSet, Pattern, RulePreset};
