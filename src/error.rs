use thiserror::Error;

/// Errors raised by [`Grid::populate`](crate::grid::Grid::populate) before any cell is built.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PopulateError {
    /// The percentage strategy was requested without a probability.
    #[error("percentage population requires a probability")]
    MissingPercentage,
    /// The probability is NaN or outside `[0, 1]`.
    #[error("population probability {0} must be between 0.0 and 1.0")]
    PercentageOutOfRange(f32),
}

/// Errors raised while parsing a rule string or preset name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("rule string is empty")]
    Empty,
    #[error("rule string `{0}` must contain a B part and an S part separated by `/`")]
    MissingPart(String),
    #[error("neighbor count `{0}` is not a digit between 0 and 8")]
    InvalidCount(char),
    #[error("no rule preset named `{0}`")]
    UnknownPreset(String),
}

/// Errors raised while building a grid from configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell size must be non-zero on both axes, got {0}x{1}")]
    ZeroCellSize(u32, u32),
    #[error("invalid rule: {0}")]
    InvalidRule(#[from] RuleParseError),
    #[error("unknown population strategy `{0}`")]
    UnknownStrategy(String),
    #[error(transparent)]
    Populate(#[from] PopulateError),
}
