//! Error types
//!
//! [`UsageError`] covers the command line (exit status 1), [`ConfigError`]
//! the calibration data and the fit (exit status 2).

use std::fmt;

/// Problems with the calibration data or the fit
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A non-empty, non-comment line is not a number pair
    Parse { line: usize },
    /// A resistance is zero or negative where its logarithm is needed
    NonPositiveResistance { line: usize },
    /// Fewer samples than polynomial coefficients
    TooFewSamples(usize),
    /// Sample abscissae do not span four independent monomials
    DegenerateBasis,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse { line } => {
                write!(f, "line {line}: expected `temperature resistance`")
            }
            ConfigError::NonPositiveResistance { line } => {
                write!(f, "line {line}: resistance must be positive")
            }
            ConfigError::TooFewSamples(n) => {
                write!(f, "need at least 4 samples, got {n}")
            }
            ConfigError::DegenerateBasis => {
                write!(f, "samples are degenerate, cannot build a cubic basis")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Problems with the command line
#[derive(Debug, Clone, PartialEq)]
pub enum UsageError {
    /// `-h` was given
    Help,
    /// Option not recognised
    UnknownOption(String),
    /// Option given without its value
    MissingValue(char),
    /// Option value is not a number
    BadValue { option: char, value: String },
    /// R0, AD_MAX or AD_STEP is not positive
    NonPositive(char),
    /// AD_STEP larger than AD_MAX
    StepTooLarge,
    /// `-d` value is not a known fit domain
    UnknownDomain(String),
    /// Not exactly one data file given
    Positional(usize),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::Help => write!(f, "help requested"),
            UsageError::UnknownOption(o) => write!(f, "unknown option '{o}'"),
            UsageError::MissingValue(o) => write!(f, "option -{o} requires an argument"),
            UsageError::BadValue { option, value } => {
                write!(f, "invalid value '{value}' for -{option}")
            }
            UsageError::NonPositive(o) => write!(f, "value of -{o} must be positive"),
            UsageError::StepTooLarge => write!(f, "AD_STEP must not exceed AD_MAX"),
            UsageError::UnknownDomain(d) => {
                write!(f, "unknown fit domain '{d}' (expected log, sh or linear)")
            }
            UsageError::Positional(0) => write!(f, "missing data file"),
            UsageError::Positional(n) => write!(f, "expected one data file, got {n}"),
        }
    }
}

impl std::error::Error for UsageError {}
