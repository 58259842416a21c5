//! Thermistor curve fit
//!
//! The resistance-temperature relation is fitted as a cubic in one of
//! three domains. `log` (T as a cubic in ln R) is the default and matches
//! NTC data well; `sh` is the Steinhart-Hart form, exact for the Beta
//! model; `linear` is for PTC or near-linear sensors.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, UsageError};
use crate::poly::{approximate, Polynomial};
use crate::samples::Sample;

/// Offset between °C and K
pub const KELVIN: f64 = 273.15;

/// Largest acceptable fit residual (°C)
pub const MAX_RESIDUAL: f64 = 0.5;

/// Coordinates the cubic is fitted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitDomain {
    /// x = ln R, y = T
    #[default]
    Log,
    /// x = ln R, y = 1 / T(K)
    SteinhartHart,
    /// x = R, y = T
    Linear,
}

impl FitDomain {
    fn x(self, resistance: f64) -> f64 {
        match self {
            FitDomain::Log | FitDomain::SteinhartHart => resistance.ln(),
            FitDomain::Linear => resistance,
        }
    }

    fn y(self, temperature: f64) -> f64 {
        match self {
            FitDomain::SteinhartHart => 1.0 / (temperature + KELVIN),
            FitDomain::Log | FitDomain::Linear => temperature,
        }
    }

    fn temperature(self, y: f64) -> f64 {
        match self {
            FitDomain::SteinhartHart => 1.0 / y - KELVIN,
            FitDomain::Log | FitDomain::Linear => y,
        }
    }

    fn needs_log(self) -> bool {
        !matches!(self, FitDomain::Linear)
    }
}

impl FromStr for FitDomain {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(FitDomain::Log),
            "sh" => Ok(FitDomain::SteinhartHart),
            "linear" => Ok(FitDomain::Linear),
            other => Err(UsageError::UnknownDomain(other.to_string())),
        }
    }
}

impl fmt::Display for FitDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FitDomain::Log => "log",
            FitDomain::SteinhartHart => "sh",
            FitDomain::Linear => "linear",
        };
        f.write_str(name)
    }
}

/// A fitted resistance-to-temperature curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub domain: FitDomain,
    pub polynomial: Polynomial,
}

impl Fit {
    /// Fit `samples` in `domain`
    pub fn new(samples: &[Sample], domain: FitDomain) -> Result<Self, ConfigError> {
        if domain.needs_log() {
            if let Some(bad) = samples.iter().find(|s| s.resistance <= 0.0) {
                return Err(ConfigError::NonPositiveResistance { line: bad.line });
            }
        }

        let xs: Vec<f64> = samples.iter().map(|s| domain.x(s.resistance)).collect();
        let ys: Vec<f64> = samples.iter().map(|s| domain.y(s.temperature)).collect();
        let polynomial = approximate(&xs, &ys)?;

        Ok(Self { domain, polynomial })
    }

    /// Temperature (°C) at `resistance` (Ω)
    pub fn temperature(&self, resistance: f64) -> f64 {
        let y = self.polynomial.eval(self.domain.x(resistance));
        self.domain.temperature(y)
    }

    /// Absolute error at each sample (°C)
    pub fn residuals(&self, samples: &[Sample]) -> Vec<f64> {
        samples
            .iter()
            .map(|s| (self.temperature(s.resistance) - s.temperature).abs())
            .collect()
    }

    /// Largest absolute error over `samples` (°C)
    pub fn max_residual(&self, samples: &[Sample]) -> f64 {
        self.residuals(samples).into_iter().fold(0.0, f64::max)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Beta-model NTC, 10 kΩ at 25 °C
    pub fn beta_samples(beta: f64) -> Vec<Sample> {
        (-4..=14)
            .enumerate()
            .map(|(i, t10)| {
                let temperature = t10 as f64 * 10.0;
                let kelvin = temperature + KELVIN;
                let resistance = 10_000.0 * (beta * (1.0 / kelvin - 1.0 / (25.0 + KELVIN))).exp();
                Sample {
                    temperature,
                    resistance,
                    line: i + 1,
                }
            })
            .collect()
    }

    #[test]
    fn test_sh_exact_for_beta_model() {
        let samples = beta_samples(3977.0);
        let fit = Fit::new(&samples, FitDomain::SteinhartHart).unwrap();
        assert!(fit.max_residual(&samples) < 1e-4);
        assert!((fit.temperature(10_000.0) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_log_fit_acceptable() {
        let samples = beta_samples(3977.0);
        let fit = Fit::new(&samples, FitDomain::Log).unwrap();
        assert!(fit.max_residual(&samples) < MAX_RESIDUAL);
    }

    #[test]
    fn test_linear_round_trip() {
        // Sensor that is exactly linear in resistance (PT1000-like)
        let samples: Vec<Sample> = (0..10)
            .map(|i| {
                let temperature = i as f64 * 15.0 - 20.0;
                Sample {
                    temperature,
                    resistance: 1000.0 + 3.85 * temperature,
                    line: i + 1,
                }
            })
            .collect();

        let fit = Fit::new(&samples, FitDomain::Linear).unwrap();
        for s in &samples {
            assert!((fit.temperature(s.resistance) - s.temperature).abs() < 1e-9);
        }
    }

    #[test]
    fn test_log_rejects_non_positive() {
        let mut samples = beta_samples(3977.0);
        samples[3].resistance = 0.0;
        assert_eq!(
            Fit::new(&samples, FitDomain::Log),
            Err(ConfigError::NonPositiveResistance { line: 4 })
        );
    }

    #[test]
    fn test_domain_names() {
        assert_eq!("sh".parse::<FitDomain>(), Ok(FitDomain::SteinhartHart));
        assert_eq!(FitDomain::Linear.to_string(), "linear");
        assert_eq!(
            "cubic".parse::<FitDomain>(),
            Err(UsageError::UnknownDomain("cubic".into()))
        );
    }
}
