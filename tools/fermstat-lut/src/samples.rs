//! Calibration data file
//!
//! One `temperature resistance` pair per line, separated by whitespace
//! and/or a comma. Blank lines and lines starting with `#` are skipped;
//! trailing `#` comments are allowed.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::error::ConfigError;

/// One calibration point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Temperature in °C
    pub temperature: f64,
    /// Thermistor resistance in Ω
    pub resistance: f64,
    /// Source line (1-based)
    pub line: usize,
}

/// Parse calibration data
pub fn parse_samples(text: &str) -> Result<Vec<Sample>, ConfigError> {
    let mut samples = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let mut fields = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty());

        let parsed = (
            fields.next().map(str::parse::<f64>),
            fields.next().map(str::parse::<f64>),
            fields.next(),
        );
        match parsed {
            (Some(Ok(temperature)), Some(Ok(resistance)), None)
                if temperature.is_finite() && resistance.is_finite() =>
            {
                samples.push(Sample {
                    temperature,
                    resistance,
                    line,
                });
            }
            _ => return Err(ConfigError::Parse { line }),
        }
    }

    Ok(samples)
}

/// Read and parse a calibration file
pub fn read_samples(path: &Path) -> anyhow::Result<Vec<Sample>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let samples =
        parse_samples(&text).with_context(|| format!("invalid data in {}", path.display()))?;
    log::debug!("read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_and_comments() {
        let text = "# NTC 10k\n\n-40 336098\n0,32650 # ice\n25 ,  10000\n\t100\t678.6\n";
        let samples = parse_samples(text).unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].temperature, -40.0);
        assert_eq!(samples[1].resistance, 32650.0);
        assert_eq!(samples[2].line, 5);
        assert_eq!(samples[3].resistance, 678.6);
    }

    #[test]
    fn test_malformed_line() {
        assert_eq!(
            parse_samples("25 10000\n30\n"),
            Err(ConfigError::Parse { line: 2 })
        );
        assert_eq!(
            parse_samples("25 10000 7\n"),
            Err(ConfigError::Parse { line: 1 })
        );
        assert_eq!(
            parse_samples("hot cold\n"),
            Err(ConfigError::Parse { line: 1 })
        );
        assert_eq!(
            parse_samples("25 NaN\n"),
            Err(ConfigError::Parse { line: 1 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_samples("# nothing\n\n"), Ok(Vec::new()));
    }
}
