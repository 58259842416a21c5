//! Command-line parsing

use std::path::PathBuf;

use log::LevelFilter;

use crate::error::UsageError;
use crate::fit::FitDomain;
use crate::table::TableParams;

/// Usage text
pub const USAGE: &str = "\
Calculate an A/D lookup table for an NTC thermistor / resistor voltage divider
from temperature-resistance calibration points.

Usage: fermstat-lut [-r R0] [-m AD_MAX] [-s AD_STEP] [-d DOMAIN] [-v] <datafile>

  -r R0       reference resistor in ohm (default 10000.0)
  -m AD_MAX   ADC full-scale count (default 1024)
  -s AD_STEP  ADC counts per table entry (default 32)
  -d DOMAIN   fit domain: log (default), sh, linear
  -v          verbose diagnostics (repeat for more)
  -h          show this help";

/// Parsed invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub params: TableParams,
    pub domain: FitDomain,
    pub path: PathBuf,
    pub verbosity: LevelFilter,
}

fn value<I: Iterator<Item = String>>(
    option: char,
    inline: &str,
    args: &mut I,
) -> Result<String, UsageError> {
    if !inline.is_empty() {
        return Ok(inline.to_string());
    }
    args.next().ok_or(UsageError::MissingValue(option))
}

fn number<T: std::str::FromStr>(option: char, text: String) -> Result<T, UsageError> {
    text.parse()
        .map_err(|_| UsageError::BadValue { option, value: text })
}

/// Parse arguments (without the program name), getopt style
///
/// Option values may be attached (`-r4700`) or separate (`-r 4700`).
/// `--` ends option parsing.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, UsageError> {
    let mut args = args.into_iter();
    let mut params = TableParams::default();
    let mut domain = FitDomain::default();
    let mut verbosity = LevelFilter::Warn;
    let mut positional = Vec::new();
    let mut r0 = params.r0;
    let mut ad_max = params.ad_max as i64;
    let mut ad_step = params.ad_step as i64;

    while let Some(arg) = args.next() {
        if arg == "--" {
            positional.extend(args.by_ref());
            break;
        }
        if arg.len() < 2 || !arg.starts_with('-') {
            positional.push(arg);
            continue;
        }

        let mut chars = arg[1..].chars();
        let option = chars.next().unwrap_or('-');
        let inline = chars.as_str();
        match option {
            'r' => r0 = number(option, value(option, inline, &mut args)?)?,
            'm' => ad_max = number(option, value(option, inline, &mut args)?)?,
            's' => ad_step = number(option, value(option, inline, &mut args)?)?,
            'd' => domain = value(option, inline, &mut args)?.parse()?,
            'v' if inline.chars().all(|c| c == 'v') => {
                for _ in 0..=inline.len() {
                    verbosity = match verbosity {
                        LevelFilter::Warn => LevelFilter::Info,
                        LevelFilter::Info => LevelFilter::Debug,
                        _ => LevelFilter::Trace,
                    };
                }
            }
            'h' => return Err(UsageError::Help),
            _ => return Err(UsageError::UnknownOption(arg)),
        }
    }

    if !(r0.is_finite() && r0 > 0.0) {
        return Err(UsageError::NonPositive('r'));
    }
    if ad_max <= 0 {
        return Err(UsageError::NonPositive('m'));
    }
    if ad_step <= 0 {
        return Err(UsageError::NonPositive('s'));
    }
    if ad_step > ad_max {
        return Err(UsageError::StepTooLarge);
    }
    params.r0 = r0;
    params.ad_max = u32::try_from(ad_max).map_err(|_| UsageError::BadValue {
        option: 'm',
        value: ad_max.to_string(),
    })?;
    // Bounded by ad_max
    params.ad_step = ad_step as u32;

    if positional.len() != 1 {
        return Err(UsageError::Positional(positional.len()));
    }
    let path = PathBuf::from(positional.remove(0));

    Ok(Options {
        params,
        domain,
        path,
        verbosity,
    })
}
