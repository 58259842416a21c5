//! Thermistor lookup-table generator
//!
//! Fits a cubic to temperature-resistance calibration points and emits the
//! ADC-indexed tables the firmware interpolates in. See [`cli::USAGE`].

pub mod cli;
pub mod error;
pub mod fit;
pub mod logger;
pub mod poly;
pub mod samples;
pub mod table;

use std::io::Write;

use anyhow::Context;

pub use cli::{parse_args, Options};
pub use error::{ConfigError, UsageError};
pub use fit::{Fit, FitDomain, MAX_RESIDUAL};
pub use table::{generate, render, TableParams, Tables};

/// Fit the calibration file in `options` and write the tables to `out`
pub fn run<W: Write>(options: &Options, out: &mut W) -> anyhow::Result<Tables> {
    let params = &options.params;
    log::info!(
        "using R0 = {}, AD_MAX = {}, AD_STEP = {}, domain = {}",
        params.r0,
        params.ad_max,
        params.ad_step,
        options.domain
    );

    let samples = samples::read_samples(&options.path)?;
    let fit = Fit::new(&samples, options.domain)
        .with_context(|| format!("cannot fit {}", options.path.display()))?;

    log::debug!("coefficients {:?}", fit.polynomial.coefficients());
    for (sample, residual) in samples.iter().zip(fit.residuals(&samples)) {
        log::debug!(
            "T = {:8.2}  R = {:10.1}  error = {:.4}",
            sample.temperature,
            sample.resistance,
            residual
        );
    }

    let worst = fit.max_residual(&samples);
    if worst > MAX_RESIDUAL {
        log::warn!(
            "maximum fit error {:.3} exceeds {} degrees, check the data or try another domain",
            worst,
            MAX_RESIDUAL
        );
    } else {
        log::info!("maximum fit error {:.4}", worst);
    }

    let tables = generate(&fit, params);
    out.write_all(render(&tables).as_bytes())
        .context("cannot write tables")?;
    Ok(tables)
}
