//! Lookup-table generation and C rendering

use std::fmt::Write;

use crate::fit::Fit;

/// Divider and converter parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableParams {
    /// Reference resistor (Ω)
    pub r0: f64,
    /// ADC full-scale count
    pub ad_max: u32,
    /// ADC counts between table entries
    pub ad_step: u32,
}

impl Default for TableParams {
    fn default() -> Self {
        Self {
            r0: 10_000.0,
            ad_max: 1024,
            ad_step: 32,
        }
    }
}

impl TableParams {
    /// Number of table entries
    pub fn len(&self) -> usize {
        (self.ad_max / self.ad_step) as usize
    }

    /// True if the parameters produce no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Thermistor resistance at ADC value `ad` (`ad` > 0)
    pub fn resistance(&self, ad: u32) -> f64 {
        self.r0 * self.ad_max as f64 / ad as f64 - self.r0
    }
}

/// Generated tables in tenths of a degree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tables {
    pub celsius: Vec<i32>,
    pub fahrenheit: Vec<i32>,
}

/// °C to °F
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Tenths of a degree, rounded half away from zero
fn tenths(degrees: f64) -> i32 {
    (degrees * 10.0).round() as i32
}

/// Build both tables; entry 0 is always 0
pub fn generate(fit: &Fit, params: &TableParams) -> Tables {
    let mut celsius = Vec::with_capacity(params.len());
    let mut fahrenheit = Vec::with_capacity(params.len());

    for i in 0..params.len() as u32 {
        if i == 0 {
            celsius.push(0);
            fahrenheit.push(0);
            continue;
        }
        let t = fit.temperature(params.resistance(i * params.ad_step));
        celsius.push(tenths(t));
        fahrenheit.push(tenths(to_fahrenheit(t)));
    }

    Tables {
        celsius,
        fahrenheit,
    }
}

fn render_array(out: &mut String, label: &str, entries: &[i32]) {
    let _ = writeln!(out, "//{label}");
    out.push_str("const int ad_lookup[] = { ");
    let body: Vec<String> = entries.iter().map(i32::to_string).collect();
    out.push_str(&body.join(", "));
    out.push_str(" };\n");
}

/// Render as the two C array literals the firmware sources embed
pub fn render(tables: &Tables) -> String {
    let mut out = String::new();
    render_array(&mut out, "Celsius", &tables.celsius);
    render_array(&mut out, "Fahrenheit", &tables.fahrenheit);
    out
}
