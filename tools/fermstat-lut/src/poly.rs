//! Cubic least-squares machinery
//!
//! Polynomials are orthonormalised with Gram-Schmidt under the discrete
//! inner product `<f, g> = Σ f(x_k) g(x_k)` over the sample abscissae. The
//! least-squares cubic is then the projection `Σ <p_i, y> p_i`, which needs
//! no matrix inversion.

use crate::error::ConfigError;

/// Number of coefficients (cubic)
pub const TERMS: usize = 4;

/// Norms below this are treated as linearly dependent
const DEGENERATE_NORM: f64 = 1e-9;

/// Polynomial `c0 + c1 x + c2 x² + c3 x³`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polynomial(pub [f64; TERMS]);

impl Polynomial {
    /// The monomial `x^degree`
    pub fn monomial(degree: usize) -> Self {
        let mut c = [0.0; TERMS];
        c[degree.min(TERMS - 1)] = 1.0;
        Self(c)
    }

    /// Evaluate with Horner's scheme
    pub fn eval(&self, x: f64) -> f64 {
        self.0.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    /// `self += factor * other`
    pub fn add_scaled(&mut self, other: &Polynomial, factor: f64) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a += factor * b;
        }
    }

    /// `self *= factor`
    pub fn scale(&mut self, factor: f64) {
        for a in self.0.iter_mut() {
            *a *= factor;
        }
    }

    /// Coefficients, constant term first
    pub fn coefficients(&self) -> &[f64; TERMS] {
        &self.0
    }
}

/// `<p, q>` over the abscissae `xs`
pub fn inner(p: &Polynomial, q: &Polynomial, xs: &[f64]) -> f64 {
    xs.iter().map(|&x| p.eval(x) * q.eval(x)).sum()
}

/// `<p, y>` where `y` holds the target values at `xs`
pub fn inner_values(p: &Polynomial, xs: &[f64], ys: &[f64]) -> f64 {
    xs.iter().zip(ys).map(|(&x, &y)| p.eval(x) * y).sum()
}

/// Orthonormal basis spanning `{1, x, x², x³}` over `xs`
pub fn orthonormal_basis(xs: &[f64]) -> Result<[Polynomial; TERMS], ConfigError> {
    let mut basis = [Polynomial::default(); TERMS];

    for i in 0..TERMS {
        let mut p = Polynomial::monomial(i);
        // Modified Gram-Schmidt, run twice to restore orthogonality lost
        // to cancellation on clustered samples
        for _ in 0..2 {
            for q in &basis[..i] {
                let projection = inner(&p, q, xs);
                p.add_scaled(q, -projection);
            }
        }

        let norm = inner(&p, &p, xs).sqrt();
        if !norm.is_finite() || norm < DEGENERATE_NORM {
            return Err(ConfigError::DegenerateBasis);
        }
        p.scale(1.0 / norm);
        basis[i] = p;
    }

    Ok(basis)
}

/// Least-squares cubic through `(xs, ys)`
pub fn approximate(xs: &[f64], ys: &[f64]) -> Result<Polynomial, ConfigError> {
    if xs.len() < TERMS {
        return Err(ConfigError::TooFewSamples(xs.len()));
    }

    let basis = orthonormal_basis(xs)?;
    let mut result = Polynomial::default();
    for p in &basis {
        result.add_scaled(p, inner_values(p, xs, ys));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!((a - b).abs() <= tolerance, "{a} != {b}");
    }

    #[test]
    fn test_eval() {
        let p = Polynomial([1.0, -2.0, 0.5, 3.0]);
        assert_eq!(p.eval(0.0), 1.0);
        assert_eq!(p.eval(2.0), 1.0 - 4.0 + 2.0 + 24.0);
    }

    #[test]
    fn test_exact_cubic_recovered() {
        let truth = Polynomial([-3.0, 0.25, 1.5, -0.125]);
        let xs: Vec<f64> = (0..12).map(|i| i as f64 * 0.5 - 2.0).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| truth.eval(x)).collect();

        let fit = approximate(&xs, &ys).unwrap();
        for (a, b) in fit.coefficients().iter().zip(truth.coefficients()) {
            assert_close(*a, *b, 1e-9);
        }
    }

    #[test]
    fn test_too_few_samples() {
        assert_eq!(
            approximate(&[1.0, 2.0, 3.0], &[0.0; 3]),
            Err(ConfigError::TooFewSamples(3))
        );
    }

    #[test]
    fn test_repeated_abscissae_degenerate() {
        let xs = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
        assert_eq!(orthonormal_basis(&xs), Err(ConfigError::DegenerateBasis));
    }

    proptest! {
        #[test]
        fn prop_basis_is_orthonormal(
            start in 6.0f64..8.0,
            steps in prop::collection::vec(0.1f64..0.5, 6..40),
        ) {
            let xs: Vec<f64> = steps
                .iter()
                .scan(start, |x, step| {
                    *x += step;
                    Some(*x)
                })
                .collect();

            let basis = orthonormal_basis(&xs).unwrap();
            for i in 0..TERMS {
                for j in 0..TERMS {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    let got = inner(&basis[i], &basis[j], &xs);
                    prop_assert!((got - expected).abs() < 1e-6, "<p{}, p{}> = {}", i, j, got);
                }
            }
        }
    }
}
