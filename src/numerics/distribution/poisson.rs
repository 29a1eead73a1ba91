use super::{ParamValues, Parameter};
use crate::error::EvaluationFault;
use crate::numerics::{self, LnFactorials};

/// Poisson PMF, `exp(-λ) λ^x / x!`, over non-negative integer `x`.
pub fn evaluate(xs: &[f64], params: &ParamValues) -> Result<Vec<f64>, EvaluationFault> {
    let λ = params.require(Parameter::Lambda)?;
    tracing::trace!(lambda = λ, points = xs.len(), "evaluating Poisson PMF");
    let mut ln_factorials = LnFactorials::default();
    xs.iter()
        .map(|&x| {
            let k = as_count(x).ok_or(EvaluationFault::InvalidArgument { x })?;
            Ok(pmf(λ, k, &mut ln_factorials))
        })
        .collect()
}

/// `exp(-λ) λ^k / k!`. Exact while `k!` fits in a `u128`, evaluated in log space beyond that.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn pmf(λ: f64, k: u64, ln_factorials: &mut LnFactorials) -> f64 {
    match numerics::factorial(k) {
        Some(k_factorial) => (-λ).exp() * λ.powi(k as i32) / k_factorial as f64,
        None => (k as f64 * λ.ln() - λ - ln_factorials.get(k)).exp(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn as_count(x: f64) -> Option<u64> {
    (x >= 0.0 && x.fract() == 0.0 && x <= u64::MAX as f64).then(|| x as u64)
}
