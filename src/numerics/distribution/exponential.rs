use super::{ParamValues, Parameter};
use crate::error::EvaluationFault;

/// Exponential PDF, `λ exp(-λx)`.
///
/// `λ ≤ 0` is not rejected: the arithmetic is carried through and may produce negative,
/// infinite or NaN densities.
pub fn evaluate(xs: &[f64], params: &ParamValues) -> Result<Vec<f64>, EvaluationFault> {
    let λ = params.require(Parameter::Lambda)?;
    tracing::trace!(lambda = λ, points = xs.len(), "evaluating exponential PDF");
    Ok(xs.iter().map(|&x| pdf(λ, x)).collect())
}

#[must_use]
#[inline]
pub fn pdf(λ: f64, x: f64) -> f64 {
    λ * (-λ * x).exp()
}
