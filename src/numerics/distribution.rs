pub mod exponential;
pub mod poisson;

use std::fmt;

use crate::error::EvaluationFault;
use crate::numerics;

/// Whether a distribution has a density over the reals or a mass over the integers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
    Continuous,
    Discrete,
}

/// Every parameter declared by any distribution in the [`CATALOG`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Parameter {
    Lambda,
}

/// Values for a subset of [`Parameter`]s, indexed by the parameter itself.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ParamValues([Option<f64>; Parameter::COUNT]);

/// Evaluates a distribution at every point of `xs`, yielding one value per point.
pub type Evaluator = fn(&[f64], &ParamValues) -> Result<Vec<f64>, EvaluationFault>;

/// A selectable distribution: its display name, the parameters it reads, how its range is
/// generated and drawn, and how to evaluate it.
pub struct DistributionSpec {
    pub name: &'static str,
    pub params: &'static [Parameter],
    pub kind: Kind,
    pub evaluate: Evaluator,
}

pub static CATALOG: [DistributionSpec; 2] = [
    DistributionSpec {
        name: "exponential distribution",
        params: &[Parameter::Lambda],
        kind: Kind::Continuous,
        evaluate: exponential::evaluate,
    },
    DistributionSpec {
        name: "poisson distribution",
        params: &[Parameter::Lambda],
        kind: Kind::Discrete,
        evaluate: poisson::evaluate,
    },
];

impl Kind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Continuous => "PDF",
            Self::Discrete => "PMF",
        }
    }
}

impl Parameter {
    pub const COUNT: usize = 1;
    pub const ALL: [Parameter; Self::COUNT] = [Self::Lambda];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Lambda => "lambda",
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Lambda => "λ",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ParamValues {
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        self.0[parameter.index()] = Some(value);
    }

    #[must_use]
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        self.0[parameter.index()]
    }

    /// Like [`get`](Self::get), but a missing parameter is an evaluation fault.
    pub fn require(&self, parameter: Parameter) -> Result<f64, EvaluationFault> {
        self.get(parameter)
            .ok_or(EvaluationFault::MissingParameter(parameter))
    }

    /// Iterate over the parameters that have been set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::ALL
            .into_iter()
            .filter_map(move |p| self.get(p).map(|value| (p, value)))
    }
}

impl FromIterator<(Parameter, f64)> for ParamValues {
    fn from_iter<T: IntoIterator<Item = (Parameter, f64)>>(iter: T) -> Self {
        let mut values = Self::default();
        for (parameter, value) in iter {
            values.set(parameter, value);
        }
        values
    }
}

impl DistributionSpec {
    /// Evaluate over `xs`, checking that the evaluator returned exactly one value per point.
    pub fn evaluate_checked(
        &self,
        xs: &[f64],
        params: &ParamValues,
    ) -> Result<Vec<f64>, EvaluationFault> {
        let ys = (self.evaluate)(xs, params)?;
        if ys.len() != xs.len() {
            return Err(EvaluationFault::LengthMismatch {
                expected: xs.len(),
                got: ys.len(),
            });
        }
        Ok(ys)
    }
}

impl fmt::Debug for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistributionSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Sample points for a distribution of the given kind.
///
/// Discrete ranges are the integers `0..bound`. Continuous ranges are `samples` evenly spaced
/// points over `[0, bound]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_range(kind: Kind, bound: i64, samples: usize) -> Vec<f64> {
    match kind {
        Kind::Discrete => (0..bound.max(0)).map(|x| x as f64).collect(),
        Kind::Continuous => numerics::linspace(0.0, bound as f64, samples).collect(),
    }
}
