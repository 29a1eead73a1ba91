pub mod distribution;

/// Largest `n` whose factorial fits in a `u128`.
pub const MAX_EXACT_FACTORIAL: u64 = 34;

/// `n!`, computed exactly. `None` if the result overflows a `u128`.
#[must_use]
pub fn factorial(n: u64) -> Option<u128> {
    (2..=u128::from(n)).try_fold(1_u128, u128::checked_mul)
}

/// `ln(n!)` as a sum of logarithms, recomputed from scratch on every call.
#[cfg(test)]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ln_factorial(n: u64) -> f64 {
    (2..=n).map(|k| (k as f64).ln()).sum()
}

/// Memoized `ln(n!)`, extended on demand. Looking up every `n` in `0..N` costs `O(N)` in total.
#[derive(Clone, PartialEq, Debug)]
pub struct LnFactorials(Vec<f64>);

impl Default for LnFactorials {
    fn default() -> Self {
        // ln 0! = 0.
        Self(vec![0.0])
    }
}

impl LnFactorials {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn get(&mut self, n: u64) -> f64 {
        let n = n as usize;
        while self.0.len() <= n {
            let k = self.0.len();
            let previous = self.0[k - 1];
            self.0.push(previous + (k as f64).ln());
        }
        self.0[n]
    }
}

/// `samples` evenly spaced values from `start` to `end`, both ends included.
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, samples: usize) -> impl Iterator<Item = f64> {
    let step = if samples > 1 {
        (end - start) / (samples - 1) as f64
    } else {
        0.0
    };
    (0..samples).map(move |i| {
        // Pin the last sample so rounding never undershoots the bound.
        if samples > 1 && i == samples - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}
