//! Power-shaped cooling schedules.

/// An ordered, finite sequence of temperatures for one annealing pass.
///
/// Generated once per pass and immutable afterwards; the Metropolis loop
/// consumes one value per iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureSchedule {
    temperatures: Vec<f64>,
}

impl TemperatureSchedule {
    /// Builds a schedule of `steps` temperatures cooling from `t_start` to
    /// `t_end` along a power-law curve.
    ///
    /// The values interpolate linearly between `t_start^p` and `t_end^p`
    /// and are then raised back to `1/p`, so `p = 1` is a straight line,
    /// `p < 1` front-loads the cooling and `p > 1` back-loads it. Both
    /// endpoints are included.
    pub fn power(t_start: f64, t_end: f64, steps: usize, shape_exponent: f64) -> Self {
        let a = t_start.powf(shape_exponent);
        let b = t_end.powf(shape_exponent);
        let inv = 1.0 / shape_exponent;

        let temperatures = (0..steps)
            .map(|k| {
                let frac = if steps > 1 {
                    k as f64 / (steps - 1) as f64
                } else {
                    0.0
                };
                (a + (b - a) * frac).powf(inv)
            })
            .collect();

        Self { temperatures }
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.temperatures.iter().copied()
    }
}
