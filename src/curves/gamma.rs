use super::Curve;

pub struct GammaCurve {
    pub gamma: f32,
}

impl GammaCurve {
    /// Only positive finite exponents keep the curve monotonic with 0 at 0.
    pub fn is_valid_gamma(gamma: f32) -> bool {
        gamma.is_finite() && gamma > 0.0
    }
}

impl Default for GammaCurve {
    fn default() -> Self {
        Self { gamma: 2.0 }
    }
}

impl Curve for GammaCurve {
    fn apply(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        let level = fraction.min(1.0).powf(self.gamma);
        if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        }
    }

    fn name(&self) -> &'static str {
        "gamma"
    }
}
