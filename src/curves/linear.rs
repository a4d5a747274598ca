use super::Curve;

/// Sink level proportional to the volume step.
pub struct LinearCurve;

impl Curve for LinearCurve {
    fn apply(&self, fraction: f32) -> f32 {
        fraction.clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
