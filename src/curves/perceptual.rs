use super::Curve;

/// CIE 1976 lightness inverse: equal steps sound roughly equally louder.
pub struct PerceptualCurve;

impl Curve for PerceptualCurve {
    fn apply(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        if fraction <= 0.08 {
            fraction / 9.033
        } else {
            ((fraction + 0.16) / 1.16).powf(3.0)
        }
        .clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "perceptual"
    }
}
