pub mod gamma;
pub mod linear;
pub mod perceptual;

/// Maps a volume position (0.0 at the quietest step, 1.0 at the loudest)
/// onto the level handed to the media sink. Implementations must be
/// monotonic non-decreasing and send 0.0 to 0.0.
pub trait Curve: Send + Sync {
    fn apply(&self, fraction: f32) -> f32;
    fn name(&self) -> &'static str;
}

pub use gamma::GammaCurve;
pub use linear::LinearCurve;
pub use perceptual::PerceptualCurve;

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CurveConfig {
    Linear,
    Gamma { gamma: Option<f32> },
    Perceptual,
}

impl Default for CurveConfig {
    fn default() -> Self {
        CurveConfig::Linear
    }
}

impl CurveConfig {
    pub fn into_curve(self) -> Box<dyn Curve> {
        match self {
            CurveConfig::Linear => Box::new(LinearCurve),
            CurveConfig::Gamma { gamma } => Box::new(GammaCurve {
                gamma: gamma.unwrap_or(2.0),
            }),
            CurveConfig::Perceptual => Box::new(PerceptualCurve),
        }
    }
}
