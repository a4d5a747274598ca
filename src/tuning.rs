#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TuningError {
    #[error("Empty channel range: min {min} must be below max {max}")]
    EmptyChannelRange { min: i32, max: i32 },
    #[error("Empty volume range: min {min} must be below max {max}")]
    EmptyVolumeRange { min: i32, max: i32 },
    #[error("Initial volume {initial} outside {min}..={max}")]
    InitialVolumeOutOfRange { initial: i32, min: i32, max: i32 },
}

/// Closed channel range. Stepping past either end wraps to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelRange {
    min: i32,
    max: i32,
}

impl ChannelRange {
    pub fn new(min: i32, max: i32) -> Result<Self, TuningError> {
        if min >= max {
            return Err(TuningError::EmptyChannelRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn next(&self, channel: i32) -> i32 {
        if channel >= self.max {
            self.min
        } else {
            channel + 1
        }
    }

    pub fn prev(&self, channel: i32) -> i32 {
        if channel <= self.min {
            self.max
        } else {
            channel - 1
        }
    }
}

impl Default for ChannelRange {
    fn default() -> Self {
        Self { min: 0, max: 3 }
    }
}

/// Closed volume range. Stepping past either end sticks at that end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VolumeRange {
    min: i32,
    max: i32,
}

impl VolumeRange {
    pub fn new(min: i32, max: i32) -> Result<Self, TuningError> {
        if min >= max {
            return Err(TuningError::EmptyVolumeRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, volume: i32) -> bool {
        (self.min..=self.max).contains(&volume)
    }

    pub fn raise(&self, volume: i32) -> i32 {
        volume.saturating_add(1).min(self.max)
    }

    pub fn lower(&self, volume: i32) -> i32 {
        volume.saturating_sub(1).max(self.min)
    }

    /// Position of `volume` within the range, 0.0 at min and 1.0 at max.
    pub fn fraction(&self, volume: i32) -> f32 {
        let span = (self.max - self.min) as f32;
        ((volume - self.min) as f32 / span).clamp(0.0, 1.0)
    }
}

impl Default for VolumeRange {
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}
