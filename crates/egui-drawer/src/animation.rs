use crate::options::Easing;

/// Slide of the content surface between two horizontal offsets.
///
/// The clock starts on the first [`OffsetAnimation::sample`] call rather than
/// at construction, so an animation created from an API call between frames
/// begins on the frame that first draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetAnimation {
    from: f32,
    to: f32,
    duration: f32,
    easing: Easing,
    started_at: Option<f64>,
}

impl OffsetAnimation {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            easing,
            started_at: None,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at time `now` (seconds, any monotonic clock).
    pub fn sample(&mut self, now: f64) -> f32 {
        let started_at = *self.started_at.get_or_insert(now);
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - started_at) as f32 / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        match self.started_at {
            Some(started_at) => (now - started_at) as f32 >= self.duration,
            None => self.duration <= 0.0,
        }
    }
}
