// Overlay opacity schedules.
// Each overlay's opacity is a pure piecewise-linear function of scroll progress.

use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::types::{OverlayId, Progress};

/// A (progress, opacity) stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub progress: f64,
    pub opacity: f64,
}

impl Keyframe {
    pub fn new(progress: f64, opacity: f64) -> Self {
        Keyframe { progress, opacity }
    }
}

/// Validated keyframe list. Holds the first/last value outside its domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpacitySchedule {
    stops: Vec<Keyframe>,
}

impl OpacitySchedule {
    pub fn new(stops: Vec<Keyframe>) -> Result<Self, SequenceError> {
        if stops.is_empty() {
            return Err(SequenceError::InvalidSchedule(
                "a schedule needs at least one stop".to_string(),
            ));
        }
        for stop in &stops {
            if !(0.0..=1.0).contains(&stop.progress) {
                return Err(SequenceError::InvalidSchedule(format!(
                    "stop progress {} is outside [0, 1]",
                    stop.progress
                )));
            }
            if !(0.0..=1.0).contains(&stop.opacity) {
                return Err(SequenceError::InvalidSchedule(format!(
                    "opacity {} is outside [0, 1]",
                    stop.opacity
                )));
            }
        }
        if let Some(pair) = stops.windows(2).find(|w| w[1].progress < w[0].progress) {
            return Err(SequenceError::InvalidSchedule(format!(
                "stops must be ordered, {} follows {}",
                pair[1].progress, pair[0].progress
            )));
        }
        Ok(OpacitySchedule { stops })
    }

    /// Build from parallel progress/opacity lists.
    pub fn from_pairs(progress: &[f64], opacity: &[f64]) -> Result<Self, SequenceError> {
        if progress.len() != opacity.len() {
            return Err(SequenceError::InvalidSchedule(format!(
                "{} stops but {} opacities",
                progress.len(),
                opacity.len()
            )));
        }
        let stops = progress
            .iter()
            .zip(opacity)
            .map(|(p, o)| Keyframe::new(*p, *o))
            .collect();
        OpacitySchedule::new(stops)
    }

    pub fn stops(&self) -> &[Keyframe] {
        &self.stops
    }

    pub fn opacity_at(&self, progress: Progress) -> f64 {
        let p = progress.value();
        // `new` guarantees at least one stop.
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if p <= first.progress {
            return first.opacity;
        }
        if p >= last.progress {
            return last.opacity;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if p > b.progress {
                continue;
            }
            if p == b.progress {
                return b.opacity;
            }
            let span = b.progress - a.progress;
            if span <= 0.0 {
                return b.opacity;
            }
            let t = (p - a.progress) / span;
            return lerp(a.opacity, b.opacity, t);
        }
        last.opacity
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Opacity of each overlay at one progress value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct OverlayOpacities([f64; 4]);

impl OverlayOpacities {
    pub fn get(&self, id: OverlayId) -> f64 {
        self.0[id.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (OverlayId, f64)> + '_ {
        OverlayId::ALL.iter().map(move |id| (*id, self.get(*id)))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

/// The four overlay schedules driven by one progress signal.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayScheduler {
    schedules: [OpacitySchedule; 4],
}

impl OverlayScheduler {
    /// Schedules in `OverlayId::ALL` order.
    pub fn new(
        title: OpacitySchedule,
        engineering: OpacitySchedule,
        titanium: OpacitySchedule,
        call_to_action: OpacitySchedule,
    ) -> Self {
        OverlayScheduler {
            schedules: [title, engineering, titanium, call_to_action],
        }
    }

    pub fn schedule(&self, id: OverlayId) -> &OpacitySchedule {
        &self.schedules[id.slot()]
    }

    pub fn opacities(&self, progress: Progress) -> OverlayOpacities {
        let mut values = [0.0; 4];
        for id in OverlayId::ALL {
            values[id.slot()] = self.schedule(id).opacity_at(progress);
        }
        OverlayOpacities(values)
    }

    /// The overlay that is predominantly visible, if any.
    pub fn dominant(&self, progress: Progress) -> Option<OverlayId> {
        self.opacities(progress)
            .iter()
            .filter(|(_, opacity)| *opacity > 0.5)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

impl Default for OverlayScheduler {
    fn default() -> Self {
        let scenes = default_scenes();
        OverlayScheduler {
            schedules: scenes.map(|stops| OpacitySchedule { stops }),
        }
    }
}

/// Scene timing of the product hero: title out, two feature blocks, then the CTA.
pub fn default_scenes() -> [Vec<Keyframe>; 4] {
    let k = Keyframe::new;
    [
        vec![k(0.0, 1.0), k(0.15, 1.0), k(0.25, 0.0)],
        vec![k(0.25, 0.0), k(0.30, 1.0), k(0.45, 1.0), k(0.50, 0.0)],
        vec![k(0.50, 0.0), k(0.60, 1.0), k(0.75, 1.0), k(0.80, 0.0)],
        vec![k(0.80, 0.0), k(0.90, 1.0), k(1.0, 1.0)],
    ]
}
