// Hero configuration passed from JS as JSON.
// Every field has a default matching the shipped product page.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::SequenceError;
use crate::frames::FramePathTemplate;
use crate::schedule::{default_scenes, Keyframe, OpacitySchedule, OverlayScheduler};
use crate::scroll::PinnedRegion;
use crate::types::OverlayId;

/// Top-level configuration for a mounted hero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default = "default_frame_count")]
    pub frame_count: usize,
    #[serde(default = "default_path_prefix")]
    pub path_prefix: String,
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Digits in the frame number; numbers are zero-padded to this width.
    #[serde(default = "default_pad_width")]
    pub pad_width: usize,
    /// Height of the scroll container in viewport heights.
    #[serde(default = "default_pinned_viewports")]
    pub pinned_viewports: f64,
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,
    #[serde(default)]
    pub elements: ElementIds,
    #[serde(default)]
    pub schedules: ScheduleConfig,
}

fn default_frame_count() -> usize {
    240
}

fn default_path_prefix() -> String {
    "/sequence/ezgif-1f463ca0b34196c9-jpg/ezgif-frame-".to_string()
}

fn default_extension() -> String {
    "jpg".to_string()
}

fn default_pad_width() -> usize {
    3
}

fn default_pinned_viewports() -> f64 {
    4.0
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Info
}

impl Default for HeroConfig {
    fn default() -> Self {
        HeroConfig {
            frame_count: default_frame_count(),
            path_prefix: default_path_prefix(),
            extension: default_extension(),
            pad_width: default_pad_width(),
            pinned_viewports: default_pinned_viewports(),
            log_level: default_log_level(),
            elements: ElementIds::default(),
            schedules: ScheduleConfig::default(),
        }
    }
}

/// DOM ids of the elements the hero binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// Tall scroll container; its height is set from `pinned_viewports`.
    pub container: String,
    pub canvas: String,
    /// Shown until every frame has decoded. Optional in the page.
    pub loader: String,
    pub title: String,
    pub engineering: String,
    pub titanium: String,
    pub call_to_action: String,
}

impl ElementIds {
    pub fn overlay(&self, id: OverlayId) -> &str {
        match id {
            OverlayId::Title => &self.title,
            OverlayId::Engineering => &self.engineering,
            OverlayId::Titanium => &self.titanium,
            OverlayId::CallToAction => &self.call_to_action,
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        ElementIds {
            container: "hero".to_string(),
            canvas: "hero-canvas".to_string(),
            loader: "hero-loader".to_string(),
            title: "overlay-title".to_string(),
            engineering: "overlay-engineering".to_string(),
            titanium: "overlay-titanium".to_string(),
            call_to_action: "overlay-cta".to_string(),
        }
    }
}

/// Keyframes per overlay. Omitted overlays keep the product page timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub title: Vec<Keyframe>,
    pub engineering: Vec<Keyframe>,
    pub titanium: Vec<Keyframe>,
    pub call_to_action: Vec<Keyframe>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let [title, engineering, titanium, call_to_action] = default_scenes();
        ScheduleConfig {
            title,
            engineering,
            titanium,
            call_to_action,
        }
    }
}

impl ScheduleConfig {
    pub fn build(&self) -> Result<OverlayScheduler, SequenceError> {
        let named = |name: &str, stops: &[Keyframe]| {
            OpacitySchedule::new(stops.to_vec()).map_err(|err| match err {
                SequenceError::InvalidSchedule(msg) => {
                    SequenceError::InvalidSchedule(format!("{}: {}", name, msg))
                }
                other => other,
            })
        };
        Ok(OverlayScheduler::new(
            named("title", &self.title)?,
            named("engineering", &self.engineering)?,
            named("titanium", &self.titanium)?,
            named("call_to_action", &self.call_to_action)?,
        ))
    }
}

impl HeroConfig {
    pub fn from_json(json: &str) -> Result<Self, SequenceError> {
        let config: HeroConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SequenceError> {
        self.path_template()?;
        self.pinned_region()?;
        self.schedules.build()?;
        if self.elements.canvas.is_empty() || self.elements.container.is_empty() {
            return Err(SequenceError::InvalidConfig(
                "container and canvas element ids are required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn path_template(&self) -> Result<FramePathTemplate, SequenceError> {
        FramePathTemplate::new(
            self.path_prefix.clone(),
            self.extension.clone(),
            self.pad_width,
            self.frame_count,
        )
    }

    pub fn pinned_region(&self) -> Result<PinnedRegion, SequenceError> {
        PinnedRegion::new(self.pinned_viewports)
    }
}
