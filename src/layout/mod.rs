//! Per-slide render descriptors.
//!
//! Every presentation is a [`LayoutStrategy`] picked from `(mode, transition
//! style)`. Strategies are pure: the same config, index and animation flag
//! always produce the same [`Frame`].

mod fade;
mod linear;
mod slide;
mod wheel;

use serde::Serialize;

use crate::config::{ObjectFit, SlideDirection, SliderConfig, SliderMode, TransitionStyle};

pub use fade::FadeLayout;
pub use linear::LinearLayout;
pub use slide::SlideLayout;
pub use wheel::WheelLayout;

pub const PREVIOUS_LABEL: &str = "Previous slide";
pub const NEXT_LABEL: &str = "Next slide";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemWidth {
    Percent(f64),
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Absolutely positioned over the stage, shifted by a share of its width.
    Stacked { translate_x_percent: f64 },
    /// Laid out in sequence inside a scrollable strip.
    Flow { order: usize, width: ItemWidth },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WheelTransform {
    pub rotate_y_deg: f64,
    pub translate_z_px: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Ease,
    EaseInOut,
    CubicBezier([f64; 4]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionProperty {
    Opacity,
    Transform,
}

/// Interpolation hint for the rendering layer; nothing here is animated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration_secs: f64,
    pub easing: Easing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageStyle {
    pub object_fit: ObjectFit,
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescriptor {
    pub index: usize,
    pub placement: Placement,
    pub opacity: f64,
    pub z_index: i32,
    pub visibility: Visibility,
    pub interactive: bool,
    pub wheel: Option<WheelTransform>,
    pub overlay: bool,
    pub transitions: Vec<Transition>,
    pub image: ImageStyle,
}

impl RenderDescriptor {
    // Fully shown, no transform. Strategies override what they compute.
    fn base(slot: &Slot, config: &SliderConfig) -> Self {
        let item = &config.images[slot.index];
        Self {
            index: slot.index,
            placement: Placement::Stacked { translate_x_percent: 0.0 },
            opacity: 1.0,
            z_index: 0,
            visibility: Visibility::Visible,
            interactive: slot.is_current(),
            wheel: None,
            overlay: false,
            transitions: Vec::new(),
            image: ImageStyle {
                object_fit: config.object_fit,
                filter: item.filter_css(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    /// Width and height of the ratio, `None` for natural sizing.
    pub aspect: Option<(f64, f64)>,
    pub border_radius: f64,
    pub perspective_px: Option<f64>,
    pub preserve_3d: bool,
}

impl Stage {
    fn flat(config: &SliderConfig) -> Self {
        Self {
            aspect: config.aspect(),
            border_radius: config.border_radius,
            perspective_px: None,
            preserve_3d: false,
        }
    }
}

/// Scrollable strip used by the linear mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Strip {
    /// Edge the strip starts reading from, the inverse of the configured direction.
    pub reading_direction: SlideDirection,
    pub gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// Previous/next buttons with their accessible labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrows {
    pub previous: &'static str,
    pub next: &'static str,
}

impl Default for Arrows {
    fn default() -> Self {
        Self {
            previous: PREVIOUS_LABEL,
            next: NEXT_LABEL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Controls {
    pub arrows: Option<Arrows>,
    pub dots: Vec<Dot>,
}

impl Controls {
    fn for_config(config: &SliderConfig, current: usize) -> Self {
        let len = config.images.len();
        if len <= 1 {
            return Self::default();
        }

        let dots = if config.show_dots {
            (0..len)
                .map(|index| Dot {
                    index,
                    active: index == current,
                    label: format!("Go to slide {}", index + 1),
                })
                .collect()
        } else {
            Vec::new()
        };

        let arrows = config.show_arrows.then(Arrows::default);
        Self { arrows, dots }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub stage: Stage,
    pub strip: Option<Strip>,
    pub slides: Vec<RenderDescriptor>,
    pub controls: Controls,
}

impl Frame {
    /// Nothing to draw; the host shows its empty state instead.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// One image's position relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub current: usize,
    pub len: usize,
    pub direction: SlideDirection,
    pub animating: bool,
}

impl Slot {
    pub fn is_current(&self) -> bool {
        self.index == self.current
    }

    pub fn visual_offset(&self) -> i64 {
        visual_offset(self.index, self.current, self.len, self.direction)
    }
}

pub trait LayoutStrategy: Sync {
    fn describe(&self, slot: &Slot, config: &SliderConfig) -> RenderDescriptor;

    fn stage(&self, config: &SliderConfig) -> Stage {
        Stage::flat(config)
    }

    fn strip(&self, _config: &SliderConfig) -> Option<Strip> {
        None
    }

    fn controls(&self, config: &SliderConfig, current: usize) -> Controls {
        Controls::for_config(config, current)
    }
}

/// Shortest signed distance from `current` to `index` around a ring of `len`.
///
/// Exactly half way round is not wrapped: with `len = 4`, index 2 seen from
/// 0 is `+2` and index 0 seen from 2 is `-2`.
pub fn circular_offset(index: usize, current: usize, len: usize) -> i64 {
    let len = len as i64;
    let mut offset = index as i64 - current as i64;
    // offset > len / 2 without losing the half on odd lengths
    if 2 * offset > len {
        offset -= len;
    }
    if 2 * offset < -len {
        offset += len;
    }
    offset
}

/// `Rtl` keeps the index order (next slide to the right), `Ltr` mirrors it.
pub fn visual_offset(index: usize, current: usize, len: usize, direction: SlideDirection) -> i64 {
    let offset = circular_offset(index, current, len);
    match direction {
        SlideDirection::Rtl => offset,
        SlideDirection::Ltr => -offset,
    }
}

pub fn strategy_for(mode: SliderMode, style: TransitionStyle) -> &'static dyn LayoutStrategy {
    match (mode, style) {
        (SliderMode::Linear, _) => &LinearLayout,
        (SliderMode::Fade, _) => &FadeLayout,
        (SliderMode::Carousel, TransitionStyle::Standard) => &SlideLayout,
        (SliderMode::Carousel, TransitionStyle::Wheel) => &WheelLayout,
    }
}

/// Descriptor for a single image. `current` must already be reduced modulo
/// the image count and `index` must be in range.
pub fn describe(
    config: &SliderConfig,
    index: usize,
    current: usize,
    animating: bool,
) -> RenderDescriptor {
    let slot = Slot {
        index,
        current,
        len: config.images.len(),
        direction: config.direction,
        animating,
    };
    strategy_for(config.mode, config.transition_style).describe(&slot, config)
}

pub fn layout_frame(config: &SliderConfig, current: usize, animating: bool) -> Frame {
    let strategy = strategy_for(config.mode, config.transition_style);
    let len = config.images.len();

    if len == 0 {
        return Frame {
            stage: Stage::flat(config),
            strip: None,
            slides: Vec::new(),
            controls: Controls::default(),
        };
    }

    let slides = (0..len)
        .map(|index| {
            let slot = Slot {
                index,
                current,
                len,
                direction: config.direction,
                animating,
            };
            strategy.describe(&slot, config)
        })
        .collect();

    Frame {
        stage: strategy.stage(config),
        strip: strategy.strip(config),
        slides,
        controls: strategy.controls(config, current),
    }
}
