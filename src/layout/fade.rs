use crate::config::SliderConfig;
use crate::constants::*;
use crate::layout::{Easing, LayoutStrategy, RenderDescriptor, Slot, Transition, TransitionProperty};

/// Crossfade: only the current image is opaque.
pub struct FadeLayout;

impl LayoutStrategy for FadeLayout {
    fn describe(&self, slot: &Slot, config: &SliderConfig) -> RenderDescriptor {
        let current = slot.is_current();
        RenderDescriptor {
            opacity: if current { 1.0 } else { 0.0 },
            z_index: if current { FADE_Z_CURRENT } else { FADE_Z_OTHER },
            transitions: vec![Transition {
                property: TransitionProperty::Opacity,
                duration_secs: FADE_DURATION,
                easing: Easing::EaseInOut,
            }],
            ..RenderDescriptor::base(slot, config)
        }
    }
}
