use crate::config::SliderConfig;
use crate::constants::*;
use crate::layout::{
    Easing, LayoutStrategy, Placement, RenderDescriptor, Slot, Transition, TransitionProperty,
};

/// Carousel with flat lateral translation, one container width per slide.
pub struct SlideLayout;

impl LayoutStrategy for SlideLayout {
    fn describe(&self, slot: &Slot, config: &SliderConfig) -> RenderDescriptor {
        let current = slot.is_current();
        RenderDescriptor {
            placement: Placement::Stacked {
                translate_x_percent: slot.visual_offset() as f64 * 100.0,
            },
            z_index: if current { SLIDE_Z_CURRENT } else { SLIDE_Z_OTHER },
            transitions: vec![Transition {
                property: TransitionProperty::Transform,
                duration_secs: SLIDE_DURATION,
                easing: Easing::CubicBezier(SLIDE_EASING),
            }],
            ..RenderDescriptor::base(slot, config)
        }
    }
}
