use crate::config::{AspectRatio, SliderConfig};
use crate::constants::*;
use crate::layout::{Controls, ItemWidth, LayoutStrategy, Placement, RenderDescriptor, Slot, Strip};

/// Every image in one scrollable strip, in sequence order.
pub struct LinearLayout;

impl LayoutStrategy for LinearLayout {
    fn describe(&self, slot: &Slot, config: &SliderConfig) -> RenderDescriptor {
        let width = match config.aspect_ratio {
            AspectRatio::Auto => ItemWidth::Auto,
            _ => ItemWidth::Percent(STRIP_ITEM_WIDTH_PERCENT),
        };
        RenderDescriptor {
            placement: Placement::Flow { order: slot.index, width },
            interactive: true,
            ..RenderDescriptor::base(slot, config)
        }
    }

    // Reading edge is the inverse of the carousel direction.
    fn strip(&self, config: &SliderConfig) -> Option<Strip> {
        Some(Strip {
            reading_direction: config.direction.inverse(),
            gap: config.gap,
        })
    }

    fn controls(&self, _config: &SliderConfig, _current: usize) -> Controls {
        Controls::default()
    }
}
