use crate::config::SliderConfig;
use crate::constants::*;
use crate::layout::{
    Easing, LayoutStrategy, RenderDescriptor, Slot, Stage, Transition, TransitionProperty,
    Visibility, WheelTransform,
};

/// Carousel arranged on a rotating ring viewed in perspective.
pub struct WheelLayout;

impl WheelLayout {
    pub fn angle_per_slide(len: usize) -> f64 {
        360.0 / len.max(WHEEL_MIN_SLOTS) as f64
    }

    /// Rotation for one slide step. Small rings use a fixed wide angle.
    pub fn step_angle(len: usize) -> f64 {
        if len > WHEEL_MIN_SLOTS {
            Self::angle_per_slide(len)
        } else {
            WHEEL_FEW_SLIDES_ANGLE
        }
    }

    pub fn opacity(visual_offset: i64) -> f64 {
        (1.0 - visual_offset.abs() as f64 * WHEEL_OPACITY_FALLOFF).max(0.0)
    }
}

impl LayoutStrategy for WheelLayout {
    fn describe(&self, slot: &Slot, config: &SliderConfig) -> RenderDescriptor {
        let current = slot.is_current();
        let offset = slot.visual_offset();
        let distance = offset.abs();

        RenderDescriptor {
            opacity: Self::opacity(offset),
            z_index: if current {
                WHEEL_Z_CURRENT
            } else {
                WHEEL_Z_BASE - distance as i32
            },
            visibility: if distance > WHEEL_HIDE_DISTANCE {
                Visibility::Hidden
            } else {
                Visibility::Visible
            },
            wheel: Some(WheelTransform {
                rotate_y_deg: offset as f64 * Self::step_angle(slot.len),
                translate_z_px: WHEEL_RADIUS,
                scale: if current { 1.0 } else { WHEEL_INACTIVE_SCALE },
            }),
            overlay: !current && !slot.animating,
            transitions: vec![
                Transition {
                    property: TransitionProperty::Transform,
                    duration_secs: WHEEL_DURATION,
                    easing: Easing::CubicBezier(WHEEL_EASING),
                },
                Transition {
                    property: TransitionProperty::Opacity,
                    duration_secs: WHEEL_OPACITY_DURATION,
                    easing: Easing::Ease,
                },
            ],
            ..RenderDescriptor::base(slot, config)
        }
    }

    fn stage(&self, config: &SliderConfig) -> Stage {
        Stage {
            perspective_px: Some(WHEEL_PERSPECTIVE),
            preserve_3d: true,
            ..Stage::flat(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImageItem, SlideDirection, TransitionStyle};
    use crate::layout::{Frame, layout_frame};

    fn wheel_frame(len: usize, current: usize, animating: bool) -> Frame {
        let mut config = SliderConfig::default();
        config.transition_style = TransitionStyle::Wheel;
        config.images = (0..len).map(|i| ImageItem::new(format!("{i}"))).collect();
        layout_frame(&config, current, animating)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn small_rings_use_fixed_angle() {
        for len in 1..=4 {
            assert_eq!(WheelLayout::step_angle(len), 45.0);
        }
        assert_eq!(WheelLayout::angle_per_slide(2), 90.0);
        assert_eq!(WheelLayout::step_angle(6), 60.0);
    }

    #[test]
    fn rotation_follows_visual_offset() {
        let frame = wheel_frame(6, 0, false);
        let angles: Vec<f64> = frame
            .slides
            .iter()
            .map(|d| d.wheel.map(|w| w.rotate_y_deg).unwrap_or_default())
            .collect();
        assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, -120.0, -60.0]);
    }

    #[test]
    fn opacity_falls_off_with_distance() {
        assert!(approx(WheelLayout::opacity(0), 1.0));
        assert!(approx(WheelLayout::opacity(1), 0.4));
        assert!(approx(WheelLayout::opacity(-1), 0.4));
        assert_eq!(WheelLayout::opacity(2), 0.0);
        assert_eq!(WheelLayout::opacity(-3), 0.0);
    }

    #[test]
    fn far_slides_are_hidden() {
        let frame = wheel_frame(7, 0, false);
        let hidden: Vec<usize> = frame
            .slides
            .iter()
            .filter(|d| d.visibility == Visibility::Hidden)
            .map(|d| d.index)
            .collect();
        // offsets 0, 1, 2, 3, -3, -2, -1
        assert_eq!(hidden, vec![3, 4]);
        assert_eq!(frame.slides[2].visibility, Visibility::Visible);
        assert_eq!(frame.slides[2].opacity, 0.0);
    }

    #[test]
    fn stacking_by_proximity() {
        let frame = wheel_frame(5, 2, false);
        let z: Vec<i32> = frame.slides.iter().map(|d| d.z_index).collect();
        assert_eq!(z, vec![8, 9, WHEEL_Z_CURRENT, 9, 8]);
    }

    #[test]
    fn focus_is_full_size() {
        let frame = wheel_frame(3, 1, false);
        let scales: Vec<f64> = frame
            .slides
            .iter()
            .map(|d| d.wheel.map(|w| w.scale).unwrap_or_default())
            .collect();
        assert_eq!(scales, vec![WHEEL_INACTIVE_SCALE, 1.0, WHEEL_INACTIVE_SCALE]);
        assert!(
            frame
                .slides
                .iter()
                .all(|d| d.wheel.map(|w| w.translate_z_px) == Some(WHEEL_RADIUS))
        );
    }

    #[test]
    fn overlay_only_when_resting() {
        let resting = wheel_frame(3, 0, false);
        let overlays: Vec<bool> = resting.slides.iter().map(|d| d.overlay).collect();
        assert_eq!(overlays, vec![false, true, true]);

        let moving = wheel_frame(3, 0, true);
        assert!(moving.slides.iter().all(|d| !d.overlay));
    }

    #[test]
    fn ltr_turns_the_other_way() {
        let mut config = SliderConfig::default();
        config.transition_style = TransitionStyle::Wheel;
        config.direction = SlideDirection::Ltr;
        let frame = layout_frame(&config, 0, false);
        assert_eq!(frame.slides[1].wheel.map(|w| w.rotate_y_deg), Some(-45.0));
    }

    #[test]
    fn stage_is_three_dimensional() {
        let frame = wheel_frame(3, 0, false);
        assert_eq!(frame.stage.perspective_px, Some(WHEEL_PERSPECTIVE));
        assert!(frame.stage.preserve_3d);
    }
}
