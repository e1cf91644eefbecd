use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliderMode {
    Carousel,
    Linear,
    Fade,
}

/// Which way "next" flows. `Rtl` puts the next slide on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideDirection {
    Ltr,
    Rtl,
}

impl SlideDirection {
    pub fn inverse(self) -> Self {
        match self {
            SlideDirection::Ltr => SlideDirection::Rtl,
            SlideDirection::Rtl => SlideDirection::Ltr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionStyle {
    Standard,
    Wheel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1/1")]
    Square,
    #[serde(rename = "16/9")]
    Landscape,
    #[serde(rename = "4/5")]
    Portrait,
    #[serde(rename = "4/3")]
    Classic,
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "custom")]
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    Cover,
    Contain,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// One slide. Filters are percentages: grayscale/sepia in [0,100],
/// brightness/contrast in [0,200] with 100 neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    pub url: String,
    pub grayscale: f64,
    pub sepia: f64,
    pub brightness: f64,
    pub contrast: f64,
}

impl ImageItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            grayscale: 0.0,
            sepia: 0.0,
            brightness: 100.0,
            contrast: 100.0,
        }
    }

    pub fn filter_css(&self) -> String {
        format!(
            "grayscale({}%) sepia({}%) brightness({}%) contrast({}%)",
            self.grayscale, self.sepia, self.brightness, self.contrast
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// The whole persisted widget state. Field names follow the fragment's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderConfig {
    pub images: Vec<ImageItem>,
    pub mode: SliderMode,
    pub direction: SlideDirection,
    pub transition_style: TransitionStyle,
    pub aspect_ratio: AspectRatio,
    pub custom_aspect_width: f64,
    pub custom_aspect_height: f64,
    pub object_fit: ObjectFit,
    pub show_arrows: bool,
    pub show_dots: bool,
    pub auto_play: bool,
    pub interval: u32,
    pub border_radius: f64,
    pub gap: f64,
    pub theme: Theme,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            images: vec![
                ImageItem::new("https://picsum.photos/id/10/1200/800"),
                ImageItem::new("https://picsum.photos/id/20/1200/800"),
                ImageItem::new("https://picsum.photos/id/30/1200/800"),
            ],
            mode: SliderMode::Carousel,
            direction: SlideDirection::Rtl,
            transition_style: TransitionStyle::Standard,
            aspect_ratio: AspectRatio::Landscape,
            custom_aspect_width: 16.0,
            custom_aspect_height: 9.0,
            object_fit: ObjectFit::Cover,
            show_arrows: true,
            show_dots: true,
            auto_play: false,
            interval: DEFAULT_INTERVAL_MS,
            border_radius: 8.0,
            gap: 12.0,
            theme: Theme::Light,
        }
    }
}

impl SliderConfig {
    /// Appends an image with neutral filters. Blank urls are ignored.
    pub fn add_image(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }
        self.images.push(ImageItem::new(url));
        true
    }

    pub fn remove_image(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.images.remove(index);
        true
    }

    /// Swaps an image with its neighbour. Nothing moves past either end.
    pub fn move_image(&mut self, index: usize, direction: MoveDirection) -> bool {
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1),
        };
        match target {
            Some(target) if index < self.images.len() && target < self.images.len() => {
                self.images.swap(index, target);
                true
            }
            _ => false,
        }
    }

    /// Width over height, or `None` when slides take their natural size.
    pub fn aspect(&self) -> Option<(f64, f64)> {
        match self.aspect_ratio {
            AspectRatio::Square => Some((1.0, 1.0)),
            AspectRatio::Landscape => Some((16.0, 9.0)),
            AspectRatio::Portrait => Some((4.0, 5.0)),
            AspectRatio::Classic => Some((4.0, 3.0)),
            AspectRatio::Custom => Some((self.custom_aspect_width, self.custom_aspect_height)),
            AspectRatio::Auto => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_to_fragment_values() {
        assert_eq!(serde_json::to_string(&SliderMode::Fade).unwrap(), "\"fade\"");
        assert_eq!(serde_json::to_string(&SlideDirection::Rtl).unwrap(), "\"rtl\"");
        assert_eq!(serde_json::to_string(&AspectRatio::Landscape).unwrap(), "\"16/9\"");
        assert_eq!(serde_json::to_string(&AspectRatio::Custom).unwrap(), "\"custom\"");
        assert_eq!(serde_json::to_string(&TransitionStyle::Wheel).unwrap(), "\"wheel\"");
    }

    #[test]
    fn fields_use_camel_case() {
        let json = serde_json::to_value(SliderConfig::default()).unwrap();
        assert_eq!(json["transitionStyle"], "standard");
        assert_eq!(json["customAspectHeight"], 9.0);
        assert_eq!(json["showArrows"], true);
        assert_eq!(json["interval"], 3000);
    }

    #[test]
    fn add_image_trims_and_rejects_blank() {
        let mut config = SliderConfig::default();
        assert!(!config.add_image("   "));
        assert!(config.add_image("  https://example.com/a.png "));
        assert_eq!(config.images.len(), 4);
        assert_eq!(config.images[3], ImageItem::new("https://example.com/a.png"));
    }

    #[test]
    fn move_image_stops_at_ends() {
        let mut config = SliderConfig::default();
        let first = config.images[0].clone();
        assert!(!config.move_image(0, MoveDirection::Up));
        assert!(!config.move_image(2, MoveDirection::Down));
        assert!(config.move_image(0, MoveDirection::Down));
        assert_eq!(config.images[1], first);
        assert!(!config.move_image(7, MoveDirection::Up));
    }

    #[test]
    fn remove_image_out_of_range_is_noop() {
        let mut config = SliderConfig::default();
        assert!(!config.remove_image(3));
        assert!(config.remove_image(0));
        assert_eq!(config.images[0].url, "https://picsum.photos/id/20/1200/800");
    }

    #[test]
    fn filter_chain_order() {
        let mut item = ImageItem::new("x");
        item.grayscale = 50.0;
        item.contrast = 150.5;
        assert_eq!(
            item.filter_css(),
            "grayscale(50%) sepia(0%) brightness(100%) contrast(150.5%)"
        );
    }

    #[test]
    fn aspect_ratios() {
        let mut config = SliderConfig::default();
        assert_eq!(config.aspect(), Some((16.0, 9.0)));
        config.aspect_ratio = AspectRatio::Custom;
        config.custom_aspect_width = 21.0;
        assert_eq!(config.aspect(), Some((21.0, 9.0)));
        config.aspect_ratio = AspectRatio::Auto;
        assert_eq!(config.aspect(), None);
    }
}
