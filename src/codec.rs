//! URL-fragment persistence for [`SliderConfig`].
//!
//! A fragment is `base64(percent_encode(json))`. Decoding tolerates a leading
//! `#`, missing base64 padding, and payloads written by older or newer
//! versions: every known key is read on its own and falls back to the
//! default when it is missing or malformed.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{ImageItem, SliderConfig};
use crate::error::{CodecError, CodecResult};

const FRAGMENT_DELIMITER: char = '#';

const FRAGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Serializes the configuration into a fragment (without the leading `#`).
/// Returns an empty string if serialization fails.
pub fn encode(config: &SliderConfig) -> String {
    match try_encode(config) {
        Ok(fragment) => fragment,
        Err(e) => {
            warn!("Encoding error: {}", e);
            String::new()
        }
    }
}

pub fn try_encode(config: &SliderConfig) -> CodecResult<String> {
    let json = serde_json::to_string(config).map_err(|e| CodecError::Serialize(e.to_string()))?;
    let escaped = urlencoding::encode(&json);
    Ok(FRAGMENT_ENGINE.encode(escaped.as_bytes()))
}

/// Restores a configuration from a fragment, with or without its `#`.
/// Anything unreadable yields [`SliderConfig::default`].
pub fn decode(fragment: &str) -> SliderConfig {
    match try_decode(fragment) {
        Ok(config) => config,
        Err(CodecError::Empty) => SliderConfig::default(),
        Err(e) => {
            warn!("Decoding error: {}", e);
            SliderConfig::default()
        }
    }
}

pub fn try_decode(fragment: &str) -> CodecResult<SliderConfig> {
    let payload = fragment.strip_prefix(FRAGMENT_DELIMITER).unwrap_or(fragment);
    if payload.is_empty() {
        return Err(CodecError::Empty);
    }

    let escaped = String::from_utf8(FRAGMENT_ENGINE.decode(payload)?)?;
    let json = urlencoding::decode(&escaped).map_err(|e| CodecError::Percent(e.to_string()))?;

    match serde_json::from_str::<Value>(&json)? {
        Value::Object(object) => Ok(config_from_object(object)),
        _ => Err(CodecError::NotAnObject),
    }
}

fn config_from_object(object: Map<String, Value>) -> SliderConfig {
    let mut config = SliderConfig::default();
    for (key, value) in object {
        match key.as_str() {
            "images" => match value {
                Value::Array(items) => {
                    config.images = items.into_iter().filter_map(image_from_value).collect();
                }
                other => debug!(?other, "images is not an array, keeping defaults"),
            },
            "mode" => assign(&mut config.mode, value, &key),
            "direction" => assign(&mut config.direction, value, &key),
            "transitionStyle" => assign(&mut config.transition_style, value, &key),
            "aspectRatio" => assign(&mut config.aspect_ratio, value, &key),
            "customAspectWidth" => assign(&mut config.custom_aspect_width, value, &key),
            "customAspectHeight" => assign(&mut config.custom_aspect_height, value, &key),
            "objectFit" => assign(&mut config.object_fit, value, &key),
            "showArrows" => assign(&mut config.show_arrows, value, &key),
            "showDots" => assign(&mut config.show_dots, value, &key),
            "autoPlay" => assign(&mut config.auto_play, value, &key),
            "interval" => assign(&mut config.interval, value, &key),
            "borderRadius" => assign(&mut config.border_radius, value, &key),
            "gap" => assign(&mut config.gap, value, &key),
            "theme" => assign(&mut config.theme, value, &key),
            _ => debug!(key = %key, "ignoring unknown key"),
        }
    }
    config
}

fn image_from_value(value: Value) -> Option<ImageItem> {
    let Value::Object(object) = value else {
        debug!("skipping image entry that is not an object");
        return None;
    };

    let mut item = ImageItem::new("");
    for (key, value) in object {
        match key.as_str() {
            "url" => assign(&mut item.url, value, &key),
            "grayscale" => assign(&mut item.grayscale, value, &key),
            "sepia" => assign(&mut item.sepia, value, &key),
            "brightness" => assign(&mut item.brightness, value, &key),
            "contrast" => assign(&mut item.contrast, value, &key),
            _ => debug!(key = %key, "ignoring unknown image key"),
        }
    }
    Some(item)
}

// Leaves the slot untouched when the value does not fit its type.
fn assign<T: DeserializeOwned>(slot: &mut T, value: Value, key: &str) {
    match serde_json::from_value(value) {
        Ok(parsed) => *slot = parsed,
        Err(e) => debug!(key = %key, "keeping default: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AspectRatio, SlideDirection, SliderMode, TransitionStyle};

    fn fragment_for(json: &str) -> String {
        FRAGMENT_ENGINE.encode(urlencoding::encode(json).as_bytes())
    }

    #[test]
    fn default_round_trips() {
        let config = SliderConfig::default();
        assert_eq!(decode(&encode(&config)), config);
    }

    #[test]
    fn leading_delimiter_is_optional() {
        let mut config = SliderConfig::default();
        config.mode = SliderMode::Fade;
        let fragment = encode(&config);
        assert_eq!(decode(&fragment), config);
        assert_eq!(decode(&format!("#{fragment}")), config);
    }

    #[test]
    fn encoded_fragment_is_fragment_safe() {
        let mut config = SliderConfig::default();
        config.add_image("https://example.com/ünïcødé/画像.png?a=1&b=2#x");
        let fragment = encode(&config);
        assert!(
            fragment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
        );
    }

    #[test]
    fn bad_input_falls_back_to_default() {
        let default = SliderConfig::default();
        assert_eq!(decode(""), default);
        assert_eq!(decode("#"), default);
        assert_eq!(decode("#not-base64!!"), default);
        assert_eq!(decode(&fragment_for("{ this is not json")), default);
        assert_eq!(decode(&fragment_for("[1, 2, 3]")), default);
        assert_eq!(decode(&fragment_for("\"carousel\"")), default);
    }

    #[test]
    fn typed_errors_are_reported() {
        assert!(matches!(try_decode("#"), Err(CodecError::Empty)));
        assert!(matches!(try_decode("!!!"), Err(CodecError::Base64(_))));
        assert!(matches!(try_decode(&fragment_for("null")), Err(CodecError::NotAnObject)));
        assert!(matches!(try_decode(&fragment_for("{")), Err(CodecError::Json(_))));
    }

    #[test]
    fn missing_padding_is_accepted() {
        let config = SliderConfig::default();
        let fragment = encode(&config);
        assert_eq!(decode(fragment.trim_end_matches('=')), config);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = decode(&fragment_for(r#"{"mode":"fade","gap":0}"#));
        assert_eq!(config.mode, SliderMode::Fade);
        assert_eq!(config.gap, 0.0);
        assert_eq!(config.direction, SlideDirection::Rtl);
        assert_eq!(config.images, SliderConfig::default().images);
    }

    #[test]
    fn invalid_fields_take_defaults_individually() {
        let config = decode(&fragment_for(concat!(
            r#"{"mode":"spiral","transitionStyle":"wheel","interval":"fast","#,
            r#""aspectRatio":"4/5","futureKey":1}"#,
        )));
        assert_eq!(config.mode, SliderMode::Carousel);
        assert_eq!(config.transition_style, TransitionStyle::Wheel);
        assert_eq!(config.interval, 3000);
        assert_eq!(config.aspect_ratio, AspectRatio::Portrait);
    }

    #[test]
    fn image_entries_are_repaired() {
        let config = decode(&fragment_for(
            r#"{"images":[{"url":"a.png","sepia":40},42,{"url":"b.png","contrast":"x"}]}"#,
        ));
        assert_eq!(config.images.len(), 2);
        assert_eq!(config.images[0].url, "a.png");
        assert_eq!(config.images[0].sepia, 40.0);
        assert_eq!(config.images[0].brightness, 100.0);
        assert_eq!(config.images[1].contrast, 100.0);
    }

    #[test]
    fn empty_images_survive() {
        let mut config = SliderConfig::default();
        config.images.clear();
        assert!(decode(&encode(&config)).images.is_empty());
    }

    #[test]
    fn reads_fragments_with_unescaped_punctuation() {
        // encodeURIComponent leaves !'()* alone
        let json = concat!(
            r#"{"images":[{"url":"https://x.test/(1)!.png","#,
            r#""grayscale":0,"sepia":0,"brightness":100,"contrast":100}]}"#,
        );
        let escaped = urlencoding::encode(json)
            .replace("%28", "(")
            .replace("%29", ")")
            .replace("%21", "!");
        let fragment = FRAGMENT_ENGINE.encode(escaped.as_bytes());
        assert_eq!(decode(&fragment).images[0].url, "https://x.test/(1)!.png");
    }
}
