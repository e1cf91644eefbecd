//! Image carousel whose whole state lives in a URL fragment.
//!
//! [`codec`] turns a [`SliderConfig`] into a fragment and back, [`layout`]
//! computes what every slide looks like for a given current index, and
//! [`navigator`] owns that index together with its timers.

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod navigator;
pub mod state;

pub use codec::{decode, encode};
pub use config::{
    AspectRatio, ImageItem, MoveDirection, ObjectFit, SlideDirection, SliderConfig, SliderMode,
    Theme, TransitionStyle,
};
pub use error::{CodecError, CodecResult};
pub use layout::{Frame, RenderDescriptor, describe, layout_frame};
pub use navigator::{Navigator, Step};
