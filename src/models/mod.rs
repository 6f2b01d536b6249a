//! Models are structs that represent a color in one of the supported color
//! models. Every model converts to and from the canonical [`Rgb`] value, which
//! is the pivot for any conversion between two models.
//!
//! Models are immutable. The constructors validate and clamp their input, so a
//! model that exists always holds channels inside its documented ranges.

use crate::{
    component::{split_channels, Channel, Components},
    error::Result,
    ModelKind,
};

mod cmyk;
mod grayscale;
mod hex;
mod hsl;
mod hsv;
mod hue;
mod named;
mod rgb;
mod websafe;

pub use cmyk::Cmyk;
pub use grayscale::Grayscale;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use named::{ColorName, Named, NAMED_COLORS};
pub use rgb::Rgb;
pub use websafe::WebsafeHex;

/// Identifies the kind of a model and emits its channels. Implemented by
/// `gen_model!`.
pub trait Tagged {
    /// The kind of the model.
    const KIND: ModelKind;
    /// The lowercase name the model is looked up by.
    const NAME: &'static str;

    /// The channels of the model, in construction order, tagged with a kind.
    fn to_components(&self) -> Components;
}

/// The conversions every color model supports.
pub trait Model: Tagged + Sized {
    /// Create the model from a canonical RGB value.
    fn from_rgb(rgb: &Rgb) -> Result<Self>;

    /// Create the model directly from its channels. No RGB computation takes
    /// place.
    fn from_components(channels: &[Channel]) -> Result<Self>;

    /// Create the model from its string form. Channels can be separated by
    /// commas, spaces or both.
    fn from_text(text: &str) -> Result<Self> {
        Self::from_components(&split_channels(text))
    }

    /// Convert the model to a canonical RGB value.
    fn to_rgb(&self) -> Rgb;

    /// The string form of the model, readable by [`Model::from_text`].
    fn to_text(&self) -> String;
}
