//! pigment converts colors between the RGB, HSL, HSV, CMYK, grayscale, hex,
//! websafe hex and named color models.
//!
//! Every model converts to and from a canonical [`Rgb`] value, which is the
//! pivot for any conversion between two models. [`Color`] wraps that value
//! together with the model a color was specified in.
//!
//! ```rust
//! use pigment::{Color, Components, ModelKind};
//!
//! let hsv = Components::parse(ModelKind::Hsv, "210, 28%, 94%");
//! let color = Color::from_components(&hsv).unwrap();
//! assert_eq!(color.hex(), "#adcef0");
//!
//! let cmyk = color.convert_to("cmyk").unwrap();
//! assert_eq!(cmyk.text(), "28%, 14%, 0%, 6%");
//! ```

#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test;

mod color;
mod component;
mod convert;
mod error;
mod interpolate;
mod math;
pub mod models;

pub use color::{Color, Flags};
pub use component::{split_channels, Channel, Component, Components};
pub use convert::{AnyModel, ModelKind};
pub use error::{Error, Result};
pub use models::{
    Cmyk, ColorName, Grayscale, Hex, Hsl, Hsv, Model, Named, Rgb, Tagged, WebsafeHex,
    NAMED_COLORS,
};

/// Brings the model traits into scope.
pub mod prelude {
    pub use crate::models::{Model, Tagged};
}
