//! Model a color as a hexadecimal string snapped to the websafe palette.

use crate::{
    component::Channel,
    error::Result,
    models::{Hex, Model, Rgb},
};

pigment_macros::gen_model! {
    /// A hex color where every channel is one of the six websafe steps
    /// `00`, `33`, `66`, `99`, `cc` and `ff`.
    #[tag(Rgb)]
    pub struct WebsafeHex {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl WebsafeHex {
    /// Create a new websafe color, snapping every channel to the palette.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: Self::snap(red.into()),
            green: Self::snap(green.into()),
            blue: Self::snap(blue.into()),
        }
    }

    /// Snap a channel value to the nearest websafe step.
    pub fn snap(value: i32) -> u8 {
        match value {
            i32::MIN..=0x19 => 0x00,
            0x1a..=0x4c => 0x33,
            0x4d..=0x7f => 0x66,
            0x80..=0xb2 => 0x99,
            0xb3..=0xe5 => 0xcc,
            _ => 0xff,
        }
    }
}

impl From<Hex> for WebsafeHex {
    fn from(value: Hex) -> Self {
        Self::new(value.red(), value.green(), value.blue())
    }
}

impl From<WebsafeHex> for Hex {
    fn from(value: WebsafeHex) -> Self {
        Hex::new(value.red, value.green, value.blue)
    }
}

impl Model for WebsafeHex {
    fn from_rgb(rgb: &Rgb) -> Result<Self> {
        Hex::from_rgb(rgb).map(Self::from)
    }

    fn from_components(channels: &[Channel]) -> Result<Self> {
        Hex::from_components(channels).map(Self::from)
    }

    fn from_text(text: &str) -> Result<Self> {
        Hex::from_text(text).map(Self::from)
    }

    fn to_rgb(&self) -> Rgb {
        Hex::from(*self).to_rgb()
    }

    fn to_text(&self) -> String {
        Hex::from(*self).to_text()
    }
}
