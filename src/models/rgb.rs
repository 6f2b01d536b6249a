//! The canonical RGB value every model converts through.

use std::fmt;

use crate::{
    component::{leading, Channel},
    error::{Error, Result},
    models::Model,
};

pigment_macros::gen_model! {
    /// A color as three 0 to 255 channels.
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Rgb {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

impl Rgb {
    /// Black, all channels at 0.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// White, all channels at 255.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new color with RGB (red, green, blue) channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The channels as an array.
    pub fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl Model for Rgb {
    fn from_rgb(rgb: &Rgb) -> Result<Self> {
        Ok(*rgb)
    }

    fn from_components(channels: &[Channel]) -> Result<Self> {
        let [red, green, blue] = leading::<3>(channels)?;
        if let Some(word) = [red, green, blue].iter().find_map(|c| c.as_word()) {
            return Err(Error::invalid(format!("'{word}' is not an RGB channel")));
        }
        Ok(Self::new(red.byte()?, green.byte()?, blue.byte()?))
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn to_text(&self) -> String {
        format!("{}, {}, {}", self.red, self.green, self.blue)
    }
}
