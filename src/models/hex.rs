//! Model a color as a hexadecimal string.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    component::{leading, Channel},
    error::{Error, Result},
    models::{Model, Rgb},
};

pigment_macros::gen_model! {
    /// A color written as `#rrggbb` or the `#rgb` shorthand.
    #[tag(Rgb)]
    pub struct Hex {
        /// The red channel.
        red: u8,
        /// The green channel.
        green: u8,
        /// The blue channel.
        blue: u8,
    }
}

static HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#?(?:[0-9a-f]{3}|[0-9a-f]{6})$").unwrap());

impl Hex {
    /// Create a new hex color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Read the digits of a `#rgb` or `#rrggbb` string, with or without the
    /// leading `#`.
    pub(crate) fn parse_digits(text: &str) -> Result<[u8; 3]> {
        let text = text.trim();
        if !HEX.is_match(text) {
            return Err(Error::invalid(format!("'{text}' is not a hex color")));
        }

        let digits = text.trim_start_matches('#');
        let channel = |i: usize| -> Result<u8> {
            let pair = if digits.len() == 3 {
                digits[i..=i].repeat(2)
            } else {
                digits[i * 2..i * 2 + 2].to_string()
            };
            u8::from_str_radix(&pair, 16)
                .map_err(|_| Error::invalid(format!("'{pair}' is not a hex channel")))
        };

        Ok([channel(0)?, channel(1)?, channel(2)?])
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        Self::new(value.red(), value.green(), value.blue())
    }
}

impl Model for Hex {
    fn from_rgb(rgb: &Rgb) -> Result<Self> {
        Ok(Self::from(*rgb))
    }

    fn from_components(channels: &[Channel]) -> Result<Self> {
        let [red, green, blue] = leading::<3>(channels)?;
        Ok(Self::new(red.byte()?, green.byte()?, blue.byte()?))
    }

    fn from_text(text: &str) -> Result<Self> {
        let [red, green, blue] = Self::parse_digits(text)?;
        Ok(Self::new(red, green, blue))
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    fn to_text(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
