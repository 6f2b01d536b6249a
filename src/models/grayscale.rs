//! Model a color as a single gray level.

use crate::{
    component::{leading, Channel, Component},
    error::{Error, Result},
    math::{byte_to_unit, clamp_unit, dot, round_to, unit_to_byte, Vector},
    models::{Model, Rgb},
};

pigment_macros::gen_model! {
    /// A color reduced to a single perceptual gray level.
    pub struct Grayscale {
        /// The gray level from 0.0 (black) to 1.0 (white).
        gray: Component,
    }
}

impl Grayscale {
    /// How much each of red, green and blue contributes to the gray level.
    pub const WEIGHTS: [Component; 3] = [0.30, 0.59, 0.11];

    /// Create a new gray level, clamped into 0.0 to 1.0 and kept to 8
    /// decimal places.
    pub fn new(gray: Component) -> Self {
        Self {
            gray: round_to(clamp_unit(gray), 8),
        }
    }
}

impl Model for Grayscale {
    fn from_rgb(rgb: &Rgb) -> Result<Self> {
        let [red, green, blue] = rgb.to_array();

        // Already neutral, skip the weights so the level doesn't drift.
        if red == green && green == blue {
            return Ok(Self::new(byte_to_unit(red)));
        }

        let [wr, wg, wb] = Self::WEIGHTS;
        Ok(Self::new(dot(
            Vector::new(byte_to_unit(red), byte_to_unit(green), byte_to_unit(blue)),
            Vector::new(wr, wg, wb),
        )))
    }

    fn from_components(channels: &[Channel]) -> Result<Self> {
        let [gray] = leading::<1>(channels)?;
        Ok(Self::new(gray.value()?))
    }

    fn from_text(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::invalid("a gray level is required"));
        }
        Self::from_components(&[Channel::parse(text)])
    }

    fn to_rgb(&self) -> Rgb {
        let gray = unit_to_byte(self.gray);
        Rgb::new(gray, gray, gray)
    }

    fn to_text(&self) -> String {
        format!("{}%", round_to(self.gray * 100.0, 2))
    }
}
