//! Model a color with the HSL notation.

use crate::{
    component::{leading, Channel, Component},
    error::Result,
    math::{clamp_unit, percent, unit_to_byte},
    models::{
        hue::{hue_from_channel, Chroma},
        Model, Rgb,
    },
};

pigment_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue in whole degrees.
        hue: i32,
        /// The saturation from 0.0 to 1.0.
        saturation: Component,
        /// The lightness from 0.0 to 1.0.
        lightness: Component,
    }
}

impl Hsl {
    /// Create a new color with the HSL notation. Saturation and lightness are
    /// clamped into 0.0 to 1.0, the hue is kept as is.
    pub fn new(hue: i32, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation: clamp_unit(saturation),
            lightness: clamp_unit(lightness),
        }
    }
}

/// One channel of the HSL to RGB conversion, `hue` being a fraction of a turn
/// shifted for the channel.
fn channel_from_hue(temp1: Component, temp2: Component, hue: Component) -> Component {
    let mut hue = hue;
    if hue < 0.0 {
        hue += 1.0;
    }
    if hue > 1.0 {
        hue -= 1.0;
    }

    if 6.0 * hue < 1.0 {
        temp1 + (temp2 - temp1) * 6.0 * hue
    } else if 2.0 * hue < 1.0 {
        temp2
    } else if 3.0 * hue < 2.0 {
        temp1 + (temp2 - temp1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        temp1
    }
}

impl Model for Hsl {
    fn from_rgb(rgb: &Rgb) -> Result<Self> {
        Ok(match Chroma::from_rgb(rgb) {
            Chroma::Black => Self::new(0, 0.0, 0.0),
            Chroma::Grey(value) => Self::new(0, 0.0, value),
            // Saturation is the plain chroma, not scaled by the lightness.
            Chroma::Hued { hue, min, max } => Self::new(hue as i32, max - min, (max + min) / 2.0),
        })
    }

    fn from_components(channels: &[Channel]) -> Result<Self> {
        let [hue, saturation, lightness] = leading::<3>(channels)?;
        Ok(Self::new(
            hue_from_channel(hue)?,
            saturation.value()?,
            lightness.value()?,
        ))
    }

    fn to_rgb(&self) -> Rgb {
        let hue = self.hue.rem_euclid(360) as Component / 360.0;
        let saturation = self.saturation;
        let lightness = self.lightness;

        if saturation == 0.0 {
            let grey = unit_to_byte(lightness);
            return Rgb::new(grey, grey, grey);
        }

        let temp2 = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let temp1 = 2.0 * lightness - temp2;

        Rgb::new(
            unit_to_byte(channel_from_hue(temp1, temp2, hue + 1.0 / 3.0)),
            unit_to_byte(channel_from_hue(temp1, temp2, hue)),
            unit_to_byte(channel_from_hue(temp1, temp2, hue - 1.0 / 3.0)),
        )
    }

    fn to_text(&self) -> String {
        format!(
            "{}, {}%, {}%",
            self.hue,
            percent(self.saturation),
            percent(self.lightness)
        )
    }
}
