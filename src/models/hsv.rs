//! Model a color with the HSV notation.

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
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue in whole degrees.
        hue: i32,
        /// The saturation from 0.0 to 1.0.
        saturation: Component,
        /// The value from 0.0 to 1.0.
        value: Component,
    }
}

impl Hsv {
    /// Create a new color with the HSV notation. Saturation and value are
    /// clamped into 0.0 to 1.0, the hue is kept as is.
    pub fn new(hue: i32, saturation: Component, value: Component) -> Self {
        Self {
            hue,
            saturation: clamp_unit(saturation),
            value: clamp_unit(value),
        }
    }
}

impl Model for Hsv {
    fn from_rgb(rgb: &Rgb) -> Result<Self> {
        Ok(match Chroma::from_rgb(rgb) {
            Chroma::Black => Self::new(0, 0.0, 0.0),
            Chroma::Grey(value) => Self::new(0, 0.0, value),
            Chroma::Hued { hue, min, max } => Self::new(hue as i32, (max - min) / max, max),
        })
    }

    fn from_components(channels: &[Channel]) -> Result<Self> {
        let [hue, saturation, value] = leading::<3>(channels)?;
        Ok(Self::new(
            hue_from_channel(hue)?,
            saturation.value()?,
            value.value()?,
        ))
    }

    fn to_rgb(&self) -> Rgb {
        let s = self.saturation;
        let v = self.value;

        if s == 0.0 {
            let grey = unit_to_byte(v);
            return Rgb::new(grey, grey, grey);
        }

        let h = self.hue.rem_euclid(360) as Component / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Rgb::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    fn to_text(&self) -> String {
        format!(
            "{}, {}%, {}%",
            self.hue,
            percent(self.saturation),
            percent(self.value)
        )
    }
}
