//! Hue calculations shared by the HSL and HSV models.

use crate::{
    component::{Channel, Component},
    error::Result,
    math::{byte_to_unit, round_to},
    models::Rgb,
};

/// How a color splits into hue and chroma. Black and greys have no hue, so
/// they are told apart before any division by the chroma happens.
pub enum Chroma {
    /// Every channel is 0.
    Black,
    /// Every channel holds the same value.
    Grey(Component),
    /// A color with a hue, in degrees from 0 up to 360.
    Hued {
        hue: Component,
        min: Component,
        max: Component,
    },
}

impl Chroma {
    pub fn from_rgb(rgb: &Rgb) -> Self {
        let red = byte_to_unit(rgb.red());
        let green = byte_to_unit(rgb.green());
        let blue = byte_to_unit(rgb.blue());

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        if max == 0.0 {
            return Self::Black;
        }

        if max == min {
            return Self::Grey(max);
        }

        let delta = max - min;
        let hue = if red == max {
            (green - blue) / delta
        } else if green == max {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };

        let mut hue = hue * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Self::Hued { hue, min, max }
    }
}

/// Read a hue channel as whole degrees. Fractions are truncated and a
/// percentage keeps its written number, so `50%` is 50 degrees.
pub fn hue_from_channel(channel: &Channel) -> Result<i32> {
    let hue = match channel {
        // Undo the division by 100 without picking up float error, 29% has to
        // stay 29 and not truncate to 28.
        Channel::Percent(_) => round_to(channel.value()? * 100.0, 8),
        _ => channel.value()?,
    };
    Ok(hue as i32)
}
