//! Model a color with the CMYK notation.

use crate::{
    component::{leading, Channel, Component},
    error::Result,
    math::{byte_to_unit, clamp_unit, percent, unit_to_byte},
    models::{Model, Rgb},
};

pigment_macros::gen_model! {
    /// A color specified with cyan, magenta, yellow and key (black) inks.
    pub struct Cmyk {
        /// The cyan ink from 0.0 to 1.0.
        cyan: Component,
        /// The magenta ink from 0.0 to 1.0.
        magenta: Component,
        /// The yellow ink from 0.0 to 1.0.
        yellow: Component,
        /// The key (black) ink from 0.0 to 1.0.
        key: Component,
    }
}

impl Cmyk {
    /// Create a new CMYK color. Every ink is clamped into 0.0 to 1.0 and a
    /// full key forces the other inks to 0.0.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, key: Component) -> Self {
        if key >= 1.0 {
            return Self {
                cyan: 0.0,
                magenta: 0.0,
                yellow: 0.0,
                key: 1.0,
            };
        }

        Self {
            cyan: clamp_unit(cyan),
            magenta: clamp_unit(magenta),
            yellow: clamp_unit(yellow),
            key: clamp_unit(key),
        }
    }
}

impl Model for Cmyk {
    fn from_rgb(rgb: &Rgb) -> Result<Self> {
        let c = 1.0 - byte_to_unit(rgb.red());
        let m = 1.0 - byte_to_unit(rgb.green());
        let y = 1.0 - byte_to_unit(rgb.blue());

        let k = c.min(m).min(y);
        if k == 1.0 {
            return Ok(Self::new(0.0, 0.0, 0.0, 1.0));
        }

        let white = 1.0 - k;
        Ok(Self::new(
            (c - k) / white,
            (m - k) / white,
            (y - k) / white,
            k,
        ))
    }

    fn from_components(channels: &[Channel]) -> Result<Self> {
        let [c, m, y, k] = leading::<4>(channels)?;
        Ok(Self::new(c.value()?, m.value()?, y.value()?, k.value()?))
    }

    fn to_rgb(&self) -> Rgb {
        let k = self.key;
        let ink = |v: Component| unit_to_byte(1.0 - (v * (1.0 - k) + k));
        Rgb::new(ink(self.cyan), ink(self.magenta), ink(self.yellow))
    }

    fn to_text(&self) -> String {
        format!(
            "{}%, {}%, {}%, {}%",
            percent(self.cyan),
            percent(self.magenta),
            percent(self.yellow),
            percent(self.key)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Tagged, ModelKind};

    #[test]
    fn from_rgb() {
        let tests = [
            (Rgb::new(204, 255, 0), "20%, 0%, 100%, 0%"),
            (Rgb::new(153, 0, 204), "25%, 100%, 0%, 20%"),
            (Rgb::new(255, 153, 51), "0%, 40%, 80%, 0%"),
            (Rgb::new(0, 0, 0), "0%, 0%, 0%, 100%"),
            (Rgb::new(255, 255, 255), "0%, 0%, 0%, 0%"),
        ];
        for (rgb, expected) in tests {
            assert_eq!(Cmyk::from_rgb(&rgb).unwrap().to_text(), expected, "{rgb}");
        }
    }

    #[test]
    fn from_components() {
        let cmyk = Cmyk::from_components(&[0.99, 0.1, 0.25, 0.5].map(Channel::from)).unwrap();
        let components = cmyk.to_components();
        assert_eq!(components.kind, ModelKind::Cmyk);
        assert_eq!(&components[..], &[0.99, 0.1, 0.25, 0.5].map(Channel::from));
    }

    #[test]
    fn full_key_is_black() {
        let cmyk = Cmyk::from_components(&[0.99, 0.1, 0.25, 1.0].map(Channel::from)).unwrap();
        assert_eq!(&cmyk.to_components()[..], &[0.0, 0.0, 0.0, 1.0].map(Channel::from));
        assert_eq!(cmyk.to_rgb(), Rgb::BLACK);

        let cmyk = Cmyk::new(0.0, 0.33, 0.8, 1.2);
        assert_eq!(cmyk.to_text(), "0%, 0%, 0%, 100%");
    }

    #[test]
    fn from_text() {
        let tests = [
            ("0% 33% 80% 100%", "0%, 0%, 0%, 100%"),
            ("100%, 33%, 80%, 0%", "100%, 33%, 80%, 0%"),
            ("1 .33 .8 0", "100%, 33%, 80%, 0%"),
        ];
        for (text, expected) in tests {
            assert_eq!(Cmyk::from_text(text).unwrap().to_text(), expected);
        }
        assert!(Cmyk::from_text("10% 20% 30%").is_err());
    }

    #[test]
    fn to_rgb() {
        let tests = [
            ((0.0, 0.33, 0.80, 1.0), Rgb::new(0, 0, 0)),
            ((0.0, 0.80, 0.60, 0.0), Rgb::new(255, 51, 102)),
            ((0.75, 0.50, 0.0, 0.20), Rgb::new(51, 102, 204)),
        ];
        for ((c, m, y, k), expected) in tests {
            assert_eq!(Cmyk::new(c, m, y, k).to_rgb(), expected);
        }
    }

    #[test]
    fn round_trip() {
        for rgb in [
            Rgb::new(204, 255, 0),
            Rgb::new(153, 0, 204),
            Rgb::new(12, 200, 99),
            Rgb::new(1, 2, 3),
            Rgb::new(128, 128, 128),
        ] {
            assert_eq!(Cmyk::from_rgb(&rgb).unwrap().to_rgb(), rgb);
        }
    }

    #[test]
    fn round_trip_sweep() {
        for rgb in crate::test::rgb_sweep(3) {
            assert_rgb_near!(Cmyk::from_rgb(&rgb).unwrap().to_rgb(), rgb);
        }
    }

    #[test]
    fn names() {
        assert_eq!(Cmyk::NAME, "cmyk");
    }
}
