//! Every color model is its own type. Conversions between two models always
//! pass through the canonical [`Rgb`] value: the source model converts to RGB
//! and the target model is built from that RGB.
//!
//! [`ModelKind`] names a model at runtime and [`AnyModel`] holds an instance
//! of any of them. The registry functions on [`AnyModel`] map a kind to the
//! model implementation with a `match`, so an unknown kind is a parse error on
//! [`ModelKind`] rather than a failed lookup.
//!
//! ```rust
//! use pigment::{AnyModel, ModelKind, Rgb};
//! let hsv = AnyModel::from_rgb(ModelKind::Hsv, &Rgb::new(171, 205, 239)).unwrap();
//! assert_eq!(hsv.to_text(), "210, 28%, 94%");
//! ```

use std::{fmt, str::FromStr};

use crate::{
    component::{Channel, Components},
    error::{Error, Result},
    models::{Cmyk, Grayscale, Hex, Hsl, Hsv, Model, Named, Rgb, Tagged, WebsafeHex},
};

/// The color models known to the library.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum ModelKind {
    /// Canonical RGB, the pivot of every conversion.
    Rgb = 0,
    /// `#rrggbb` strings.
    Hex = 1,
    /// `#rrggbb` strings snapped to the websafe palette.
    WebsafeHex = 2,
    /// Web standard color names.
    Named = 3,
    /// A single luminance value.
    Grayscale = 4,
    /// Hue, saturation and lightness.
    Hsl = 5,
    /// Hue, saturation and value.
    Hsv = 6,
    /// Cyan, magenta, yellow and key inks.
    Cmyk = 7,
}

impl ModelKind {
    /// Every kind, in declaration order.
    pub const ALL: [ModelKind; 8] = [
        Self::Rgb,
        Self::Hex,
        Self::WebsafeHex,
        Self::Named,
        Self::Grayscale,
        Self::Hsl,
        Self::Hsv,
        Self::Cmyk,
    ];

    /// The lowercase name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => Rgb::NAME,
            Self::Hex => Hex::NAME,
            Self::WebsafeHex => WebsafeHex::NAME,
            Self::Named => Named::NAME,
            Self::Grayscale => Grayscale::NAME,
            Self::Hsl => Hsl::NAME,
            Self::Hsv => Hsv::NAME,
            Self::Cmyk => Cmyk::NAME,
        }
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid(format!("unknown color model '{s}'")))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An instance of any of the color models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyModel {
    /// A hex color.
    Hex(Hex),
    /// A websafe hex color.
    WebsafeHex(WebsafeHex),
    /// A named color.
    Named(Named),
    /// A gray level.
    Grayscale(Grayscale),
    /// An HSL color.
    Hsl(Hsl),
    /// An HSV color.
    Hsv(Hsv),
    /// A CMYK color.
    Cmyk(Cmyk),
}

macro_rules! impl_from_model {
    ($($m:ident),*) => {
        $(
            impl From<$m> for AnyModel {
                fn from(value: $m) -> Self {
                    Self::$m(value)
                }
            }
        )*
    };
}

impl_from_model!(Hex, WebsafeHex, Named, Grayscale, Hsl, Hsv, Cmyk);

/// Run `$e` with `$m` bound to the model inside an [`AnyModel`].
macro_rules! dispatch {
    ($self:expr, $m:ident => $e:expr) => {{
        match $self {
            AnyModel::Hex($m) => $e,
            AnyModel::WebsafeHex($m) => $e,
            AnyModel::Named($m) => $e,
            AnyModel::Grayscale($m) => $e,
            AnyModel::Hsl($m) => $e,
            AnyModel::Hsv($m) => $e,
            AnyModel::Cmyk($m) => $e,
        }
    }};
}

/// Run `$e` with the type alias `$m` set to the model named by `$kind` and
/// wrap the result in an [`AnyModel`].
macro_rules! by_kind {
    ($kind:expr, $m:ident => $e:expr) => {{
        match $kind {
            ModelKind::Rgb => Err(Error::invalid(
                "rgb is the conversion pivot and has no model",
            )),
            ModelKind::Hex => {
                type $m = Hex;
                $e.map(AnyModel::from)
            }
            ModelKind::WebsafeHex => {
                type $m = WebsafeHex;
                $e.map(AnyModel::from)
            }
            ModelKind::Named => {
                type $m = Named;
                $e.map(AnyModel::from)
            }
            ModelKind::Grayscale => {
                type $m = Grayscale;
                $e.map(AnyModel::from)
            }
            ModelKind::Hsl => {
                type $m = Hsl;
                $e.map(AnyModel::from)
            }
            ModelKind::Hsv => {
                type $m = Hsv;
                $e.map(AnyModel::from)
            }
            ModelKind::Cmyk => {
                type $m = Cmyk;
                $e.map(AnyModel::from)
            }
        }
    }};
}

impl AnyModel {
    /// Build the model of the given kind from a canonical RGB value.
    pub fn from_rgb(kind: ModelKind, rgb: &Rgb) -> Result<Self> {
        tracing::trace!("converting {} to {}", rgb, kind);
        by_kind!(kind, M => M::from_rgb(rgb))
    }

    /// Build the model of the given kind from its channels.
    pub fn from_components(kind: ModelKind, channels: &[Channel]) -> Result<Self> {
        by_kind!(kind, M => M::from_components(channels))
    }

    /// Build the model of the given kind from its string form.
    pub fn from_text(kind: ModelKind, text: &str) -> Result<Self> {
        by_kind!(kind, M => M::from_text(text))
    }

    /// The kind of the model held.
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Hex(_) => Hex::KIND,
            Self::WebsafeHex(_) => WebsafeHex::KIND,
            Self::Named(_) => Named::KIND,
            Self::Grayscale(_) => Grayscale::KIND,
            Self::Hsl(_) => Hsl::KIND,
            Self::Hsv(_) => Hsv::KIND,
            Self::Cmyk(_) => Cmyk::KIND,
        }
    }

    /// Convert the model to canonical RGB.
    pub fn to_rgb(&self) -> Rgb {
        dispatch!(self, m => m.to_rgb())
    }

    /// The channels of the model.
    pub fn to_components(&self) -> Components {
        dispatch!(self, m => m.to_components())
    }

    /// The string form of the model.
    pub fn to_text(&self) -> String {
        dispatch!(self, m => m.to_text())
    }
}

impl fmt::Display for AnyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kinds() {
        let tests = [
            ("rgb", ModelKind::Rgb),
            ("hex", ModelKind::Hex),
            ("WebsafeHex", ModelKind::WebsafeHex),
            ("NAMED", ModelKind::Named),
            ("grayscale", ModelKind::Grayscale),
            ("Hsl", ModelKind::Hsl),
            (" hsv ", ModelKind::Hsv),
            ("cmyk", ModelKind::Cmyk),
        ];
        for (name, kind) in tests {
            assert_eq!(name.parse::<ModelKind>(), Ok(kind), "{name}");
        }

        assert!(matches!(
            "badtype".parse::<ModelKind>(),
            Err(Error::InvalidColor(_))
        ));
    }

    #[test]
    fn names_round_trip() {
        for kind in ModelKind::ALL {
            assert_eq!(kind.to_string().parse::<ModelKind>(), Ok(kind));
            assert_eq!(kind.name(), kind.name().to_lowercase());
        }
        assert_eq!(ModelKind::WebsafeHex.to_string(), "websafehex");
    }

    #[test]
    fn registry_builds_every_model() {
        let rgb = Rgb::new(0, 128, 128);
        for kind in ModelKind::ALL.into_iter().skip(1) {
            let model = AnyModel::from_rgb(kind, &rgb).unwrap();
            assert_eq!(model.kind(), kind);

            let text = model.to_text();
            let parsed = AnyModel::from_text(kind, &text).unwrap();
            assert_eq!(parsed.to_text(), text, "{kind}");

            let components = model.to_components();
            let built = AnyModel::from_components(kind, &components).unwrap();
            assert_eq!(built.to_components(), components, "{kind}");
        }
    }

    #[test]
    fn registry_rejects_the_pivot() {
        assert!(matches!(
            AnyModel::from_rgb(ModelKind::Rgb, &Rgb::BLACK),
            Err(Error::InvalidColor(_))
        ));
        assert!(AnyModel::from_text(ModelKind::Rgb, "0, 0, 0").is_err());
    }

    #[test]
    fn dispatch_to_rgb() {
        let model = AnyModel::from(Hsv::new(210, 0.28, 0.94));
        assert_eq!(model.kind(), ModelKind::Hsv);
        assert_eq!(model.to_rgb(), Rgb::new(173, 206, 240));
        assert_eq!(model.to_string(), "210, 28%, 94%");
    }

    #[test]
    fn unsupported_conversion() {
        assert_eq!(
            AnyModel::from_rgb(ModelKind::Named, &Rgb::new(1, 1, 1)),
            Err(Error::ConversionUnsupported {
                kind: ModelKind::Named,
                rgb: Rgb::new(1, 1, 1),
            })
        );
    }
}
