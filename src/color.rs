//! A [`Color`] holds a canonical RGB value along with the model it was
//! specified in, if any.

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{
    component::{Channel, Component, Components},
    convert::{AnyModel, ModelKind},
    error::{Error, Result},
    models::{Hex, Model, Named, Rgb, Tagged},
};

bitflags! {
    /// Flags to mark any missing channels on a [`Color`].
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the color has no alpha channel.
        const ALPHA_IS_NONE = 1 << 0;
    }
}

/// A color specified in any of the supported models. The canonical RGB value
/// is the ground truth; converting a color always creates a new one.
///
/// ```rust
/// use pigment::Color;
/// let orange: Color = "orange".parse().unwrap();
/// let hex = orange.convert_to("hex").unwrap();
/// assert_eq!(hex.text(), "#ffa500");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    rgb: Rgb,
    alpha: Component,
    flags: Flags,
    model: Option<AnyModel>,
}

impl Color {
    /// Create a plain RGB color with no alpha.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            alpha: 0.0,
            flags: Flags::ALPHA_IS_NONE,
            model: None,
        }
    }

    /// Create a plain RGB color with an alpha channel. Alpha is carried as
    /// is, no range is implied.
    pub fn from_rgba(rgb: Rgb, alpha: Component) -> Self {
        Self {
            rgb,
            alpha,
            flags: Flags::empty(),
            model: None,
        }
    }

    /// Create a color from an instance of a model.
    pub fn from_model(model: impl Into<AnyModel>) -> Self {
        let model = model.into();
        Self {
            rgb: model.to_rgb(),
            alpha: 0.0,
            flags: Flags::ALPHA_IS_NONE,
            model: Some(model),
        }
    }

    /// Create a color from a tagged component vector. RGB vectors take an
    /// optional fourth alpha channel; any other kind is handed to its model.
    pub fn from_components(components: &Components) -> Result<Self> {
        if components.kind != ModelKind::Rgb {
            return AnyModel::from_components(components.kind, components).map(Self::from_model);
        }

        let rgb = Rgb::from_components(components)?;
        match components.get(3) {
            Some(alpha) => Ok(Self::from_rgba(rgb, alpha.value()?)),
            None => Ok(Self::from_rgb(rgb)),
        }
    }

    /// Create a color from a string. Strings starting with `#` are read as
    /// hex colors and anything else as a color name.
    pub fn from_text(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::invalid("no color was given"));
        }

        if text.starts_with('#') {
            Hex::from_text(text).map(Self::from_model)
        } else {
            Named::from_text(text).map(Self::from_model)
        }
    }

    /// Convert the color to the model with the given name.
    pub fn convert_to(&self, name: &str) -> Result<Self> {
        self.to_kind(name.parse()?)
    }

    /// Convert the color to the given kind of model. Converting to
    /// [`ModelKind::Rgb`] gives a plain RGB color. The alpha channel is kept.
    pub fn to_kind(&self, kind: ModelKind) -> Result<Self> {
        let model = match kind {
            ModelKind::Rgb => None,
            kind => Some(AnyModel::from_rgb(kind, &self.rgb)?),
        };

        Ok(Self {
            rgb: model.map_or(self.rgb, |m| m.to_rgb()),
            alpha: self.alpha,
            flags: self.flags,
            model,
        })
    }

    /// The canonical RGB value.
    pub fn to_rgb(&self) -> Rgb {
        self.rgb
    }

    /// The canonical RGB channels, followed by alpha if the color has one,
    /// tagged as `rgb`.
    pub fn rgb(&self) -> Components {
        let mut components = self.rgb.to_components();
        if let Some(alpha) = self.alpha() {
            components.channels.push(Channel::Number(alpha));
        }
        components
    }

    /// A single channel of [`Color::rgb`].
    pub fn rgb_channel(&self, index: usize) -> Option<Channel> {
        self.rgb().get(index).cloned()
    }

    /// The channels of the model the color is specified in, or
    /// [`Color::rgb`] for a plain RGB color.
    pub fn array(&self) -> Components {
        match self.model {
            Some(model) => model.to_components(),
            None => self.rgb(),
        }
    }

    /// A single channel of [`Color::array`].
    pub fn array_channel(&self, index: usize) -> Option<Channel> {
        self.array().get(index).cloned()
    }

    /// The color as a `#rrggbb` string.
    pub fn hex(&self) -> String {
        Hex::from(self.rgb).to_text()
    }

    /// The string form of the model the color is specified in, or
    /// [`Color::hex`] for a plain RGB color.
    pub fn text(&self) -> String {
        match self.model {
            Some(model) => model.to_text(),
            None => self.hex(),
        }
    }

    /// The kind of model the color is specified in.
    pub fn kind(&self) -> ModelKind {
        self.model.map_or(ModelKind::Rgb, |m| m.kind())
    }

    /// The model the color is specified in, if any.
    pub fn model(&self) -> Option<&AnyModel> {
        self.model.as_ref()
    }

    /// Return the alpha channel of the color.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }

    /// The flags set on the color.
    pub fn flags(&self) -> Flags {
        self.flags
    }
}

impl From<AnyModel> for Color {
    fn from(value: AnyModel) -> Self {
        Self::from_model(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::from_rgb(value)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
