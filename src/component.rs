//! Channel values and the component vectors that carry them in and out of the
//! color models.

use std::{fmt, ops::Deref};

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    math::{round_half_up, unit_to_byte},
    ModelKind,
};

/// A 64-bit floating point value that all float channels are stored as.
pub type Component = f64;

/// A single channel of a color as it is written by a caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// A plain number, used as is.
    Number(Component),
    /// A value written with a trailing `%`, stored already divided by 100.
    Percent(Component),
    /// Anything that is not a number, like a color name or a pair of hex
    /// digits.
    Word(String),
}

impl Channel {
    /// Read a single token. A numeric prefix followed by `%` is a percentage,
    /// a float literal is a number and anything else is kept as a word.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();

        if let Some(number) = token.strip_suffix('%') {
            if let Ok(value) = number.trim_end().parse::<Component>() {
                return Self::Percent(value / 100.0);
            }
        } else if let Ok(value) = token.parse::<Component>() {
            return Self::Number(value);
        }

        Self::Word(token.to_string())
    }

    /// The numeric value of the channel. Percentages are returned as 0.0 to
    /// 1.0 fractions.
    pub fn value(&self) -> Result<Component> {
        match *self {
            Self::Number(value) | Self::Percent(value) if value.is_finite() => Ok(value),
            Self::Number(_) | Self::Percent(_) => {
                Err(Error::invalid(format!("{self} is not a finite number")))
            }
            Self::Word(ref word) => Err(Error::invalid(format!("'{word}' is not a number"))),
        }
    }

    /// The channel as a 0 to 255 integer. Numbers are rounded half up and
    /// saturated, percentages are scaled to 255 and words are read as hex
    /// digits.
    pub fn byte(&self) -> Result<u8> {
        match self {
            Self::Number(_) => Ok(round_half_up(self.value()?).clamp(0.0, 255.0) as u8),
            Self::Percent(_) => Ok(unit_to_byte(self.value()?)),
            Self::Word(word) => u8::from_str_radix(word.trim_start_matches('#'), 16)
                .map_err(|_| Error::invalid(format!("'{word}' is not a hex channel"))),
        }
    }

    /// The word held by the channel, if it is one.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Percent(value) => write!(f, "{}%", value * 100.0),
            Self::Word(word) => f.write_str(word),
        }
    }
}

impl From<Component> for Channel {
    fn from(value: Component) -> Self {
        Self::Number(value)
    }
}

impl From<u8> for Channel {
    fn from(value: u8) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Channel {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Channel {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// The channels of a color in a specific model, tagged with that model's
/// kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components {
    /// The model the channels belong to.
    pub kind: ModelKind,
    /// The channel values in model order.
    pub channels: SmallVec<[Channel; 4]>,
}

impl Components {
    /// Create a new vector of channels of the given kind.
    pub fn new(kind: ModelKind, channels: impl IntoIterator<Item = Channel>) -> Self {
        Self {
            kind,
            channels: channels.into_iter().collect(),
        }
    }

    /// Create a new vector from a runtime kind tag. An empty tag means RGB.
    pub fn with_tag(tag: &str, channels: impl IntoIterator<Item = Channel>) -> Result<Self> {
        let kind = if tag.trim().is_empty() {
            ModelKind::Rgb
        } else {
            tag.parse()?
        };
        Ok(Self::new(kind, channels))
    }

    /// Parse the channels out of a comma and/or space separated string.
    pub fn parse(kind: ModelKind, text: &str) -> Self {
        Self {
            kind,
            channels: split_channels(text),
        }
    }
}

impl Deref for Components {
    type Target = [Channel];

    fn deref(&self) -> &Self::Target {
        &self.channels
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, channel) in self.channels.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{channel}")?;
        }
        write!(f, " ({})", self.kind)
    }
}

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s]+").unwrap());

/// Split a string on commas, whitespace or both and parse every token into a
/// channel.
pub fn split_channels(text: &str) -> SmallVec<[Channel; 4]> {
    SEPARATORS
        .split(text)
        .filter(|token| !token.is_empty())
        .map(Channel::parse)
        .collect()
}

/// Borrow exactly the first `N` channels, failing if there are fewer.
pub(crate) fn leading<const N: usize>(channels: &[Channel]) -> Result<&[Channel; N]> {
    channels
        .get(..N)
        .and_then(|leading| leading.try_into().ok())
        .ok_or_else(|| {
            Error::invalid(format!(
                "expected {N} channels, found {}",
                channels.len()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_channels() {
        assert_eq!(Channel::parse("12"), Channel::Number(12.0));
        assert_eq!(Channel::parse(" .5 "), Channel::Number(0.5));
        assert_eq!(Channel::parse("-1"), Channel::Number(-1.0));
        assert_eq!(Channel::parse("50%"), Channel::Percent(0.5));
        assert_eq!(Channel::parse("teal"), Channel::Word("teal".into()));
        assert_eq!(Channel::parse("abc%"), Channel::Word("abc%".into()));
    }

    #[test]
    fn channel_values() {
        assert_eq!(Channel::Percent(0.25).value(), Ok(0.25));
        assert_eq!(Channel::Number(210.0).value(), Ok(210.0));
        assert!(Channel::Word("red".into()).value().is_err());
        assert!(Channel::Number(Component::NAN).value().is_err());
        assert!(Channel::parse("inf").value().is_err());
    }

    #[test]
    fn channel_bytes() {
        assert_eq!(Channel::Number(171.0).byte(), Ok(171));
        assert_eq!(Channel::Number(127.5).byte(), Ok(128));
        assert_eq!(Channel::Number(300.0).byte(), Ok(255));
        assert_eq!(Channel::Number(-4.0).byte(), Ok(0));
        assert_eq!(Channel::Percent(1.0).byte(), Ok(255));
        assert_eq!(Channel::Word("AB".into()).byte(), Ok(0xab));
        assert_eq!(Channel::Word("cd".into()).byte(), Ok(0xcd));
        assert!(Channel::Word("xyz".into()).byte().is_err());
    }

    #[test]
    fn split_on_commas_and_spaces() {
        let channels = split_channels("0% 33%,80% ,  100%");
        assert_eq!(
            channels.as_slice(),
            &[
                Channel::Percent(0.0),
                Channel::Percent(0.33),
                Channel::Percent(0.8),
                Channel::Percent(1.0),
            ]
        );

        let channels = split_channels("210, .02, .09");
        assert_eq!(
            channels.as_slice(),
            &[
                Channel::Number(210.0),
                Channel::Number(0.02),
                Channel::Number(0.09),
            ]
        );

        assert!(split_channels(" , ").is_empty());
    }

    #[test]
    fn leading_channels() {
        let channels = split_channels("1 2 3 4");
        assert_eq!(leading::<3>(&channels).map(|c| c.len()), Ok(3));
        assert!(leading::<4>(&channels[..2]).is_err());
    }

    #[test]
    fn components_with_tag() {
        let c = Components::with_tag("", [Channel::from(1_u8)]).unwrap();
        assert_eq!(c.kind, ModelKind::Rgb);

        let c = Components::with_tag("HSV", [Channel::from(1_u8)]).unwrap();
        assert_eq!(c.kind, ModelKind::Hsv);

        assert!(matches!(
            Components::with_tag("badtype", [Channel::from(1_u8)]),
            Err(Error::InvalidColor(_))
        ));
    }

    #[test]
    fn components_index_view() {
        let c = Components::new(ModelKind::Rgb, [0_u8, 128, 255].map(Channel::from));
        assert_eq!(c.get(1), Some(&Channel::Number(128.0)));
        assert_eq!(c.get(3), None);
        assert_eq!(c.len(), 3);
        assert_eq!(c.to_string(), "0, 128, 255 (rgb)");
    }
}
