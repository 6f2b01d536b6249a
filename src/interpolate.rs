use crate::{
    math::{lerp, round_half_up},
    Color, Component, Rgb,
};

/// Mix two channels and round the result half up.
fn mix(a: Component, b: Component, t: Component) -> Component {
    round_half_up(lerp(a, b, t))
}

impl Color {
    /// Linearly interpolate from this color to another using `t` as the
    /// progress between them. The RGB channels are mixed and rounded half up.
    /// Alpha is mixed only when both colors carry one.
    ///
    /// The result is always a plain RGB color.
    pub fn interpolate(&self, other: &Self, t: Component) -> Color {
        let (left, right) = (self.to_rgb(), other.to_rgb());
        let channel = |a: u8, b: u8| mix(a.into(), b.into(), t) as u8;

        let rgb = Rgb::new(
            channel(left.red(), right.red()),
            channel(left.green(), right.green()),
            channel(left.blue(), right.blue()),
        );

        match (self.alpha(), other.alpha()) {
            (Some(a), Some(b)) => Color::from_rgba(rgb, mix(a, b, t)),
            _ => Color::from_rgb(rgb),
        }
    }

    /// The color half way between `left` and `right`.
    ///
    /// ```rust
    /// use pigment::{Color, Rgb};
    /// let purple = Color::average(&Rgb::new(255, 0, 0).into(), &Rgb::new(0, 0, 255).into());
    /// assert_eq!(purple.hex(), "#800080");
    /// ```
    pub fn average(left: &Color, right: &Color) -> Color {
        left.interpolate(right, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Channel, ModelKind};

    #[test]
    fn average_red_and_blue() {
        let red = Color::from_text("red").unwrap();
        let blue = Color::from_text("#0000ff").unwrap();
        let purple = Color::average(&red, &blue);

        assert_eq!(purple.to_rgb(), Rgb::new(128, 0, 128));
        assert_eq!(purple.kind(), ModelKind::Rgb);
        assert_eq!(purple.model(), None);
        assert_eq!(purple.hex(), "#800080");
        assert_eq!(purple.convert_to("named").unwrap().text(), "purple");
    }

    #[test]
    fn average_alpha() {
        let left = Color::from_rgba(Rgb::new(255, 0, 0), 255.0);
        let right = Color::from_rgba(Rgb::new(0, 0, 255), 0.0);
        let mixed = Color::average(&left, &right);

        assert_eq!(mixed.to_rgb(), Rgb::new(128, 0, 128));
        assert_eq!(mixed.alpha(), Some(128.0));
        assert_eq!(mixed.rgb_channel(3), Some(Channel::Number(128.0)));
    }

    #[test]
    fn alpha_needs_both_sides() {
        let left = Color::from_rgba(Rgb::new(255, 0, 0), 255.0);
        let right = Color::from_rgb(Rgb::new(0, 0, 255));
        assert_eq!(Color::average(&left, &right).alpha(), None);
        assert_eq!(Color::average(&right, &left).alpha(), None);
    }

    #[test]
    fn interpolate_ends() {
        let left = Color::from_rgb(Rgb::new(10, 20, 30));
        let right = Color::from_rgb(Rgb::new(110, 120, 130));

        assert_eq!(left.interpolate(&right, 0.0).to_rgb(), left.to_rgb());
        assert_eq!(left.interpolate(&right, 1.0).to_rgb(), right.to_rgb());
        assert_eq!(
            left.interpolate(&right, 0.25).to_rgb(),
            Rgb::new(35, 45, 55)
        );
    }

    #[test]
    fn interpolate_saturates() {
        let left = Color::from_rgb(Rgb::BLACK);
        let right = Color::from_rgb(Rgb::WHITE);
        assert_eq!(left.interpolate(&right, 2.0).to_rgb(), Rgb::WHITE);
        assert_eq!(left.interpolate(&right, -1.0).to_rgb(), Rgb::BLACK);
    }

    #[test]
    fn average_ignores_models() {
        let teal = Color::from_text("teal").unwrap();
        let mixed = Color::average(&teal, &teal);
        assert_eq!(mixed.to_rgb(), Rgb::new(0, 128, 128));
        assert_eq!(mixed.text(), "#008080");
    }
}
