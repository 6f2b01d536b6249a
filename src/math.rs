//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::Float;

use crate::Component;

pub type Vector = Vector3D<Component>;

/// Round to the nearest integer with ties going up, `floor(x + 0.5)`.
pub fn round_half_up(value: Component) -> Component {
    (value + 0.5).floor()
}

/// Scale a 0.0 to 1.0 value to a 0 to 255 channel.
pub fn unit_to_byte(value: Component) -> u8 {
    // Float to int casts saturate, so out of range values land on 0 or 255.
    round_half_up(value * 255.0) as u8
}

/// Scale a 0 to 255 channel to a 0.0 to 1.0 value.
pub fn byte_to_unit(value: u8) -> Component {
    value as Component / 255.0
}

/// Force a value into the 0.0 to 1.0 range.
pub fn clamp_unit(value: Component) -> Component {
    if value <= 0.0 {
        0.0
    } else if value >= 1.0 {
        1.0
    } else {
        value
    }
}

/// Round a value to the given number of decimal places.
pub fn round_to(value: Component, places: i32) -> Component {
    let scale = (10.0 as Component).powi(places);
    (value * scale).round() / scale
}

/// Express a 0.0 to 1.0 value as a whole percentage.
pub fn percent(value: Component) -> i64 {
    (value * 100.0).round() as i64
}

/// The dot product of two 3 component vectors.
pub fn dot(a: Vector, b: Vector) -> Component {
    a.dot(b)
}

/// Linearly interpolate between `a` and `b` by `t`.
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}
