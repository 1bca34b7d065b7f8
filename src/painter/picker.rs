//! Sources of the fill color used for newly painted rectangles.

use crate::draw::{Color, ColorParseError};
use log::debug;

/// Anything that can hand out a paintable color on demand, such as a color picker
/// widget.
pub trait ColorSource {
    fn current_color(&self) -> Color;
}

impl ColorSource for Color {
    fn current_color(&self) -> Color {
        *self
    }
}

/// A color picker holding a single selected value.
///
/// The value is always paintable: [`ColorPicker::set_value`] rejects anything that
/// does not parse and leaves the previous selection in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPicker {
    value: Color,
}

impl ColorPicker {
    pub fn new(initial: Color) -> Self {
        Self { value: initial }
    }

    /// Selects a new color from a name or `#rrggbb` string.
    pub fn set_value(&mut self, value: &str) -> Result<Color, ColorParseError> {
        let color = value.parse::<Color>()?;
        debug!("Picker color set to {}", color.to_hex());
        self.value = color;
        Ok(color)
    }

    /// Selected color as `#rrggbb`.
    pub fn value(&self) -> String {
        self.value.to_hex()
    }
}

impl ColorSource for ColorPicker {
    fn current_color(&self) -> Color {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, RED};

    #[test]
    fn picker_keeps_previous_value_on_bad_input() {
        let mut picker = ColorPicker::new(BLUE);
        assert!(picker.set_value("not-a-color").is_err());
        assert_eq!(picker.current_color(), BLUE);

        assert_eq!(picker.set_value("#ff0000").unwrap(), RED);
        assert_eq!(picker.value(), "#ff0000");
    }

    #[test]
    fn plain_color_is_a_fixed_source() {
        assert_eq!(RED.current_color(), RED);
    }
}
