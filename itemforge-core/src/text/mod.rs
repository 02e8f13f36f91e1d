pub mod color;
pub mod legacy;

pub use color::{Color, NamedColor, RGBColor};
