use std::str::FromStr;

use colored::{ColoredString, Colorize};
use thiserror::Error;

/// Text color
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The default color for the text will be used, which varies by context.
    #[default]
    Reset,
    /// RGB Color
    Rgb(RGBColor),
    /// One of the 16 named Minecraft colors
    Named(NamedColor),
}

impl Color {
    pub fn console_color(&self, text: &str) -> ColoredString {
        match self {
            Color::Reset => text.clear(),
            Color::Named(color) => match color {
                NamedColor::Black => text.black(),
                NamedColor::DarkBlue => text.blue(),
                NamedColor::DarkGreen => text.green(),
                NamedColor::DarkAqua => text.cyan(),
                NamedColor::DarkRed => text.red(),
                NamedColor::DarkPurple => text.purple(),
                NamedColor::Gold => text.yellow(),
                NamedColor::Gray => text.bright_black(),
                NamedColor::DarkGray => text.bright_black(),
                NamedColor::Blue => text.bright_blue(),
                NamedColor::Green => text.bright_green(),
                NamedColor::Aqua => text.bright_cyan(),
                NamedColor::Red => text.bright_red(),
                NamedColor::LightPurple => text.bright_purple(),
                NamedColor::Yellow => text.bright_yellow(),
                NamedColor::White => text.white(),
            },
            Color::Rgb(color) => text.truecolor(color.red, color.green, color.blue),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("Hex color must be in the format '#RRGGBB', got '{0}'")]
    BadFormat(String),
    #[error("Invalid {0} component in hex color")]
    BadComponent(&'static str),
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct RGBColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RGBColor {
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColor { red, green, blue }
    }

    pub const fn from_u24(rgb: u32) -> Self {
        RGBColor {
            red: (rgb >> 16) as u8,
            green: (rgb >> 8) as u8,
            blue: rgb as u8,
        }
    }

    /// Squared euclidean distance in RGB space.
    pub fn distance_squared(&self, other: &RGBColor) -> u32 {
        let dr = i32::from(self.red) - i32::from(other.red);
        let dg = i32::from(self.green) - i32::from(other.green);
        let db = i32::from(self.blue) - i32::from(other.blue);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl FromStr for RGBColor {
    type Err = ColorError;

    /// Accepts `#RRGGBB`; the leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::BadFormat(s.to_string()));
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorError::BadComponent("red"))?;
        let g =
            u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorError::BadComponent("green"))?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorError::BadComponent("blue"))?;

        Ok(RGBColor::new(r, g, b))
    }
}

/// Named Minecraft color
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum NamedColor {
    Black = 0,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    /// The legacy formatting code (`§0`..`§f`).
    pub const fn code(self) -> char {
        match self {
            NamedColor::Black => '0',
            NamedColor::DarkBlue => '1',
            NamedColor::DarkGreen => '2',
            NamedColor::DarkAqua => '3',
            NamedColor::DarkRed => '4',
            NamedColor::DarkPurple => '5',
            NamedColor::Gold => '6',
            NamedColor::Gray => '7',
            NamedColor::DarkGray => '8',
            NamedColor::Blue => '9',
            NamedColor::Green => 'a',
            NamedColor::Aqua => 'b',
            NamedColor::Red => 'c',
            NamedColor::LightPurple => 'd',
            NamedColor::Yellow => 'e',
            NamedColor::White => 'f',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        let color = match code.to_ascii_lowercase() {
            '0' => NamedColor::Black,
            '1' => NamedColor::DarkBlue,
            '2' => NamedColor::DarkGreen,
            '3' => NamedColor::DarkAqua,
            '4' => NamedColor::DarkRed,
            '5' => NamedColor::DarkPurple,
            '6' => NamedColor::Gold,
            '7' => NamedColor::Gray,
            '8' => NamedColor::DarkGray,
            '9' => NamedColor::Blue,
            'a' => NamedColor::Green,
            'b' => NamedColor::Aqua,
            'c' => NamedColor::Red,
            'd' => NamedColor::LightPurple,
            'e' => NamedColor::Yellow,
            'f' => NamedColor::White,
            _ => return None,
        };
        Some(color)
    }
}

#[cfg(test)]
mod test {
    use super::{ColorError, NamedColor, RGBColor};

    #[test]
    fn parse_hex() {
        assert_eq!(
            "#FF8000".parse::<RGBColor>(),
            Ok(RGBColor::new(255, 128, 0))
        );
        assert_eq!("00ff00".parse::<RGBColor>(), Ok(RGBColor::new(0, 255, 0)));
    }

    #[test]
    fn reject_bad_hex() {
        assert!(matches!(
            "#FFF".parse::<RGBColor>(),
            Err(ColorError::BadFormat(_))
        ));
        assert_eq!(
            "#GG0000".parse::<RGBColor>(),
            Err(ColorError::BadComponent("red"))
        );
        assert!("#ÿÿÿ".parse::<RGBColor>().is_err());
    }

    #[test]
    fn legacy_codes_round_trip() {
        for code in "0123456789abcdef".chars() {
            let color = NamedColor::from_code(code).unwrap();
            assert_eq!(color.code(), code);
        }
        assert_eq!(NamedColor::from_code('A'), Some(NamedColor::Green));
        assert_eq!(NamedColor::from_code('z'), None);
    }

    #[test]
    fn u24_channels() {
        assert_eq!(RGBColor::from_u24(0xF9801D), RGBColor::new(0xF9, 0x80, 0x1D));
    }
}
