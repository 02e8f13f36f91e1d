//! Legacy `§` formatting codes, the form item names and lore are stored in.

use colored::Colorize;

use super::color::{Color, NamedColor, RGBColor};

pub const SECTION: char = '§';
pub const ALTERNATE: char = '&';

const CODES: &str = "0123456789abcdefklmnorx";

fn is_code(c: char) -> bool {
    CODES.contains(c.to_ascii_lowercase())
}

/// Translates `&`-prefixed codes (including `&#RRGGBB`) into `§` codes.
pub fn style(text: &str) -> String {
    translate_alternate_codes(ALTERNATE, text)
}

pub fn translate_alternate_codes(alternate: char, text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == alternate && i + 1 < chars.len() {
            let next = chars[i + 1];
            if next == '#'
                && i + 8 <= chars.len()
                && chars[i + 2..i + 8].iter().all(char::is_ascii_hexdigit)
            {
                out.push(SECTION);
                out.push('x');
                for digit in &chars[i + 2..i + 8] {
                    out.push(SECTION);
                    out.push(digit.to_ascii_lowercase());
                }
                i += 8;
                continue;
            }
            if is_code(next) {
                out.push(SECTION);
                out.push(next.to_ascii_lowercase());
                i += 2;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }
    out
}

/// Removes every `§` code.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == SECTION {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Default, Clone, Copy)]
struct ConsoleStyle {
    color: Color,
    bold: bool,
    italic: bool,
    underlined: bool,
    strikethrough: bool,
}

impl ConsoleStyle {
    fn paint(&self, text: &str) -> String {
        let mut colored = self.color.console_color(text);
        if self.bold {
            colored = colored.bold();
        }
        if self.italic {
            colored = colored.italic();
        }
        if self.underlined {
            colored = colored.underline();
        }
        if self.strikethrough {
            colored = colored.strikethrough();
        }
        colored.to_string()
    }
}

/// Renders a `§`-formatted string with terminal colors.
pub fn to_pretty_console(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut segment = String::new();
    let mut style = ConsoleStyle::default();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != SECTION || i + 1 >= chars.len() {
            segment.push(chars[i]);
            i += 1;
            continue;
        }
        if !segment.is_empty() {
            out.push_str(&style.paint(&segment));
            segment.clear();
        }
        let code = chars[i + 1].to_ascii_lowercase();
        i += 2;
        match code {
            'x' => {
                // §x§r§r§g§g§b§b
                let digits: String = chars[i..]
                    .chunks(2)
                    .take(6)
                    .filter(|pair| pair.len() == 2 && pair[0] == SECTION)
                    .map(|pair| pair[1])
                    .collect();
                if let Ok(rgb) = digits.parse::<RGBColor>() {
                    style = ConsoleStyle {
                        color: Color::Rgb(rgb),
                        ..ConsoleStyle::default()
                    };
                    i += 12;
                }
            }
            'l' => style.bold = true,
            'o' => style.italic = true,
            'n' => style.underlined = true,
            'm' => style.strikethrough = true,
            'r' => style = ConsoleStyle::default(),
            other => {
                if let Some(named) = NamedColor::from_code(other) {
                    style = ConsoleStyle {
                        color: Color::Named(named),
                        ..ConsoleStyle::default()
                    };
                }
            }
        }
    }
    if !segment.is_empty() {
        out.push_str(&style.paint(&segment));
    }
    out
}

#[cfg(test)]
mod test {
    use super::{strip, style};

    #[test]
    fn translates_codes() {
        assert_eq!(style("&6Big &lSword"), "§6Big §lSword");
        assert_eq!(style("&A"), "§a");
    }

    #[test]
    fn leaves_non_codes() {
        assert_eq!(style("Fish & Chips"), "Fish & Chips");
        assert_eq!(style("trailing &"), "trailing &");
        assert_eq!(style("&z"), "&z");
    }

    #[test]
    fn translates_hex() {
        assert_eq!(style("&#FF8000x"), "§x§f§f§8§0§0§0x");
        assert_eq!(style("&#FF80"), "&#FF80");
    }

    #[test]
    fn strips_codes() {
        assert_eq!(strip(&style("&6Big &#FF8000Sword")), "Big Sword");
    }
}
