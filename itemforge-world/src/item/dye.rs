use itemforge_core::text::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    pub const ALL: [DyeColor; 16] = [
        DyeColor::White,
        DyeColor::Orange,
        DyeColor::Magenta,
        DyeColor::LightBlue,
        DyeColor::Yellow,
        DyeColor::Lime,
        DyeColor::Pink,
        DyeColor::Gray,
        DyeColor::LightGray,
        DyeColor::Cyan,
        DyeColor::Purple,
        DyeColor::Blue,
        DyeColor::Brown,
        DyeColor::Green,
        DyeColor::Red,
        DyeColor::Black,
    ];

    /// Color the dye produces on armor, banners and the like.
    pub const fn rgb(self) -> RGBColor {
        RGBColor::from_u24(match self {
            DyeColor::White => 0xF9FFFE,
            DyeColor::Orange => 0xF9801D,
            DyeColor::Magenta => 0xC74EBD,
            DyeColor::LightBlue => 0x3AB3DA,
            DyeColor::Yellow => 0xFED83D,
            DyeColor::Lime => 0x80C71F,
            DyeColor::Pink => 0xF38BAA,
            DyeColor::Gray => 0x474F52,
            DyeColor::LightGray => 0x9D9D97,
            DyeColor::Cyan => 0x169C9C,
            DyeColor::Purple => 0x8932B8,
            DyeColor::Blue => 0x3C44AA,
            DyeColor::Brown => 0x835432,
            DyeColor::Green => 0x5E7C16,
            DyeColor::Red => 0xB02E26,
            DyeColor::Black => 0x1D1D21,
        })
    }

    /// The dye closest to `color` in RGB space.
    pub fn nearest(color: RGBColor) -> DyeColor {
        Self::ALL
            .into_iter()
            .min_by_key(|dye| dye.rgb().distance_squared(&color))
            .unwrap_or(DyeColor::White)
    }
}

#[cfg(test)]
mod test {
    use itemforge_core::text::RGBColor;

    use super::DyeColor;

    #[test]
    fn exact_colors_map_to_themselves() {
        for dye in DyeColor::ALL {
            assert_eq!(DyeColor::nearest(dye.rgb()), dye);
        }
    }

    #[test]
    fn nearest_dye() {
        assert_eq!(DyeColor::nearest(RGBColor::WHITE), DyeColor::White);
        assert_eq!(DyeColor::nearest(RGBColor::new(255, 0, 0)), DyeColor::Red);
        assert_eq!(DyeColor::nearest(RGBColor::new(0, 0, 0)), DyeColor::Black);
    }
}
