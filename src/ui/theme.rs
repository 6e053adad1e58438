use ratatui::style::Color;

pub const AMBER_400: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const AMBER_500: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const AMBER_700: Color = Color::Rgb(0xb4, 0x53, 0x09);
pub const STONE_100: Color = Color::Rgb(0xf5, 0xf5, 0xf4);
pub const STONE_300: Color = Color::Rgb(0xd6, 0xd3, 0xd1);
pub const STONE_400: Color = Color::Rgb(0xa8, 0xa2, 0x9e);
pub const STONE_600: Color = Color::Rgb(0x57, 0x53, 0x4e);
pub const STONE_800: Color = Color::Rgb(0x29, 0x25, 0x24);
pub const ERROR_RED: Color = Color::Rgb(0xf8, 0x71, 0x71);
