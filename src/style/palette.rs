//! Named colors shared by the built-in gradients and chart styles.

use crate::render::Color;

const fn hex(rgb: u32) -> Color {
    Color::rgb(
        ((rgb >> 16) & 0xFF) as f64 / 255.0,
        ((rgb >> 8) & 0xFF) as f64 / 255.0,
        (rgb & 0xFF) as f64 / 255.0,
    )
}

pub const ORANGE_START: Color = hex(0xEC2301);
pub const ORANGE_END: Color = hex(0xFF782C);
pub const GRADIENT_PURPLE: Color = hex(0x7B75FF);
pub const GRADIENT_NEON_BLUE: Color = hex(0x6FEAFF);
pub const GRADIENT_UPPER_BLUE: Color = hex(0xC2E8FF);
pub const GRADIENT_LOWER_BLUE: Color = hex(0xF1F9FF);
pub const DARK_PURPLE: Color = hex(0x1B205E);
pub const BORDER_BLUE: Color = hex(0x4EBCFF);
pub const LEGEND_TEXT: Color = hex(0xA7A6A8);
pub const LEGEND_COLOR: Color = hex(0xE8E7EA);
pub const LEGEND_DARK_COLOR: Color = hex(0x545454);
pub const INDICATOR_KNOB: Color = hex(0xFF57A6);
pub const GRAY: Color = hex(0x8E8E93);

pub(crate) const GREEN_START: Color = hex(0x0BCDF7);
pub(crate) const GREEN_END: Color = hex(0xA2FEAE);
pub(crate) const BLU_START: Color = hex(0x0591FF);
pub(crate) const BLU_END: Color = hex(0x29D9FE);
pub(crate) const BLU_PURPL_START: Color = hex(0x4ABBFB);
pub(crate) const BLU_PURPL_END: Color = hex(0x8C00FF);
pub(crate) const PURPLE_START: Color = hex(0x741DF4);
pub(crate) const PURPLE_END: Color = hex(0xC501B0);
