//! Colors - Dashboard Theme Colors

use gpui::{Rgba, rgb, rgba};

/// Dashboard color palette
pub struct DashColors;

impl DashColors {
    // Chrome
    /// Header bar
    pub fn header_bg() -> Rgba { rgb(0x1e293b) }
    pub fn header_text() -> Rgba { rgb(0xf8fafc) }
    /// Status bar
    pub fn status_bar_bg() -> Rgba { rgb(0xf1f5f9) }

    // Backgrounds
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    pub fn backdrop() -> Rgba { rgba(0x00000088) }

    // Text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xef4444) }
    pub fn info() -> Rgba { rgb(0x3b82f6) }

    // Borders
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }

    // Buttons: (background, text, hover)
    pub fn button_primary() -> (Rgba, Rgba, Rgba) { (rgb(0x3b82f6), rgb(0xffffff), rgb(0x2563eb)) }
    pub fn button_secondary() -> (Rgba, Rgba, Rgba) { (rgb(0xe5e7eb), rgb(0x1f2937), rgb(0xd1d5db)) }
    pub fn button_danger() -> (Rgba, Rgba, Rgba) { (rgb(0xef4444), rgb(0xffffff), rgb(0xdc2626)) }
    pub fn button_ghost() -> (Rgba, Rgba, Rgba) { (rgba(0x00000000), rgb(0x6b7280), rgb(0xf3f4f6)) }

    // Table
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Selected rows
    pub fn table_row_selected() -> Rgba { rgb(0xe5e7eb) }
    /// Row in edit mode
    pub fn table_row_editing() -> Rgba { rgb(0xeff6ff) }

    // Inputs
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
    pub fn checkbox_checked() -> Rgba { rgb(0x3b82f6) }
}
