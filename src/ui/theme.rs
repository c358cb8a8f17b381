//! Theme constants for the suicide checkers GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(92, 58, 33);
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(238, 214, 176);
pub const DARK_SQUARE: Color32 = Color32::from_rgb(150, 98, 60);
pub const COORD_TEXT: Color32 = Color32::from_rgb(240, 225, 200);

// Piece colors
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_RIM: Color32 = Color32::from_rgb(80, 80, 90);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 248, 240);
pub const WHITE_PIECE_RIM: Color32 = Color32::from_rgb(190, 185, 175);

// Markers
pub const SELECTED: Color32 = Color32::from_rgb(255, 210, 60);
pub const LAST_MOVE: Color32 = Color32::from_rgb(230, 60, 60);
pub const CAPTURED_MARK: Color32 = Color32::from_rgb(255, 70, 70);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn target_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(50, 220, 50, 140)
}

pub fn hint_marker() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 160, 255, 160)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const MARKER_RADIUS_RATIO: f32 = 0.12;
