//! Color palette.
//!
//! Dark Nord-style base with the menu's maroon app bar and the red/blue
//! button tints.

use ratatui::style::Color;

// === Base ===

/// Darkest polar night shade.
pub const NORD_POLAR_NIGHT_1: Color = Color::Rgb(46, 52, 64);
/// Medium polar night shade.
pub const NORD_POLAR_NIGHT_3: Color = Color::Rgb(67, 76, 94);
/// Lightest polar night shade.
pub const NORD_POLAR_NIGHT_4: Color = Color::Rgb(76, 86, 106);
/// Primary snow storm shade.
pub const NORD_SNOW_STORM_1: Color = Color::Rgb(216, 222, 233);
/// Frost accent 2 - cyan.
pub const NORD_FROST_2: Color = Color::Rgb(136, 192, 208);

// === Nord Aurora (Log prefixes) ===

/// Aurora red - discarded state.
pub const NORD_RED: Color = Color::Rgb(191, 97, 106);
/// Aurora orange - removals.
pub const NORD_ORANGE: Color = Color::Rgb(208, 135, 112);
/// Aurora yellow - dialog events.
pub const NORD_YELLOW: Color = Color::Rgb(235, 203, 139);
/// Aurora green - orders.
pub const NORD_GREEN: Color = Color::Rgb(163, 190, 140);

// === App Bar ===

/// Top bar background (#83100F).
pub const TOP_BAR_BG: Color = Color::Rgb(0x83, 0x10, 0x0F);
/// Top bar title color.
pub const TOP_BAR_FG: Color = Color::White;

// === Semantic Colors ===

/// Primary text color.
pub const TEXT_PRIMARY: Color = NORD_SNOW_STORM_1;
/// Secondary/muted text color.
pub const TEXT_SECONDARY: Color = NORD_POLAR_NIGHT_4;
/// Primary accent color.
pub const ACCENT_PRIMARY: Color = NORD_FROST_2;
/// Decrement button tint.
pub const BUTTON_DECREMENT: Color = Color::Rgb(220, 50, 47);
/// Increment button tint.
pub const BUTTON_INCREMENT: Color = Color::Rgb(66, 133, 244);

// === UI Element Colors ===

/// Default card border color.
pub const BORDER_DEFAULT: Color = NORD_POLAR_NIGHT_3;
/// Selected card border color.
pub const BORDER_FOCUSED: Color = NORD_FROST_2;
/// Dialog surface color.
pub const DIALOG_BG: Color = NORD_POLAR_NIGHT_1;
