//! Application-wide constants.
//!
//! Timing, layout sizes, file names and every user-facing string live here
//! so the widgets only deal with placement and style.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Timing Configuration ===

/// Default UI tick interval in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

// === Path Configuration ===

/// Name of the config file inside the app's config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding the config path.
pub const CONFIG_ENV_VAR: &str = "MENUBOARD_CONFIG";

// === Layout ===

/// Height of one dish card, borders included.
pub const ROW_HEIGHT: u16 = 5;
/// Height of the top app bar.
pub const TOP_BAR_HEIGHT: u16 = 3;
/// Blank rows between the top bar and the list.
pub const LIST_SPACING: u16 = 1;
/// Horizontal padding around the list.
pub const LIST_PADDING: u16 = 2;
/// Height of the activity log panel when shown.
pub const LOG_PANEL_HEIGHT: u16 = 8;
/// Lines kept in the activity log.
pub const MAX_LOG_LINES: usize = 200;

// === UI Labels ===

pub const TITLE_MENU: &str = "Menú";
pub const TITLE_ACTIVITY: &str = " Activity ";
pub const LABEL_QUANTITY: &str = "Cantidad: ";
pub const BUTTON_DECREMENT: &str = "[-]";
pub const BUTTON_INCREMENT: &str = "[+]";
pub const DIALOG_TITLE_PREFIX: &str = "¡Pediste ";
pub const DIALOG_TITLE_SUFFIX: &str = "!";
pub const DIALOG_BODY: &str = "¡Excelente elección!";
pub const DIALOG_CONFIRM: &str = "Cerrar";

// === Activity Log Prefixes ===

pub const LOG_INIT: &str = "INIT: ";
pub const LOG_CONFIG: &str = "CONFIG: ";
pub const LOG_ORDER: &str = "ORDER: ";
pub const LOG_REMOVE: &str = "REMOVE: ";
pub const LOG_DIALOG: &str = "DIALOG: ";
pub const LOG_UNMOUNT: &str = "UNMOUNT: ";
