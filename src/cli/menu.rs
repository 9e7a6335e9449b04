//! `menu` command: print the fixed menu.

use crate::state::{menu, Dish};
use color_eyre::Result;
use std::fmt::Write as _;

/// Format the menu as plain text or JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_menu(dishes: &[Dish], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(dishes)?);
    }

    let mut out = String::new();
    for (i, dish) in dishes.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {} {}", i + 1, dish.image.glyph(), dish.name);
    }
    Ok(out)
}

/// Print the menu to stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(json: bool) -> Result<()> {
    let text = format_menu(menu(), json)?;
    print!("{text}");
    if json {
        println!();
    }
    Ok(())
}
