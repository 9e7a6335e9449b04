//! Menu entries and their image handles.

use serde::Serialize;

/// Opaque handle to a dish picture.
///
/// The handle is a resource id; [`ImageRef::glyph`] resolves it to something
/// a terminal cell can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ImageRef(&'static str);

impl ImageRef {
    /// Creates a handle from a resource id.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Resource id this handle points at.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.0
    }

    /// Glyph drawn in place of the picture.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self.id() {
            "pizza" => "🍕",
            "hamburguesa" => "🍔",
            "tacos" => "🌮",
            "lasagna" => "🍲",
            "spaghetti" => "🍝",
            "torta" => "🥪",
            _ => "🍽",
        }
    }
}

/// A static menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Dish {
    /// Display name.
    pub name: &'static str,
    /// Picture shown next to the name.
    pub image: ImageRef,
}

impl Dish {
    const fn new(name: &'static str, image: &'static str) -> Self {
        Self {
            name,
            image: ImageRef::new(image),
        }
    }
}

/// The fixed menu, in display order.
pub const MENU: [Dish; 6] = [
    Dish::new("Pizza", "pizza"),
    Dish::new("Hamburguesa", "hamburguesa"),
    Dish::new("Tacos", "tacos"),
    Dish::new("Lasagna", "lasagna"),
    Dish::new("Spaghetti", "spaghetti"),
    Dish::new("Torta", "torta"),
];

/// Borrow the fixed menu.
#[must_use]
pub fn menu() -> &'static [Dish] {
    &MENU
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let names: Vec<&str> = menu().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            ["Pizza", "Hamburguesa", "Tacos", "Lasagna", "Spaghetti", "Torta"]
        );
    }

    #[test]
    fn test_every_dish_has_a_known_glyph() {
        for dish in menu() {
            assert_ne!(dish.image.glyph(), "🍽", "{} has no glyph", dish.name);
        }
    }

    #[test]
    fn test_unknown_image_falls_back() {
        assert_eq!(ImageRef::new("ceviche").glyph(), "🍽");
    }

    #[test]
    fn test_image_serializes_as_id() {
        let json = serde_json::to_string(&MENU[0]).unwrap();
        assert_eq!(json, r#"{"name":"Pizza","image":"pizza"}"#);
    }
}
