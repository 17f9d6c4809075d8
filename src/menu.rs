//! # Restaurant Menu
//!
//! A composite skin: dishes are leaves, categories are [`Composite`]s, and the whole menu is a
//! category of categories. A category's price is the sum of everything under it.

use pattern_framework::{walk, Component, Composite};
use serde::{Deserialize, Serialize};

/// A single dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

impl Component for MenuItem {
    type Output = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn operation(&self) -> f64 {
        self.price
    }

    fn detail(&self) -> Option<&str> {
        Some(self.description.as_str()).filter(|d| !d.is_empty())
    }
}

pub type Menu = Composite<f64>;

/// One line per node, indented two spaces per level, depth-first. A dish with a description
/// gets a second line for it.
pub fn render(menu: &Menu) -> Vec<String> {
    let mut lines = Vec::new();
    walk(menu, &mut |depth, node| {
        let indent = "  ".repeat(depth);
        if node.is_composite() {
            lines.push(format!("{indent}{} ({:.2})", node.name(), node.operation()));
            return;
        }
        lines.push(format!("{indent}{} - {:.2}", node.name(), node.operation()));
        if let Some(description) = node.detail() {
            lines.push(format!("{indent}  {description}"));
        }
    });
    lines
}

/// The house menu: three main dishes and a rice dish.
pub fn todays_menu() -> Menu {
    let main_dishes = Composite::new("Main Dishes")
        .with(MenuItem::new("Kung Pao Chicken", 38.0, "Sichuan classic, numbing and spicy"))
        .with(MenuItem::new("Sweet and Sour Pork", 42.0, "Crisp outside, tender inside"))
        .with(MenuItem::new("Mapo Tofu", 32.0, "Silky tofu in chili bean sauce"));

    let rice_dishes = Composite::new("Rice Dishes").with(MenuItem::new(
        "Yangzhou Fried Rice",
        28.0,
        "Egg fried rice with shrimp and ham",
    ));

    Composite::new("Restaurant Menu")
        .with(main_dishes)
        .with(rice_dishes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_totals() {
        let menu = todays_menu();
        assert_eq!(menu.operation(), 140.0);

        let totals: Vec<f64> = menu.children().iter().map(|c| c.operation()).collect();
        assert_eq!(totals, vec![112.0, 28.0]);
    }

    #[test]
    fn two_item_category_totals_eighty() {
        let category = Composite::new("Specials")
            .with(MenuItem::new("Kung Pao Chicken", 38.0, ""))
            .with(MenuItem::new("Sweet and Sour Pork", 42.0, ""));
        assert_eq!(category.operation(), 80.0);
    }

    #[test]
    fn render_indents_by_depth() {
        let lines = render(&todays_menu());
        assert_eq!(lines[0], "Restaurant Menu (140.00)");
        assert_eq!(lines[1], "  Main Dishes (112.00)");
        assert_eq!(lines[2], "    Kung Pao Chicken - 38.00");
        assert_eq!(lines[3], "      Sichuan classic, numbing and spicy");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("      Egg fried rice with shrimp and ham")
        );
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn empty_category_renders_as_category() {
        let menu = Menu::new("Menu")
            .with(Menu::new("Desserts"))
            .with(MenuItem::new("Jasmine Tea", 8.0, ""));
        assert_eq!(
            render(&menu),
            vec!["Menu (8.00)", "  Desserts (0.00)", "  Jasmine Tea - 8.00"]
        );
    }
}
