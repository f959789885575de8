use crate::models::Operator;

/// Heading printed above the operator list
pub const MENU_HEADING: &str = "Choose the operator:";

/// Numbered operator entries, one per line: `1. Plus (+)`.
pub fn menu_entries() -> Vec<String> {
    Operator::CHECK_ORDER
        .iter()
        .map(|op| format!("{}. {} ({})", op.digit(), op.label(), op.symbol()))
        .collect()
}

/// Full operator menu without styling.
pub fn render_menu() -> String {
    let mut menu = String::from(MENU_HEADING);
    for entry in menu_entries() {
        menu.push('\n');
        menu.push_str(&entry);
    }
    menu
}
