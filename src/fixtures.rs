// 🛒 Demo items served by the `/items` endpoint
// Static data only, unrelated to anything in the registry

use crate::receipt::Item;

/// Fixed, ordered list of sample items
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new("Milk", "2.99"),
        Item::new("Pepsi - 12-oz", "1.25"),
    ]
}
