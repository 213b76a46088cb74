/// Multiplier for fewer than 10 units
pub const TAX_SMALL_ORDER: f64 = 1.21;
/// Multiplier for 10 to 19 units
pub const TAX_MEDIUM_ORDER: f64 = 1.17;
/// Multiplier for 20 units or more
pub const TAX_LARGE_ORDER: f64 = 1.15;

pub fn tax_multiplier(quantity: i64) -> f64 {
    match quantity {
        q if q < 10 => TAX_SMALL_ORDER,
        q if q < 20 => TAX_MEDIUM_ORDER,
        _ => TAX_LARGE_ORDER,
    }
}

pub fn apply_tax(subtotal: f64, quantity: i64) -> f64 {
    subtotal * tax_multiplier(quantity)
}
