use std::io;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a single accepted purchase request.
///
/// Fields are set once at creation and never mutated afterwards; the history
/// only reads them to compute totals or hand out snapshots. Serialized field
/// names are PascalCase to match the shape the intake endpoint exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the history service
    /// * `customer_name` - Name of the ordering customer, taken as-is
    /// * `product_name` - Name of the ordered product, taken as-is
    /// * `quantity` - Ordered quantity; negative and zero values are legal
    /// * `unit_price` - Price per unit; negative and zero values are legal
    pub fn new(
        id: i32,
        customer_name: impl Into<String>,
        product_name: impl Into<String>,
        quantity: i32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Computes `quantity * unit_price` in the decimal domain.
    ///
    /// Exact for every product that fits `Decimal`'s 96-bit mantissa, which
    /// covers a quantity of `i32::MAX` at a unit price of 1 as well as a
    /// quantity of 1 at `Decimal::MAX`. Products outside that range panic in
    /// the underlying multiplication.
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    /// Computes the total and writes a `Total (maybe): {value}` line to the
    /// supplied diagnostic stream.
    pub fn report_total(&self, out: &mut impl io::Write) -> io::Result<Decimal> {
        let total = self.total();
        writeln!(out, "Total (maybe): {}", total)?;
        Ok(total)
    }
}
