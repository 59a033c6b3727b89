use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier the orders service uses for a record.
///
/// The service is free to send either a number or a string; the value is
/// kept as received and rendered verbatim in URLs, tables and chart labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerId::Numeric(id) => write!(f, "{id}"),
            CustomerId::Text(id) => f.write_str(id),
        }
    }
}

/// Stands in for a record that arrived without an id
impl Default for CustomerId {
    fn default() -> Self {
        CustomerId::Text(String::new())
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        CustomerId::Numeric(id)
    }
}

impl From<i32> for CustomerId {
    fn from(id: i32) -> Self {
        CustomerId::Numeric(i64::from(id))
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        CustomerId::Text(id.to_string())
    }
}

/// One purchase record as returned by `GET /getAll`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_id: CustomerId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    /// Server-side total, shown as-is
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: f64,
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Order {
    pub fn new(
        customer_id: impl Into<CustomerId>,
        product: impl Into<String>,
        price: f64,
        quantity: f64,
        total: f64,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            product: product.into(),
            price,
            quantity,
            total,
        }
    }

    /// `price * quantity`; never cached
    pub fn revenue(&self) -> f64 {
        self.price * self.quantity
    }
}

/// Formats an amount with a leading dollar sign (`$10`, `$2.5`).
pub fn format_money(value: f64) -> String {
    format!("${value}")
}
