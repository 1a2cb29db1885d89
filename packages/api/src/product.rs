use serde::{Deserialize, Deserializer, Serialize};

/// A product record as returned by `GET /api/products`.
///
/// The backend owns the shape, so every field is lenient: missing strings
/// fall back to empty, and `price` accepts either a JSON number or a numeric
/// string.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Product {
    /// Server-assigned identifier.
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,

    #[serde(default)]
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Only used when seeding, never displayed.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// The price as shown on a card, e.g. `$34.00`.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }

    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn summary(&self) -> Option<&str> {
        self.description.as_deref().filter(|text| !text.is_empty())
    }
}

/// The body of `POST /api/products`: a [`Product`] without its identifier.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
    pub tags: Vec<String>,
}

/// Formats an amount as dollars with exactly two decimal places.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
        Null(()),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(price) => Ok(price),
        RawPrice::Text(text) => match text.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => Ok(price),
            _ => Err(serde::de::Error::custom(format!("invalid price `{text}`"))),
        },
        RawPrice::Null(()) => Ok(0.0),
    }
}
