use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

/// Product record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Server-assigned identifier (UUID v4 text)
    pub id: String,
    pub name: String,
    pub quantity: i64,
    /// Unique across all products
    pub code_value: String,
    #[serde(default)]
    pub is_published: bool,
    /// Expiration date, `DD/MM/YYYY`
    pub expiration: String,
    pub price: f64,
}

/// Body of `POST /products` and `PUT /products/{id}`
///
/// Every field defaults so that a missing field surfaces as the
/// "all fields must be filled" validation error rather than a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductInput {
    #[schema(example = "Oil - Margarine")]
    pub name: String,
    #[schema(example = 439)]
    pub quantity: i64,
    #[schema(example = "S82254D")]
    pub code_value: String,
    pub is_published: Option<bool>,
    #[schema(example = "15/12/2021")]
    pub expiration: String,
    #[schema(example = 71.42)]
    pub price: f64,
}

impl ProductInput {
    pub fn into_product(self, id: impl Into<String>) -> Product {
        Product {
            id: id.into(),
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published.unwrap_or(false),
            expiration: self.expiration,
            price: self.price,
        }
    }
}

/// Partial update. Only the fields present with the expected JSON type
/// are applied; everything else in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let text = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            name: text("name"),
            quantity: fields.get("quantity").and_then(Value::as_i64),
            code_value: text("code_value"),
            is_published: fields.get("is_published").and_then(Value::as_bool),
            expiration: text("expiration"),
            price: fields.get("price").and_then(Value::as_f64),
        }
    }

    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(code_value) = self.code_value {
            product.code_value = code_value;
        }
        if let Some(is_published) = self.is_published {
            product.is_published = is_published;
        }
        if let Some(expiration) = self.expiration {
            product.expiration = expiration;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

/// Outcome of `PUT /products/{id}`
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    Updated(Product),
    Created(Product),
}

/// Result of the consumer price computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TotalPrice {
    pub products: Vec<Product>,
    pub total_price: f64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PriceQuery {
    /// Strict lower bound on price
    pub price: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ConsumerPriceQuery {
    /// Comma-separated product ids; repeat an id to buy several units
    pub list: Option<String>,
}

impl ConsumerPriceQuery {
    /// Trimmed, non-empty ids in request order. Empty means "all products".
    pub fn ids(&self) -> Vec<String> {
        self.list
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        ProductInput {
            name: "Oil".into(),
            quantity: 10,
            code_value: "S1".into(),
            is_published: None,
            expiration: "01/01/2030".into(),
            price: 5.0,
        }
        .into_product("p1")
    }

    #[test]
    fn test_input_defaults_publish_flag() {
        let product = sample();
        assert_eq!(product.id, "p1");
        assert!(!product.is_published);
    }

    #[test]
    fn test_input_missing_fields_decode_as_zero_values() {
        let input: ProductInput = serde_json::from_value(json!({"name": "Oil"})).unwrap();
        assert_eq!(input.name, "Oil");
        assert_eq!(input.quantity, 0);
        assert!(input.code_value.is_empty());
    }

    #[test]
    fn test_patch_ignores_mistyped_and_unknown_fields() {
        let body = json!({
            "name": "Butter",
            "quantity": "ten",
            "price": 7.5,
            "color": "red"
        });
        let patch = ProductPatch::from_fields(body.as_object().unwrap());

        assert_eq!(patch.name.as_deref(), Some("Butter"));
        assert_eq!(patch.quantity, None);
        assert_eq!(patch.price, Some(7.5));

        let mut product = sample();
        patch.apply(&mut product);
        assert_eq!(product.name, "Butter");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price, 7.5);
    }

    #[test]
    fn test_patch_integer_price_is_accepted() {
        let body = json!({"price": 3});
        let patch = ProductPatch::from_fields(body.as_object().unwrap());
        assert_eq!(patch.price, Some(3.0));
        assert_eq!(
            ProductPatch::from_fields(&Map::new()),
            ProductPatch::default()
        );
    }

    #[test]
    fn test_consumer_price_ids() {
        let query = ConsumerPriceQuery {
            list: Some(" a, b ,,a ".into()),
        };
        assert_eq!(query.ids(), vec!["a", "b", "a"]);

        let query = ConsumerPriceQuery { list: None };
        assert!(query.ids().is_empty());
    }
}
