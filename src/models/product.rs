use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category_id: u32,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ProductResponse {
    pub product: Product,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// Catalog filters. Absent filters are omitted from the query string
/// entirely, never sent as empty values.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ProductFilter {
    pub category_id: Option<u32>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    /// Query string including the leading `?`, or empty when no
    /// filter is active.
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(category_id) = self.category_id {
            params.push(format!("category_id={}", category_id));
        }
        if let Some(min_price) = self.min_price {
            params.push(format!("min_price={}", min_price));
        }
        if let Some(max_price) = self.max_price {
            params.push(format!("max_price={}", max_price));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_produces_no_query() {
        assert_eq!(ProductFilter::default().query_string(), "");
    }

    #[test]
    fn only_active_filters_appear() {
        let filter = ProductFilter {
            category_id: Some(3),
            min_price: None,
            max_price: Some(99.5),
        };
        assert_eq!(filter.query_string(), "?category_id=3&max_price=99.5");
    }

    #[test]
    fn all_filters_join_with_ampersands() {
        let filter = ProductFilter {
            category_id: Some(1),
            min_price: Some(10.0),
            max_price: Some(20.0),
        };
        assert_eq!(
            filter.query_string(),
            "?category_id=1&min_price=10&max_price=20"
        );
    }

    #[test]
    fn products_envelope_deserializes() {
        let json = r#"{"products": [{"id": 1, "name": "Oxford shirt",
            "description": "Slim fit", "price": 59.9, "category_id": 2}]}"#;
        let resp: ProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.products.len(), 1);
        assert_eq!(resp.products[0].name, "Oxford shirt");
        assert!(resp.products[0].quantity.is_none());
    }
}
