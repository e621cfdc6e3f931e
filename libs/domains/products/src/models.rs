use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store on creation, never changes afterwards
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Apple")]
    pub name: String,
    #[schema(example = 1.5)]
    pub price: f64,
    #[schema(example = 10)]
    pub quantity: i32,
}

/// Payload for creating a product. An `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Apple")]
    pub name: String,
    #[schema(example = 1.5)]
    pub price: f64,
    #[schema(example = 10)]
    pub quantity: i32,
}

/// Full replacement of a product. `id` must match the path id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProduct {
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Green apple")]
    pub name: String,
    #[schema(example = 1.75)]
    pub price: f64,
    #[schema(example = 8)]
    pub quantity: i32,
}

impl From<UpdateProduct> for Product {
    fn from(input: UpdateProduct) -> Self {
        Self {
            id: input.id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_product_ignores_id() {
        let input: CreateProduct =
            serde_json::from_value(json!({"id": 42, "name": "Apple", "price": 1.5, "quantity": 10}))
                .unwrap();
        assert_eq!(input.name, "Apple");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_product_requires_every_field() {
        let result = serde_json::from_value::<CreateProduct>(json!({"name": "Apple", "price": 1.5}));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let input = UpdateProduct {
            id: 1,
            name: String::new(),
            price: 1.0,
            quantity: 1,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: 1,
            name: "Apple".into(),
            price: 1.5,
            quantity: 10,
        };
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"id": 1, "name": "Apple", "price": 1.5, "quantity": 10})
        );
    }
}
