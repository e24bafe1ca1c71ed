use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item as exposed over HTTP
///
/// The id travels as a 24-character lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier
    #[serde(with = "hex_object_id")]
    #[schema(value_type = String, example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: ObjectId,
    /// Item name
    #[serde(default)]
    #[schema(example = "widget")]
    pub name: String,
    /// Price in the smallest currency unit; any i64 is accepted
    #[serde(default)]
    #[schema(example = 10)]
    pub price: i64,
}

/// Request body for create and replace
///
/// Omitted or `null` fields default to `""` and `0`. Unknown fields, `id`
/// included, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemInput {
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "widget")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = 10)]
    pub price: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ItemInput {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Item {
    /// Build the item that `input` describes under `id`.
    pub fn from_input(id: ObjectId, input: ItemInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
        }
    }
}

/// Serde adapter for an [`ObjectId`] written as a plain hex string.
pub mod hex_object_id {
    use mongodb::bson::oid::ObjectId;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObjectId, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ObjectId::parse_str(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_serializes_id_as_hex() {
        let id = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let item = Item::from_input(id, ItemInput::new("widget", 10));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"id": "65a1f0c2e4b0a1b2c3d4e5f6", "name": "widget", "price": 10})
        );
    }

    #[test]
    fn test_item_rejects_malformed_id() {
        let result = serde_json::from_value::<Item>(json!({"id": "xyz", "name": "a"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_item_input_defaults_missing_fields() {
        let input: ItemInput = serde_json::from_value(json!({"name": "b"})).unwrap();
        assert_eq!(input, ItemInput::new("b", 0));

        let empty: ItemInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, ItemInput::default());
    }

    #[test]
    fn test_item_input_null_fields_take_defaults() {
        let input: ItemInput =
            serde_json::from_value(json!({"name": null, "price": null})).unwrap();
        assert_eq!(input, ItemInput::default());

        let input: ItemInput = serde_json::from_value(json!({"name": null, "price": 3})).unwrap();
        assert_eq!(input, ItemInput::new("", 3));
    }

    #[test]
    fn test_item_input_ignores_id_and_unknown_fields() {
        let input: ItemInput = serde_json::from_value(json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "gadget",
            "price": -5,
            "color": "red"
        }))
        .unwrap();
        assert_eq!(input, ItemInput::new("gadget", -5));
    }

    #[test]
    fn test_item_input_rejects_wrong_types() {
        assert!(serde_json::from_value::<ItemInput>(json!({"price": "ten"})).is_err());
        assert!(serde_json::from_value::<ItemInput>(json!({"price": 1.5})).is_err());
    }
}
