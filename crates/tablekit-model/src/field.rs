//! Field definitions: the recursive typed schema for one table column.
//!
//! A [`FieldDef`] is one node of a finite, acyclic type tree. Composite
//! variants own their children (`Box` for array elements, `Vec` for object
//! properties), so a cycle is unrepresentable and structural recursion
//! needs no cycle detection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value, json};

/// Placeholder key carried by synthetic array-element nodes, which have no
/// key of their own in the source data.
pub const ARRAY_ELEMENT_KEY: &str = "item";

/// One entry of a select field's option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: SelectValue,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<SelectValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A select option value: stored as either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    Number(Number),
    Text(String),
}

impl SelectValue {
    pub fn to_json(&self) -> Value {
        match self {
            SelectValue::Number(n) => Value::Number(n.clone()),
            SelectValue::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<&str> for SelectValue {
    fn from(value: &str) -> Self {
        SelectValue::Text(value.to_owned())
    }
}

impl From<String> for SelectValue {
    fn from(value: String) -> Self {
        SelectValue::Text(value)
    }
}

impl From<i64> for SelectValue {
    fn from(value: i64) -> Self {
        SelectValue::Number(value.into())
    }
}

/// Declared value kind of a select field, used when projecting the field
/// into a declaration type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectValueType {
    String,
    Number,
}

/// Fixed two-field reward payload: `{id, count}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardValue {
    pub id: String,
    pub count: Number,
}

impl Default for RewardValue {
    fn default() -> Self {
        Self {
            id: String::new(),
            count: 0.into(),
        }
    }
}

/// One declared field of a table schema.
///
/// The variant payload is flattened next to `key`/`name` under a `type`
/// tag, matching the persisted JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// Tagged union over the supported field types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum FieldKind {
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        multiline: Option<bool>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<Number>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<Number>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<Number>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<Number>,
    },
    Boolean {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<bool>,
    },
    Select {
        options: Vec<SelectOption>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<SelectValue>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value_type: Option<SelectValueType>,
    },
    Reward {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<RewardValue>,
    },
    Array {
        element: Box<FieldDef>,
        /// 0 or absent means unbounded.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fixed_length: Option<u32>,
    },
    Object {
        properties: Vec<FieldDef>,
    },
}

impl FieldDef {
    fn new(key: impl Into<String>, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            desc: None,
            required: None,
            kind,
        }
    }

    /// Text field with an empty-string default.
    pub fn string(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            key,
            name,
            FieldKind::String {
                default_value: Some(String::new()),
                max_length: None,
                multiline: None,
            },
        )
    }

    /// Numeric field with a zero default.
    pub fn number(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            key,
            name,
            FieldKind::Number {
                default_value: Some(0.into()),
                min: None,
                max: None,
                step: None,
            },
        )
    }

    /// Boolean field with a false default.
    pub fn boolean(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            key,
            name,
            FieldKind::Boolean {
                default_value: Some(false),
            },
        )
    }

    /// Select field over the given options. No default: resolution falls
    /// back to the first option at default-value time.
    pub fn select(
        key: impl Into<String>,
        name: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(
            key,
            name,
            FieldKind::Select {
                options,
                default_value: None,
                value_type: None,
            },
        )
    }

    /// Reward field with an empty `{id, count}` default.
    pub fn reward(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            key,
            name,
            FieldKind::Reward {
                default_value: Some(RewardValue::default()),
            },
        )
    }

    /// Unbounded array field over the given element definition.
    pub fn array(key: impl Into<String>, name: impl Into<String>, element: FieldDef) -> Self {
        Self::new(
            key,
            name,
            FieldKind::Array {
                element: Box::new(element),
                fixed_length: None,
            },
        )
    }

    /// Object field over the given property definitions.
    pub fn object(
        key: impl Into<String>,
        name: impl Into<String>,
        properties: Vec<FieldDef>,
    ) -> Self {
        Self::new(key, name, FieldKind::Object { properties })
    }

    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// The `type` tag value for this field.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            FieldKind::String { .. } => "string",
            FieldKind::Number { .. } => "number",
            FieldKind::Boolean { .. } => "boolean",
            FieldKind::Select { .. } => "select",
            FieldKind::Reward { .. } => "reward",
            FieldKind::Array { .. } => "array",
            FieldKind::Object { .. } => "object",
        }
    }

    /// Compute the default value for this field.
    ///
    /// Total and pure: every variant resolves to a value, recursing
    /// structurally into array elements and object properties. A select
    /// field with no default and no options degrades to an empty string
    /// rather than erroring.
    pub fn default_value(&self) -> Value {
        match &self.kind {
            FieldKind::String { default_value, .. } => {
                Value::String(default_value.clone().unwrap_or_default())
            }
            FieldKind::Number { default_value, .. } => default_value
                .clone()
                .map_or_else(|| json!(0), Value::Number),
            FieldKind::Boolean { default_value } => Value::Bool(default_value.unwrap_or(false)),
            FieldKind::Select {
                options,
                default_value,
                ..
            } => default_value
                .as_ref()
                .map(SelectValue::to_json)
                .or_else(|| options.first().map(|option| option.value.to_json()))
                .unwrap_or_else(|| Value::String(String::new())),
            FieldKind::Reward { default_value } => {
                let reward = default_value.clone().unwrap_or_default();
                json!({ "id": reward.id, "count": reward.count })
            }
            FieldKind::Array {
                element,
                fixed_length,
            } => {
                // Each slot is computed independently, never aliased.
                let len = fixed_length.unwrap_or(0) as usize;
                Value::Array((0..len).map(|_| element.default_value()).collect())
            }
            FieldKind::Object { properties } => {
                let mut record = Map::new();
                for property in properties {
                    record.insert(property.key.clone(), property.default_value());
                }
                Value::Object(record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_default_falls_back_to_empty() {
        let mut field = FieldDef::string("label", "Label");
        assert_eq!(field.default_value(), json!(""));
        field.kind = FieldKind::String {
            default_value: Some("hi".to_owned()),
            max_length: None,
            multiline: None,
        };
        assert_eq!(field.default_value(), json!("hi"));
    }

    #[test]
    fn select_default_uses_first_option() {
        let field = FieldDef::select(
            "rarity",
            "Rarity",
            vec![
                SelectOption::new("Common", 1),
                SelectOption::new("Rare", 2),
            ],
        );
        assert_eq!(field.default_value(), json!(1));
    }

    #[test]
    fn select_without_options_degrades_to_empty_string() {
        let field = FieldDef::select("rarity", "Rarity", Vec::new());
        assert_eq!(field.default_value(), json!(""));
    }

    #[test]
    fn reward_default_is_owned_copy() {
        let field = FieldDef::reward("prize", "Prize");
        assert_eq!(field.default_value(), json!({"id": "", "count": 0}));
    }

    #[test]
    fn fixed_length_array_slots_are_independent() {
        let mut element = FieldDef::number(ARRAY_ELEMENT_KEY, ARRAY_ELEMENT_KEY);
        element.kind = FieldKind::Number {
            default_value: Some(5.into()),
            min: None,
            max: None,
            step: None,
        };
        let field = FieldDef {
            kind: FieldKind::Array {
                element: Box::new(element),
                fixed_length: Some(3),
            },
            ..FieldDef::string("slots", "Slots")
        };
        let mut value = field.default_value();
        assert_eq!(value, json!([5, 5, 5]));
        value[0] = json!(9);
        assert_eq!(value[1], json!(5));
        assert_eq!(value[2], json!(5));
    }

    #[test]
    fn field_json_shape_is_tagged_and_camel_case() {
        let field = FieldDef::string("title", "Title").with_desc("display title");
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["type"], json!("string"));
        assert_eq!(value["defaultValue"], json!(""));
        assert_eq!(value["desc"], json!("display title"));
        let round: FieldDef = serde_json::from_value(value).unwrap();
        assert_eq!(round, field);
    }
}
