//! Field descriptors contributed by the shop.

use serde::{Deserialize, Serialize};

use shoplite_locale::Message;

/// Storage kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Boolean,
    Number,
    /// Free or vocabulary-constrained text.
    Text,
}

/// A plain data description of one schema field.
///
/// Extension membership is data (`extension`), not a separate field type;
/// contributed fields stay ordinary descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Schemata (form tab) the field appears under.
    pub schemata: String,
    pub kind: FieldKind,
    pub label: Message,
    /// Allowed values for selection fields.
    pub vocabulary: Option<Vec<String>>,
    /// Contributed by a schema extension rather than the base schema.
    pub extension: bool,
}

impl FieldDescriptor {
    /// A base-schema field.
    pub fn new(
        name: impl Into<String>,
        schemata: impl Into<String>,
        kind: FieldKind,
        label: Message,
    ) -> Self {
        Self {
            name: name.into(),
            schemata: schemata.into(),
            kind,
            label,
            vocabulary: None,
            extension: false,
        }
    }

    /// A field contributed by a schema extension.
    pub fn extension(
        name: impl Into<String>,
        schemata: impl Into<String>,
        kind: FieldKind,
        label: Message,
    ) -> Self {
        Self {
            extension: true,
            ..Self::new(name, schemata, kind, label)
        }
    }

    pub fn with_vocabulary(mut self, values: Vec<String>) -> Self {
        self.vocabulary = Some(values);
        self
    }
}

/// Schemata the shop fields are contributed under.
pub const SHOP_SCHEMATA: &str = "Shop";

/// Allowed VAT percentages for `item_vat`.
pub const VAT_VOCABULARY: [&str; 2] = ["10", "20"];

/// The fields a buyable content object carries.
pub fn buyable_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::extension(
            "item_buyable",
            SHOP_SCHEMATA,
            FieldKind::Boolean,
            Message::new("label_item_buyable", "Item buyable?"),
        ),
        FieldDescriptor::extension(
            "item_price",
            SHOP_SCHEMATA,
            FieldKind::Number,
            Message::new("label_item_price", "Item price"),
        ),
        FieldDescriptor::extension(
            "item_vat",
            SHOP_SCHEMATA,
            FieldKind::Text,
            Message::new("label_item_vat", "Item VAT (in %)"),
        )
        .with_vocabulary(VAT_VOCABULARY.iter().map(|v| v.to_string()).collect()),
    ]
}
