//! In-memory catalog for tests and embedding.

use std::collections::HashMap;

use shoplite_core::{DomainResult, ItemId};
use shoplite_locale::Message;

use crate::item::{Catalog, CatalogItem, ItemData, ItemPricing, StockDescriptor};

/// A plain buyable record carrying both listing metadata and item data.
#[derive(Debug, Clone)]
pub struct BuyableRecord {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub preview_image_url: Option<String>,
    pub pricing: ItemPricing,
    pub comment_required: bool,
    pub quantity_unit: Message,
    pub quantity_unit_float: bool,
    pub stock: StockDescriptor,
}

impl BuyableRecord {
    pub fn new(id: ItemId, title: impl Into<String>, url: impl Into<String>, pricing: ItemPricing) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            url: url.into(),
            preview_image_url: None,
            pricing,
            comment_required: false,
            quantity_unit: Message::new("quantity_unit_items", "items"),
            quantity_unit_float: false,
            stock: StockDescriptor::unlimited(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_preview_image_url(mut self, url: impl Into<String>) -> Self {
        self.preview_image_url = Some(url.into());
        self
    }

    pub fn with_comment_required(mut self, required: bool) -> Self {
        self.comment_required = required;
        self
    }

    pub fn with_quantity_unit(mut self, unit: Message, fractional: bool) -> Self {
        self.quantity_unit = unit;
        self.quantity_unit_float = fractional;
        self
    }

    pub fn with_stock(mut self, stock: StockDescriptor) -> Self {
        self.stock = stock;
        self
    }
}

impl ItemData for BuyableRecord {
    fn pricing(&self) -> DomainResult<ItemPricing> {
        Ok(self.pricing)
    }

    fn comment_required(&self) -> bool {
        self.comment_required
    }

    fn quantity_unit(&self) -> Message {
        self.quantity_unit.clone()
    }

    fn quantity_unit_float(&self) -> bool {
        self.quantity_unit_float
    }

    fn stock(&self) -> StockDescriptor {
        self.stock
    }
}

impl CatalogItem for BuyableRecord {
    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn preview_image_url(&self) -> Option<String> {
        self.preview_image_url.clone()
    }

    fn data(&self) -> &dyn ItemData {
        self
    }
}

/// Catalog backed by a plain map.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: HashMap<ItemId, BuyableRecord>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: BuyableRecord) {
        self.items.insert(record.id, record);
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<BuyableRecord> {
        self.items.remove(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn resolve(&self, id: &ItemId) -> Option<&dyn CatalogItem> {
        self.items.get(id).map(|record| record as &dyn CatalogItem)
    }
}
