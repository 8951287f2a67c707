//! Pc entity model.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Name of the collection (table) holding Pc documents.
pub const COLLECTION: &str = "pc";

/// A Pc record.
///
/// Every field is optional on the wire: `id` is assigned by the store,
/// and a partial update carries only the fields it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Pc {
    /// Store-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Manufacturer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    /// Model name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Price in whole currency units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,
}

impl Pc {
    /// Create an empty Pc.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the make.
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the price.
    pub fn with_price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    /// The id as a string slice, if assigned.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Copy every field present in `patch` onto `self`.
    ///
    /// The id is never touched; absent fields leave the stored value as is.
    pub fn merge_from(&mut self, patch: &Pc) {
        if let Some(make) = &patch.make {
            self.make = Some(make.clone());
        }
        if let Some(model) = &patch.model {
            self.model = Some(model.clone());
        }
        if let Some(price) = patch.price {
            self.price = Some(price);
        }
    }
}

/// Identity equality: two Pcs are equal only when both carry the same id.
impl PartialEq for Pc {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Pc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pc{{id={}, make='{}', model='{}', price={}}}",
            self.id.as_deref().unwrap_or("null"),
            self.make.as_deref().unwrap_or("null"),
            self.model.as_deref().unwrap_or("null"),
            self.price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "null".to_string()),
        )
    }
}
