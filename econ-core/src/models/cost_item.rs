use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Id of the synthetic fixed-cost line carrying the monthly loan payment.
pub const LOAN_ITEM_ID: &str = "loan-interest";

/// Id of the synthetic variable-cost line carrying a channel commission.
pub const CHANNEL_COMMISSION_ID: &str = "channel-commission";

/// Id of the synthetic fixed-cost line carrying an offline store rent.
pub const CHANNEL_RENT_ID: &str = "channel-rent";

/// Ids reserved for line items the engine derives on its own.
///
/// These never appear in a user-editable collection; they only show up in
/// the effective collections built on top of it.
pub const RESERVED_IDS: [&str; 3] = [LOAN_ITEM_ID, CHANNEL_COMMISSION_ID, CHANNEL_RENT_ID];

/// Errors raised when editing a [`CostCollection`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CostCollectionError {
    #[error("cost item id must not be empty")]
    EmptyId,

    #[error("cost item id '{0}' already exists")]
    DuplicateId(String),

    #[error("cost item id '{0}' is reserved for derived line items")]
    ReservedId(String),

    #[error("no cost item with id '{0}'")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Fixed,
    Variable,
    Sunk,
}

impl CostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Variable => "variable",
            Self::Sunk => "sunk",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fixed" => Some(Self::Fixed),
            "variable" => Some(Self::Variable),
            "sunk" => Some(Self::Sunk),
            _ => None,
        }
    }

    /// Korean label used in reports and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fixed => "고정비",
            Self::Variable => "변동비",
            Self::Sunk => "초기 투자 비용",
        }
    }
}

/// One fixed, variable or sunk cost line.
///
/// `amount` is signed. Negative amounts make no business sense but are
/// accepted as typed, the same way a form field would accept them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
}

impl CostItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }
}

/// Ordered list of cost items whose ids are unique within the list.
///
/// Order is insertion order. It matters for display and export but never
/// for the arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CostItem>", into = "Vec<CostItem>")]
pub struct CostCollection {
    items: Vec<CostItem>,
}

impl CostCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, rejecting empty, reserved or repeated ids.
    pub fn from_items(items: Vec<CostItem>) -> Result<Self, CostCollectionError> {
        let mut collection = Self::new();
        for item in items {
            collection.push(item)?;
        }
        Ok(collection)
    }

    /// Appends an item at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`CostCollectionError`] if the id is empty, reserved, or
    /// already used by another item of this collection.
    pub fn push(
        &mut self,
        item: CostItem,
    ) -> Result<(), CostCollectionError> {
        if item.id.trim().is_empty() {
            return Err(CostCollectionError::EmptyId);
        }
        if RESERVED_IDS.contains(&item.id.as_str()) {
            return Err(CostCollectionError::ReservedId(item.id));
        }
        if self.contains(&item.id) {
            return Err(CostCollectionError::DuplicateId(item.id));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn set_amount(
        &mut self,
        id: &str,
        amount: Decimal,
    ) -> Result<(), CostCollectionError> {
        self.find_mut(id)?.amount = amount;
        Ok(())
    }

    pub fn rename(
        &mut self,
        id: &str,
        name: impl Into<String>,
    ) -> Result<(), CostCollectionError> {
        self.find_mut(id)?.name = name.into();
        Ok(())
    }

    /// Removes the item with the given id, keeping the order of the rest.
    pub fn remove(
        &mut self,
        id: &str,
    ) -> Result<CostItem, CostCollectionError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CostCollectionError::NotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    pub fn get(
        &self,
        id: &str,
    ) -> Option<&CostItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(
        &self,
        id: &str,
    ) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[CostItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CostItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(
        &mut self,
        id: &str,
    ) -> Result<&mut CostItem, CostCollectionError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CostCollectionError::NotFound(id.to_string()))
    }
}

impl TryFrom<Vec<CostItem>> for CostCollection {
    type Error = CostCollectionError;

    fn try_from(items: Vec<CostItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<CostCollection> for Vec<CostItem> {
    fn from(collection: CostCollection) -> Self {
        collection.items
    }
}

impl<'a> IntoIterator for &'a CostCollection {
    type Item = &'a CostItem;
    type IntoIter = std::slice::Iter<'a, CostItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The three editable collections, one per [`CostCategory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCollections {
    #[serde(default)]
    pub fixed: CostCollection,
    #[serde(default)]
    pub variable: CostCollection,
    #[serde(default)]
    pub sunk: CostCollection,
}

impl CostCollections {
    pub fn get(
        &self,
        category: CostCategory,
    ) -> &CostCollection {
        match category {
            CostCategory::Fixed => &self.fixed,
            CostCategory::Variable => &self.variable,
            CostCategory::Sunk => &self.sunk,
        }
    }

    pub fn get_mut(
        &mut self,
        category: CostCategory,
    ) -> &mut CostCollection {
        match category {
            CostCategory::Fixed => &mut self.fixed,
            CostCategory::Variable => &mut self.variable,
            CostCategory::Sunk => &mut self.sunk,
        }
    }
}
