use indexmap::IndexMap;
use rand::Rng;

use crate::error::{AppError, AppResult};
use crate::models::{CreatedItem, Item, ItemEntry, UpdateItem};
use crate::seed;

pub const ITEM_NOT_FOUND: &str = "Item ID not found";
pub const ITEM_DOES_NOT_EXIST: &str = "Item ID does not exist";
pub const NO_NAME_MATCH: &str = "No items matching the name were found";

/// In-memory inventory: insertion-ordered items plus the next-id counter.
///
/// Ids are handed out from `next_id` and never recycled, so deleting an item
/// (or clearing everything) never lets a later create reuse its id.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: IndexMap<String, Item>,
    next_id: u64,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Inventory preloaded with the fixed seed catalogue.
    pub fn seeded() -> Self {
        let items: IndexMap<String, Item> = seed::seed_items().into_iter().collect();
        let next_id = items.len() as u64 + 1;
        Self { items, next_id }
    }

    pub fn items(&self) -> &IndexMap<String, Item> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: u64) -> AppResult<&Item> {
        self.items
            .get(&id.to_string())
            .ok_or_else(|| AppError::NotFound(ITEM_NOT_FOUND.to_string()))
    }

    pub fn find_by_name(&self, name: &str) -> AppResult<Vec<ItemEntry>> {
        let needle = name.to_lowercase();
        let found: Vec<ItemEntry> = self
            .items
            .iter()
            .filter(|(_, item)| item.name_contains(&needle))
            .map(|(id, item)| ItemEntry {
                item_id: id.clone(),
                item: item.clone(),
            })
            .collect();

        if found.is_empty() {
            return Err(AppError::NotFound(NO_NAME_MATCH.to_string()));
        }
        Ok(found)
    }

    pub fn create(&mut self, item: Item) -> CreatedItem {
        let item_id = self.take_id();
        self.items.insert(item_id.to_string(), item.clone());
        CreatedItem { item_id, item }
    }

    pub fn generate(&mut self, count: u64, rng: &mut impl Rng) -> Vec<CreatedItem> {
        let mut generated = Vec::with_capacity(count.min(1_024) as usize);
        for _ in 0..count {
            let item = seed::random_item(rng, self.next_id);
            generated.push(self.create(item));
        }
        generated
    }

    pub fn update(&mut self, id: u64, patch: UpdateItem) -> AppResult<ItemEntry> {
        let key = id.to_string();
        let item = self
            .items
            .get_mut(&key)
            .ok_or_else(|| AppError::NotFound(ITEM_DOES_NOT_EXIST.to_string()))?;
        item.apply_patch(patch);

        Ok(ItemEntry {
            item_id: key,
            item: item.clone(),
        })
    }

    pub fn delete(&mut self, id: u64) -> AppResult<Item> {
        self.items
            .shift_remove(&id.to_string())
            .ok_or_else(|| AppError::NotFound(ITEM_DOES_NOT_EXIST.to_string()))
    }

    /// Remove every item, keeping the counter. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
