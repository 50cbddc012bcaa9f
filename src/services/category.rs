//! Category registry
//!
//! Deduplicates category names into shared [`Category`] instances. Each
//! registry is an ordinary owned value, so separate trackers (and separate
//! tests) never see each other's categories.

use std::collections::HashMap;
use std::rc::Rc;

use crate::models::Category;

/// Maps category names to the single shared instance for that name
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    by_name: HashMap<String, Rc<Category>>,
    /// Names in creation order
    order: Vec<String>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the category for `name`, creating it on first use
    ///
    /// Names match exactly and case-sensitively; any string is accepted.
    pub fn get_or_create(&mut self, name: &str) -> Rc<Category> {
        if let Some(existing) = self.by_name.get(name) {
            return Rc::clone(existing);
        }

        let category = Rc::new(Category::new(name));
        tracing::debug!(category = name, id = %category.id(), "created category");
        self.by_name.insert(name.to_string(), Rc::clone(&category));
        self.order.push(name.to_string());
        category
    }

    /// Look up a category without creating it
    pub fn get(&self, name: &str) -> Option<Rc<Category>> {
        self.by_name.get(name).cloned()
    }

    /// Category names in the order they were first created
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
