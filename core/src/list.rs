//! Shopping list handle returning snapshot reads.

/// A list that exclusively owns its items.
///
/// Reads go through [`ShoppingList::items`], which returns a cloned
/// snapshot - callers can never mutate the private vector through a read.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<String>,
}

impl ShoppingList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return the new length.
    pub fn add(&mut self, item: impl Into<String>) -> usize {
        self.items.push(item.into());
        self.items.len()
    }

    /// Remove the first occurrence of `item`. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Snapshot of the current items, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<String> {
        self.items.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ShoppingList;

    #[test]
    fn add_and_remove() {
        let mut list = ShoppingList::new();
        assert_eq!(list.add("Milk"), 1);
        assert_eq!(list.add("Bread"), 2);
        assert_eq!(list.add("Eggs"), 3);

        assert!(list.remove("Bread"));
        assert_eq!(list.items(), vec!["Milk", "Eggs"]);
    }

    #[test]
    fn removing_a_missing_item_is_reported() {
        let mut list = ShoppingList::new();
        list.add("Milk");
        assert!(!list.remove("Bread"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_takes_only_the_first_occurrence() {
        let mut list = ShoppingList::new();
        list.add("Milk");
        list.add("Milk");
        assert!(list.remove("Milk"));
        assert_eq!(list.items(), vec!["Milk"]);
    }

    #[test]
    fn snapshots_do_not_alias_private_state() {
        let mut list = ShoppingList::new();
        list.add("Paper");

        let mut snapshot = list.items();
        snapshot.push("Pens".to_string());

        assert_eq!(list.items(), vec!["Paper"]);
    }

    #[test]
    fn lists_are_independent() {
        let mut groceries = ShoppingList::new();
        groceries.add("Milk");
        groceries.add("Eggs");

        let mut office = ShoppingList::new();
        office.add("Paper");

        office.remove("Paper");
        assert_eq!(groceries.items(), vec!["Milk", "Eggs"]);
        assert!(office.is_empty());
    }
}
