/*!
A store, aka. a deduplicating collection keyed by canonical strings.

Each item of a store is keyed by its canonical string (its [Display](std::fmt::Display) representation), and adding an item whose key is already present replaces the present item, in place.
Items are kept in order of (first) addition.

```rust
# use finite_fol::db::store::Store;
# use finite_fol::structures::individual::Individual;
let goku = Individual::new("goku").unwrap();
let gohan = Individual::new("gohan").unwrap();

let mut population = Store::default();
assert!(population.add(goku.clone()));
assert!(population.add(gohan.clone()));
assert!(!population.add(goku.clone()));

assert_eq!(population.len(), 2);
assert_eq!(population.get("gohan"), Some(&gohan));

assert!(population.remove(&goku));
assert!(!population.exists(&goku));
```
*/

use indexmap::IndexMap;

/// A store.
#[derive(Clone, Debug)]
pub struct Store<T> {
    items: IndexMap<String, T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Store {
            items: IndexMap::default(),
        }
    }
}

impl<T: std::fmt::Display> Store<T> {
    /// Adds an item to the store, returning whether the key of the item was fresh.
    ///
    /// If the key was not fresh, the item replaces the stored item with the same key, keeping the position of the stored item.
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item.to_string(), item).is_none()
    }

    /// Removes the item with the same key as the given item, returning whether some item was removed.
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.shift_remove(&item.to_string()).is_some()
    }

    /// Whether some item has the same key as the given item.
    pub fn exists(&self, item: &T) -> bool {
        self.items.contains_key(&item.to_string())
    }
}

impl<T> Store<T> {
    /// The item with the given key, if any.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.get(key)
    }

    /// An iterator over the items of the store, in order of addition.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    /// Consumes the store, returning an iterator over the items in order of addition.
    pub fn into_elements(self) -> impl Iterator<Item = T> {
        self.items.into_values()
    }

    /// An iterator over the (key, item) pairs of the store, in order of addition.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &T)> {
        self.items.iter().map(|(key, item)| (key.as_str(), item))
    }

    /// Keeps only those items for which the predicate holds, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        self.items.retain(|_, item| keep(item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: std::fmt::Display> FromIterator<T> for Store<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Store::default();
        store.extend(iter);
        store
    }
}

impl<T: std::fmt::Display> Extend<T> for Store<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        a: &'static str,
        b: &'static str,
    }

    impl std::fmt::Display for Sample {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}+{}", self.a, self.b)
        }
    }

    fn sample(a: &'static str, b: &'static str) -> Sample {
        Sample { a, b }
    }

    #[test]
    fn empty() {
        let store = Store::<Sample>::default();
        assert_eq!(store.elements().count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn deduplication() {
        let store = [sample("a", "b"), sample("a", "b")]
            .into_iter()
            .collect::<Store<_>>();

        assert_eq!(store.len(), 1);
        assert!(store.exists(&sample("a", "b")));
        assert!(!store.exists(&sample("b", "c")));
    }

    #[test]
    fn get_by_key() {
        let store = [sample("a", "b"), sample("b", "c")]
            .into_iter()
            .collect::<Store<_>>();

        assert_eq!(store.get("a+b").map(|item| item.to_string()), Some("a+b".to_string()));
        assert_eq!(store.get("b+c").map(|item| item.to_string()), Some("b+c".to_string()));
        assert!(store.get("").is_none());
    }

    #[test]
    fn removal_keeps_order() {
        let mut store = [sample("a", "b"), sample("b", "c"), sample("c", "d")]
            .into_iter()
            .collect::<Store<_>>();

        assert!(store.remove(&sample("b", "c")));
        assert!(!store.remove(&sample("b", "c")));

        let keys = store.entries().map(|(key, _)| key.to_string()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["a+b", "c+d"]);
    }

    #[test]
    fn replacement_in_place() {
        #[derive(Debug)]
        struct Tagged(&'static str, u8);

        impl std::fmt::Display for Tagged {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        let mut store = Store::default();
        assert!(store.add(Tagged("first", 0)));
        assert!(store.add(Tagged("second", 0)));
        assert!(!store.add(Tagged("first", 1)));

        let items = store.elements().map(|item| (item.0, item.1)).collect::<Vec<_>>();
        assert_eq!(items, vec![("first", 1), ("second", 0)]);
    }
}
