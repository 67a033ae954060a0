use std::collections::HashSet;

use crate::domain::Animal;

/// Animal ids the user hearted during this session.
#[derive(Debug, Default)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    /// Flips membership and returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited animals in catalogue order.
    pub fn select<'a>(&self, animals: &'a [Animal]) -> Vec<&'a Animal> {
        animals
            .iter()
            .filter(|animal| self.contains(&animal.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut favorites = FavoriteSet::default();
        favorites.toggle("2");
        for id in ["1", "2", "unknown"] {
            let before = favorites.contains(id);
            favorites.toggle(id);
            assert_ne!(favorites.contains(id), before);
            favorites.toggle(id);
            assert_eq!(favorites.contains(id), before);
        }
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn toggle_reports_new_membership() {
        let mut favorites = FavoriteSet::default();
        assert!(favorites.toggle("7"));
        assert!(!favorites.toggle("7"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn select_follows_catalogue_order() {
        let animals = fixtures::animals();
        let mut favorites = FavoriteSet::default();
        favorites.toggle("4");
        favorites.toggle("1");
        let names: Vec<_> = favorites
            .select(&animals)
            .into_iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Buddy", "Mia"]);
    }
}
