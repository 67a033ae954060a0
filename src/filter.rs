use crate::domain::{Animal, Species, Urgency};

// -----------------------------------------------------------------------------
// Search filtering
// -----------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Dog,
    Cat,
    Urgent,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::All, Category::Dog, Category::Cat, Category::Urgent];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "Todos",
            Category::Dog => "Cães",
            Category::Cat => "Gatos",
            Category::Urgent => "Urgentes",
        }
    }

    fn admits(&self, animal: &Animal) -> bool {
        match self {
            Category::All => true,
            Category::Dog => animal.species == Species::Dog,
            Category::Cat => animal.species == Species::Cat,
            Category::Urgent => animal.urgency == Urgency::High,
        }
    }
}

/// Lowercased search text. A blank query admits every animal; any other query
/// is matched as typed, surrounding spaces included.
struct AnimalQuery {
    needle: Option<String>,
}

impl AnimalQuery {
    fn new(raw: &str) -> Self {
        let needle = (!raw.trim().is_empty()).then(|| raw.to_lowercase());
        Self { needle }
    }

    fn admits(&self, animal: &Animal) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        animal.name.to_lowercase().contains(needle)
            || animal.description.to_lowercase().contains(needle)
    }
}

/// Animals matching the query (name or description) and the category, in input order.
pub fn filter_animals(animals: &[Animal], query: &str, category: Category) -> Vec<Animal> {
    let query = AnimalQuery::new(query);
    animals
        .iter()
        .filter(|animal| query.admits(animal) && category.admits(animal))
        .cloned()
        .collect()
}

/// Size of each category chip, ignoring the text query.
pub fn category_count(animals: &[Animal], category: Category) -> usize {
    animals.iter().filter(|animal| category.admits(animal)).count()
}

pub fn awaiting_castration(animals: &[Animal]) -> usize {
    animals.iter().filter(|animal| !animal.castrated).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn names(animals: &[Animal]) -> Vec<&str> {
        animals.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn urgent_filter_keeps_fixture_order() {
        let animals = fixtures::animals();
        let urgent = filter_animals(&animals, "", Category::Urgent);
        assert_eq!(names(&urgent), ["Buddy", "Mia"]);
    }

    #[test]
    fn query_matches_name_or_description_case_insensitively() {
        let animals = fixtures::animals();
        assert_eq!(names(&filter_animals(&animals, "LUNA", Category::All)), ["Luna"]);
        assert_eq!(
            names(&filter_animals(&animals, "apartamento", Category::All)),
            ["Luna"]
        );
    }

    #[test]
    fn query_and_category_must_both_match() {
        let animals = fixtures::animals();
        assert!(filter_animals(&animals, "luna", Category::Dog).is_empty());
        assert_eq!(
            names(&filter_animals(&animals, "porto", Category::Dog)),
            Vec::<&str>::new()
        );
        assert_eq!(
            names(&filter_animals(&animals, "família", Category::Dog)),
            ["Buddy", "Rex"]
        );
    }

    #[test]
    fn blank_query_matches_everything() {
        let animals = fixtures::animals();
        assert_eq!(filter_animals(&animals, "   ", Category::All).len(), animals.len());
    }

    #[test]
    fn surrounding_spaces_are_part_of_the_query() {
        let animals = fixtures::animals();
        assert!(filter_animals(&animals, "rex ", Category::All).is_empty());
        assert_eq!(names(&filter_animals(&animals, "rex", Category::All)), ["Rex"]);
        assert_eq!(
            names(&filter_animals(&animals, "muito ", Category::Dog)),
            ["Buddy", "Rex"]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let animals = fixtures::animals();
        for query in ["", "a", "gat", "família", "zzz"] {
            for category in Category::ALL {
                let once = filter_animals(&animals, query, category);
                let twice = filter_animals(&once, query, category);
                assert_eq!(once, twice, "query {query:?} category {category:?}");
            }
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let animals = fixtures::animals();
        let before = animals.clone();
        let _ = filter_animals(&animals, "rex", Category::Dog);
        assert_eq!(animals, before);
    }

    #[test]
    fn chip_counts() {
        let animals = fixtures::animals();
        assert_eq!(category_count(&animals, Category::All), 5);
        assert_eq!(category_count(&animals, Category::Dog), 3);
        assert_eq!(category_count(&animals, Category::Cat), 2);
        assert_eq!(category_count(&animals, Category::Urgent), 2);
        assert_eq!(awaiting_castration(&animals), 2);
    }
}
