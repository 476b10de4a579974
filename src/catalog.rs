use crate::csv::parse_catalog;
use crate::error::CatalogError;
use crate::models::{Animal, Category};

const BUNDLED_CATALOG: &str = include_str!("../data/animals.csv");

/// The animals shipped with the crate: every category and diet is represented.
pub fn default_catalog() -> Result<Vec<Animal>, CatalogError> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Case-insensitive name search combined with an optional category filter.
/// An empty query matches every name.
pub fn filter_animals<'a>(
    pool: &'a [Animal],
    query: &str,
    category: Option<Category>,
) -> Vec<&'a Animal> {
    let query = query.trim().to_lowercase();
    pool.iter()
        .filter(|a| a.name.to_lowercase().contains(&query))
        .filter(|a| category.is_none_or(|c| a.category == c))
        .collect()
}

pub fn find_animal<'a>(pool: &'a [Animal], id: &str) -> Option<&'a Animal> {
    pool.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Diet;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_covers_all_categories_and_diets() {
        let animals = default_catalog().unwrap();
        assert_eq!(animals.len(), 16);

        let categories: HashSet<Category> = animals.iter().map(|a| a.category).collect();
        let diets: HashSet<Diet> = animals.iter().map(|a| a.diet).collect();
        assert_eq!(categories.len(), Category::ALL.len());
        assert_eq!(diets.len(), Diet::ALL.len());
        assert!(animals.iter().all(|a| !a.habitat.is_empty() && !a.fun_fact.is_empty()));
    }

    #[test]
    fn test_filter_by_query() {
        let animals = default_catalog().unwrap();
        let found: Vec<&str> = filter_animals(&animals, "  BEAR ", None)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(found, vec!["polar-bear"]);
    }

    #[test]
    fn test_filter_by_category() {
        let animals = default_catalog().unwrap();
        let birds = filter_animals(&animals, "", Some(Category::Bird));
        assert_eq!(birds.len(), 3);
        assert!(birds.iter().all(|a| a.category == Category::Bird));
    }

    #[test]
    fn test_filter_query_and_category_combined() {
        let animals = default_catalog().unwrap();
        assert!(filter_animals(&animals, "shark", Some(Category::Mammal)).is_empty());
        assert_eq!(filter_animals(&animals, "shark", Some(Category::Fish)).len(), 1);
    }

    #[test]
    fn test_find_animal() {
        let animals = default_catalog().unwrap();
        assert_eq!(find_animal(&animals, "axolotl").map(|a| a.name.as_str()), Some("Axolotl"));
        assert!(find_animal(&animals, "unicorn").is_none());
    }
}
