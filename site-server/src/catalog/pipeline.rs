//! Filter / sort / search pipeline
//!
//! Pure derivation of a display list from (catalog, query state).
//! Idempotent and side-effect free: identical inputs produce identical,
//! order-stable output. An empty result is a normal displayed state,
//! never an error.

use shared::models::{CATEGORY_ALL, CatalogQuery, Product, SortKey, tags_for_label};

/// Derive the displayed subset for a query.
pub fn apply(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query.search.trim().to_lowercase();

    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| matches_category(p, &query.category))
        .filter(|p| needle.is_empty() || matches_search(p, &needle))
        .cloned()
        .collect();

    sort(&mut result, query.sort);
    result
}

/// Category filter: "All" passes everything, otherwise the product's tag
/// must belong to the set mapped from the UI label.
fn matches_category(product: &Product, label: &str) -> bool {
    if label == CATEGORY_ALL {
        return true;
    }
    tags_for_label(label).contains(&product.category)
}

/// Substring containment over the search corpus: name, description, any
/// tag, subcategory. Case-insensitive, no tokenization - "sola" matches
/// "solar".
fn matches_search(product: &Product, needle: &str) -> bool {
    if product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
    {
        return true;
    }
    if product.tags.iter().any(|t| t.to_lowercase().contains(needle)) {
        return true;
    }
    matches!(&product.subcategory, Some(sub) if sub.to_lowercase().contains(needle))
}

/// Stable sort by the chosen key.
///
/// `popularity` has no distinct signal in the data and falls back to
/// rating; `newest` is a pass-through because products carry no creation
/// date. Both are preserved as observed, pending product clarification.
fn sort(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Popularity | SortKey::Rating => {
            products.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortKey::Newest => {}
    }
}

#[cfg(test)]
mod tests {
    use shared::models::CategoryTag;

    use super::*;

    fn product(name: &str, category: CategoryTag, rating: f32) -> Product {
        Product {
            name: name.to_string(),
            category,
            subcategory: None,
            price: 100.0,
            old_price: None,
            rating,
            tags: vec![],
            description: String::new(),
            badge: None,
            sale: false,
            specifications: None,
            target_users: None,
            applications: None,
        }
    }

    fn essential_fixture() -> Vec<Product> {
        let mut solar = product("Household Solar System 200W", CategoryTag::SolarPv, 4.8);
        solar.tags = vec!["solar".into(), "200W".into()];
        solar.description = "Complete 200W home solar kit.".into();

        let mut stove = product("Improved Cookstove Classic", CategoryTag::CookingLower, 4.5);
        stove.description = "Fuel-efficient charcoal stove.".into();

        let mut pump = product("Solar Water Pump SP-600", CategoryTag::WaterPumping, 4.6);
        pump.tags = vec!["irrigation".into()];

        let light = product("Solar Street Light 60W", CategoryTag::StreetLights, 4.3);
        let backup = product("Home Power Backup 1kWh", CategoryTag::PowerBackup, 4.7);

        vec![solar, stove, pump, light, backup]
    }

    fn query(category: &str, search: &str, sort: SortKey) -> CatalogQuery {
        CatalogQuery {
            category: category.to_string(),
            search: search.to_string(),
            sort,
        }
    }

    #[test]
    fn all_with_newest_sort_returns_catalog_unchanged() {
        let catalog = essential_fixture();
        let result = apply(&catalog, &query(CATEGORY_ALL, "", SortKey::Newest));

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn apply_is_idempotent() {
        let catalog = essential_fixture();
        let q = query("Solar PV", "solar", SortKey::Rating);

        let once = apply(&catalog, &q);
        let twice = apply(&once, &q);

        let names = |v: &[Product]| v.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn category_filter_narrows_to_mapped_tags() {
        let catalog = essential_fixture();
        let result = apply(&catalog, &query("Solar PV", "", SortKey::Popularity));

        assert!(!result.is_empty());
        assert!(result.iter().all(|p| p.category == CategoryTag::SolarPv));
    }

    #[test]
    fn search_matches_are_substrings_of_the_corpus() {
        let catalog = essential_fixture();
        let q = query(CATEGORY_ALL, "SOLAR", SortKey::Newest);
        let result = apply(&catalog, &q);

        let corpus_hit = |p: &Product| {
            p.name.to_lowercase().contains("solar")
                || p.description.to_lowercase().contains("solar")
                || p.tags.iter().any(|t| t.to_lowercase().contains("solar"))
                || p.subcategory
                    .as_ref()
                    .is_some_and(|s| s.to_lowercase().contains("solar"))
        };

        assert!(result.iter().all(corpus_hit));

        let returned: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        for excluded in catalog.iter().filter(|p| !returned.contains(&p.name.as_str())) {
            assert!(!corpus_hit(excluded), "{} should have matched", excluded.name);
        }
    }

    #[test]
    fn rating_sort_is_descending() {
        let catalog = essential_fixture();
        let result = apply(&catalog, &query(CATEGORY_ALL, "", SortKey::Rating));

        for pair in result.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn popularity_currently_mirrors_rating() {
        let catalog = essential_fixture();
        let by_rating = apply(&catalog, &query(CATEGORY_ALL, "", SortKey::Rating));
        let by_popularity = apply(&catalog, &query(CATEGORY_ALL, "", SortKey::Popularity));

        let names = |v: &[Product]| v.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&by_rating), names(&by_popularity));
    }

    #[test]
    fn sort_is_stable_for_equal_ratings() {
        let catalog = vec![
            product("First", CategoryTag::Advisory, 4.5),
            product("Second", CategoryTag::Advisory, 4.5),
            product("Third", CategoryTag::Advisory, 4.9),
        ];
        let result = apply(&catalog, &query(CATEGORY_ALL, "", SortKey::Rating));
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Third", "First", "Second"]);
    }

    #[test]
    fn category_then_search_narrows_to_single_product() {
        let catalog = essential_fixture();
        let solar_only = apply(&catalog, &query("Solar PV", "", SortKey::Popularity));
        assert_eq!(solar_only.len(), 1);

        let narrowed = apply(&catalog, &query("Solar PV", "200W", SortKey::Popularity));
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].name, "Household Solar System 200W");
    }

    #[test]
    fn no_match_is_an_empty_result_not_an_error() {
        let catalog = essential_fixture();
        let result = apply(&catalog, &query(CATEGORY_ALL, "wind turbine", SortKey::Rating));
        assert!(result.is_empty());
    }
}
