//! Dashboard facets and the listing filter

use listings_client::{Category, Listing, Region};

/// A value that can be selected in a filter facet.
pub trait FacetValue: Copy + PartialEq + 'static {
    fn label(&self) -> &'static str;
    fn variants() -> &'static [Self];
}

impl FacetValue for Category {
    fn label(&self) -> &'static str {
        Category::label(self)
    }

    fn variants() -> &'static [Self] {
        Category::variants()
    }
}

impl FacetValue for Region {
    fn label(&self) -> &'static str {
        Region::label(self)
    }

    fn variants() -> &'static [Self] {
        Region::variants()
    }
}

/// One filter dimension: either no filtering or a single value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: FacetValue> Facet<T> {
    pub fn label(&self) -> &'static str {
        match self {
            Facet::All => "All",
            Facet::Only(value) => value.label(),
        }
    }

    /// Button order for the facet bar: `All` first, then every value.
    pub fn choices() -> Vec<Facet<T>> {
        std::iter::once(Facet::All)
            .chain(T::variants().iter().copied().map(Facet::Only))
            .collect()
    }

    pub fn matches(&self, value: Option<T>) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(selected) => value == Some(*selected),
        }
    }
}

/// Category and location selection on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FacetSelection {
    pub category: Facet<Category>,
    pub location: Facet<Region>,
}

impl FacetSelection {
    pub fn new(category: Facet<Category>, location: Facet<Region>) -> Self {
        Self { category, location }
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.category.matches(Some(listing.category)) && self.location.matches(listing.region)
    }
}

/// Listings matching `selection`, in their original order.
pub fn visible(listings: &[Listing], selection: &FacetSelection) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| selection.matches(listing))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: i64, category: Category, region: Option<Region>) -> Listing {
        Listing {
            id,
            title: format!("Item {id}"),
            price: 10.0,
            category,
            region,
            description: None,
            image_url: None,
            user_id: 1,
        }
    }

    fn ids(listings: &[Listing]) -> Vec<i64> {
        listings.iter().map(|l| l.id).collect()
    }

    fn random_listings(rng: &mut fastrand::Rng, len: usize) -> Vec<Listing> {
        (0..len)
            .map(|i| {
                let category = Category::variants()[rng.usize(..Category::variants().len())];
                let region = if rng.u8(..4) == 0 {
                    None
                } else {
                    Some(Region::variants()[rng.usize(..Region::variants().len())])
                };
                listing(i as i64, category, region)
            })
            .collect()
    }

    #[test]
    fn choices_start_with_all() {
        let categories = Facet::<Category>::choices();
        assert_eq!(categories.len(), Category::variants().len() + 1);
        assert_eq!(categories[0], Facet::All);
        assert_eq!(categories[1].label(), "Textbooks");

        let locations: Vec<_> = Facet::<Region>::choices().iter().map(|f| f.label()).collect();
        assert_eq!(
            locations,
            vec!["All", "Middle Earth", "Mesa", "ACC", "Verano Place", "Campus Village", "Palo Verde", "UTC"]
        );
    }

    #[test]
    fn category_filter_with_any_location() {
        let listings = vec![
            listing(1, Category::Textbooks, Some(Region::Mesa)),
            listing(2, Category::Furniture, Some(Region::Acc)),
        ];
        let selection = FacetSelection::new(Facet::Only(Category::Textbooks), Facet::All);

        assert_eq!(ids(&visible(&listings, &selection)), vec![1]);
    }

    #[test]
    fn listing_without_region_only_matches_all_locations() {
        let listings = vec![listing(1, Category::Housing, None)];

        let any = FacetSelection::default();
        let mesa = FacetSelection::new(Facet::All, Facet::Only(Region::Mesa));

        assert_eq!(ids(&visible(&listings, &any)), vec![1]);
        assert!(visible(&listings, &mesa).is_empty());
    }

    #[test]
    fn default_selection_is_identity() {
        let mut rng = fastrand::Rng::with_seed(7);
        for len in [0, 1, 5, 40] {
            let listings = random_listings(&mut rng, len);
            assert_eq!(visible(&listings, &FacetSelection::default()), listings);
        }
    }

    #[test]
    fn visible_is_the_ordered_subsequence_matching_both_facets() {
        let mut rng = fastrand::Rng::with_seed(42);

        for _ in 0..200 {
            let len = rng.usize(..30);
            let listings = random_listings(&mut rng, len);
            let category = Facet::<Category>::choices()[rng.usize(..Category::variants().len() + 1)];
            let location = Facet::<Region>::choices()[rng.usize(..Region::variants().len() + 1)];
            let selection = FacetSelection::new(category, location);

            let shown = visible(&listings, &selection);

            let expected: Vec<i64> = listings
                .iter()
                .filter(|l| {
                    (category == Facet::All || Facet::Only(l.category) == category)
                        && (location == Facet::All || l.region.map(Facet::Only) == Some(location))
                })
                .map(|l| l.id)
                .collect();
            assert_eq!(ids(&shown), expected);

            // ids are generated in ascending order, so order preservation
            // means the output stays sorted
            assert!(ids(&shown).windows(2).all(|w| w[0] < w[1]));
        }
    }
}
