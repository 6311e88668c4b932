use crate::error::StoreError;
use crate::listing::{Listing, ListingStatus, ListingUpdate};

/// Ordered in-memory listing store.
///
/// All listings are seeded at construction; there is no create or delete
/// operation. Mutation goes through [`ListingStore::update`], which
/// shallow-merges the supplied fields into the existing record. No field
/// validation happens here; handlers own their presence checks.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<Listing>,
}

impl ListingStore {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Store pre-loaded with the demo submissions.
    pub fn seeded() -> Self {
        Self::new(seed_listings())
    }

    /// Full ordered sequence of listings.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Merge `update` into the listing with the given id and return the
    /// updated record. Unknown ids leave the store untouched.
    pub fn update(&mut self, id: &str, update: ListingUpdate) -> Result<Listing, StoreError> {
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        if let Some(title) = update.title {
            listing.title = title;
        }
        if let Some(location) = update.location {
            listing.location = location;
        }
        if let Some(price) = update.price {
            listing.price = price;
        }
        if let Some(status) = update.status {
            listing.status = status;
        }
        Ok(listing.clone())
    }

    /// Listing counts by moderation status: (pending, approved, rejected).
    pub fn status_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for l in &self.listings {
            match l.status {
                ListingStatus::Pending => counts.0 += 1,
                ListingStatus::Approved => counts.1 += 1,
                ListingStatus::Rejected => counts.2 += 1,
            }
        }
        counts
    }
}

fn seed_listings() -> Vec<Listing> {
    fn listing(id: &str, title: &str, location: &str, price: f64, status: ListingStatus) -> Listing {
        Listing {
            id: id.to_string(),
            title: title.to_string(),
            location: location.to_string(),
            price,
            status,
        }
    }

    vec![
        listing("1", "Honda City", "Mumbai, India", 80.0, ListingStatus::Approved),
        listing("2", "Toyota Fortuner", "Delhi, India", 120.0, ListingStatus::Pending),
        listing("3", "Tesla Model S", "Los Angeles, USA", 300.0, ListingStatus::Rejected),
        listing("4", "Range Rover Discovery", "Dubai, UAE", 350.0, ListingStatus::Approved),
        listing("5", "Hyundai Creta", "Bangalore, India", 100.0, ListingStatus::Pending),
        listing("6", "Ford Mustang GT", "New York, USA", 250.0, ListingStatus::Approved),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_is_ordered() {
        let store = ListingStore::seeded();
        let ids: Vec<&str> = store.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn get_finds_by_id() {
        let store = ListingStore::seeded();
        assert_eq!(store.get("3").unwrap().title, "Tesla Model S");
        assert!(store.get("999").is_none());
    }

    #[test]
    fn status_only_update_preserves_other_fields() {
        let mut store = ListingStore::seeded();
        let before = store.get("2").unwrap().clone();

        let updated = store
            .update("2", ListingUpdate::status(ListingStatus::Approved))
            .unwrap();

        assert_eq!(updated.status, ListingStatus::Approved);
        assert_eq!(updated.title, before.title);
        assert_eq!(updated.location, before.location);
        assert_eq!(updated.price, before.price);
    }

    #[test]
    fn update_unknown_id_leaves_store_unchanged() {
        let mut store = ListingStore::seeded();
        let before = store.listings().to_vec();

        let err = store
            .update("999", ListingUpdate::status(ListingStatus::Approved))
            .unwrap_err();

        assert_eq!(err, StoreError::NotFound { id: "999".to_string() });
        assert_eq!(store.listings(), before.as_slice());
    }

    #[test]
    fn field_edit_merges_and_keeps_status() {
        let mut store = ListingStore::seeded();
        let updated = store
            .update(
                "2",
                ListingUpdate {
                    title: Some("Toyota Fortuner XL".to_string()),
                    location: Some("Delhi, India".to_string()),
                    price: Some(130.0),
                    status: None,
                },
            )
            .unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.title, "Toyota Fortuner XL");
        assert_eq!(updated.location, "Delhi, India");
        assert_eq!(updated.price, 130.0);
        assert_eq!(updated.status, ListingStatus::Pending);
    }

    #[test]
    fn approve_then_reject_last_write_wins() {
        let mut store = ListingStore::seeded();
        store
            .update("5", ListingUpdate::status(ListingStatus::Approved))
            .unwrap();
        let final_state = store
            .update("5", ListingUpdate::status(ListingStatus::Rejected))
            .unwrap();

        assert_eq!(final_state.status, ListingStatus::Rejected);
        assert_eq!(store.get("5").unwrap().status, ListingStatus::Rejected);
    }

    #[test]
    fn empty_store_returns_empty_sequence() {
        let store = ListingStore::new(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.listings().len(), 0);
    }

    #[test]
    fn status_counts_cover_all_states() {
        let store = ListingStore::seeded();
        assert_eq!(store.status_counts(), (2, 3, 1));
    }
}
