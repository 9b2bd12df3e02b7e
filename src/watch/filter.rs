use std::collections::HashSet;

use crate::api::types::Listing;

pub const TARGET_CATEGORY: &str = "individual";

/// Keeps only individual rental listings, in fetch order.
pub fn individual_listings(results: Vec<Listing>) -> Vec<Listing> {
    results
        .into_iter()
        .filter(|listing| listing.kind == TARGET_CATEGORY)
        .collect()
}

/// Keeps listings whose integer id is not in the seen set, in fetch order.
/// Records without an integer id are never considered new.
pub fn new_listings(results: Vec<Listing>, seen: &HashSet<i64>) -> Vec<Listing> {
    results
        .into_iter()
        .filter(|listing| listing.id.map_or(false, |id| !seen.contains(&id)))
        .collect()
}
