use crate::api::homeq::LISTING_BASE_URL;
use crate::api::types::Listing;

pub const MESSAGE_HEADER: &str = "HomeQ: new listings";

const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

fn yes_no(v: bool) -> &'static str {
    if v {
        "Yes"
    } else {
        "No"
    }
}

/// Multi-line text block for one listing. Lines whose source field is
/// absent or empty are omitted entirely; zero counts as a present value.
pub fn format_listing(listing: &Listing) -> String {
    let mut lines: Vec<String> = Vec::new();

    if !listing.title.is_empty() {
        lines.push(listing.title.clone());
    }
    if let (Some(rooms), Some(area)) = (listing.rooms, listing.area) {
        lines.push(format!("{} rum • {} m²", rooms, area));
    }
    if let Some(rent) = listing.rent {
        lines.push(format!("Rent: {} kr", rent));
    }
    if !listing.date_access.is_empty() {
        lines.push(format!("Move-in: {}", listing.date_access));
    }
    match (listing.municipality.as_str(), listing.city.as_str()) {
        ("", "") => {}
        (municipality, "") => lines.push(format!("Area: {}", municipality)),
        ("", city) => lines.push(format!("Area: {}", city)),
        (municipality, city) => lines.push(format!("Area: {} / {}", municipality, city)),
    }
    lines.push(format!("Short lease: {}", yes_no(listing.is_short_lease)));
    if !listing.uri.is_empty() {
        lines.push(format!("{}{}", LISTING_BASE_URL, listing.uri));
    }

    lines.join("\n")
}

/// One grouped message for the whole run.
pub fn build_message(listings: &[Listing]) -> String {
    let blocks: Vec<String> = listings.iter().map(format_listing).collect();
    format!("{}\n\n{}", MESSAGE_HEADER, blocks.join(BLOCK_SEPARATOR))
}
