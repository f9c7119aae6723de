//! Shared fixtures for unit and integration tests.

use crate::catalog::{CatalogDocument, Destination, Region};

fn destination(
    id: u32,
    name: &str,
    region: &str,
    types: &[&str],
    rating: f64,
    keywords: &[&str],
    description: &str,
) -> Destination {
    Destination {
        id,
        name: name.to_string(),
        region: region.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        rating,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
        address: format!("{} main street", name),
        list_image: format!("dest{}_list.jpg", id),
        main_image: format!("dest{}_main.jpg", id),
        sub_images: vec![format!("dest{}_1.jpg", id)],
    }
}

/// A small catalog covering the interesting cases: duplicate ratings,
/// multiple regions, single- and multi-tag destinations.
pub fn sample_destinations() -> Vec<Destination> {
    vec![
        destination(
            1,
            "Great Wall",
            "Beijing, China",
            &["Historical"],
            4.8,
            &["wall", "history"],
            "A series of fortifications across northern China.",
        ),
        destination(
            2,
            "Forbidden City",
            "Beijing, China",
            &["Historical", "Cultural"],
            4.9,
            &["palace"],
            "Imperial palace complex at the heart of Beijing.",
        ),
        destination(
            3,
            "Bondi Beach",
            "Sydney, Australia",
            &["Beach"],
            4.5,
            &["surf", "sand"],
            "Iconic ocean swimming spot.",
        ),
        destination(
            4,
            "Kinkaku-ji",
            "Kyoto, Japan",
            &["Historical"],
            4.7,
            &["temple", "zen"],
            "The Golden Pavilion, a zen temple by a mirror pond.",
        ),
        destination(
            5,
            "Sydney Opera House",
            "Sydney, Australia",
            &["Cultural"],
            4.7,
            &["opera", "architecture"],
            "Multi-venue performing arts centre on the harbour.",
        ),
    ]
}

pub fn sample_regions() -> Vec<Region> {
    ["Beijing, China", "Sydney, Australia", "Kyoto, Japan"]
        .iter()
        .enumerate()
        .map(|(index, name)| Region {
            id: index as u32 + 1,
            name: name.to_string(),
            intro: format!("All about {}", name),
            image_path: format!("region{}.jpg", index + 1),
        })
        .collect()
}

pub fn sample_catalog() -> CatalogDocument {
    CatalogDocument {
        destinations: sample_destinations(),
        regions: sample_regions(),
    }
}
