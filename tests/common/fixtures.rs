//! Static catalogues used across harnesses.
//!
//! `extended_catalogue` mixes the built-in gins with entries chosen to trip
//! up matching and ordering: lower-case names, LIKE metacharacters, empty
//! botanicals and non-ASCII text.

#![allow(dead_code)]

use ginmania::store::default_catalogue;
use ginmania::Gin;

use super::builders::GinBuilder;

/// Names of the built-in catalogue in sorted order.
pub const SEEDED_NAMES_SORTED: &[&str] = &[
    "Four Pillars Rare Dry",
    "Hendrick's",
    "Ki No Bi Kyoto Dry",
    "Tanqueray No. Ten",
];

pub fn extended_catalogue() -> Vec<Gin> {
    let mut gins = default_catalogue();
    gins.extend([
        GinBuilder::new("Monkey 47")
            .country("Germany")
            .botanical("lingonberry")
            .botanical("spruce tips")
            .description("47 botanicals from the Black Forest, bottled at 47%.")
            .build(),
        GinBuilder::new("beefeater")
            .country("England")
            .botanical("juniper")
            .botanical("seville orange")
            .description("London dry, lower-cased on purpose.")
            .build(),
        GinBuilder::new("Gin Mare")
            .country("Spain")
            .botanical("arbequina olive")
            .botanical("basil")
            .description("Méditerranée in a bottle.")
            .build(),
        GinBuilder::new("Plain_Spirit")
            .country("Nowhere")
            .description("No botanicals listed.")
            .build(),
    ]);
    gins
}

/// Queries exercised by parity and property checks.
pub const SAMPLE_QUERIES: &[&str] = &[
    "",
    "   ",
    "cucumber",
    "JAPAN",
    "dry",
    "47%",
    "_",
    "%",
    "spruce t",
    "méditerranée",
    "MÉDITERRANÉE",
    "orange",
    "zzzznomatch",
    "a\0b",
];
