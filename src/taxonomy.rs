//! Vocabulary tables: garment clusters, colors and gender words.
//!
//! Every table is plain data keyed by a canonical name so a single cluster
//! can be inspected and tested without running the pipeline.

use crate::text::TermMatch;

/// A canonical garment group with the terms that signal it.
#[derive(Debug, Clone, Copy)]
pub struct Cluster {
    pub canonical: &'static str,
    /// Terms that, when mentioned in a query or answer, select this cluster.
    pub mentions: &'static [&'static str],
    /// Terms that, when found in an item's fields, place the item in this cluster.
    pub item_terms: &'static [&'static str],
    pub item_match: TermMatch,
}

impl Cluster {
    pub fn is_mentioned_in(&self, text: &str) -> bool {
        crate::text::contains_any(text, self.mentions)
    }

    pub fn matches_field(&self, field: &str) -> bool {
        self.item_match.any(field, self.item_terms)
    }
}

/// Clusters read out of the query and the generated answer. Mentions are
/// word-aware; item terms match inside compound catalog values.
///
/// Order matters: an item is credited to the first cluster it matches.
pub const RESPONSE_CLUSTERS: &[Cluster] = &[
    Cluster { canonical: "dress", mentions: &["dress", "gown", "sundress"], item_terms: &["dress", "gown", "sundress"], item_match: TermMatch::Fragment },
    Cluster { canonical: "skirt", mentions: &["skirt", "miniskirt"], item_terms: &["skirt", "miniskirt"], item_match: TermMatch::Fragment },
    Cluster { canonical: "crop top", mentions: &["crop top", "crop"], item_terms: &["crop"], item_match: TermMatch::Fragment },
    Cluster { canonical: "leggings", mentions: &["legging", "tights", "yoga pant"], item_terms: &["legging", "tights"], item_match: TermMatch::Fragment },
    Cluster { canonical: "tank", mentions: &["tank top", "tank", "singlet"], item_terms: &["tank", "singlet"], item_match: TermMatch::Fragment },
    Cluster { canonical: "shorts", mentions: &["shorts"], item_terms: &["short", "shorts"], item_match: TermMatch::Fragment },
    Cluster { canonical: "hoodie", mentions: &["hoodie", "hoody", "hoodies", "sweatshirt"], item_terms: &["hoodie", "hoody", "hoodies", "sweatshirt"], item_match: TermMatch::Fragment },
    Cluster { canonical: "jacket", mentions: &["jacket", "coat", "windbreaker", "parka"], item_terms: &["jacket", "coat", "windbreaker", "parka"], item_match: TermMatch::Fragment },
    Cluster { canonical: "jeans", mentions: &["jeans", "denim"], item_terms: &["jean", "jeans", "denim"], item_match: TermMatch::Fragment },
    Cluster { canonical: "pants", mentions: &["pant", "pants", "trouser", "chino"], item_terms: &["pant", "pants", "trouser", "chino"], item_match: TermMatch::Fragment },
    Cluster { canonical: "t-shirt", mentions: &["t-shirt", "tshirt", "tee"], item_terms: &["t-shirt", "tshirt", "tee"], item_match: TermMatch::Fragment },
    Cluster { canonical: "shirt", mentions: &["shirt", "button-up", "button-down"], item_terms: &["shirt", "button-up", "button-down"], item_match: TermMatch::Fragment },
    Cluster { canonical: "sweater", mentions: &["sweater", "cardigan", "jumper", "pullover"], item_terms: &["sweater", "cardigan", "jumper", "pullover"], item_match: TermMatch::Fragment },
    Cluster { canonical: "bra", mentions: &["sports bra", "bra", "bralette"], item_terms: &["bra", "bralette"], item_match: TermMatch::Fragment },
    Cluster { canonical: "swimwear", mentions: &["swimwear", "swimsuit", "bikini", "swim"], item_terms: &["swimwear", "swimsuit", "bikini", "swim"], item_match: TermMatch::Fragment },
    Cluster { canonical: "shoes", mentions: &["shoe", "sneaker", "trainer", "boot"], item_terms: &["shoe", "sneaker", "trainer", "boot"], item_match: TermMatch::Fragment },
    Cluster { canonical: "socks", mentions: &["sock"], item_terms: &["sock"], item_match: TermMatch::Fragment },
    Cluster { canonical: "underwear", mentions: &["underwear", "boxers", "briefs"], item_terms: &["underwear", "boxer", "brief"], item_match: TermMatch::Fragment },
    Cluster { canonical: "accessories", mentions: &["accessories", "accessory", "bag", "hat", "cap", "belt", "scarf"], item_terms: &["accessories", "accessory", "bag", "hat", "cap", "belt", "scarf"], item_match: TermMatch::Fragment },
    Cluster { canonical: "gym", mentions: &["gym", "workout", "sports", "sport", "joggers", "jogger", "athletic", "training", "activewear"], item_terms: &["gym", "sport", "athletic", "workout", "jogger", "activewear", "training"], item_match: TermMatch::Fragment },
];

/// Clusters read out of the query only, for the broader category match.
/// The gender clusters match item fields by whole word so "men" stays out
/// of "women".
pub const CATEGORY_CLUSTERS: &[Cluster] = &[
    Cluster { canonical: "hoodie", mentions: &["hoodie", "hoody", "hoodies", "hooded", "sweatshirt"], item_terms: &["hoodie", "hoody", "hoodies", "hooded", "sweatshirt"], item_match: TermMatch::Fragment },
    Cluster { canonical: "women", mentions: &["women", "woman", "womens", "ladies"], item_terms: &["women", "womens", "ladies"], item_match: TermMatch::Word },
    Cluster { canonical: "men", mentions: &["men", "mens", "gentlemen"], item_terms: &["men", "mens"], item_match: TermMatch::Word },
    Cluster { canonical: "sport", mentions: &["sport", "sports", "gym", "athletic", "workout", "activewear", "fitness"], item_terms: &["sport", "gym", "athletic", "workout", "activewear", "fitness"], item_match: TermMatch::Fragment },
    Cluster { canonical: "t-shirt", mentions: &["t-shirt", "tshirt", "tee"], item_terms: &["t-shirt", "tshirt", "tee"], item_match: TermMatch::Fragment },
    Cluster { canonical: "jacket", mentions: &["jacket", "coat", "outerwear"], item_terms: &["jacket", "coat", "outerwear"], item_match: TermMatch::Fragment },
    Cluster { canonical: "dress", mentions: &["dress"], item_terms: &["dress"], item_match: TermMatch::Fragment },
    Cluster { canonical: "pants", mentions: &["pant", "pants", "trouser", "jogger", "jeans"], item_terms: &["pant", "pants", "trouser", "jogger", "jeans"], item_match: TermMatch::Fragment },
    Cluster { canonical: "shorts", mentions: &["shorts"], item_terms: &["short", "shorts"], item_match: TermMatch::Fragment },
    Cluster { canonical: "leggings", mentions: &["legging"], item_terms: &["legging"], item_match: TermMatch::Fragment },
    Cluster { canonical: "tops", mentions: &["top", "tank", "crop"], item_terms: &["top", "tank", "crop"], item_match: TermMatch::Fragment },
    Cluster { canonical: "accessories", mentions: &["accessories", "accessory"], item_terms: &["accessories", "accessory", "bag", "hat", "cap", "belt"], item_match: TermMatch::Fragment },
];

/// The twelve named colors recognised in text.
pub const COLORS: &[(&str, &[&str])] = &[
    ("black", &["black"]),
    ("white", &["white"]),
    ("red", &["red"]),
    ("blue", &["blue"]),
    ("green", &["green"]),
    ("yellow", &["yellow"]),
    ("pink", &["pink"]),
    ("purple", &["purple"]),
    ("orange", &["orange"]),
    ("gray", &["gray", "grey"]),
    ("brown", &["brown"]),
    ("navy", &["navy"]),
];

/// Words that address women explicitly.
pub const WOMEN_WORDS: &[&str] = &["women", "woman", "womens", "ladies", "lady", "female", "girl"];

/// Words that address men explicitly.
pub const MEN_WORDS: &[&str] = &["men", "man", "mens", "male", "gentleman", "gentlemen", "guy", "boy"];

/// Garment types that are intrinsically womenswear.
pub const WOMEN_GARMENTS: &[&str] = &["dress", "skirt", "crop", "legging", "bra", "blouse"];

/// Garment types that are intrinsically menswear.
pub const MEN_GARMENTS: &[&str] = &["suit", "tie", "boxers", "briefs"];

/// Canonical color names mentioned in `text`, in table order.
pub fn colors_in(text: &str) -> Vec<&'static str> {
    COLORS
        .iter()
        .filter(|(_, spellings)| crate::text::contains_any(text, spellings))
        .map(|(canonical, _)| *canonical)
        .collect()
}

