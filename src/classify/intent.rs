//! Product-intent predicates over the shopper's query.

use crate::text::contains_any;

/// Phrases that ask for products outright.
pub const EXPLICIT_REQUEST_PHRASES: &[&str] = &[
    "recommend",
    "recommendation",
    "suggest",
    "suggestion",
    "show me",
    "looking for",
    "look for",
    "do you have",
    "do you sell",
    "do you carry",
    "options",
    "find me",
    "i need",
    "i want",
    "what should i wear",
    "something for",
    "browse",
    "buy",
    "shop for",
];

/// Category terms that on their own make a query a product request.
pub const PRODUCT_CATEGORY_TERMS: &[&str] = &[
    "women",
    "womens",
    "men",
    "mens",
    "dress",
    "skirt",
    "hoodie",
    "hoody",
    "sweatshirt",
    "jacket",
    "coat",
    "accessories",
    "accessory",
    "leggings",
    "shorts",
    "pants",
    "jeans",
    "joggers",
    "t-shirt",
    "tshirt",
    "tee",
    "shirt",
    "top",
    "tank",
    "crop top",
    "sweater",
    "activewear",
    "sportswear",
    "gym wear",
    "clothes",
    "clothing",
    "outfit",
];

/// Garment nouns that make a query about a specific product.
pub const GARMENT_NOUNS: &[&str] = &[
    "hoodie",
    "hoody",
    "sweatshirt",
    "t-shirt",
    "tshirt",
    "tee",
    "shirt",
    "jacket",
    "coat",
    "dress",
    "skirt",
    "shoe",
    "sneaker",
    "boot",
    "pants",
    "jeans",
    "joggers",
    "leggings",
    "shorts",
    "top",
    "tank",
    "sweater",
    "bra",
    "hat",
    "cap",
    "bag",
    "socks",
];

/// Phrases asking for an outfit rather than naming a garment.
pub const OUTFIT_PHRASES: &[&str] = &[
    "what should i wear",
    "what to wear",
    "outfit for",
    "outfit idea",
    "something to wear",
    "dressed for",
    "wear to",
];

/// True if the query asks for products, either by phrasing or by naming a
/// product category.
pub fn is_explicit_product_request(query: &str) -> bool {
    let query = query.to_lowercase();
    contains_any(&query, EXPLICIT_REQUEST_PHRASES) || contains_any(&query, PRODUCT_CATEGORY_TERMS)
}

/// True if the query names a garment or asks what to wear.
pub fn is_specific_product_query(query: &str) -> bool {
    let query = query.to_lowercase();
    contains_any(&query, GARMENT_NOUNS) || contains_any(&query, OUTFIT_PHRASES)
}
