//! Store policy / general information detection.

use crate::text::contains_any;

/// Phrases that settle a query as informational no matter what else it says.
pub const STRONG_FAQ_INDICATORS: &[&str] = &[
    "return policy",
    "refund policy",
    "exchange policy",
    "shipping policy",
    "privacy policy",
    "how long does shipping take",
    "how long does shipping",
    "how long does delivery",
    "how long will delivery",
    "shipping cost",
    "shipping fee",
    "track my order",
    "where is my order",
    "order status",
    "cancel my order",
    "store hours",
    "opening hours",
    "business hours",
    "customer service",
    "payment methods",
    "contact you",
];

/// Single words that usually mark a policy question.
pub const FAQ_KEYWORDS: &[&str] = &[
    "policy",
    "policies",
    "shipping",
    "ship",
    "delivery",
    "deliver",
    "order",
    "hours",
    "refund",
    "return",
    "exchange",
    "track",
    "tracking",
    "payment",
    "pay",
    "warranty",
    "cancel",
    "contact",
    "open",
];

/// Language an answer uses when it is explaining store policy.
pub const ANSWER_POLICY_PHRASES: &[&str] = &[
    "return policy",
    "refund",
    "returns are accepted",
    "shipping",
    "delivery time",
    "business days",
    "business hours",
    "store hours",
    "open from",
    "customer service",
    "contact us",
    "support team",
    "within 30 days",
];

const AVAILABILITY_PHRASES: &[&str] = &[
    "do you have",
    "do you sell",
    "do you offer",
    "do you carry",
    "do you stock",
    "does your store have",
    "have any",
    "is there any",
    "are there any",
];

const RECOMMENDATION_PHRASES: &[&str] = &[
    "recommend",
    "suggest",
    "what should i wear",
    "what to wear",
    "what would go",
    "looking for",
];

/// Product words that turn an availability or recommendation phrase into a
/// shopping question.
pub const PRODUCT_KEYWORDS: &[&str] = &[
    "dress",
    "skirt",
    "hoodie",
    "hoody",
    "sweatshirt",
    "jacket",
    "coat",
    "shirt",
    "t-shirt",
    "tshirt",
    "tee",
    "top",
    "tank",
    "leggings",
    "shorts",
    "pants",
    "jeans",
    "joggers",
    "sweater",
    "shoe",
    "sneaker",
    "accessories",
    "bag",
    "hat",
    "cap",
    "clothes",
    "clothing",
    "outfit",
    "activewear",
    "sportswear",
    "product",
    "item",
];

/// True for "do you have/sell ..." questions that name a product.
pub fn is_availability_question(query: &str) -> bool {
    let query = query.to_lowercase();
    contains_any(&query, AVAILABILITY_PHRASES) && contains_any(&query, PRODUCT_KEYWORDS)
}

/// True for "recommend/suggest ..." questions that name a product.
pub fn is_recommendation_question(query: &str) -> bool {
    let query = query.to_lowercase();
    contains_any(&query, RECOMMENDATION_PHRASES) && contains_any(&query, PRODUCT_KEYWORDS)
}

/// True if the exchange is about store policy or general information rather
/// than products.
///
/// A strong indicator in the query always wins. Otherwise a shopping question
/// overrides any policy vocabulary in the query or answer.
pub fn is_general_info_or_faq(query: &str, answer_text: &str) -> bool {
    let query_lower = query.to_lowercase();

    if contains_any(&query_lower, STRONG_FAQ_INDICATORS) {
        return true;
    }

    if is_availability_question(&query_lower) || is_recommendation_question(&query_lower) {
        return false;
    }

    let answer_lower = answer_text.to_lowercase();
    contains_any(&query_lower, FAQ_KEYWORDS) || contains_any(&answer_lower, ANSWER_POLICY_PHRASES)
}
