//! Gates that decide whether an exchange should surface products at all.

pub mod faq;
pub mod intent;
pub mod negative;

use serde::{Deserialize, Serialize};

pub use faq::is_general_info_or_faq;
pub use intent::{is_explicit_product_request, is_specific_product_query};
pub use negative::is_negative_availability_response;

/// Which gate stopped the pipeline, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateVerdict {
    /// The answer already says the product is not carried.
    NegativeAvailability,
    /// Policy or general information exchange.
    GeneralInfo,
    /// The shopper was not asking for products.
    NotProductRequest,
    /// No gate fired; candidate generation should run.
    Proceed,
}

/// Evaluate the three gates in order, short-circuiting on the first that fires.
pub fn classify(query: &str, answer_text: &str) -> GateVerdict {
    if is_negative_availability_response(answer_text) {
        GateVerdict::NegativeAvailability
    } else if is_general_info_or_faq(query, answer_text) {
        GateVerdict::GeneralInfo
    } else if !is_explicit_product_request(query) {
        GateVerdict::NotProductRequest
    } else {
        GateVerdict::Proceed
    }
}
