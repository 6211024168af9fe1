use crate::catalog::CatalogItem;
use crate::config::EngineConfig;
use crate::types::RecommendationPayload;

/// Answer followed by the apology sentence.
pub fn with_apology(answer_text: &str, config: &EngineConfig) -> String {
    format!("{}\n\n{}", answer_text.trim_end(), config.apology_text)
}

/// Answer followed by the delimiter and the JSON list of recommended items.
pub fn with_payload(
    answer_text: &str,
    items: &[CatalogItem],
    config: &EngineConfig,
) -> Result<String, serde_json::Error> {
    let payload: Vec<RecommendationPayload> = items.iter().map(RecommendationPayload::from).collect();
    let json = serde_json::to_string(&payload)?;
    Ok(format!(
        "{}\n\n{}{}",
        answer_text.trim_end(),
        config.payload_delimiter,
        json
    ))
}

/// Split an augmented answer back into text and payload, for consumers that
/// render the two separately.
pub fn split_payload(
    augmented_text: &str,
    config: &EngineConfig,
) -> Result<(String, Vec<RecommendationPayload>), serde_json::Error> {
    match augmented_text.rsplit_once(config.payload_delimiter.as_str()) {
        Some((text, json)) => {
            let payload = serde_json::from_str(json)?;
            Ok((text.trim_end().to_string(), payload))
        }
        None => Ok((augmented_text.to_string(), Vec::new())),
    }
}
