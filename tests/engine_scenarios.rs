use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};

use catalog_reco::catalog::{CatalogItem, CatalogItemRecord, ItemId, UserProfile};
use catalog_reco::config::DEFAULT_APOLOGY_TEXT;
use catalog_reco::{decide_recommendations, Outcome, RecommendationEngine, RecommendationRequest};

fn make_item(id: &str, name: &str, category: &str, sub_category: &str, colors: &[&str], day: u32) -> CatalogItem {
    CatalogItem::ingest(CatalogItemRecord {
        id: ItemId::new(id),
        name: name.to_string(),
        price: 59.0,
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        sizes: ["S", "M", "L"].iter().map(|s| s.to_string()).collect(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        description: String::new(),
        tag: String::new(),
        created_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
    })
}

fn no_categories() -> BTreeSet<String> {
    BTreeSet::new()
}

#[test]
fn return_policy_question_gets_no_products() {
    let catalog = vec![make_item("hoodie", "Zip Hoodie", "Unisex", "Hoodies", &["Black"], 1)];
    let answer = "You can return unworn items within 30 days.";
    let none = no_categories();

    let result = decide_recommendations("What's your return policy?", answer, &catalog, &none, &none, None);

    assert!(result.recommendations.is_empty());
    assert_eq!(result.augmented_text, answer);
    assert_eq!(result.relevance_score, 0.0);
    assert_eq!(result.outcome, Outcome::GeneralInfo);
}

#[test]
fn womens_dresses_are_recommended_from_the_answer_category() {
    let catalog = vec![
        make_item("d1", "Floral Dress", "Women", "Dresses", &["Red"], 1),
        make_item("d2", "Wrap Dress", "Women", "Dresses", &["Black"], 2),
        make_item("d3", "Slip Dress", "Women", "Dresses", &["Green"], 3),
        make_item("d4", "Maxi Dress", "Women", "Dresses", &["White"], 4),
        make_item("skirt", "Pleated Skirt", "Women", "Skirts", &["Black"], 5),
        make_item("tee", "Classic Tee", "Men", "T-Shirts", &["White"], 6),
        make_item("hoodie", "Zip Hoodie", "Unisex", "Hoodies", &["Gray"], 7),
    ];
    let answer = "Yes! We have several beautiful dresses for women in our collection.";
    let none = no_categories();

    let result = decide_recommendations("Do you have women's dresses?", answer, &catalog, &none, &none, None);

    assert_eq!(result.outcome, Outcome::Recommended);
    assert!(!result.recommendations.is_empty() && result.recommendations.len() <= 3);
    for item in &result.recommendations {
        assert!(item.sub_category.to_lowercase().contains("dress"), "{} is not a dress", item.name);
    }
    assert!(result.relevance_score >= 0.3);
    assert!(result.augmented_text.starts_with(answer));
    assert!(result.augmented_text.contains("[RECOMMENDATIONS]"));
}

#[test]
fn new_hoodies_are_capped_with_descending_scores() {
    let catalog = vec![
        make_item("h1", "Zip Hoodie", "Unisex", "Hoodies", &["Black"], 1),
        make_item("h2", "Pullover Hoodie", "Unisex", "Hoodies", &["Gray"], 5),
        make_item("h3", "Cropped Fleece Hoodie", "Unisex", "Hoodies", &["Blue"], 3),
        make_item("h4", "Oversized Hoodie", "Unisex", "Hoodies", &["Green"], 9),
        make_item("h5", "Tech Hoodie", "Unisex", "Hoodies", &["Black"], 7),
        make_item("tee", "Classic Tee", "Unisex", "T-Shirts", &["White"], 10),
    ];
    let query = "show me new hoodies";
    let answer = "Here are our latest hoodies.";

    let engine = RecommendationEngine::default();
    let request = RecommendationRequest::new(query, answer, &catalog);

    let ranked = engine.rank(&request);
    assert_eq!(ranked.selected.len(), 3);
    assert_eq!(ranked.selected[0].similarity, 0.9);
    assert!(ranked
        .selected
        .windows(2)
        .all(|w| w[0].similarity >= w[1].similarity));

    let result = engine.decide(&request);
    assert_eq!(result.outcome, Outcome::Recommended);
    assert_eq!(result.recommendations.len(), 3);
    assert!((result.relevance_score - 0.9).abs() < 1e-9);
}

#[test]
fn request_with_no_matching_products_apologizes() {
    let catalog = vec![
        make_item("hoodie", "Zip Hoodie", "Unisex", "Hoodies", &["Blue"], 1),
        make_item("leggings", "Yoga Leggings", "Women", "Leggings", &["Black"], 2),
        make_item("tee", "Classic Tee", "Men", "T-Shirts", &["White"], 3),
    ];
    let answer = "Let me check what we have for you.";
    let none = no_categories();

    let result = decide_recommendations("recommend a red jacket", answer, &catalog, &none, &none, None);

    assert_eq!(result.outcome, Outcome::NoMatches);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.relevance_score, 0.0);
    assert!(result.augmented_text.starts_with(answer));
    assert!(result.augmented_text.ends_with(DEFAULT_APOLOGY_TEXT));
}

#[test]
fn negative_availability_answer_suppresses_everything() {
    let catalog = vec![make_item("hoodie", "Zip Hoodie", "Unisex", "Hoodies", &["Black"], 1)];
    let answer = "I'm sorry, we don't currently have that in stock";
    let none = no_categories();

    let result = decide_recommendations("do you have black hoodies?", answer, &catalog, &none, &none, None);

    assert_eq!(result.outcome, Outcome::NegativeAvailability);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.augmented_text, answer);
}

#[test]
fn small_talk_is_left_alone() {
    let catalog = vec![make_item("hoodie", "Zip Hoodie", "Unisex", "Hoodies", &["Black"], 1)];
    let none = no_categories();

    let result = decide_recommendations("thanks, that's all", "You're welcome!", &catalog, &none, &none, None);

    assert_eq!(result.outcome, Outcome::NotProductRequest);
    assert_eq!(result.augmented_text, "You're welcome!");
}

#[test]
fn profile_drives_open_ended_suggestions() {
    let catalog = vec![
        make_item("tee", "Classic Tee", "Unisex", "T-Shirts", &["White"], 1),
        make_item("dress", "Floral Dress", "Women", "Dresses", &["Red"], 2),
        make_item("hoodie", "Zip Hoodie", "Unisex", "Hoodies", &["Black"], 3),
    ];
    let profile = UserProfile {
        recently_viewed: vec!["Floral Dress".to_string()],
        top_categories: vec!["Women".to_string()],
        top_colors: vec!["Red".to_string()],
        top_sizes: vec!["M".to_string()],
        ..UserProfile::default()
    };
    let none = no_categories();

    let result = decide_recommendations(
        "any suggestions?",
        "Here are a few picks you might enjoy.",
        &catalog,
        &none,
        &none,
        Some(&profile),
    );

    assert_eq!(result.outcome, Outcome::Recommended);
    assert_eq!(result.recommendations[0].id.as_str(), "dress");
    assert_eq!(result.recommendations.len(), 3);
}

#[test]
fn empty_catalog_degrades_to_apology() {
    let none = no_categories();
    let result = decide_recommendations("show me hoodies", "Sure, here you go.", &[], &none, &none, None);

    assert_eq!(result.outcome, Outcome::NoMatches);
    assert!(result.recommendations.is_empty());
}

#[test]
fn mens_request_skips_compound_womenswear() {
    let catalog = vec![
        make_item("bralette", "Lace Bralette", "Intimates", "Lingerie", &["Pink"], 1),
        make_item("cropped", "Cropped Hoodie", "Tops", "Hoodies", &["Black"], 2),
        make_item("minidress", "Floral Minidress", "Apparel", "Casual", &["Red"], 3),
        make_item("zip", "Zip Hoodie", "Men", "Hoodies", &["Gray"], 4),
    ];
    let none = no_categories();

    let result = decide_recommendations("show me men's hoodies", "Here are our hoodies.", &catalog, &none, &none, None);

    assert_eq!(result.outcome, Outcome::Recommended);
    let ids: Vec<&str> = result.recommendations.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["zip"]);
}

#[test]
fn compound_category_values_reach_their_cluster() {
    let catalog = vec![make_item("flex", "Flex Top", "Sportswear", "Athleticwear", &["Black"], 1)];
    let none = no_categories();

    let result = decide_recommendations("show me workout gear", "Our sports range.", &catalog, &none, &none, None);

    assert_eq!(result.outcome, Outcome::Recommended);
    assert_eq!(result.recommendations[0].id.as_str(), "flex");
}
