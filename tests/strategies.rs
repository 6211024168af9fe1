use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};

use catalog_reco::catalog::{CatalogItem, CatalogItemRecord, ItemId, UserProfile};
use catalog_reco::gender::{admits, GenderPreference};
use catalog_reco::selection::strategies::{
    category_match, color_match, direct_name_match, explicit_mentions, new_products,
    response_category, user_preference, StrategyInput, STRATEGIES,
};
use catalog_reco::types::CandidateMatch;

fn make_item(id: &str, name: &str, category: &str, sub_category: &str, colors: &[&str], day: u32) -> CatalogItem {
    CatalogItem::ingest(CatalogItemRecord {
        id: ItemId::new(id),
        name: name.to_string(),
        price: 49.0,
        category: category.to_string(),
        sub_category: sub_category.to_string(),
        sizes: ["S", "M"].iter().map(|s| s.to_string()).collect(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        description: String::new(),
        tag: String::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
    })
}

fn input<'a>(
    query: &'a str,
    answer_text: &'a str,
    catalog: &'a [CatalogItem],
    known: &'a BTreeSet<String>,
    gender: GenderPreference,
) -> StrategyInput<'a> {
    StrategyInput {
        query,
        answer_text,
        catalog,
        known_categories: known,
        known_sub_categories: known,
        profile: None,
        gender,
        mention_threshold: 0.5,
        new_products_limit: 5,
    }
}

fn ids(matches: &[CandidateMatch<'_>]) -> Vec<String> {
    matches.iter().map(|m| m.item.id.as_str().to_string()).collect()
}

fn mixed_catalog() -> Vec<CatalogItem> {
    vec![
        make_item("dress-1", "Floral Dress", "Women", "Dresses", &["Red"], 3),
        make_item("dress-2", "Wrap Dress", "Women", "Dresses", &["Black"], 4),
        make_item("tee", "Classic Tee", "Men", "T-Shirts", &["White"], 5),
        make_item("hoodie", "Zip Hoodie", "Unisex", "Hoodies", &["Navy Blue"], 6),
        make_item("shorts", "Athletic Shorts", "Activewear", "Shorts", &["Black"], 7),
        make_item("jacket", "Denim Jacket", "Men", "Outerwear", &["Blue"], 8),
    ]
}

#[test]
fn response_category_matches_clusters_named_in_answer() {
    let catalog = mixed_catalog();
    let known = BTreeSet::new();
    let input = input(
        "Do you have women's dresses?",
        "Yes! Our dresses are lovely.",
        &catalog,
        &known,
        GenderPreference::Women,
    );

    let matches = response_category(&input);
    assert_eq!(ids(&matches), vec!["dress-1", "dress-2"]);
    assert!(matches.iter().all(|m| m.similarity == 0.9));
    assert!(matches.iter().all(|m| m.strategy_name == "responseCategory"));
}

#[test]
fn gym_cluster_reaches_athletic_items() {
    let catalog = mixed_catalog();
    let known = BTreeSet::new();
    let input = input("any workout gear?", "", &catalog, &known, GenderPreference::Neutral);

    assert_eq!(ids(&response_category(&input)), vec!["shorts"]);
}

#[test]
fn explicit_mentions_fuzzy_match_priced_names() {
    let catalog = vec![
        make_item("hoodie", "Classic Hoodie", "Unisex", "Hoodies", &[], 1),
        make_item("jeans", "Slim Jeans", "Unisex", "Jeans", &[], 1),
        make_item("dress", "Floral Dress", "Women", "Dresses", &[], 1),
    ];
    let known = BTreeSet::new();
    let input = input(
        "what goes with sneakers",
        "You might like the Classic Hoodie ($49.99) or the Slim Jeans ($60).",
        &catalog,
        &known,
        GenderPreference::Neutral,
    );

    let matches = explicit_mentions(&input);
    assert_eq!(ids(&matches), vec!["hoodie", "jeans"]);
    assert!(matches.iter().all(|m| m.similarity > 0.5));
}

#[test]
fn explicit_mentions_need_a_price() {
    let catalog = vec![make_item("hoodie", "Classic Hoodie", "Unisex", "Hoodies", &[], 1)];
    let known = BTreeSet::new();
    let input = input(
        "hoodies",
        "The Classic Hoodie is a favourite.",
        &catalog,
        &known,
        GenderPreference::Neutral,
    );
    assert!(explicit_mentions(&input).is_empty());
}

#[test]
fn direct_name_match_scores_with_similarity() {
    let catalog = mixed_catalog();
    let known = BTreeSet::new();
    let input = input(
        "do you have the zip hoodie in stock",
        "",
        &catalog,
        &known,
        GenderPreference::Neutral,
    );

    let matches = direct_name_match(&input);
    assert_eq!(ids(&matches), vec!["hoodie"]);
    assert_eq!(matches[0].similarity, 0.9);
}

#[test]
fn category_match_fixed_vocabulary() {
    let catalog = mixed_catalog();
    let known = BTreeSet::new();
    let input = input("show me hoodies", "", &catalog, &known, GenderPreference::Neutral);

    let matches = category_match(&input);
    assert_eq!(ids(&matches), vec!["hoodie"]);
    assert_eq!(matches[0].similarity, 0.8);
}

#[test]
fn category_match_known_catalog_categories() {
    let mut catalog = mixed_catalog();
    catalog.push(make_item("lounge", "Soft Set", "Loungewear", "Sets", &[], 2));
    let known: BTreeSet<String> = ["loungewear".to_string()].into_iter().collect();
    let input = input("show me loungewear", "", &catalog, &known, GenderPreference::Neutral);

    let matches = category_match(&input);
    assert_eq!(ids(&matches), vec!["lounge"]);
    assert_eq!(matches[0].similarity, 0.7);
}

#[test]
fn category_match_gender_bonus_when_query_agrees() {
    let mut scarf = CatalogItemRecord {
        id: ItemId::new("scarf"),
        name: "Silk Scarf".to_string(),
        price: 25.0,
        category: "Accessories".to_string(),
        sub_category: "Scarves".to_string(),
        sizes: BTreeSet::new(),
        colors: BTreeSet::new(),
        description: String::new(),
        tag: String::new(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    };
    scarf.description = "a gift any girl will love".to_string();
    let catalog = vec![CatalogItem::ingest(scarf)];
    let known = BTreeSet::new();
    let input = input("anything for women", "", &catalog, &known, GenderPreference::Women);

    let matches = category_match(&input);
    assert_eq!(ids(&matches), vec!["scarf"]);
    assert_eq!(matches[0].similarity, 0.75);
}

#[test]
fn new_products_only_when_asked_and_newest_first() {
    let catalog: Vec<CatalogItem> = (1..=6)
        .map(|day| make_item(&format!("h{day}"), &format!("Hoodie {day}"), "Unisex", "Hoodies", &[], day))
        .collect();
    let known = BTreeSet::new();

    let asked = input("show me new hoodies", "", &catalog, &known, GenderPreference::Neutral);
    let matches = new_products(&asked);
    assert_eq!(ids(&matches), vec!["h6", "h5", "h4", "h3", "h2"]);
    let scores: Vec<f64> = matches.iter().map(|m| m.similarity).collect();
    for (got, want) in scores.iter().zip([0.9, 0.8, 0.7, 0.6, 0.5]) {
        assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
    }

    let not_asked = input("show me hoodies", "", &catalog, &known, GenderPreference::Neutral);
    assert!(new_products(&not_asked).is_empty());
}

#[test]
fn color_match_reads_query_and_answer() {
    let catalog = mixed_catalog();
    let known = BTreeSet::new();

    let red = input("anything in red?", "", &catalog, &known, GenderPreference::Neutral);
    assert_eq!(ids(&color_match(&red)), vec!["dress-1"]);

    let navy = input("hoodies", "We have it in navy.", &catalog, &known, GenderPreference::Neutral);
    let matches = color_match(&navy);
    assert_eq!(ids(&matches), vec!["hoodie"]);
    assert_eq!(matches[0].similarity, 0.7);
}

#[test]
fn user_preference_normalises_profile_affinity() {
    let catalog = mixed_catalog();
    let known = BTreeSet::new();
    let profile = UserProfile {
        recently_viewed: vec!["Floral Dress".to_string()],
        top_categories: vec!["Women".to_string()],
        top_colors: vec!["Red".to_string()],
        top_sizes: vec!["M".to_string()],
        ..UserProfile::default()
    };

    let mut with_profile = input("any suggestions?", "", &catalog, &known, GenderPreference::Neutral);
    with_profile.profile = Some(&profile);
    let matches = user_preference(&with_profile);

    let dress = matches.iter().find(|m| m.item.id.as_str() == "dress-1").unwrap();
    assert_eq!(dress.similarity, 1.0);
    let tee = matches.iter().find(|m| m.item.id.as_str() == "tee").unwrap();
    assert_eq!(tee.similarity, 1.0 / 8.0);

    let without = input("any suggestions?", "", &catalog, &known, GenderPreference::Neutral);
    assert!(user_preference(&without).is_empty());
}

#[test]
fn no_strategy_leaks_items_past_its_own_gender_filter() {
    let catalog = mixed_catalog();
    let known: BTreeSet<String> = ["outerwear".to_string(), "t-shirts".to_string()].into_iter().collect();
    let profile = UserProfile {
        recently_viewed: vec!["Classic Tee".to_string()],
        top_categories: vec!["Men".to_string()],
        top_colors: vec!["Blue".to_string()],
        ..UserProfile::default()
    };

    for (gender, query) in [
        (GenderPreference::Women, "show me new red dresses, tees and outerwear for women"),
        (GenderPreference::Men, "show me new black shorts, dresses and t-shirts for men"),
    ] {
        let mut strategy_input = input(
            query,
            "Try the Classic Tee ($20) or Floral Dress ($50).",
            &catalog,
            &known,
            gender,
        );
        strategy_input.profile = Some(&profile);

        for strategy in STRATEGIES {
            for candidate in (strategy.execute)(&strategy_input) {
                assert!(
                    admits(candidate.item, gender),
                    "{} leaked {} for {:?}",
                    strategy.name,
                    candidate.item.id,
                    gender
                );
            }
        }
    }
}

#[test]
fn strategies_are_ordered_by_priority() {
    let priorities: Vec<u8> = STRATEGIES.iter().map(|s| s.priority).collect();
    assert_eq!(priorities, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(STRATEGIES[0].name, "responseCategory");
    assert_eq!(STRATEGIES[6].name, "userPreference");
}

#[test]
fn cluster_terms_match_inside_compound_item_values() {
    let catalog = vec![
        make_item("flex", "Flex Top", "Sportswear", "Athleticwear", &[], 1),
        make_item("sweats", "Fleece Sweatpants", "Unisex", "Bottoms", &[], 2),
        make_item("mini", "Floral Minidresses", "Apparel", "Casual", &[], 3),
    ];
    let known = BTreeSet::new();

    let gym = input("show me workout gear", "Our sports range.", &catalog, &known, GenderPreference::Neutral);
    assert_eq!(ids(&response_category(&gym)), vec!["flex"]);

    let pants = input("any pants?", "", &catalog, &known, GenderPreference::Neutral);
    assert_eq!(ids(&response_category(&pants)), vec!["sweats"]);

    let dresses = input("show me dresses", "", &catalog, &known, GenderPreference::Women);
    assert_eq!(ids(&response_category(&dresses)), vec!["mini"]);
}

#[test]
fn gender_cluster_does_not_match_men_inside_women() {
    let catalog = vec![
        make_item("w", "Wrap Top", "Women", "Tops", &[], 1),
        make_item("m", "Oxford Shirt", "Men", "Shirts", &[], 2),
    ];
    let known = BTreeSet::new();
    let input = input("anything for men", "", &catalog, &known, GenderPreference::Neutral);

    assert_eq!(ids(&category_match(&input)), vec!["m"]);
}

#[test]
fn explicit_mentions_capture_only_the_product_name() {
    let catalog = vec![
        make_item("hoodie", "Classic Hoodie", "Unisex", "Hoodies", &[], 1),
        make_item("jeans", "Slim Jeans", "Unisex", "Jeans", &[], 1),
    ];
    let known = BTreeSet::new();
    let input = input(
        "what goes with sneakers",
        "I'd suggest the Classic Hoodie ($49), and **Slim Jeans** ($60) pair well.",
        &catalog,
        &known,
        GenderPreference::Neutral,
    );

    let matches = explicit_mentions(&input);
    assert_eq!(ids(&matches), vec!["hoodie", "jeans"]);
    assert!(matches.iter().all(|m| m.similarity == 1.0));
}
