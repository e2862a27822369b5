//! Behavioural properties of the keyword classifier, checked against the
//! built-in site table and the shipped compact knowledge file.

use advisor_core::types::Category;
use advisor_intent::{IntentClassifier, KnowledgeBase};

const COMPACT_TOML: &str = include_str!("../../../config/knowledge/compact.toml");

// =============================================================================
// Helpers
// =============================================================================

fn compact() -> IntentClassifier {
    IntentClassifier::new(KnowledgeBase::from_toml_str(COMPACT_TOML).unwrap())
}

fn builtin() -> IntentClassifier {
    IntentClassifier::builtin()
}

// =============================================================================
// Shipped knowledge file
// =============================================================================

#[test]
fn compact_file_loads_in_declaration_order() {
    let c = compact();
    let ids: Vec<&str> = c
        .knowledge()
        .categories()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids, vec!["erp", "scaling", "ai", "consultation"]);
    assert_eq!(c.knowledge().fallback().id, "default");
    assert!(c.knowledge().fallback().action.is_none());
}

#[test]
fn factory_waste_reduction_routes_to_erp() {
    let c = compact();
    let result = c.explain("we need help with factory waste reduction");
    assert_eq!(result.category.id, "erp");
    assert_eq!(result.score, 2);

    let scores = c.scores("we need help with factory waste reduction");
    assert!(scores
        .iter()
        .filter(|s| s.id != "erp")
        .all(|s| s.score == 0));
}

#[test]
fn empty_query_returns_fallback() {
    assert_eq!(compact().classify("").id, "default");
    assert_eq!(builtin().classify("").id, "default");
}

#[test]
fn queries_without_keywords_return_fallback() {
    let c = compact();
    for query in ["hello there", "xyz", "12345", "???", "good morning"] {
        let result = c.explain(query);
        assert_eq!(result.category.id, "default", "query {:?}", query);
        assert_eq!(result.score, 0);
    }
}

#[test]
fn unique_keyword_selects_its_category() {
    let c = compact();
    assert_eq!(c.classify("inventory").id, "erp");
    assert_eq!(c.classify("high traffic").id, "scaling");
    assert_eq!(c.classify("predictive").id, "ai");
    assert_eq!(c.classify("expert").id, "consultation");
}

#[test]
fn erp_is_case_insensitive() {
    for c in [compact(), builtin()] {
        assert_eq!(c.classify("ERP").id, c.classify("erp").id);
        assert_ne!(c.classify("ERP").id, "default");
    }
}

#[test]
fn embedded_two_letter_keyword_still_matches() {
    // "ai" inside "said" and "main" is counted.
    let c = compact();
    assert_eq!(c.classify("said").id, "ai");
    assert_eq!(c.classify("main").id, "ai");
    assert_eq!(builtin().classify("said").id, "ai_agents");
}

#[test]
fn repeated_calls_are_idempotent() {
    let c = builtin();
    let queries = [
        "",
        "order tracking",
        "how much does it cost",
        "WHO ARE YOU",
        "random words",
    ];
    for query in queries {
        let first = c.classify(query).id.clone();
        for _ in 0..10 {
            assert_eq!(c.classify(query).id, first);
        }
    }
}

// =============================================================================
// Built-in table
// =============================================================================

#[test]
fn builtin_routes_common_questions() {
    let c = builtin();
    assert_eq!(c.classify("I need an ERP for my factory").id, "erp_systems");
    assert_eq!(c.classify("how much will it cost").id, "pricing_estimator");
    assert_eq!(c.classify("Who are you?").id, "who_are_we");
}

#[test]
fn builtin_shared_keyword_tie_prefers_earlier_category() {
    // "tracking" is listed by erp_systems and team_operations.
    let c = builtin();
    let result = c.explain("tracking");
    assert_eq!(result.category.id, "erp_systems");
    assert_eq!(result.score, 1);
}

#[test]
fn builtin_more_hits_beat_earlier_category() {
    // team_operations matches both "tracking" and "order tracking".
    let c = builtin();
    let result = c.explain("order tracking");
    assert_eq!(result.category.id, "team_operations");
    assert_eq!(result.score, 2);
}

#[test]
fn builtin_answer_and_action_are_returned_verbatim() {
    let c = builtin();
    let cat = c.classify("book a call");
    assert_eq!(cat.id, "contact_consultation");
    assert!(cat.answer.starts_with("I'd love to connect you"));
    let action = cat.action.as_ref().unwrap();
    assert_eq!(action.label, "Contact Us");
    assert_eq!(action.link, "contact.html");
}

// =============================================================================
// Custom tables
// =============================================================================

#[test]
fn engineered_tie_is_stable_across_calls() {
    let kb = KnowledgeBase::new(
        vec![
            Category::new("first", ["alpha", "beta"], "first"),
            Category::new("second", ["gamma", "delta"], "second"),
        ],
        Category::fallback("default", "none"),
    )
    .unwrap();
    let c = IntentClassifier::new(kb);
    for _ in 0..5 {
        let result = c.explain("alpha gamma beta delta");
        assert_eq!(result.category.id, "first");
        assert_eq!(result.score, 2);
    }
}

#[test]
fn toml_declaration_order_drives_tie_break() {
    let swapped = r#"
[fallback]
answer = "none"

[[categories]]
id = "second"
keywords = ["gamma"]
answer = "second"

[[categories]]
id = "first"
keywords = ["alpha"]
answer = "first"
"#;
    let c = IntentClassifier::new(KnowledgeBase::from_toml_str(swapped).unwrap());
    assert_eq!(c.classify("alpha gamma").id, "second");
}
