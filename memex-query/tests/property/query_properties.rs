use memex_core::models::{ClassificationMethod, EntityType, IntentKind};
use memex_query::{EntityExtractor, IntentClassifier};
use proptest::prelude::*;

proptest! {
    #[test]
    fn extraction_never_panics_and_is_deduplicated(text in ".{0,200}") {
        let found = EntityExtractor::shared().extract(&text);
        let mut keys: Vec<(EntityType, &str)> =
            found.iter().map(|e| (e.entity_type, e.value.as_str())).collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(before, keys.len());
    }

    #[test]
    fn confidences_are_in_unit_range(text in "[a-zA-Z0-9_./@: -]{0,120}") {
        for e in EntityExtractor::shared().extract(&text) {
            let c = e.confidence.unwrap_or(0.0);
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn camel_identifiers_are_found(head in "[a-z]{2,8}", tail in "[A-Z][a-z]{2,8}") {
        let name = format!("{head}{tail}");
        prop_assume!(!name.ends_with("Error"));
        let text = format!("please call {name} soon");
        let found = EntityExtractor::shared().extract_type(&text, EntityType::FunctionName);
        prop_assert!(found.iter().any(|e| e.value == name), "missing {}", name);
    }

    #[test]
    fn uppercase_constants_are_never_function_names(word in "[A-Z]{3,10}(_[A-Z]{2,6}){1,3}") {
        let found = EntityExtractor::shared().extract_type(&word, EntityType::FunctionName);
        prop_assert!(found.is_empty());
    }

    #[test]
    fn file_paths_normalize_to_lowercase(dir in "[A-Za-z]{2,8}", stem in "[A-Za-z]{2,8}") {
        let text = format!("open {dir}/{stem}.rs");
        for e in EntityExtractor::shared().extract_type(&text, EntityType::FilePath) {
            prop_assert_eq!(e.normalized_value.clone(), e.normalized_value.to_lowercase());
        }
    }

    #[test]
    fn classification_is_total(text in ".{0,120}") {
        let r = IntentClassifier::new().classify(&text);
        prop_assert!((0.0..=1.0).contains(&r.confidence));
        if r.method == ClassificationMethod::Default {
            prop_assert_eq!(r.intent, IntentKind::Explore);
        }
    }
}
