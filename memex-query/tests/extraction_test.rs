use memex_core::models::{EntityType, ExtractedEntity};
use memex_query::{EntityExtractor, ExtractorOptions};

fn of_type(entities: &[ExtractedEntity], t: EntityType) -> Vec<&ExtractedEntity> {
    entities.iter().filter(|e| e.entity_type == t).collect()
}

#[test]
fn camel_case_identifier_is_a_function_name() {
    let found = EntityExtractor::shared().extract("Call the executeQuery function");
    let names = of_type(&found, EntityType::FunctionName);
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].value, "executeQuery");
    assert!(names[0].confidence.unwrap() >= 0.7);
}

#[test]
fn short_and_constant_identifiers_are_ignored() {
    let found = EntityExtractor::shared().extract("set ab and cd to CONSTANT_VALUE");
    assert!(of_type(&found, EntityType::FunctionName).is_empty());
}

#[test]
fn stop_words_in_call_syntax_are_ignored() {
    let found = EntityExtractor::shared().extract("if (x) then the(y) but loadConfig(z)");
    let names: Vec<&str> = of_type(&found, EntityType::FunctionName)
        .iter()
        .map(|e| e.value.as_str())
        .collect();
    assert_eq!(names, vec!["loadConfig"]);
}

#[test]
fn scoped_package_is_normalized_to_lowercase() {
    let found = EntityExtractor::shared().extract("install @Anthropic/SDK today");
    let pkgs = of_type(&found, EntityType::PackageName);
    assert_eq!(pkgs.len(), 1);
    assert_eq!(pkgs[0].value, "@Anthropic/SDK");
    assert_eq!(pkgs[0].normalized_value, "@anthropic/sdk");
    assert!(pkgs[0].confidence.unwrap() >= 0.9);
}

#[test]
fn scoped_package_keeps_its_name() {
    let found = EntityExtractor::shared().extract("upgrade @anthropic/sdk");
    let pkgs = of_type(&found, EntityType::PackageName);
    assert_eq!(pkgs[0].normalized_value, "@anthropic/sdk");
    assert_eq!(
        EntityExtractor::shared().variants(pkgs[0]),
        vec!["anthropic", "sdk"]
    );
}

#[test]
fn org_repo_package() {
    let found = EntityExtractor::shared().extract("clone tokio-rs/axum first");
    let pkgs = of_type(&found, EntityType::PackageName);
    assert_eq!(pkgs.len(), 1);
    assert_eq!(pkgs[0].normalized_value, "tokio-rs/axum");
}

#[test]
fn file_paths_with_known_extension_score_high() {
    let found = EntityExtractor::shared().extract("Compare src/Config/Loader.ts with Cargo.toml");
    let files = of_type(&found, EntityType::FilePath);
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].normalized_value, "src/config/loader.ts");
    assert_eq!(files[1].normalized_value, "cargo.toml");
    assert!(files.iter().all(|f| f.confidence.unwrap() >= 0.9));
}

#[test]
fn url_keeps_query_string() {
    let found = EntityExtractor::shared().extract("open https://example.com/search?q=rust&page=2 now");
    let urls = of_type(&found, EntityType::Url);
    assert_eq!(urls.len(), 1);
    assert_eq!(urls[0].value, "https://example.com/search?q=rust&page=2");
    assert!(urls[0].confidence.unwrap() >= 0.9);
}

#[test]
fn error_codes_of_every_shape() {
    let found = EntityExtractor::shared()
        .extract("saw ERR_MODULE_NOT_FOUND, ENOENT, TS2345 and a ValueError");
    let codes: Vec<&str> = of_type(&found, EntityType::ErrorCode)
        .iter()
        .map(|e| e.value.as_str())
        .collect();
    assert_eq!(codes, vec!["ERR_MODULE_NOT_FOUND", "ENOENT", "TS2345", "ValueError"]);
}

#[test]
fn error_suffixed_name_scores_high() {
    let found = EntityExtractor::shared().extract("throws ConnectionError");
    let codes = of_type(&found, EntityType::ErrorCode);
    assert!(codes[0].confidence.unwrap() >= 0.9);
    assert_eq!(
        EntityExtractor::shared().variants(codes[0]),
        vec!["connectionerror", "CONNECTIONERROR"]
    );
}

#[test]
fn command_is_normalized_as_tool_and_verb() {
    let found = EntityExtractor::shared().extract("then run Git  Commit and docker build");
    let cmds: Vec<&str> = of_type(&found, EntityType::Command)
        .iter()
        .map(|e| e.normalized_value.as_str())
        .collect();
    assert_eq!(cmds, vec!["git commit", "docker build"]);
}

#[test]
fn repeated_values_collapse() {
    let found = EntityExtractor::shared().extract("parseInput calls parseInput again, see parseInput()");
    assert_eq!(of_type(&found, EntityType::FunctionName).len(), 1);
}

#[test]
fn results_follow_text_order() {
    let found = EntityExtractor::shared().extract("ENOENT in src/app.py from loadData()");
    let types: Vec<EntityType> = found.iter().map(|e| e.entity_type).collect();
    assert_eq!(
        types,
        vec![EntityType::ErrorCode, EntityType::FilePath, EntityType::FunctionName]
    );
}

#[test]
fn extract_type_filters() {
    let text = "fix src/main.rs where parseArgs fails";
    let files = EntityExtractor::shared().extract_type(text, EntityType::FilePath);
    assert_eq!(files.len(), 1);
    assert!(files.iter().all(|e| e.entity_type == EntityType::FilePath));
}

#[test]
fn filter_by_confidence_drops_missing_confidence() {
    let mut unscored = ExtractedEntity::new(EntityType::FunctionName, "doThing", "doThing");
    unscored.confidence = None;
    let mut scored = ExtractedEntity::new(EntityType::Url, "https://a.dev", "https://a.dev");
    scored.confidence = Some(0.95);
    let mut weak = ExtractedEntity::new(EntityType::FunctionName, "do_it", "do_it");
    weak.confidence = Some(0.7);

    let kept = EntityExtractor::filter_by_confidence(vec![unscored, scored, weak], 0.8);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].entity_type, EntityType::Url);
}

#[test]
fn semantic_types_when_enabled() {
    let extractor = EntityExtractor::new(ExtractorOptions {
        fuzzy_variants: true,
        confidence_scoring: true,
        semantic_types: true,
    });
    let found = extractor.extract("edit config.yaml and call fetchUser()");
    let file = &of_type(&found, EntityType::FilePath)[0];
    assert_eq!(file.semantic_type.as_deref(), Some("config_file"));
    let func = &of_type(&found, EntityType::FunctionName)[0];
    assert_eq!(func.semantic_type.as_deref(), Some("function"));
}

#[test]
fn shared_instance_uses_defaults() {
    assert_eq!(EntityExtractor::shared().options(), ExtractorOptions::default());
    assert!(std::ptr::eq(EntityExtractor::shared(), EntityExtractor::shared()));
}

#[test]
fn empty_text_has_no_entities() {
    assert!(EntityExtractor::shared().extract("").is_empty());
    assert!(EntityExtractor::shared().extract("   \n").is_empty());
}
