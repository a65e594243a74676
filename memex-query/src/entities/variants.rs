//! Fuzzy-match variants and semantic sub-types per entity type.

use memex_core::models::EntityType;

use super::patterns::{CONFIG_EXTENSIONS, DOC_EXTENSIONS};

/// Type-specific variants for fuzzy matching, in a stable order.
///
/// File paths yield the file name and its stem, packages their path
/// segments, error codes their case variants, commands the bare tool.
/// Variants equal to the value itself are omitted.
pub fn generate(entity_type: EntityType, value: &str, normalized: &str) -> Vec<String> {
    let mut out = Vec::new();
    match entity_type {
        EntityType::FilePath => {
            let trimmed = normalized.trim_end_matches('/');
            let file_name = trimmed.rsplit('/').next().unwrap_or(trimmed);
            push_unique(&mut out, file_name, normalized);
            if let Some((stem, _)) = file_name.rsplit_once('.') {
                push_unique(&mut out, stem, normalized);
            }
        }
        EntityType::PackageName => {
            for segment in normalized.split('/') {
                push_unique(&mut out, segment.trim_start_matches('@'), normalized);
            }
        }
        EntityType::ErrorCode => {
            push_unique(&mut out, &value.to_lowercase(), value);
            push_unique(&mut out, &value.to_uppercase(), value);
        }
        EntityType::Command => {
            if let Some(tool) = normalized.split_whitespace().next() {
                push_unique(&mut out, tool, normalized);
            }
        }
        EntityType::FunctionName | EntityType::Url => {}
    }
    out
}

fn push_unique(out: &mut Vec<String>, candidate: &str, original: &str) {
    if candidate.is_empty() || candidate == original || out.iter().any(|v| v == candidate) {
        return;
    }
    out.push(candidate.to_string());
}

/// Finer classification of an entity, used to label results.
pub fn semantic_type(entity_type: EntityType, value: &str, normalized: &str) -> Option<String> {
    let label = match entity_type {
        EntityType::FilePath => {
            let ext = normalized
                .rsplit('/')
                .next()
                .and_then(|name| name.rsplit_once('.'))
                .map(|(_, ext)| ext)
                .unwrap_or("");
            if normalized.contains("test") || normalized.contains("spec") {
                "test_file"
            } else if CONFIG_EXTENSIONS.contains(&ext) {
                "config_file"
            } else if DOC_EXTENSIONS.contains(&ext) {
                "documentation"
            } else if ext.is_empty() {
                "directory_or_binary"
            } else {
                "source_file"
            }
        }
        EntityType::FunctionName => {
            if value.starts_with(|c: char| c.is_ascii_uppercase()) {
                "type_name"
            } else {
                "function"
            }
        }
        EntityType::PackageName => {
            if value.starts_with('@') {
                "scoped_package"
            } else {
                "repository"
            }
        }
        EntityType::Url => {
            if normalized.contains("docs") || normalized.contains("/doc/") {
                "documentation_url"
            } else if normalized.contains("github.com") || normalized.contains("gitlab.com") {
                "repository_url"
            } else {
                "web_url"
            }
        }
        EntityType::ErrorCode => {
            if value.starts_with("ERR_") {
                "runtime_error_code"
            } else if value.ends_with("Error") || value.ends_with("Exception") {
                "exception_type"
            } else if value.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
                "system_error"
            } else {
                "diagnostic_code"
            }
        }
        EntityType::Command => match normalized.split_whitespace().next().unwrap_or("") {
            "git" => "version_control",
            "docker" | "docker-compose" | "kubectl" | "helm" => "container",
            "terraform" => "infrastructure",
            "make" | "mvn" | "gradle" => "build",
            _ => "package_manager",
        },
    };
    Some(label.to_string())
}
