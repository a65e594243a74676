use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use memex_core::config::ExtractionConfig;
use memex_core::models::{EntityType, ExtractedEntity};

use super::patterns::{
    self, captures_all, find_all, COMMAND_VERBS, POSIX_ERROR_CODES, SLASH_PHRASES,
};
use super::stop_words::is_stop_word;
use super::variants;

static SHARED: LazyLock<EntityExtractor> = LazyLock::new(EntityExtractor::default);

/// Feature toggles for one extractor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Attach variants to every entity at extraction time.
    pub fuzzy_variants: bool,
    pub confidence_scoring: bool,
    pub semantic_types: bool,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self::from(&ExtractionConfig::default())
    }
}

impl From<&ExtractionConfig> for ExtractorOptions {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            fuzzy_variants: config.fuzzy_variants,
            confidence_scoring: config.confidence_scoring,
            semantic_types: config.semantic_types,
        }
    }
}

/// Pattern-based entity extractor.
///
/// Passes run from most to least specific over a working copy of the text.
/// Each accepted span is blanked out of that copy, so a URL is never also
/// read as a path and a path never also as a package.
#[derive(Debug, Clone, Default)]
pub struct EntityExtractor {
    options: ExtractorOptions,
}

/// An accepted span before options are applied.
struct Found {
    start: usize,
    entity_type: EntityType,
    value: String,
    normalized: String,
    confidence: f64,
}

impl EntityExtractor {
    pub fn new(options: ExtractorOptions) -> Self {
        Self { options }
    }

    /// The process-wide instance with default options.
    pub fn shared() -> &'static EntityExtractor {
        &SHARED
    }

    pub fn options(&self) -> ExtractorOptions {
        self.options
    }

    /// Extract all entities, deduplicated by `(type, value)` and ordered by
    /// first appearance.
    pub fn extract(&self, text: &str) -> Vec<ExtractedEntity> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut masked = text.to_string();
        let mut found = Vec::new();
        extract_urls(text, &mut masked, &mut found);
        extract_scoped_packages(text, &mut masked, &mut found);
        extract_file_paths(text, &mut masked, &mut found);
        extract_repo_packages(text, &mut masked, &mut found);
        extract_commands(text, &mut masked, &mut found);
        extract_error_codes(text, &mut masked, &mut found);
        extract_identifiers(text, &mut masked, &mut found);

        found.sort_by_key(|f| f.start);

        let mut seen = HashSet::new();
        found
            .into_iter()
            .filter(|f| seen.insert((f.entity_type, f.value.clone())))
            .map(|f| self.finish(f))
            .collect()
    }

    /// Extract only entities of one type.
    pub fn extract_type(&self, text: &str, entity_type: EntityType) -> Vec<ExtractedEntity> {
        self.extract(text)
            .into_iter()
            .filter(|e| e.entity_type == entity_type)
            .collect()
    }

    /// Keep entities whose confidence is at least `threshold`. An entity
    /// without a confidence is dropped.
    pub fn filter_by_confidence(
        entities: Vec<ExtractedEntity>,
        threshold: f64,
    ) -> Vec<ExtractedEntity> {
        entities
            .into_iter()
            .filter(|e| e.meets_confidence(threshold))
            .collect()
    }

    /// Variants of `entity`, generated on demand when none are attached.
    pub fn variants(&self, entity: &ExtractedEntity) -> Vec<String> {
        match &entity.variants {
            Some(v) => v.clone(),
            None => variants::generate(
                entity.entity_type,
                &entity.value,
                &entity.normalized_value,
            ),
        }
    }

    fn finish(&self, found: Found) -> ExtractedEntity {
        let mut entity = ExtractedEntity::new(found.entity_type, found.value, found.normalized);
        if self.options.confidence_scoring {
            entity.confidence = Some(found.confidence);
        }
        if self.options.fuzzy_variants {
            let v = variants::generate(
                entity.entity_type,
                &entity.value,
                &entity.normalized_value,
            );
            if !v.is_empty() {
                entity.variants = Some(v);
            }
        }
        if self.options.semantic_types {
            entity.semantic_type = variants::semantic_type(
                entity.entity_type,
                &entity.value,
                &entity.normalized_value,
            );
        }
        entity
    }
}

// ── Passes ─────────────────────────────────────────────────────────────────

fn extract_urls(text: &str, masked: &mut String, out: &mut Vec<Found>) {
    let ranges: Vec<Range<usize>> = find_all(&patterns::RE_URL, masked).map(|m| m.range()).collect();
    for range in ranges {
        let raw = &text[range.clone()];
        let value = raw.trim_end_matches(['.', ',', ';', ':', '!', '?']);
        if value.len() <= "https://".len() {
            continue;
        }
        let range = range.start..range.start + value.len();
        out.push(Found {
            start: range.start,
            entity_type: EntityType::Url,
            value: value.to_string(),
            normalized: normalize_url(value),
            confidence: 0.95,
        });
        mask(masked, range);
    }
}

/// Lowercase scheme and host; path and query keep their case.
fn normalize_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let host_start = scheme_end + 3;
    let host_end = url[host_start..]
        .find(['/', '?', '#'])
        .map_or(url.len(), |i| host_start + i);
    format!(
        "{}{}",
        url[..host_end].to_lowercase(),
        &url[host_end..]
    )
}

fn extract_scoped_packages(text: &str, masked: &mut String, out: &mut Vec<Found>) {
    let ranges: Vec<Range<usize>> = find_all(&patterns::RE_SCOPED_PACKAGE, masked)
        .map(|m| m.range())
        .collect();
    for range in ranges {
        if prev_char(text, range.start).is_some_and(|c| c.is_alphanumeric()) {
            continue;
        }
        let value = &text[range.clone()];
        out.push(Found {
            start: range.start,
            entity_type: EntityType::PackageName,
            value: value.to_string(),
            normalized: value.to_lowercase(),
            confidence: 0.95,
        });
        mask(masked, range);
    }
}

fn extract_file_paths(text: &str, masked: &mut String, out: &mut Vec<Found>) {
    let ranges: Vec<Range<usize>> = find_all(&patterns::RE_FILE_WITH_EXT, masked)
        .map(|m| m.range())
        .collect();
    for range in ranges {
        if prev_char(text, range.start).is_some_and(|c| c == '@') {
            continue;
        }
        let value = &text[range.clone()];
        let has_slash = value.contains('/');
        let ext = value.rsplit_once('.').map_or("", |(_, ext)| ext);
        let confidence = if patterns::is_known_extension(ext) {
            if has_slash {
                0.95
            } else {
                0.9
            }
        } else if has_slash && ext.chars().any(|c| c.is_ascii_alphabetic()) {
            0.75
        } else {
            continue;
        };
        out.push(Found {
            start: range.start,
            entity_type: EntityType::FilePath,
            value: value.to_string(),
            normalized: value.to_lowercase(),
            confidence,
        });
        mask(masked, range);
    }

    let ranges: Vec<Range<usize>> = find_all(&patterns::RE_FILE_ANCHORED, masked)
        .map(|m| m.range())
        .collect();
    for range in ranges {
        let boundary = prev_char(text, range.start)
            .map_or(true, |c| c.is_whitespace() || "([\"'`=,".contains(c));
        if !boundary {
            continue;
        }
        let value = text[range.clone()].trim_end_matches(['.', ',', ';', ':']);
        if !value.chars().any(|c| c.is_alphabetic()) {
            continue;
        }
        let range = range.start..range.start + value.len();
        out.push(Found {
            start: range.start,
            entity_type: EntityType::FilePath,
            value: value.to_string(),
            normalized: value.to_lowercase(),
            confidence: 0.7,
        });
        mask(masked, range);
    }
}

fn extract_repo_packages(text: &str, masked: &mut String, out: &mut Vec<Found>) {
    let ranges: Vec<Range<usize>> = find_all(&patterns::RE_ORG_REPO, masked)
        .map(|m| m.range())
        .collect();
    for range in ranges {
        if prev_char(text, range.start).is_some_and(|c| c.is_alphanumeric() || "/.@".contains(c))
            || next_char(text, range.end).is_some_and(|c| c == '/')
        {
            continue;
        }
        let value = &text[range.clone()];
        let lower = value.to_lowercase();
        if SLASH_PHRASES.contains(&lower.as_str()) {
            continue;
        }
        let Some((org, repo)) = value.split_once('/') else {
            continue;
        };
        let segment_ok = |s: &str| s.len() >= 2 && s.chars().any(|c| c.is_ascii_lowercase());
        if !segment_ok(org) || !segment_ok(repo) {
            continue;
        }
        if repo
            .rsplit_once('.')
            .is_some_and(|(_, ext)| patterns::is_known_extension(ext))
        {
            continue;
        }
        out.push(Found {
            start: range.start,
            entity_type: EntityType::PackageName,
            value: value.to_string(),
            normalized: lower,
            confidence: 0.7,
        });
        mask(masked, range);
    }
}

fn extract_commands(text: &str, masked: &mut String, out: &mut Vec<Found>) {
    let hits: Vec<(Range<usize>, String, String)> = captures_all(&patterns::RE_COMMAND, masked)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let tool = caps.get(1)?.as_str().to_lowercase();
            let verb = caps.get(2)?.as_str().to_lowercase();
            Some((whole.range(), tool, verb))
        })
        .collect();
    for (range, tool, verb) in hits {
        if !COMMAND_VERBS.contains(&verb.as_str()) {
            continue;
        }
        out.push(Found {
            start: range.start,
            entity_type: EntityType::Command,
            value: text[range.clone()].to_string(),
            normalized: format!("{tool} {verb}"),
            confidence: 0.85,
        });
        mask(masked, range);
    }
}

fn extract_error_codes(text: &str, masked: &mut String, out: &mut Vec<Found>) {
    let passes: [(&'static LazyLock<Option<regex::Regex>>, f64); 4] = [
        (&patterns::RE_ERR_PREFIXED, 0.9),
        (&patterns::RE_ERROR_TYPE, 0.9),
        (&patterns::RE_POSIX_CODE, 0.85),
        (&patterns::RE_ALNUM_CODE, 0.8),
    ];
    for (index, (regex, confidence)) in passes.into_iter().enumerate() {
        let ranges: Vec<Range<usize>> = find_all(regex, masked).map(|m| m.range()).collect();
        for range in ranges {
            let value = &text[range.clone()];
            // posix names come from a fixed list
            if index == 2 && !POSIX_ERROR_CODES.contains(&value) {
                continue;
            }
            out.push(Found {
                start: range.start,
                entity_type: EntityType::ErrorCode,
                value: value.to_string(),
                normalized: value.to_string(),
                confidence,
            });
            mask(masked, range);
        }
    }
}

fn extract_identifiers(text: &str, masked: &mut String, out: &mut Vec<Found>) {
    let calls: Vec<Range<usize>> = captures_all(&patterns::RE_CALL_SYNTAX, masked)
        .filter_map(|caps| caps.get(1).map(|m| m.range()))
        .collect();
    push_identifiers(text, masked, out, calls, 0.85);

    let shapes: [(&'static LazyLock<Option<regex::Regex>>, f64); 3] = [
        (&patterns::RE_CAMEL_CASE, 0.75),
        (&patterns::RE_PASCAL_CASE, 0.75),
        (&patterns::RE_SNAKE_CASE, 0.7),
    ];
    for (regex, confidence) in shapes {
        let ranges: Vec<Range<usize>> = find_all(regex, masked).map(|m| m.range()).collect();
        push_identifiers(text, masked, out, ranges, confidence);
    }
}

fn push_identifiers(
    text: &str,
    masked: &mut String,
    out: &mut Vec<Found>,
    ranges: Vec<Range<usize>>,
    confidence: f64,
) {
    for range in ranges {
        let value = &text[range.clone()];
        if !is_identifier_candidate(value) {
            continue;
        }
        out.push(Found {
            start: range.start,
            entity_type: EntityType::FunctionName,
            value: value.to_string(),
            normalized: value.to_string(),
            confidence,
        });
        mask(masked, range);
    }
}

/// At least three characters, some lowercase, not a stop word, and not an
/// exception type name.
fn is_identifier_candidate(name: &str) -> bool {
    name.chars().count() >= 3
        && name.chars().any(|c| c.is_ascii_lowercase())
        && !is_stop_word(name)
        && !name.ends_with("Error")
        && !name.ends_with("Exception")
}

// ── Helpers ────────────────────────────────────────────────────────────────

/// Blank a byte range with spaces of the same length.
fn mask(masked: &mut String, range: Range<usize>) {
    let blank = " ".repeat(range.len());
    masked.replace_range(range, &blank);
}

fn prev_char(text: &str, at: usize) -> Option<char> {
    text[..at].chars().next_back()
}

fn next_char(text: &str, at: usize) -> Option<char> {
    text[at..].chars().next()
}
