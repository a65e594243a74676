//! Compiled regex tables, one static per pattern.
//!
//! Each pattern compiles lazily on first use. A pattern that fails to compile
//! becomes `None` and simply never matches.

use std::sync::LazyLock;

use regex::{Captures, Match, Regex};

macro_rules! entity_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── URL ────────────────────────────────────────────────────────────────────
entity_pattern!(RE_URL, r#"https?://[^\s<>"'`)\]}]+"#);

// ── Package names ──────────────────────────────────────────────────────────
entity_pattern!(
    RE_SCOPED_PACKAGE,
    r"@[A-Za-z0-9][A-Za-z0-9._\-]*/[A-Za-z0-9][A-Za-z0-9._\-]*"
);
entity_pattern!(
    RE_ORG_REPO,
    r"[A-Za-z0-9][A-Za-z0-9_.\-]*/[A-Za-z0-9][A-Za-z0-9_.\-]*"
);

// ── File paths ─────────────────────────────────────────────────────────────
// With an extension: `src/main.rs`, `./lib/a.test.ts`, `Cargo.toml`.
entity_pattern!(
    RE_FILE_WITH_EXT,
    r"(?:\.{1,2}/|~/|/)?(?:[A-Za-z0-9_.\-]+/)*[A-Za-z0-9_\-][A-Za-z0-9_.\-]*\.[A-Za-z0-9]{1,8}"
);
// Anchored, extensionless: `/etc/hosts`, `./scripts/build`, `~/bin/`.
entity_pattern!(
    RE_FILE_ANCHORED,
    r"(?:\.{1,2}/|~/|/)(?:[A-Za-z0-9_.\-]+/)*[A-Za-z0-9_.\-]+/?"
);

// ── Commands ───────────────────────────────────────────────────────────────
entity_pattern!(
    RE_COMMAND,
    r"(?i)\b(npm|npx|yarn|pnpm|bun|cargo|pip3?|poetry|uv|go|git|docker-compose|docker|kubectl|helm|make|brew|apt-get|apt|gem|bundle|composer|mvn|gradle|dotnet|terraform|rustup)\s+([a-z][a-z\-]*)\b"
);

// ── Error codes ────────────────────────────────────────────────────────────
entity_pattern!(RE_ERR_PREFIXED, r"\bERR_[A-Z0-9_]+\b");
entity_pattern!(RE_ERROR_TYPE, r"\b[A-Z][A-Za-z0-9]*(?:Error|Exception)\b");
entity_pattern!(RE_POSIX_CODE, r"\bE[A-Z0-9_]{2,}\b");
entity_pattern!(RE_ALNUM_CODE, r"\b[A-Z]{1,4}[0-9]{3,5}\b");

// ── Identifiers ────────────────────────────────────────────────────────────
entity_pattern!(RE_CALL_SYNTAX, r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(");
entity_pattern!(RE_CAMEL_CASE, r"\b[a-z][a-z0-9]*(?:[A-Z][a-z0-9]*)+\b");
entity_pattern!(RE_PASCAL_CASE, r"\b[A-Z][a-z0-9]+(?:[A-Z][a-z0-9]*)+\b");
entity_pattern!(RE_SNAKE_CASE, r"\b[a-z][a-z0-9]*(?:_[a-z0-9]+)+\b");

/// Iterate over the matches of a compiled pattern.
pub fn find_all<'t>(
    regex: &'static LazyLock<Option<Regex>>,
    text: &'t str,
) -> impl Iterator<Item = Match<'t>> + 't {
    regex.as_ref().into_iter().flat_map(move |re| re.find_iter(text))
}

/// Iterate over the capture groups of a compiled pattern.
pub fn captures_all<'t>(
    regex: &'static LazyLock<Option<Regex>>,
    text: &'t str,
) -> impl Iterator<Item = Captures<'t>> + 't {
    regex
        .as_ref()
        .into_iter()
        .flat_map(move |re| re.captures_iter(text))
}

/// File extensions recognized with high confidence.
pub const KNOWN_EXTENSIONS: &[&str] = &[
    "bash", "c", "cc", "cfg", "conf", "cpp", "cs", "css", "csv", "dart", "env", "ex", "exs",
    "go", "gradle", "h", "hpp", "html", "ini", "java", "js", "json", "jsx", "kt", "lock",
    "lua", "md", "mdx", "mjs", "php", "proto", "py", "rb", "rs", "scss", "sh", "sql", "svelte",
    "swift", "toml", "ts", "tsx", "txt", "vue", "xml", "yaml", "yml", "zsh",
];

/// Extensions of configuration files.
pub const CONFIG_EXTENSIONS: &[&str] = &[
    "cfg", "conf", "env", "ini", "json", "lock", "toml", "xml", "yaml", "yml",
];

/// Extensions of documentation files.
pub const DOC_EXTENSIONS: &[&str] = &["md", "mdx", "txt"];

/// POSIX / libuv error names accepted from [`RE_POSIX_CODE`].
pub const POSIX_ERROR_CODES: &[&str] = &[
    "E2BIG", "EACCES", "EADDRINUSE", "EADDRNOTAVAIL", "EAGAIN", "EAI_AGAIN", "EBADF", "EBUSY",
    "ECANCELED", "ECONNABORTED", "ECONNREFUSED", "ECONNRESET", "EDEADLK", "EEXIST", "EFAULT",
    "EFBIG", "EHOSTUNREACH", "EINTR", "EINVAL", "EIO", "EISDIR", "ELOOP", "EMFILE",
    "ENAMETOOLONG", "ENETDOWN", "ENETUNREACH", "ENFILE", "ENOBUFS", "ENODEV", "ENOENT",
    "ENOMEM", "ENOSPC", "ENOSYS", "ENOTCONN", "ENOTDIR", "ENOTEMPTY", "ENOTFOUND", "ENOTSUP",
    "EPERM", "EPIPE", "EPROTO", "ERANGE", "EROFS", "ESPIPE", "ESRCH", "ETIMEDOUT", "EXDEV",
];

/// Verbs that make `<tool> <verb>` a command.
pub const COMMAND_VERBS: &[&str] = &[
    "add", "apply", "branch", "build", "check", "checkout", "ci", "clippy", "clone", "commit",
    "compose", "create", "delete", "deploy", "describe", "destroy", "diff", "down", "exec",
    "fetch", "fmt", "get", "i", "init", "install", "log", "login", "logs", "merge", "new",
    "plan", "ps", "publish", "pull", "push", "rebase", "remove", "reset", "restore", "rm",
    "run", "start", "stash", "status", "switch", "tag", "test", "uninstall", "up", "update",
    "upgrade",
];

/// Slash-joined word pairs that are prose, not `org/repo`.
pub const SLASH_PHRASES: &[&str] = &[
    "and/or", "client/server", "either/or", "input/output", "on/off", "read/write",
    "true/false", "yes/no",
];

pub fn is_known_extension(ext: &str) -> bool {
    KNOWN_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}
