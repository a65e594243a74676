/// Words that look like identifiers in call syntax (`if()`, `the()`) but
/// never name anything worth looking up.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "async", "await", "be", "break", "but", "by", "case",
    "catch", "class", "const", "continue", "def", "do", "else", "enum", "false", "fn", "for",
    "from", "func", "function", "if", "impl", "import", "in", "is", "it", "let", "match",
    "mut", "new", "nil", "none", "not", "null", "of", "on", "or", "print", "println", "pub",
    "return", "self", "static", "struct", "super", "switch", "the", "then", "this", "throw",
    "to", "true", "try", "type", "undefined", "use", "var", "void", "when", "where", "while",
    "with", "yield",
];

pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_ascii_lowercase();
    STOP_WORDS.binary_search(&lower.as_str()).is_ok()
}
