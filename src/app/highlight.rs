//! JSON syntax highlighting for the raw-data viewer.
//!
//! The pipeline is fixed: canonical serialization (serde_json pretty
//! printing, 2-space indent, key order preserved), markup escaping of
//! `&`/`<`/`>`, then a single regex pass that splits the escaped text into
//! classified tokens. A separate renderer turns the token stream into
//! HelpView markup, so the tokenizer stays testable without any widget.
//!
//! The tokenizer's only supported input is the canonical serializer's own
//! output; it is never fed arbitrary free text.

use std::sync::OnceLock;

use regex_lite::Regex;
use serde_json::Value;

/// Token classes recognized by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// A quoted string followed by a colon (an object key, colon included).
    Key,
    /// Any other quoted string.
    Str,
    Number,
    Boolean,
    Null,
    /// Everything between matches: braces, brackets, commas, whitespace.
    Plain,
}

/// One classified span of the escaped serialization. Concatenating the
/// `text` of every token reproduces the tokenizer input unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub class: TokenClass,
    pub text: String,
}

/// Colors used to mark up each token class. Resolved per theme in
/// `ui::theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPalette {
    pub key: &'static str,
    pub string: &'static str,
    pub number: &'static str,
    pub boolean: &'static str,
    pub null: &'static str,
}

impl TokenPalette {
    /// Marker color for a class, or `None` for plain text, which passes
    /// through unwrapped.
    fn color(&self, class: TokenClass) -> Option<&'static str> {
        match class {
            TokenClass::Key => Some(self.key),
            TokenClass::Str => Some(self.string),
            TokenClass::Number => Some(self.number),
            TokenClass::Boolean => Some(self.boolean),
            TokenClass::Null => Some(self.null),
            TokenClass::Plain => None,
        }
    }
}

/// Matches, in precedence order: quoted strings (backslash and `\uXXXX`
/// escapes) with an optional trailing colon, the literal words
/// `true`/`false`/`null`, and numeric literals.
fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#""(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?\d+(\.\d*)?([eE][+-]?\d+)?"#,
        )
        .expect("token regex is valid")
    })
}

/// Canonical textual form of a value: pretty-printed with 2-space indent,
/// object keys in insertion order, numbers as serde_json prints them.
pub fn canonical(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Escape `&`, `<` and `>` so no part of the data can read as markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverse of [`escape_markup`]. `&lt;`/`&gt;` must be replaced before
/// `&amp;`, otherwise an escaped `&lt;` in the data would unescape twice.
pub fn unescape_markup(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Split escaped text into classified tokens in a single pass. Gaps
/// between regex matches come through as [`TokenClass::Plain`] tokens.
pub fn tokenize(escaped: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for m in token_regex().find_iter(escaped) {
        if m.start() > last {
            tokens.push(Token {
                class: TokenClass::Plain,
                text: escaped[last..m.start()].to_string(),
            });
        }
        tokens.push(Token {
            class: classify(m.as_str()),
            text: m.as_str().to_string(),
        });
        last = m.end();
    }
    if last < escaped.len() {
        tokens.push(Token {
            class: TokenClass::Plain,
            text: escaped[last..].to_string(),
        });
    }
    tokens
}

/// Classify one regex match. Strings win over the word literals, which win
/// over numbers; a trailing colon turns a string into a key.
fn classify(text: &str) -> TokenClass {
    if text.starts_with('"') {
        if text.ends_with(':') {
            TokenClass::Key
        } else {
            TokenClass::Str
        }
    } else if text == "true" || text == "false" {
        TokenClass::Boolean
    } else if text == "null" {
        TokenClass::Null
    } else {
        TokenClass::Number
    }
}

/// Render a token stream as HelpView markup. Classified tokens are wrapped
/// in a `<font color>` marker; plain tokens pass through unmodified.
pub fn to_markup(tokens: &[Token], palette: &TokenPalette) -> String {
    let mut out = String::new();
    for token in tokens {
        match palette.color(token.class) {
            Some(color) => {
                out.push_str("<font color=\"");
                out.push_str(color);
                out.push_str("\">");
                out.push_str(&token.text);
                out.push_str("</font>");
            }
            None => out.push_str(&token.text),
        }
    }
    out
}

/// Highlight a structured value for display.
///
/// Recomputed on every call; the output never contains an unescaped `&`,
/// `<` or `>` outside the inserted markers, so it is safe to hand straight
/// to the rendering surface.
pub fn highlight(value: &Value, palette: &TokenPalette) -> String {
    let tokens = tokenize(&escape_markup(&canonical(value)));
    to_markup(&tokens, palette)
}

/// Strip style markers from rendered markup and unescape entities,
/// recovering the text a user sees. This is what the copy button puts on
/// the clipboard.
pub fn plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => rest = "",
        }
    }
    out.push_str(rest);
    unescape_markup(&out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PALETTE: TokenPalette = TokenPalette {
        key: "#0451a5",
        string: "#a31515",
        number: "#098658",
        boolean: "#0000ff",
        null: "#795e26",
    };

    fn classes(value: &Value) -> Vec<(TokenClass, String)> {
        tokenize(&escape_markup(&canonical(value)))
            .into_iter()
            .filter(|t| t.class != TokenClass::Plain)
            .map(|t| (t.class, t.text))
            .collect()
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_markup("plain"), "plain");
    }

    #[test]
    fn test_unescape_is_inverse_of_escape() {
        for input in ["a & <b>", "&lt;", "&amp;lt;", "x"] {
            assert_eq!(unescape_markup(&escape_markup(input)), input);
        }
    }

    #[test]
    fn test_tokenize_key_and_string_value() {
        let toks = classes(&json!({"22": "open", "80": "closed"}));
        assert_eq!(
            toks,
            vec![
                (TokenClass::Key, "\"22\":".to_string()),
                (TokenClass::Str, "\"open\"".to_string()),
                (TokenClass::Key, "\"80\":".to_string()),
                (TokenClass::Str, "\"closed\"".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_literals_and_numbers() {
        let toks = classes(&json!({"a": true, "b": false, "c": null, "d": -1.5, "e": 42}));
        let kinds: Vec<TokenClass> = toks.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            kinds,
            vec![
                TokenClass::Key,
                TokenClass::Boolean,
                TokenClass::Key,
                TokenClass::Boolean,
                TokenClass::Key,
                TokenClass::Null,
                TokenClass::Key,
                TokenClass::Number,
                TokenClass::Key,
                TokenClass::Number,
            ]
        );
        assert!(toks.iter().any(|(_, t)| t == "-1.5"));
        assert!(toks.iter().any(|(_, t)| t == "42"));
    }

    #[test]
    fn test_tokenize_exponent_number() {
        let toks = classes(&json!([1e30]));
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].0, TokenClass::Number);
        assert!(toks[0].1.contains('e') || toks[0].1.contains('E'));
    }

    #[test]
    fn test_string_containing_syntax_is_not_mistokenized() {
        // Braces, colons and word literals inside a quoted string stay one
        // string token.
        let toks = classes(&json!({"msg": "{true: null}, [1, 2]"}));
        assert_eq!(toks[0].0, TokenClass::Key);
        assert_eq!(toks[1], (TokenClass::Str, "\"{true: null}, [1, 2]\"".to_string()));
        assert_eq!(toks.len(), 2);
    }

    #[test]
    fn test_string_with_escapes() {
        let toks = classes(&json!({"path": "C:\\tmp\\x", "esc": "\u{1b}[0m"}));
        // serde_json renders the control char as a \u001b escape; both
        // strings must survive as single tokens.
        assert_eq!(toks.len(), 4);
        assert_eq!(toks[1].0, TokenClass::Str);
        assert_eq!(toks[3].0, TokenClass::Str);
        assert!(toks[3].1.contains("\\u001b"));
    }

    #[test]
    fn test_empty_containers() {
        assert!(classes(&json!({})).is_empty());
        assert!(classes(&json!([])).is_empty());
        assert_eq!(highlight(&json!({}), &PALETTE), "{}");
        assert_eq!(highlight(&json!([]), &PALETTE), "[]");
    }

    #[test]
    fn test_token_concatenation_reproduces_input() {
        let escaped = escape_markup(&canonical(&json!({
            "name": "a<b>&c",
            "nested": {"list": [1, true, null, "x"]},
        })));
        let joined: String = tokenize(&escaped).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, escaped);
    }

    #[test]
    fn test_markup_has_no_unescaped_angle_brackets_outside_markers() {
        let value = json!({
            "cmd": "cat <file> && echo 'done' > out",
            "html": "<script>alert(1)</script>",
            "n": [1, -2.5, 3e8],
        });
        let markup = highlight(&value, &PALETTE);
        // Remove the markers, then nothing markup-significant may remain.
        let mut stripped = markup.clone();
        while let Some(start) = stripped.find('<') {
            let end = stripped[start..].find('>').map(|e| start + e + 1).unwrap();
            let tag = stripped[start..end].to_string();
            assert!(
                tag.starts_with("<font ") || tag == "</font>",
                "unexpected tag in markup: {tag}"
            );
            stripped.replace_range(start..end, "");
        }
        assert!(!stripped.contains('<'));
        assert!(!stripped.contains('>'));
        for (i, _) in stripped.match_indices('&') {
            let rest = &stripped[i..];
            assert!(
                rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;"),
                "bare ampersand in markup"
            );
        }
    }

    #[test]
    fn test_plain_text_round_trips_canonical_form() {
        let values = [
            json!({"22": "open", "80": "closed"}),
            json!({"a & b": "<tag>", "nums": [0, -1, 2.5], "ok": true, "none": null}),
            json!([]),
            json!({"nested": {"deep": {"deeper": ["x", {"y": 1}]}}}),
        ];
        for value in values {
            let markup = highlight(&value, &PALETTE);
            assert_eq!(plain_text(&markup), canonical(&value));
        }
    }

    #[test]
    fn test_canonical_uses_two_space_indent_and_key_order() {
        let text = canonical(&json!({"zeta": 1, "alpha": 2}));
        assert_eq!(text, "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}");
    }
}
