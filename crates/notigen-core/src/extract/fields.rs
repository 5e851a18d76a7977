//! Promoted field declaration scanner.
//!
//! This is a declaration scanner, not a parser: the source is tokenized and
//! a field is recognized as the token sequence `visibility [?]Type $name`,
//! which covers PHP 8 constructor-promoted parameters as well as plain
//! typed property declarations. Whitespace between the tokens is free-form,
//! so multi-line constructor signatures are collected. Declarations with no
//! visibility qualifier, with a qualified (`\`-containing) type, or with
//! extra modifiers between visibility and type are intentionally not
//! collected.

use serde::Serialize;

/// A single field mined from an entity declaration.
///
/// Insertion order equals source declaration order and is preserved through
/// generation; setter order and notify-call order depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Declared type, possibly carrying a leading `?` nullable marker.
    pub declared_type: String,
    /// Richer `@param` type expression, when one was documented.
    pub documented_type: Option<String>,
}

/// Scans entity source text for field declarations.
pub struct FieldScanner;

impl FieldScanner {
    /// Return the ordered field set declared in `source`.
    ///
    /// An empty result is not an error here; the pipeline decides whether
    /// it is fatal. A redeclaration of an existing name keeps the first
    /// occurrence's position and takes the later declared type.
    pub fn scan(source: &str) -> Vec<FieldDescriptor> {
        let code = mask_non_code(source);
        let mut fields: Vec<FieldDescriptor> = Vec::new();

        let mut state = State::Idle;
        for token in tokenize(&code) {
            state = match state {
                State::Idle => {
                    if is_visibility(token) {
                        State::AfterVisibility
                    } else {
                        State::Idle
                    }
                }
                State::AfterVisibility => {
                    if is_visibility(token) {
                        State::AfterVisibility
                    } else if is_type_token(token) {
                        State::AfterType(token)
                    } else {
                        State::Idle
                    }
                }
                State::AfterType(declared_type) => {
                    if let Some(name) = token.strip_prefix('$') {
                        push_field(&mut fields, name, declared_type);
                        State::Idle
                    } else if is_visibility(token) {
                        State::AfterVisibility
                    } else {
                        State::Idle
                    }
                }
            };
        }

        fields
    }
}

enum State<'a> {
    Idle,
    AfterVisibility,
    AfterType(&'a str),
}

fn is_visibility(token: &str) -> bool {
    matches!(token, "public" | "protected" | "private")
}

/// A bare type word, optionally prefixed with the nullable marker.
fn is_type_token(token: &str) -> bool {
    let body = token.strip_prefix('?').unwrap_or(token);
    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn push_field(fields: &mut Vec<FieldDescriptor>, name: &str, declared_type: &str) {
    if let Some(existing) = fields.iter_mut().find(|f| f.name == name) {
        // Redeclaration: first position wins, later type wins.
        existing.declared_type = declared_type.to_string();
        return;
    }
    fields.push(FieldDescriptor {
        name: name.to_string(),
        declared_type: declared_type.to_string(),
        documented_type: None,
    });
}

/// Split masked source into identifier tokens. The `?` and `$` sigils fold
/// into the token they prefix; every other character is a separator. In
/// particular `\` separates, so qualified names never form one token.
fn tokenize(code: &str) -> Vec<&str> {
    let bytes = code.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i];
        if c == b'?' || c == b'$' {
            let start = i;
            i += 1;
            let mut end = i;
            while end < bytes.len() && is_ident_byte(bytes[end]) {
                end += 1;
            }
            if end > i {
                tokens.push(&code[start..end]);
            }
            i = end;
        } else if c.is_ascii_alphabetic() || c == b'_' {
            let start = i;
            let mut end = i + 1;
            while end < bytes.len() && is_ident_byte(bytes[end]) {
                end += 1;
            }
            tokens.push(&code[start..end]);
            i = end;
        } else {
            i += 1;
        }
    }
    tokens
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Blank out comments and string literals, preserving line structure.
///
/// Declarations quoted in doc blocks or string literals must not register
/// as fields. Doc-type extraction runs over the raw source instead, since
/// `@param` lines live inside doc comments. PHP `#` comments and heredocs
/// are not handled; `#` would swallow `#[Attribute]` syntax on promoted
/// parameters.
fn mask_non_code(source: &str) -> String {
    #[derive(Clone, Copy)]
    enum Mode {
        Code,
        LineComment,
        BlockComment,
        SingleQuote,
        DoubleQuote,
    }

    let mut out = String::with_capacity(source.len());
    let mut mode = Mode::Code;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match mode {
            Mode::Code => {
                if c == '/' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    mode = Mode::LineComment;
                } else if c == '/' && chars.peek() == Some(&'*') {
                    chars.next();
                    out.push_str("  ");
                    mode = Mode::BlockComment;
                } else if c == '\'' {
                    out.push(' ');
                    mode = Mode::SingleQuote;
                } else if c == '"' {
                    out.push(' ');
                    mode = Mode::DoubleQuote;
                } else {
                    out.push(c);
                }
            }
            Mode::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    mode = Mode::Code;
                } else {
                    out.push(' ');
                }
            }
            Mode::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    mode = Mode::Code;
                } else {
                    out.push(if c == '\n' { '\n' } else { ' ' });
                }
            }
            Mode::SingleQuote | Mode::DoubleQuote => {
                let closing = if matches!(mode, Mode::SingleQuote) { '\'' } else { '"' };
                if c == '\\' {
                    chars.next();
                    out.push_str("  ");
                } else if c == closing {
                    out.push(' ');
                    mode = Mode::Code;
                } else {
                    out.push(if c == '\n' { '\n' } else { ' ' });
                }
            }
        }
    }

    out
}
