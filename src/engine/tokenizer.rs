//! Rule string tokenizer
//!
//! Splits a raw rule into parentheses, `AND`/`OR` keywords and operand
//! tokens. Operand text may itself contain spaces (`age > 30` is one token);
//! boundaries exist only at parentheses and at standalone keywords.

/// Tokenize a rule string into trimmed, non-empty tokens
///
/// Quote-delimited text (single or double) is opaque: parentheses and
/// keywords inside quotes never act as token boundaries, so
/// `name = 'A AND B'` stays a single operand token.
///
/// Quote tracking is one shared flag for both quote styles; opening and
/// closing marks are not paired, so an apostrophe inside a double-quoted
/// literal toggles it.
pub fn tokenize(rule: &str) -> Vec<String> {
    let chars: Vec<char> = rule.chars().collect();
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut in_string = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\'' || c == '"' {
            in_string = !in_string;
            buf.push(c);
            i += 1;
            continue;
        }
        if !in_string {
            if c == '(' || c == ')' {
                flush(&mut tokens, &mut buf);
                tokens.push(c.to_string());
                i += 1;
                continue;
            }
            if let Some(keyword) = keyword_at(&chars, i) {
                flush(&mut tokens, &mut buf);
                tokens.push(keyword.to_string());
                i += keyword.len();
                continue;
            }
        }
        buf.push(c);
        i += 1;
    }
    flush(&mut tokens, &mut buf);

    log::trace!("Tokenized {:?} into {:?}", rule, tokens);
    tokens
}

fn flush(tokens: &mut Vec<String>, buf: &mut String) {
    let token = buf.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
    buf.clear();
}

/// Check whether a standalone `AND`/`OR` keyword starts at position `i`
///
/// Both neighbors must be non-identifier characters so that words like
/// `BRAND` or `ORDER` are never split.
fn keyword_at(chars: &[char], i: usize) -> Option<&'static str> {
    for keyword in ["AND", "OR"] {
        let len = keyword.len();
        if i + len > chars.len() {
            continue;
        }
        let matches = chars[i..i + len].iter().collect::<String>() == keyword;
        let left_ok = i == 0 || !is_identifier_char(chars[i - 1]);
        let right_ok = i + len == chars.len() || !is_identifier_char(chars[i + len]);
        if matches && left_ok && right_ok {
            return Some(keyword);
        }
    }
    None
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
