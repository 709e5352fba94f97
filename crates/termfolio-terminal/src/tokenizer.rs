//! Tokenizer: double-quoted runs, single-quoted runs, and bare words.
//!
//! At every token start the scanner tries, in order, a complete `"..."` run,
//! a complete `'...'` run, and finally a maximal run of non-whitespace.
//! Quotes are stripped and there is no escape processing. A quote without a
//! closing partner never matches as a quoted run, so it simply becomes part
//! of a bare word. Quotes inside a bare word are literal.

/// Split a command line into tokens. Never fails.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        let (token, consumed) = quoted(rest, '"')
            .or_else(|| quoted(rest, '\''))
            .unwrap_or_else(|| bare(rest));
        tokens.push(token.to_string());
        rest = rest[consumed..].trim_start();
    }

    tokens
}

/// A complete quoted run at the start of `s`: (inner text, bytes consumed).
fn quoted(s: &str, quote: char) -> Option<(&str, usize)> {
    let body = s.strip_prefix(quote)?;
    let end = body.find(quote)?;
    let q = quote.len_utf8();
    Some((&body[..end], q + end + q))
}

/// The maximal non-whitespace run at the start of `s`.
fn bare(s: &str) -> (&str, usize) {
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    (&s[..end], end)
}
