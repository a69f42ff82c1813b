//! Recover `url()` references from CSS text.
//!
//! A small subset of [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization):
//! comments and strings are skipped so that `url(` inside them is not
//! mistaken for a function, and both quoted and unquoted URL arguments are
//! unescaped the way the tokenizer would.

/// Scanner state over the input code points.
struct UrlScanner {
    input: Vec<char>,
    position: usize,
}

impl UrlScanner {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn run(&mut self) -> Vec<String> {
        let mut urls = Vec::new();
        while let Some(c) = self.consume() {
            match c {
                '/' if self.peek() == Some('*') => self.consume_comment(),
                '"' | '\'' => {
                    let _ = self.consume_string(c);
                }
                '\\' => {
                    let _ = self.consume_escaped_code_point();
                }
                c if is_ident_code_point(c) => {
                    self.reconsume();
                    let ident = self.consume_ident_sequence();
                    if ident.eq_ignore_ascii_case("url") && self.peek() == Some('(') {
                        let _ = self.consume();
                        if let Some(url) = self.consume_url_argument() {
                            urls.push(url);
                        }
                    }
                }
                _ => {}
            }
        }
        urls
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    fn consume_comment(&mut self) {
        let _ = self.consume();
        while let Some(c) = self.consume() {
            if c == '*' && self.peek() == Some('/') {
                let _ = self.consume();
                return;
            }
        }
    }

    /// Loose ident consumption: enough to recognise `url` and skip other names.
    fn consume_ident_sequence(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if !is_ident_code_point(c) {
                break;
            }
            ident.push(c);
            self.position += 1;
        }
        ident
    }

    /// [§ 4.3.6 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    ///
    /// "While the next two input code points are whitespace, consume the next
    /// input code point. If the next one or two input code points are U+0022
    /// QUOTATION MARK ("), U+0027 APOSTROPHE ('), ... then create a
    /// <function-token>... Otherwise, consume a url token."
    fn consume_url_argument(&mut self) -> Option<String> {
        self.consume_whitespace();
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                let _ = self.consume();
                let value = self.consume_string(quote)?;
                self.consume_whitespace();
                (self.consume() == Some(')')).then_some(value)
            }
            _ => self.consume_url_token(),
        }
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// Returns `None` for a `<bad-string-token>`.
    fn consume_string(&mut self, ending_code_point: char) -> Option<String> {
        let mut value = String::new();
        loop {
            match self.consume() {
                // "ending code point" / "EOF": return the <string-token>.
                Some(c) if c == ending_code_point => return Some(value),
                None => return Some(value),
                // "newline": "This is a parse error. Reconsume the current
                // input code point, create a <bad-string-token>, and return it."
                Some('\n') => {
                    self.reconsume();
                    return None;
                }
                Some('\\') => match self.peek() {
                    None => {}
                    Some('\n') => {
                        let _ = self.consume();
                    }
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.6 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    ///
    /// Returns `None` for a `<bad-url-token>`.
    fn consume_url_token(&mut self) -> Option<String> {
        let mut value = String::new();
        loop {
            match self.consume() {
                Some(')') | None => return Some(value),
                Some(c) if is_whitespace(c) => {
                    self.consume_whitespace();
                    return match self.consume() {
                        Some(')') | None => Some(value),
                        _ => None,
                    };
                }
                Some('"' | '\'' | '(') => return None,
                Some('\\') => value.push(self.consume_escaped_code_point()),
                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    fn consume_escaped_code_point(&mut self) -> char {
        match self.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut hex = c.to_string();
                // "Consume as many hex digits as possible, but no more than 5."
                while hex.len() < 6 {
                    match self.peek() {
                        Some(d) if d.is_ascii_hexdigit() => {
                            hex.push(d);
                            self.position += 1;
                        }
                        _ => break,
                    }
                }
                // "If the next input code point is whitespace, consume it."
                if self.peek().is_some_and(is_whitespace) {
                    self.position += 1;
                }
                // "If this number is zero, or is for a surrogate, or is greater
                // than the maximum allowed code point, return U+FFFD."
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|&cp| cp != 0)
                    .and_then(char::from_u32)
                    .unwrap_or('\u{FFFD}')
            }
            // "EOF": "This is a parse error. Return U+FFFD REPLACEMENT CHARACTER."
            None => '\u{FFFD}',
            Some(c) => c,
        }
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.position += 1;
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += 1;
        Some(c)
    }

    fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }
}

/// [§ 4.2 Definitions - whitespace](https://www.w3.org/TR/css-syntax-3/#whitespace)
const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

/// [§ 4.2 ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
fn is_ident_code_point(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// Every `url()` argument in `css`, unescaped, in source order.
///
/// Bad strings and bad URLs are dropped, as a parser would drop the
/// declaration containing them.
#[must_use]
pub fn extract_urls(css: &str) -> Vec<String> {
    UrlScanner::new(css).run()
}
