//! Positional placeholder formatter for diagnostic messages.
//!
//! A template contains zero or more two-character placeholder tokens, spelled
//! either `{}` or `%s`. Both spellings may be mixed freely in one template.
//! [`render`] substitutes arguments into placeholders left to right, one
//! placeholder per argument, and never fails:
//!
//! - a blank or empty template is returned unchanged;
//! - surplus arguments (more arguments than placeholders) are dropped;
//! - surplus placeholders (more placeholders than arguments) stay as
//!   literal text;
//! - replacement text is never rescanned, so an argument whose own text
//!   looks like a placeholder cannot capture a later argument.
//!
//! There is no escaping syntax, no named placeholders, and no recursive
//! substitution.
//!
//! # Examples
//!
//! ```rust,ignore
//! use preflight::format::render;
//!
//! assert_eq!(render("{} and %s", &[&"A", &"B"]), "A and B");
//! assert_eq!(render("no slots", &[&1]), "no slots");
//! assert_eq!(render("{} left", &[]), "{} left");
//! ```

use std::fmt;

// ============================================================================
// SUBSTITUTION STATE
// ============================================================================

/// One in-flight substitution pass: the partially substituted string plus
/// the byte offset the next placeholder search resumes from.
///
/// The cursor only moves forward. After a replacement it points one byte past
/// the end of the inserted text, which is what guarantees sequential resume:
/// a later argument can never match inside text an earlier argument inserted,
/// nor inside any part of the template before it.
#[derive(Debug)]
struct Substitution {
    buf: String,
    cursor: usize,
}

impl Substitution {
    fn new(template: &str) -> Self {
        Self {
            buf: template.to_owned(),
            cursor: 0,
        }
    }

    /// Substitutes `text` into the next placeholder at or after the cursor.
    ///
    /// If no placeholder remains, the argument is dropped and both the
    /// string and the cursor are left untouched.
    fn apply(self, text: &str) -> Self {
        let Some(start) = next_token(&self.buf, self.cursor) else {
            return self;
        };

        // Both token bytes are ASCII, so `start` and `start + 2` are always
        // char boundaries even in templates containing multi-byte text.
        let mut buf = String::with_capacity(self.buf.len() - TOKEN_WIDTH + text.len());
        buf.push_str(&self.buf[..start]);
        buf.push_str(text);
        buf.push_str(&self.buf[start + TOKEN_WIDTH..]);

        Self {
            buf,
            // start + TOKEN_WIDTH + (new length - old length), folded.
            cursor: start + text.len(),
        }
    }

    fn into_string(self) -> String {
        self.buf
    }
}

/// Placeholder tokens are exactly two bytes wide.
const TOKEN_WIDTH: usize = 2;

/// Finds the start of the next placeholder token at or after `from`.
///
/// A single forward scan checking both spellings at every offset; a curly
/// open pairs only with a curly close and a percent only with a lowercase
/// `s`, so `{s` and `%}` are never tokens. A trailing lone start character
/// can never match because the scan stops one byte short of the end.
fn next_token(buf: &str, from: usize) -> Option<usize> {
    let bytes = buf.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'{', b'}') | (b'%', b's') => return Some(i),
            _ => i += 1,
        }
    }
    None
}

// ============================================================================
// PUBLIC ENTRY POINT
// ============================================================================

/// Renders a template by substituting arguments into `{}` / `%s`
/// placeholders, left to right.
///
/// Arguments are converted to text with their [`Display`](fmt::Display)
/// impl. The call never fails; see the module docs for the degradation
/// rules. A blank template (empty or all whitespace) is returned unchanged
/// without any substitution attempt.
///
/// For a fixed argument list the [`message!`](crate::message) macro is the
/// more convenient front end.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::format::render;
///
/// assert_eq!(render("{}{}", &[&1, &2]), "12");
/// assert_eq!(render("{}", &[&"{}"]), "{}"); // inserted text is not rescanned
/// ```
#[must_use]
pub fn render(template: &str, args: &[&dyn fmt::Display]) -> String {
    if template.trim().is_empty() {
        return template.to_owned();
    }

    let mut state = Substitution::new(template);
    for arg in args {
        state = state.apply(&arg.to_string());
    }
    state.into_string()
}

// ============================================================================
// NULL ADAPTER
// ============================================================================

/// Displays `Some(value)` as the value and `None` as the literal text
/// `null`, matching the formatter's contract for absent arguments.
///
/// # Examples
///
/// ```rust,ignore
/// use preflight::format::{render, OrNull};
///
/// let missing: Option<i32> = None;
/// assert_eq!(render("got {}", &[&OrNull(missing)]), "got null");
/// assert_eq!(render("got {}", &[&OrNull(Some(7))]), "got 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrNull<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn substitutes_curly_placeholders_in_order() {
        assert_eq!(render("{} is {}", &[&"a", &"b"]), "a is b");
    }

    #[test]
    fn substitutes_percent_placeholders_in_order() {
        assert_eq!(render("%s is %s", &[&"a", &"b"]), "a is b");
    }

    #[test]
    fn mixed_spellings_both_recognized() {
        assert_eq!(render("{} and %s", &[&"A", &"B"]), "A and B");
    }

    #[test]
    fn adjacent_placeholders() {
        assert_eq!(render("{}{}", &[&1, &2]), "12");
        assert_eq!(render("%s%s", &[&1, &2]), "12");
    }

    #[test]
    fn blank_template_is_passthrough() {
        assert_eq!(render("", &[&"x"]), "");
        assert_eq!(render("   ", &[&"x"]), "   ");
        assert_eq!(render("\t\n", &[&"x"]), "\t\n");
    }

    #[test]
    fn surplus_arguments_are_dropped() {
        assert_eq!(render("no placeholders here", &[&"x"]), "no placeholders here");
        assert_eq!(render("only {}", &[&1, &2, &3]), "only 1");
    }

    #[test]
    fn surplus_placeholders_stay_literal() {
        assert_eq!(render("{} and {}", &[&"A"]), "A and {}");
        assert_eq!(render("%s and %s", &[]), "%s and %s");
    }

    #[test]
    fn replacement_text_is_never_rescanned() {
        assert_eq!(render("{}", &[&"{}"]), "{}");
        assert_eq!(render("{}", &[&"%s"]), "%s");
        // The second argument must not land inside the first one's text.
        assert_eq!(render("{} tail", &[&"{}", &"B"]), "{} tail");
    }

    #[test]
    fn later_argument_resumes_after_inserted_text() {
        // A placeholder *after* the insertion point is still reachable.
        assert_eq!(render("{}x{}", &[&"{}", &"B"]), "{}xB");
    }

    #[test]
    fn trailing_start_character_is_literal() {
        assert_eq!(render("open {", &[&"x"]), "open {");
        assert_eq!(render("pct %", &[&"x"]), "pct %");
    }

    #[test]
    fn mismatched_pairs_are_not_tokens() {
        assert_eq!(render("{s and %}", &[&"x"]), "{s and %}");
    }

    #[test]
    fn doubled_start_character_shifts_token_start() {
        // The token starts at the second `{`, one byte past an odd offset.
        assert_eq!(render("{{}", &[&"x"]), "{x");
        assert_eq!(render("%%s", &[&"x"]), "%x");
    }

    #[test]
    fn replacement_longer_than_token() {
        assert_eq!(render("a{}z", &[&"longer text"]), "alonger textz");
    }

    #[test]
    fn replacement_shorter_than_token() {
        assert_eq!(render("a{}z{}", &[&"", &"!"]), "az!");
    }

    #[test]
    fn multibyte_text_around_tokens() {
        assert_eq!(render("héllo {} wörld", &[&42]), "héllo 42 wörld");
        assert_eq!(render("{}", &[&"héllo"]), "héllo");
    }

    #[test]
    fn zero_arguments_is_passthrough() {
        assert_eq!(render("keep {} as is", &[]), "keep {} as is");
    }

    #[test]
    fn or_null_renders_absence() {
        let missing: Option<i32> = None;
        assert_eq!(render("got {}", &[&OrNull(missing)]), "got null");
        assert_eq!(render("got {}", &[&OrNull(Some(7))]), "got 7");
    }

    #[test]
    fn message_macro_front_end() {
        assert_eq!(crate::message!("{} of %s", 1, 3), "1 of 3");
        assert_eq!(crate::message!("plain"), "plain");
    }

    #[rstest]
    #[case("{}", &["A"], "A")]
    #[case("%s", &["A"], "A")]
    #[case("a {} b %s c", &["1", "2"], "a 1 b 2 c")]
    #[case("%s{}", &["1", "2"], "12")]
    #[case("{}%s", &["1", "2"], "12")]
    #[case("{ }", &["x"], "{ }")]
    #[case("} {", &["x"], "} {")]
    fn render_cases(#[case] template: &str, #[case] args: &[&str], #[case] expected: &str) {
        let args: Vec<&dyn std::fmt::Display> =
            args.iter().map(|a| a as &dyn std::fmt::Display).collect();
        assert_eq!(render(template, &args), expected);
    }

    #[test]
    fn cursor_only_advances_forward() {
        // The first replacement introduces a `%s` *before* the cursor; the
        // second argument must skip it and hit the later placeholder.
        assert_eq!(render("{} mid {}", &[&"%s", &"B"]), "%s mid B");
    }
}
