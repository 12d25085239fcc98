//! Output-extraction helpers shared by the per-language rule arms.

use once_cell::sync::Lazy;
use regex::Regex;

static COUT_STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"std::cout\s*<<(.*);").unwrap());

/// Collect the argument of every `<call>(...)` occurrence in `code`, rendered
/// the way the playground would print it.
///
/// `call` must capture the argument text in group 1 with a `[^)]+` body: the
/// match stops at the first closing parenthesis, so nested calls and
/// parentheses inside string arguments come out truncated. That limitation is
/// part of the observable behavior and is kept as-is.
pub(crate) fn extract_call_strings(code: &str, call: &Regex) -> Vec<String> {
    call.captures_iter(code)
        .filter_map(|caps| caps.get(1))
        .map(|arg| render_literal(arg.as_str()))
        .collect()
}

/// Trim, strip one layer of matching quotes, expand `\n` and `\t` escapes.
fn render_literal(raw: &str) -> String {
    let mut content = raw.trim();
    if content.len() >= 2
        && ((content.starts_with('"') && content.ends_with('"'))
            || (content.starts_with('\'') && content.ends_with('\'')))
    {
        content = &content[1..content.len() - 1];
    }
    content.replace("\\n", "\n").replace("\\t", "\t")
}

/// Collect the printed text of every `std::cout << ... ;` statement.
///
/// Each statement's insertion chain is split on `<<`: quoted string segments
/// contribute their unquoted content, a bare `std::endl` contributes a
/// newline, and anything else (identifiers, expressions) contributes nothing.
/// Unlike [`extract_call_strings`], escape sequences are left untouched.
pub(crate) fn extract_stream_output(code: &str) -> Vec<String> {
    COUT_STATEMENT
        .captures_iter(code)
        .filter_map(|caps| caps.get(1))
        .map(|chain| {
            chain
                .as_str()
                .split("<<")
                .map(str::trim)
                .map(|segment| {
                    if segment.len() >= 2 && segment.starts_with('"') && segment.ends_with('"') {
                        segment[1..segment.len() - 1].to_string()
                    } else if segment == "std::endl" {
                        "\n".to_string()
                    } else {
                        String::new()
                    }
                })
                .collect::<String>()
        })
        .collect()
}
