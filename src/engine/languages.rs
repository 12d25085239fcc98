//! Ordered per-language rule arms.
//!
//! Each arm checks its error triggers top to bottom, then falls through to
//! output extraction. Trigger order is load-bearing: a snippet can satisfy
//! several triggers at once (C code with `printf` but no include, say), and
//! the first match decides the message.

use once_cell::sync::Lazy;
use regex::Regex;

use super::extract::{extract_call_strings, extract_stream_output};
use crate::core::types::{DiagnosticResult, Language};

static CONSOLE_LOG_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"console\.log\(([^)]+)\)").unwrap());
static PRINT_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"print\(([^)]+)\)").unwrap());
static PRINTLN_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"System\.out\.println\(([^)]+)\)").unwrap());
static PRINTF_CALL: Lazy<Regex> = Lazy::new(|| Regex::new(r"printf\(([^)]+)\)").unwrap());
static PYTHON_PRINT_STATEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\bprint\s[^("]"#).unwrap());

const NO_OUTPUT: &str = "Code executed with no output.";

const JAVA_UNCLOSED_LITERAL: &str = "HelloWorld.java:8: error: unclosed string literal\nSystem.out.println(\"This will cause an error);\n                  ^";

/// Dispatch to the arm for `language`.
///
/// `active` is the comment-stripped view used for pattern checks; `original`
/// is the untouched source, consulted only by the C/C++ include checks (the
/// `#include` line itself starts with `#` and vanishes from the active view).
pub(crate) fn apply_rules(original: &str, active: &str, language: Language) -> DiagnosticResult {
    match language {
        Language::JavaScript => javascript(active),
        Language::Python => python(active),
        Language::Java => java(active),
        Language::Html => html(active),
        Language::Css => css(active),
        Language::C => c(original, active),
        Language::Cpp => cpp(original, active),
        Language::R => r(active),
    }
}

fn javascript(active: &str) -> DiagnosticResult {
    if active.contains("consl.log") {
        return DiagnosticResult::error("TypeError: consl.log is not a function");
    }
    let logs = extract_call_strings(active, &CONSOLE_LOG_CALL);
    if logs.is_empty() {
        DiagnosticResult::success(NO_OUTPUT)
    } else {
        DiagnosticResult::success(logs.join("\n"))
    }
}

fn python(active: &str) -> DiagnosticResult {
    if PYTHON_PRINT_STATEMENT.is_match(active) {
        return DiagnosticResult::error(
            "SyntaxError: Missing parentheses in call to 'print'. Did you mean print(...)? ",
        );
    }
    let prints = extract_call_strings(active, &PRINT_CALL);
    if prints.is_empty() {
        DiagnosticResult::success(NO_OUTPUT)
    } else {
        DiagnosticResult::success(prints.join("\n"))
    }
}

fn java(active: &str) -> DiagnosticResult {
    if active.contains("System.out.println(\"This will cause an error);") {
        return DiagnosticResult::error(JAVA_UNCLOSED_LITERAL);
    }
    if !active.trim().is_empty() && !active.contains("class") {
        return DiagnosticResult::error(
            "Error: Invalid Java code structure. Missing class definition.",
        );
    }
    let prints = extract_call_strings(active, &PRINTLN_CALL);
    if prints.is_empty() {
        DiagnosticResult::success(NO_OUTPUT)
    } else {
        DiagnosticResult::success(prints.join("\n"))
    }
}

fn html(active: &str) -> DiagnosticResult {
    if active.contains("<h1>Hello without a closing tag") {
        return DiagnosticResult::error("Syntax Error: Missing closing tag for <h1>.");
    }
    DiagnosticResult::success("HTML is well-formed.")
}

fn css(active: &str) -> DiagnosticResult {
    if active.contains("font-size: 16px\n}") {
        return DiagnosticResult::error("Syntax Error: Missing semicolon after '16px'.");
    }
    DiagnosticResult::success("CSS syntax is valid.")
}

fn c(original: &str, active: &str) -> DiagnosticResult {
    if active.contains("print(\"This will cause an error\")") {
        return DiagnosticResult::error(
            "Compiler Error: 'print' is not a function. Did you mean 'printf'?",
        );
    }
    if active.contains("printf") && !original.contains("#include <stdio.h>") {
        return DiagnosticResult::error("Warning: Missing #include <stdio.h> for printf.");
    }
    let prints = extract_call_strings(active, &PRINTF_CALL);
    if prints.is_empty() {
        DiagnosticResult::success(NO_OUTPUT)
    } else {
        // printf output is concatenated, not newline-joined
        DiagnosticResult::success(prints.concat())
    }
}

fn cpp(original: &str, active: &str) -> DiagnosticResult {
    if active.contains("cout << \"This will cause an error\"") {
        return DiagnosticResult::error(
            "Compiler Error: 'cout' was not declared in this scope. Did you forget 'std::'?",
        );
    }
    if active.contains("std::cout") && !original.contains("#include <iostream>") {
        return DiagnosticResult::error("Warning: Missing #include <iostream> for std::cout.");
    }
    let prints = extract_stream_output(active);
    if prints.is_empty() {
        DiagnosticResult::success(NO_OUTPUT)
    } else {
        DiagnosticResult::success(prints.concat())
    }
}

fn r(active: &str) -> DiagnosticResult {
    if active.contains("prin(\"This will cause an error\")") {
        return DiagnosticResult::error("Error in prin(...): could not find function \"prin\"");
    }
    let prints = extract_call_strings(active, &PRINT_CALL);
    if prints.is_empty() {
        DiagnosticResult::success(NO_OUTPUT)
    } else {
        let rendered: Vec<String> = prints
            .iter()
            .map(|value| format!("[1] \"{value}\""))
            .collect();
        DiagnosticResult::success(rendered.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::types::{DiagnosticResult, Language};
    use crate::engine::evaluate;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("console.log(\"Hi\")", "Hi" ; "single log")]
    #[test_case("console.log(\"a\")\nconsole.log(\"b\")", "a\nb" ; "logs newline joined")]
    #[test_case("console.log('quoted')", "quoted" ; "single quotes stripped")]
    fn javascript_output(source: &str, expected: &str) {
        assert_eq!(
            evaluate(source, Language::JavaScript),
            DiagnosticResult::success(expected)
        );
    }

    #[test]
    fn javascript_typo_trips_type_error() {
        assert_eq!(
            evaluate("consl.log(\"x\")", Language::JavaScript),
            DiagnosticResult::error("TypeError: consl.log is not a function")
        );
    }

    #[test]
    fn python_print_statement_is_a_syntax_error() {
        let result = evaluate("print \"bad\"", Language::Python);
        assert!(result.is_error());
        assert!(result
            .message()
            .starts_with("SyntaxError: Missing parentheses"));
        // trailing space is part of the original message
        assert!(result.message().ends_with("print(...)? "));
    }

    #[test]
    fn python_print_call_passes() {
        assert_eq!(
            evaluate("print(\"ok\")", Language::Python),
            DiagnosticResult::success("ok")
        );
    }

    #[test]
    fn java_unclosed_literal_reports_line_and_caret() {
        let source = "class A {\nSystem.out.println(\"This will cause an error);\n}";
        let result = evaluate(source, Language::Java);
        assert!(result.is_error());
        assert!(result.message().contains("unclosed string literal"));
        assert!(result.message().ends_with("                  ^"));
    }

    #[test]
    fn java_without_class_is_rejected() {
        assert_eq!(
            evaluate("System.out.println(\"x\");", Language::Java),
            DiagnosticResult::error(
                "Error: Invalid Java code structure. Missing class definition."
            )
        );
    }

    #[test]
    fn java_class_with_println_prints() {
        let source = "class A { void m() { System.out.println(\"out\"); } }";
        assert_eq!(
            evaluate(source, Language::Java),
            DiagnosticResult::success("out")
        );
    }

    #[test]
    fn html_is_well_formed_without_trigger() {
        assert_eq!(
            evaluate("<p>fine</p>", Language::Html),
            DiagnosticResult::success("HTML is well-formed.")
        );
    }

    #[test]
    fn html_unclosed_heading_is_flagged() {
        assert_eq!(
            evaluate("<h1>Hello without a closing tag", Language::Html),
            DiagnosticResult::error("Syntax Error: Missing closing tag for <h1>.")
        );
    }

    #[test]
    fn css_missing_semicolon_before_brace() {
        assert_eq!(
            evaluate("p {\n    font-size: 16px\n}", Language::Css),
            DiagnosticResult::error("Syntax Error: Missing semicolon after '16px'.")
        );
    }

    #[test]
    fn css_with_semicolons_is_valid() {
        assert_eq!(
            evaluate("p { font-size: 16px; }", Language::Css),
            DiagnosticResult::success("CSS syntax is valid.")
        );
    }

    #[test]
    fn c_printf_with_include_prints_unescaped() {
        let source = "#include <stdio.h>\nint main() {\nprintf(\"Hi\\n\");\nreturn 0;\n}";
        assert_eq!(
            evaluate(source, Language::C),
            DiagnosticResult::success("Hi\n")
        );
    }

    #[test]
    fn c_printf_without_include_warns() {
        let source = "int main() {\nprintf(\"Hi\\n\");\nreturn 0;\n}";
        assert_eq!(
            evaluate(source, Language::C),
            DiagnosticResult::error("Warning: Missing #include <stdio.h> for printf.")
        );
    }

    #[test]
    fn include_check_is_a_substring_test_on_original_source() {
        // Deleting the directive trips the warning.
        let missing = "int main() {\nprintf(\"Hi\");\n}";
        assert!(evaluate(missing, Language::C).is_error());
        // A line-commented directive is stripped from the active view but
        // still satisfies the substring check on the original source.
        let commented = "// #include <stdio.h>\nint main() {\nprintf(\"Hi\");\n}";
        assert_eq!(
            evaluate(commented, Language::C),
            DiagnosticResult::success("Hi")
        );
    }

    #[test]
    fn c_print_typo_suggests_printf() {
        let source = "#include <stdio.h>\nint main() {\nprint(\"This will cause an error\");\n}";
        assert_eq!(
            evaluate(source, Language::C),
            DiagnosticResult::error(
                "Compiler Error: 'print' is not a function. Did you mean 'printf'?"
            )
        );
    }

    #[test]
    fn c_outputs_concatenate_without_separator() {
        let source = "#include <stdio.h>\nprintf(\"a\");\nprintf(\"b\");";
        assert_eq!(
            evaluate(source, Language::C),
            DiagnosticResult::success("ab")
        );
    }

    #[test]
    fn cpp_unqualified_cout_is_flagged_first() {
        // Also lacks the include, but the unqualified-cout trigger wins.
        let source = "int main() {\ncout << \"This will cause an error\";\n}";
        assert_eq!(
            evaluate(source, Language::Cpp),
            DiagnosticResult::error(
                "Compiler Error: 'cout' was not declared in this scope. Did you forget 'std::'?"
            )
        );
    }

    #[test]
    fn cpp_missing_include_warns() {
        let source = "int main() {\nstd::cout << \"Hi\";\n}";
        assert_eq!(
            evaluate(source, Language::Cpp),
            DiagnosticResult::error("Warning: Missing #include <iostream> for std::cout.")
        );
    }

    #[test]
    fn cpp_stream_chain_prints() {
        let source = "#include <iostream>\nint main() {\nstd::cout << \"Hi\" << std::endl;\n}";
        assert_eq!(
            evaluate(source, Language::Cpp),
            DiagnosticResult::success("Hi\n")
        );
    }

    #[test]
    fn r_outputs_are_wrapped_in_index_markers() {
        assert_eq!(
            evaluate("print(\"one\")\nprint(\"two\")", Language::R),
            DiagnosticResult::success("[1] \"one\"\n[1] \"two\"")
        );
    }

    #[test]
    fn r_prin_typo_is_flagged() {
        assert_eq!(
            evaluate("prin(\"This will cause an error\")", Language::R),
            DiagnosticResult::error("Error in prin(...): could not find function \"prin\"")
        );
    }

    #[test]
    fn no_recognized_output_reports_silence() {
        for language in [
            Language::JavaScript,
            Language::Python,
            Language::Java,
            Language::C,
            Language::Cpp,
            Language::R,
        ] {
            let source = match language {
                Language::Java => "class A { int x = 1; }",
                _ => "x = 1",
            };
            assert_eq!(
                evaluate(source, language),
                DiagnosticResult::success("Code executed with no output."),
                "language {language}"
            );
        }
    }
}
