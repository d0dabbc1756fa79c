//! Tests for the line annotator and its value sub-cascade

use clp_domain::value_objects::SupportedLanguage;
use clp_providers::analysis::explain_line;
use clp_providers::analysis::lines::value::{describe_params, describe_value};
use clp_providers::analysis::lines::{describe_shape, generic_rules, rule_set};
use proptest::prelude::*;

use SupportedLanguage::{C, Cpp, Css, Html, Java, JavaScript, Python, React};

#[test]
fn test_every_language_has_a_rule_table() {
    for language in SupportedLanguage::ALL {
        let rules = rule_set(language).expect("rule table");
        assert!(!rules.is_empty(), "{language} rule table is empty");
    }
    assert!(!generic_rules().is_empty());
}

#[test]
fn test_c_for_loop_mentions_repetition() {
    let text = explain_line("for (int i=0;i<10;i++) { printf(\"%d\",i); }", C);
    assert!(text.contains("loop"), "{text}");
    assert!(text.contains("repeats"), "{text}");
    assert!(text.contains("`i<10`"), "{text}");
    assert!(text.contains("printf"), "{text}");
}

#[test]
fn test_python_inline_function_returns_formatted_string() {
    let text = explain_line("def greet(name): return f'Hello, {name}!'", Python);
    assert_eq!(
        text,
        "Defines a function named `greet` that takes one parameter, `name`, and immediately returns a formatted string that fills in other values."
    );
}

#[test]
fn test_python_cascade() {
    let cases = [
        ("return x", "Sends back the current value of `x`"),
        ("print(\"hi\")", "Prints the text \"hi\" to the console."),
        (
            "for i in range(5):",
            "from 0 up to (but not including) `5`",
        ),
        ("for name in names:", "each item in `names`"),
        ("while count < 3:", "as long as `count < 3` is true"),
        ("elif x == 2:", "another condition"),
        ("else:", "none of the previous conditions"),
        ("total += price", "Adds the current value of `price` to `total`"),
        ("x = 5", "Stores the number 5 in the variable `x`."),
        (
            "is_valid = True",
            "Stores the boolean value `True` in the variable `is_valid`.",
        ),
        ("items = [1, 2, 3]", "Stores a list of values in the variable `items`."),
        ("import math", "Imports the `math` module"),
        ("except ValueError as e:", "a `ValueError` error"),
        (
            "squares = [x * x for x in nums if x > 0]",
            "keeping only items where `x > 0`",
        ),
    ];
    for (line, expected) in cases {
        let text = explain_line(line, Python);
        assert!(text.contains(expected), "{line:?} -> {text}");
    }
}

#[test]
fn test_python_tuple_unpacking() {
    let text = explain_line("a, b = b, a", Python);
    assert!(text.starts_with("Unpacks"), "{text}");
    assert!(text.contains("`a`, `b`"), "{text}");
}

#[test]
fn test_method_call_uses_shared_rules() {
    assert_eq!(
        explain_line("items.append(4)", Python),
        "Calls the `append` method of `items` with `4`."
    );
}

#[test]
fn test_c_family_lines() {
    let cases = [
        ("#include <stdio.h>", C, "`printf`"),
        (
            "int *p = &x;",
            C,
            "Declares `p` as a pointer to `int` and points it at the memory address of `x`.",
        ),
        ("int main() {", C, "`main` function, where every C program"),
        ("return 0;", C, "Returns the number 0"),
        ("}", C, "Closes the current block"),
        ("i++;", C, "Increases `i` by one."),
        ("sum += i;", C, "Adds the current value of `i` to `sum`"),
        ("int add(int a, int b) {", C, "the parameters `a` and `b`"),
        ("free(buffer);", C, "Releases the heap memory"),
        (
            "System.out.println(\"Hello\");",
            Java,
            "Prints the text \"Hello\" to the console followed by a new line.",
        ),
        ("public class Main {", Java, "Declares the `Main` class"),
        (
            "public static void main(String[] args) {",
            Java,
            "entry point",
        ),
        ("} catch (IOException e) {", Java, "`IOException`"),
        (
            "std::cout << \"Hi\" << std::endl;",
            Cpp,
            "followed by a new line",
        ),
        ("using namespace std;", Cpp, "`std::` prefix"),
        ("int main() {", Cpp, "every C++ program"),
    ];
    for (line, language, expected) in cases {
        let text = explain_line(line, language);
        assert!(text.contains(expected), "{line:?} ({language}) -> {text}");
    }
}

#[test]
fn test_javascript_and_react_lines() {
    let cases = [
        ("const double = (n) => n * 2;", JavaScript, "`double` as an arrow function"),
        (
            "let count = 0;",
            JavaScript,
            "Declares the block-scoped variable `count` and sets it to the number 0.",
        ),
        (
            "console.log(`Hi ${name}`);",
            JavaScript,
            "Writes a formatted string that fills in other values to the console.",
        ),
        (
            "const evens = nums.filter((n) => n % 2 === 0);",
            JavaScript,
            "keeps only the elements of `nums`",
        ),
        ("for (const item of items) {", JavaScript, "each value in `items`"),
        ("if (x > 5) {", JavaScript, "Checks whether `x > 5` is true"),
        (
            "const [count, setCount] = useState(0);",
            React,
            "piece of state called `count`",
        ),
        (
            "<button onClick={handleClick}>Add</button>",
            React,
            "`handleClick` as the handler for the `click` event",
        ),
        ("export default App;", React, "default export"),
        ("return (", React, "Returns the JSX"),
    ];
    for (line, language, expected) in cases {
        let text = explain_line(line, language);
        assert!(text.contains(expected), "{line:?} ({language}) -> {text}");
    }
}

#[test]
fn test_markup_lines() {
    let cases = [
        ("<!DOCTYPE html>", Html, "HTML5"),
        ("<h1>Welcome</h1>", Html, "Displays the main heading reading \"Welcome\"."),
        ("</body>", Html, "Closes the `<body>` element."),
        (".card {", Css, "the class `card`"),
        ("display: flex;", Css, "Flexbox"),
        ("a:hover {", Css, "Styles `a` while the mouse is over it."),
        ("color: #333;", Css, "Sets the text color to `#333`."),
    ];
    for (line, language, expected) in cases {
        let text = explain_line(line, language);
        assert!(text.contains(expected), "{line:?} ({language}) -> {text}");
    }
}

#[test]
fn test_rule_order_puts_brace_rules_before_signatures() {
    let names = rule_set(C).expect("C rules").rule_names();
    let position = |name: &str| names.iter().position(|n| *n == name);
    assert!(position("brace-else-if") < position("decl-signature"));
    assert!(position("c-include") < position("brace-for"));
}

#[test]
fn test_react_rules_take_priority_over_javascript() {
    let names = rule_set(React).expect("React rules").rule_names();
    assert_eq!(names.first(), Some(&"react-import"));
    assert!(names.contains(&"js-import-from"));
}

#[test]
fn test_describe_value_cascade() {
    let cases = [
        ("f\"Hi {n}\"", Python, "a formatted string that fills in other values"),
        ("`Hi ${n}`", JavaScript, "a formatted string that fills in other values"),
        ("\"hello\"", Python, "the text \"hello\""),
        ("true", JavaScript, "the boolean value `true`"),
        ("None", Python, "an empty value (`None`)"),
        ("[1, 2]", Python, "a list of values"),
        ("[1, 2]", JavaScript, "an array of values"),
        ("{\"a\": 1}", Python, "a dictionary of key-value pairs"),
        ("{}", JavaScript, "an object with named properties"),
        ("a + b * 2", Python, "the result of the calculation `a + b * 2`"),
        ("x > 3", Python, "the true/false result of `x > 3`"),
        ("len(items)", Python, "the value returned by calling `len()`"),
        ("42", C, "the number 42"),
        ("-5", C, "the number -5"),
        ("count", C, "the current value of `count`"),
        ("&x", C, "the memory address of `x`"),
        ("new Dog()", Java, "a new `Dog` object"),
        ("input(\"Name? \")", Python, "text typed in by the user"),
        ("", Python, "no value"),
    ];
    for (raw, language, expected) in cases {
        assert_eq!(describe_value(raw, language), expected, "value {raw:?}");
    }
}

#[test]
fn test_describe_params() {
    assert_eq!(describe_params(""), "no parameters");
    assert_eq!(describe_params("void"), "no parameters");
    assert_eq!(describe_params("self, name"), "one parameter, `name`");
    assert_eq!(
        describe_params("int a, int b = 2"),
        "the parameters `a` and `b`"
    );
    assert_eq!(
        describe_params("{ title, body, footer }"),
        "the parameters `title`, `body` and `footer`"
    );
}

#[test]
fn test_shape_fallback() {
    assert!(describe_shape("").contains("blank"));
    assert!(describe_shape("// note").contains("comment"));
    assert!(describe_shape("x := 1").starts_with("Assignment"));
    assert!(describe_shape("go(home)").contains("function or method"));
    assert!(describe_shape("{").contains("block"));
    assert_eq!(describe_shape("???"), "Executes a programming instruction.");
}

#[test]
fn test_unrecognized_css_line_uses_fallback() {
    assert_eq!(
        explain_line("just some words", Css),
        "Executes a programming instruction."
    );
}

fn any_language() -> impl Strategy<Value = SupportedLanguage> {
    prop::sample::select(SupportedLanguage::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_explain_line_is_total(line in ".{0,80}", language in any_language()) {
        let text = explain_line(&line, language);
        prop_assert!(!text.trim().is_empty());
    }

    #[test]
    fn prop_explain_line_is_deterministic(line in "[ -~]{0,60}", language in any_language()) {
        prop_assert_eq!(explain_line(&line, language), explain_line(&line, language));
    }
}
