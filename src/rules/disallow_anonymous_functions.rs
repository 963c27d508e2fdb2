//! Requires that function expressions and declarations be named.
//!
//! Option: `"disallowAnonymousFunctions"`
//!
//! Accepts `true` (strict: every function must carry a name) or an object
//! `{ "strict": <bool> }`. With `strict` off, an anonymous function is
//! permitted when its binding names it: a variable initializer, an
//! assignment target, or an object property value.
//!
//! ```js
//! // strict: flagged
//! var a = function() {};
//!
//! // non-strict: permitted (named by the binding)
//! var a = function() {};
//!
//! // non-strict: still flagged (call argument has no binding name)
//! $('#foo').click(function() {});
//! ```

use serde_json::Value;

use crate::check::Errors;
use crate::config::ConfigError;
use crate::parser::{NodeKind, ParsedFile};
use crate::rules::Rule;

const OPTION_NAME: &str = "disallowAnonymousFunctions";
const MESSAGE: &str = "Anonymous functions need to be named";

const FUNCTION_KINDS: &[NodeKind] = &[
    NodeKind::FunctionExpression,
    NodeKind::FunctionDeclaration,
];

/// Parent contexts where an anonymous function is named by its binding.
const NAMED_BY_CONTEXT: &[NodeKind] = &[
    NodeKind::VariableDeclarator,
    NodeKind::AssignmentExpression,
    NodeKind::Property,
];

pub struct DisallowAnonymousFunctions {
    strict: bool,
}

impl DisallowAnonymousFunctions {
    pub fn new() -> Self {
        Self { strict: true }
    }
}

impl Default for DisallowAnonymousFunctions {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new, unconfigured rule instance.
pub fn new_rule() -> Box<dyn Rule> {
    Box::new(DisallowAnonymousFunctions::new())
}

/// Register this rule in the global registry.
pub fn register() {
    crate::rules::register(new_rule);
}

impl Rule for DisallowAnonymousFunctions {
    fn option_name(&self) -> &'static str {
        OPTION_NAME
    }

    fn configure(&mut self, value: &Value) -> Result<(), ConfigError> {
        match value {
            Value::Bool(true) => {
                self.strict = true;
                Ok(())
            }
            Value::Object(fields) => match fields.get("strict") {
                Some(Value::Bool(strict)) => {
                    self.strict = *strict;
                    Ok(())
                }
                _ => Err(ConfigError::BadOptionValue {
                    option: OPTION_NAME,
                    expected: "option object requires \"strict\" to be boolean or be set to `true`",
                }),
            },
            _ => Err(ConfigError::BadOptionValue {
                option: OPTION_NAME,
                expected: "option requires either a true value or an object",
            }),
        }
    }

    fn check(&self, file: &ParsedFile, errors: &mut Errors) {
        file.iterate_nodes_by_kind(FUNCTION_KINDS, |node| {
            if node.name().is_some() {
                return;
            }

            // In strict mode the name is required regardless of context.
            if self.strict {
                errors.add(MESSAGE, node.location());
                return;
            }

            let named_by_parent = node
                .parent_kind()
                .is_some_and(|parent| NAMED_BY_CONTEXT.contains(&parent));
            if !named_by_parent {
                errors.add(MESSAGE, node.location());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Violation;
    use serde_json::json;
    use std::path::Path;

    fn configured(value: Value) -> DisallowAnonymousFunctions {
        let mut rule = DisallowAnonymousFunctions::new();
        rule.configure(&value).unwrap();
        rule
    }

    fn check_source(rule: &DisallowAnonymousFunctions, source: &str) -> Vec<Violation> {
        let parsed = crate::parser::parse(Path::new("test.js"), source.as_bytes()).unwrap();
        let mut errors = Errors::new(rule.option_name(), &parsed.path);
        rule.check(&parsed, &mut errors);
        errors.into_violations()
    }

    #[test]
    fn test_configure_true() {
        let rule = configured(json!(true));
        assert!(rule.strict);
    }

    #[test]
    fn test_configure_strict_false() {
        let rule = configured(json!({ "strict": false }));
        assert!(!rule.strict);
    }

    #[test]
    fn test_configure_strict_true() {
        let rule = configured(json!({ "strict": true }));
        assert!(rule.strict);
    }

    #[test]
    fn test_configure_rejects_false() {
        let mut rule = DisallowAnonymousFunctions::new();
        let err = rule.configure(&json!(false)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "disallowAnonymousFunctions option requires either a true value or an object"
        );
    }

    #[test]
    fn test_configure_rejects_null_and_string() {
        let mut rule = DisallowAnonymousFunctions::new();
        assert!(rule.configure(&json!(null)).is_err());
        assert!(rule.configure(&json!("yes")).is_err());
    }

    #[test]
    fn test_configure_rejects_empty_object() {
        let mut rule = DisallowAnonymousFunctions::new();
        let err = rule.configure(&json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "disallowAnonymousFunctions option object requires \"strict\" to be boolean or be set to `true`"
        );
    }

    #[test]
    fn test_configure_rejects_non_boolean_strict() {
        let mut rule = DisallowAnonymousFunctions::new();
        assert!(rule.configure(&json!({ "strict": "yes" })).is_err());
        assert!(rule.configure(&json!({ "strict": 1 })).is_err());
    }

    #[test]
    fn test_strict_flags_variable_initializer() {
        let rule = configured(json!(true));
        let violations = check_source(&rule, "var a = function() {};\n");

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Anonymous functions need to be named");
        assert_eq!(violations[0].line, 1);
        assert_eq!(violations[0].column, 9);
    }

    #[test]
    fn test_strict_flags_every_anonymous_function() {
        let rule = configured(json!(true));
        let source = "\
var a = function() {};
obj.f = function() {};
var o = { key: function() {} };
$('#foo').click(function() {});
";
        let violations = check_source(&rule, source);
        assert_eq!(violations.len(), 4);
        let lines: Vec<_> = violations.iter().map(|v| v.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_named_functions_pass_under_any_config() {
        let source = "\
function foo() {}
var a = function bar() {};
$('#foo').click(function handler() {});
";
        let strict = configured(json!(true));
        assert!(check_source(&strict, source).is_empty());

        let lenient = configured(json!({ "strict": false }));
        assert!(check_source(&lenient, source).is_empty());
    }

    #[test]
    fn test_non_strict_permits_variable_initializer() {
        let rule = configured(json!({ "strict": false }));
        assert!(check_source(&rule, "var a = function() {};\n").is_empty());
    }

    #[test]
    fn test_non_strict_permits_assignment() {
        let rule = configured(json!({ "strict": false }));
        assert!(check_source(&rule, "a = function() {};\n").is_empty());
    }

    #[test]
    fn test_non_strict_permits_object_property() {
        let rule = configured(json!({ "strict": false }));
        assert!(check_source(&rule, "var o = { key: function() {} };\n").is_empty());
    }

    #[test]
    fn test_non_strict_flags_call_argument() {
        let rule = configured(json!({ "strict": false }));
        let violations = check_source(&rule, "$('#foo').click(function() {});\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].column, 17);
    }

    #[test]
    fn test_non_strict_flags_return_and_array_contexts() {
        let rule = configured(json!({ "strict": false }));
        let source = "\
function make() { return function() {}; }
var list = [function() {}];
";
        let violations = check_source(&rule, source);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_anonymous_generator_is_flagged() {
        let rule = configured(json!(true));
        let violations = check_source(&rule, "$('#foo').click(function*() {});\n");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_one_violation_does_not_stop_traversal() {
        let rule = configured(json!(true));
        let source = "\
$('#a').click(function() {});
function named() {}
$('#b').click(function() {});
";
        let violations = check_source(&rule, source);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].line, 1);
        assert_eq!(violations[1].line, 3);
    }

    #[test]
    fn test_reconfigure_overwrites() {
        let mut rule = configured(json!(true));
        rule.configure(&json!({ "strict": false })).unwrap();
        assert!(!rule.strict);
    }
}
