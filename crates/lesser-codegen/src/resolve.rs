//! Reference resolution.
//!
//! Each property value is resolved exactly once against the parse tree:
//!
//! - `@name` looks up the variable `@name`;
//! - `.sel` / `#sel` looks up the same property name inside that selector;
//! - anything else is used verbatim.
//!
//! A resolved value is never resolved again, so chains of references stop
//! after one step.

use crate::EvalError;
use lesser_parser::ParseTree;

/// A property with its final value.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// A selector with resolved declarations, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// All rules of a stylesheet after reference resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSheet {
    pub rules: Vec<ResolvedRule>,
}

/// Resolve every property of every rule in the tree.
pub fn resolve(tree: &ParseTree) -> Result<ResolvedSheet, EvalError> {
    let mut rules = Vec::with_capacity(tree.rules.len());

    for (selector, properties) in &tree.rules {
        let mut declarations = Vec::with_capacity(properties.len());
        for (property, raw) in properties {
            let value = resolve_value(tree, selector, property, raw)?;
            declarations.push(Declaration {
                property: property.clone(),
                value: value.to_string(),
            });
        }
        rules.push(ResolvedRule {
            selector: selector.clone(),
            declarations,
        });
    }

    Ok(ResolvedSheet { rules })
}

fn resolve_value<'t>(
    tree: &'t ParseTree,
    selector: &str,
    property: &str,
    raw: &'t str,
) -> Result<&'t str, EvalError> {
    if raw.starts_with(['.', '#']) {
        let target = reference_target(raw);
        let value = tree.property(target, property).ok_or_else(|| {
            EvalError::UnresolvedReference {
                reference: raw.to_string(),
                target: target.to_string(),
                selector: selector.to_string(),
                property: property.to_string(),
            }
        })?;
        log::trace!("{selector} {{ {property} }}: {raw} -> {value}");
        Ok(value)
    } else if raw.starts_with('@') {
        let value = tree
            .variable(raw)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: raw.to_string(),
                selector: selector.to_string(),
                property: property.to_string(),
            })?;
        log::trace!("{selector} {{ {property} }}: {raw} -> {value}");
        Ok(value)
    } else {
        Ok(raw)
    }
}

/// Selector named by a cross-reference: the marker plus everything up to the
/// next `.`, so `.card.color` names `.card` and `#main` names `#main`.
fn reference_target(raw: &str) -> &str {
    match raw[1..].find('.') {
        Some(idx) => &raw[..idx + 1],
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesser_parser::Parser;
    use pretty_assertions::assert_eq;

    fn resolve_source(source: &str) -> Result<ResolvedSheet, EvalError> {
        resolve(&Parser::parse_source(source).unwrap())
    }

    fn value_of(sheet: &ResolvedSheet, selector: &str, property: &str) -> String {
        sheet
            .rules
            .iter()
            .find(|r| r.selector == selector)
            .and_then(|r| r.declarations.iter().find(|d| d.property == property))
            .map(|d| d.value.clone())
            .unwrap_or_else(|| panic!("no {property} in {selector}"))
    }

    #[test]
    fn test_reference_target() {
        assert_eq!(reference_target(".a"), ".a");
        assert_eq!(reference_target("#main"), "#main");
        assert_eq!(reference_target(".card.color"), ".card");
        assert_eq!(reference_target("#main.x.y"), "#main");
    }

    #[test]
    fn test_plain_values_verbatim() {
        let sheet = resolve_source(".a{color:red;width:100%;}").unwrap();
        assert_eq!(
            sheet.rules[0].declarations,
            vec![
                Declaration {
                    property: "color".into(),
                    value: "red".into(),
                },
                Declaration {
                    property: "width".into(),
                    value: "100%".into(),
                },
            ]
        );
    }

    #[test]
    fn test_variable_reference() {
        let sheet = resolve_source("@x=red;\n.a{color:@x;}").unwrap();
        assert_eq!(value_of(&sheet, ".a", "color"), "red");
    }

    #[test]
    fn test_variable_declared_after_use() {
        let sheet = resolve_source(".a{color:@x;}\n@x=red;").unwrap();
        assert_eq!(value_of(&sheet, ".a", "color"), "red");
    }

    #[test]
    fn test_class_reference() {
        let sheet = resolve_source(".a{color:red;}\n.b{color:.a;}").unwrap();
        assert_eq!(value_of(&sheet, ".b", "color"), "red");
    }

    #[test]
    fn test_id_reference() {
        let sheet = resolve_source("#main{width:960px;}\n.wrap{width:#main;}").unwrap();
        assert_eq!(value_of(&sheet, ".wrap", "width"), "960px");
    }

    #[test]
    fn test_reference_with_suffix_uses_same_property() {
        let sheet = resolve_source(".a{color:red;margin:0;}\n.b{color:.a.margin;}").unwrap();
        assert_eq!(value_of(&sheet, ".b", "color"), "red");
    }

    #[test]
    fn test_reference_to_later_selector() {
        let sheet = resolve_source(".b{color:.a;}\n.a{color:red;}").unwrap();
        assert_eq!(value_of(&sheet, ".b", "color"), "red");
    }

    #[test]
    fn test_chains_are_not_followed() {
        let sheet = resolve_source("@x=red;\n.a{color:@x;}\n.b{color:.a;}\n.c{color:.b;}").unwrap();
        assert_eq!(value_of(&sheet, ".a", "color"), "red");
        assert_eq!(value_of(&sheet, ".b", "color"), "@x");
        assert_eq!(value_of(&sheet, ".c", "color"), ".a");
    }

    #[test]
    fn test_variable_holding_reference_not_followed() {
        let sheet = resolve_source("@y=@x;\n@x=red;\n.a{color:@y;}").unwrap();
        assert_eq!(value_of(&sheet, ".a", "color"), "@x");
    }

    #[test]
    fn test_undefined_variable() {
        let err = resolve_source(".a{color:@nope;}").unwrap_err();
        assert_eq!(
            err,
            EvalError::UndefinedVariable {
                name: "@nope".into(),
                selector: ".a".into(),
                property: "color".into(),
            }
        );
    }

    #[test]
    fn test_missing_selector() {
        let err = resolve_source(".b{color:.z;}").unwrap_err();
        assert_eq!(
            err,
            EvalError::UnresolvedReference {
                reference: ".z".into(),
                target: ".z".into(),
                selector: ".b".into(),
                property: "color".into(),
            }
        );
    }

    #[test]
    fn test_missing_property_in_target() {
        let err = resolve_source(".a{margin:0;}\n.b{color:.a;}").unwrap_err();
        assert!(matches!(err, EvalError::UnresolvedReference { .. }));
    }

    #[test]
    fn test_leading_dot_number_is_a_reference() {
        let err = resolve_source(".a{opacity:.5;}").unwrap_err();
        assert!(matches!(err, EvalError::UnresolvedReference { .. }));
    }
}
