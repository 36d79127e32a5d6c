//! CSS generator.
//!
//! Renders resolved rules as `selector{prop:value;...}` blocks with no
//! whitespace, one block per selector, concatenated.

use crate::resolve::{resolve, ResolvedRule, ResolvedSheet};
use crate::EvalError;
use lesser_parser::ParseTree;

/// Resolve references in the tree and render it as CSS.
pub fn evaluate(tree: &ParseTree) -> Result<String, EvalError> {
    let sheet = resolve(tree)?;
    let css = render(&sheet);
    log::debug!("rendered {} rules into {} bytes", sheet.rules.len(), css.len());
    Ok(css)
}

/// Render an already-resolved sheet.
pub fn render(sheet: &ResolvedSheet) -> String {
    let mut out = String::new();
    for rule in &sheet.rules {
        render_rule(rule, &mut out);
    }
    out
}

fn render_rule(rule: &ResolvedRule, out: &mut String) {
    out.push_str(&rule.selector);
    out.push('{');
    for decl in &rule.declarations {
        out.push_str(&decl.property);
        out.push(':');
        out.push_str(&decl.value);
        out.push(';');
    }
    out.push('}');
}
