//! Placeholder substitution
//!
//! A single left-to-right pass over the body. Values are copied in as-is and
//! never scanned again, so a project name containing `{{...}}` is harmless.
//! Anything shaped like a placeholder that is not one of the three known
//! tokens is an error: a generated file with a stray `{{Foo}}` would only
//! fail much later, when the generated project is built.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ProjectConfig;
use crate::error::TemplateError;
use crate::templates::Placeholder;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").expect("placeholder pattern is valid")
});

/// Render `body` for `config`. `template` names the body in errors.
pub fn render(template: &str, body: &str, config: &ProjectConfig) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(body.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(body) {
        let whole = caps.get(0).expect("group 0 always matches");
        let literal = &body[last..whole.start()];
        check_literal(template, literal)?;
        rendered.push_str(literal);

        let token = &caps[1];
        let placeholder =
            Placeholder::from_token(token).ok_or_else(|| TemplateError::UnknownPlaceholder {
                template: template.to_string(),
                token: token.to_string(),
            })?;
        rendered.push_str(placeholder.value(config));

        last = whole.end();
    }

    let tail = &body[last..];
    check_literal(template, tail)?;
    rendered.push_str(tail);

    Ok(rendered)
}

/// Text between placeholders must not open one that never closes
fn check_literal(template: &str, literal: &str) -> Result<(), TemplateError> {
    if let Some(pos) = literal.find("{{") {
        let snippet: String = literal[pos..].chars().take(24).collect();
        return Err(TemplateError::ParseFailed {
            template: template.to_string(),
            reason: format!("unterminated placeholder near '{}'", snippet),
        });
    }
    Ok(())
}

/// Find all placeholder tokens used in a body, sorted and deduplicated
pub fn placeholders_in(body: &str) -> Vec<String> {
    let mut tokens: Vec<String> = PLACEHOLDER
        .captures_iter(body)
        .map(|cap| cap[1].to_string())
        .collect();

    tokens.sort();
    tokens.dedup();
    tokens
}
