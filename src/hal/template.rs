//! # URI Template Expansion
//!
//! A deliberately small RFC 6570 subset: the query form `{?a,b}` and simple
//! path placeholders `{name}`. List and associative expansion (`{?list*}`,
//! prefix modifiers) are outside the subset - templates carrying those
//! operators are left textually in place so callers can detect them, exactly
//! like a placeholder whose variable was never supplied. Expansion never
//! errors; an incompletely expanded href still contains `{`.

use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde_json::Value;

use super::types::Link;

/// Variables fed into an expansion. Null values read as "unset".
pub type TemplateVars = IndexMap<String, Value>;

static QUERY_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\?([^}]+)\}").expect("query form regex is valid"));
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").expect("placeholder regex is valid"));

/// URI-component encoding: everything outside the unreserved set and the
/// marks is percent-encoded, so a space becomes `%20` and `/` becomes `%2F`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Expands a templated link's href with `variables`.
///
/// A link whose `templated` field is not `true` is returned verbatim, even if
/// its href happens to contain template syntax. Otherwise two independent
/// passes run in order: the query form first, then path placeholders.
pub fn parse_template_link(link: &Link, variables: &TemplateVars) -> String {
    if !link.is_templated() {
        return link.href.clone();
    }
    expand_path(&expand_query(&link.href, variables), variables)
}

/// Stringifies a variable for substitution. Null reads as unset; booleans
/// become `true`/`false`. Compound values are outside the subset.
fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Expands the query form `{?a,b}`: kept pairs are `&`-joined and prefixed
/// with `?`, or `&` when the preceding part of the href already carries a
/// query string. Unset, null and empty-string variables are skipped; when
/// nothing survives the whole template is removed.
fn expand_query(href: &str, variables: &TemplateVars) -> String {
    let Some(captures) = QUERY_FORM.captures(href) else {
        return href.to_string();
    };
    let matched = captures.get(0).expect("capture 0 is the whole match");
    let names = captures.get(1).expect("query form has one capture group");

    let mut pairs = Vec::new();
    for name in names.as_str().split(',').map(str::trim) {
        if name.contains('*') || name.contains(':') {
            // Explode/prefix operators: not part of the subset, keep the
            // template intact rather than half-expand it.
            return href.to_string();
        }
        let Some(value) = variables.get(name).and_then(stringify) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        pairs.push(format!("{name}={}", encode(&value)));
    }

    let prefix = &href[..matched.start()];
    let expansion = if pairs.is_empty() {
        String::new()
    } else {
        let separator = if prefix.contains('?') { '&' } else { '?' };
        format!("{separator}{}", pairs.join("&"))
    };
    format!("{prefix}{expansion}{}", &href[matched.end()..])
}

/// Expands simple placeholders `{name}`: every occurrence of a placeholder is
/// replaced when its variable is set; unset placeholders stay in the href.
fn expand_path(href: &str, variables: &TemplateVars) -> String {
    let mut expanded = href.to_string();
    for matched in PLACEHOLDER.find_iter(href) {
        let token = matched.as_str();
        let name = token[1..token.len() - 1].trim();
        if name.starts_with('?') {
            continue;
        }
        let Some(value) = variables.get(name).and_then(stringify) else {
            continue;
        };
        expanded = expanded.replace(token, &encode(&value));
    }
    expanded
}
