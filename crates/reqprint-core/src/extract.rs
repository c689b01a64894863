//! Header and cookie extraction.
//!
//! Pure filtering over the request's header mapping. Nothing in here
//! can fail: missing headers degrade to empty results.

use std::collections::BTreeMap;

use crate::types::{HeaderEntry, Request};

/// Parse the request's `cookie` header into name/value pairs.
///
/// Pairs are separated by `;` with surrounding whitespace trimmed;
/// entries without a `=` are skipped. A `None` allow-list passes every
/// pair through; an empty allow-list yields an empty mapping. Names
/// listed but missing from the header are simply absent.
pub fn extract_cookies(
    request: &Request,
    allow: Option<&[String]>,
) -> BTreeMap<String, String> {
    let mut cookies = BTreeMap::new();
    let Some(raw) = request.header("cookie") else {
        return cookies;
    };

    for pair in raw.split(';') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() || !name_allowed(allow, name) {
            continue;
        }
        cookies.insert(name.to_string(), value.trim().to_string());
    }
    cookies
}

/// Extract the request's headers, optionally filtered by allow-list,
/// with the `cookie` header folded into its parsed mapping.
///
/// With `headers_allow == None` the source mapping passes through
/// unchanged, names keeping their stored case. With an allow-list,
/// each listed name is matched case-insensitively against the source
/// and inserted under its lowercased form; an empty list drops every
/// header.
///
/// When `fold_cookies` is set and the source carries a `cookie`
/// header, the result's `cookie` entry is the mapping produced by
/// [`extract_cookies`] — inserted even when `"cookie"` is not in the
/// allow-list, and replacing the raw string when it is. A folded
/// mapping that comes up empty leaves no `cookie` key at all.
pub fn extract_headers(
    request: &Request,
    headers_allow: Option<&[String]>,
    cookies_allow: Option<&[String]>,
    fold_cookies: bool,
) -> BTreeMap<String, HeaderEntry> {
    let mut result = BTreeMap::new();
    let Some(source) = request.headers.as_ref() else {
        return result;
    };

    match headers_allow {
        None => {
            for (name, value) in source {
                result.insert(name.clone(), HeaderEntry::Text(value.clone()));
            }
        }
        Some(allow) => {
            for name in allow {
                let matched = source
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name));
                if let Some((_, value)) = matched {
                    result.insert(name.to_ascii_lowercase(), HeaderEntry::Text(value.clone()));
                }
            }
        }
    }

    if fold_cookies {
        let stored_name = source
            .keys()
            .find(|k| k.eq_ignore_ascii_case("cookie"))
            .cloned();
        if let Some(stored_name) = stored_name {
            // The raw string never coexists with the folded mapping,
            // under whichever name it passed through.
            result.remove(&stored_name);
            result.remove("cookie");

            let cookies = extract_cookies(request, cookies_allow);
            if !cookies.is_empty() {
                result.insert("cookie".to_string(), HeaderEntry::Cookies(cookies));
            }
        }
    }

    result
}

fn name_allowed(allow: Option<&[String]>, name: &str) -> bool {
    match allow {
        None => true,
        Some(list) => list.iter().any(|allowed| allowed == name),
    }
}
