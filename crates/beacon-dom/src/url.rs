//! Page URL with parsed path and query pairs.

use std::borrow::Cow;
use std::fmt;

/// An absolute page URL, parsed once at construction.
///
/// Parsing is total: anything that does not look like `scheme://host/...`
/// is treated as a bare path. Query pairs are `&`-separated and `=`-split,
/// `+` reads as space, and percent-escapes are decoded; an invalid escape
/// leaves the raw text in place rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrl {
    raw: String,
    path: String,
    query: Vec<(String, String)>,
}

impl PageUrl {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        // Fragments never reach the server and carry no parameters.
        let without_fragment = raw.split('#').next().unwrap_or(raw);

        let (before_query, query_string) = match without_fragment.split_once('?') {
            Some((b, q)) => (b, Some(q)),
            None => (without_fragment, None),
        };

        let path = Self::extract_path(before_query);
        let query = query_string.map(Self::parse_query).unwrap_or_default();

        Self {
            raw: raw.to_string(),
            path,
            query,
        }
    }

    fn extract_path(before_query: &str) -> String {
        let after_scheme = match before_query.find("://") {
            Some(idx) => &before_query[idx + 3..],
            None => return before_query.to_string(),
        };
        match after_scheme.find('/') {
            Some(idx) => after_scheme[idx..].to_string(),
            None => "/".to_string(),
        }
    }

    fn parse_query(query_string: &str) -> Vec<(String, String)> {
        query_string
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect()
    }

    /// The URL exactly as constructed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The URL path (always at least `/` for absolute URLs).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query pairs in document order, duplicates preserved.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// The first value for `key`, if present in the query string.
    #[must_use]
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Substring test on the path, matching `pathname.indexOf(..) !== -1`.
    #[must_use]
    pub fn path_contains(&self, segment: &str) -> bool {
        self.path.contains(segment)
    }
}

impl fmt::Display for PageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn decode_component(component: &str) -> String {
    let plus_as_space = component.replace('+', " ");
    match urlencoding::decode(&plus_as_space) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        // Invalid escape: keep the raw text.
        Err(_) => plus_as_space,
    }
}
