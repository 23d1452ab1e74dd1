//! Clean-URL browser history: locations are plain paths under a base prefix,
//! with no `#` marker in front of the route.

use std::borrow::Cow;

/// A location relative to the history base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Percent-decoded path, always starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    /// Fragment including its leading `#`, or empty.
    pub hash: String,
    /// Path, query and hash exactly as they appear in the URL.
    pub full_path: String,
}

impl Location {
    pub fn parse(raw: &str) -> Self {
        let (before_hash, hash) = match raw.find('#') {
            Some(at) => raw.split_at(at),
            None => (raw, ""),
        };
        let (raw_path, search) = match before_hash.find('?') {
            Some(at) => before_hash.split_at(at),
            None => (before_hash, ""),
        };

        let raw_path = if raw_path.starts_with('/') {
            Cow::Borrowed(raw_path)
        } else {
            Cow::Owned(format!("/{raw_path}"))
        };

        let path = raw_path
            .split('/')
            .map(decode)
            .collect::<Vec<_>>()
            .join("/");

        let query = search
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_query(key), decode_query(value))
            })
            .collect();

        Self {
            path,
            query,
            hash: hash.to_string(),
            full_path: format!("{raw_path}{search}{hash}"),
        }
    }
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

fn decode_query(raw: &str) -> String {
    decode(&raw.replace('+', " "))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    base: String,
}

impl WebHistory {
    /// Normalizes `base` to either `""` or a `/`-prefixed path, dropping one
    /// trailing slash.
    pub fn new(base: &str) -> Self {
        let base = base.trim();
        let mut base = base.strip_suffix('/').unwrap_or(base).to_string();
        if !base.is_empty() && !base.starts_with('/') {
            base.insert(0, '/');
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Strips the base from a browser URL. The base must match whole path
    /// segments (ASCII case-insensitive); `None` means the URL is not served
    /// by this history.
    ///
    /// Stricter than browser routers that strip any string prefix and pass
    /// other URLs through unchanged: `/apple` is not under `/app`.
    pub fn location(&self, url: &str) -> Option<Location> {
        let split = url.find(['?', '#']).unwrap_or(url.len());
        let (path, rest) = url.split_at(split);

        let relative = if self.base.is_empty() {
            path
        } else {
            let head = path.get(..self.base.len())?;
            if !head.eq_ignore_ascii_case(&self.base) {
                return None;
            }
            let tail = &path[self.base.len()..];
            if !tail.is_empty() && !tail.starts_with('/') {
                return None;
            }
            tail
        };

        let relative = if relative.is_empty() { "/" } else { relative };
        Some(Location::parse(&format!("{relative}{rest}")))
    }

    /// The URL-bar form of a router-relative path.
    pub fn href(&self, full_path: &str) -> String {
        format!("{}{}", self.base, full_path)
    }
}
