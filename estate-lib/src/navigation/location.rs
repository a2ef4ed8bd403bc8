//! Location snapshot and query string updates.

use percent_encoding::percent_decode_str;
use url::Url;
use url::form_urlencoded;

use crate::error::NavigationError;

/// Base used to parse absolute paths. Only the path and query are kept.
const BASE_URL: &str = "http://localhost/";
const BASE_HOST: &str = "localhost";

/// A change to one query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryUpdate {
    /// Set the parameter, replacing any existing values.
    Set(String, String),
    /// Remove the parameter.
    Remove(String),
}

impl QueryUpdate {
    /// Creates an update that sets `key` to `value`.
    pub fn set(key: impl Into<String>, value: impl ToString) -> Self {
        Self::Set(key.into(), value.to_string())
    }

    /// Creates an update that removes `key`.
    pub fn remove(key: impl Into<String>) -> Self {
        Self::Remove(key.into())
    }
}

/// Pathname plus decoded query pairs, in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    query: Vec<(String, String)>,
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Location {
    /// The root location `/` with no query.
    pub fn root() -> Self {
        Self {
            pathname: "/".to_string(),
            query: Vec::new(),
        }
    }

    /// Parses an absolute path with an optional query string.
    ///
    /// Dot segments are resolved and any fragment is dropped. Input that
    /// would leave the local origin (`//host`, `/\host`, or a path that turns
    /// into one once tabs and newlines are stripped) is rejected.
    pub fn parse(path_and_query: &str) -> Result<Self, NavigationError> {
        let relative = || NavigationError::RelativePath(path_and_query.to_string());
        match path_and_query.as_bytes() {
            [b'/', b'/' | b'\\', ..] => return Err(relative()),
            [b'/', ..] => {}
            _ => return Err(relative()),
        }
        let url = Url::parse(BASE_URL)?.join(path_and_query)?;
        if url.host_str() != Some(BASE_HOST) {
            return Err(relative());
        }
        Ok(Self {
            pathname: url.path().to_string(),
            query: url.query_pairs().into_owned().collect(),
        })
    }

    /// The pathname, percent-encoded as in a browser's `location.pathname`.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// The pathname with percent-escapes decoded, for matching against menu
    /// URLs written in plain text such as `/phòng`.
    pub fn decoded_pathname(&self) -> String {
        percent_decode_str(&self.pathname)
            .decode_utf8_lossy()
            .into_owned()
    }

    /// All query pairs.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// First value of a query parameter.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a copy with `updates` applied.
    ///
    /// A set key keeps the position of its first occurrence; new keys are
    /// appended.
    pub fn with_updates(&self, updates: &[QueryUpdate]) -> Self {
        let mut query = self.query.clone();
        for update in updates {
            match update {
                QueryUpdate::Set(key, value) => {
                    match query.iter().position(|(k, _)| k == key) {
                        Some(index) => {
                            query[index].1 = value.clone();
                            let mut seen = false;
                            query.retain(|(k, _)| {
                                if k != key {
                                    return true;
                                }
                                let keep = !seen;
                                seen = true;
                                keep
                            });
                        }
                        None => query.push((key.clone(), value.clone())),
                    }
                }
                QueryUpdate::Remove(key) => query.retain(|(k, _)| k != key),
            }
        }
        Self {
            pathname: self.pathname.clone(),
            query,
        }
    }

    /// Encoded query string without the leading `?`.
    pub fn search(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.pathname)
        } else {
            write!(f, "{}?{}", self.pathname, self.search())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let location = Location::parse("/finance/invoices?page=2&status=UNPAID#top").unwrap();
        assert_eq!(location.pathname(), "/finance/invoices");
        assert_eq!(location.query("page"), Some("2"));
        assert_eq!(location.query("status"), Some("UNPAID"));
        assert_eq!(location.query("size"), None);
    }

    #[test]
    fn test_parse_decodes_query_values() {
        let location = Location::parse("/people/tenants?name=Nguyen+Van%20A").unwrap();
        assert_eq!(location.query("name"), Some("Nguyen Van A"));
    }

    #[test]
    fn test_parse_resolves_dot_segments() {
        let location = Location::parse("/finance/./invoices/../payments").unwrap();
        assert_eq!(location.pathname(), "/finance/payments");
    }

    #[test]
    fn test_parse_rejects_relative_paths() {
        assert!(matches!(
            Location::parse("finance"),
            Err(NavigationError::RelativePath(_))
        ));
        assert!(matches!(
            Location::parse("//evil.example/x"),
            Err(NavigationError::RelativePath(_))
        ));
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        for input in ["/\\evil.example/x", "/\t/evil.example/x", "/\n\\evil.example"] {
            assert!(
                matches!(Location::parse(input), Err(NavigationError::RelativePath(_))),
                "{:?} was accepted",
                input
            );
        }
        assert_eq!(
            Location::parse("/rooms\\12").unwrap().pathname(),
            "/rooms/12"
        );
    }

    #[test]
    fn test_decoded_pathname() {
        let location = Location::parse("/phòng/a b").unwrap();
        assert_eq!(location.pathname(), "/ph%C3%B2ng/a%20b");
        assert_eq!(location.decoded_pathname(), "/phòng/a b");
    }

    #[test]
    fn test_with_updates_preserves_other_keys() {
        let location = Location::parse("/rooms?status=EMPTY&page=4&size=20").unwrap();
        let updated = location.with_updates(&[
            QueryUpdate::set("page", 1),
            QueryUpdate::remove("status"),
            QueryUpdate::set("q", "a&b"),
        ]);
        assert_eq!(updated.to_string(), "/rooms?page=1&size=20&q=a%26b");
    }

    #[test]
    fn test_set_collapses_duplicate_keys() {
        let location = Location::parse("/rooms?tag=a&x=1&tag=b").unwrap();
        let updated = location.with_updates(&[QueryUpdate::set("tag", "c")]);
        assert_eq!(updated.to_string(), "/rooms?tag=c&x=1");
    }

    #[test]
    fn test_display_without_query() {
        assert_eq!(Location::root().to_string(), "/");
    }
}
