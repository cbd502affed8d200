//! Percent-encoding for index and type names interpolated into request paths.
//!
//! An index name is user input. Left unencoded, a `/` would address a
//! sub-resource, a `?` would start a query string, and a `,` or `*` would
//! widen the request to several indices at once.
//!
//! ```
//! use esadmin_client::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("logs/2024"), "logs%2F2024");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a path segment.
///
/// RFC 3986 section 3.3 reserved characters, plus the multi-index
/// separators (`,` and `*`) the search engine interprets inside the index
/// position of a path.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'~')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b',')
    .add(b'*')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode one path segment.
///
/// A segment made only of dots (`.` or `..`) is fully encoded so URL
/// normalization cannot collapse it into a parent path.
///
/// ```
/// use esadmin_client::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("my-index"), "my-index");
/// assert_eq!(encode_path_segment("a,b"), "a%2Cb");
/// assert_eq!(encode_path_segment(".."), "%2E%2E");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    if !segment.is_empty() && segment.bytes().all(|b| b == b'.') {
        return "%2E".repeat(segment.len());
    }
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_index_names_pass_through() {
        assert_eq!(encode_path_segment("elastomer-index-test"), "elastomer-index-test");
        assert_eq!(encode_path_segment("logs_2024.01"), "logs_2024.01");
        assert_eq!(encode_path_segment(".kibana"), ".kibana");
    }

    #[test]
    fn test_slash_cannot_address_sub_resource() {
        assert_eq!(encode_path_segment("idx/_close"), "idx%2F_close");
    }

    #[test]
    fn test_multi_index_syntax_is_neutralized() {
        assert_eq!(encode_path_segment("a,b"), "a%2Cb");
        assert_eq!(encode_path_segment("logs-*"), "logs-%2A");
    }

    #[test]
    fn test_query_and_fragment_characters() {
        assert_eq!(encode_path_segment("idx?pretty"), "idx%3Fpretty");
        assert_eq!(encode_path_segment("idx#frag"), "idx%23frag");
    }

    #[test]
    fn test_percent_is_encoded_once() {
        assert_eq!(encode_path_segment("100%"), "100%25");
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
    }

    #[test]
    fn test_unicode_is_utf8_encoded() {
        assert_eq!(encode_path_segment("caf\u{00e9}"), "caf%C3%A9");
    }

    #[test]
    fn test_dot_segments() {
        assert_eq!(encode_path_segment("."), "%2E");
        assert_eq!(encode_path_segment(".."), "%2E%2E");
        assert_eq!(encode_path_segment("a..b"), "a..b");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
    }
}
