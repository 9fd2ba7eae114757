//! Percent-encoding for values interpolated into API paths.
//!
//! Ids and names come straight from user input; a `/`, `?` or `#` in them
//! would otherwise change which resource is addressed.
//!
//! ```
//! use grafana_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Main Org."), "Main%20Org.");
//! assert_eq!(encode_path_segment("../admin"), "..%2Fadmin");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes encoded in a path segment: RFC 3986 delimiters plus `%` itself.
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
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode `value` for use as one URL path segment.
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string()
}
