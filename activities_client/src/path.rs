use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left alone by a browser's `encodeURIComponent`; everything else is
/// escaped.
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

/// Percent-encodes `value` so it can be used as a single path segment or
/// query value.
///
/// `.` is left alone, so a value of `.` or `..` still acts as a dot segment
/// once the path is parsed into a URL.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Builds `/activities/{activity}/{action}?email={email}`.
#[must_use]
pub fn participant_path(action: &str, activity: &str, email: &str) -> String {
    format!(
        "/activities/{activity}/{action}?email={email}",
        activity = encode_component(activity),
        email = encode_component(email),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_participant_path() {
        assert_eq!(
            participant_path("unregister", "Chess Club", "a b@example.com"),
            "/activities/Chess%20Club/unregister?email=a%20b%40example.com"
        );
        assert_eq!(
            participant_path("signup", "Art Club", "amelia@mergington.edu"),
            "/activities/Art%20Club/signup?email=amelia%40mergington.edu"
        );
    }

    #[test]
    fn test_encode_component_matches_browser() {
        let unreserved = "a-b_c.d!e~f*g'h(i)j";
        assert_eq!(encode_component(unreserved), unreserved);
        assert_eq!(encode_component("a/b?c#d"), "a%2Fb%3Fc%23d");
        assert_eq!(encode_component("a+b=c&d"), "a%2Bb%3Dc%26d");
        assert_eq!(encode_component("100%"), "100%25");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_encode_component_decodes_to_original() {
        let values = [
            "Chess Club",
            "a b@example.com",
            "Rock & Roll / Jazz?",
            "50% off #1",
            "o'neil+tag@example.com",
            "Ünïcödé 日本語",
            "semi;colon,comma:colon",
            "",
        ];

        for value in values {
            let encoded = encode_component(value);
            assert!(
                !encoded.contains([' ', '/', '?', '#', '&', '=', '+', '@']),
                "{encoded} still has reserved characters"
            );

            let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn test_participant_path_keeps_structure() {
        let path = participant_path("unregister", "A/B?C", "x&email=y");

        let (path, query) = path.split_once('?').unwrap();
        assert_eq!(path.matches('/').count(), 3);
        assert!(query.starts_with("email="));
        assert!(!query.contains('&'));
    }
}
