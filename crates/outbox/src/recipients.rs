//! Recipient list formatting.
//!
//! The delivery API takes `To`, `Cc` and `Bcc` as a single comma-separated
//! string. These helpers build that string from structured input:
//!
//! - named: `"John Smith"<john@example.com>,"Jane Doe"<jane@example.com>`
//! - bare: `"john@example.com","jane@example.com"`
//!
//! Names and addresses are inserted verbatim.

use std::fmt::Write as _;

/// Formats `(display name, address)` pairs as `"Name"<address>` tokens.
///
/// Tokens keep the iteration order of `recipients`. An empty input yields an
/// empty string.
#[must_use]
pub fn format_named<I, N, A>(recipients: I) -> String
where
    I: IntoIterator<Item = (N, A)>,
    N: AsRef<str>,
    A: AsRef<str>,
{
    let mut result = String::new();

    for (name, address) in recipients {
        if !result.is_empty() {
            result.push(',');
        }
        let _ = write!(result, "\"{}\"<{}>", name.as_ref(), address.as_ref());
    }

    result
}

/// Formats bare addresses as `"address"` tokens, in input order.
#[must_use]
pub fn format_addresses<I, A>(addresses: I) -> String
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    addresses
        .into_iter()
        .map(|address| format!("\"{}\"", address.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_named_single() {
        let formatted = format_named([("John Smith", "john@example.com")]);
        assert_eq!(formatted, "\"John Smith\"<john@example.com>");
    }

    #[test]
    fn test_format_named_multiple() {
        let formatted = format_named([
            ("John Smith", "john@example.com"),
            ("Jane Doe", "jane@example.com"),
        ]);
        assert_eq!(
            formatted,
            "\"John Smith\"<john@example.com>,\"Jane Doe\"<jane@example.com>"
        );
    }

    #[test]
    fn test_format_named_map_order() {
        let mut map = BTreeMap::new();
        map.insert("Zed", "z@example.com");
        map.insert("Amy", "a@example.com");

        let formatted = format_named(&map);
        assert_eq!(formatted, "\"Amy\"<a@example.com>,\"Zed\"<z@example.com>");
    }

    #[test]
    fn test_format_named_empty() {
        let empty: Vec<(String, String)> = Vec::new();
        assert_eq!(format_named(empty), "");
    }

    #[test]
    fn test_format_addresses() {
        assert_eq!(
            format_addresses(["a@x.com", "b@x.com"]),
            "\"a@x.com\",\"b@x.com\""
        );
    }

    #[test]
    fn test_format_addresses_owned() {
        let addresses = vec!["a@x.com".to_string()];
        assert_eq!(format_addresses(&addresses), "\"a@x.com\"");
    }

    #[test]
    fn test_format_addresses_empty() {
        assert_eq!(format_addresses(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_values_are_not_escaped() {
        // Validation is left to the receiving API.
        assert_eq!(format_addresses(["not an address"]), "\"not an address\"");
        assert_eq!(format_named([("", "")]), "\"\"<>");
    }
}
