//! Domain-name and identifier formatting helpers shared by the endpoint
//! wrappers. These only format; they never validate DNS content.

/// Appends the trailing dot that marks a name as fully qualified, unless
/// it is already there. Idempotent.
pub fn make_domain_canonical(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    }
}

/// Strips at most one trailing dot, yielding the form zone names take as
/// URL path segments.
pub fn trim_domain(domain: &str) -> &str {
    domain.strip_suffix('.').unwrap_or(domain)
}

/// Decimal path segment for a cryptokey id.
pub fn key_id_segment(id: u64) -> String {
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_appends_missing_dot() {
        assert_eq!(make_domain_canonical("foo.tld"), "foo.tld.");
    }

    #[test]
    fn canonical_is_a_fixed_point_on_dotted_names() {
        assert_eq!(make_domain_canonical("foo.tld."), "foo.tld.");
    }

    #[test]
    fn canonical_is_idempotent() {
        for s in ["foo.tld", "foo.tld.", "", ".", "a.b.c"] {
            let once = make_domain_canonical(s);
            assert_eq!(make_domain_canonical(&once), once);
        }
    }

    #[test]
    fn trim_removes_at_most_one_dot() {
        assert_eq!(trim_domain("example.com."), "example.com");
        assert_eq!(trim_domain("example.com"), "example.com");
        assert_eq!(trim_domain("example.com.."), "example.com.");
        assert_eq!(trim_domain(""), "");
    }

    #[test]
    fn key_id_renders_as_decimal() {
        assert_eq!(key_id_segment(0), "0");
        assert_eq!(key_id_segment(11), "11");
        assert_eq!(key_id_segment(u64::MAX), "18446744073709551615");
    }
}
