// Typosquatting detector
//------------------------------------------------------------------------------

/// Well-known domains a scam QR is likely to imitate. Iteration order is
/// fixed; the first qualifying match wins.
pub static REFERENCE_DOMAINS: [&str; 10] = [
    "google.com",
    "facebook.com",
    "instagram.com",
    "twitter.com",
    "youtube.com",
    "tokopedia.com",
    "shopee.co.id",
    "bukalapak.com",
    "lazada.co.id",
    "blibli.com",
];

/// Returns the first reference domain within Levenshtein distance 1..=2 of the
/// hostname. Distance 0 is an exact, legitimate match and is never flagged.
/// Comparison is case-sensitive on the hostname exactly as the URL parser
/// produced it.
pub fn detect(hostname: &str) -> Option<&'static str> {
    REFERENCE_DOMAINS.iter().copied().find(|reference| {
        let d = levenshtein(hostname, reference);
        d > 0 && d <= 2
    })
}

/// Classic dynamic-programming edit distance: insertions, deletions and
/// substitutions all cost 1, computed over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for (i, bc) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, ac) in a.iter().enumerate() {
            curr[j + 1] = if ac == bc {
                prev[j]
            } else {
                prev[j].min(prev[j + 1]).min(curr[j]) + 1
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

#[cfg(test)]
mod typosquat_tests {
    use test_case::test_case;

    use super::{detect, levenshtein};

    #[test_case("", "", 0)]
    #[test_case("", "abc", 3; "empty_vs_abc")]
    #[test_case("abc", "", 3; "abc_vs_empty")]
    #[test_case("kitten", "sitting", 3)]
    #[test_case("flaw", "lawn", 2)]
    #[test_case("tokopedia.com", "tokopedia.com", 0)]
    #[test_case("tokopedia.com", "tokopedla.com", 1)]
    fn test_levenshtein(a: &str, b: &str, expected: usize) {
        assert_eq!(levenshtein(a, b), expected);
        assert_eq!(levenshtein(b, a), expected);
    }

    #[test]
    fn test_exact_match_not_flagged() {
        assert_eq!(detect("tokopedia.com"), None);
        assert_eq!(detect("google.com"), None);
    }

    #[test]
    fn test_one_substitution_flagged() {
        // dotless ı for i, a classic homoglyph squat
        assert_eq!(detect("tokopedıa.com"), Some("tokopedia.com"));
        assert_eq!(detect("tokopedla.com"), Some("tokopedia.com"));
    }

    #[test]
    fn test_two_edits_flagged() {
        assert_eq!(detect("tokopeda.com"), Some("tokopedia.com"));
        assert_eq!(detect("gogle.co"), Some("google.com"));
    }

    #[test]
    fn test_distant_hostname_not_flagged() {
        assert_eq!(detect("example.com"), None);
        assert_eq!(detect("completely-unrelated.example"), None);
    }

    #[test]
    fn test_first_reference_match_wins() {
        // one deletion away from facebook.com, listed before instagram.com
        assert_eq!(detect("faceboo.com"), Some("facebook.com"));
    }

    #[test]
    fn test_case_sensitive() {
        // uppercase hostnames are more than 2 edits from any reference entry;
        // callers normalize case upstream
        assert_eq!(detect("TOKOPEDIA.COM"), None);
    }
}
