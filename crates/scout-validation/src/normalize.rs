//! Excerpt normalization and hashing.

/// Lowercase, replace every non-alphanumeric character with a space, and
/// collapse whitespace. Two excerpts that differ only in case, punctuation,
/// or spacing normalize identically.
pub fn normalize(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            mapped.extend(c.to_lowercase());
        } else {
            mapped.push(' ');
        }
    }
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// blake3 of the normalized excerpt, hex encoded.
pub fn content_hash(text: &str) -> String {
    blake3::hash(normalize(text).as_bytes()).to_hex().to_string()
}

/// Normalized word tokens.
pub fn tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `needle` appears in `haystack` as a contiguous run of whole tokens.
pub fn contains_phrase(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_and_case_do_not_change_the_hash() {
        assert_eq!(
            content_hash("Riverside Rovers: RFP for CRM!"),
            content_hash("riverside   rovers rfp for crm")
        );
        assert_ne!(content_hash("rfp for crm"), content_hash("rfp for erp"));
    }

    #[test]
    fn non_ascii_capitals_fold_to_lowercase() {
        assert_eq!(normalize("ÉLAN Athletic"), "élan athletic");
        assert_eq!(
            content_hash("ÉLAN ATHLETIC opens a tender"),
            content_hash("élan athletic opens a tender")
        );
    }

    #[test]
    fn phrase_match_respects_word_boundaries() {
        let text = tokens("The Rovers Trust announced a tender");
        assert!(contains_phrase(&text, &tokens("rovers trust")));
        assert!(!contains_phrase(&text, &tokens("rover")));
        assert!(!contains_phrase(&text, &[]));
    }
}
