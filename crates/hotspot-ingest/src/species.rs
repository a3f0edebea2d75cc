use hotspot_core::constants::UNKNOWN_SPECIES_LABEL;
use hotspot_core::errors::ValidationError;

/// Canonical form of a species label: trimmed, inner whitespace collapsed to
/// single spaces. Case is preserved, so "Apple snail" and "apple snail" are
/// different partitions.
pub fn canonical_label(raw: &str) -> Result<String, ValidationError> {
    let label = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if label.is_empty() {
        return Err(ValidationError::InvalidSpecies {
            reason: "label is empty".to_string(),
        });
    }
    if label.eq_ignore_ascii_case(UNKNOWN_SPECIES_LABEL) {
        return Err(ValidationError::InvalidSpecies {
            reason: format!("classifier could not identify the species ({label})"),
        });
    }
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(
            canonical_label("  Asian   longhorned\tbeetle \n").unwrap(),
            "Asian longhorned beetle"
        );
    }

    #[test]
    fn case_is_kept() {
        assert_eq!(canonical_label("apple snail").unwrap(), "apple snail");
    }

    #[test]
    fn blank_and_unknown_rejected() {
        assert!(canonical_label("   ").is_err());
        assert!(canonical_label("unknown  species").is_err());
    }
}
