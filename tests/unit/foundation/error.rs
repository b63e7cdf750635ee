use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BurstError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BurstError::expression("x")
            .to_string()
            .contains("expression error:")
    );
    assert!(
        BurstError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn count_change_names_both_counts() {
    let err = BurstError::CountChange {
        current: 4,
        requested: 5,
    };
    let msg = err.to_string();
    assert!(msg.contains("configuration error:"));
    assert!(msg.contains("4 -> 5"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BurstError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
