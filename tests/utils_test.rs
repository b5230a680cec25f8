use serde_json::json;
use spotex::types::{PlaylistItem, User};
use spotex::utils::*;

// Helper function to create a playlist entry with the given track id
fn create_test_item(id: Option<&str>) -> PlaylistItem {
    PlaylistItem(json!({
        "added_at": "2024-01-01T00:00:00Z",
        "is_local": id.is_none(),
        "track": {
            "id": id,
            "name": "Song",
            "type": "track",
        }
    }))
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // SHA-256 digest, base64 URL-safe without padding
    assert_eq!(challenge.len(), 43);
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_known_vector() {
    // RFC 7636 appendix B
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_track_id() {
    assert_eq!(
        create_test_item(Some("4uLU6hMCjMI75M1A2tKUQC")).track_id(),
        Some("4uLU6hMCjMI75M1A2tKUQC".to_string())
    );

    // Local files have a null id
    assert_eq!(create_test_item(None).track_id(), None);

    // Empty ids are treated as missing
    assert_eq!(create_test_item(Some("")).track_id(), None);

    // Removed tracks come back with a null track object
    assert_eq!(PlaylistItem(json!({ "track": null })).track_id(), None);
    assert_eq!(PlaylistItem(json!({})).track_id(), None);
}

#[test]
fn test_track_ids_keeps_playlist_order() {
    let items = vec![
        create_test_item(Some("a")),
        create_test_item(None),
        create_test_item(Some("b")),
        create_test_item(Some("c")),
    ];

    assert_eq!(
        track_ids(&items),
        vec![
            Some("a".to_string()),
            None,
            Some("b".to_string()),
            Some("c".to_string())
        ]
    );
}

#[test]
fn test_playlist_item_serializes_as_is() {
    let item = create_test_item(Some("a"));
    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json, item.0);
}

#[test]
fn test_user_name_falls_back_to_id() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "display_name": null })).unwrap();
    assert_eq!(user.name(), "u1");

    let user: User = serde_json::from_value(json!({ "id": "u1", "display_name": "Jo" })).unwrap();
    assert_eq!(user.name(), "Jo");
}
