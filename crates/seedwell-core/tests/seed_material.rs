use seedwell_core::{build_seed_material, RandError, SeedMaterial, STATE_WORDS};

#[test]
fn material_length_is_independent_of_entropy_count() {
    for count in 0..40u32 {
        let entropy: Vec<u32> = (0..count).collect();
        let material = build_seed_material(&entropy, 77);
        assert_eq!(material.len(), STATE_WORDS, "entropy count {count}");
    }
}

#[test]
fn building_is_a_pure_function() {
    let a = build_seed_material(&[10, 20, 30], 40);
    let b = build_seed_material(&[10, 20, 30], 40);
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn one_bit_of_entropy_changes_about_half_the_bits() {
    let base = build_seed_material(&[1, 2, 3, 4, 5, 6, 7], 1_000);
    let flipped = build_seed_material(&[1, 2, 3, 4, 5, 6, 6], 1_000);
    let total_bits = (STATE_WORDS * 32) as u32;
    let distance = base.hamming_distance(&flipped);
    assert!(
        distance > total_bits * 2 / 5 && distance < total_bits * 3 / 5,
        "distance {distance}"
    );
}

#[test]
fn one_clock_tick_changes_about_half_the_bits() {
    let a = build_seed_material(&[1, 2, 3, 4, 5, 6, 7], 1_000);
    let b = build_seed_material(&[1, 2, 3, 4, 5, 6, 7], 1_001);
    let total_bits = (STATE_WORDS * 32) as u32;
    assert!(a.hamming_distance(&b) > total_bits * 2 / 5);
}

#[test]
fn fingerprint_differs_for_different_material() {
    let a = build_seed_material(&[1], 0);
    let b = build_seed_material(&[2], 0);
    assert_ne!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().len(), 64);
}

#[test]
fn empty_words_are_rejected() {
    let err = SeedMaterial::from_words(Vec::new()).unwrap_err();
    assert!(matches!(err, RandError::InvalidSeed(_)));
}

#[test]
fn material_serializes_as_plain_array() {
    let material = SeedMaterial::from_words(vec![0, 42]).unwrap();
    let json = serde_json::to_string(&material).expect("serialize");
    assert_eq!(json, "[0,42]");
    let decoded: SeedMaterial = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, material);
}

#[test]
fn empty_array_fails_to_deserialize() {
    let result: Result<SeedMaterial, _> = serde_json::from_str("[]");
    assert!(result.is_err());
}
