use serde_json::Value;
use stab_code::catalog;
use stab_code::{from_bytes, from_json, to_bytes, to_json, CodeBlock, SynthesisOptions};
use stab_core::{CodeError, RunProvenance};

fn block() -> CodeBlock {
    let block = catalog::cube_8_3_2()
        .build(&SynthesisOptions::default())
        .expect("cube code builds");
    let provenance = RunProvenance {
        seed: 11,
        created_at: "2024-01-01T00:00:00Z".into(),
        ..block.provenance().clone()
    };
    block.with_provenance(provenance)
}

fn edited(json: &str, edit: impl FnOnce(&mut Value)) -> String {
    let mut value: Value = serde_json::from_str(json).unwrap();
    edit(&mut value);
    serde_json::to_string(&value).unwrap()
}

#[test]
fn json_roundtrip_preserves_block() {
    let original = block();
    let json = to_json(&original).expect("serialize");
    let restored = from_json(&json).expect("deserialize");
    assert_eq!(restored.label(), original.label());
    assert_eq!(restored.generators(), original.generators());
    assert_eq!(restored.logical_pairs(), original.logical_pairs());
    assert_eq!(restored.canonical_hash(), original.canonical_hash());
    assert_eq!(restored.provenance().seed, 11);
    assert_eq!(restored.provenance().code_hash, original.canonical_hash());
    assert!(restored.is_verified());
    assert_eq!(to_json(&restored).unwrap(), json);
}

#[test]
fn binary_roundtrip_preserves_block() {
    let original = block();
    let bytes = to_bytes(&original).expect("bytes");
    let restored = from_bytes(&bytes).expect("restore");
    assert_eq!(restored.canonical_hash(), original.canonical_hash());
    assert_eq!(restored.verification(), original.verification());
    assert!(matches!(from_bytes(&bytes[..4]), Err(CodeError::Serde(_))));
}

#[test]
fn label_is_outside_the_hash() {
    let json = to_json(&block()).unwrap();
    let relabeled = edited(&json, |value| value["label"] = Value::from("renamed"));
    let restored = from_json(&relabeled).unwrap();
    assert_eq!(restored.label(), "renamed");
}

#[test]
fn tampered_logical_basis_fails_verification() {
    let json = to_json(&block()).unwrap();
    let tampered = edited(&json, |value| {
        let x = value["logical_pairs"][0]["x"].clone();
        value["logical_pairs"][0]["z"] = x;
    });
    assert!(matches!(
        from_json(&tampered),
        Err(CodeError::CommutationViolation(_))
    ));
}

#[test]
fn tampered_generators_are_revalidated() {
    let json = to_json(&block()).unwrap();
    let tampered = edited(&json, |value| {
        value["generators"][1] = Value::from("XIIIIIII");
    });
    assert!(matches!(
        from_json(&tampered),
        Err(CodeError::InvalidStabilizerGroup(_))
    ));
}

#[test]
fn stored_rank_and_hash_are_checked() {
    let json = to_json(&block()).unwrap();
    let wrong_rank = edited(&json, |value| value["rank"] = Value::from(4));
    assert_eq!(from_json(&wrong_rank).unwrap_err().info().code, "rank-mismatch");

    let wrong_hash = edited(&json, |value| {
        value["provenance"]["code_hash"] = Value::from("deadbeef");
    });
    assert_eq!(
        from_json(&wrong_hash).unwrap_err().info().code,
        "code-hash-mismatch"
    );
}

#[test]
fn newer_schema_is_rejected() {
    let json = to_json(&block()).unwrap();
    let future = edited(&json, |value| {
        value["schema_version"]["major"] = Value::from(2);
    });
    match from_json(&future).unwrap_err() {
        CodeError::Serde(info) => assert_eq!(info.code, "unsupported-schema"),
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn misnumbered_pairs_are_rejected() {
    let json = to_json(&block()).unwrap();
    let shuffled = edited(&json, |value| {
        value["logical_pairs"][0]["index"] = Value::from(2);
    });
    assert_eq!(
        from_json(&shuffled).unwrap_err().info().code,
        "logical-index-mismatch"
    );
}

#[test]
fn errors_roundtrip_through_json() {
    let err = from_json("{").unwrap_err();
    let encoded = serde_json::to_string(&err).unwrap();
    let decoded: CodeError = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, err);
    assert_eq!(decoded.info().code, "json-deserialize");
}
