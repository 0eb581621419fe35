use stab_code::pauli::words_from_specs;
use stab_code::{CodeBlock, Pauli, PauliSpec, PauliWord, StabilizerGroup, SynthesisOptions};
use stab_core::CodeError;

#[test]
fn dense_and_sparse_descriptions_agree() {
    let dense = PauliSpec::from("XIZYI").to_word(5).unwrap();
    let sparse = PauliSpec::Sparse(vec![(3, Pauli::Y), (0, Pauli::X), (2, Pauli::Z)])
        .to_word(5)
        .unwrap();
    assert_eq!(dense, sparse);
    assert_eq!(dense.to_string(), "XIZYI");
    assert_eq!(dense.support(), vec![0, 2, 3]);
    assert_eq!(dense.weight(), 3);
    assert_eq!(dense.get(3), Pauli::Y);
}

#[test]
fn mixed_descriptions_build_the_same_group() {
    let dense: Vec<PauliSpec> = ["ZZI", "IZZ"].into_iter().map(PauliSpec::from).collect();
    let mixed = vec![
        PauliSpec::from("ZZI"),
        PauliSpec::uniform(Pauli::Z, [1, 2]),
    ];
    let options = SynthesisOptions::default();
    let a = StabilizerGroup::from_specs(3, &dense, &options).unwrap();
    let b = StabilizerGroup::from_specs(3, &mixed, &options).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unknown_symbols_are_parse_errors() {
    let err = "XQZ".parse::<PauliWord>().unwrap_err();
    match err {
        CodeError::Parse(info) => {
            assert_eq!(info.code, "unknown-pauli-symbol");
            assert_eq!(info.context["symbol"], "Q");
            assert_eq!(info.context["qubit"], "1");
            assert!(info.hint.is_some());
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn description_errors_name_the_generator() {
    let specs = vec![PauliSpec::from("ZZI"), PauliSpec::from("ZZ")];
    match words_from_specs(3, &specs).unwrap_err() {
        CodeError::DimensionMismatch(info) => {
            assert_eq!(info.context["generator_index"], "1");
            assert_eq!(info.context["operator"], "ZZ");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }

    let specs = vec![PauliSpec::Sparse(vec![(0, Pauli::X), (4, Pauli::Z)])];
    match CodeBlock::build("bad", 3, &specs, &SynthesisOptions::default()).unwrap_err() {
        CodeError::Parse(info) => {
            assert_eq!(info.code, "qubit-out-of-range");
            assert_eq!(info.context["generator_index"], "0");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn duplicate_sparse_entries_are_rejected() {
    let err = PauliWord::from_sparse(3, &[(1, Pauli::X), (1, Pauli::Z)]).unwrap_err();
    assert_eq!(err.info().code, "duplicate-qubit");
}

#[test]
fn products_and_commutation() {
    let x: PauliWord = "XX".parse().unwrap();
    let z: PauliWord = "ZI".parse().unwrap();
    assert!(!x.commutes_with(&z).unwrap());
    assert!(x.commutes_with(&"ZZ".parse().unwrap()).unwrap());
    assert_eq!(x.multiply(&z).unwrap().to_string(), "YX");
    assert!(x.multiply(&x).unwrap().is_identity());
    assert!(x.is_x_type());
    assert!(!x.is_z_type());
    assert!(matches!(
        x.multiply(&PauliWord::identity(3)),
        Err(CodeError::DimensionMismatch(_))
    ));
}

#[test]
fn words_serialize_as_letter_strings() {
    let word: PauliWord = "IXYZ".parse().unwrap();
    let json = serde_json::to_string(&word).unwrap();
    assert_eq!(json, "\"IXYZ\"");
    let back: PauliWord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, word);
    assert!(serde_json::from_str::<PauliWord>("\"IXW\"").is_err());

    let spec: PauliSpec = serde_json::from_str(r#"{"sparse":[[0,"X"],[2,"Z"]]}"#).unwrap();
    assert_eq!(spec.to_word(3).unwrap().to_string(), "XIZ");
    let spec: PauliSpec = serde_json::from_str(r#"{"dense":"ZZI"}"#).unwrap();
    assert_eq!(spec, PauliSpec::from("ZZI"));
}
