use stab_code::catalog;
use stab_code::{
    equivalent_logical_bases, thread_pool, verify, CodeBlock, CommutationVerifier, LogicalPair, PauliWord,
    SynthesisOptions,
};
use stab_core::CodeError;

fn parallel(threads: usize) -> SynthesisOptions {
    SynthesisOptions {
        parallel_verification: true,
        threads,
        ..SynthesisOptions::default()
    }
}

fn steane() -> CodeBlock {
    catalog::steane_7_1_3()
        .build(&SynthesisOptions::default())
        .unwrap()
}

fn cube() -> CodeBlock {
    catalog::cube_8_3_2()
        .build(&SynthesisOptions::default())
        .unwrap()
}

fn expect_violation(block: &CodeBlock, pairs: &[LogicalPair], code: &str, roles: (&str, &str)) {
    let sequential = verify(block.group(), pairs, &SynthesisOptions::default()).unwrap_err();
    match &sequential {
        CodeError::CommutationViolation(info) => {
            assert_eq!(info.code, code);
            assert_eq!(info.context["first_role"], roles.0);
            assert_eq!(info.context["second_role"], roles.1);
            assert!(info.context.contains_key("first_operator"));
            assert!(info.context.contains_key("second_operator"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
    for threads in [1, 2, 4] {
        let concurrent = verify(block.group(), pairs, &parallel(threads)).unwrap_err();
        assert_eq!(concurrent, sequential);
    }
}

#[test]
fn logical_anticommuting_with_stabilizer_is_reported() {
    let block = steane();
    let mut pairs = block.logical_pairs().to_vec();
    pairs[0].x = "XIIIIII".parse().unwrap();
    expect_violation(
        &block,
        &pairs,
        "logical-anticommutes-with-stabilizer",
        ("logical-x-0", "generator-5"),
    );
}

#[test]
fn commuting_conjugate_pair_is_reported() {
    let block = steane();
    let mut pairs = block.logical_pairs().to_vec();
    pairs[0].z = pairs[0].x.clone();
    expect_violation(&block, &pairs, "logical-pair-commutes", ("logical-x-0", "logical-z-0"));
}

#[test]
fn anticommuting_cross_pair_is_reported() {
    let block = cube();
    let mut pairs = block.logical_pairs().to_vec();
    pairs[1].x = pairs[0].x.clone();
    pairs[1].z = pairs[0].z.clone();
    expect_violation(
        &block,
        &pairs,
        "logical-cross-pair-anticommutes",
        ("logical-x-0", "logical-z-1"),
    );
}

#[test]
fn tampered_basis_never_yields_a_block() {
    let block = steane();
    let mut pairs = block.logical_pairs().to_vec();
    pairs[0].z = pairs[0].x.clone();
    let options = SynthesisOptions::default();
    assert!(matches!(
        CodeBlock::from_parts("tampered", block.group().clone(), pairs, &options),
        Err(CodeError::CommutationViolation(_))
    ));

    match CodeBlock::from_parts("short", block.group().clone(), Vec::new(), &options) {
        Err(CodeError::InsufficientLogicalSpace(info)) => {
            assert_eq!(info.code, "logical-count-mismatch");
            assert_eq!(info.context["expected"], "1");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn parallel_and_sequential_reports_match() {
    let block = cube();
    let sequential = verify(block.group(), block.logical_pairs(), &SynthesisOptions::default()).unwrap();
    let concurrent = verify(block.group(), block.logical_pairs(), &parallel(3)).unwrap();
    assert_eq!(sequential, concurrent);
    assert_eq!(&sequential, block.verification());
}

#[test]
fn one_pool_serves_repeated_verification() {
    let pool = thread_pool(&parallel(2)).unwrap();
    for block in [steane(), cube()] {
        let verifier = CommutationVerifier::new(block.group(), block.logical_pairs()).unwrap();
        assert_eq!(&verifier.verify_in(&pool).unwrap(), block.verification());
    }

    let block = steane();
    let mut pairs = block.logical_pairs().to_vec();
    pairs[0].z = pairs[0].x.clone();
    let sequential = verify(block.group(), &pairs, &SynthesisOptions::default()).unwrap_err();
    let verifier = CommutationVerifier::new(block.group(), &pairs).unwrap();
    assert_eq!(verifier.verify_in(&pool).unwrap_err(), sequential);

    assert!(matches!(thread_pool(&parallel(0)), Err(CodeError::Config(_))));
}

#[test]
fn wrong_length_logical_operator_is_rejected() {
    let block = steane();
    let mut pairs = block.logical_pairs().to_vec();
    pairs[0].z = PauliWord::identity(6);
    match CommutationVerifier::new(block.group(), &pairs).unwrap_err() {
        CodeError::DimensionMismatch(info) => {
            assert_eq!(info.context["pair_index"], "0");
            assert_eq!(info.context["found"], "6");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn zero_threads_are_rejected_before_verifying() {
    let block = steane();
    let err = verify(block.group(), block.logical_pairs(), &parallel(0)).unwrap_err();
    assert_eq!(err.info().code, "zero-threads");
}

#[test]
fn bases_equal_up_to_stabilizers_are_equivalent() {
    let block = steane();
    let group = block.group();
    let original = block.logical_pairs().to_vec();

    let shifted: Vec<LogicalPair> = original
        .iter()
        .map(|pair| LogicalPair {
            index: pair.index,
            x: pair.x.multiply(&group.generators()[0]).unwrap(),
            z: pair.z.multiply(&group.generators()[4]).unwrap(),
        })
        .collect();
    assert!(verify(group, &shifted, &SynthesisOptions::default()).is_ok());
    assert!(equivalent_logical_bases(group, &original, &shifted).unwrap());

    let mut foreign = original.clone();
    foreign[0].x = "XIIIIII".parse().unwrap();
    assert!(!equivalent_logical_bases(group, &original, &foreign).unwrap());
    assert!(!equivalent_logical_bases(group, &original, &[]).unwrap());
}
