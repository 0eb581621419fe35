use stab_code::gf2::{null_space, rank, row_reduce, solve};
use stab_code::{BitMatrix, BitVector};
use stab_core::CodeError;

fn bv(bits: &str) -> BitVector {
    let bools: Vec<bool> = bits.chars().map(|c| c == '1').collect();
    BitVector::from_bools(&bools)
}

fn matrix(rows: &[&str]) -> BitMatrix {
    BitMatrix::from_row_list(rows.iter().map(|row| bv(row)).collect()).unwrap()
}

#[test]
fn rank_counts_independent_rows() {
    let m = matrix(&["110", "011", "101"]);
    assert_eq!(rank(&m), 2);
    assert_eq!(rank(&matrix(&["100", "010", "001"])), 3);
    assert_eq!(rank(&matrix(&["0000", "0000"])), 0);
}

#[test]
fn row_reduce_is_fully_reduced_and_leaves_input_alone() {
    let m = matrix(&["110", "011"]);
    let before = m.clone();
    let echelon = row_reduce(&m);
    assert_eq!(m, before);
    assert_eq!(echelon.pivots(), &[0, 1]);
    assert_eq!(echelon.rows(), &[bv("101"), bv("011")]);
}

#[test]
fn echelon_membership_and_insertion() {
    let mut echelon = row_reduce(&matrix(&["1100", "0011"]));
    assert!(echelon.contains(&bv("1111")).unwrap());
    assert!(!echelon.contains(&bv("1000")).unwrap());
    assert!(echelon.insert(&bv("0110")).unwrap());
    assert!(!echelon.insert(&bv("1010")).unwrap());
    assert_eq!(echelon.rank(), 3);
    for (row, &pivot) in echelon.rows().iter().zip(echelon.pivots()) {
        assert!(row.get(pivot));
        for (other, _) in echelon.rows().iter().zip(echelon.pivots()).filter(|(o, _)| *o != row) {
            assert!(!other.get(pivot));
        }
    }
}

#[test]
fn null_space_has_columns_minus_rank_solutions() {
    let m = matrix(&["1101", "0111"]);
    let basis = null_space(&m);
    assert_eq!(basis.len(), m.columns() - rank(&m));
    for vector in &basis {
        for row in m.rows() {
            assert!(!row.dot(vector));
        }
    }
    let span = row_reduce(&BitMatrix::from_row_list(basis).unwrap());
    assert_eq!(span.rank(), 2);
}

#[test]
fn empty_matrix_has_full_null_space() {
    let m = BitMatrix::from_rows(4, Vec::new()).unwrap();
    assert_eq!(rank(&m), 0);
    assert_eq!(null_space(&m).len(), 4);
}

#[test]
fn solve_finds_particular_solutions() {
    let m = matrix(&["110", "011"]);
    let rhs = bv("10");
    let x = solve(&m, &rhs).unwrap().expect("consistent system");
    assert!(m.rows()[0].dot(&x));
    assert!(!m.rows()[1].dot(&x));

    let inconsistent = matrix(&["110", "110"]);
    assert_eq!(solve(&inconsistent, &bv("10")).unwrap(), None);
}

#[test]
fn unequal_rows_are_rejected() {
    let err = BitMatrix::from_row_list(vec![bv("110"), bv("11")]).unwrap_err();
    match err {
        CodeError::DimensionMismatch(info) => {
            assert_eq!(info.context["row"], "1");
            assert_eq!(info.context["expected"], "3");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }

    let m = matrix(&["110"]);
    assert!(matches!(
        solve(&m, &bv("10")),
        Err(CodeError::DimensionMismatch(_))
    ));
    assert!(matches!(
        row_reduce(&m).reduce(&bv("1")),
        Err(CodeError::DimensionMismatch(_))
    ));
}

#[test]
fn product_with_transpose_collects_dot_products() {
    let a = matrix(&["1100", "1010"]);
    let b = matrix(&["1111", "1000"]);
    let product = a.mul_transpose(&b).unwrap();
    assert_eq!(product.rows(), &[bv("01"), bv("01")]);
}
