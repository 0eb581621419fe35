use std::collections::BTreeMap;

use stab_code::catalog;
use stab_code::layout::{footprint, logical_footprints, support_footprints};
use stab_code::{Pauli, PauliWord, SynthesisOptions};
use stab_core::{CodeError, Coordinate};

fn square_grid(side: usize) -> Vec<Coordinate> {
    (0..side * side)
        .map(|qubit| Coordinate::planar((qubit % side) as f64, (qubit / side) as f64))
        .collect()
}

#[test]
fn generator_footprints_follow_supports() {
    let block = catalog::grid_16_6_4()
        .build(&SynthesisOptions::default())
        .unwrap();
    let layout = square_grid(4);
    let footprints = support_footprints(&block, &layout).unwrap();
    assert_eq!(footprints.len(), 10);

    let first = &footprints[0];
    assert_eq!(first.qubits, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    assert!(first.paulis.iter().all(|&pauli| pauli == Pauli::X));
    assert_eq!(first.centroid, Coordinate::planar(1.5, 0.5));

    let z_column = &footprints[8];
    assert!(z_column.paulis.iter().all(|&pauli| pauli == Pauli::Z));
    assert_eq!(z_column.centroid, Coordinate::planar(0.5, 1.5));
}

#[test]
fn logical_footprints_cover_every_pair() {
    let block = catalog::steane_7_1_3()
        .build(&SynthesisOptions::default())
        .unwrap();
    let layout: Vec<Coordinate> = (0..7).map(|q| Coordinate::planar(q as f64, 0.0)).collect();
    let footprints = logical_footprints(&block, &layout).unwrap();
    assert_eq!(footprints.len(), 1);
    let (x, z) = &footprints[0];
    assert_eq!(x.index, 0);
    assert_eq!(x.qubits, block.logical_pairs()[0].x.support());
    assert_eq!(z.coordinates.len(), z.qubits.len());
}

#[test]
fn missing_coordinates_are_layout_errors() {
    let mut layout: BTreeMap<usize, Coordinate> = BTreeMap::new();
    layout.insert(0, Coordinate::planar(0.0, 0.0));
    let word: PauliWord = "XIZ".parse().unwrap();
    match footprint(4, &word, &layout).unwrap_err() {
        CodeError::Layout(info) => {
            assert_eq!(info.code, "missing-coordinate");
            assert_eq!(info.context["qubit"], "2");
            assert_eq!(info.context["operator_index"], "4");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[test]
fn identity_has_an_empty_footprint() {
    let layout = square_grid(2);
    let placed = footprint(0, &PauliWord::identity(4), &layout).unwrap();
    assert!(placed.qubits.is_empty());
    assert_eq!(placed.centroid, Coordinate::default());
}
