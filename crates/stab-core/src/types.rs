use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::QubitLayout;

/// Geometric position of a physical qubit, supplied by a layout collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinate {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Depth, zero for planar layouts.
    #[serde(default)]
    pub z: f64,
}

impl Coordinate {
    /// Creates a planar coordinate.
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

impl QubitLayout for Vec<Coordinate> {
    fn coordinate(&self, qubit: usize) -> Option<Coordinate> {
        self.get(qubit).copied()
    }
}

impl QubitLayout for BTreeMap<usize, Coordinate> {
    fn coordinate(&self, qubit: usize) -> Option<Coordinate> {
        self.get(&qubit).copied()
    }
}
