//! Dense linear algebra over GF(2).
//!
//! Row reduction is Gauss-Jordan elimination with XOR pivoting. For an
//! `m x c` matrix it costs O(m · c · min(m, c)) word operations, i.e. O(n³)
//! for square inputs, which is the scaling callers should expect from
//! [`rank`], [`row_reduce`], [`null_space`] and [`solve`].

use stab_core::{CodeError, ErrorInfo};

use crate::bits::BitVector;

/// Row-major binary matrix whose rows all share the same column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    columns: usize,
    rows: Vec<BitVector>,
}

impl BitMatrix {
    /// Builds a matrix, rejecting rows whose length differs from `columns`.
    pub fn from_rows(columns: usize, rows: Vec<BitVector>) -> Result<Self, CodeError> {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns)
        {
            let info = ErrorInfo::new("dimension-mismatch", "matrix row has inconsistent length")
                .with_context("row", idx.to_string())
                .with_context("expected", columns.to_string())
                .with_context("found", row.len().to_string());
            return Err(CodeError::DimensionMismatch(info));
        }
        Ok(Self { columns, rows })
    }

    pub(crate) fn from_validated_rows(columns: usize, rows: Vec<BitVector>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns));
        Self { columns, rows }
    }

    /// Builds a matrix from a non-empty row list, taking the width of the first row.
    pub fn from_row_list(rows: Vec<BitVector>) -> Result<Self, CodeError> {
        let columns = rows.first().map(BitVector::len).unwrap_or(0);
        Self::from_rows(columns, rows)
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[BitVector] {
        &self.rows
    }

    /// Returns true when every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(BitVector::is_zero)
    }

    /// Computes `self · otherᵀ`, i.e. all pairwise row dot products.
    pub fn mul_transpose(&self, other: &BitMatrix) -> Result<BitMatrix, CodeError> {
        if self.columns != other.columns {
            return Err(CodeError::dimension_mismatch(
                "matrix product operand",
                self.columns,
                other.columns,
            ));
        }
        let rows = self
            .rows
            .iter()
            .map(|lhs| {
                let bits: Vec<bool> = other.rows.iter().map(|rhs| lhs.dot(rhs)).collect();
                BitVector::from_bools(&bits)
            })
            .collect();
        Ok(BitMatrix {
            columns: other.rows.len(),
            rows,
        })
    }
}

/// Fully reduced row-echelon form of a binary matrix.
///
/// Every pivot column is zero in every row but its own, so reducing a vector
/// against the echelon yields a canonical representative of its coset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echelon {
    columns: usize,
    rows: Vec<BitVector>,
    pivots: Vec<usize>,
}

impl Echelon {
    /// Creates an echelon form spanning nothing.
    pub fn empty(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            pivots: Vec::new(),
        }
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the retained (independent) rows.
    pub fn rows(&self) -> &[BitVector] {
        &self.rows
    }

    /// Returns the pivot column for each retained row.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Returns the dimension of the row space.
    pub fn rank(&self) -> usize {
        self.rows.len()
    }

    /// Reduces `vector` against the row space.
    pub fn reduce(&self, vector: &BitVector) -> Result<BitVector, CodeError> {
        self.check_len(vector)?;
        Ok(self.reduce_unchecked(vector.clone()))
    }

    /// Returns true when `vector` lies in the row space.
    pub fn contains(&self, vector: &BitVector) -> Result<bool, CodeError> {
        Ok(self.reduce(vector)?.is_zero())
    }

    /// Adds `vector` to the row space, returning false when it was already spanned.
    pub fn insert(&mut self, vector: &BitVector) -> Result<bool, CodeError> {
        let reduced = self.reduce(vector)?;
        let Some(pivot) = reduced.first_one() else {
            return Ok(false);
        };
        for row in &mut self.rows {
            if row.get(pivot) {
                row.xor_assign(&reduced);
            }
        }
        let position = self.pivots.partition_point(|&existing| existing < pivot);
        self.pivots.insert(position, pivot);
        self.rows.insert(position, reduced);
        Ok(true)
    }

    fn reduce_unchecked(&self, mut vector: BitVector) -> BitVector {
        for (row, &pivot) in self.rows.iter().zip(&self.pivots) {
            if vector.get(pivot) {
                vector.xor_assign(row);
            }
        }
        vector
    }

    fn check_len(&self, vector: &BitVector) -> Result<(), CodeError> {
        if vector.len() != self.columns {
            return Err(CodeError::dimension_mismatch(
                "reduced vector",
                self.columns,
                vector.len(),
            ));
        }
        Ok(())
    }
}

/// Computes the reduced row-echelon form and pivot columns. The input is not mutated.
pub fn row_reduce(matrix: &BitMatrix) -> Echelon {
    let mut rows = matrix.rows.clone();
    let mut pivots = Vec::new();
    let mut rank = 0;
    for col in 0..matrix.columns {
        if rank == rows.len() {
            break;
        }
        let Some(found) = (rank..rows.len()).find(|&idx| rows[idx].get(col)) else {
            continue;
        };
        rows.swap(rank, found);
        let pivot_row = rows[rank].clone();
        for (idx, row) in rows.iter_mut().enumerate() {
            if idx != rank && row.get(col) {
                row.xor_assign(&pivot_row);
            }
        }
        pivots.push(col);
        rank += 1;
    }
    rows.truncate(rank);
    Echelon {
        columns: matrix.columns,
        rows,
        pivots,
    }
}

/// Returns the number of linearly independent rows.
pub fn rank(matrix: &BitMatrix) -> usize {
    row_reduce(matrix).rank()
}

/// Returns a basis of `{x : matrix · x = 0}`, one vector per free column.
pub fn null_space(matrix: &BitMatrix) -> Vec<BitVector> {
    let echelon = row_reduce(matrix);
    let mut is_pivot = vec![false; matrix.columns];
    for &pivot in echelon.pivots() {
        is_pivot[pivot] = true;
    }
    (0..matrix.columns)
        .filter(|&col| !is_pivot[col])
        .map(|free| {
            let mut solution = BitVector::zeros(matrix.columns);
            solution.set(free, true);
            for (row, &pivot) in echelon.rows().iter().zip(echelon.pivots()) {
                if row.get(free) {
                    solution.set(pivot, true);
                }
            }
            solution
        })
        .collect()
}

/// Finds one solution of `matrix · x = rhs`, or `None` when the system is inconsistent.
pub fn solve(matrix: &BitMatrix, rhs: &BitVector) -> Result<Option<BitVector>, CodeError> {
    if rhs.len() != matrix.num_rows() {
        return Err(CodeError::dimension_mismatch(
            "right-hand side",
            matrix.num_rows(),
            rhs.len(),
        ));
    }
    let augmented_rows = matrix
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| row.with_trailing(rhs.get(idx)))
        .collect();
    let augmented = BitMatrix {
        columns: matrix.columns + 1,
        rows: augmented_rows,
    };
    let echelon = row_reduce(&augmented);
    if echelon.pivots().last() == Some(&matrix.columns) {
        return Ok(None);
    }
    let mut solution = BitVector::zeros(matrix.columns);
    for (row, &pivot) in echelon.rows().iter().zip(echelon.pivots()) {
        if row.get(matrix.columns) {
            solution.set(pivot, true);
        }
    }
    Ok(Some(solution))
}
