//! Triangular coefficient tables.
//!
//! Row `i` of a table holds the coefficients of `c^i`, one per temperature
//! power, and has `ORDER - i` entries. Embedded tables are built with
//! [`CoefficientMatrix::triangular`], whose signature fixes the shape at
//! compile time. Tables arriving as data go through
//! [`CoefficientMatrix::from_rows`] (also used by serde), which checks the
//! shape once at load time.

use scp_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::{FluidError, FluidResult};

/// Number of rows, and the length of the first row.
pub const ORDER: usize = 4;

/// Triangular coefficient matrix for a fit of total degree `ORDER - 1`
/// in concentration and temperature.
///
/// Storage is square; cells with `i + j >= ORDER` are always zero and are
/// never read by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Real>>", into = "Vec<Vec<Real>>")]
pub struct CoefficientMatrix {
    cells: [[Real; ORDER]; ORDER],
}

impl CoefficientMatrix {
    /// Build a table from its four rows.
    pub const fn triangular(r0: [Real; 4], r1: [Real; 3], r2: [Real; 2], r3: [Real; 1]) -> Self {
        Self {
            cells: [
                r0,
                [r1[0], r1[1], r1[2], 0.0],
                [r2[0], r2[1], 0.0, 0.0],
                [r3[0], 0.0, 0.0, 0.0],
            ],
        }
    }

    /// Table for a fluid without a concentration axis: only the `c^0` row.
    pub const fn temperature_only(r0: [Real; 4]) -> Self {
        Self::triangular(r0, [0.0; 3], [0.0; 2], [0.0; 1])
    }

    /// Validate and build a table from nested rows.
    ///
    /// Rows must have 4, 3, 2 and 1 entries, in that order.
    pub fn from_rows<R: AsRef<[Real]>>(rows: &[R]) -> FluidResult<Self> {
        if rows.is_empty() {
            return Err(FluidError::EmptyCoefficients);
        }
        if rows.len() != ORDER {
            // Report the first missing or surplus row.
            let row = rows.len().min(ORDER);
            let expected = ORDER.saturating_sub(row);
            let found = rows.get(row).map_or(0, |r| r.as_ref().len());
            return Err(FluidError::MalformedCoefficients {
                row,
                expected,
                found,
            });
        }

        let mut cells = [[0.0; ORDER]; ORDER];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let expected = Self::row_len(i);
            if row.len() != expected {
                return Err(FluidError::MalformedCoefficients {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            cells[i][..expected].copy_from_slice(row);
        }
        Ok(Self { cells })
    }

    /// Number of coefficients in row `i`.
    pub const fn row_len(i: usize) -> usize {
        ORDER - i
    }

    /// Coefficients of `c^i`, ordered by increasing temperature power.
    pub fn row(&self, i: usize) -> &[Real] {
        &self.cells[i][..Self::row_len(i)]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Real]> + '_ {
        (0..ORDER).map(move |i| self.row(i))
    }
}

impl TryFrom<Vec<Vec<Real>>> for CoefficientMatrix {
    type Error = FluidError;

    fn try_from(rows: Vec<Vec<Real>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<CoefficientMatrix> for Vec<Vec<Real>> {
    fn from(matrix: CoefficientMatrix) -> Self {
        matrix.rows().map(<[Real]>::to_vec).collect()
    }
}

/// How the polynomial value maps onto the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitForm {
    /// The polynomial is the property.
    #[default]
    Linear,
    /// The polynomial is the natural log of the property.
    Exponential,
}

impl FitForm {
    pub fn apply(self, raw: Real) -> Real {
        match self {
            FitForm::Linear => raw,
            FitForm::Exponential => raw.exp(),
        }
    }
}

/// A coefficient table plus the form its polynomial is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyFit {
    #[serde(default)]
    pub form: FitForm,
    pub coefficients: CoefficientMatrix,
}

impl PropertyFit {
    pub const fn linear(coefficients: CoefficientMatrix) -> Self {
        Self {
            form: FitForm::Linear,
            coefficients,
        }
    }

    pub const fn exponential(coefficients: CoefficientMatrix) -> Self {
        Self {
            form: FitForm::Exponential,
            coefficients,
        }
    }

    /// Evaluate at an already clamped `(temperature, concentration)` pair.
    pub fn evaluate(&self, temperature: Real, concentration: Real) -> Real {
        self.form.apply(crate::engine::evaluate_property(
            &self.coefficients,
            temperature,
            concentration,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CoefficientMatrix {
        CoefficientMatrix::triangular(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0],
            [8.0, 9.0],
            [10.0],
        )
    }

    #[test]
    fn rows_follow_triangle() {
        let m = sample();
        let lens: Vec<usize> = m.rows().map(<[Real]>::len).collect();
        assert_eq!(lens, vec![4, 3, 2, 1]);
        assert_eq!(m.row(2), &[8.0, 9.0]);
    }

    #[test]
    fn from_rows_accepts_triangle() {
        let rows = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0],
            vec![8.0, 9.0],
            vec![10.0],
        ];
        assert_eq!(CoefficientMatrix::from_rows(&rows).unwrap(), sample());
    }

    #[test]
    fn from_rows_rejects_bad_row_length() {
        let rows = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0],
            vec![8.0, 9.0, 1.0],
            vec![10.0],
        ];
        let err = CoefficientMatrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            FluidError::MalformedCoefficients {
                row: 2,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn from_rows_rejects_missing_and_extra_rows() {
        let empty: Vec<Vec<Real>> = Vec::new();
        assert_eq!(
            CoefficientMatrix::from_rows(&empty).unwrap_err(),
            FluidError::EmptyCoefficients
        );

        let short = vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0]];
        assert_eq!(
            CoefficientMatrix::from_rows(&short).unwrap_err(),
            FluidError::MalformedCoefficients {
                row: 2,
                expected: 2,
                found: 0
            }
        );

        let long = vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![5.0, 6.0, 7.0],
            vec![8.0, 9.0],
            vec![10.0],
            vec![11.0],
        ];
        assert!(matches!(
            CoefficientMatrix::from_rows(&long).unwrap_err(),
            FluidError::MalformedCoefficients { row: 4, .. }
        ));
    }

    #[test]
    fn vec_conversion_keeps_shape() {
        let rows: Vec<Vec<Real>> = sample().into();
        assert_eq!(rows[0], vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(rows[3], vec![10.0]);
        assert_eq!(CoefficientMatrix::try_from(rows).unwrap(), sample());
    }

    #[test]
    fn temperature_only_zeroes_concentration_rows() {
        let m = CoefficientMatrix::temperature_only([1.0, 2.0, 3.0, 4.0]);
        assert!(m.rows().skip(1).flatten().all(|&c| c == 0.0));
    }

    #[test]
    fn exponential_fit_takes_exp() {
        let fit = PropertyFit::exponential(CoefficientMatrix::temperature_only([
            0.0, 0.0, 0.0, 0.0,
        ]));
        assert_eq!(fit.evaluate(25.0, 0.0), 1.0);
        assert_eq!(FitForm::Linear.apply(-2.5), -2.5);
    }
}
