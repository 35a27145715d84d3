//! Eigen decomposition of a symmetric 3×3 matrix: `A = V · diag(λ) · Vᵀ`.
//!
//! Classical Jacobi: repeatedly annihilate the largest off-diagonal entry
//! with a plane rotation until it is negligible relative to `‖A‖_F`.

use crate::config::EIGEN_MAX_SWEEPS;
use crate::core::vec3::{Mat3, Vec3};

/// Eigenvalues sorted ascending, with the matching unit eigenvectors as
/// columns.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SymmetricEigen {
    pub(crate) eigenvalues: Vec3,
    pub(crate) eigenvectors: Mat3,
}

impl SymmetricEigen {
    /// Decomposes `matrix`, which is assumed symmetric. Only the mean of each
    /// off-diagonal pair is used.
    pub(crate) fn new(matrix: Mat3) -> Self {
        let columns = matrix.to_cols_array_2d();
        let mut d = [[0.0_f64; 3]; 3];
        for (i, row) in d.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = 0.5 * (columns[j][i] + columns[i][j]);
            }
        }
        let mut v = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

        let norm = d.iter().flatten().map(|x| x * x).sum::<f64>().sqrt();
        let tolerance = f64::EPSILON * norm;

        for _ in 0..EIGEN_MAX_SWEEPS * 3 {
            let (p, q) = [(0, 1), (0, 2), (1, 2)]
                .into_iter()
                .fold((0, 1), |best, (i, j)| {
                    if d[i][j].abs() > d[best.0][best.1].abs() {
                        (i, j)
                    } else {
                        best
                    }
                });

            let apq = d[p][q];
            if apq.abs() <= tolerance {
                break;
            }
            let app = d[p][p];
            let aqq = d[q][q];

            let theta = (aqq - app) / (2.0 * apq);
            let t = if theta >= 0.0 {
                (theta + (1.0 + theta * theta).sqrt()).recip()
            } else {
                -(-theta + (1.0 + theta * theta).sqrt()).recip()
            };
            let c = (1.0 + t * t).sqrt().recip();
            let s = t * c;

            d[p][p] = app - t * apq;
            d[q][q] = aqq + t * apq;
            d[p][q] = 0.0;
            d[q][p] = 0.0;

            let r = 3 - p - q;
            let dip = d[r][p];
            let diq = d[r][q];
            d[r][p] = c * dip - s * diq;
            d[p][r] = d[r][p];
            d[r][q] = s * dip + c * diq;
            d[q][r] = d[r][q];

            for row in v.iter_mut() {
                let vip = row[p];
                let viq = row[q];
                row[p] = c * vip - s * viq;
                row[q] = s * vip + c * viq;
            }
        }

        let mut order = [0usize, 1, 2];
        order.sort_by(|&a, &b| d[a][a].total_cmp(&d[b][b]));

        let column = |j: usize| Vec3::new(v[0][j], v[1][j], v[2][j]);
        Self {
            eigenvalues: Vec3::new(d[order[0]][order[0]], d[order[1]][order[1]], d[order[2]][order[2]]),
            eigenvectors: Mat3::from_cols(column(order[0]), column(order[1]), column(order[2])),
        }
    }
}
