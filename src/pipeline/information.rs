//! Entropy and (conditional) mutual information over binned variables
//!
//! All quantities are in nats and are computed from joint bin counts.
//! The [`InformationSource`] trait is the seam between the selection loop and
//! the numeric work: the loop only asks for scores by candidate index.

use super::binning::BinId;
use super::matrix::BinMatrix;

/// Number of distinct bin ids needed to index `bins`.
fn bin_span(bins: &[BinId]) -> usize {
    bins.iter().copied().max().map(|m| m as usize + 1).unwrap_or(0)
}

/// Marginal entropy of a binned variable.
pub fn entropy(bins: &[BinId]) -> f64 {
    let n = bins.len();
    if n == 0 {
        return 0.0;
    }

    let mut counts = vec![0usize; bin_span(bins)];
    for &b in bins {
        counts[b as usize] += 1;
    }

    let n = n as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.ln()
        })
        .sum()
}

/// Mutual information between `dependent` and `predictor`, optionally
/// conditioned on `given`. All slices must have one entry per case.
///
/// Numerical noise below zero is clamped, so the result is never negative.
pub fn mutual_information(
    dependent: &[BinId],
    predictor: &[BinId],
    given: Option<&[BinId]>,
) -> f64 {
    debug_assert_eq!(dependent.len(), predictor.len());
    match given {
        None => unconditional(dependent, predictor),
        Some(z) => {
            debug_assert_eq!(dependent.len(), z.len());
            conditional(dependent, predictor, z)
        }
    }
}

fn unconditional(y: &[BinId], x: &[BinId]) -> f64 {
    let n = y.len();
    if n == 0 {
        return 0.0;
    }
    let ny = bin_span(y);
    let nx = bin_span(x);

    let mut joint = vec![0usize; ny * nx];
    let mut marg_y = vec![0usize; ny];
    let mut marg_x = vec![0usize; nx];
    for (&yb, &xb) in y.iter().zip(x) {
        joint[yb as usize * nx + xb as usize] += 1;
        marg_y[yb as usize] += 1;
        marg_x[xb as usize] += 1;
    }

    let total = n as f64;
    let mut info = 0.0;
    for iy in 0..ny {
        for ix in 0..nx {
            let c = joint[iy * nx + ix];
            if c == 0 {
                continue;
            }
            let c = c as f64;
            info += c / total * (total * c / (marg_y[iy] as f64 * marg_x[ix] as f64)).ln();
        }
    }
    info.max(0.0)
}

fn conditional(y: &[BinId], x: &[BinId], z: &[BinId]) -> f64 {
    let n = y.len();
    if n == 0 {
        return 0.0;
    }
    let ny = bin_span(y);
    let nx = bin_span(x);
    let nz = bin_span(z);

    let mut yxz = vec![0usize; ny * nx * nz];
    let mut xz = vec![0usize; nx * nz];
    let mut yz = vec![0usize; ny * nz];
    let mut cz = vec![0usize; nz];
    for ((&yb, &xb), &zb) in y.iter().zip(x).zip(z) {
        let (yb, xb, zb) = (yb as usize, xb as usize, zb as usize);
        yxz[(yb * nx + xb) * nz + zb] += 1;
        xz[xb * nz + zb] += 1;
        yz[yb * nz + zb] += 1;
        cz[zb] += 1;
    }

    let total = n as f64;
    let mut info = 0.0;
    for iy in 0..ny {
        for ix in 0..nx {
            for iz in 0..nz {
                let c = yxz[(iy * nx + ix) * nz + iz];
                if c == 0 {
                    continue;
                }
                let c = c as f64;
                let ratio = cz[iz] as f64 * c / (xz[ix * nz + iz] as f64 * yz[iy * nz + iz] as f64);
                info += c / total * ratio.ln();
            }
        }
    }
    info.max(0.0)
}

/// Entropy of the agree/disagree indicator between two label sequences.
///
/// Zero when every case agrees or every case disagrees.
pub fn error_entropy(dependent: &[BinId], predictor: &[BinId]) -> f64 {
    let n = dependent.len();
    let agree = dependent
        .iter()
        .zip(predictor)
        .filter(|(a, b)| a == b)
        .count();

    if agree == 0 || agree == n {
        return 0.0;
    }
    let p = agree as f64 / n as f64;
    -p * p.ln() - (1.0 - p) * (1.0 - p).ln()
}

/// Fano-style bound, in bits, clipped at zero.
pub fn fano_bound(target_entropy: f64, information: f64, error_entropy: f64) -> f64 {
    ((target_entropy - information - error_entropy) / std::f64::consts::LN_2).max(0.0)
}

/// Scores consumed by the selection loop, addressed by candidate index.
pub trait InformationSource {
    /// Number of candidate predictors.
    fn candidate_count(&self) -> usize;

    /// I(Y;X) for candidate `candidate`.
    fn mutual_information(&self, candidate: usize) -> f64;

    /// I(Y;X|Z) where X is `candidate` and Z is candidate `given`.
    fn conditional_mutual_information(&self, candidate: usize, given: usize) -> f64;
}

/// [`InformationSource`] backed by binned data.
#[derive(Debug, Clone, Copy)]
pub struct BinnedInformation<'a> {
    dependent: &'a [BinId],
    predictors: &'a BinMatrix,
}

impl<'a> BinnedInformation<'a> {
    pub fn new(dependent: &'a [BinId], predictors: &'a BinMatrix) -> Self {
        assert_eq!(
            dependent.len(),
            predictors.n_cases(),
            "dependent and predictor case counts differ"
        );
        Self {
            dependent,
            predictors,
        }
    }

    pub fn dependent(&self) -> &'a [BinId] {
        self.dependent
    }

    pub fn predictors(&self) -> &'a BinMatrix {
        self.predictors
    }
}

impl InformationSource for BinnedInformation<'_> {
    fn candidate_count(&self) -> usize {
        self.predictors.n_vars()
    }

    fn mutual_information(&self, candidate: usize) -> f64 {
        mutual_information(self.dependent, self.predictors.row(candidate), None)
    }

    fn conditional_mutual_information(&self, candidate: usize, given: usize) -> f64 {
        mutual_information(
            self.dependent,
            self.predictors.row(candidate),
            Some(self.predictors.row(given)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_entropy_balanced_binary() {
        let h = entropy(&[0, 1, 0, 1]);
        assert!((h - std::f64::consts::LN_2).abs() < EPS);
    }

    #[test]
    fn test_entropy_constant_is_zero() {
        assert_eq!(entropy(&[1, 1, 1]), 0.0);
        assert_eq!(entropy(&[]), 0.0);
    }

    #[test]
    fn test_identical_variables_share_full_entropy() {
        let y = [0, 1, 1, 0, 1, 0];
        let mi = mutual_information(&y, &y, None);
        assert!((mi - entropy(&y)).abs() < EPS);
    }

    #[test]
    fn test_independent_variables_have_zero_information() {
        let y = [0, 0, 1, 1];
        let x = [0, 1, 0, 1];
        assert!(mutual_information(&y, &x, None).abs() < EPS);
    }

    #[test]
    fn test_conditioning_on_copy_removes_information() {
        let y = [0, 1, 1, 0, 1, 0, 0, 1];
        let x = [0, 1, 1, 0, 1, 1, 0, 1];
        assert!(mutual_information(&y, &x, None) > 0.0);
        assert!(mutual_information(&y, &x, Some(&x)).abs() < EPS);
    }

    #[test]
    fn test_xor_is_only_visible_conditionally() {
        // Y = X xor Z: neither alone is informative, together they determine Y
        let x: [BinId; 8] = [0, 0, 1, 1, 0, 0, 1, 1];
        let z: [BinId; 8] = [0, 1, 0, 1, 0, 1, 0, 1];
        let y: Vec<BinId> = x.iter().zip(&z).map(|(a, b)| a ^ b).collect();
        assert!(mutual_information(&y, &x, None).abs() < EPS);
        let cmi = mutual_information(&y, &x, Some(&z));
        assert!((cmi - std::f64::consts::LN_2).abs() < EPS);
    }

    #[test]
    fn test_error_entropy_degenerate_cases() {
        assert_eq!(error_entropy(&[0, 1, 1], &[0, 1, 1]), 0.0);
        assert_eq!(error_entropy(&[0, 1, 1], &[1, 0, 0]), 0.0);
        let half = error_entropy(&[0, 1], &[0, 0]);
        assert!((half - std::f64::consts::LN_2).abs() < EPS);
    }

    #[test]
    fn test_fano_bound_clipped_and_in_bits() {
        assert_eq!(fano_bound(0.5, 0.6, 0.0), 0.0);
        let b = fano_bound(std::f64::consts::LN_2, 0.0, 0.0);
        assert!((b - 1.0).abs() < EPS);
    }

    #[test]
    fn test_binned_information_source() {
        let y = vec![0, 1, 0, 1];
        let m = BinMatrix::from_rows(vec![vec![0, 1, 0, 1], vec![0, 0, 1, 1]]).unwrap();
        let src = BinnedInformation::new(&y, &m);
        assert_eq!(src.candidate_count(), 2);
        assert!((src.mutual_information(0) - std::f64::consts::LN_2).abs() < EPS);
        assert!(src.mutual_information(1).abs() < EPS);
        assert!(src.conditional_mutual_information(0, 0).abs() < EPS);
    }
}
