//! Attribute dissimilarity measures.
//!
//! The objective only needs a non-negative scalar per area pair; any measure
//! satisfying that can be plugged in, [`Euclidean`] is the default.

/// A non-negative, symmetric distance between two attribute vectors.
pub trait Dissimilarity {
    fn dissimilarity(&self, a: &[f64], b: &[f64]) -> f64;
}

/// Euclidean norm of the element-wise difference.
///
/// Scalars are the one-element case. If the vectors differ in length the
/// missing entries are treated as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Dissimilarity for Euclidean {
    fn dissimilarity(&self, a: &[f64], b: &[f64]) -> f64 {
        let len = a.len().max(b.len());
        (0..len)
            .map(|i| {
                let x = a.get(i).copied().unwrap_or(0.0);
                let y = b.get(i).copied().unwrap_or(0.0);
                (x - y) * (x - y)
            })
            .sum::<f64>()
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_distance_is_absolute_difference() {
        let d = Euclidean.dissimilarity(&[726.7], &[623.6]);
        assert!((d - 103.1).abs() < 1e-9);
    }

    #[test]
    fn vector_distance_matches_norm() {
        let d = Euclidean.dissimilarity(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = [1.5, -2.0, 7.0];
        let b = [0.5, 3.0, -1.0];
        assert_eq!(
            Euclidean.dissimilarity(&a, &b),
            Euclidean.dissimilarity(&b, &a)
        );
    }

    #[test]
    fn identical_vectors_have_zero_distance() {
        let a = [2.0, 4.0];
        assert_eq!(Euclidean.dissimilarity(&a, &a), 0.0);
    }

    #[test]
    fn shorter_vector_is_zero_padded() {
        let d = Euclidean.dissimilarity(&[3.0], &[3.0, 4.0]);
        assert!((d - 4.0).abs() < 1e-12);
    }
}
