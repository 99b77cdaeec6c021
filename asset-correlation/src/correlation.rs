//! Pearson correlation coefficient
//!
//! Degenerate input (empty, mismatched lengths, zero variance) resolves to 0.0.

use crate::{stats::mean, types::AlignedPair};

/// Pearson correlation coefficient of two equal-length sequences
/// Returns value from -1.0 to +1.0, or 0.0 when undefined
pub fn correlate(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() || xs.len() != ys.len() {
        return 0.0;
    }

    let mean_x = mean(xs);
    let mean_y = mean(ys);

    // Deviations are divided by their largest magnitude, so each sum of squares
    // lies in [1, n] and neither underflows nor overflows
    let scale_x = max_abs_deviation(xs, mean_x);
    let scale_y = max_abs_deviation(ys, mean_y);
    if scale_x == 0.0 || scale_y == 0.0 {
        return 0.0;
    }

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;

    for (x, y) in xs.iter().zip(ys) {
        let diff_x = (x - mean_x) / scale_x;
        let diff_y = (y - mean_y) / scale_y;
        cov += diff_x * diff_y;
        var_x += diff_x * diff_x;
        var_y += diff_y * diff_y;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }

    let r = cov / (var_x * var_y).sqrt();
    if r.is_finite() {
        r.clamp(-1.0, 1.0)
    } else {
        // Non-finite mean or deviations (e.g. values near f64::MAX)
        0.0
    }
}

fn max_abs_deviation(values: &[f64], mean: f64) -> f64 {
    values.iter().fold(0.0, |max, x| f64::max(max, (x - mean).abs()))
}

/// Correlation over the output of [`align`](crate::align::align)
pub fn correlate_pairs(pairs: &[AlignedPair]) -> f64 {
    let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.iter().map(|p| (p.value1, p.value2)).unzip();
    correlate(&xs, &ys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_perfect_positive() {
        let corr = correlate(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(corr, 1.0);
    }

    #[test]
    fn test_correlation_perfect_negative() {
        let corr = correlate(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(corr, -1.0);
    }

    #[test]
    fn test_correlation_degenerate_input() {
        struct TestCase {
            xs: Vec<f64>,
            ys: Vec<f64>,
        }

        let tests = vec![
            // TC0: both empty
            TestCase { xs: vec![], ys: vec![] },
            // TC1: mismatched lengths
            TestCase { xs: vec![1.0, 2.0, 3.0], ys: vec![1.0, 2.0] },
            // TC2: constant xs
            TestCase { xs: vec![7.0, 7.0, 7.0], ys: vec![1.0, 5.0, 2.0] },
            // TC3: constant ys
            TestCase { xs: vec![1.0, 5.0, 2.0], ys: vec![3.0, 3.0, 3.0] },
            // TC4: single element pair has no variance
            TestCase { xs: vec![1.0], ys: vec![2.0] },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            assert_eq!(correlate(&test.xs, &test.ys), 0.0, "TC{} failed", index);
        }
    }

    #[test]
    fn test_correlation_symmetric() {
        let a = [0.01, 0.02, -0.01, 0.03, -0.02, 0.005];
        let b = [0.02, 0.01, -0.02, 0.01, 0.00, 0.004];
        assert_eq!(correlate(&a, &b), correlate(&b, &a));
    }

    #[test]
    fn test_self_correlation_is_one() {
        struct TestCase {
            input: Vec<f64>,
        }

        let tests = vec![
            // TC0: ordinary prices
            TestCase { input: vec![101.2, 99.8, 100.4, 103.9, 98.1] },
            // TC1: tiny magnitudes, squared deviations would underflow
            TestCase { input: vec![1e-160, 2e-160, 3e-160] },
            // TC2: huge magnitudes, product of sums of squares would overflow
            TestCase { input: vec![1e80, 2e80, 3e80] },
            // TC3: huge magnitudes, squared deviations would overflow
            TestCase { input: vec![1e200, -2e200, 3e200, 5e199] },
        ];

        for (index, test) in tests.into_iter().enumerate() {
            let corr = correlate(&test.input, &test.input);
            assert!((corr - 1.0).abs() < 1e-12, "TC{} failed: {}", index, corr);
        }
    }

    #[test]
    fn test_correlation_scale_invariant() {
        let a = [0.01, 0.02, -0.01, 0.03, -0.02];
        let b = [0.02, 0.01, -0.02, 0.01, 0.00];
        let tiny_a: Vec<f64> = a.iter().map(|x| x * 1e-150).collect();
        let huge_b: Vec<f64> = b.iter().map(|y| y * 1e150).collect();

        assert!((correlate(&tiny_a, &huge_b) - correlate(&a, &b)).abs() < 1e-9);
    }

    #[test]
    fn test_correlation_always_bounded() {
        let inputs: [(&[f64], &[f64]); 4] = [
            (&[1e-300, 2e-300, 3e-300], &[3e-300, 1e-300, 2e-300]),
            (&[1e150, -1e150, 1e150], &[1e150, 1e150, -1e150]),
            (&[f64::MAX, -f64::MAX, 0.0], &[1.0, 2.0, 3.0]),
            (&[0.1, 0.2, 0.3, 0.4], &[0.3, 0.6, 0.9, 1.2]),
        ];

        for (index, (xs, ys)) in inputs.into_iter().enumerate() {
            let corr = correlate(xs, ys);
            assert!(corr.is_finite(), "TC{} not finite: {}", index, corr);
            assert!((-1.0..=1.0).contains(&corr), "TC{} out of range: {}", index, corr);
        }
    }

    #[test]
    fn test_correlate_pairs() {
        let pairs = vec![
            AlignedPair::new(1.0, 10.0),
            AlignedPair::new(2.0, 20.0),
            AlignedPair::new(3.0, 30.0),
        ];
        assert!((correlate_pairs(&pairs) - 1.0).abs() < 1e-12);
        assert_eq!(correlate_pairs(&[]), 0.0);
    }
}
