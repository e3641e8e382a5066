//! Catalogue values on small samples computed by hand

mod common;

use approx::assert_relative_eq;
use common::*;
use robust_skewness::*;

#[test]
fn test_reference_sample() {
    // mean 4, median 3, mode 1, half-sample mode 2, population std sqrt(10),
    // mean absolute deviation from the median 2.2
    let x = &REFERENCE;
    let sd = 10.0_f64.sqrt();

    assert_relative_eq!(pearson_mode_skew(x).unwrap(), 3.0 / sd, epsilon = EPSILON);
    assert_relative_eq!(pearson_halfmode_skew(x).unwrap(), 2.0 / sd, epsilon = EPSILON);
    assert_relative_eq!(bickel_mode_skew(x).unwrap(), 0.4, epsilon = EPSILON);
    assert_relative_eq!(pearson_median_skew(x).unwrap(), 0.9486832980505138, epsilon = EPSILON);
    assert_relative_eq!(medeen_skew(x).unwrap(), 1.0 / 2.2, epsilon = EPSILON);
    assert_relative_eq!(bowley_skew(x).unwrap(), 0.0, epsilon = EPSILON);
    assert_relative_eq!(groeneveld_skew(x).unwrap(), 0.0, epsilon = EPSILON);
    assert_relative_eq!(kelly_skew(x).unwrap(), 3.0 / 6.2, epsilon = EPSILON);
    assert_relative_eq!(hossain_adnan_skew(x).unwrap(), 1.0 / 2.2, epsilon = EPSILON);
    assert_relative_eq!(forhad_shorna_rank_skew(x).unwrap(), 9.0 / 11.0, epsilon = EPSILON);
    assert_relative_eq!(auc_skew_gamma(x, 0.25).unwrap(), 5.0 / 72.0, epsilon = EPSILON);
    assert_relative_eq!(wauc_skew_gamma(x, 0.25).unwrap(), 5.0 / 144.0, epsilon = EPSILON);
}

#[test]
fn test_geometric_sample() {
    // 1, 2, 4, ..., 256: quartiles 4, 16, 64 and deciles 1.8, 16, 153.6
    let x = geometric(9);

    assert_relative_eq!(bowley_skew(&x).unwrap(), 0.6, epsilon = EPSILON);
    assert_relative_eq!(groeneveld_skew(&x).unwrap(), 3.0, epsilon = EPSILON);
    assert_relative_eq!(kelly_skew(&x).unwrap(), 123.4 / 151.8, epsilon = EPSILON);
    // midrange 128.5 sits between 128 and 256
    assert_relative_eq!(forhad_shorna_rank_skew(&x).unwrap(), 35.0 / 37.0, epsilon = EPSILON);
    // half-sample mode 1.5: one value below it, eight above
    assert_relative_eq!(bickel_mode_skew(&x).unwrap(), 7.0 / 9.0, epsilon = EPSILON);
}

#[test]
fn test_free_functions_match_estimators() {
    let x = generate_lognormal(200, 0.8, 7);
    for (method, value) in estimate_all(&x).unwrap() {
        let estimator = catalogue()
            .into_iter()
            .find(|e| e.name() == method.name())
            .unwrap();
        assert_eq!(estimator.estimate(&x).unwrap(), value, "{method}");
    }
}

#[test]
fn test_missing_values_are_ignored_everywhere() {
    let clean = generate_lognormal(60, 0.5, 11);
    let mut dirty = clean.clone();
    dirty.insert(0, f64::NAN);
    dirty.insert(30, f64::NAN);
    dirty.push(f64::NAN);

    for estimator in catalogue() {
        let a = estimator.estimate(&clean).unwrap();
        let b = estimator.estimate(&dirty).unwrap();
        assert!(same_value(a, b, 1e-12), "{}: {a} vs {b}", estimator.name());
    }
}

#[test]
fn test_order_does_not_matter() {
    let x = generate_lognormal(41, 1.0, 3);
    let mut reversed = x.clone();
    reversed.reverse();

    for estimator in catalogue() {
        let a = estimator.estimate(&x).unwrap();
        let b = estimator.estimate(&reversed).unwrap();
        assert!(same_value(a, b, 1e-12), "{}: {a} vs {b}", estimator.name());
    }
}

#[test]
fn test_constant_sample_is_never_an_error() {
    let x = [3.0; 8];
    for estimator in catalogue() {
        let value = estimator.estimate(&x).unwrap();
        if estimator.name() == "bickel_mode_skew" {
            // every sign is zero
            assert_eq!(value, 0.0);
        } else {
            assert!(value.is_nan(), "{}: {value}", estimator.name());
        }
    }
}

#[test]
fn test_empty_and_all_missing_samples() {
    let empty: Vec<f64> = vec![];
    let missing = [f64::NAN; 4];
    for estimator in catalogue() {
        assert!(estimator.estimate(&empty).unwrap().is_nan(), "{}", estimator.name());
        assert!(estimator.estimate(&missing).unwrap().is_nan(), "{}", estimator.name());
    }
}

#[test]
fn test_single_precision_agrees() {
    let x64 = generate_lognormal(100, 0.6, 5);
    let x32: Vec<f32> = x64.iter().map(|&v| v as f32).collect();

    assert_relative_eq!(bowley_skew(&x32).unwrap() as f64, bowley_skew(&x64).unwrap(), epsilon = 1e-4);
    assert_relative_eq!(medeen_skew(&x32).unwrap() as f64, medeen_skew(&x64).unwrap(), epsilon = 1e-4);
    assert_relative_eq!(
        auc_skew_gamma(&x32, DEFAULT_DP).unwrap() as f64,
        auc_skew_gamma(&x64, DEFAULT_DP).unwrap(),
        epsilon = 1e-4
    );
}
