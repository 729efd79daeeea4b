//! Integration tests chaining analysis, stationarity testing and forecasting.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tslib::core::{Series, SeriesAnalysis};
use tslib::models::exponential::{HoltLinearTrend, HoltWinters, SimpleExponentialSmoothing};
use tslib::models::{BoxedForecaster, Forecaster};
use tslib::regression::{ar_coefficients, ArMethod, RidgeRegression};
use tslib::validation::{
    adf_test, adf_test_with_config, difference_until_stationary, integrate, AdfConfig,
};

const PATTERN: [f64; 4] = [0.8, 1.2, 1.1, 0.9];

fn white_noise(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn ar1(n: usize, phi: f64, seed: u64) -> Vec<f64> {
    let noise = white_noise(n, seed);
    let mut x = vec![0.0; n];
    for t in 1..n {
        x[t] = phi * x[t - 1] + noise[t];
    }
    x
}

#[test]
fn forecasters_share_one_interface() {
    let series = Series::new((0..48).map(|i| 100.0 * PATTERN[i % 4]).collect()).unwrap();

    let models: Vec<BoxedForecaster> = vec![
        Box::new(SimpleExponentialSmoothing::new(0.3).unwrap()),
        Box::new(HoltLinearTrend::new(0.3, 0.1).unwrap()),
        Box::new(HoltWinters::new(0.5, 0.4, 0.1, 4).unwrap()),
    ];

    let names: Vec<&str> = models.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["SES", "Holt", "HoltWinters"]);

    for model in &models {
        let forecast = model.forecast(&series, 4).unwrap();
        assert_eq!(forecast.len(), 52, "{}", model.name());
        assert_eq!(forecast.predictions().len(), 4);
        assert!(forecast.values().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn forecast_values_validates_raw_input() {
    let model = SimpleExponentialSmoothing::new(0.5).unwrap();
    assert!(model.forecast_values(&[], 3).is_err());
    assert!(model.forecast_values(&[1.0, f64::NAN], 3).is_err());
    assert_eq!(model.forecast_values(&[2.0, 2.0], 1).unwrap().len(), 3);
}

#[test]
fn holt_winters_tracks_the_seasonal_pattern() {
    let series = Series::new((0..48).map(|i| 100.0 * PATTERN[i % 4]).collect()).unwrap();
    let model = HoltWinters::new(0.5, 0.4, 0.1, 4).unwrap();
    let forecast = model.forecast(&series, 4).unwrap();

    for (k, &value) in forecast.predictions().iter().enumerate() {
        let expected = 100.0 * PATTERN[(48 + k) % 4];
        assert_relative_eq!(value, expected, max_relative = 3e-3);
    }
}

#[test]
fn trend_is_differenced_then_forecast_and_integrated() {
    let line: Vec<f64> = (0..80).map(|i| 10.0 + 0.5 * i as f64).collect();
    assert!(adf_test(&line, None).unwrap().needs_differencing());

    let (differenced, d) = difference_until_stationary(&line, 2, &AdfConfig::default()).unwrap();
    assert_eq!(d, 1);

    let diff_series = Series::new(differenced).unwrap();
    let forecast = SimpleExponentialSmoothing::new(0.4)
        .unwrap()
        .forecast(&diff_series, 5)
        .unwrap();
    let restored = integrate(forecast.values(), &line, d).unwrap();

    assert_eq!(restored.len(), line.len() + 5);
    for (i, &v) in restored.iter().enumerate() {
        assert_relative_eq!(v, 10.0 + 0.5 * i as f64, epsilon = 1e-9);
    }
}

#[test]
fn noise_is_stationary_without_differencing() {
    let noise = white_noise(300, 42);
    let (out, d) = difference_until_stationary(&noise, 2, &AdfConfig::default()).unwrap();
    assert_eq!(d, 0);
    assert_eq!(out, noise);

    let strict = AdfConfig::default().with_lag(2).with_critical_value(-4.0);
    let result = adf_test_with_config(&noise, &strict).unwrap();
    assert_eq!(result.lag, 2);
    assert!(result.is_stationary);
}

#[test]
fn analysis_summary_of_autoregressive_series() {
    let series = Series::new(ar1(400, 0.5, 2024)).unwrap();
    let analysis = SeriesAnalysis::new(&series).with_max_lag(4);

    let acf = analysis.acf().unwrap();
    let pacf = analysis.pacf().unwrap();
    assert!((acf[1] - 0.5).abs() < 0.15, "acf[1] = {}", acf[1]);
    assert_relative_eq!(pacf[1], acf[1], epsilon = 1e-12);
    for &p in &pacf[2..] {
        assert!(p.abs() < 0.2, "pacf beyond lag 1: {}", p);
    }

    let summary = analysis.summary().unwrap();
    assert!(summary.is_stationary);
    assert_eq!(summary.max, analysis.max());
    assert!(summary.to_string().contains("Stationary: true"));
}

#[test]
fn ridge_without_penalty_matches_autoregressive_least_squares() {
    let x = ar1(250, 0.6, 7);
    let order = 2;

    let rows: Vec<Vec<f64>> = ((order - 1)..(x.len() - 1))
        .map(|i| (0..order).map(|j| x[i - j]).collect())
        .collect();
    let response: Vec<f64> = (order..x.len()).map(|t| x[t]).collect();

    let ridge = RidgeRegression::from_rows(&rows, &response)
        .unwrap()
        .fit(0.0)
        .unwrap();
    let ar = ar_coefficients(&x, order, false, ArMethod::LeastSquares).unwrap();

    for (r, a) in ridge.coefficients.iter().zip(ar.coefficients()) {
        assert_relative_eq!(r, a, epsilon = 1e-8);
    }
    assert!((ar.coefficients()[0] - 0.6).abs() < 0.15);
}

#[test]
fn burg_and_least_squares_agree_on_long_series() {
    let x = ar1(1000, -0.4, 99);
    let ls = ar_coefficients(&x, 1, true, ArMethod::LeastSquares).unwrap();
    let burg = ar_coefficients(&x, 1, true, ArMethod::Burg).unwrap();

    assert!((ls.coefficients()[0] - burg.coefficients()[0]).abs() < 0.02);
    assert!(ls.rmse(&x).unwrap() > 0.0);
}
