use std::sync::Arc;

use approx::{
    assert_abs_diff_eq,
    assert_relative_eq
};

use compquad::evaluation::comparator::compare;
use compquad::evaluation::evaluator::Evaluator;
use compquad::math::integrand::integrand::Integrand;
use compquad::math::integrand::polynomial::Polynomial;
use compquad::math::integrand::xexpnegx::XExpNegX;
use compquad::math::quadrature::compositesimpson::composite_simpson;
use compquad::math::quadrature::compositetrapezoid::composite_trapezoid;
use compquad::math::quadrature::gausslegendre::gauss_legendre_two_point;
use compquad::math::quadrature::interval::Interval;
use compquad::math::quadrature::quadratureerror::QuadratureErrorKind;
use compquad::report::reportsink::ReportSink;
use compquad::report::textreportsink::TextReportSink;
use compquad::scenario::Scenario;

fn exact() -> f64 {
    1.0 - 2.0 / std::f64::consts::E
}

#[test]
fn reference_estimates() {
    let f = XExpNegX::new();
    let trapezoid = composite_trapezoid(&f, 0.0, 1.0, 0.05).unwrap();
    let simpson = composite_simpson(&f, 0.0, 1.0, 0.05).unwrap();
    let gauss = gauss_legendre_two_point(&f, 0.0, 1.0).unwrap();

    assert_relative_eq!(trapezoid, 0.2640328039768298, max_relative = 1e-12);
    assert_relative_eq!(simpson, 0.2642410390740825, max_relative = 1e-12);
    assert_relative_eq!(gauss, 0.2647402242216865, max_relative = 1e-12);

    assert_abs_diff_eq!((trapezoid - exact()).abs(), 2.0831368e-4, epsilon = 1e-10);
    assert!((simpson - exact()).abs() < 1e-7);
    assert_abs_diff_eq!((gauss - exact()).abs(), 4.991066e-4, epsilon = 1e-9);
}

#[test]
fn reference_ranking_is_simpson_trapezoid_gauss() {
    let report = Scenario::reference().run(false).unwrap();
    let comparison = report.comparison();
    assert_eq!(comparison.best().method(), "Composite Simpson's Rule");
    assert_eq!(comparison.records()[1].method(), "Composite Trapezoid Rule");
    assert_eq!(comparison.worst().method(), "Composite Gaussian Quadrature Rule");

    let errors: Vec<f64> = comparison.records().iter().map(|r| r.absolute_error()).collect();
    assert!(errors.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn parallel_reference_run_is_identical() {
    let sequential = Scenario::reference().run(false).unwrap();
    let parallel = Scenario::reference().run(true).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn all_rules_integrate_cubics_exactly() {
    let p = Polynomial::new(vec![0.5, -1.5, 2.0, 1.25]);
    let (a, b) = (-0.75, 2.25);
    let exact = p.exact_integral(a, b).unwrap();
    assert_abs_diff_eq!(composite_simpson(&p, a, b, 0.1).unwrap(), exact, epsilon = 1e-12);
    assert_abs_diff_eq!(gauss_legendre_two_point(&p, a, b).unwrap(), exact, epsilon = 1e-12);
}

#[test]
fn constant_function_under_both_step_rules() {
    for (a, b, h) in [(0.0, 1.0, 0.05), (-3.0, 4.0, 0.9), (2.0, 2.5, 0.5)] {
        assert_relative_eq!(composite_trapezoid(&|_x: f64| 7.0, a, b, h).unwrap(), 7.0 * (b - a), max_relative = 1e-13);
        assert_relative_eq!(composite_simpson(&|_x: f64| 7.0, a, b, h).unwrap(), 7.0 * (b - a), max_relative = 1e-13);
    }
}

#[test]
fn step_equal_to_width_keeps_simpson_valid() {
    let simpson = composite_simpson(&|x: f64| x * x * x, 0.0, 2.0, 2.0).unwrap();
    assert_abs_diff_eq!(simpson, 4.0, epsilon = 1e-14);
    let trapezoid = composite_trapezoid(&|x: f64| x * x * x, 0.0, 2.0, 2.0).unwrap();
    assert_abs_diff_eq!(trapezoid, 8.0, epsilon = 1e-14);
}

#[test]
fn nan_integrand_fails_the_whole_evaluation() {
    let scenario = Scenario::new(
        "log".to_owned(),
        Arc::new(|x: f64| x.ln()),
        Interval::new(-1.0, 1.0),
        0.1
    ).with_exact(0.0);
    let error = scenario.run(false).unwrap_err();
    assert_eq!(error.rule(), Some("Composite Trapezoid Rule"));
    assert!(error.to_string().contains("not finite"));
}

#[test]
fn error_kinds() {
    let f = |x: f64| x;
    assert_eq!(composite_trapezoid(&f, 0.0, 1.0, -1.0).unwrap_err().kind(), QuadratureErrorKind::InvalidArgument);
    assert_eq!(composite_simpson(&f, 1.0, 0.0, 0.1).unwrap_err().kind(), QuadratureErrorKind::InvalidArgument);
    let pole = |x: f64| 1.0 / (x - 0.5);
    assert_eq!(composite_simpson(&pole, 0.0, 1.0, 0.25).unwrap_err().kind(), QuadratureErrorKind::NumericalFailure);
}

#[test]
fn custom_evaluator_and_text_report() {
    let f = XExpNegX::new();
    let interval = Interval::new(0.0, 1.0);
    let scenario = Scenario::reference();
    let evaluator = Evaluator::new(scenario.rules().unwrap());
    let estimates = evaluator.evaluate(&f, &interval).unwrap();
    let comparison = compare(&estimates, exact()).unwrap();
    assert_eq!(comparison.best().method(), "Composite Simpson's Rule");

    let report = scenario.run(false).unwrap();
    let mut sink = TextReportSink::new(Vec::new());
    sink.write_report(&report).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert!(text.contains("The best estimate is Composite Simpson's Rule with an absolute error of "));
    assert!(text.contains("The worst estimate is Composite Gaussian Quadrature Rule with an absolute error of "));
    assert!(text.contains("Exact integral: 0.26424111765711533"));
}
