use std::thread;

use approx::assert_relative_eq;

use rootfind_solvers::{
    Config, Error, Status, bisection, newton_raphson, regula_falsi, secant,
};

const TOL: f64 = 1e-6;

type Case = (&'static str, fn(f64) -> f64, [f64; 2], f64);

/// Bracketed test functions with their known roots.
fn bracketed_cases() -> [Case; 6] {
    let cases: [Case; 6] = [
        ("linear", |x| x - 0.5, [0.0, 1.0], 0.5),
        ("quadratic", |x| x * x - 2.0, [0.0, 2.0], 2.0_f64.sqrt()),
        ("cubic", |x| x.powi(3) - x - 1.0, [1.0, 2.0], 1.324_717_957_244_746),
        ("cosine", |x| x.cos() - x, [0.0, 1.0], 0.739_085_133_215_160_6),
        ("exponential", |x| x.exp() - 3.0, [0.0, 2.0], 3.0_f64.ln()),
        ("decreasing", |x| 1.0 - x * x * x, [0.0, 4.0], 1.0),
    ];
    cases
}

#[test]
fn bisection_finds_bracketed_roots() {
    for (name, f, [a, b], root) in bracketed_cases() {
        let solution = bisection(f, a, b).unwrap_or_else(|e| panic!("{name}: {e}"));

        assert_eq!(solution.status, Status::Converged, "{name}");
        // Either the residual or the half-width test fired.
        assert!(
            solution.residual.abs() < TOL || (solution.x - root).abs() < TOL,
            "{name}: x = {}",
            solution.x
        );
    }
}

#[test]
fn regula_falsi_finds_bracketed_roots() {
    for (name, f, [a, b], _root) in bracketed_cases() {
        let solution = regula_falsi(f, a, b).unwrap_or_else(|e| panic!("{name}: {e}"));

        assert_eq!(solution.status, Status::Converged, "{name}");
        assert!(solution.residual.abs() < TOL, "{name}");
        assert_relative_eq!(solution.residual, f(solution.x));
    }
}

#[test]
fn bracketing_methods_reject_same_sign_endpoints() {
    let cases: [(fn(f64) -> f64, f64, f64); 3] = [
        (|x| x * x + 1.0, -1.0, 1.0),
        (|x| x - 10.0, 0.0, 5.0),
        (|x| x.exp(), -3.0, 3.0),
    ];

    for (f, a, b) in cases {
        assert!(matches!(bisection(f, a, b), Err(Error::NoBracket { .. })));
        assert!(matches!(regula_falsi(f, a, b), Err(Error::NoBracket { .. })));
    }
}

#[test]
fn linear_root_at_one_half() {
    let f = |x: f64| x - 0.5;

    let solution = bisection(f, 0.0, 1.0).expect("bisection");
    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 0.5, epsilon = TOL);

    let solution = regula_falsi(f, 0.0, 1.0).expect("regula falsi");
    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 0.5, epsilon = TOL);
}

#[test]
fn open_methods_find_sqrt_two() {
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let solution = newton_raphson(f, df, -10.0, 10.0, 1.0).expect("newton-raphson");
    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 1.414_213_56, epsilon = TOL);

    let solution = secant(f, -10.0, 10.0, 1.0, 2.0).expect("secant");
    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 1.414_213_56, epsilon = TOL);
}

#[test]
fn newton_raphson_rejects_escaping_first_step() {
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let result = newton_raphson(f, df, 0.0, 2.0, 0.5);

    // 0.5 − (0.25 − 2)/1 = 2.25
    assert!(matches!(result, Err(Error::OutOfRange { x, .. }) if x > 2.0));
}

#[test]
fn endpoint_roots_need_no_iterations() {
    let f = |x: f64| (x - 1.0) * (x + 2.0);

    for solution in [
        bisection(f, 1.0, 3.0).expect("left root"),
        bisection(f, -5.0, -2.0).expect("right root"),
        regula_falsi(f, 1.0, 3.0).expect("left root"),
        regula_falsi(f, -5.0, -2.0).expect("right root"),
    ] {
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.residual, 0.0);
    }
}

#[test]
fn degenerate_inputs_are_reported() {
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let err = newton_raphson(f, df, -10.0, 10.0, 0.0).expect_err("zero derivative");
    assert!(matches!(err, Error::ZeroDerivative { .. }));

    let err = secant(f, -10.0, 10.0, -3.0, 3.0).expect_err("flat secant");
    assert!(matches!(err, Error::ZeroSecantSlope { .. }));

    let flat = |_: f64| 1.0;
    let err = newton_raphson(flat, |_: f64| 0.0, -1.0, 1.0, 0.5).expect_err("flat function");
    assert!(err.is_degenerate());
}

#[test]
fn exact_roots_are_not_degenerate() {
    let double_root = |x: f64| (x - 1.0) * (x - 1.0);
    let solution = newton_raphson(double_root, |x: f64| 2.0 * (x - 1.0), -10.0, 10.0, 1.0)
        .expect("guess is a root");
    assert!(solution.is_converged());
    assert_eq!(solution.x, 1.0);

    let solution = secant(|x: f64| x * (x - 1.0), -10.0, 10.0, 0.0, 1.0)
        .expect("guesses are roots");
    assert!(solution.is_converged());
    assert_eq!(solution.residual, 0.0);
}

#[test]
fn bracketing_methods_handle_wide_brackets() {
    let f = |x: f64| x - 1.0;

    for solution in [
        bisection(f, -1e200, 1e200).expect("bisection"),
        regula_falsi(f, -1e200, 1e200).expect("regula falsi"),
    ] {
        assert!(solution.is_converged());
        assert_relative_eq!(solution.x, 1.0, epsilon = TOL);
    }
}

#[test]
fn cap_exhaustion_is_reported_for_every_method() {
    let f = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;
    let config = Config::default().with_max_iters(2);

    let solutions = [
        bisection::solve_unobserved(&f, [0.0, 2.0], &config).expect("bisection"),
        regula_falsi::solve_unobserved(&f, [0.0, 2.0], &config).expect("regula falsi"),
        newton_raphson::solve_unobserved(&f, &df, [0.0, 2.0], 1.0, &config).expect("newton"),
        secant::solve_unobserved(&f, [0.0, 2.0], [1.0, 2.0], &config).expect("secant"),
    ];

    for solution in solutions {
        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 2);
        assert!(solution.x.is_finite());
        assert_relative_eq!(solution.residual, f(solution.x));
    }
}

#[test]
fn repeated_calls_are_identical() {
    let f = |x: f64| x.sin() - 0.25;
    let df = |x: f64| x.cos();

    let run = || {
        [
            bisection(f, 0.0, 1.0).expect("bisection"),
            regula_falsi(f, 0.0, 1.0).expect("regula falsi"),
            newton_raphson(f, df, -1.0, 1.0, 0.5).expect("newton"),
            secant(f, -1.0, 1.0, 0.0, 0.5).expect("secant"),
        ]
    };

    assert_eq!(run(), run());
}

#[test]
fn concurrent_calls_match_sequential_calls() {
    let targets: Vec<f64> = (1..=8).map(f64::from).collect();

    let solve = |target: f64| {
        let f = move |x: f64| x * x - target;
        let df = |x: f64| 2.0 * x;
        [
            bisection(f, 0.0, 10.0).expect("bisection"),
            regula_falsi(f, 0.0, 10.0).expect("regula falsi"),
            newton_raphson(f, df, 0.0, 10.0, 3.0).expect("newton"),
            secant(f, 0.0, 10.0, 2.0, 3.0).expect("secant"),
        ]
    };

    let sequential: Vec<_> = targets.iter().map(|&t| solve(t)).collect();

    let concurrent: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = targets
            .iter()
            .map(|&t| scope.spawn(move || solve(t)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("solver thread panicked"))
            .collect()
    });

    assert_eq!(sequential, concurrent);
    for (solutions, target) in sequential.iter().zip(&targets) {
        for solution in solutions {
            assert_relative_eq!(solution.x, target.sqrt(), epsilon = 1e-5);
        }
    }
}
