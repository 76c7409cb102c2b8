use approx::assert_relative_eq;
use rootline_core::Tolerance;
use rootline_demos::{GOLDEN, TAN_EXP};
use rootline_observers::{SpreadBelow, StopAfter, Trace};
use rootline_solvers::{bisection, fixed_point};

#[test]
fn trace_follows_every_halving() {
    let tol = Tolerance::new(TAN_EXP.tol).unwrap();
    let mut trace = Trace::with_precision(tol);

    let solution = bisection::solve(
        &TAN_EXP.f,
        TAN_EXP.bracket,
        &bisection::Config::new(tol),
        &mut trace,
    )
    .unwrap();

    let rows = trace.rows();
    assert_eq!(rows.len(), solution.iters);
    assert_relative_eq!(rows[0].estimate, -0.75);
    assert_relative_eq!(rows[0].spread, 1.5);
    for pair in rows.windows(2) {
        assert_eq!(pair[1].iter, pair[0].iter + 1);
        assert_relative_eq!(pair[1].spread, 0.5 * pair[0].spread);
    }

    // The last event saw a bracket still too wide; its halving converged.
    assert!(rows[rows.len() - 1].spread > TAN_EXP.tol);
    assert_eq!(trace.to_string().lines().count(), rows.len() + 1);
}

#[test]
fn trace_of_fixed_point_ends_at_solution() {
    let tol = Tolerance::new(GOLDEN.tol).unwrap();
    let mut trace = Trace::new();

    let solution =
        fixed_point::solve(&GOLDEN.f, GOLDEN.x0, &fixed_point::Config::new(tol), &mut trace)
            .unwrap();

    let last = trace.rows().last().copied().unwrap();
    assert_eq!(last.iter, solution.iters);
    assert_eq!(last.estimate, solution.x);
    assert_eq!(last.spread, solution.delta);
    assert!(trace.rows().iter().rev().skip(1).all(|row| row.spread > GOLDEN.tol));
}

#[test]
fn stop_after_agrees_with_iteration_cap() {
    let tol = Tolerance::new(1e-15).unwrap();
    let config = fixed_point::Config::new(tol);

    let stopped = fixed_point::solve(&GOLDEN.f, GOLDEN.x0, &config, StopAfter::new(5)).unwrap();
    let capped =
        fixed_point::solve_unobserved(&GOLDEN.f, GOLDEN.x0, &config.with_max_iters(5)).unwrap_err();

    assert_eq!(stopped.status, fixed_point::Status::StoppedByObserver);
    match capped {
        fixed_point::Error::NonConvergence { iters, last } => {
            assert_eq!(iters, stopped.iters);
            assert_eq!(last, stopped.x);
        }
        other => panic!("expected non-convergence, got {other:?}"),
    }
}

#[test]
fn spread_below_gives_a_coarse_first_pass() {
    let fine = Tolerance::new(1e-12).unwrap();

    let coarse = bisection::solve(
        &TAN_EXP.f,
        TAN_EXP.bracket,
        &bisection::Config::new(fine),
        SpreadBelow::new(1e-3),
    )
    .unwrap();
    let full =
        bisection::solve_unobserved(&TAN_EXP.f, TAN_EXP.bracket, &bisection::Config::new(fine))
            .unwrap();

    assert_eq!(coarse.status, bisection::Status::StoppedByObserver);
    assert!(coarse.iters < full.iters);
    assert!((coarse.x - full.x).abs() <= 1e-3);
}

#[test]
fn closure_observer_combines_trace_and_stop() {
    let tol = Tolerance::new(1e-12).unwrap();
    let mut trace = Trace::new();

    let solution = fixed_point::solve(
        &GOLDEN.f,
        GOLDEN.x0,
        &fixed_point::Config::new(tol),
        |event: &fixed_point::Event| {
            trace.record(event);
            (event.iter == 3).then_some(fixed_point::Action::StopEarly)
        },
    )
    .unwrap();

    assert_eq!(solution.iters, 3);
    assert_eq!(trace.rows().len(), 3);
}
