use std::{io, num::NonZeroUsize};

use classifier::{RunConfig, Session};
use perceptron::{
    MlErr,
    sampling::{PointSampler, RandSource},
    target::LineBounds,
    verification::Renderer,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Point(i32, i32, bool),
    Line(i32, i32),
    Save,
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
    fail_save: bool,
}

impl Renderer for Recorder {
    fn draw_point(&mut self, x: i32, y: i32, above: bool) {
        self.calls.push(Call::Point(x, y, above));
    }

    fn draw_linear_function(&mut self, a: i32, b: i32) {
        self.calls.push(Call::Line(a, b));
    }

    fn save(&mut self) -> io::Result<()> {
        self.calls.push(Call::Save);

        if self.fail_save {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }

        Ok(())
    }
}

fn config(seed: u64) -> RunConfig {
    RunConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn session_runs_all_phases_in_order() {
    let session = Session::new(config(7));
    let mut source = RandSource::seeded(7);
    let mut recorder = Recorder::default();

    let outcome = session.run(&mut source, &mut recorder).unwrap();

    let bounds = LineBounds::default();
    assert!(bounds.gradient().contains(&outcome.target.gradient()));
    assert!(bounds.offset().contains(&outcome.target.offset()));

    assert_eq!(outcome.perceptron.dim(), 2);
    assert_eq!(outcome.training.iterations, 1000);
    assert!(outcome.training.mistakes <= 1000);
    assert_eq!(outcome.verification.trials, 100);
    assert!(outcome.verification.correct <= 100);
    assert_eq!(
        outcome.verification.percentage(),
        outcome.verification.correct
    );

    let sampler = PointSampler::default();
    let (points, rest) = recorder.calls.split_at(100);
    for call in points {
        let Call::Point(x, y, _) = *call else {
            panic!("expected a point, got {call:?}");
        };
        assert!(sampler.bounds().contains(&x) && sampler.bounds().contains(&y));
    }

    assert_eq!(
        rest,
        [
            Call::Line(outcome.target.gradient(), outcome.target.offset()),
            Call::Save
        ]
    );
}

#[test]
fn same_seed_same_outcome() {
    let run = |seed| {
        let mut source = RandSource::seeded(seed);
        let mut recorder = Recorder::default();
        let outcome = Session::new(config(seed))
            .run(&mut source, &mut recorder)
            .unwrap();
        (outcome, recorder.calls)
    };

    let (a, calls_a) = run(2024);
    let (b, calls_b) = run(2024);

    assert_eq!(a.target, b.target);
    assert_eq!(a.perceptron.weights(), b.perceptron.weights());
    assert_eq!(a.perceptron.bias(), b.perceptron.bias());
    assert_eq!(a.training, b.training);
    assert_eq!(a.verification, b.verification);
    assert_eq!(calls_a, calls_b);
}

#[test]
fn trials_follow_config() {
    let session = Session::new(RunConfig {
        trials: NonZeroUsize::new(7).unwrap(),
        iterations: 0,
        ..config(1)
    });
    let mut source = RandSource::seeded(1);
    let mut recorder = Recorder::default();

    let outcome = session.run(&mut source, &mut recorder).unwrap();

    assert_eq!(outcome.training.iterations, 0);
    assert_eq!(outcome.training.mistakes, 0);
    assert_eq!(outcome.verification.trials, 7);
    assert_eq!(recorder.calls.len(), 9);
}

#[test]
fn failed_save_ends_the_run() {
    let session = Session::new(config(3));
    let mut source = RandSource::seeded(3);
    let mut recorder = Recorder {
        fail_save: true,
        ..Default::default()
    };

    let err = session.run(&mut source, &mut recorder).unwrap_err();
    assert!(matches!(err, MlErr::Render(_)));

    let err = io::Error::from(err);
    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
}
