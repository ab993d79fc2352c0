use std::io;

use canvas::Canvas;
use log::info;
use perceptron::sampling::RandSource;

use classifier::{RunConfig, Session, session};

fn main() -> io::Result<()> {
    env_logger::init();

    let config = RunConfig::from_env()?;
    let seed = config.seed.unwrap_or_else(session::clock_seed);
    info!(seed = seed; "seeding random source");

    let mut source = RandSource::seeded(seed);
    let mut canvas = Canvas::new(&config.output);

    let outcome = Session::new(config).run(&mut source, &mut canvas)?;

    println!(
        "{}% of the answers were correct.",
        outcome.verification.percentage()
    );

    Ok(())
}
