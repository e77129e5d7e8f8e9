use std::error::Error;

use knobby::{linear_with_noise, ScalarRegressor, StochasticGradientDescent};
use rand::{rngs::StdRng, SeedableRng};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut rng = StdRng::seed_from_u64(2015);
    let data = linear_with_noise(101, 2., 0.33, &mut rng);

    let mut regressor = ScalarRegressor::new();
    StochasticGradientDescent::new(&mut regressor)
        .set_learning_rate(0.01)
        .set_epochs(100)
        .train(&data)?
        .loss_graph("loss.html")
        .fit_graph(&data, "fit.html");

    println!("w = {}", regressor.weight());

    Ok(())
}
