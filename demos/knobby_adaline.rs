use std::error::Error;

use knobby::report;
use knobby::{knobby_patterns, Adaline, Convergence, LmsTrainer};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::WARN).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let patterns = knobby_patterns();

    println!("Knobby ADALINE using the LMS algorithm");
    println!();
    println!("Training on 4x4 T and J patterns:");
    println!();
    for row in report::glyph_rows(&patterns, 4) {
        println!("\t{}", row);
    }
    println!();
    println!("\tWhere {} = 1 and {} = -1", report::ON, report::OFF);
    println!();

    let mut adaline = Adaline::new(16);
    let mut trainer = LmsTrainer::new(&mut adaline);
    let outcome = trainer
        .set_learning_rate(0.005)
        .set_margin(0.5)
        .verbose()
        .train(&patterns)?;
    trainer.progress_graph("progress.html");
    drop(trainer);

    if let Convergence::Exhausted { rounds, converged } = outcome {
        println!(
            "Stopped after {} rounds with {}/{} patterns settled.",
            rounds,
            converged,
            patterns.len()
        );
    }

    println!();
    println!("Knobby results:");
    println!();
    let results = report::results(&adaline, &patterns)?;
    for result in results.iter() {
        println!("\t{}", report::result_line(result));
    }
    println!();
    println!("\t{}", report::summary_line(&results));

    Ok(())
}
