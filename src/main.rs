use std::error::Error;
use std::thread;

use ladderx::{analyze, render_report, LadderParameters, FRAME_DELAY};

fn main() -> Result<(), Box<dyn Error>> {
    // Validate the inputs before any computation runs. A ladder leaning
    // against a frictionless wall is the classic statics problem described at
    // https://en.wikipedia.org/wiki/Statics.
    let params = LadderParameters::new(30.0, 5.0, 1500.0, 1.0)?;

    // Evaluate equilibrium once; the verdict decides whether the animation
    // sweeps to the input angle or to the collapsed fallback pose.
    let run = analyze(params);

    // Print the friction comparison and the verdict for the user.
    print!("{}", render_report(run.report()));

    // Play the animation. The library only produces frames; the consumer owns
    // the timing, so the delay between draws lives here and not in the core.
    for frame in run.animation() {
        println!(
            "frame {:>2}: pose {:5.1} deg, top at ({:.2}, {:.2})",
            frame.index,
            frame.pose.to_degrees(),
            frame.top.x,
            frame.top.y
        );
        thread::sleep(FRAME_DELAY);
    }

    Ok(())
}
