//! sigscope - terminal sampling/reconstruction study browser
//!
//! Run with: cargo run

mod app;
mod scenario;
mod ui;

use app::Sigscope;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    Sigscope::new()
        .scenario(scenario::sampling_and_spectra()?)
        .scenario(scenario::ideal_reconstruction()?)
        .scenario(scenario::aliased_reconstruction()?)
        .scenario(scenario::delta_modulation()?)
        .scenario(scenario::delta_recovery()?)
        .scenario(scenario::uniform_quantization()?)
        .scenario(scenario::hold_comparison()?)
        .run()
}
