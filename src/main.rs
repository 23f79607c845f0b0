//! compose-generator's main application entry point.
//! Parses the command line, configures logging and runs the generator.

use compose_generator::{
    cli::get_args,
    error::default_error_handler,
    generator::Generator,
    prompt::DialoguerPrompter,
    runner::DockerComposeRunner,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    let prompt = DialoguerPrompter::new();
    let runner = DockerComposeRunner::new();
    let generator = Generator::new(
        &prompt,
        &runner,
        args.catalog_roots(),
        &args.output_dir,
        args.options(),
    );

    if let Err(err) = generator.generate() {
        default_error_handler(err);
    }
}
