// Builder: CodeBuilder assembling HTML and CSS fragments.
//
// Steps:
// 1. Create a CodeBuilder
// 2. Add HTML and CSS code
// 3. Build the HTML and CSS output

use std::io;

use design_patterns::creational::builder;
use design_patterns::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    builder::run(&mut io::stdout().lock())?;
    Ok(())
}
