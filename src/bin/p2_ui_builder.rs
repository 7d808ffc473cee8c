// Builder with a Director: the Designer assembles a basic UI through Figma.
//
// Steps:
// 1. Create Figma (the concrete builder)
// 2. Hand it to a Designer (the director) and build a basic UI
// 3. Get the created components back from Figma and display them

use std::io;

use design_patterns::creational::ui_builder;
use design_patterns::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    ui_builder::run(&mut io::stdout().lock())?;
    Ok(())
}
