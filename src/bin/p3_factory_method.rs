// Factory Method: each Designer gets its design tool from an injected provider.
//
// Steps:
// 1. Create a provider
// 2. Create a Designer with that provider
// 3. Ask the Designer for a design

use std::io;

use design_patterns::creational::factory;
use design_patterns::logging;

fn main() -> anyhow::Result<()> {
    logging::init();
    factory::run(&mut io::stdout().lock())?;
    Ok(())
}
