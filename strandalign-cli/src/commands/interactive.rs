//! Interactive command implementation - prompt loop on stdin/stdout

use anyhow::Result;

use strandalign_core::RandomSequenceGenerator;

use crate::config::Config;
use crate::interactive::InteractionLoop;

pub fn execute(config: &Config, generator: RandomSequenceGenerator) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let rounds = InteractionLoop::new(stdin.lock(), stdout.lock(), config, generator).run()?;

    log::info!("Aligned {} strand pairs", rounds);
    Ok(())
}
