// https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_3/index.html

use carg::parse_command_arguments;

mod carg;

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"));

    let container = parse_command_arguments()?;
    container.process()?;

    Ok(())
}

// ----------------------------------------------------------------------------
// EOF
// ----------------------------------------------------------------------------
