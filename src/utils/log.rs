use ::log::SetLoggerError;
use simplelog::*;

/// Terminal logger for the command line driver. Logs go to stderr so
/// that stdout only carries results.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), SetLoggerError> { 
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(l, config, TerminalMode::Stderr, ColorChoice::Auto)
}
