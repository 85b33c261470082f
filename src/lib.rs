pub mod cards;
pub mod dto;
pub mod error;
pub mod gameplay;
pub mod players;
pub mod session;

#[cfg(feature = "server")]
pub mod hosting;

/// Chip count. Signed so intermediate subtractions (e.g.
/// `current_bet - seat.current_bet`) never wrap.
pub type Chips = i64;

/// Initializes terminal logging and installs a ctrl-c handler that forces
/// an immediate exit, mirroring the reference binary's startup sequence.
#[cfg(feature = "server")]
pub fn init() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("forcing exit");
        std::process::exit(0);
    });
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
