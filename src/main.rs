//! # Restline Main Entry Point

use anyhow::Result;
use restline::cmd_args::CommandLineArgs;
use restline::config::{ConfigStore, StatePaths};
use restline::{
    CommandRegistry, ExchangeRenderer, HeaderStore, HttpService, ReplLoop, SessionState,
    TerminalLineReader,
};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    let paths = StatePaths::resolve();
    tracing::debug!("State paths: {:?}", paths);

    let mut session = SessionState::new(
        ConfigStore::load(&paths.config),
        HeaderStore::load(&paths.headers),
    );
    for (key, value) in cmd_args.overrides() {
        session.set_setting(key, &value)?;
    }

    let http = HttpService::new()?;
    let reader = TerminalLineReader::new(paths.history.clone(), CommandRegistry::new().verbs())?;

    let mut repl = ReplLoop::new(reader, session, http, ExchangeRenderer::for_terminal());
    let end = repl.run()?;
    tracing::debug!("Session ended: {:?}", end);
    Ok(())
}

fn init_tracing_subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_env(format!(
                "{}_LOG_LEVEL",
                env!("CARGO_PKG_NAME").to_uppercase()
            ))
            .add_directive("reqwest=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("hyper_util=warn".parse().unwrap())
            .add_directive("rustls=warn".parse().unwrap())
            .add_directive("rustyline=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
