//! converter - Terminal currency converter
//!
//! Enter an amount and two currency codes; the app queries a public
//! exchange-rate service and shows the converted value alongside a rolling
//! history of the last five conversions.

use crossbeam_channel::Receiver;

use converter_tui::{
    app::{Action, AppState, event::{EventHandler, TuiEvent}, keymap, reduce},
    config::Config,
    services::{ConvertOutcome, ServiceHandle},
    terminal::{Tui, install_panic_hook, restore_terminal, setup_terminal},
    ui,
};

fn init_logging(config: &Config) -> anyhow::Result<()> {
    // A fmt layer on stdout would corrupt the alternate screen, so logging
    // is opt-in and goes to a file.
    if let Some(path) = &config.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info,converter_tui=debug".into()),
            )
            .with_writer(file)
            .with_ansi(false)
            .init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_logging(&config)?;

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &config);

    restore_terminal(terminal)?;
    result
}

fn run_app(terminal: &mut Tui, config: &Config) -> anyhow::Result<()> {
    let services = ServiceHandle::new(&config.api_url)?;
    let event_handler = EventHandler::new(config.tick_ms);

    let mut state = AppState::new();

    // Receiver for the outstanding conversion, if any. One at a time is
    // enforced only by the in-flight flag disabling the trigger; if a stray
    // second request ever raced it, the last outcome to arrive would win.
    let mut pending_rx: Option<Receiver<ConvertOutcome>> = None;

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => keymap::action_for(&state, key),
            TuiEvent::Tick | TuiEvent::Resize(_, _) => None,
        };

        match action {
            Some(Action::ConvertRequested) => {
                // The trigger is inert while in flight or while the amount
                // does not parse; a disabled button, not an error.
                if !state.converting {
                    if let Some(request) = state.form.request() {
                        state = reduce(state, Action::ConvertStarted);
                        pending_rx = Some(services.convert(request));
                    }
                }
            }
            Some(action) => {
                state = reduce(state, action);
            }
            None => {}
        }

        // Fold any completed conversion into state.
        if let Some(rx) = &pending_rx {
            if let Ok(outcome) = rx.try_recv() {
                let action = match outcome {
                    Ok(conversion) => Action::ConvertSucceeded(conversion),
                    Err(kind) => Action::ConvertFailed(kind),
                };
                state = reduce(state, action);
                pending_rx = None;
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
