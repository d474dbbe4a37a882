//! Application entry point and dispatch.

use anyhow::{Context, Result};

use namepick_cli::presenter::CliPresenter;
use namepick_core::{Controller, GroupStore, JsonFileStore, PickerError, Selector, ViewState};
use namepick_tui::{TuiApp, TuiMessage};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        namepick_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let selector = open_selector(config)?;

    if config.tui || !config.has_action() {
        return run_tui(config, selector);
    }

    run_cli(config, selector)
}

fn open_selector(config: &AppConfig) -> Result<Selector> {
    let store = config
        .store
        .as_ref()
        .map_or_else(JsonFileStore::at_default_location, JsonFileStore::new);
    tracing::debug!(path = %store.path().display(), "using group store");
    let store: Box<dyn GroupStore> = Box::new(store);

    let selector = match config.group.as_deref() {
        Some(group) => Selector::open(store, group).context("cannot open group")?,
        None => Selector::new(store),
    };
    Ok(match config.seed {
        Some(seed) => selector.with_seed(seed),
        None => selector,
    })
}

fn run_cli(config: &AppConfig, mut selector: Selector) -> Result<()> {
    let presenter = CliPresenter::new(config.quiet);

    if let Some(input) = &config.add {
        let mut added = 0;
        for name in namepick_core::parse_names(input) {
            if selector.add_name(&name)? {
                added += 1;
            }
        }
        presenter.present_notice(&format!(
            "Added {added} name(s) to {}",
            selector.group_name()
        ))?;
    }

    if let Some(name) = &config.remove {
        if selector.remove_name(name.trim())? {
            presenter.present_notice(&format!("Removed {}", name.trim()))?;
        } else {
            presenter.present_notice(&format!("{} is not in {}", name.trim(), selector.group_name()))?;
        }
    }

    if config.clear {
        selector.clear()?;
        presenter.present_notice(&format!("Cleared {}", selector.group_name()))?;
    }

    if let Some(new_name) = &config.rename_group {
        let old = selector.group_name().to_string();
        let new = selector.rename_group(&old, new_name)?;
        presenter.present_notice(&format!("Renamed {old} to {new}"))?;
    }

    if config.delete_group {
        let name = selector.group_name().to_string();
        selector.delete_group(&name)?;
        presenter.present_notice(&format!("Deleted {name}"))?;
    }

    if let Some(count) = config.pick {
        let picks: Vec<String> = std::iter::from_fn(|| selector.choose_name())
            .take(count)
            .collect();
        if picks.len() < count {
            tracing::info!(requested = count, drawn = picks.len(), "group exhausted");
        }
        presenter.present_picks(&picks)?;
    }

    if config.list {
        presenter.present_names(&ViewState::of_selector(&selector))?;
    }

    if config.groups {
        presenter.present_groups(&selector.list_groups(), selector.group_name())?;
    }

    Ok(())
}

fn run_tui(config: &AppConfig, selector: Selector) -> Result<()> {
    let controller = Controller::new(selector, config.timing());

    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();
    let mut app = TuiApp::new(controller, rx);

    // Signals arrive outside raw-mode key handling
    ctrlc::set_handler(move || {
        let _ = tx.send(TuiMessage::Interrupt);
    })
    .context("cannot install Ctrl+C handler")?;

    // Run TUI event loop on the main thread
    app.run().context("TUI error")?;

    if app.interrupted {
        return Err(PickerError::Interrupted.into());
    }
    Ok(())
}
