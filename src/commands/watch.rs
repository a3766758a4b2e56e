use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use filecloner::watcher::{WatchEvent, WatchUseCase};
use filecloner::WatchConfig;

use crate::cli::Cli;
use crate::ui::context::UiContext;

pub fn cmd_watch(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.color);

    let config = WatchConfig::new(
        &cli.source,
        &cli.target,
        cli.recursive,
        cli.filter.as_deref(),
    )?;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(&config, ui.color, ui.unicode)
        );
    }

    WatchUseCase::new(config).start(running, |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered =
            crate::ui::views::watch::render_watch_event(&timestamp, &event, ui.color, ui.unicode);

        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
