use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use filecloner::watcher::WatchEvent;

pub fn render_watch_header(
    config: &filecloner::WatchConfig,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "filecloner");
    header.add("Source", config.source().display().to_string());
    header.add("Target", config.target().display().to_string());
    header.add(
        "Mode",
        if config.recursive() {
            "recursive"
        } else {
            "top level only"
        },
    );
    if let Some(filter) = config.filter() {
        header.add("Filter", filter.as_str());
    }
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { source, .. } => {
            format!("{} {} Watching: {}\n", prefix, icon(Icon::Watch), source)
        }
        WatchEvent::InitialSyncStarted => format!(
            "{} {} Performing initial synchronization...\n",
            prefix,
            icon(Icon::Progress)
        ),
        WatchEvent::InitialSyncComplete {
            copied,
            skipped,
            errors,
        } => {
            let (status, label) = if *errors > 0 {
                (
                    Icon::Warning,
                    ColoredText::warning("Initial synchronization finished with errors"),
                )
            } else {
                (Icon::Success, ColoredText::success("Initial synchronization complete"))
            };
            format!(
                "{} {} {}: {} copied, {} skipped, {} errors\n",
                prefix,
                icon(status),
                label.render(supports_color),
                copied,
                skipped,
                errors
            )
        }
        WatchEvent::Copied { source, target } => format!(
            "{} {} {} {} -> {}\n",
            prefix,
            icon(Icon::Success),
            ColoredText::success("Copied:").render(supports_color),
            source,
            target
        ),
        WatchEvent::Skipped { path } => format!(
            "{} {} {} {}\n",
            prefix,
            icon(Icon::Skip),
            ColoredText::dim("Skipped:").render(supports_color),
            path
        ),
        WatchEvent::DeletionIgnored { path } => format!(
            "{} {} {} {}\n",
            prefix,
            icon(Icon::Trash),
            ColoredText::error("Deleted (not synced):").render(supports_color),
            path
        ),
        WatchEvent::Error { message, .. } => format!(
            "{} {} Error: {}\n",
            prefix,
            icon(Icon::Error),
            message
        ),
        WatchEvent::Shutdown => format!("\n{} {} Stopped watching.\n", prefix, icon(Icon::Watch)),
    }
}
