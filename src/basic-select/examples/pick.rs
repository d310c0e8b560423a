//! Pick one option from a select loaded from TOML.
//!
//! ```text
//! cargo run -p basic-select --example pick -- --config src/basic-select/demos/fruit.toml
//! ```
//!
//! Click or press Enter to open, arrows to move, Enter or a click to commit,
//! Esc or a click elsewhere to close. Tab moves focus off the select while
//! it is closed; `q` quits. Logs go to a file so the screen stays clean.

use anyhow::{Context, Result};
use basic_select::prelude::*;
use basic_select_input::{
    Event, InputReader, InputReaderConfig, InputResult, KeyCode, PropagatedEvent,
    PropagatingEvent,
};
use clap::Parser;
use ratatui::DefaultTerminal;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(about = "Pick an option from a terminal select")]
struct Args {
    /// Select config file.
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/fruit.toml"))]
    config: PathBuf,

    /// Log file.
    #[arg(long, default_value = "basic-select.log")]
    log_file: PathBuf,

    /// Log filter, in `RUST_LOG` syntax.
    #[arg(long, default_value = "basic_select=trace")]
    log_filter: String,
}

/// Keeps the non-blocking log writer flushing until exit.
struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

fn init_logging(path: &Path, filter: &str) -> Result<LogGuard> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(file_layer)
        .init();

    Ok(LogGuard { _guard: guard })
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log = init_logging(&args.log_file, &args.log_filter)?;

    let config = SelectConfig::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let max_menu_height = config.max_menu_height;
    let props = config
        .into_props()
        .on_change(|option| tracing::info!(value = %option.value, "committed"))
        .on_blur(|| tracing::info!("blurred"));

    let document = Document::new();
    let mut select = Select::new(props, &document).with_max_menu_height(max_menu_height);
    select.set_focus(true);

    let mut terminal = ratatui::init();
    let mut reader = InputReader::new(InputReaderConfig::default().with_raw_mode(false));
    let outcome = reader
        .init()
        .map_err(anyhow::Error::from)
        .and_then(|()| run(&mut terminal, &mut reader, &mut select));
    shut_down(|| reader.cleanup(), ratatui::restore)?;

    match outcome? {
        Some(option) => println!("{} ({})", option.display, option.value),
        None => println!("nothing selected"),
    }
    Ok(())
}

/// Leaves the alternate screen whether or not the reader cleaned up.
fn shut_down(
    cleanup: impl FnOnce() -> InputResult<()>,
    restore: impl FnOnce(),
) -> Result<()> {
    let cleaned = cleanup();
    restore();
    cleaned.context("failed to restore terminal input")
}

fn run(
    terminal: &mut DefaultTerminal,
    reader: &mut InputReader,
    select: &mut Select,
) -> Result<Option<SelectOption>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let width = select.desired_size().0.max(24).min(area.width);
            let height = area.height.saturating_sub(3);
            let select_area = Rect::new(area.x + 2, area.y + 1, width, height);
            select.layout(select_area);
            frame.render_widget(SelectWidget::new(select), select_area);

            let key_style = Style::default().fg(Color::Black).bg(Color::Gray);
            let hints: Vec<Span<'_>> = select
                .key_hints()
                .into_iter()
                .chain([("Tab", "Focus"), ("q", "Quit")])
                .flat_map(|(key, action)| {
                    [
                        Span::styled(format!(" {key} "), key_style),
                        Span::raw(format!(" {action}  ")),
                    ]
                })
                .collect();
            let hint_area = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
            frame.render_widget(Line::from(hints), hint_area);
        })?;

        let event = reader.read()?;
        if !select.is_open()
            && let Event::Key(key) = &event
            && key.is_key_down()
            && key.code == KeyCode::Char('q')
        {
            return Ok(select.selected().cloned());
        }

        let mut event = PropagatedEvent::new(event);
        if let ComponentResult::Done(option) = select.handle_event(&mut event) {
            tracing::debug!(value = %option.value, "demo saw commit");
        }

        let tab = event
            .as_key()
            .filter(|key| key.is_key_down())
            .is_some_and(|key| key.named().is_tab());
        if tab && !event.is_default_prevented() {
            let focused = select.focus_state().has_focus();
            select.set_focus(!focused);
        }
    }
}
