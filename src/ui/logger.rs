// src/ui/logger.rs

use gtk4::prelude::*;
use gtk4::{glib, TextView};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::sync::OnceLock;

static LOG_VIEW: OnceLock<glib::SendWeakRef<TextView>> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger;

/// Mirrors `log` records into the console pane and stderr.
struct ConsoleLogger;

pub fn init(view: &TextView, level: LevelFilter) -> Result<(), SetLoggerError> {
    let buffer = view.buffer();
    let tag_table = buffer.tag_table();

    for (name, color, bold) in [
        ("error", "#ff4444", true),
        ("warn", "#ffbb33", false),
        ("info", "#33b5e5", false),
        ("debug", "#aaaaaa", false),
    ] {
        if tag_table.lookup(name).is_none() {
            let tag = gtk4::TextTag::new(Some(name));
            tag.set_property("foreground", color);
            if bold {
                tag.set_property("weight", 700);
            }
            tag_table.add(&tag);
        }
    }

    let _ = LOG_VIEW.set(view.downgrade().into());
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

// "elemview::io::dataset" -> "dataset"
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("elemview")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (icon, tag_name) = match record.level() {
            Level::Error => ("🔴", "error"),
            Level::Warn => ("🟠", "warn"),
            Level::Info => ("🔵", "info"),
            Level::Debug => ("⚪", "debug"),
            Level::Trace => ("▫️", "debug"),
        };

        let target = short_target(record.target());
        eprintln!("[{:<5} {}] {}", record.level(), target, record.args());
        let msg = format!("{}  [{}] {}\n", icon, target, record.args());

        glib::MainContext::default().spawn_local(async move {
            if let Some(view) = LOG_VIEW.get().and_then(|w| w.upgrade()) {
                let buffer = view.buffer();
                let mut end = buffer.end_iter();
                buffer.insert_with_tags_by_name(&mut end, &msg, &[tag_name]);

                // Auto-scroll
                let mark = buffer.create_mark(None, &buffer.end_iter(), false);
                view.scroll_to_mark(&mark, 0.0, true, 0.0, 1.0);
                buffer.delete_mark(&mark);
            }
        });
    }

    fn flush(&self) {}
}
