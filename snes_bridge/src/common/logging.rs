//! Utilities for configuring logging
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::Once;

use colored::*;
use env_logger::Logger;
use log::LevelFilter;
use log::Log;
use log::Record;

static ONCE_INIT: Once = Once::new();

static TRACE_CONTEXT_LINES: usize = 20;

/// Environment variable holding the env_logger filter string.
pub const LOG_FILTER_ENV: &str = "SNES_BRIDGE_LOG";

/// Logger used by native hosts. Filters are configured through env_logger, the output uses a
/// compact single-letter level marker.
///
/// Trace records are kept in a ring buffer and only printed as context when a record of a
/// higher level follows them.
struct BridgeLogger {
    /// Contains the last `TRACE_CONTEXT_LINES` of trace-level logs.
    trace_logs: Mutex<VecDeque<String>>,
    logger: Logger,
}

impl BridgeLogger {
    pub fn new(logger: Logger) -> Self {
        Self {
            trace_logs: Mutex::new(VecDeque::new()),
            logger,
        }
    }

    fn format_record(&self, record: &Record) -> String {
        match record.level() {
            log::Level::Error => {
                format!("{} {}", "E".red().bold(), record.args().to_string().red())
            }
            log::Level::Warn => format!(
                "{} {}",
                "W".yellow().bold(),
                record.args().to_string().yellow()
            ),
            log::Level::Info => format!(
                "{} {}",
                "I".blue().bold(),
                record.args().to_string().normal()
            ),
            log::Level::Debug => format!("{} {}", "D".blue(), record.args().to_string().normal()),
            log::Level::Trace => format!("{}", record.args().to_string().dimmed()),
        }
    }
}

impl Log for BridgeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.logger.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.logger.matches(record) {
            return;
        }
        let record_str = self.format_record(record);
        let Ok(mut trace_logs) = self.trace_logs.lock() else {
            eprintln!("{}", record_str);
            return;
        };
        if record.level() == LevelFilter::Trace {
            trace_logs.push_front(record_str);
            trace_logs.truncate(TRACE_CONTEXT_LINES);
        } else {
            if trace_logs.len() == TRACE_CONTEXT_LINES {
                eprintln!("{}", "...".dimmed());
            }
            for log in trace_logs.drain(0..).rev() {
                eprintln!("{}", log);
            }
            eprintln!("{}", record_str);
        }
    }

    fn flush(&self) {}
}

fn install(default_filter: &str) {
    ONCE_INIT.call_once(|| {
        let filter_config =
            std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| default_filter.to_string());
        let filter = env_logger::builder().parse_filters(&filter_config).build();
        let max_level = filter.filter();
        // Another logger may already be installed by the embedding application. Its level
        // configuration stays untouched in that case.
        if log::set_boxed_logger(Box::new(BridgeLogger::new(filter))).is_ok() {
            log::set_max_level(max_level);
        }
    });
}

pub fn init() {
    install("warn");
}

pub fn test_init(verbose: bool) {
    install(if verbose { "debug" } else { "warn" });
}
