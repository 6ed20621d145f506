// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Routes events from crates instrumented with `tracing` to stdout.
//!
//! The lrucache crates log through the `log` facade, so dependencies emitting `tracing`
//! events would otherwise go unseen. Adding the `use_tracing` flag to `LRUCACHE_LOG`
//! installs a subscriber which prints those events in the same line layout as
//! [`LogLine`](super::logger::LogLine). Which events pass is decided by `RUST_LOG`, not by
//! the `LRUCACHE_LOG` levels:
//!
//! ```text
//! LRUCACHE_LOG="stdout=Info;use_tracing" RUST_LOG=hyper=debug,tokio=warn lrucache-demo
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{SecondsFormat, Utc};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, FmtContext, FormatEvent, FormatFields, format::Writer},
    prelude::*,
    registry::LookupSpan,
};

use crate::enums::LogColor;

/// The filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_TRACING_FILTER: &str = "warn";

static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Writes `tracing` events as `<timestamp> [LEVEL] target: fields` lines.
struct LineFormatter {
    is_colored: bool,
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
        let level = to_log_level(*event.metadata().level());
        let target = event.metadata().target();

        if self.is_colored {
            let color = LogColor::from(level);
            write!(
                writer,
                "\x1b[1m{timestamp}\x1b[0m {}[{level}] {target}: ",
                color.as_ansi()
            )?;
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            writeln!(writer, "\x1b[0m")
        } else {
            write!(writer, "{timestamp} [{level}] {target}: ")?;
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            writeln!(writer)
        }
    }
}

fn to_log_level(level: Level) -> log::Level {
    match level {
        Level::TRACE => log::Level::Trace,
        Level::DEBUG => log::Level::Debug,
        Level::INFO => log::Level::Info,
        Level::WARN => log::Level::Warn,
        Level::ERROR => log::Level::Error,
    }
}

/// Returns whether the tracing subscriber has been installed.
#[must_use]
pub fn tracing_is_initialized() -> bool {
    TRACING_INITIALIZED.load(Ordering::Relaxed)
}

/// Installs the global `tracing` subscriber, filtered by `RUST_LOG`.
///
/// Falls back to [`DEFAULT_TRACING_FILTER`] when `RUST_LOG` is unset or does not parse.
///
/// # Errors
///
/// Returns an error if this or any other global `tracing` subscriber is already installed.
pub fn init_tracing(is_colored: bool) -> anyhow::Result<()> {
    if TRACING_INITIALIZED.load(Ordering::SeqCst) {
        anyhow::bail!("Tracing subscriber already initialized");
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACING_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().event_format(LineFormatter { is_colored }))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    TRACING_INITIALIZED.store(true, Ordering::SeqCst);
    Ok(())
}
