/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2026 ByteDance and/or its affiliates.
 */

use std::io::{self, IsTerminal, Write};

use chrono::Local;
use slog::{Drain, Level, OwnedKVList, Record};

mod format;
use format::KvCollector;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub struct StdLogValue {
    level: Level,
    message: String,
    kv_pairs: Vec<(String, String)>,
    location: Option<String>,
}

impl StdLogValue {
    fn message_str(&self) -> &str {
        if self.message.is_empty() {
            "()"
        } else {
            &self.message
        }
    }
}

/// Drain writing one line per record to stderr or stdout.
///
/// Colors are used only if the output is a terminal.
pub struct StdLogDrain {
    append_code_position: bool,
    use_stdout: bool,
    console: bool,
}

pub fn new_std_logger(append_code_position: bool, use_stdout: bool) -> StdLogDrain {
    let console = if use_stdout {
        io::stdout().is_terminal()
    } else {
        io::stderr().is_terminal()
    };
    StdLogDrain {
        append_code_position,
        use_stdout,
        console,
    }
}

impl StdLogDrain {
    fn build_value(&self, record: &Record, logger_values: &OwnedKVList) -> slog::Result<StdLogValue> {
        let mut kv_pairs = Vec::new();
        let mut collector = KvCollector::new(&mut kv_pairs);
        slog::KV::serialize(logger_values, record, &mut collector)?;
        slog::KV::serialize(&record.kv(), record, &mut collector)?;

        let location = if self.append_code_position {
            Some(format!("{}:{}", record.file(), record.line()))
        } else {
            None
        };

        Ok(StdLogValue {
            level: record.level(),
            message: record.msg().to_string(),
            kv_pairs,
            location,
        })
    }

    fn write_time<IO: Write>(&self, io: &mut IO) -> io::Result<()> {
        let datetime = Local::now();
        write!(io, "{}", datetime.format(TIME_FORMAT))
    }

    fn write_plain<IO: Write>(&self, io: &mut IO, v: StdLogValue) -> io::Result<()> {
        self.write_time(io)?;
        write!(io, " {}", v.level)?;
        for (k, v) in &v.kv_pairs {
            write!(io, " {k}: {v},")?;
        }
        write!(io, " {}", v.message_str())?;
        if let Some(location) = v.location {
            write!(io, " <{location}>")?;
        }
        writeln!(io)
    }

    fn write_console<IO: Write>(&self, io: &mut IO, v: StdLogValue) -> io::Result<()> {
        use anstyle::{AnsiColor, Color, Style};

        const COLOR_MAGENTA: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta)));
        const COLOR_RED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
        const COLOR_YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
        const COLOR_GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
        const COLOR_CYAN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
        const COLOR_BLUE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
        const STYLE_BOLD: Style = Style::new().bold();

        let bold_s = STYLE_BOLD.render();
        let bold_e = STYLE_BOLD.render_reset();

        self.write_time(io)?;
        let level_color = match v.level {
            Level::Critical => COLOR_MAGENTA,
            Level::Error => COLOR_RED,
            Level::Warning => COLOR_YELLOW,
            Level::Info => COLOR_GREEN,
            Level::Debug => COLOR_CYAN,
            Level::Trace => COLOR_BLUE,
        };
        write!(
            io,
            " {}{}{}",
            level_color.render(),
            v.level,
            level_color.render_reset(),
        )?;

        for (k, v) in &v.kv_pairs {
            write!(io, " {bold_s}{k}{bold_e}={v},")?;
        }

        write!(io, " {bold_s}{}{bold_e}", v.message_str())?;

        if let Some(location) = v.location {
            write!(io, " <{location}>")?;
        }
        writeln!(io)
    }
}

impl Drain for StdLogDrain {
    type Ok = ();
    type Err = slog::Error;

    fn log(&self, record: &Record, logger_values: &OwnedKVList) -> Result<(), slog::Error> {
        let v = self.build_value(record, logger_values)?;

        let mut buf: Vec<u8> = Vec::with_capacity(256);
        if self.console {
            self.write_console(&mut buf, v)?;
        } else {
            self.write_plain(&mut buf, v)?;
        }

        if self.use_stdout {
            io::stdout().lock().write_all(&buf)?;
        } else {
            io::stderr().lock().write_all(&buf)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value() -> StdLogValue {
        StdLogValue {
            level: Level::Warning,
            message: "skipped malformed tag".to_string(),
            kv_pairs: vec![("index".to_string(), "2".to_string())],
            location: Some("src/main.rs:10".to_string()),
        }
    }

    #[test]
    fn plain_line() {
        let drain = new_std_logger(true, false);
        let mut buf = Vec::new();
        drain.write_plain(&mut buf, value()).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.ends_with(" WARN index: 2, skipped malformed tag <src/main.rs:10>\n"));
    }

    #[test]
    fn empty_message() {
        let mut v = value();
        v.message.clear();
        assert_eq!(v.message_str(), "()");
    }
}
