// SPDX-License-Identifier: Unlicense

//! Echo integers typed on stdin, tracing anything else to stdout.
//!
//! `errtrace-demo [silent|error|info|debug]`

use liberrtrace::*;

use std::fmt;
use std::io::{self, BufRead, Write as _};

/// Stdout as a trace sink.
struct Console(io::Stdout);

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

type T = Tracer<Console>;

/// Parse one integer from the user.
fn get_user_int(t: &mut T, line: &str) -> Result<i32> {
    let line = line.trim();
    ensure!(t, !line.is_empty(), ErrorCode::INPUT, "nothing typed");
    debug!(t, "parsing {:?}", line);
    match line.parse() {
        Ok(value) => Ok(value),
        Err(_) => raise!(t, ErrorCode::TYPE, "{:x?}", line.as_bytes()),
    }
}

/// Echo the integer back, or trace why not and recover.
fn print_user_int(t: &mut T, line: &str) {
    let value = match get_user_int(t, line) {
        Ok(value) => value,
        Err(_) => {
            log_err!(t);
            clear_log!(t);
            return;
        }
    };
    info!(t, "got {}", value);
    println!();
    println!("{}", value);
}

fn main() {
    let threshold = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<LevelFilter>() {
            Ok(threshold) => threshold,
            Err(e) => {
                eprintln!("errtrace-demo: {}", e);
                std::process::exit(2);
            }
        },
        None => LevelFilter::Debug,
    };

    let config = Config::new().with_threshold(threshold);
    let mut t = Tracer::with_config(Console(io::stdout()), config);
    info!(t, "type an integer per line");

    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => print_user_int(&mut t, &line),
            Err(e) => {
                eprintln!("errtrace-demo: {}", e);
                std::process::exit(1);
            }
        }
        t.sink_mut().0.flush().unwrap_or(());
    }
    println!();
}
