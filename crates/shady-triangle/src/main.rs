mod app;

use std::io::Write;

use anyhow::Result;
use winit::dpi::LogicalSize;

use shady_engine::device::GpuInit;
use shady_engine::logging::{init_logging, LoggingConfig};
use shady_engine::window::{Runtime, RuntimeConfig};

use app::TriangleApp;

const WINDOW_TITLE: &str = "SHADY windows";
const WINDOW_SIZE: f64 = 800.0;

/// Printed to stdout when the window or its context cannot be created.
const STARTUP_FAILURE_MESSAGE: &str = "Failed to create window";
const STARTUP_FAILURE_STATUS: i32 = -1;

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(WINDOW_SIZE, WINDOW_SIZE),
        resizable: false,
    };

    let result = Runtime::run(config, GpuInit::default(), TriangleApp::new());

    let status = report(&result, &mut std::io::stdout().lock());
    if status != 0 {
        std::process::exit(status);
    }
}

/// Maps the run result to a process exit status, printing the failure line.
fn report(result: &Result<()>, out: &mut impl Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("run failed: {e:?}");
            // Nothing else to do if stdout itself is gone.
            let _ = writeln!(out, "{STARTUP_FAILURE_MESSAGE}");
            STARTUP_FAILURE_STATUS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_run_exits_zero_silently() {
        let mut out = Vec::new();
        assert_eq!(report(&Ok(()), &mut out), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn startup_failure_prints_one_line_and_exits_non_zero() {
        let mut out = Vec::new();
        let err = anyhow::anyhow!("no display").context("failed to create window");

        assert_eq!(report(&Err(err), &mut out), -1);
        assert_eq!(String::from_utf8(out).unwrap(), "Failed to create window\n");
    }
}
