//! Colour policy for terminal output

use std::env;
use std::io::IsTerminal;

/// Colour-related environment, captured once
#[derive(Debug, Default)]
struct ColorEnv {
    no_color: bool,
    clicolor_force: Option<String>,
    clicolor: Option<String>,
    stdout_is_tty: bool,
}

impl ColorEnv {
    fn capture() -> Self {
        Self {
            no_color: env::var_os("NO_COLOR").is_some(),
            clicolor_force: env::var("CLICOLOR_FORCE").ok(),
            clicolor: env::var("CLICOLOR").ok(),
            stdout_is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// NO_COLOR beats CLICOLOR_FORCE, which beats CLICOLOR=0, which beats TTY detection
    fn wants_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        if self.clicolor_force.as_deref().is_some_and(|v| v != "0") {
            return true;
        }
        if self.clicolor.as_deref() == Some("0") {
            return false;
        }
        self.stdout_is_tty
    }
}

/// Whether report output should be styled
pub fn should_use_colors() -> bool {
    ColorEnv::capture().wants_color()
}
