//! Interactive presentation of a rendered plot.

use nodeplot_common::{NodePlotError, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Shows a rendered image to the user.
#[cfg_attr(test, mockall::automock)]
pub trait PlotViewer {
    /// Presents the image at `image`.
    fn show(&self, image: &Path) -> Result<()>;

    /// Whether [`show`](Self::show) returns only once the image has been
    /// closed. When it does not, the image must outlive the call.
    fn waits_for_close(&self) -> bool {
        true
    }
}

/// Opens the image with an external program and waits for it to exit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemViewer {
    command: Option<String>,
    detached: bool,
}

impl SystemViewer {
    /// Uses `command` when given, otherwise the platform opener.
    pub fn new(command: Option<String>) -> Self {
        Self {
            command,
            detached: false,
        }
    }

    /// Marks the configured command as one that hands the image to another
    /// process and exits before the image is closed.
    #[must_use]
    pub fn detached(mut self, detached: bool) -> Self {
        self.detached = detached;
        self
    }

    /// Program and arguments that will be run for `image`.
    pub fn command_line(&self, image: &Path) -> Result<(OsString, Vec<OsString>)> {
        let mut parts: Vec<OsString> = match &self.command {
            Some(command) => command.split_whitespace().map(OsString::from).collect(),
            None => platform_opener().iter().map(OsString::from).collect(),
        };

        if parts.is_empty() {
            return Err(NodePlotError::display("Viewer command is empty"));
        }

        let program = parts.remove(0);
        parts.push(image.as_os_str().to_os_string());
        Ok((program, parts))
    }
}

impl PlotViewer for SystemViewer {
    fn waits_for_close(&self) -> bool {
        !self.detached && (self.command.is_some() || PLATFORM_OPENER_WAITS)
    }

    fn show(&self, image: &Path) -> Result<()> {
        let (program, args) = self.command_line(image)?;
        info!(viewer = %program.to_string_lossy(), "Opening plot");

        let status = Command::new(&program).args(&args).status().map_err(|e| {
            NodePlotError::display_with_source(
                format!("Failed to launch viewer '{}'", program.to_string_lossy()),
                e,
            )
        })?;

        if !status.success() {
            return Err(NodePlotError::display(format!(
                "Viewer '{}' exited with {status}",
                program.to_string_lossy()
            )));
        }

        Ok(())
    }
}

/// `open -W` and `start /WAIT` block until the viewer exits, `xdg-open` does not.
const PLATFORM_OPENER_WAITS: bool = cfg!(any(target_os = "macos", target_os = "windows"));

#[cfg(target_os = "macos")]
const fn platform_opener() -> &'static [&'static str] {
    &["open", "-W"]
}

#[cfg(target_os = "windows")]
const fn platform_opener() -> &'static [&'static str] {
    &["cmd", "/C", "start", "/WAIT", ""]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const fn platform_opener() -> &'static [&'static str] {
    &["xdg-open"]
}
