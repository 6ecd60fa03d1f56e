//! Child-process downloader.
//!
//! Runs the configured miyuki command once per job and blocks until it
//! exits. There is no timeout at this layer; segment timeouts and retries are
//! passed through to miyuki as options.
//!
//! Output is drained as it arrives and only the last non-empty line of each
//! stream is kept, so a long run with progress output stays bounded.

use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use miyuki_core::{DownloadError, DownloadResult, DownloaderPort, JobConfig, MiyukiCommand};
use tracing::{debug, info, warn};

use crate::command::build_args;

/// [`DownloaderPort`] backed by the miyuki command-line tool.
#[derive(Debug, Clone)]
pub struct ProcessDownloader {
    command: MiyukiCommand,
}

impl ProcessDownloader {
    /// Create a downloader that launches `command`.
    pub const fn new(command: MiyukiCommand) -> Self {
        Self { command }
    }

    /// The launch command in use.
    pub const fn command(&self) -> &MiyukiCommand {
        &self.command
    }
}

impl DownloaderPort for ProcessDownloader {
    fn execute_download(&self, config: &JobConfig) -> DownloadResult<()> {
        let args = build_args(config);
        let program = &self.command.program;

        // Argument values are not logged: auth holds a password
        debug!(
            target: "miyuki.process",
            program = %program.display(),
            prefix = ?self.command.prefix_args,
            arg_count = args.len(),
            "Spawning miyuki"
        );

        let mut child = Command::new(program)
            .args(&self.command.prefix_args)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(program, &e))?;

        // Drain both pipes at once; a full pipe stalls the child
        let stdout = child
            .stdout
            .take()
            .map(|pipe| thread::spawn(move || last_line(pipe)));
        let stderr = child
            .stderr
            .take()
            .map(|pipe| thread::spawn(move || last_line(pipe)));

        let status = child.wait().map_err(|e| DownloadError::from_io_error(&e))?;
        let stdout_tail = stdout.and_then(|reader| reader.join().ok()).flatten();
        let stderr_tail = stderr.and_then(|reader| reader.join().ok()).flatten();

        if status.success() {
            info!(target: "miyuki.process", "miyuki exited successfully");
            return Ok(());
        }

        let code = status.code();
        let message = stderr_tail
            .or(stdout_tail)
            .unwrap_or_else(|| match code {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            });

        warn!(target: "miyuki.process", ?code, %message, "miyuki exited with failure");
        Err(DownloadError::process_failed(code, message))
    }
}

fn spawn_error(program: &Path, err: &io::Error) -> DownloadError {
    if err.kind() == io::ErrorKind::NotFound {
        DownloadError::unavailable(format!(
            "{} not found (install miyuki or pass --miyuki-bin)",
            program.display()
        ))
    } else {
        DownloadError::from_io_error(err)
    }
}

/// Read `stream` to the end, keeping only its last non-empty line.
///
/// Invalid UTF-8 is replaced rather than ending the read early.
fn last_line(stream: impl Read) -> Option<String> {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    let mut last = None;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim();
                if !line.is_empty() {
                    last = Some(line.to_owned());
                }
            }
        }
    }

    last
}
