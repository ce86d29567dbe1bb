//! Process execution for external documentation tools.

use super::{Invocation, ToolRunner, tool_detection};
use crate::cli::OutputManager;
use crate::error::{BuilderError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Number of trailing lines per stream kept for a failure message
const OUTPUT_TAIL: usize = 20;

/// Runs invocations as child processes.
///
/// Stdout is streamed to the output manager as it arrives. The last lines of
/// both streams are kept; on failure they become the error message, since
/// webpack reports compile errors on stdout. There is no timeout: a tool that
/// never exits blocks the build.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    output: OutputManager,
}

impl ProcessRunner {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

/// Reads `stream` to EOF, calling `on_line` for each line and keeping the
/// last [`OUTPUT_TAIL`] lines.
///
/// Lines are decoded lossily, so invalid UTF-8 does not end the read.
async fn drain_lines<R, F>(stream: Option<R>, mut on_line: F) -> VecDeque<String>
where
    R: AsyncRead + Unpin,
    F: FnMut(&str),
{
    let mut tail = VecDeque::with_capacity(OUTPUT_TAIL);
    let Some(stream) = stream else {
        return tail;
    };

    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                let line = line.trim_end_matches(['\n', '\r']);
                on_line(line);
                if tail.len() == OUTPUT_TAIL {
                    tail.pop_front();
                }
                tail.push_back(line.to_string());
            }
            Err(e) => {
                log::debug!("Stopped reading tool output: {}", e);
                break;
            }
        }
    }
    tail
}

/// Single-line failure reason: exit status plus the non-empty output tails.
fn failure_reason(code: Option<i32>, stdout: &VecDeque<String>, stderr: &VecDeque<String>) -> String {
    let mut reason = match code {
        Some(code) => format!("exited with code {}", code),
        None => "terminated by signal".to_string(),
    };

    let output: Vec<&str> = stderr
        .iter()
        .chain(stdout.iter())
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    if !output.is_empty() {
        reason.push_str(": ");
        reason.push_str(&output.join("; "));
    }
    reason
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        let program = tool_detection::locate(&invocation.program, &invocation.cwd).ok_or_else(
            || BuilderError::Tool {
                tool: invocation.label.clone(),
                reason: format!(
                    "`{}` not found in {}/node_modules/.bin or PATH",
                    invocation.program,
                    invocation.cwd.display()
                ),
            },
        )?;

        log::debug!("Running: {}", invocation);
        self.output.verbose(&format!("$ {}", invocation));

        let mut child = Command::new(&program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BuilderError::Tool {
                tool: invocation.label.clone(),
                reason: format!("failed to start {}: {}", program.display(), e),
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Drain both pipes before waiting so a chatty tool cannot block on a full pipe
        let (stdout_tail, stderr_tail) = tokio::join!(
            drain_lines(stdout, |line| self.output.indent(line)),
            drain_lines(stderr, |line| log::debug!("[{}] {}", invocation.label, line)),
        );

        let status = child.wait().await.map_err(|e| BuilderError::Tool {
            tool: invocation.label.clone(),
            reason: e.to_string(),
        })?;

        if status.success() {
            return Ok(());
        }

        for line in stderr_tail.iter().chain(stdout_tail.iter()) {
            log::debug!("[{}] {}", invocation.label, line);
        }

        Err(BuilderError::Tool {
            tool: invocation.label.clone(),
            reason: failure_reason(status.code(), &stdout_tail, &stderr_tail),
        })
    }
}
