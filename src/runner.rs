//! Run Executor: one invocation of one benchmarked program.

use std::fs;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::error::{BenchError, RunResult};
use crate::parser::parse_line;
use crate::schema::{ResultsTable, END_TO_END};

/// What a single invocation did, besides the samples it appended.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub status: ExitStatus,
    pub elapsed: Duration,
    /// Timing lines parsed from stdout (excludes `end_to_end`).
    pub timings: usize,
}

/// Fails unless `path` is an existing regular file with an executable bit set.
pub fn check_executable(path: &Path) -> RunResult<()> {
    let meta = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BenchError::ExecutableNotFound(path.to_path_buf()),
        _ => BenchError::Io {
            exe: path.to_path_buf(),
            source,
        },
    })?;
    if !meta.is_file() || !is_executable(&meta) {
        return Err(BenchError::NotExecutable(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    true
}

/// Runs `exe input` to completion and appends its samples to `table`, tagged with
/// `iteration`.
///
/// Stdout is drained line by line while the child runs and until end of stream; stderr is
/// inherited. The wall clock around spawn..exit is appended as [`END_TO_END`]. A non-zero
/// exit status is not an error: whatever the child reported before exiting is kept.
///
/// On a malformed timing line nothing is appended, the child is killed and reaped, and the
/// error is returned.
pub fn run_once(
    exe: &Path,
    input: &str,
    iteration: usize,
    table: &mut ResultsTable,
) -> RunResult<RunOutcome> {
    info!("Executing {input} using {}", exe.display());

    let start = Instant::now();
    let mut child = Command::new(exe)
        .arg(input)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| BenchError::Spawn {
            exe: exe.to_path_buf(),
            source,
        })?;

    let observed = match child.stdout.take() {
        Some(stdout) => drain(exe, stdout),
        None => Ok(Vec::new()),
    };
    let observed = match observed {
        Ok(observed) => observed,
        Err(err) => {
            reap(&mut child);
            return Err(err);
        }
    };

    let status = child.wait().map_err(|source| BenchError::Io {
        exe: exe.to_path_buf(),
        source,
    })?;
    let elapsed = start.elapsed();

    if !status.success() {
        warn!("{} exited with {status}", exe.display());
    }

    for (name, seconds) in &observed {
        table.record(name, iteration, *seconds);
    }
    table.record(END_TO_END, iteration, elapsed.as_secs_f64());

    let mut names: Vec<&str> = observed.iter().map(|(n, _)| n.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    info!("Found timings: {names:?}");

    Ok(RunOutcome {
        status,
        elapsed,
        timings: observed.len(),
    })
}

/// Reads `stdout` to end of stream, collecting timing observations in emission order.
/// The handle is dropped on every return path.
fn drain(exe: &Path, stdout: impl Read) -> RunResult<Vec<(String, f64)>> {
    let mut reader = BufReader::new(stdout);
    let mut buf = Vec::new();
    let mut observed = Vec::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| BenchError::Io {
                exe: exe.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let parsed = parse_line(&line).map_err(|source| BenchError::MalformedTiming {
            exe: exe.to_path_buf(),
            source,
        })?;
        if let Some(t) = parsed {
            debug!("{}: {} = {}", exe.display(), t.name, t.seconds);
            observed.push((t.name.to_string(), t.seconds));
        }
    }

    Ok(observed)
}

fn reap(child: &mut Child) {
    if let Err(err) = child.kill() {
        debug!("kill after failed drain: {err}");
    }
    if let Err(err) = child.wait() {
        debug!("wait after failed drain: {err}");
    }
}
