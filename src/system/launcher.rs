//! 외부 프로세스 실행 (파일 열기, 파일 관리자에서 보기, 셸 명령)
//!
//! 모두 실행만 하고 결과를 기다리지 않는다.

use crate::utils::error::{BenthosError, Result};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use tracing::{debug, info, warn};

/// macOS Finder에서 항목을 선택해 보여주는 AppleScript
#[cfg(target_os = "macos")]
const REVEAL_IN_FINDER: &str = r#"
    tell application "Finder"
        reveal POSIX file "{path}"
        activate
    end tell
"#;

/// 외부 프로세스 협력자
pub trait ProcessRunner {
    /// 기본 프로그램으로 파일 열기
    fn open_file(&self, path: &Path) -> Result<()>;
    /// 시스템 파일 관리자에서 경로 보기
    fn reveal(&self, path: &Path) -> Result<()>;
    /// `cwd`에서 셸 명령 실행 (종료를 기다리지 않음)
    fn run_shell(&self, command: &str, cwd: &Path) -> Result<()>;
}

/// 실제 OS 프로세스를 띄우는 실행기
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl SystemLauncher {
    pub fn new() -> Self {
        Self
    }

    fn spawn(program: &str, command: &mut Command) -> Result<Child> {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BenthosError::Launch {
                program: program.to_string(),
                reason: e.to_string(),
            })
    }

    /// 좀비 프로세스가 남지 않도록 별도 스레드에서 종료 대기
    fn reap(label: String, mut child: Child) {
        let pid = child.id();
        thread::spawn(move || match child.wait() {
            Ok(status) => info!(pid, %status, command = %label, "process finished"),
            Err(e) => warn!(pid, error = %e, command = %label, "failed to wait for process"),
        });
    }

    #[cfg(target_os = "macos")]
    fn opener() -> &'static str {
        "open"
    }

    #[cfg(not(target_os = "macos"))]
    fn opener() -> &'static str {
        "xdg-open"
    }
}

impl ProcessRunner for SystemLauncher {
    fn open_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(BenthosError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        let program = Self::opener();
        debug!(program, path = %path.display(), "opening file");
        let child = Self::spawn(program, Command::new(program).arg(path))?;
        Self::reap(format!("{} {}", program, path.display()), child);
        Ok(())
    }

    #[cfg(target_os = "macos")]
    fn reveal(&self, path: &Path) -> Result<()> {
        use std::io::Write;

        let script = REVEAL_IN_FINDER.replace("{path}", &path.to_string_lossy());
        let mut child = Command::new("osascript")
            .args(["-", "2", "2"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BenthosError::Launch {
                program: "osascript".to_string(),
                reason: e.to_string(),
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(script.as_bytes())?;
        }
        Self::reap(format!("reveal {}", path.display()), child);
        Ok(())
    }

    #[cfg(not(target_os = "macos"))]
    fn reveal(&self, path: &Path) -> Result<()> {
        // 항목 선택까지 지원하는 표준 방법이 없으므로 상위 디렉토리를 연다
        let dir = if path.is_dir() {
            path
        } else {
            path.parent().unwrap_or(path)
        };
        let program = Self::opener();
        let child = Self::spawn(program, Command::new(program).arg(dir))?;
        Self::reap(format!("reveal {}", dir.display()), child);
        Ok(())
    }

    fn run_shell(&self, command: &str, cwd: &Path) -> Result<()> {
        info!(command, cwd = %cwd.display(), "running shell command");
        let child = Self::spawn("sh", Command::new("sh").arg("-c").arg(command).current_dir(cwd))?;
        Self::reap(command.to_string(), child);
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    #[test]
    fn test_run_shell_uses_working_directory() {
        let temp = TempDir::new().unwrap();
        SystemLauncher::new()
            .run_shell("touch created-here", temp.path())
            .unwrap();

        let target = temp.path().join("created-here");
        let deadline = Instant::now() + Duration::from_secs(5);
        while !target.exists() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }
        assert!(target.exists());
    }

    #[test]
    fn test_open_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let result = SystemLauncher::new().open_file(&temp.path().join("missing"));
        assert!(matches!(result, Err(BenthosError::PathNotFound { .. })));
    }
}
