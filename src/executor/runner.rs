use crate::command::ShellCommand;
use crate::error::{MyDbaError, Result};
use colored::*;
use std::fs::File;
use std::process::{Command, Stdio};

/// 프로세스 실행 결과
///
/// 0이 아닌 종료 코드는 오류가 아니라 값으로 전달합니다. 호출한 쪽이
/// 실패를 어떻게 보고할지 결정합니다.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// 종료 코드가 0이었는지 여부
    pub success: bool,
    /// stdout과 stderr를 순서대로 합친 출력
    pub output: String,
}

/// 조립된 명령을 실행하는 인터페이스
pub trait ProcessRunner {
    fn run(&self, command: &ShellCommand) -> Result<ExecutionResult>;
}

/// std::process 기반 기본 러너
pub struct StdProcessRunner {
    /// 에코에 비밀번호를 가리지 않고 그대로 보여줄지 여부
    reveal_passwords: bool,
}

impl StdProcessRunner {
    pub fn new(reveal_passwords: bool) -> Self {
        Self { reveal_passwords }
    }
}

impl ProcessRunner for StdProcessRunner {
    fn run(&self, command: &ShellCommand) -> Result<ExecutionResult> {
        let echoed = if self.reveal_passwords {
            command.render()
        } else {
            command.render_redacted()
        };
        eprintln!("{} {}", "[>]".cyan().bold(), echoed);

        // 셸을 거치지 않고 인자 배열 그대로 실행
        let mut process = Command::new(&command.program);
        process.args(&command.args);
        process.envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        if let Some(path) = &command.stdin_from {
            process.stdin(Stdio::from(File::open(path)?));
        }

        if let Some(path) = &command.stdout_to {
            process.stdout(Stdio::from(File::create(path)?));
        }

        let output = process.output().map_err(|e| {
            MyDbaError::ExecutionError(format!("{}: {}", command.program.display(), e))
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ExecutionResult {
            success: output.status.success(),
            output: combined,
        })
    }
}
