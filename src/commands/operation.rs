use crate::cli::Cli;
use crate::command::{CommandBuilder, Operation};
use crate::config::{Config, ConnectionOptions};
use crate::error::Result;
use crate::executor::{ProcessRunner, StdProcessRunner, WhichResolver};
use crate::history::{HistoryStore, OperationRecord};
use crate::ui::ConfirmPrompt;
use colored::*;

/// 작업 하나를 조립부터 기록까지 끝까지 수행
///
/// 반환값은 외부 프로세스의 성공 여부입니다. 드라이런과 사용자의 실행
/// 거절은 성공으로 취급합니다.
pub fn execute_operation(cli: &Cli, config: &Config, operation: Operation) -> Result<bool> {
    // 1. 설정 파일 값 위에 CLI 플래그를 키 단위로 덮어쓰기
    let options = merge_options(cli, config);

    // 2. 명령 조립 (데이터베이스 누락이면 여기서 끝, 프로세스 실행 없음)
    let resolver = WhichResolver::new();
    let builder = CommandBuilder::new(&options, &resolver);
    let command = builder.build(&operation)?;

    let reveal = cli.debug || config.show_passwords;

    // 3. 드라이런이면 명령만 출력하고 실행하지 않음
    if cli.dry_run {
        let rendered = if reveal {
            command.render()
        } else {
            command.render_redacted()
        };
        println!("{}", rendered);
        return Ok(true);
    }

    // 4. drop은 실행 직전 확인 (--yes 또는 auto_approve면 생략)
    if matches!(operation, Operation::Drop) && !cli.yes && !config.auto_approve {
        let database = options.database.as_deref().unwrap_or_default();
        let prompt = ConfirmPrompt::new();

        if !prompt.confirm_drop(database)? {
            eprintln!("{}", "[X] User cancelled.".yellow());
            return Ok(true);
        }
    }

    // 5. 실행
    let runner = StdProcessRunner::new(reveal);
    let result = runner.run(&command)?;

    if !result.output.is_empty() {
        print!("{}", result.output);
    }

    if result.success {
        eprintln!("{} {} complete", "[OK]".green().bold(), operation.name());
    } else {
        eprintln!("{} {} failed", "[X]".red().bold(), operation.name());
    }

    // 6. 작업 기록. 기록 실패가 작업 결과를 바꾸지는 않음
    if !cli.no_history {
        let store = HistoryStore::from_config(config);
        let record = OperationRecord::from_run(&operation, &command, result.success);

        if let Err(e) = store.add(record) {
            eprintln!("Warning: Failed to save history: {}", e);
        }
    }

    Ok(result.success)
}

/// 설정 파일의 [connection] 값 위에 CLI 플래그를 덮은 최종 접속 옵션
fn merge_options(cli: &Cli, config: &Config) -> ConnectionOptions {
    let base = &config.connection;

    ConnectionOptions {
        user: cli.user.clone().or_else(|| base.user.clone()),
        host: cli.host.clone().or_else(|| base.host.clone()),
        port: cli.port.clone().or_else(|| base.port.clone()),
        socket: cli.socket.clone().or_else(|| base.socket.clone()),
        password: cli.password.clone().or_else(|| base.password.clone()),
        database: cli.database.clone().or_else(|| base.database.clone()),
        extra: base.extra.clone(),
    }
}
