use crate::command::shell::ShellCommand;
use crate::config::ConnectionOptions;
use crate::error::{MyDbaError, Result};
use crate::executor::resolver::ToolResolver;
use std::path::PathBuf;

/// 수행할 관리 작업
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// 데이터베이스를 SQL 파일로 내보내기
    Export { dest: String },
    /// SQL 파일에서 데이터베이스 복원
    Import { src: String },
    /// 데이터베이스 삭제
    Drop,
    /// 데이터베이스 생성
    Create,
    /// SQL 문 실행
    Execute { statement: String },
}

impl Operation {
    /// 작업 이름 (기록과 메시지용)
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Export { .. } => "export",
            Operation::Import { .. } => "import",
            Operation::Drop => "drop",
            Operation::Create => "create",
            Operation::Execute { .. } => "exec",
        }
    }
}

/// 접속 옵션과 작업을 실행 가능한 명령으로 조립
///
/// 부수 효과 없이 `ShellCommand` 값만 만들어 반환합니다. 작업마다 필요한
/// 외부 도구 하나를 리졸버로 정확히 한 번 찾습니다. 옵션 값은 검증 없이
/// 그대로 사용하되, 비밀번호만은 인자 목록이 아닌 환경 변수로 옮깁니다.
pub struct CommandBuilder<'a> {
    options: &'a ConnectionOptions,
    resolver: &'a dyn ToolResolver,
}

impl<'a> CommandBuilder<'a> {
    const DUMP_TOOL: &'static str = "mysqldump";
    const CLIENT_TOOL: &'static str = "mysql";
    const ADMIN_TOOL: &'static str = "mysqladmin";

    pub fn new(options: &'a ConnectionOptions, resolver: &'a dyn ToolResolver) -> Self {
        Self { options, resolver }
    }

    /// 작업 종류에 맞는 조립 함수로 분기
    pub fn build(&self, operation: &Operation) -> Result<ShellCommand> {
        match operation {
            Operation::Export { dest } => self.build_export(dest),
            Operation::Import { src } => self.build_import(src),
            Operation::Drop => self.build_drop(),
            Operation::Create => self.build_create(),
            Operation::Execute { statement } => self.build_execute(statement),
        }
    }

    /// mysqldump로 데이터베이스를 파일로 내보내는 명령 조립
    pub fn build_export(&self, dest: &str) -> Result<ShellCommand> {
        let database = self.database()?.to_string();
        let program = self.resolver.resolve(Self::DUMP_TOOL)?;

        Ok(self.base_command(program).arg(database).stdout_to(dest))
    }

    /// SQL 파일을 mysql 표준 입력으로 흘려보내는 복원 명령 조립
    pub fn build_import(&self, src: &str) -> Result<ShellCommand> {
        let database = self.database()?.to_string();
        let program = self.resolver.resolve(Self::CLIENT_TOOL)?;

        Ok(self.base_command(program).arg(database).stdin_from(src))
    }

    /// mysqladmin으로 데이터베이스를 삭제하는 명령 조립
    ///
    /// mysqladmin 자체의 확인 프롬프트를 끄기 위해 -f를 항상 포함합니다.
    /// 대화형 확인은 UI 계층의 책임입니다.
    pub fn build_drop(&self) -> Result<ShellCommand> {
        let database = self.database()?.to_string();
        let program = self.resolver.resolve(Self::ADMIN_TOOL)?;

        Ok(self
            .base_command(program)
            .arg("-f")
            .arg("drop")
            .arg(database))
    }

    /// CREATE DATABASE IF NOT EXISTS 문을 실행하는 명령 조립
    ///
    /// 아직 존재하지 않는 데이터베이스일 수 있으므로 USE 절 없이 실행합니다.
    pub fn build_create(&self) -> Result<ShellCommand> {
        let statement = format!("CREATE DATABASE IF NOT EXISTS {}", self.database()?);

        self.build_statement(&statement, None)
    }

    /// 설정된 데이터베이스를 대상으로 SQL 문을 실행하는 명령 조립
    pub fn build_execute(&self, statement: &str) -> Result<ShellCommand> {
        let database = self.database()?.to_string();

        self.build_statement(statement, Some(&database))
    }

    /// mysql -e 비대화형 모드로 SQL 문을 실행하는 명령 조립
    ///
    /// target이 있으면 문 앞에 ``USE `이름`;``을 붙이고, 없으면 데이터베이스
    /// 컨텍스트 없이 그대로 실행합니다.
    pub fn build_statement(&self, statement: &str, target: Option<&str>) -> Result<ShellCommand> {
        let full_statement = match target {
            Some(database) => format!("USE `{}`; {}", database, statement),
            None => statement.to_string(),
        };

        let program = self.resolver.resolve(Self::CLIENT_TOOL)?;

        Ok(self.base_command(program).arg("-e").arg(full_statement))
    }

    /// 자격 증명 환경 변수와 접속 플래그까지 얹은 공통 뼈대
    fn base_command(&self, program: PathBuf) -> ShellCommand {
        let mut cmd = ShellCommand::new(program);

        // 비밀번호는 프로세스 목록에 노출되지 않도록 환경 변수로만 전달
        if let Some(password) = &self.options.password {
            cmd = cmd.env("MYSQL_PWD", password.as_str());
        }

        cmd.args(self.connection_flags())
    }

    /// 접속 플래그 조립
    ///
    /// 값이 있는 키만 `--키=값` 플래그가 되며 순서는 user, host, port, socket
    /// 고정입니다. port가 있으면 마지막에 --protocol=TCP가 붙습니다.
    fn connection_flags(&self) -> Vec<String> {
        let recognized: [(&str, &Option<String>); 4] = [
            ("user", &self.options.user),
            ("host", &self.options.host),
            ("port", &self.options.port),
            ("socket", &self.options.socket),
        ];

        let mut flags: Vec<String> = Vec::new();
        for (key, value) in recognized {
            if let Some(value) = value {
                flags.push(format!("--{}={}", key, value));
            }
        }

        if self.options.port.is_some() {
            flags.push("--protocol=TCP".to_string());
        }

        flags
    }

    fn database(&self) -> Result<&str> {
        self.options
            .database
            .as_deref()
            .ok_or(MyDbaError::MissingDatabase)
    }
}
