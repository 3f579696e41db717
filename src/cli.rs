use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mydba")]
#[command(version)]
#[command(about = "MySQL database administration tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 접속 사용자 이름
    #[arg(short = 'u', long, global = true)]
    pub user: Option<String>,

    /// 접속 호스트
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// 접속 포트 (지정하면 --protocol=TCP로 접속)
    #[arg(short = 'P', long, global = true)]
    pub port: Option<String>,

    /// 유닉스 소켓 경로
    #[arg(short = 'S', long, global = true)]
    pub socket: Option<String>,

    /// 접속 비밀번호. 만들어지는 명령에는 MYSQL_PWD 환경 변수로만 전달됨
    #[arg(long, env = "MYDBA_PASSWORD", global = true)]
    pub password: Option<String>,

    /// 대상 데이터베이스 이름
    #[arg(short = 'D', long, global = true)]
    pub database: Option<String>,

    /// 확인 없이 바로 실행 (위험)
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// 명령어만 출력하고 실행하지 않음
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// 디버그 모드 (에코되는 명령어에 비밀번호를 가리지 않음)
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// 이번 실행을 작업 기록에 남기지 않음
    #[arg(long, global = true)]
    pub no_history: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 데이터베이스를 SQL 파일로 내보내기
    Export {
        /// 덤프를 저장할 파일 경로
        file: String,
    },

    /// SQL 파일에서 데이터베이스 복원
    Import {
        /// 읽어올 덤프 파일 경로
        file: String,
    },

    /// 데이터베이스 생성 (이미 있으면 아무 일도 하지 않음)
    Create,

    /// 데이터베이스 삭제
    Drop,

    /// SQL 문 실행
    Exec {
        /// 실행할 SQL 문
        statement: String,
    },

    /// 최근 작업 기록 출력
    History,

    /// 기본 설정 파일 생성
    Init,
}
