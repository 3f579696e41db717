use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// MySQL 접속 옵션
///
/// 인식되는 키는 user, host, port, socket, password, database 여섯 개입니다.
/// 그 외의 키는 받아들이되 플래그 조립에는 사용하지 않습니다.
/// port는 문자열 그대로 전달됩니다 (설정 파일에서는 `port = "3306"` 형태로 작성).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionOptions {
    /// 접속 사용자 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// DB 서버 호스트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// DB 서버 포트 (지정 시 --protocol=TCP 플래그가 추가됨)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// 유닉스 소켓 경로
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,

    /// 접속 비밀번호 (명령어 인자가 아닌 MYSQL_PWD 환경 변수로 전달됨)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// 대상 데이터베이스 이름
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    /// 인식되지 않는 나머지 키 (무시되지만 거부하지는 않음)
    #[serde(flatten)]
    pub extra: HashMap<String, String>,
}

/// mydba 사용자 설정
///
/// 설정 파일은 ~/.mydba/config.toml에 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// drop 확인 프롬프트 자동 승인 여부
    #[serde(default = "default_auto_approve")]
    pub auto_approve: bool,

    /// 실행 전 출력되는 명령어에 비밀번호를 그대로 표시할지 여부
    #[serde(default = "default_show_passwords")]
    pub show_passwords: bool,

    /// 작업 기록 파일 경로
    #[serde(default = "default_history_path")]
    pub history_path: String,

    /// 작업 기록 최대 보관 개수
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// 기본 접속 옵션 ([connection] 테이블, CLI 플래그가 우선)
    #[serde(default)]
    pub connection: ConnectionOptions,
}

fn default_auto_approve() -> bool {
    false
}

fn default_show_passwords() -> bool {
    false
}

fn default_history_path() -> String {
    let home = dirs::home_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string());
    format!("{}/.mydba_history.json", home)
}

fn default_history_limit() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_approve: default_auto_approve(),
            show_passwords: default_show_passwords(),
            history_path: default_history_path(),
            history_limit: default_history_limit(),
            connection: ConnectionOptions::default(),
        }
    }
}

impl Config {
    /// 설정 파일 경로 가져오기
    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".mydba").join("config.toml")
    }

    /// 설정 디렉토리 경로
    fn config_dir() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".mydba")
    }

    /// 설정 파일에서 로드 (없으면 기본값 사용)
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        // 설정 파일이 없으면 기본값 반환
        if !config_path.exists() {
            return Ok(Self::default());
        }

        // 설정 파일 읽기
        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::error::MyDbaError::ConfigError(e.to_string()))?;

        Ok(config)
    }

    /// 설정을 파일에 저장
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir();
        let config_path = Self::config_path();

        // 디렉토리가 없으면 생성
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        // TOML로 직렬화
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| crate::error::MyDbaError::ConfigError(e.to_string()))?;

        // 파일에 쓰기
        fs::write(&config_path, toml_string)?;

        Ok(())
    }

    /// 설정 파일 초기화 (기본값으로)
    pub fn init() -> Result<()> {
        let config = Self::default();
        config.save()
    }
}
