use crate::command::{Operation, ShellCommand};
use crate::config::Config;
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 작업 기록 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRecord {
    /// 작업 이름
    pub operation: String,
    /// 실행한 명령
    pub command: String,
    /// 성공 여부
    pub success: bool,
    /// 실행 시간
    pub timestamp: DateTime<Utc>,
}

impl OperationRecord {
    /// 실행 결과로부터 기록 항목 생성
    ///
    /// 명령 문자열은 show_passwords 설정과 무관하게 항상 가린 형태로만
    /// 저장합니다.
    pub fn from_run(operation: &Operation, command: &ShellCommand, success: bool) -> Self {
        Self {
            operation: operation.name().to_string(),
            command: command.render_redacted(),
            success,
            timestamp: Utc::now(),
        }
    }
}

/// 작업 기록 저장소
pub struct HistoryStore {
    file_path: PathBuf,
    max_entries: usize,
}

impl HistoryStore {
    pub fn new(file_path: PathBuf, max_entries: usize) -> Self {
        Self {
            file_path,
            max_entries,
        }
    }

    /// 설정 파일에 지정된 경로와 한도로 저장소 생성
    pub fn from_config(config: &Config) -> Self {
        Self::new(PathBuf::from(&config.history_path), config.history_limit)
    }

    /// 기록 파일에서 모든 항목 로드
    pub fn load(&self) -> Result<Vec<OperationRecord>> {
        if !self.file_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path).unwrap_or_else(|_| "[]".to_string());

        // 손상된 파일은 빈 기록으로 취급
        let records: Vec<OperationRecord> =
            serde_json::from_str(&content).unwrap_or_else(|_| Vec::new());

        Ok(records)
    }

    /// 새 항목을 히스토리에 추가
    pub fn add(&self, record: OperationRecord) -> Result<()> {
        let mut records = self.load()?;

        // 새 항목을 맨 앞에 추가
        records.insert(0, record);

        // 최대 개수 제한
        if records.len() > self.max_entries {
            records.truncate(self.max_entries);
        }

        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.file_path, json)?;

        Ok(())
    }
}
