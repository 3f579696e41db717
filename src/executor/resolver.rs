use crate::error::{MyDbaError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Mutex;

/// 도구 이름을 실행 파일 경로로 바꾸는 인터페이스
///
/// 명령 조립이 PATH 상태에 묶이지 않도록 트레이트로 분리합니다.
pub trait ToolResolver {
    fn resolve(&self, tool: &str) -> Result<PathBuf>;
}

/// 한 번 찾은 경로는 프로세스 전역으로 캐시
static RESOLVED_PATHS: Lazy<Mutex<HashMap<String, PathBuf>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// which 명령으로 PATH를 조회하는 기본 리졸버
pub struct WhichResolver;

impl WhichResolver {
    pub fn new() -> Self {
        Self
    }

    fn lookup(tool: &str) -> Result<PathBuf> {
        let output = Command::new("which")
            .arg(tool)
            .output()
            .map_err(|_| MyDbaError::ExecutableNotFound(tool.to_string()))?;

        let path = String::from_utf8_lossy(&output.stdout).trim().to_string();

        if !output.status.success() || path.is_empty() {
            return Err(MyDbaError::ExecutableNotFound(tool.to_string()));
        }

        Ok(PathBuf::from(path))
    }
}

impl Default for WhichResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolResolver for WhichResolver {
    fn resolve(&self, tool: &str) -> Result<PathBuf> {
        let mut cache = RESOLVED_PATHS.lock().unwrap();

        if let Some(path) = cache.get(tool) {
            return Ok(path.clone());
        }

        let path = Self::lookup(tool)?;
        cache.insert(tool.to_string(), path.clone());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_finds_sh() {
        let resolver = WhichResolver::new();
        let path = resolver.resolve("sh").unwrap();
        assert!(path.is_absolute());
    }

    #[test]
    fn test_resolve_unknown_tool_fails() {
        let resolver = WhichResolver::new();
        let err = resolver
            .resolve("mydba-no-such-tool-anywhere")
            .unwrap_err();
        assert!(
            matches!(err, MyDbaError::ExecutableNotFound(tool) if tool == "mydba-no-such-tool-anywhere")
        );
    }

    #[test]
    fn test_resolve_is_stable_across_calls() {
        let resolver = WhichResolver::new();
        let first = resolver.resolve("sh").unwrap();
        let second = resolver.resolve("sh").unwrap();
        assert_eq!(first, second);
    }
}
