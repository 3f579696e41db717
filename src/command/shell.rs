use std::path::PathBuf;

/// 조립이 끝난 외부 명령
///
/// 실행 파일 경로, 인자 목록, 환경 변수, 리다이렉트 경로를 문자열 결합 없이
/// 구조화된 형태로 보관합니다. 실행은 이 구조를 그대로 argv로 넘기므로
/// 셸을 거치지 않고, 문자열 형태는 출력 전용입니다.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    /// 실행 파일의 절대 경로
    pub program: PathBuf,
    /// 인자 목록 (비밀번호는 절대 포함되지 않음)
    pub args: Vec<String>,
    /// 환경 변수 할당 (MYSQL_PWD 등)
    pub env: Vec<(String, String)>,
    /// 표준 입력으로 연결할 파일 (import용)
    pub stdin_from: Option<PathBuf>,
    /// 표준 출력으로 연결할 파일 (export용)
    pub stdout_to: Option<PathBuf>,
}

impl ShellCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            stdin_from: None,
            stdout_to: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn stdin_from(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdin_from = Some(path.into());
        self
    }

    pub fn stdout_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout_to = Some(path.into());
        self
    }

    /// 한 줄짜리 명령어 문자열로 렌더링
    ///
    /// `MYSQL_PWD=secret /usr/bin/mysqldump --user=a db > out.sql` 형태.
    /// 단순 토큰은 그대로, 공백이나 셸 메타 문자가 섞인 토큰만 작은따옴표로
    /// 감쌉니다. 출력과 dry-run 표시 전용이며 이 문자열이 실행되지는 않습니다.
    pub fn render(&self) -> String {
        self.render_inner(false)
    }

    /// 비밀번호를 가린 채 렌더링
    ///
    /// 자격 증명 성격의 환경 변수 값을 `****`로 치환합니다.
    /// 화면 출력 기본값이자 기록 파일에 저장되는 유일한 형태입니다.
    pub fn render_redacted(&self) -> String {
        self.render_inner(true)
    }

    fn render_inner(&self, redact: bool) -> String {
        let mut parts: Vec<String> = Vec::new();

        for (key, value) in &self.env {
            let shown = if redact && is_sensitive_key(key) {
                "****".to_string()
            } else {
                quote_if_needed(value)
            };
            parts.push(format!("{}={}", key, shown));
        }

        parts.push(quote_if_needed(&self.program.display().to_string()));

        for arg in &self.args {
            parts.push(quote_if_needed(arg));
        }

        if let Some(path) = &self.stdin_from {
            parts.push(format!("< {}", quote_if_needed(&path.display().to_string())));
        }

        if let Some(path) = &self.stdout_to {
            parts.push(format!("> {}", quote_if_needed(&path.display().to_string())));
        }

        parts.join(" ")
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let upper = key.to_uppercase();
    upper.contains("PWD") || upper.contains("PASSWORD") || upper.contains("SECRET")
}

/// 단순 토큰이면 그대로, 아니면 작은따옴표로 감싸기
fn quote_if_needed(token: &str) -> String {
    if !token.is_empty() && token.chars().all(is_simple_char) {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', "'\"'\"'"))
    }
}

fn is_simple_char(c: char) -> bool {
    matches!(c,
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.' | '/' | ':' | '+' | '%' | '@' | '=' | ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_tokens_stay_bare() {
        let cmd = ShellCommand::new(PathBuf::from("/usr/bin/mysqldump"))
            .arg("--user=a")
            .arg("--host=b")
            .arg("mydb")
            .stdout_to("/tmp/out.sql");

        assert_eq!(
            cmd.render(),
            "/usr/bin/mysqldump --user=a --host=b mydb > /tmp/out.sql"
        );
    }

    #[test]
    fn test_render_quotes_statement_argument() {
        let cmd = ShellCommand::new(PathBuf::from("/usr/bin/mysql"))
            .arg("-e")
            .arg("USE `d`; SELECT 1");

        assert_eq!(cmd.render(), "/usr/bin/mysql -e 'USE `d`; SELECT 1'");
    }

    #[test]
    fn test_render_env_prefix_comes_first() {
        let cmd = ShellCommand::new(PathBuf::from("/usr/bin/mysql"))
            .env("MYSQL_PWD", "secret")
            .arg("--user=a");

        let rendered = cmd.render();
        assert!(rendered.starts_with("MYSQL_PWD=secret "));
        assert_eq!(rendered.matches("secret").count(), 1);
    }

    #[test]
    fn test_render_redacted_masks_credential_values() {
        let cmd = ShellCommand::new(PathBuf::from("/usr/bin/mysql"))
            .env("MYSQL_PWD", "secret")
            .arg("--user=a")
            .arg("mydb");

        let redacted = cmd.render_redacted();
        assert!(redacted.starts_with("MYSQL_PWD=**** "));
        assert!(!redacted.contains("secret"));
        // 비밀번호 이외의 토큰은 그대로 남아야 함
        assert!(redacted.contains("--user=a"));
        assert!(redacted.contains("mydb"));
    }

    #[test]
    fn test_render_stdin_redirect() {
        let cmd = ShellCommand::new(PathBuf::from("/usr/bin/mysql"))
            .arg("mydb")
            .stdin_from("/tmp/in.sql");

        assert_eq!(cmd.render(), "/usr/bin/mysql mydb < /tmp/in.sql");
    }

    #[test]
    fn test_quote_if_needed_escapes_single_quotes() {
        assert_eq!(quote_if_needed("plain"), "plain");
        assert_eq!(quote_if_needed("two words"), "'two words'");
        assert_eq!(quote_if_needed("it's"), "'it'\"'\"'s'");
        assert_eq!(quote_if_needed(""), "''");
    }
}
