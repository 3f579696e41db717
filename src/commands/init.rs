use crate::config::Config;
use crate::error::Result;
use colored::*;

/// 기본값으로 채운 설정 파일 생성
pub fn init_config() -> Result<()> {
    Config::init()?;

    eprintln!(
        "{} Created config file: {}",
        "[OK]".green().bold(),
        Config::config_path().display()
    );
    eprintln!("  Edit the [connection] table to set connection defaults.");

    Ok(())
}
