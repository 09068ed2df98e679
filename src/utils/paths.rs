use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;

pub fn get_tok_tui_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".tok-tui"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let tok_dir = get_tok_tui_dir()?;
    Ok(tok_dir.join("config.toml"))
}

pub fn get_log_path() -> Result<PathBuf> {
    let tok_dir = get_tok_tui_dir()?;
    Ok(tok_dir.join("toktui.log"))
}

pub fn ensure_directories_exist() -> Result<()> {
    let tok_dir = get_tok_tui_dir()?;

    if !tok_dir.exists() {
        fs::create_dir_all(&tok_dir)?;
    }

    Ok(())
}
