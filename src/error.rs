use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillpathError {
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Invalid agent definitions: {0}")]
    InvalidConfig(String),

    #[error("Definition parse error: {0}")]
    DefinitionParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkillpathError>;
