use rust_i18n::t;

#[derive(Debug, Clone)]
pub enum CoreError {
    ElementNotFound(String),
    ListenerFailed(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::ElementNotFound(id) => write!(f, "{}", t!("error.element_not_found", id = id)),
            CoreError::ListenerFailed(reason) => write!(f, "{}", t!("error.listener_failed", reason = reason)),
        }
    }
}

impl std::error::Error for CoreError {}
pub type Result<T> = std::result::Result<T, CoreError>;
