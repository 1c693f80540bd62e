use std::fmt::Display;

use mockall::automock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    Id(String),
    XPath(String),
    Css(String),
}

impl Locator {
    pub fn id(value: &str) -> Self {
        Self::Id(value.to_string())
    }

    pub fn xpath(value: &str) -> Self {
        Self::XPath(value.to_string())
    }

    pub fn css(value: &str) -> Self {
        Self::Css(value.to_string())
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Id(value) => write!(f, "#{}", value),
            Locator::XPath(value) => write!(f, "xpath:{}", value),
            Locator::Css(value) => write!(f, "css:{}", value),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("No such element: {0}")]
    NoSuchElement(String),
    #[error("Stale element: {0}")]
    StaleElement(String),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Command error: {0}")]
    Command(String),
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl SessionError {
    /// Element lookups that may succeed on a later poll.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SessionError::NoSuchElement(_) | SessionError::StaleElement(_)
        )
    }
}

impl From<std::io::Error> for SessionError {
    fn from(error: std::io::Error) -> Self {
        SessionError::Runtime(format!("{:?}", error))
    }
}

/// A stateful, remote controlled browser session. The currently displayed
/// page is the only state and every method acts on it.
#[automock]
pub trait Session {
    fn navigate(&self, url: &str) -> Result<(), SessionError>;
    fn current_url(&self) -> Result<String, SessionError>;
    fn page_source(&self) -> Result<String, SessionError>;
    fn click(&self, locator: &Locator) -> Result<(), SessionError>;
    fn send_keys(&self, locator: &Locator, text: &str) -> Result<(), SessionError>;
    /// Element is rendered. Missing elements give `NoSuchElement`.
    fn is_displayed(&self, locator: &Locator) -> Result<bool, SessionError>;
    /// Element is rendered and enabled (can receive a click).
    fn is_interactable(&self, locator: &Locator) -> Result<bool, SessionError>;
    fn reload(&self) -> Result<(), SessionError>;
}
