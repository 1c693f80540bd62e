use fantoccini::{
    error::{CmdError, ErrorStatus, NewSessionError},
    Client, ClientBuilder,
};
use serde_json::{json, Map, Value};
use tokio::runtime::{Builder, Runtime};

use crate::session::{Locator, Session, SessionError};

pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

impl From<CmdError> for SessionError {
    fn from(error: CmdError) -> Self {
        match error {
            CmdError::Standard(error) => match error.error {
                ErrorStatus::NoSuchElement => SessionError::NoSuchElement(error.to_string()),
                ErrorStatus::StaleElementReference => {
                    SessionError::StaleElement(error.to_string())
                }
                _ => SessionError::Command(error.to_string()),
            },
            error => SessionError::Command(error.to_string()),
        }
    }
}

impl From<NewSessionError> for SessionError {
    fn from(error: NewSessionError) -> Self {
        SessionError::Connection(error.to_string())
    }
}

fn as_fantoccini(locator: &Locator) -> fantoccini::Locator<'_> {
    match locator {
        Locator::Id(value) => fantoccini::Locator::Id(value),
        Locator::XPath(value) => fantoccini::Locator::XPath(value),
        Locator::Css(value) => fantoccini::Locator::Css(value),
    }
}

/// Blocking `Session` over a WebDriver server (geckodriver, chromedriver, ...).
/// Calls are driven to completion on a private single threaded runtime.
pub struct WebDriverSession {
    runtime: Runtime,
    client: Client,
}

impl WebDriverSession {
    pub fn connect(webdriver_url: &str, headless: bool) -> Result<Self, SessionError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let client = runtime.block_on(async {
            let mut builder = ClientBuilder::native();
            if headless {
                builder.capabilities(headless_capabilities());
            }
            builder.connect(webdriver_url).await
        })?;
        log::debug!("Connected to webdriver at {}", webdriver_url);

        Ok(Self { runtime, client })
    }

    pub fn close(self) -> Result<(), SessionError> {
        let Self { runtime, client } = self;
        runtime.block_on(client.close())?;
        Ok(())
    }
}

fn headless_capabilities() -> Map<String, Value> {
    let mut capabilities = Map::new();
    capabilities.insert(
        "moz:firefoxOptions".to_string(),
        json!({ "args": ["-headless"] }),
    );
    capabilities.insert(
        "goog:chromeOptions".to_string(),
        json!({ "args": ["--headless"] }),
    );
    capabilities
}

impl Session for WebDriverSession {
    fn navigate(&self, url: &str) -> Result<(), SessionError> {
        Ok(self.runtime.block_on(self.client.goto(url))?)
    }

    fn current_url(&self) -> Result<String, SessionError> {
        Ok(self.runtime.block_on(self.client.current_url())?.to_string())
    }

    fn page_source(&self) -> Result<String, SessionError> {
        Ok(self.runtime.block_on(self.client.source())?)
    }

    fn click(&self, locator: &Locator) -> Result<(), SessionError> {
        self.runtime.block_on(async {
            let element = self.client.find(as_fantoccini(locator)).await?;
            element.click().await
        })?;
        Ok(())
    }

    fn send_keys(&self, locator: &Locator, text: &str) -> Result<(), SessionError> {
        self.runtime.block_on(async {
            let element = self.client.find(as_fantoccini(locator)).await?;
            element.send_keys(text).await
        })?;
        Ok(())
    }

    fn is_displayed(&self, locator: &Locator) -> Result<bool, SessionError> {
        Ok(self.runtime.block_on(async {
            let element = self.client.find(as_fantoccini(locator)).await?;
            element.is_displayed().await
        })?)
    }

    fn is_interactable(&self, locator: &Locator) -> Result<bool, SessionError> {
        Ok(self.runtime.block_on(async {
            let element = self.client.find(as_fantoccini(locator)).await?;
            Ok::<bool, CmdError>(element.is_displayed().await? && element.is_enabled().await?)
        })?)
    }

    fn reload(&self) -> Result<(), SessionError> {
        Ok(self.runtime.block_on(self.client.refresh())?)
    }
}
