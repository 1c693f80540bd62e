use std::{env, path::PathBuf};

use anyhow::{Context as _, Result};
use env_logger::Env;
use pnsync::{context::Context, run, timing::Timing};
use pnsync_core::{config::PartialConfig, webdriver::WebDriverSession};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "pnsync",
    about = "Upload a local dataset folder into a PhysioNet project files area through a WebDriver controlled browser"
)]
struct Opt {
    /// INI config file (default: ./pnsync.conf when present)
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Project id, as found in the project page url (https://physionet.org/projects/{id})
    #[structopt(long)]
    project_id: Option<String>,

    #[structopt(long)]
    username: Option<String>,

    #[structopt(long)]
    password: Option<String>,

    /// Read the password from this environment variable
    #[structopt(long)]
    env_var_pass: Option<String>,

    /// Local folder containing the dataset
    #[structopt(long, parse(from_os_str))]
    dataset_dir: Option<PathBuf>,

    /// WebDriver server address (geckodriver, chromedriver, ...)
    #[structopt(long)]
    webdriver: Option<String>,

    #[structopt(long)]
    base_url: Option<String>,

    /// Run the browser without a window
    #[structopt(long)]
    headless: bool,

    /// Show the browser window, even when the config file asks for headless
    #[structopt(long, conflicts_with = "headless")]
    no_headless: bool,
}

impl Opt {
    fn to_partial_config(&self) -> PartialConfig {
        PartialConfig {
            project_id: self.project_id.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            dataset_dir: self.dataset_dir.clone(),
            webdriver_url: self.webdriver.clone(),
            base_url: self.base_url.clone(),
            headless: self.headless_flag(),
        }
    }

    fn headless_flag(&self) -> Option<bool> {
        match (self.headless, self.no_headless) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn file_config(&self) -> Result<PartialConfig> {
        if let Some(config_file_path) = &self.config {
            return PartialConfig::from_file(config_file_path);
        }
        let current_dir = env::current_dir().context("Unable to determine current folder")?;
        Ok(PartialConfig::from_default_file(&current_dir)?.unwrap_or_default())
    }

    fn password(&self) -> Result<String> {
        if let Some(env_var_pass) = &self.env_var_pass {
            return env::var(env_var_pass)
                .context(format!("No env var set for name {}", env_var_pass));
        }
        Ok(rpassword::prompt_password("PhysioNet user password ? ")?)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();

    let config = opt.to_partial_config().merge(opt.file_config()?);
    let context = Context::from_config(config, || opt.password())?;
    log::debug!("Run with {:?}", context);

    let session = WebDriverSession::connect(&context.webdriver_url, context.headless).context(
        format!("Unable to open browser session with {}", context.webdriver_url),
    )?;
    let result = run::run(&session, &context, Timing::default());
    if let Err(error) = session.close() {
        log::warn!("Unable to close browser session: {}", error);
    }

    let report = result.context("Synchronization failed")?;
    log::info!("Synchronization finished: {}", report);
    Ok(())
}
