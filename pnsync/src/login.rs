use pnsync_core::{page, session::Session};

use crate::{context::Context, error::Error, timing::Timing, wait};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    ExistingSession,
    LoggedIn,
}

/// Open the project files page, logging in when the login form shows up.
/// Succeeds only once the files page controls are usable.
pub fn open_session(
    session: &dyn Session,
    context: &Context,
    timing: &Timing,
) -> Result<LoginOutcome, Error> {
    session.navigate(&context.files_url())?;

    let login_form = match session.is_displayed(&page::login_username()) {
        Ok(displayed) => displayed,
        Err(error) if error.is_transient() => false,
        Err(error) => return Err(error.into()),
    };

    if login_form {
        log::info!("Login as {}", context.username);
        session.send_keys(&page::login_username(), &context.username)?;
        session.send_keys(&page::login_password(), &context.password)?;
        session.click(&page::login_remember())?;
        session.click(&page::login_submit())?;
    }

    match wait::interactable(session, page::upload_files_button(), timing) {
        Ok(()) if login_form => Ok(LoginOutcome::LoggedIn),
        Ok(()) => {
            log::info!("Existing session. No login necessary");
            Ok(LoginOutcome::ExistingSession)
        }
        Err(Error::Timeout(_)) if login_form => Err(Error::Authentication(format!(
            "files page of project '{}' not reachable after login as {}, check credentials",
            context.project_id, context.username
        ))),
        Err(Error::Timeout(_)) => Err(Error::Authentication(format!(
            "files page of project '{}' not reachable and no login form found at {}",
            context.project_id,
            context.files_url()
        ))),
        Err(error) => Err(error),
    }
}
