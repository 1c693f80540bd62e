use pnsync_core::session::Session;

use crate::{
    context::Context,
    error::Error,
    login,
    sync::{SyncReport, Synchronizer},
    timing::Timing,
};

pub fn run(session: &dyn Session, context: &Context, timing: Timing) -> Result<SyncReport, Error> {
    log::info!("Prepare to sync {}", context.dataset_dir.display());
    login::open_session(session, context, &timing)?;

    log::info!("Start synchronization into {}", context.files_url());
    Synchronizer::new(session, timing).sync_directory(&context.dataset_dir)
}
