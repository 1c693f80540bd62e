pub mod context;
pub mod error;
pub mod local;
pub mod login;
pub mod navigation;
pub mod provision;
pub mod reader;
pub mod retry;
pub mod run;
pub mod sync;
pub mod timing;
pub mod upload;
pub mod util;
pub mod wait;

#[cfg(test)]
mod tests;
