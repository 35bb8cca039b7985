pub mod server;

use crate::host::ConsoleSettings;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        dist: PathBuf,
        console: ConsoleSettings,
    },
}
