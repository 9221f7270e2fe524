use std::path::PathBuf;

/// Side effects requested by the reducer and executed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ReloadContent(PathBuf),
}
