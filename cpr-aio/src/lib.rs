// cpr-aio/src/lib.rs
//! Blocking IO primitives for cpr (process execution, filesystem)

pub mod fs;
pub mod process;

pub use fs::{is_directory, is_file, read_lines};
pub use process::{exec_and_read_stdout_and_stderr, run_command_sync};
