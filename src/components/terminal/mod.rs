mod boot;
mod input;
mod output;
mod shell;
mod terminal;

pub use input::Input;
pub use output::Output;
pub use shell::Shell;
