mod error;
mod tables;

pub use error::print_error;
pub use tables::{print_structure_info, print_warnings};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
    pub quiet: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
            quiet: false,
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self {
                interactive: false,
                quiet: true,
            }
        } else {
            self
        }
    }
}
