mod info;
mod os;
mod path;
mod run;
mod tour;

pub use info::cmd_info;
pub use os::cmd_os;
pub use path::{PathOp, cmd_path};
pub use run::cmd_run;
pub use tour::cmd_tour;
