mod info;
mod invoke;
mod resolve;

pub use info::cmd_info;
pub use invoke::cmd_invoke;
pub use resolve::cmd_resolve;
