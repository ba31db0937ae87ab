pub mod check;
pub mod context;
pub mod init;
pub mod list;

pub use check::{run_check, run_check_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use list::{format_check_list, run_list};
