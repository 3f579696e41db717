pub mod history;
pub mod init;
pub mod operation;

pub use history::show_history;
pub use init::init_config;
pub use operation::execute_operation;
