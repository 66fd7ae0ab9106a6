//! Command implementations.

pub mod competences;
pub mod config;
pub mod credentials;
pub mod gaps;
pub mod pathway;
pub mod prompt;
pub mod show;
pub mod stack;
pub mod summary;

pub use self::competences::execute_competences;
pub use self::config::execute_config;
pub use self::credentials::execute_credentials;
pub use self::gaps::execute_gaps;
pub use self::pathway::execute_pathway;
pub use self::prompt::execute_prompt;
pub use self::show::execute_show;
pub use self::stack::execute_stack;
pub use self::summary::execute_summary;
