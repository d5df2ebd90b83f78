pub mod config;
pub mod discover;
pub mod init;

pub use config::Config;
pub use discover::Discover;
pub use init::Init;
