pub mod init;
pub mod menu;
pub mod play;
pub mod scores;
pub mod validate;
