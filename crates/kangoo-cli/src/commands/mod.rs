pub mod init;
pub mod replay;
pub mod shell;
pub mod validate;
