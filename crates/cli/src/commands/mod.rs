pub mod compare;
pub mod generate;
pub mod init;
pub mod run;
pub mod translate;
