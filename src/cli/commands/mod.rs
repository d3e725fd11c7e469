pub mod agenda;
pub mod backup;
pub mod book;
pub mod cashflow;
pub mod config;
pub mod db;
pub mod expense;
pub mod expenses;
pub mod export;
pub mod import;
pub mod init;
pub mod intake;
pub mod log;
pub mod photo;
pub mod print;
