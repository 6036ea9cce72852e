pub mod backup;
pub mod checkin;
pub mod config;
pub mod db;
pub mod event;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod participant;
pub mod register;
