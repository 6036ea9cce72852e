pub mod backup;
pub mod checkin;
pub mod classify;
pub mod export;
pub mod register;
pub mod token;
