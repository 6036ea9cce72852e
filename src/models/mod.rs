pub mod attendance_log;
pub mod attendee;
pub mod attendee_status;
pub mod event;
pub mod participant;
pub mod scan_status;
