//! View controllers: one module per routed screen of the original front
//! end, plus shared presentation helpers.

pub mod appointments;
pub mod dashboard;
pub mod feedback;
pub mod login;
pub mod menu;
pub mod pager;
pub mod patients;
pub mod users;
