//! Operations over person records.

pub mod remark_service;

pub use remark_service::{set_remark, RemarkEdit, RemarkOutcome};
