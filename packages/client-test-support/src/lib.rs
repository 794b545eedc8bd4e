//! Client test support utilities
//!
//! Shared by the client's unit and integration tests: the one-time test
//! logging initializer and a call recorder for asserting the order in which
//! startup collaborators are invoked.

pub mod call_log;
pub mod logging;

pub use call_log::CallLog;
