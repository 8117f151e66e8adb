//! Browser utility modules.

pub mod credentials;
