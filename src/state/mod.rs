//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! There is a single process-wide piece of shared state: the session. It is
//! owned by one `Session` object provided via context, read by any number of
//! components, and written only by the auth client in `net::auth`.

pub mod session;
