//! Navigation side-effect seam.
//!
//! The original front end routed with a browser router; here the routing
//! reaction (redirect to login on missing/expired session, to the
//! dashboard after login) is behind a trait so the console installs a real
//! implementation and tests install a recording fake.

pub trait Navigator: Send + Sync {
    fn to_login(&self);
    fn to_dashboard(&self);
}
