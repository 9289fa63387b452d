//! Console navigator.
//!
//! In the browser this was a router redirect; here a navigation side effect
//! is a printed destination the user can act on.

use clinic_client::Navigator;

pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn to_login(&self) {
        println!("→ /login (usa `clinic-console login`)");
    }

    fn to_dashboard(&self) {
        println!("→ /dashboard");
    }
}
