//! Sample endpoints served by the binary.
//!
//! These are ordinary consumers of the router contract: each handler reads
//! what it needs from [`RequestContext`](crate::routing::RequestContext).

pub mod status;
pub mod users;

use crate::routing::Router;

/// Register every sample route on `router`.
pub fn register(router: &mut Router) {
    router
        .get("/", status::get_status)
        .get("/users/:id", users::get_user);
}
