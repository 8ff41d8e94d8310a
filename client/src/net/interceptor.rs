//! Cross-cutting handling of rejected sessions.
//!
//! Any 401 except the login call's own means the stored token is no longer
//! accepted. A 401 from login means bad credentials and is left to the view.

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// What the client must do with a response before handing it to a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interception {
    PassThrough,
    EvictSession,
}

pub fn intercept(status: u16, endpoint: &str) -> Interception {
    let path = endpoint.split(['?', '#']).next().unwrap_or(endpoint);
    if status == 401 && path != LOGIN_ENDPOINT {
        Interception::EvictSession
    } else {
        Interception::PassThrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_from_regular_endpoint_evicts() {
        assert_eq!(intercept(401, "/api/qa/search"), Interception::EvictSession);
        assert_eq!(intercept(401, "/api/admin/users/3"), Interception::EvictSession);
        assert_eq!(intercept(401, "/api/auth/logout"), Interception::EvictSession);
    }

    #[test]
    fn unauthorized_from_login_passes_through() {
        assert_eq!(intercept(401, LOGIN_ENDPOINT), Interception::PassThrough);
        assert_eq!(intercept(401, "/api/auth/login?next=/search"), Interception::PassThrough);
    }

    #[test]
    fn other_statuses_pass_through() {
        for status in [200, 204, 400, 403, 404, 500, 502] {
            assert_eq!(intercept(status, "/api/qa/search"), Interception::PassThrough, "status {status}");
        }
    }
}
