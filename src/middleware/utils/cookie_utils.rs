use tower_cookies::{Cookie, Cookies};

use crate::middleware::mw_ctx::JWT_KEY;

pub fn issue_login_jwt(cookies: &Cookies, token: String) {
    cookies.add(
        Cookie::build((JWT_KEY, token))
            // without an explicit path the cookie is bound to /api/login only
            .path("/")
            .http_only(true)
            .into(),
    );
}

pub fn remove_login_jwt(cookies: &Cookies) {
    cookies.remove(Cookie::build((JWT_KEY, "")).path("/").into());
}
