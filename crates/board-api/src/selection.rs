//! Which author the board is currently being viewed as.
//!
//! Kept in a cookie so each browser carries its own selection.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const AUTHOR_COOKIE: &str = "board_author";

pub fn selected_author(jar: &CookieJar) -> Option<String> {
    jar.get(AUTHOR_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

pub fn select_author(jar: CookieJar, email: &str) -> CookieJar {
    let mut cookie = Cookie::new(AUTHOR_COOKIE, email.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    jar.add(cookie)
}
