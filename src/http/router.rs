use crate::http::request::Method;

/// The fixed route table, resolved from method and raw target.
///
/// Borrowed segments point into the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `GET /`
    Root,
    /// `GET /user-agent`
    UserAgent,
    /// `GET /echo/{text}`, text may be empty
    Echo(&'a str),
    /// `GET /files/{name}`
    ReadFile(&'a str),
    /// `POST /files/{name}`
    WriteFile(&'a str),
    /// GET or POST with no matching pattern
    NotFound,
    /// Any other method
    MethodNotAllowed,
}

const ECHO_PREFIX: &str = "/echo/";
const FILES_PREFIX: &str = "/files/";

impl<'a> Route<'a> {
    /// Exact patterns are checked before prefix patterns.
    pub fn resolve(method: &Method, path: &'a str) -> Self {
        match method {
            Method::GET => match path {
                "/" => Route::Root,
                "/user-agent" => Route::UserAgent,
                _ => {
                    if let Some(rest) = path.strip_prefix(ECHO_PREFIX) {
                        Route::Echo(rest)
                    } else if let Some(rest) = path.strip_prefix(FILES_PREFIX) {
                        Route::ReadFile(rest)
                    } else {
                        Route::NotFound
                    }
                }
            },
            Method::POST => match path.strip_prefix(FILES_PREFIX) {
                Some(rest) => Route::WriteFile(rest),
                None => Route::NotFound,
            },
            _ => Route::MethodNotAllowed,
        }
    }

    /// Short label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Root => "root",
            Route::UserAgent => "user-agent",
            Route::Echo(_) => "echo",
            Route::ReadFile(_) => "file-read",
            Route::WriteFile(_) => "file-write",
            Route::NotFound => "not-found",
            Route::MethodNotAllowed => "method-not-allowed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_routes_win_over_prefixes() {
        assert_eq!(Route::resolve(&Method::GET, "/"), Route::Root);
        assert_eq!(Route::resolve(&Method::GET, "/user-agent"), Route::UserAgent);
        assert_eq!(Route::resolve(&Method::GET, "/user-agent/x"), Route::NotFound);
    }
}
