use bytehttp::http::request::Method;
use bytehttp::http::router::Route;

#[test]
fn test_route_root_and_user_agent() {
    assert_eq!(Route::resolve(&Method::GET, "/"), Route::Root);
    assert_eq!(Route::resolve(&Method::GET, "/user-agent"), Route::UserAgent);
}

#[test]
fn test_route_echo_prefix() {
    assert_eq!(Route::resolve(&Method::GET, "/echo/abc"), Route::Echo("abc"));
    assert_eq!(Route::resolve(&Method::GET, "/echo/a/b"), Route::Echo("a/b"));
    assert_eq!(Route::resolve(&Method::GET, "/echo/"), Route::Echo(""));
    assert_eq!(Route::resolve(&Method::GET, "/echo"), Route::NotFound);
}

#[test]
fn test_route_files() {
    assert_eq!(
        Route::resolve(&Method::GET, "/files/test.txt"),
        Route::ReadFile("test.txt")
    );
    assert_eq!(
        Route::resolve(&Method::POST, "/files/test.txt"),
        Route::WriteFile("test.txt")
    );
}

#[test]
fn test_route_post_only_matches_files() {
    assert_eq!(Route::resolve(&Method::POST, "/"), Route::NotFound);
    assert_eq!(Route::resolve(&Method::POST, "/echo/abc"), Route::NotFound);
    assert_eq!(Route::resolve(&Method::POST, "/user-agent"), Route::NotFound);
}

#[test]
fn test_route_unknown_paths() {
    assert_eq!(Route::resolve(&Method::GET, "/nope"), Route::NotFound);
    assert_eq!(Route::resolve(&Method::GET, "/Echo/abc"), Route::NotFound);
}

#[test]
fn test_route_other_methods_not_allowed() {
    for method in [
        Method::PUT,
        Method::DELETE,
        Method::HEAD,
        Method::OPTIONS,
        Method::PATCH,
        Method::Other("BREW".to_string()),
    ] {
        assert_eq!(Route::resolve(&method, "/"), Route::MethodNotAllowed);
        assert_eq!(Route::resolve(&method, "/files/a"), Route::MethodNotAllowed);
    }
}
