use super::*;

// =============================================================
// fragment_path
// =============================================================

#[test]
fn fragment_path_formats_expected_location() {
    assert_eq!(fragment_path("pages", "historia"), "pages/historia.html");
}

#[test]
fn fragment_path_tolerates_trailing_slash() {
    assert_eq!(fragment_path("pages/", "inicio"), "pages/inicio.html");
}

#[test]
fn fragment_path_with_empty_dir_is_root_relative() {
    assert_eq!(fragment_path("", "inicio"), "inicio.html");
}

#[test]
fn fragment_path_uses_page_id_verbatim() {
    assert_eq!(fragment_path("pages", "a b"), "pages/a b.html");
}

// =============================================================
// Status handling
// =============================================================

#[test]
fn success_range_is_2xx() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(404));
}

#[test]
fn check_status_maps_404_to_fragment_unavailable() {
    assert_eq!(
        check_status("noexiste", 404),
        Err(LoadError::FragmentUnavailable { page_id: "noexiste".into(), status: 404 })
    );
}

#[test]
fn check_status_accepts_ok() {
    assert_eq!(check_status("inicio", 200), Ok(()));
}

#[test]
fn transport_failure_carries_message() {
    let err = transport_failure("inicio", &"dns lookup failed");
    assert_eq!(
        err,
        LoadError::TransportFailure { page_id: "inicio".into(), message: "dns lookup failed".into() }
    );
}
