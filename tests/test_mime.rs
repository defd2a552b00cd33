use hearth::http::mime::from_path;

#[test]
fn test_known_suffixes() {
    let table = vec![
        ("html", "text/html"),
        ("htm", "text/html"),
        ("txt", "text/plain"),
        ("css", "text/css"),
        ("js", "application/javascript"),
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("ico", "image/x-icon"),
        ("pdf", "application/pdf"),
        ("json", "application/json"),
        ("xml", "application/xml"),
    ];

    for (suffix, expected) in table {
        assert_eq!(from_path(&format!("f.{}", suffix)), expected);
    }
}

#[test]
fn test_suffix_match_is_case_insensitive() {
    let table = vec![
        ("HTML", "text/html"),
        ("Htm", "text/html"),
        ("TXT", "text/plain"),
        ("Css", "text/css"),
        ("JS", "application/javascript"),
        ("JPG", "image/jpeg"),
        ("JpEg", "image/jpeg"),
        ("PNG", "image/png"),
        ("GIF", "image/gif"),
        ("ICO", "image/x-icon"),
        ("PDF", "application/pdf"),
        ("JSON", "application/json"),
        ("XML", "application/xml"),
    ];

    for (suffix, expected) in table {
        assert_eq!(from_path(&format!("f.{}", suffix)), expected);
    }
}

#[test]
fn test_unknown_suffix_is_octet_stream() {
    assert_eq!(from_path("archive.zip"), "application/octet-stream");
    assert_eq!(from_path("binary.exe"), "application/octet-stream");
}

#[test]
fn test_missing_suffix_is_octet_stream() {
    assert_eq!(from_path("README"), "application/octet-stream");
    assert_eq!(from_path(""), "application/octet-stream");
}

#[test]
fn test_last_suffix_wins() {
    assert_eq!(from_path("bundle.min.js"), "application/javascript");
    assert_eq!(from_path("notes.txt.html"), "text/html");
}

#[test]
fn test_full_path_resolution() {
    assert_eq!(from_path("./public/index.html"), "text/html");
    assert_eq!(from_path("./public/img/logo.png"), "image/png");
}

#[test]
fn test_trailing_dot_is_octet_stream() {
    assert_eq!(from_path("file."), "application/octet-stream");
}
