use std::io::Cursor;

use super::*;

#[test]
fn defaults_validate_and_resolve() {
    let cfg = BuildConfig::default();
    cfg.validate().unwrap();

    let site = cfg.resolve("/srv/site").unwrap();
    assert_eq!(site.base_url, "http://localhost:8080");
    assert_eq!(
        site.catalog_path,
        Path::new("/srv/site/data/articles.json")
    );
    assert_eq!(site.redirect_dir, Path::new("/srv/site/redirect"));
    assert_eq!(
        site.atlas_output,
        Path::new("/srv/site/images/packed-articles.png")
    );
    assert_eq!(site.atlas_canvas, 2048);
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let json = br#"{ "baseUrl": "https://cdn.example.org/museum/", "atlas": { "canvasSize": 512 } }"#;
    let cfg = BuildConfig::from_reader(Cursor::new(&json[..])).unwrap();
    assert_eq!(cfg.record_prefix, "article");
    assert_eq!(cfg.atlas.canvas_size, 512);
    assert_eq!(cfg.atlas.output, PathBuf::from("images/packed-articles.png"));

    let site = cfg.resolve(".").unwrap();
    assert_eq!(site.base_url, "https://cdn.example.org/museum");
    assert_eq!(
        site.canonical_redirect_url("article3"),
        "https://cdn.example.org/museum/redirect/article3.html"
    );
    assert_eq!(
        site.image_url("a.png"),
        "https://cdn.example.org/museum/images/a.png"
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let json = br#"{ "baseURL": "https://x.org" }"#;
    assert!(BuildConfig::from_reader(Cursor::new(&json[..])).is_err());
}

#[test]
fn validate_rejects_bad_fields() {
    let cfg = BuildConfig {
        base_url: "ftp://x".to_string(),
        ..BuildConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = BuildConfig {
        record_prefix: "item7".to_string(),
        ..BuildConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = BuildConfig {
        redirect_dir: "../out".to_string(),
        ..BuildConfig::default()
    };
    assert!(cfg.validate().is_err());

    let mut cfg = BuildConfig::default();
    cfg.atlas.canvas_size = 1023;
    assert!(cfg.validate().is_err());
}

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b").unwrap(), "a/b");
    assert_eq!(normalize_rel_path("a\\b").unwrap(), "a/b");
    assert_eq!(normalize_rel_path("./redirect/").unwrap(), "redirect");
    assert!(normalize_rel_path("../x").is_err());
    assert!(normalize_rel_path("/abs").is_err());
    assert!(normalize_rel_path("./").is_err());
}
