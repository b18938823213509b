use super::*;

fn rank(s: &str) -> Rank {
    Rank::parse(s).unwrap()
}

#[test]
fn rank_orders_numerically_not_lexically() {
    assert!(rank("2") < rank("10"));
    assert!(rank("9") < rank("10"));
    assert_eq!(rank("007"), rank("7"));
    assert_eq!(rank("000").as_digits(), "0");

    let huge = "123456789012345678901234567890";
    assert!(rank("18446744073709551615") < rank(huge));
}

#[test]
fn rank_rejects_non_digits() {
    assert!(Rank::parse("").is_none());
    assert!(Rank::parse("1a").is_none());
    assert!(Rank::parse("-1").is_none());
}

#[test]
fn file_name_matching() {
    let naming = RecordNaming::default();
    assert_eq!(naming.match_file_name("article1.json"), Some(rank("1")));
    assert_eq!(naming.match_file_name("article10.json"), Some(rank("10")));
    assert_eq!(naming.match_file_name("articles.json"), None);
    assert_eq!(naming.match_file_name("article.json"), None);
    assert_eq!(naming.match_file_name("article1.json.bak"), None);
    assert_eq!(naming.match_file_name("article1json"), None);
    assert_eq!(naming.match_file_name("Article1.json"), None);
    assert_eq!(naming.match_file_name("article1a.json"), None);
}

#[test]
fn catalog_file_is_excluded_even_when_it_matches() {
    let naming = RecordNaming::new("article", "json", "article0.json");
    assert_eq!(naming.match_file_name("article0.json"), None);
    assert_eq!(naming.match_file_name("article00.json"), Some(rank("0")));
}

#[test]
fn scan_sorts_by_rank_and_skips_other_entries() {
    let tmp = std::env::temp_dir().join(format!(
        "pagepack_naming_scan_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(tmp.join("article5.json")).unwrap();
    for name in [
        "article10.json",
        "article2.json",
        "article1.json",
        "articles.json",
        "notes.txt",
    ] {
        std::fs::write(tmp.join(name), b"{}").unwrap();
    }

    let files = scan_record_files(&tmp, &RecordNaming::default()).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, ["article1.json", "article2.json", "article10.json"]);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn scan_missing_directory_is_io_error() {
    let err = scan_record_files(
        Path::new("definitely/not/a/real/dir"),
        &RecordNaming::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PackError::Io(_)));
}
