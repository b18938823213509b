use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pagepack_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn write_creates_parents_and_replaces_content() {
    let tmp = temp_dir("output_replace");
    let path = tmp.join("nested").join("out.txt");

    let first = write_artifact(&path, b"first version, longer").unwrap();
    let second = write_artifact(&path, b"second").unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), b"second");
    assert_ne!(first.sha256, second.sha256);
    assert_eq!(second.sha256, sha256_hex(b"second"));
    assert!(!tmp.join("nested").join("out.txt.tmp").exists());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn write_into_file_parent_fails() {
    let tmp = temp_dir("output_blocked");
    std::fs::create_dir_all(&tmp).unwrap();
    let blocker = tmp.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let err = write_artifact(&blocker.join("out.txt"), b"data").unwrap_err();
    assert!(matches!(err, PackError::Io(_)));

    std::fs::remove_dir_all(&tmp).ok();
}
