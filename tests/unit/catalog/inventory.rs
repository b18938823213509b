use crate::foundation::config::BuildConfig;
use crate::records::record::ItemRecord;

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

fn entry(
    site: &SiteLayout,
    id: &str,
    image: Option<&str>,
    image_url: Option<&str>,
) -> CatalogEntry {
    let record = ItemRecord {
        id: id.to_string(),
        title: id.to_string(),
        content: String::new(),
        image: image.map(str::to_string),
        image_url: image_url.map(str::to_string),
        redirect_url: None,
        extra: serde_json::Map::new(),
    };
    CatalogEntry::derive(&record, site)
}

#[test]
fn reports_missing_local_images_only() {
    let tmp = temp_dir("inventory");
    std::fs::create_dir_all(tmp.join("images")).unwrap();
    std::fs::write(tmp.join("images").join("present.png"), b"png").unwrap();

    let site = BuildConfig::default().resolve(&tmp).unwrap();
    let entries = vec![
        entry(&site, "article1", Some("present.png"), None),
        entry(&site, "article2", Some("absent.png"), None),
        entry(&site, "article3", None, Some("https://cdn.example.net/remote.png")),
        entry(&site, "article4", None, Some("images/gone.png?v=2")),
        entry(&site, "article5", Some("https://cdn.example.net/x.png"), None),
    ];

    let missing = inventory_images(&entries, &site);
    let ids: Vec<&str> = missing.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["article2", "article4"]);
    assert_eq!(missing[0].reference, "absent.png");
    assert_eq!(missing[1].path, tmp.join("images/gone.png"));

    std::fs::remove_dir_all(&tmp).ok();
}
