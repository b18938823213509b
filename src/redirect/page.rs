use std::path::Path;

use tracing::debug;

use crate::catalog::entry::CatalogEntry;
use crate::foundation::error::{PackError, PackResult};
use crate::foundation::output::{WrittenArtifact, write_artifact};

/// Render the redirect page for `entry`.
///
/// The page navigates to [`CatalogEntry::redirect_target`] through a zero-delay meta refresh and a
/// `location.replace` call, and shows a manual link to the same target. Titles and URLs are
/// trusted and inserted verbatim.
pub fn render_redirect_page(entry: &CatalogEntry) -> String {
    let target = entry.redirect_target();
    // JSON string syntax is a valid JS string literal.
    let target_js = serde_json::Value::from(target).to_string();
    let title = &entry.title;
    let canonical = &entry.canonical_redirect;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <meta http-equiv="refresh" content="0; url={target}">
  <link rel="canonical" href="{canonical}">
  <script>window.location.replace({target_js});</script>
</head>
<body>
  <h1>{title}</h1>
  <p>Redirecting&hellip; If nothing happens, <a href="{target}">open {title}</a>.</p>
</body>
</html>
"#
    )
}

/// Write `<redirect_dir>/<id>.html` for `entry`, replacing any existing page.
pub fn emit_redirect(entry: &CatalogEntry, redirect_dir: &Path) -> PackResult<WrittenArtifact> {
    std::fs::create_dir_all(redirect_dir).map_err(|e| {
        PackError::io(format!(
            "create redirect dir '{}': {e}",
            redirect_dir.display()
        ))
    })?;

    let path = redirect_dir.join(format!("{}.html", entry.id));
    let artifact = write_artifact(&path, render_redirect_page(entry).as_bytes())?;
    debug!(id = %entry.id, target = entry.redirect_target(), "wrote redirect page");
    Ok(artifact)
}

#[cfg(test)]
#[path = "../../tests/unit/redirect/page.rs"]
mod tests;
