//! Utility functions for common operations.

use std::path::{Path, PathBuf};

/// Clamp a value into [0, 1].
///
/// Floors at 0 to absorb overscroll/bounce (negative scroll offsets) and
/// ceils at 1 so downstream band math never walks past the last index.
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Resolve a relative asset path under the configured base directory.
/// Leading slashes are stripped so absolute-looking references stay inside
/// the base.
pub fn asset_path(base: &Path, rel: &str) -> PathBuf {
    let cleaned = rel.trim_start_matches('/');
    base.join(cleaned)
}

/// Try each logo source in order and return the first that exists on disk.
/// Returns None when the list is exhausted (callers fall back to an
/// initials badge).
pub fn resolve_logo(base: &Path, sources: &[String]) -> Option<PathBuf> {
    sources
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| asset_path(base, s))
        .find(|p| p.exists())
}

/// Two-letter initials badge text, uppercased (e.g. "Novartis" -> "NO").
pub fn initials(text: &str) -> String {
    text.chars().take(2).collect::<String>().to_uppercase()
}

/// Percent-encode a mailto component. Unreserved characters follow the
/// encodeURIComponent set: alphanumerics plus `- _ . ! ~ * ' ( )`.
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '('
            | ')' => out.push(ch),
            _ => {
                let mut buf = [0u8; 4];
                for byte in ch.encode_utf8(&mut buf).as_bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    out
}

/// Assemble a mailto deep link from the compose form fields.
/// Empty fields collapse to "-" so the body shape stays stable.
pub fn build_mailto(recipient: &str, name: &str, email: &str, message: &str) -> String {
    let name = name.trim();
    let email = email.trim();
    let msg = message.trim();

    let subject = "Portfolio inquiry";
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        if name.is_empty() { "-" } else { name },
        if email.is_empty() { "-" } else { email },
        if msg.is_empty() { "-" } else { msg },
    );

    format!(
        "mailto:{}?subject={}&body={}",
        encode_component(recipient),
        encode_component(subject),
        encode_component(&body),
    )
}

/// Hand a URL to the platform opener. Failures are ignored; the link is
/// also shown in the UI so the user can act on it manually.
pub fn open_link(url: &str) {
    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd")
        .args(["/C", "start", "", url])
        .spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = std::process::Command::new("xdg-open").arg(url).spawn();

    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_clamp01_bounds() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.0), 0.0);
        assert_eq!(clamp01(0.42), 0.42);
        assert_eq!(clamp01(1.0), 1.0);
        assert_eq!(clamp01(3.7), 1.0);
    }

    #[test]
    fn test_asset_path_strips_leading_slashes() {
        let base = Path::new("/assets");
        assert_eq!(asset_path(base, "brand/logo.svg"), PathBuf::from("/assets/brand/logo.svg"));
        assert_eq!(asset_path(base, "//brand/logo.svg"), PathBuf::from("/assets/brand/logo.svg"));
    }

    #[test]
    fn test_resolve_logo_tries_sources_in_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("second.png"), b"x").unwrap();

        let sources = vec![
            "missing.svg".to_string(),
            String::new(),
            "second.png".to_string(),
        ];
        let resolved = resolve_logo(dir.path(), &sources);
        assert_eq!(resolved, Some(dir.path().join("second.png")));
    }

    #[test]
    fn test_resolve_logo_exhausted() {
        let dir = tempdir().unwrap();
        let sources = vec!["a.svg".to_string(), "b.svg".to_string()];
        assert_eq!(resolve_logo(dir.path(), &sources), None);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Novartis"), "NO");
        assert_eq!(initials("z"), "Z");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_encode_component_passthrough_and_escapes() {
        assert_eq!(encode_component("abc-XYZ_1.2"), "abc-XYZ_1.2");
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("a\nb"), "a%0Ab");
        assert_eq!(encode_component("x@y"), "x%40y");
    }

    #[test]
    fn test_build_mailto_shape() {
        let url = build_mailto("me@example.com", "Ada", "ada@example.com", "Hello there");
        assert!(url.starts_with("mailto:me%40example.com?subject=Portfolio%20inquiry&body="));
        assert!(url.contains("Name%3A%20Ada"));
        assert!(url.contains("Email%3A%20ada%40example.com"));
        assert!(url.contains("Hello%20there"));
    }

    #[test]
    fn test_build_mailto_empty_fields_use_dashes() {
        let url = build_mailto("me@example.com", "  ", "", "");
        // Body becomes "Name: -\nEmail: -\n\n-"
        assert!(url.ends_with("&body=Name%3A%20-%0AEmail%3A%20-%0A%0A-"));
    }
}
