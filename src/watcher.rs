//! File watching for live profile reload.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};

/// Set up a file watcher for profile.json changes. External edits flip
/// the shared reload flag; the main loop consumes it on its next tick.
pub fn setup_profile_watcher(
    profile_path: PathBuf,
    needs_reload: Arc<Mutex<bool>>,
) -> Option<RecommendedWatcher> {
    // Use a shorter poll interval for more responsive updates
    let config = Config::default().with_poll_interval(Duration::from_millis(500));

    // Canonicalize the path for reliable comparison
    let canonical_profile = profile_path
        .canonicalize()
        .unwrap_or_else(|_| profile_path.clone());
    let profile_filename = profile_path.file_name().map(|s| s.to_os_string());

    let watcher_result = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                // Check if any event path matches our profile file.
                // Compare by filename since paths may differ in representation
                let matches = event.paths.iter().any(|p| {
                    // Try canonical path comparison first
                    if let Ok(canonical) = p.canonicalize() {
                        if canonical == canonical_profile {
                            return true;
                        }
                    }
                    // Fall back to filename comparison
                    if let Some(ref expected_name) = profile_filename {
                        if let Some(event_name) = p.file_name() {
                            return event_name == expected_name;
                        }
                    }
                    false
                });

                if matches {
                    if let Ok(mut flag) = needs_reload.lock() {
                        *flag = true;
                    }
                }
            }
        },
        config,
    );

    match watcher_result {
        Ok(mut watcher) => {
            // Watch the parent directory since some editors replace files
            if let Some(parent) = profile_path.parent() {
                let _ = watcher.watch(parent, RecursiveMode::NonRecursive);
            }
            Some(watcher)
        }
        Err(_) => None,
    }
}
