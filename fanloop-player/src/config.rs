use std::path::{Path, PathBuf};

use fanloop_core::visibility::VisibilityPolicy;
use fanloop_model::Rect;

const DEFAULT_MANIFEST: &str = "assets/video_data.json";
const DEFAULT_VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 568.0);
const SETTINGS_FILE: &str = "settings.json";

/// Runtime configuration for the feed driver.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    manifest_path: PathBuf,
    media_dir: PathBuf,
    settings_path: PathBuf,
    visibility_policy: VisibilityPolicy,
    viewport: Rect,
}

impl Default for FeedConfig {
    fn default() -> Self {
        let manifest_path = PathBuf::from(DEFAULT_MANIFEST);
        Self {
            media_dir: manifest_dir(&manifest_path),
            manifest_path,
            settings_path: default_settings_path(),
            visibility_policy: VisibilityPolicy::majority(),
            viewport: DEFAULT_VIEWPORT,
        }
    }
}

impl FeedConfig {
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let manifest_path = lookup("FANLOOP_MANIFEST")
            .map(PathBuf::from)
            .unwrap_or(defaults.manifest_path);
        let media_dir = lookup("FANLOOP_MEDIA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| manifest_dir(&manifest_path));
        let settings_path = lookup("FANLOOP_SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.settings_path);

        let visibility_policy = match lookup("FANLOOP_MIN_VISIBLE_FRACTION") {
            Some(raw) => match raw.trim().parse::<f32>() {
                Ok(fraction) => VisibilityPolicy::with_min_visible_fraction(fraction),
                Err(_) => {
                    log::warn!(
                        "Ignoring FANLOOP_MIN_VISIBLE_FRACTION={raw:?}; using {}",
                        defaults.visibility_policy.min_visible_fraction()
                    );
                    defaults.visibility_policy
                }
            },
            None => defaults.visibility_policy,
        };

        let viewport = match lookup("FANLOOP_VIEWPORT") {
            Some(raw) => parse_viewport(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring FANLOOP_VIEWPORT={raw:?}; expected WIDTHxHEIGHT");
                defaults.viewport
            }),
            None => defaults.viewport,
        };

        Self {
            manifest_path,
            media_dir,
            settings_path,
            visibility_policy,
            viewport,
        }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn visibility_policy(&self) -> VisibilityPolicy {
        self.visibility_policy
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }
}

fn manifest_dir(manifest: &Path) -> PathBuf {
    manifest
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_settings_path() -> PathBuf {
    match dirs::config_dir() {
        Some(config_dir) => config_dir.join("fanloop").join(SETTINGS_FILE),
        None => PathBuf::from("fanloop-settings.json"),
    }
}

/// Parses `WIDTHxHEIGHT` into a viewport anchored at the origin.
pub fn parse_viewport(raw: &str) -> Option<Rect> {
    let (w, h) = raw.trim().split_once(['x', 'X'])?;
    let width: f32 = w.trim().parse().ok()?;
    let height: f32 = h.trim().parse().ok()?;
    (width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite())
        .then(|| Rect::new(0.0, 0.0, width, height))
}
