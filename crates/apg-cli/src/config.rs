//! Optional JSON configuration file.
//!
//! Every field is optional; missing values keep their defaults, so
//! `{"poster": {"poster_width": 2480, "poster_height": 3508}}` is a complete
//! file that switches to A4 at 300 dpi.

use std::path::Path;

use apg_core::ArgumentError;
use apg_layout::PosterOptions;
use apg_render_2d::RenderOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub poster: PosterOptions,
    pub render: RenderOptions,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ArgumentError> {
        let source = std::fs::read_to_string(path).map_err(|e| ArgumentError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_json(&source).map_err(|reason| ArgumentError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        log::info!("Loaded config {}", path.display());
        Ok(config)
    }

    fn from_json(source: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(source).map_err(|e| e.to_string())?;
        let poster = &config.poster;
        if poster.poster_width == 0 || poster.poster_height == 0 {
            return Err("poster dimensions must be non-zero".into());
        }
        if poster.poster_height <= poster.poster_width {
            return Err(format!(
                "poster must be portrait, got {}x{}",
                poster.poster_width, poster.poster_height
            ));
        }
        if !(poster.border_ratio > 0.0 && poster.border_ratio < 0.5) {
            return Err(format!("border_ratio must be between 0 and 0.5, got {}", poster.border_ratio));
        }
        if poster.rows_per_column == 0 {
            return Err("rows_per_column must be at least 1".into());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apg_core::types::Color;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_json(
            r#"{"poster": {"rows_per_column": 12}, "render": {"background": {"r": 1.0, "g": 1.0, "b": 1.0, "a": 1.0}}}"#,
        )
        .unwrap();
        assert_eq!(config.poster.rows_per_column, 12);
        assert_eq!(config.poster.poster_width, 3508);
        assert_eq!(config.render.background, Color::WHITE);
        assert_eq!(config.render.foreground, Color::BLACK);
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(Config::from_json(r#"{"poster": {"poster_width": 0}}"#).is_err());
    }

    #[test]
    fn test_rejects_landscape_and_square() {
        let err = Config::from_json(r#"{"poster": {"poster_height": 3000}}"#).unwrap_err();
        assert!(err.contains("portrait"));
        assert!(Config::from_json(r#"{"poster": {"poster_width": 4000, "poster_height": 4000}}"#).is_err());
    }

    #[test]
    fn test_rejects_border_ratio_out_of_range() {
        assert!(Config::from_json(r#"{"poster": {"border_ratio": 0.5}}"#).is_err());
        assert!(Config::from_json(r#"{"poster": {"border_ratio": 0.0}}"#).is_err());
        assert!(Config::from_json(r#"{"poster": {"border_ratio": 0.1}}"#).is_ok());
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ArgumentError::Config { .. }));
        assert!(err.to_string().contains("config.json"));
    }
}
