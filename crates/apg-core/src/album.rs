//! Album metadata and the info-file parser.
//!
//! The plain text format is line oriented. Blank lines and lines starting
//! with `#` are skipped. The first four remaining lines are the album name,
//! artist name, release date, and total duration; every line after that is
//! a track title, in order.
//!
//! ```text
//! # Public Service Broadcasting
//! Race for Space
//! Public Service Broadcasting
//! 23 February 2015
//! 43:38
//! Race for Space
//! Sputnik
//! ```
//!
//! With the `serde` feature, files ending in `.json` are read as an object
//! with the same field names as [`AlbumInfo`].

use std::path::Path;

use crate::errors::ParseError;

/// Everything the poster shows about an album.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumInfo {
    pub album_name: String,
    pub artist_name: String,
    pub album_date: String,
    pub album_duration: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub track_names: Vec<String>,
}

const HEADER_FIELDS: [&str; 4] = ["album name", "artist name", "album date", "album duration"];

impl AlbumInfo {
    /// Load album info from a file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let info = match extension.as_str() {
            "json" => Self::from_json(&source)?,
            _ => Self::parse(&source)?,
        };

        log::info!(
            "Loaded \"{}\" by {} ({} tracks) from {}",
            info.album_name,
            info.artist_name,
            info.track_names.len(),
            path.display()
        );
        Ok(info)
    }

    /// Parse the plain text info format.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut lines = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let mut header = [String::new(), String::new(), String::new(), String::new()];
        for (index, slot) in header.iter_mut().enumerate() {
            *slot = lines
                .next()
                .ok_or(ParseError::MissingField {
                    field: HEADER_FIELDS[index],
                    line: index + 1,
                })?
                .to_string();
        }
        let [album_name, artist_name, album_date, album_duration] = header;

        Ok(Self {
            album_name,
            artist_name,
            album_date,
            album_duration,
            track_names: lines.map(str::to_string).collect(),
        })
    }

    /// Parse the JSON info format.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, ParseError> {
        serde_json::from_str(source).map_err(|e| ParseError::Json {
            reason: e.to_string(),
        })
    }

    #[cfg(not(feature = "serde"))]
    pub fn from_json(_source: &str) -> Result<Self, ParseError> {
        Err(ParseError::UnsupportedFormat {
            extension: "json".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RACE_FOR_SPACE: &str = "\
# Public Service Broadcasting, 2015
Race for Space
Public Service Broadcasting
23 February 2015
43:38

Race for Space
Sputnik
Gagarin
";

    #[test]
    fn test_parse_header_and_tracks() {
        let info = AlbumInfo::parse(RACE_FOR_SPACE).unwrap();
        assert_eq!(info.album_name, "Race for Space");
        assert_eq!(info.artist_name, "Public Service Broadcasting");
        assert_eq!(info.album_date, "23 February 2015");
        assert_eq!(info.album_duration, "43:38");
        assert_eq!(info.track_names, vec!["Race for Space", "Sputnik", "Gagarin"]);
    }

    #[test]
    fn test_parse_without_tracks() {
        let info = AlbumInfo::parse("A\nB\nC\nD\n").unwrap();
        assert!(info.track_names.is_empty());
    }

    #[test]
    fn test_parse_missing_header_field() {
        let err = AlbumInfo::parse("Album\nArtist\n\n# no date\n").unwrap_err();
        match err {
            ParseError::MissingField { field, line } => {
                assert_eq!(field, "album date");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = AlbumInfo::load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_load_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(RACE_FOR_SPACE.as_bytes()).unwrap();
        let info = AlbumInfo::load(file.path()).unwrap();
        assert_eq!(info.track_names.len(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"{
                "album_name": "Race for Space",
                "artist_name": "Public Service Broadcasting",
                "album_date": "2015",
                "album_duration": "43:38",
                "track_names": ["Sputnik", "Gagarin"]
            }"#,
        )
        .unwrap();
        let info = AlbumInfo::load(file.path()).unwrap();
        assert_eq!(info.track_names, vec!["Sputnik", "Gagarin"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_syntax_error() {
        let err = AlbumInfo::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ParseError::Json { .. }));
    }
}
