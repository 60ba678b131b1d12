use serde::{Deserialize, Serialize};

/// Sentinels substituted for missing fields in the upstream song list.
pub const UNKNOWN_TITLE: &str = "Título Desconhecido";
pub const UNKNOWN_ARTIST: &str = "Artista Desconhecido";
pub const UNKNOWN_GENRE: &str = "Gênero Desconhecido";

/// A single songbook entry, as served by the static `songs.json` resource.
///
/// The wire field names are the upstream Portuguese ones; missing text fields
/// decode to their sentinel so rendering never deals with absent values.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Song {
    #[serde(rename = "numero")]
    pub number: i64,

    #[serde(rename = "musica", default = "unknown_title")]
    pub title: String,

    #[serde(rename = "cantor", default = "unknown_artist")]
    pub artist: String,

    #[serde(rename = "genero", default = "unknown_genre")]
    pub genre: String,
}

fn unknown_title() -> String {
    UNKNOWN_TITLE.to_owned()
}

fn unknown_artist() -> String {
    UNKNOWN_ARTIST.to_owned()
}

fn unknown_genre() -> String {
    UNKNOWN_GENRE.to_owned()
}

impl Song {
    pub fn new(number: i64, title: &str, artist: &str, genre: &str) -> Song {
        Song {
            number,
            title: title.to_owned(),
            artist: artist.to_owned(),
            genre: genre.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_field_names() {
        let song: Song = serde_json::from_str(
            r#"{"numero": 123, "musica": "Açúcar", "cantor": "Fulano", "genero": "Pop"}"#,
        )
        .unwrap();
        assert_eq!(song.number, 123);
        assert_eq!(song.title, "Açúcar");
        assert_eq!(song.artist, "Fulano");
        assert_eq!(song.genre, "Pop");
    }

    #[test]
    fn missing_genre_decodes_to_sentinel() {
        let song: Song =
            serde_json::from_str(r#"{"numero": 7, "musica": "Sem Gênero", "cantor": "Alguém"}"#)
                .unwrap();
        assert_eq!(song.genre, UNKNOWN_GENRE);
    }

    #[test]
    fn missing_title_and_artist_decode_to_sentinels() {
        let song: Song = serde_json::from_str(r#"{"numero": 9}"#).unwrap();
        assert_eq!(song.title, UNKNOWN_TITLE);
        assert_eq!(song.artist, UNKNOWN_ARTIST);
    }

    #[test]
    fn encodes_back_to_wire_field_names() {
        let song = Song::new(5, "Trem Bala", "Ana Vilela", "MPB");
        let json = serde_json::to_string(&song).unwrap();
        assert!(json.contains("\"numero\":5"));
        assert!(json.contains("\"musica\":\"Trem Bala\""));
        assert!(json.contains("\"cantor\":\"Ana Vilela\""));
        assert!(json.contains("\"genero\":\"MPB\""));
    }
}
