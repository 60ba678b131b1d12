//! URL builders for detail navigation and sharing.

use crate::catalog::Song;
use urlencoding::encode;

/// Caption prepended to the shared page URL.
pub const SHARE_CAPTION: &str = "Confira este conteúdo: ";

/// Query-parameter link to the detail page for a song. `cantor`, `musica`
/// and `genero` are percent-encoded; `numero` is numeric and passed as-is.
pub fn detail_url(song: &Song) -> String {
    format!(
        "detalhes.html?numero={}&cantor={}&musica={}&genero={}",
        song.number,
        encode(&song.artist),
        encode(&song.title),
        encode(&song.genre),
    )
}

/// WhatsApp deep link sharing the given page URL with the fixed caption,
/// meant to be opened in a new browsing context.
pub fn whatsapp_share_url(page_url: &str) -> String {
    let message = format!("{SHARE_CAPTION}{page_url}");
    format!("https://wa.me/?text={}", encode(&message))
}
