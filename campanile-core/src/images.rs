//! Risoluzione dell'immagine di una notifica: dato l'eventuale URL remoto e
//! l'eventuale chiave simbolica, produce sempre una sorgente visualizzabile.
//! Funzione pura: stessi input, stessa sorgente, nessuna rete coinvolta
//! (il caso remoto seleziona soltanto l'URI, il download spetta alla UI).

/// Immagine inclusa nel bundle dell'app, identificata dalla chiave
/// normalizzata e dal percorso dell'asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundledImage {
    pub key: &'static str,
    pub asset: &'static str,
}

/// Immagine di riserva: usata quando nessun riferimento risolve.
/// Una notifica non è mai "senza immagine".
pub const FALLBACK_IMAGE: BundledImage = BundledImage {
    key: "fallback",
    asset: "assets/notifications/fallback.png",
};

// Tabella statica chiave -> asset del bundle.
const BUNDLED_IMAGES: &[BundledImage] = &[
    BundledImage { key: "welcome", asset: "assets/notifications/welcome.png" },
    BundledImage { key: "service", asset: "assets/notifications/service.png" },
    BundledImage { key: "prayer", asset: "assets/notifications/prayer.png" },
    BundledImage { key: "event", asset: "assets/notifications/event.png" },
    BundledImage { key: "offering", asset: "assets/notifications/offering.png" },
    BundledImage { key: "youth", asset: "assets/notifications/youth.png" },
    BundledImage { key: "choir", asset: "assets/notifications/choir.png" },
    FALLBACK_IMAGE,
];

/// Sorgente di un'immagine risolta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// URI remoto scelto così com'è; il fetch è a carico del livello di
    /// presentazione.
    Remote(String),
    /// Asset locale del bundle.
    Bundled(BundledImage),
}

/// Normalizza una chiave immagine: minuscole, via il suffisso ".png",
/// via gli spazi. "Welcome.PNG" e " welcome " diventano entrambe "welcome".
pub fn normalize_image_key(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = lowered.strip_suffix(".png").unwrap_or(&lowered);
    stripped.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Cerca la chiave (già normalizzata) nella tabella del bundle.
pub fn bundled_for_key(key: &str) -> Option<BundledImage> {
    BUNDLED_IMAGES.iter().copied().find(|img| img.key == key)
}

/// Risolve l'immagine da mostrare per una notifica.
///
/// 1. un `image_url` non vuoto vince sempre su qualunque chiave locale;
/// 2. altrimenti la chiave normalizzata viene cercata nella tabella del bundle;
/// 3. chiave assente o non mappata -> immagine di riserva.
pub fn resolve_image(image_url: Option<&str>, image_key: Option<&str>) -> ImageSource {
    if let Some(url) = image_url {
        if !url.is_empty() {
            return ImageSource::Remote(url.to_string());
        }
    }
    let bundled = image_key
        .map(normalize_image_key)
        .and_then(|key| bundled_for_key(&key))
        .unwrap_or(FALLBACK_IMAGE);
    ImageSource::Bundled(bundled)
}
