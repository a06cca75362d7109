//! Fixed endpoints, link keys and user-facing strings.

/// Edge length requested from both QR rendering services.
pub const QR_SIZE: &str = "220x220";

/// Primary QR rendering service; the target goes in the `data` parameter.
pub const QR_PRIMARY_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Fallback QR rendering service; the target goes in the `chl` parameter.
pub const QR_FALLBACK_ENDPOINT: &str = "https://chart.googleapis.com/chart";

/// Item keys consulted, in order, for the QR shown in a card's hero.
pub const HERO_LINK_KEYS: [&str; 2] = ["1x", "avista"];

/// Substring that places a card in the "legado" category.
pub const LEGADO_MARKER: &str = "legado";

/// Substring that places a card in the "alianca" category.
pub const ALIANCA_MARKER: &str = "aliança";

pub const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar dados";
pub const COLLAPSE_PROMPT: &str = "Ver parcelas";
pub const OPEN_LINK_LABEL: &str = "Abrir link";
pub const SHOW_QR_LABEL: &str = "QRCode";
pub const MODAL_OPEN_LABEL: &str = "Abrir";
pub const MODAL_CLOSE_LABEL: &str = "Fechar";

/// Default file names of the three data resources.
pub const CARDS_FILE: &str = "cards.json";
pub const LINKS_FILE: &str = "links.json";
pub const ORDER_FILE: &str = "order.json";
