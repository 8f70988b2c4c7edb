//! Static display strings, one table per language.

use serde::Serialize;

use crate::api::types::Language;

/// Shown when a service call blew up in the bridge. Not translated.
pub const SYSTEM_ERROR: &str = "System Error.";

/// Every string the page displays for one language.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub edition: &'static str,
    pub user_score: &'static str,
    pub entry_fee: &'static str,
    pub winner_takes_all: &'static str,
    pub jackpot_secured: &'static str,
    pub outsmarted: &'static str,
    pub total_payout: &'static str,
    pub access_denied: &'static str,
    pub retry: &'static str,
    pub placeholder: &'static str,
    pub connect_to_play: &'static str,
    pub verifying: &'static str,
    pub submit: &'static str,
    pub processing: &'static str,
    pub rejected: &'static str,
    pub oracle: &'static str,
    pub missed: &'static str,
    pub win_msg: &'static str,
    pub network: &'static str,
    pub footer_joined: &'static str,
    pub footer_failed: &'static str,
    pub footer_thinking: &'static str,
    pub loading: &'static str,
    pub collect: &'static str,
    pub claimed: &'static str,
    pub claimed_msg: &'static str,
    pub leaderboard_btn: &'static str,
    // Jackpot variant
    pub paid_entry: &'static str,
    pub pot: &'static str,
    pub claim_failed: &'static str,
}

static EN: Strings = Strings {
    title: "ARTIFACT",
    subtitle: "QUEST",
    edition: "Farcaster Edition",
    user_score: "Your Score",
    entry_fee: "FREE ENTRY",
    winner_takes_all: "COMPETE FOR GLORY",
    jackpot_secured: "ARTIFACT DECODED",
    outsmarted: "Your vision is clear.",
    total_payout: "XP Earned",
    access_denied: "SYNC FAILED",
    retry: "Try Again",
    placeholder: "What is this?",
    connect_to_play: "Connect to Decipher",
    verifying: "Analyzing Signal...",
    submit: "Decipher",
    processing: "Processing...",
    rejected: "Connection Rejected.",
    oracle: "Scanning Neural Network...",
    missed: "Interpretation Mismatch.",
    win_msg: "ARTIFACT SUCCESSFULLY DECODED!",
    network: "Neural Activity",
    footer_joined: "linked",
    footer_failed: "lost signal",
    footer_thinking: "scanning...",
    loading: "Materializing Artifact...",
    collect: "COLLECT XP",
    claimed: "XP SECURED",
    claimed_msg: "You've risen in the ranks.",
    leaderboard_btn: "Leaderboard",
    paid_entry: "PAID ENTRY",
    pot: "Jackpot",
    claim_failed: "Claim failed. Try again.",
};

static FR: Strings = Strings {
    title: "ARTEFACT",
    subtitle: "QUÊTE",
    edition: "Édition Farcaster",
    user_score: "Votre Score",
    entry_fee: "ENTRÉE GRATUITE",
    winner_takes_all: "COMPÉTITION POUR LA GLOIRE",
    jackpot_secured: "ARTEFACT DÉCODÉ",
    outsmarted: "Votre vision est claire.",
    total_payout: "XP Gagné",
    access_denied: "SYNC ÉCHOUÉE",
    retry: "Réessayer",
    placeholder: "Qu'est-ce que c'est ?",
    connect_to_play: "Connecter pour Déchiffrer",
    verifying: "Analyse...",
    submit: "Déchiffrer",
    processing: "Traitement...",
    rejected: "Connexion Rejetée.",
    oracle: "Scan du Réseau Neural...",
    missed: "Interprétation Incorrecte.",
    win_msg: "ARTEFACT DÉCODÉ AVEC SUCCÈS !",
    network: "Activité Neurale",
    footer_joined: "lié",
    footer_failed: "signal perdu",
    footer_thinking: "scan...",
    loading: "Matérialisation...",
    collect: "RÉCUPÉRER XP",
    claimed: "XP SÉCURISÉ",
    claimed_msg: "Vous avez monté en rang.",
    leaderboard_btn: "Classement",
    paid_entry: "ENTRÉE PAYANTE",
    pot: "Cagnotte",
    claim_failed: "Réclamation échouée. Réessayez.",
};

static ES: Strings = Strings {
    title: "ARTEFACTO",
    subtitle: "QUEST",
    edition: "Edición Farcaster",
    user_score: "Tu Puntuación",
    entry_fee: "ENTRADA GRATIS",
    winner_takes_all: "COMPITE POR LA GLORIA",
    jackpot_secured: "ARTEFACTO DECODIFICADO",
    outsmarted: "Tu visión es clara.",
    total_payout: "XP Ganado",
    access_denied: "FALLO DE SYNC",
    retry: "Intentar de Nuevo",
    placeholder: "¿Qué es esto?",
    connect_to_play: "Conectar para Descifrar",
    verifying: "Analizando...",
    submit: "Descifrar",
    processing: "Procesando...",
    rejected: "Conexión Rechazada.",
    oracle: "Escaneando Red Neural...",
    missed: "Interpretación Incorrecta.",
    win_msg: "¡ARTEFACTO DECODIFICADO!",
    network: "Actividad Neural",
    footer_joined: "conectado",
    footer_failed: "perdió señal",
    footer_thinking: "escaneando...",
    loading: "Materializando...",
    collect: "RECOGER XP",
    claimed: "XP ASEGURADO",
    claimed_msg: "Has subido de rango.",
    leaderboard_btn: "Clasificación",
    paid_entry: "ENTRADA DE PAGO",
    pot: "Bote",
    claim_failed: "Reclamo fallido. Inténtalo de nuevo.",
};

static TR: Strings = Strings {
    title: "ESER",
    subtitle: "GÖREVİ",
    edition: "Farcaster Sürümü",
    user_score: "Puanın",
    entry_fee: "ÜCRETSİZ KATILIM",
    winner_takes_all: "SIRALAMAYA GİR",
    jackpot_secured: "ESER ÇÖZÜLDÜ",
    outsmarted: "Vizyonun netleşti.",
    total_payout: "Kazanılan XP",
    access_denied: "YANLIŞ TAHMİN",
    retry: "Tekrar Dene",
    placeholder: "Bu nedir?",
    connect_to_play: "Çözmek için Bağlan",
    verifying: "Sinyal Analiz Ediliyor...",
    submit: "Şifreyi Çöz",
    processing: "İşleniyor...",
    rejected: "Bağlantı Reddedildi.",
    oracle: "Sinir Ağı Taranıyor...",
    missed: "Hatalı yorum.",
    win_msg: "ESER BAŞARIYLA ÇÖZÜLDÜ!",
    network: "Sinirsel Aktivite",
    footer_joined: "bağlandı",
    footer_failed: "yanlış bildi",
    footer_thinking: "taranıyor...",
    loading: "Eser Oluşturuluyor...",
    collect: "XP TOPLA",
    claimed: "XP KAYDEDİLDİ",
    claimed_msg: "Sıralamada yükseldin.",
    leaderboard_btn: "Liderlik Tablosu",
    paid_entry: "ÜCRETLİ KATILIM",
    pot: "Büyük İkramiye",
    claim_failed: "Talep başarısız. Tekrar deneyin.",
};

/// The string table for `lang`.
pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::En => &EN,
        Language::Fr => &FR,
        Language::Es => &ES,
        Language::Tr => &TR,
    }
}
