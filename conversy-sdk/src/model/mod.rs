pub mod friend;
pub mod notification;
pub mod page;
pub mod user;

/// local storage key for the bearer token
pub const TOKEN: &str = "access_token";

/// avatar service used by the onboarding random avatar button
pub const AVATAR_SERVICE: &str = "https://avatar.iran.liara.run/public";

/// languages offered by the onboarding selects
pub const LANGUAGES: [&str; 12] = [
    "english",
    "spanish",
    "french",
    "german",
    "mandarin",
    "japanese",
    "korean",
    "hindi",
    "russian",
    "portuguese",
    "arabic",
    "italian",
];

/// flag emoji for a language tag, used by the friend and discover cards
pub fn language_flag(lang: &str) -> Option<&'static str> {
    match lang {
        "english" => Some("🇬🇧"),
        "spanish" => Some("🇪🇸"),
        "french" => Some("🇫🇷"),
        "german" => Some("🇩🇪"),
        "mandarin" => Some("🇨🇳"),
        "japanese" => Some("🇯🇵"),
        "korean" => Some("🇰🇷"),
        "hindi" => Some("🇮🇳"),
        "russian" => Some("🇷🇺"),
        "portuguese" => Some("🇵🇹"),
        "arabic" => Some("🇸🇦"),
        "italian" => Some("🇮🇹"),
        _ => None,
    }
}
