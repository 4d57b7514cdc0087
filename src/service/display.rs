use crate::model::{
    display::{DisplayState, Sentiment},
    price::PriceSample,
};

/// Discord rejects guild nicknames longer than this many characters.
pub const NICKNAME_MAX_CHARS: usize = 32;

/// Derives what the bot should display for a sample.
///
/// # Arguments
/// - `sample` - Latest price sample
/// - `precision` - Number of decimals shown in the nickname
pub fn derive_display_state(sample: &PriceSample, precision: usize) -> DisplayState {
    let sentiment = Sentiment::from_change(sample.change_24h_pct());

    DisplayState {
        nickname: clamp_nickname(&format_price(sample.price_usd(), precision)),
        sentiment,
        presence: sample
            .change_24h_pct()
            .map(|change| format_presence(change, sentiment)),
    }
}

/// Formats a USD price with a fixed number of decimals, e.g. `$142.250000`.
pub fn format_price(price_usd: f64, precision: usize) -> String {
    format!("${:.*}", precision, price_usd)
}

/// Formats the presence text for a 24h change, e.g. `24h: +3.20% 📈`.
pub fn format_presence(change_24h_pct: f64, sentiment: Sentiment) -> String {
    let change = format!("24h: {:+.2}%", change_24h_pct);

    match sentiment.glyph() {
        Some(glyph) => format!("{change} {glyph}"),
        None => change,
    }
}

fn clamp_nickname(text: &str) -> String {
    text.chars().take(NICKNAME_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(price: f64, change: Option<f64>) -> PriceSample {
        PriceSample::new(price, change, Utc::now())
    }

    #[test]
    fn positive_change_is_green_with_up_glyph() {
        let state = derive_display_state(&sample(142.25, Some(3.2)), 6);

        assert_eq!(state.nickname, "$142.250000");
        assert_eq!(state.sentiment, Sentiment::Positive);
        assert_eq!(state.sentiment.role_color(), Some(0x2ECC71));
        let presence = state.presence.unwrap();
        assert!(presence.contains("+3.20%"));
        assert!(presence.contains("📈"));
    }

    #[test]
    fn negative_change_is_red_with_down_glyph() {
        let state = derive_display_state(&sample(0.000123, Some(-1.5)), 6);

        assert_eq!(state.nickname, "$0.000123");
        assert_eq!(state.sentiment, Sentiment::Negative);
        assert_eq!(state.sentiment.role_color(), Some(0xE74C3C));
        let presence = state.presence.unwrap();
        assert!(presence.contains("-1.50%"));
        assert!(presence.contains("📉"));
    }

    #[test]
    fn zero_change_counts_as_negative() {
        let state = derive_display_state(&sample(1.0, Some(0.0)), 2);

        assert_eq!(state.sentiment, Sentiment::Negative);
        assert_eq!(state.presence.as_deref(), Some("24h: +0.00% 📉"));
    }

    #[test]
    fn missing_change_has_unknown_sentiment_and_no_presence() {
        let state = derive_display_state(&sample(1.0, None), 2);

        assert_eq!(state.nickname, "$1.00");
        assert_eq!(state.sentiment, Sentiment::Unknown);
        assert_eq!(state.sentiment.role_color(), None);
        assert_eq!(state.presence, None);
    }

    #[test]
    fn precision_controls_decimals() {
        assert_eq!(format_price(2.4, 0), "$2");
        assert_eq!(format_price(2.5, 3), "$2.500");
    }

    #[test]
    fn nickname_is_clamped_to_discord_limit() {
        let state = derive_display_state(&sample(123_456_789_012.0, None), 18);

        assert_eq!(state.nickname.chars().count(), NICKNAME_MAX_CHARS);
        assert!(state.nickname.starts_with("$123456789012."));
    }
}
