/// Green role color used when the 24h change is positive.
pub const COLOR_UP: u32 = 0x2ECC71;

/// Red role color used when the 24h change is zero or negative.
pub const COLOR_DOWN: u32 = 0xE74C3C;

/// Up/down classification of the 24h price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    /// The provider did not report a 24h change.
    Unknown,
}

impl Sentiment {
    /// Classifies a 24h change. Zero counts as negative.
    pub fn from_change(change_24h_pct: Option<f64>) -> Self {
        match change_24h_pct {
            Some(change) if change > 0.0 => Self::Positive,
            Some(_) => Self::Negative,
            None => Self::Unknown,
        }
    }

    /// Role color for this sentiment, or `None` when the color must be left as is.
    pub fn role_color(self) -> Option<u32> {
        match self {
            Self::Positive => Some(COLOR_UP),
            Self::Negative => Some(COLOR_DOWN),
            Self::Unknown => None,
        }
    }

    /// Chart glyph shown next to the change, if any.
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Self::Positive => Some("📈"),
            Self::Negative => Some("📉"),
            Self::Unknown => None,
        }
    }
}

/// What the bot should look like in every guild for the current tick.
///
/// Derived from a `PriceSample` from scratch each tick, never merged with the
/// previous tick's state.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Guild nickname, already clamped to Discord's nickname length limit
    pub nickname: String,
    pub sentiment: Sentiment,
    /// Watching-activity text; `None` when the 24h change is unknown
    pub presence: Option<String>,
}
