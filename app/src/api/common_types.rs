/// Card password as used by the catalog service.
pub type CardId = i64;

/// Cursor value the catalog returns when a search has no further pages.
pub const END_OF_RESULTS: u64 = 0;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardSummary {
    pub id: CardId,
    pub display_name: String,
}

/// Full card record shown in the detail view.
///
/// Numeric codes are kept exactly as the catalog reports them, decoding into
/// readable names happens at render time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardDetail {
    pub id: CardId,
    pub name: String,
    /// Type line as spelled out by the catalog, may be empty.
    pub type_line: String,
    pub type_code: u32,
    pub race_code: u32,
    pub attribute_code: u32,
    /// Packed level field: low byte is level/rank/link rating, the upper two
    /// bytes hold pendulum scales.
    pub level: u32,
    pub attack: i32,
    pub defense: i32,
    pub description: String,
    pub pendulum_description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub records: Vec<CardSummary>,
    /// Start position of the next page, [`END_OF_RESULTS`] when exhausted.
    pub next: u64,
}
