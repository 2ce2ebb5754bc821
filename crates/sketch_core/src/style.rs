//! The closed set of rendering styles offered to the user.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Style label embedded verbatim into the synthesis prompt.
///
/// # Examples
///
/// ```
/// use sketch_core::StyleChoice;
///
/// let style: StyleChoice = "Matte Painting".parse().unwrap();
/// assert_eq!(style, StyleChoice::MattePainting);
/// assert_eq!(style.to_string(), "Matte Painting");
/// assert_eq!(StyleChoice::all().len(), 5);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum StyleChoice {
    /// Photographic rendering
    #[default]
    #[strum(serialize = "Photorealistic")]
    Photorealistic,
    /// Digital matte painting
    #[strum(serialize = "Matte Painting")]
    MattePainting,
    /// Japanese animation
    #[strum(serialize = "Anime")]
    Anime,
    /// Studio Ghibli look
    #[strum(serialize = "Ghibli")]
    Ghibli,
    /// Graphite sketch
    #[strum(serialize = "Pencil Sketch")]
    PencilSketch,
}

impl StyleChoice {
    /// The label shown in the dropdown and sent in the prompt.
    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// All styles in dropdown order.
    pub fn all() -> Vec<StyleChoice> {
        StyleChoice::iter().collect()
    }
}

impl std::fmt::Display for StyleChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for StyleChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        StyleChoice::iter()
            .find(|style| style.label() == label)
            .ok_or_else(|| format!("Unknown style: {}", label))
    }
}

impl TryFrom<String> for StyleChoice {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}
