use serde::{Deserialize, Serialize};

/// Drawing layers of one chart, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    Title,
    XAxis,
    YAxis,
    Bars,
}

impl LayerKind {
    pub const CANONICAL_ORDER: [Self; 4] = [Self::Title, Self::XAxis, Self::YAxis, Self::Bars];

    /// Class attribute used by markup backends.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::XAxis => "x axis",
            Self::YAxis => "y axis",
            Self::Bars => "bars",
        }
    }
}
