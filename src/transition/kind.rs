use std::fmt;

use crate::foundation::error::{ExplainerError, ExplainerResult};

/// Canvas edge an incoming scene enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl Edge {
    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "left" | "ltr" | "lefttoright" | "left_to_right" => Some(Self::Left),
            "right" | "rtl" | "righttoleft" | "right_to_left" => Some(Self::Right),
            "top" | "ttb" | "toptobottom" | "top_to_bottom" => Some(Self::Top),
            "bottom" | "btt" | "bottomtotop" | "bottom_to_top" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// How two adjacent scenes are blended across a transition window.
///
/// Serialized as a compact string such as `"fade"`, `"slide_from_bottom"` or
/// `"clock_wipe"`; see [`parse_transition_kind`] for accepted aliases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransitionKind {
    /// Crossfade.
    #[default]
    Fade,
    /// Incoming scene pushes the outgoing one off the opposite edge.
    Slide {
        /// Edge the incoming scene enters from.
        from: Edge,
    },
    /// Incoming scene is revealed by a straight edge sweeping across.
    Wipe {
        /// Edge the reveal starts at.
        from: Edge,
    },
    /// Incoming scene is revealed clockwise from twelve o'clock.
    ClockWipe,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fade => f.write_str("fade"),
            Self::Slide { from } => write!(f, "slide_from_{}", from.as_str()),
            Self::Wipe { from } => write!(f, "wipe_from_{}", from.as_str()),
            Self::ClockWipe => f.write_str("clock_wipe"),
        }
    }
}

impl From<TransitionKind> for String {
    fn from(kind: TransitionKind) -> Self {
        kind.to_string()
    }
}

impl TryFrom<String> for TransitionKind {
    type Error = ExplainerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_transition_kind(&s)
    }
}

/// Parse a transition kind name.
///
/// Case and `-`/space separators are ignored. Besides the canonical names, the
/// authoring shorthands are accepted: `crossfade`, `slide` (from the right),
/// `slide_left`/`slide_right`/`slide_up`/`slide_down` (named after the edge the
/// incoming scene starts at, `up` entering from the bottom), `wipe` (from the left),
/// `wipe_right` (moving rightwards, i.e. from the left), `wipe_<dir>` with `ltr`-style
/// direction codes, and `clockwipe`.
pub fn parse_transition_kind(s: &str) -> ExplainerResult<TransitionKind> {
    let kind = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    if kind.is_empty() {
        return Err(ExplainerError::validation("transition kind must be non-empty"));
    }

    let parsed = match kind.as_str() {
        "fade" | "crossfade" | "cross_fade" | "dissolve" => Some(TransitionKind::Fade),
        "clock_wipe" | "clockwipe" => Some(TransitionKind::ClockWipe),
        "slide" => Some(TransitionKind::Slide { from: Edge::Right }),
        "slide_left" => Some(TransitionKind::Slide { from: Edge::Left }),
        "slide_right" => Some(TransitionKind::Slide { from: Edge::Right }),
        "slide_up" => Some(TransitionKind::Slide { from: Edge::Bottom }),
        "slide_down" => Some(TransitionKind::Slide { from: Edge::Top }),
        "wipe" | "wipe_right" => Some(TransitionKind::Wipe { from: Edge::Left }),
        "wipe_left" => Some(TransitionKind::Wipe { from: Edge::Right }),
        "wipe_down" => Some(TransitionKind::Wipe { from: Edge::Top }),
        "wipe_up" => Some(TransitionKind::Wipe { from: Edge::Bottom }),
        other => {
            if let Some(rest) = other.strip_prefix("slide_from_") {
                Edge::parse(rest).map(|from| TransitionKind::Slide { from })
            } else if let Some(rest) = other.strip_prefix("wipe_from_") {
                Edge::parse(rest).map(|from| TransitionKind::Wipe { from })
            } else if let Some(rest) = other.strip_prefix("wipe_") {
                Edge::parse(rest).map(|from| TransitionKind::Wipe { from })
            } else {
                None
            }
        }
    };

    parsed.ok_or_else(|| ExplainerError::validation(format!("unknown transition kind '{kind}'")))
}

#[cfg(test)]
#[path = "../../tests/unit/transition/kind.rs"]
mod tests;
