//! The closed set of scene types.
//!
//! Each payload lives in a themed submodule and implements [`Scene`]; [`SceneKind`] is
//! the serialized tagged union used in composition files.

/// Diagrams, statistics, charts, timelines and code.
pub mod data;
/// Concepts, steps, metaphors, takeaways and warnings.
pub mod explain;
/// Openers, section dividers and closing screens.
pub mod intro;
/// Bullet lists, comparisons and the recap.
pub mod lists;

pub use data::{
    Annotation, CodeDisplay, Connection, DataBar, DataChart, DiagramFlow, FlowDirection, FlowNode,
    StatHighlight, TimelineNode, TimelineScene,
};
pub use explain::{
    ConceptExplain, HeadingEntrance, KeyTakeaway, Severity, Step, StepSequence, VisualMetaphor,
    WarningCallout,
};
pub use intro::{
    ColdOpen, ColdOpenEntrance, EndLink, EndScreen, HookQuestion, Outro, SectionTitle, TitleIntro,
};
pub use lists::{
    BeforeAfter, BeforeAfterReveal, BulletList, ComparisonSplit, Panel, SideEntrance, SplitSide,
    SummaryRecap,
};

use crate::foundation::core::LocalFrame;
use crate::foundation::error::{ExplainerError, ExplainerResult};
use crate::scene::ctx::SceneCtx;
use crate::scene::frame::{Layer, VisualFrame};

/// A scene payload that can be drawn at any local frame.
pub trait Scene {
    /// Layers at `local`, which is never negative.
    fn layers(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> Vec<Layer>;

    /// Reject payloads that cannot be drawn meaningfully.
    fn validate(&self) -> ExplainerResult<()> {
        Ok(())
    }
}

/// Every scene type, tagged by `"type"` in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneKind {
    /// Opening question.
    HookQuestion(HookQuestion),
    /// Video title with learning objectives.
    TitleIntro(TitleIntro),
    /// Numbered section divider.
    SectionTitle(SectionTitle),
    /// Heading, paragraph and optional analogy.
    ConceptExplain(ConceptExplain),
    /// Numbered steps.
    StepSequence(StepSequence),
    /// Large icon with an analogy.
    VisualMetaphor(VisualMetaphor),
    /// Highlighted one-liner.
    KeyTakeaway(KeyTakeaway),
    /// Boxes joined by arrows.
    DiagramFlow(DiagramFlow),
    /// Counting number.
    StatHighlight(StatHighlight),
    /// Code card with annotations.
    CodeDisplay(CodeDisplay),
    /// Heading over a bullet list.
    BulletList(BulletList),
    /// Two columns side by side.
    ComparisonSplit(ComparisonSplit),
    /// Pulsing caution box.
    WarningCallout(WarningCallout),
    /// Numbered recap of the video.
    SummaryRecap(SummaryRecap),
    /// Closing call to action.
    EndScreen(EndScreen),
    /// Bold statement before the title.
    ColdOpen(ColdOpen),
    /// Short channel sign-off.
    Outro(Outro),
    /// Before and after panels.
    BeforeAfter(BeforeAfter),
    /// Dots joined along an axis.
    TimelineScene(TimelineScene),
    /// Growing bar chart.
    DataChart(DataChart),
}

impl SceneKind {
    fn as_scene(&self) -> &dyn Scene {
        match self {
            Self::HookQuestion(s) => s,
            Self::TitleIntro(s) => s,
            Self::SectionTitle(s) => s,
            Self::ConceptExplain(s) => s,
            Self::StepSequence(s) => s,
            Self::VisualMetaphor(s) => s,
            Self::KeyTakeaway(s) => s,
            Self::DiagramFlow(s) => s,
            Self::StatHighlight(s) => s,
            Self::CodeDisplay(s) => s,
            Self::BulletList(s) => s,
            Self::ComparisonSplit(s) => s,
            Self::WarningCallout(s) => s,
            Self::SummaryRecap(s) => s,
            Self::EndScreen(s) => s,
            Self::ColdOpen(s) => s,
            Self::Outro(s) => s,
            Self::BeforeAfter(s) => s,
            Self::TimelineScene(s) => s,
            Self::DataChart(s) => s,
        }
    }

    /// Serialized type tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HookQuestion(_) => "hook_question",
            Self::TitleIntro(_) => "title_intro",
            Self::SectionTitle(_) => "section_title",
            Self::ConceptExplain(_) => "concept_explain",
            Self::StepSequence(_) => "step_sequence",
            Self::VisualMetaphor(_) => "visual_metaphor",
            Self::KeyTakeaway(_) => "key_takeaway",
            Self::DiagramFlow(_) => "diagram_flow",
            Self::StatHighlight(_) => "stat_highlight",
            Self::CodeDisplay(_) => "code_display",
            Self::BulletList(_) => "bullet_list",
            Self::ComparisonSplit(_) => "comparison_split",
            Self::WarningCallout(_) => "warning_callout",
            Self::SummaryRecap(_) => "summary_recap",
            Self::EndScreen(_) => "end_screen",
            Self::ColdOpen(_) => "cold_open",
            Self::Outro(_) => "outro",
            Self::BeforeAfter(_) => "before_after",
            Self::TimelineScene(_) => "timeline_scene",
            Self::DataChart(_) => "data_chart",
        }
    }

    /// Check the payload, prefixing errors with the scene type.
    pub fn validate(&self) -> ExplainerResult<()> {
        self.as_scene().validate().map_err(|e| match e {
            ExplainerError::Validation(msg) => {
                ExplainerError::validation(format!("{}: {msg}", self.name()))
            }
            other => other,
        })
    }

    /// Draw the scene at `local`.
    ///
    /// Frames before the scene start render like frame 0. The result is normalized so
    /// that equal pictures compare equal.
    pub fn render(&self, ctx: &SceneCtx<'_>, local: LocalFrame) -> VisualFrame {
        let local = LocalFrame(local.0.max(0));
        VisualFrame::with_layers(ctx.canvas, self.as_scene().layers(ctx, local)).normalized()
    }
}

pub(crate) fn require_text(field: &str, value: &str) -> ExplainerResult<()> {
    if value.trim().is_empty() {
        return Err(ExplainerError::validation(format!("{field} must be non-empty")));
    }
    Ok(())
}

pub(crate) fn require_items<T>(field: &str, items: &[T]) -> ExplainerResult<()> {
    if items.is_empty() {
        return Err(ExplainerError::validation(format!(
            "{field} must contain at least one item"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/kinds.rs"]
mod tests;
