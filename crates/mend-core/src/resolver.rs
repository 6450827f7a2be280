//! Conflict resolution: choose a side per region, then rewrite the document.
//!
//! Every region's coordinates come from a single scan of the original text.
//! Choices are collected top to bottom, but edits are applied bottom to top:
//! an edit only changes lines at or after its own start, so regions above it
//! keep valid line numbers until their turn.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::scanner::{ConflictRegion, scan};
use crate::traits::{ChoiceSource, Document};

/// How to collapse a conflict region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Keep the lines between the start and middle markers.
    #[serde(rename = "current")]
    KeepCurrent,
    /// Keep the lines between the middle and end markers.
    #[serde(rename = "incoming")]
    KeepIncoming,
    /// Keep the current lines followed by the incoming lines.
    #[serde(rename = "both")]
    KeepBoth,
    /// Leave the region untouched.
    #[serde(rename = "skip")]
    Skip,
}

impl Resolution {
    /// The resolutions offered to a user, in prompt order.
    pub const CHOICES: [Self; 3] = [Self::KeepCurrent, Self::KeepIncoming, Self::KeepBoth];

    /// Text that replaces the whole region, markers included.
    ///
    /// Returns `None` for [`Resolution::Skip`].
    #[must_use]
    pub fn replacement(self, region: &ConflictRegion) -> Option<String> {
        match self {
            Self::KeepCurrent => Some(region.current_text.clone()),
            Self::KeepIncoming => Some(region.incoming_text.clone()),
            Self::KeepBoth => Some(format!(
                "{}\n{}",
                region.current_text, region.incoming_text
            )),
            Self::Skip => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepCurrent => write!(f, "Current Changes"),
            Self::KeepIncoming => write!(f, "Incoming Changes"),
            Self::KeepBoth => write!(f, "Keep Both"),
            Self::Skip => write!(f, "Skip"),
        }
    }
}

/// A region paired with the resolution chosen for it.
#[derive(Debug, Clone)]
pub struct PlannedResolution {
    /// The region to resolve.
    pub region: ConflictRegion,
    /// How to resolve it.
    pub resolution: Resolution,
}

/// Resolutions chosen for every region of one document snapshot.
#[derive(Debug, Clone, Default)]
pub struct ResolutionPlan {
    /// One step per region, in document order.
    pub steps: Vec<PlannedResolution>,
}

impl ResolutionPlan {
    /// Whether the scanned document had no conflict regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of regions that will be rewritten.
    #[must_use]
    pub fn edit_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.resolution != Resolution::Skip)
            .count()
    }
}

/// Outcome of a resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    /// Conflict regions found in the document.
    pub found: usize,
    /// Regions that were rewritten.
    pub resolved: usize,
    /// Regions left untouched.
    pub skipped: usize,
}

impl ResolveSummary {
    /// Whether the document had no conflicts at all.
    #[must_use]
    pub const fn no_conflicts(&self) -> bool {
        self.found == 0
    }
}

/// Apply one resolution to a document.
///
/// Replaces the span from the start of `region.start_line` to the end of
/// `region.end_line`. Returns `false` without touching the document for
/// [`Resolution::Skip`].
///
/// # Errors
/// Returns `EditorState` if the region's lines no longer exist in the
/// document.
pub fn apply<D: Document + ?Sized>(
    document: &mut D,
    region: &ConflictRegion,
    resolution: Resolution,
) -> Result<bool> {
    let Some(replacement) = resolution.replacement(region) else {
        return Ok(false);
    };

    document.replace_lines(region.start_line, region.end_line, &replacement)?;
    debug!(
        start = region.start_line,
        end = region.end_line,
        %resolution,
        "applied resolution"
    );
    Ok(true)
}

/// Scan `text` and ask `source` how to resolve each region, top to bottom.
///
/// A declined choice becomes [`Resolution::Skip`].
///
/// # Errors
/// Returns error if the choice source fails.
pub fn create_plan<C: ChoiceSource + ?Sized>(text: &str, source: &mut C) -> Result<ResolutionPlan> {
    let regions = scan(text);
    let total = regions.len();
    let mut steps = Vec::with_capacity(total);

    for (index, region) in regions.into_iter().enumerate() {
        let resolution = source
            .choose(&region, index, total)?
            .unwrap_or(Resolution::Skip);
        steps.push(PlannedResolution { region, resolution });
    }

    Ok(ResolutionPlan { steps })
}

/// Apply a plan to the document it was created from, then persist once.
///
/// Edits are applied in descending line order so that no edit shifts the
/// coordinates of a region still waiting to be applied. The first failed
/// edit aborts the pass; nothing is persisted in that case. An empty plan
/// leaves the document alone.
///
/// # Errors
/// Returns `EditorState` if an edit can't be applied, or any error from
/// persisting the document.
pub fn execute_plan<D: Document + ?Sized>(
    document: &mut D,
    plan: &ResolutionPlan,
) -> Result<ResolveSummary> {
    let mut summary = ResolveSummary {
        found: plan.steps.len(),
        ..ResolveSummary::default()
    };

    if plan.is_empty() {
        return Ok(summary);
    }

    let mut order: Vec<&PlannedResolution> = plan.steps.iter().collect();
    order.sort_by(|a, b| b.region.start_line.cmp(&a.region.start_line));

    let mut lowest_applied = usize::MAX;
    for step in order {
        if step.region.end_line >= lowest_applied {
            return Err(Error::EditorState(format!(
                "region at line {} overlaps an edit already applied",
                step.region.start_line
            )));
        }

        if apply(document, &step.region, step.resolution)? {
            lowest_applied = step.region.start_line;
            summary.resolved += 1;
        } else {
            summary.skipped += 1;
        }
    }

    document.persist()?;
    info!(
        found = summary.found,
        resolved = summary.resolved,
        skipped = summary.skipped,
        "conflict resolution complete"
    );

    Ok(summary)
}

/// Run a whole resolution pass over a document.
///
/// # Errors
/// Returns error if choosing, editing or persisting fails.
pub fn resolve_document<D, C>(document: &mut D, source: &mut C) -> Result<ResolveSummary>
where
    D: Document + ?Sized,
    C: ChoiceSource + ?Sized,
{
    let plan = create_plan(document.text(), source)?;
    execute_plan(document, &plan)
}

/// A choice source that gives the same answer for every region.
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice(pub Resolution);

impl ChoiceSource for FixedChoice {
    fn choose(&mut self, _: &ConflictRegion, _: usize, _: usize) -> Result<Option<Resolution>> {
        Ok(Some(self.0))
    }
}

/// A choice source that replays a pre-supplied sequence of answers.
///
/// `None` entries, and regions past the end of the sequence, are treated
/// as declined.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    choices: std::collections::VecDeque<Option<Resolution>>,
}

impl ScriptedChoices {
    /// Create a source from a sequence of answers.
    #[must_use]
    pub fn new(choices: impl IntoIterator<Item = Option<Resolution>>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
        }
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose(&mut self, _: &ConflictRegion, _: usize, _: usize) -> Result<Option<Resolution>> {
        Ok(self.choices.pop_front().flatten())
    }
}
