use std::ops::Range;

use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// One render pass derived from a draw list.
#[derive(Debug, Clone, PartialEq)]
pub struct PassPlan {
    /// Clear color used as the load op; `None` loads the previous contents.
    pub clear: Option<Color>,
    /// Vertices drawn with the bound program and vertex buffer.
    pub draw: Option<Range<u32>>,
}

/// Passes for one frame, plus the number of draws that could not be issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePlan {
    pub passes: Vec<PassPlan>,
    pub skipped_draws: usize,
}

/// Turns a draw list into render passes.
///
/// A `Clear` is folded into the load op of the next pass. Each `Draw` opens one
/// pass when `can_draw` holds, otherwise it is counted as skipped. A clear that
/// no draw consumed still gets a pass of its own.
pub fn plan_passes(list: &DrawList, can_draw: bool) -> FramePlan {
    let mut plan = FramePlan::default();
    let mut pending_clear = None;

    for cmd in list.commands() {
        match cmd {
            DrawCmd::Clear(color) => pending_clear = Some(*color),
            DrawCmd::Draw { vertices } => {
                if !can_draw {
                    plan.skipped_draws += 1;
                    continue;
                }
                plan.passes.push(PassPlan {
                    clear: pending_clear.take(),
                    draw: Some(vertices.clone()),
                });
            }
        }
    }

    if let Some(color) = pending_clear {
        plan.passes.push(PassPlan {
            clear: Some(color),
            draw: None,
        });
    }

    plan
}
