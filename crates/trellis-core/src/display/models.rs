//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so data structures stay free of
//! presentation concerns. A bare [`Goal`] only knows its own flag; formatting
//! that reflects *effective* completion lives in [`crate::display::tree`],
//! which has the store at hand.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Goal, GoalSummary};

/// Icon for a completion state: `✓` when done, `○` otherwise.
pub fn completion_icon(done: bool) -> &'static str {
    if done {
        "✓"
    } else {
        "○"
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.text)?;
        writeln!(f)?;

        writeln!(
            f,
            "- Done: {}",
            if self.done { "yes" } else { "no" }
        )?;
        match self.parent {
            Some(parent) => writeln!(f, "- Sub-goal of: {parent}")?,
            None => writeln!(f, "- Root goal")?,
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        Ok(())
    }
}

impl fmt::Display for GoalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.has_children() {
            format!(" ({}/{})", self.completed_children, self.total_children)
        } else {
            String::new()
        };

        writeln!(
            f,
            "## {} {} (ID: {}){progress}",
            completion_icon(self.effectively_done),
            self.text,
            self.id
        )?;
        writeln!(f)?;

        if self.done && !self.effectively_done {
            writeln!(f, "- Marked done, but sub-goals remain")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn goal() -> Goal {
        Goal {
            id: 7,
            text: "Run a marathon".to_string(),
            done: false,
            parent: None,
            created_at: Timestamp::from_second(1_640_995_200).unwrap(),
            updated_at: Timestamp::from_second(1_641_081_600).unwrap(),
        }
    }

    #[test]
    fn goal_display_includes_header_and_metadata() {
        let output = format!("{}", goal());
        assert!(output.contains("# 7. Run a marathon"));
        assert!(output.contains("- Done: no"));
        assert!(output.contains("- Root goal"));
    }

    #[test]
    fn summary_display_shows_progress_for_parents() {
        let summary = GoalSummary::from_goal(&goal(), false, 2, 3);
        let output = format!("{summary}");
        assert!(output.contains("(2/3)"));
        assert!(output.contains("○ Run a marathon"));
    }

    #[test]
    fn summary_display_omits_progress_for_leaves() {
        let summary = GoalSummary::from_goal(&goal(), false, 0, 0);
        assert!(!format!("{summary}").contains("(0/0)"));
    }
}
