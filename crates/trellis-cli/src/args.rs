use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use trellis_core::params::{CreateGoal, EditGoal};

/// Main command-line interface for the Trellis goal tracker
///
/// Trellis tracks personal goals organized as a tree: any goal may carry
/// sub-goals, and a goal only counts as complete once it and its entire
/// subtree are done. State is kept in a JSON snapshot file between
/// invocations.
#[derive(Parser)]
#[command(version, about, name = "trellis")]
pub struct Args {
    /// Path to the JSON data file. Defaults to
    /// $XDG_DATA_HOME/trellis/goals.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Trellis CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new goal, optionally as a sub-goal of an existing one
    #[command(alias = "a")]
    Add(AddArgs),
    /// List active goals with their sub-goal trees
    #[command(alias = "ls")]
    List,
    /// Show one goal in detail, including its subtree
    Show {
        /// ID of the goal to show
        id: u64,
    },
    /// Mark a goal as done
    #[command(alias = "d")]
    Done {
        /// ID of the goal to mark done
        id: u64,
    },
    /// Mark a goal as not done again (also clears every ancestor's flag)
    Undo {
        /// ID of the goal to undo
        id: u64,
    },
    /// Replace a goal's label
    Edit(EditArgs),
    /// Delete a goal together with all of its sub-goals
    #[command(alias = "rm")]
    Delete {
        /// ID of the goal to delete
        id: u64,
    },
    /// Show completed goals with aggregate statistics
    Completed,
}

/// Add a new goal
///
/// CLI wrapper for [`CreateGoal`] that adds clap-specific argument handling.
#[derive(ClapArgs)]
pub struct AddArgs {
    /// Label of the goal
    pub text: String,
    /// Attach the new goal under this existing goal
    #[arg(short, long)]
    pub parent: Option<u64>,
}

impl From<AddArgs> for CreateGoal {
    fn from(val: AddArgs) -> Self {
        CreateGoal {
            text: val.text,
            parent: val.parent,
        }
    }
}

/// Replace a goal's label
///
/// CLI wrapper for [`EditGoal`].
#[derive(ClapArgs)]
pub struct EditArgs {
    /// ID of the goal to edit
    pub id: u64,
    /// Replacement label
    pub text: String,
}

impl From<EditArgs> for EditGoal {
    fn from(val: EditArgs) -> Self {
        EditGoal {
            id: val.id,
            text: val.text,
        }
    }
}
