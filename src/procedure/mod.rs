//! Release procedures
//!
//! The fixed vocabulary of commands is the [`Procedure`] enum. Each
//! procedure expands into ordered [`Step`]s (see [`steps_for`]) which the
//! [`Orchestrator`] interprets for one major line.

pub mod orchestrator;
pub mod steps;

pub use orchestrator::{Orchestrator, Outcome};
pub use steps::{steps_for, Step, README_FILE};

use std::fmt;
use std::str::FromStr;

use crate::error::AutomatorError;

/// A named release procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    BetaBranches,
    CleanupBetaBranches,
    CreateBetaBranches,
    CreateTags,
    MergeBetaBranches,
    MergeMainBranches,
    PushBetaBranches,
    PushMainBranches,
    PushTags,
    SanityDiff,
    TagNPush,
    UpdateReadme,
}

impl Procedure {
    /// Every procedure, in help-text order
    pub const ALL: [Procedure; 12] = [
        Procedure::BetaBranches,
        Procedure::TagNPush,
        Procedure::CreateBetaBranches,
        Procedure::MergeBetaBranches,
        Procedure::UpdateReadme,
        Procedure::PushBetaBranches,
        Procedure::SanityDiff,
        Procedure::MergeMainBranches,
        Procedure::CreateTags,
        Procedure::PushMainBranches,
        Procedure::PushTags,
        Procedure::CleanupBetaBranches,
    ];

    /// Command-line name of the procedure
    pub fn name(&self) -> &'static str {
        match self {
            Procedure::BetaBranches => "beta-branches",
            Procedure::CleanupBetaBranches => "cleanup-beta-branches",
            Procedure::CreateBetaBranches => "create-beta-branches",
            Procedure::CreateTags => "create-tags",
            Procedure::MergeBetaBranches => "merge-beta-branches",
            Procedure::MergeMainBranches => "merge-main-branches",
            Procedure::PushBetaBranches => "push-beta-branches",
            Procedure::PushMainBranches => "push-main-branches",
            Procedure::PushTags => "push-tags",
            Procedure::SanityDiff => "sanity-diff",
            Procedure::TagNPush => "tag-n-push",
            Procedure::UpdateReadme => "update-readme",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Procedure::BetaBranches => {
                "Create beta branches, merge the new core tag into them and push them"
            }
            Procedure::CleanupBetaBranches => "Delete the beta branches locally and on the remote",
            Procedure::CreateBetaBranches => "Branch the beta branches off the stable/package branches",
            Procedure::CreateTags => "Tag the beta branches with the new LAE tags",
            Procedure::MergeBetaBranches => {
                "Merge the new core tag into the beta branches and update the readme"
            }
            Procedure::MergeMainBranches => "Merge the beta branches into the stable/package branches",
            Procedure::PushBetaBranches => "Push the beta branches",
            Procedure::PushMainBranches => "Push the stable/package branches",
            Procedure::PushTags => "Push the new LAE tags",
            Procedure::SanityDiff => "Compare beta branch changes with the core tag changes",
            Procedure::TagNPush => "Merge, tag and push the release, then clean up beta branches",
            Procedure::UpdateReadme => "Replace old versions with new ones in the LAE readme and commit",
        }
    }

    /// Help text listing every procedure
    pub fn help_listing() -> String {
        let mut listing = String::from("Commands:\n");
        for procedure in Procedure::ALL {
            listing.push_str(&format!(
                "  {:<24}{}\n",
                procedure.name(),
                procedure.description()
            ));
        }
        listing
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Procedure {
    type Err = AutomatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Procedure::ALL
            .into_iter()
            .find(|procedure| procedure.name() == s)
            .ok_or_else(|| AutomatorError::usage(format!("Invalid command '{}'.", s)))
    }
}
