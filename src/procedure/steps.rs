use crate::domain::DerivedNames;
use crate::procedure::Procedure;

/// Readme whose version strings are rewritten by `update-readme`.
pub const README_FILE: &str = "LAE_readme.md";

/// One unit of work inside a procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Hand a templated command to the executor
    Exec(String),
    /// Run another procedure; a declined gate inside it ends only that procedure
    Invoke(Procedure),
    /// Ask the operator; declining prints `on_decline` and ends the current procedure
    Gate {
        question: &'static str,
        on_decline: &'static str,
    },
}

fn exec(command: String) -> Step {
    Step::Exec(command)
}

fn gate(question: &'static str, on_decline: &'static str) -> Step {
    Step::Gate {
        question,
        on_decline,
    }
}

fn checkout(target: &str) -> Step {
    exec(format!("git checkout {}", target))
}

fn merge(source: &str) -> Step {
    exec(format!("git merge {}", source))
}

fn push(remote: &str, reference: &str) -> Step {
    exec(format!("git push {} {}", remote, reference))
}

fn replace_in_readme(old: &str, new: &str) -> Step {
    exec(format!(
        "sed -i '' 's/{}/{}/g' ./{}",
        regex::escape(old),
        regex::escape(new),
        README_FILE
    ))
}

fn numstat_diff(branch: &str, beta_branch: &str, names: &DerivedNames) -> Step {
    exec(format!(
        "diff <(git diff {}...{} --numstat) <(git diff {}...{} --numstat)",
        branch, beta_branch, names.old_core_tag, names.new_core_tag
    ))
}

/// Expand `procedure` into its ordered steps for one major line.
pub fn steps_for(procedure: Procedure, names: &DerivedNames, remote: &str) -> Vec<Step> {
    let n = names;
    match procedure {
        Procedure::BetaBranches => vec![
            Step::Invoke(Procedure::CreateBetaBranches),
            checkout(&n.beta_branch_stable),
            gate(
                "Remember to revert any CLAMP changes which have been superseded by upstream core changes. Are you done with this?",
                "Okay. Abandoning the remaining tasks: merge-beta-branches, update-readme, push-beta-branches",
            ),
            Step::Invoke(Procedure::MergeBetaBranches),
            gate(
                "Are you ready to push the beta branches?",
                "Okay. Abandoning remaining tasks: push-beta-branches.",
            ),
            Step::Invoke(Procedure::PushBetaBranches),
        ],
        Procedure::CleanupBetaBranches => vec![
            exec(format!("git branch -d {}", n.beta_branch_stable)),
            exec(format!("git push {} :{}", remote, n.beta_branch_stable)),
            exec(format!("git branch -d {}", n.beta_branch_package)),
            exec(format!("git push {} :{}", remote, n.beta_branch_package)),
        ],
        Procedure::CreateBetaBranches => vec![
            checkout(&n.branch_stable),
            exec(format!("git checkout -b {}", n.beta_branch_stable)),
            checkout(&n.branch_package),
            exec(format!("git checkout -b {}", n.beta_branch_package)),
        ],
        Procedure::CreateTags => vec![
            checkout(&n.beta_branch_stable),
            exec(format!(
                "git tag -a {} -m 'Moodle {} [No plugins]'",
                n.new_lae_tag_stable, n.new_lae_tag_package
            )),
            checkout(&n.beta_branch_package),
            exec(format!(
                "git tag -a {} -m 'Moodle {}'",
                n.new_lae_tag_package, n.new_lae_tag_package
            )),
        ],
        Procedure::MergeBetaBranches => vec![
            // Checking out the core tag first makes sure it has been fetched.
            checkout(&n.new_core_tag),
            checkout(&n.beta_branch_stable),
            merge(&n.new_core_tag),
            Step::Invoke(Procedure::UpdateReadme),
            checkout(&n.beta_branch_package),
            merge(&n.beta_branch_stable),
        ],
        Procedure::MergeMainBranches => vec![
            checkout(&n.branch_stable),
            merge(&n.beta_branch_stable),
            checkout(&n.branch_package),
            merge(&n.beta_branch_package),
        ],
        Procedure::PushBetaBranches => vec![
            push(remote, &n.beta_branch_stable),
            push(remote, &n.beta_branch_package),
        ],
        Procedure::PushMainBranches => vec![
            push(remote, &n.branch_stable),
            push(remote, &n.branch_package),
        ],
        Procedure::PushTags => vec![
            push(remote, &n.new_lae_tag_stable),
            push(remote, &n.new_lae_tag_package),
        ],
        Procedure::SanityDiff => vec![
            numstat_diff(&n.branch_stable, &n.beta_branch_stable, n),
            numstat_diff(&n.branch_package, &n.beta_branch_package, n),
        ],
        Procedure::TagNPush => vec![
            Step::Invoke(Procedure::MergeMainBranches),
            Step::Invoke(Procedure::CreateTags),
            gate(
                "Are you ready to push the main branches and the new tags?",
                "Okay. Abandoning remaining tasks: push-branches, push-tags, cleanup-beta-branches",
            ),
            Step::Invoke(Procedure::PushMainBranches),
            Step::Invoke(Procedure::PushTags),
            gate(
                "Would you like to automatically clean up the beta branches?",
                "Okay. Abandoning remaining tasks: cleanup-beta-branches",
            ),
            Step::Invoke(Procedure::CleanupBetaBranches),
        ],
        Procedure::UpdateReadme => vec![
            replace_in_readme(&n.old_core_version, &n.new_core_version),
            replace_in_readme(&n.old_lae_version, &n.new_lae_version),
            // `git a` is kept as written; it relies on the operator's alias.
            exec(format!(
                "git a {}; git commit -m 'Update {}'",
                README_FILE, README_FILE
            )),
        ],
    }
}
