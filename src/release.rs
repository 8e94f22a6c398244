//! Major-line iteration
//!
//! Walks the configured major versions, shows the names derived for each
//! one and runs the requested procedure once the operator confirms them.

use crate::config::Config;
use crate::context::RunContext;
use crate::domain::derive;
use crate::error::{AutomatorError, Result};
use crate::exec::CommandSink;
use crate::procedure::{Orchestrator, Outcome, Procedure};
use crate::ui::{self, Confirm};

/// Result of one procedure run for one major line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorRun {
    pub major: String,
    pub outcome: Outcome,
}

/// What a release run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Major lines the procedure ran for, in order
    pub runs: Vec<MajorRun>,
    /// The operator rejected the names of a major line, ending the run
    pub stopped_early: bool,
}

/// Run `procedure` once for every selected major line in `config`.
///
/// Declining the "is the above info accurate?" gate stops the whole run,
/// not just the current major line.
///
/// # Returns
/// * `Ok(RunSummary)` - Every selected line was handled or the operator stopped the run
/// * `Err` - A version could not be derived, or a procedure failed
pub fn run_release<S: CommandSink, P: Confirm>(
    config: &Config,
    ctx: &RunContext,
    procedure: Procedure,
    orchestrator: &mut Orchestrator<S, P>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut matched = false;

    for (major, entry) in config.versions.iter() {
        if !ctx.selects(major) {
            tracing::debug!(major, "skipped by --major filter");
            continue;
        }
        matched = true;

        let line = entry.resolve(major)?;
        let names = derive(&line);

        ui::display_major_header(&names, &ctx.remote);

        if !orchestrator
            .executor_mut()
            .confirm("Is the above info accurate?", true)?
        {
            ui::display_message("Okay. Skipping the remaining major versions.");
            summary.stopped_early = true;
            break;
        }

        let outcome = orchestrator.run(procedure, &names);
        summary.runs.push(MajorRun {
            major: major.to_string(),
            outcome,
        });

        if outcome == Outcome::Failed {
            return Err(AutomatorError::Aborted {
                procedure: procedure.to_string(),
                major: major.to_string(),
            });
        }
    }

    if !matched {
        match &ctx.major_filter {
            Some(filter) => ui::display_message(&format!(
                "No configured major version matches --major={}",
                filter
            )),
            None => ui::display_message("No major versions configured."),
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::{Executor, RecordingSink};
    use crate::ui::ScriptedPrompt;

    fn config() -> Config {
        Config::from_toml(
            r#"
[versions."39"]
old_core_version = "3.9.2"
old_lae_version = "19.0.2"

[versions."310"]
old_core_version = "3.10.1"
old_lae_version = "19.5.0"
"#,
        )
        .unwrap()
    }

    fn orchestrator(prompt: ScriptedPrompt) -> Orchestrator<RecordingSink, ScriptedPrompt> {
        Orchestrator::new(Executor::new(RecordingSink::new(), prompt, false), "origin")
    }

    #[test]
    fn test_runs_procedure_per_major_in_order() {
        let mut orch = orchestrator(ScriptedPrompt::always(true));
        let summary = run_release(
            &config(),
            &RunContext::default(),
            Procedure::PushBetaBranches,
            &mut orch,
        )
        .unwrap();

        let majors: Vec<_> = summary.runs.iter().map(|r| r.major.as_str()).collect();
        assert_eq!(majors, vec!["39", "310"]);
        assert!(!summary.stopped_early);
        assert_eq!(
            orch.executor().sink().dispatched(),
            [
                "git push origin LAE_1903_STABLE",
                "git push origin LAE_1903_PACKAGE",
                "git push origin LAE_1951_STABLE",
                "git push origin LAE_1951_PACKAGE",
            ]
        );
    }

    #[test]
    fn test_unbumpable_version_is_an_error() {
        let config = Config::from_toml(
            r#"
[versions."39"]
old_core_version = "3.9"
old_lae_version = "19.0.2"
"#,
        )
        .unwrap();
        let mut orch = orchestrator(ScriptedPrompt::always(true));
        let result = run_release(&config, &RunContext::default(), Procedure::PushTags, &mut orch);
        assert!(matches!(result, Err(AutomatorError::Version(_))));
        assert!(orch.executor().prompt().asked().is_empty());
    }

    #[test]
    fn test_failed_procedure_aborts_run() {
        let executor = Executor::new(
            RecordingSink::failing_on("LAE_1903"),
            ScriptedPrompt::always(true),
            false,
        );
        let mut orch = Orchestrator::new(executor, "origin");
        let result = run_release(
            &config(),
            &RunContext::default(),
            Procedure::PushBetaBranches,
            &mut orch,
        );

        match result {
            Err(AutomatorError::Aborted { procedure, major }) => {
                assert_eq!(procedure, "push-beta-branches");
                assert_eq!(major, "39");
            }
            other => panic!("expected Aborted, got {:?}", other),
        }
        assert_eq!(orch.executor().prompt().asked().len(), 1);
    }
}
