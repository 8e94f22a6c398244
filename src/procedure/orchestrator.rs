use crate::domain::DerivedNames;
use crate::exec::{CommandSink, Executor};
use crate::procedure::{steps_for, Procedure, Step};
use crate::ui::{self, Confirm};

/// How one procedure invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every step ran
    Completed,
    /// The operator declined a gate; the remaining steps were skipped
    AbortedByUser,
    /// A command could not be dispatched or a prompt could not be answered
    Failed,
}

/// Interprets procedures step by step for one major line at a time.
pub struct Orchestrator<S, P> {
    executor: Executor<S, P>,
    remote: String,
}

impl<S: CommandSink, P: Confirm> Orchestrator<S, P> {
    pub fn new(executor: Executor<S, P>, remote: impl Into<String>) -> Self {
        Orchestrator {
            executor,
            remote: remote.into(),
        }
    }

    pub fn executor(&self) -> &Executor<S, P> {
        &self.executor
    }

    pub fn executor_mut(&mut self) -> &mut Executor<S, P> {
        &mut self.executor
    }

    /// Run `procedure` against `names`.
    ///
    /// A declined gate ends this invocation with [`Outcome::AbortedByUser`].
    /// When that happens inside a sub-procedure the caller keeps going with
    /// its own next step; a [`Outcome::Failed`] sub-procedure stops the caller
    /// too.
    pub fn run(&mut self, procedure: Procedure, names: &DerivedNames) -> Outcome {
        ui::display_message(&format!("Running {}", procedure));
        tracing::debug!(%procedure, major = %names.major, "procedure started");

        let outcome = self.run_steps(procedure, names);

        tracing::debug!(%procedure, ?outcome, "procedure finished");
        outcome
    }

    fn run_steps(&mut self, procedure: Procedure, names: &DerivedNames) -> Outcome {
        for step in steps_for(procedure, names, &self.remote) {
            match step {
                Step::Exec(command) => {
                    if let Err(e) = self.executor.run(&command) {
                        tracing::error!(%procedure, error = %e, "step failed");
                        return Outcome::Failed;
                    }
                }
                Step::Invoke(sub) => match self.run(sub, names) {
                    Outcome::Failed => return Outcome::Failed,
                    Outcome::Completed | Outcome::AbortedByUser => {}
                },
                Step::Gate {
                    question,
                    on_decline,
                } => match self.executor.confirm(question, true) {
                    Ok(true) => {}
                    Ok(false) => {
                        ui::display_message(on_decline);
                        return Outcome::AbortedByUser;
                    }
                    Err(e) => {
                        tracing::error!(%procedure, error = %e, "gate failed");
                        return Outcome::Failed;
                    }
                },
            }
        }
        Outcome::Completed
    }
}
