use crate::config::scenario::Scenario;
use crate::core::cleanup::CleanupGuard;
use crate::core::validators::{access_element, check_marks, divide, print_string_length};
use crate::domain::model::{DemoReport, Demonstration, FailureRecord};
use crate::domain::ports::{Console, FailureSink};
use crate::utils::error::Fault;

pub const OPENING_BANNER: &str = "CHECKED vs UNCHECKED EXCEPTION HANDLING WITH LOGGING DEMO";
pub const COMPLETION_BANNER: &str = "PROGRAM COMPLETED SUCCESSFULLY";

/// Runs every [`Demonstration`] in order, each inside its own guarded block.
///
/// A failure never leaves the block that raised it: it is recorded on the
/// sink, reported on the console, and the block's cleanup line follows.
pub struct DemoRunner<C: Console, S: FailureSink> {
    console: C,
    sink: S,
    scenario: Scenario,
    report: DemoReport,
}

impl<C: Console, S: FailureSink> DemoRunner<C, S> {
    pub fn new(console: C, sink: S, scenario: Scenario) -> Self {
        Self {
            console,
            sink,
            scenario,
            report: DemoReport::default(),
        }
    }

    pub fn run(&mut self) -> DemoReport {
        tracing::info!("🚀 Starting failure handling demo");
        self.report = DemoReport::default();
        self.console.line(OPENING_BANNER);

        for demonstration in Demonstration::ALL {
            self.run_guarded(demonstration);
        }

        self.console.line(COMPLETION_BANNER);
        tracing::info!(
            failures = self.report.failures_contained,
            cleanups = self.report.cleanups_run,
            "✅ Demo finished"
        );
        self.report.clone()
    }

    pub fn into_parts(self) -> (C, S) {
        (self.console, self.sink)
    }

    fn run_guarded(&mut self, demonstration: Demonstration) {
        tracing::debug!(?demonstration, "entering guarded block");
        self.report.demonstrations += 1;

        let scenario = &self.scenario;
        let sink = &mut self.sink;
        let failures = &mut self.report.failures_contained;
        let cleanups = &mut self.report.cleanups_run;

        let mut console = CleanupGuard::new(&mut self.console, move |console| {
            console.line(demonstration.cleanup_line());
            console.line("");
            *cleanups += 1;
        });

        let outcome: Result<(), Box<dyn Fault>> = match demonstration {
            Demonstration::Division => divide(scenario.dividend, scenario.divisor)
                .map(|quotient| console.line(&format!("Division result: {}", quotient)))
                .map_err(boxed),
            Demonstration::ArrayAccess => {
                access_element(&scenario.values, scenario.index, &mut **console)
                    .map(|_| ())
                    .map_err(boxed)
            }
            Demonstration::StringLength => {
                print_string_length(scenario.text.as_deref(), &mut **console)
                    .map(|_| ())
                    .map_err(boxed)
            }
            Demonstration::MarksValidation => {
                check_marks(scenario.marks, &mut **console).map_err(boxed)
            }
        };

        if let Err(fault) = outcome {
            contain(demonstration, &*fault, &mut **console, sink);
            *failures += 1;
        }
    }
}

fn boxed<F: Fault + 'static>(fault: F) -> Box<dyn Fault> {
    Box::new(fault)
}

/// Records the failure and reports it to the user.
fn contain<F, C, S>(demonstration: Demonstration, fault: &F, console: &mut C, sink: &mut S)
where
    F: Fault + ?Sized,
    C: Console + ?Sized,
    S: FailureSink + ?Sized,
{
    sink.record_failure(FailureRecord::new(demonstration.log_label(), fault));
    console.line(&format!("Error: {} {}", demonstration.user_prefix(), fault));
}
