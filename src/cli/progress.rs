use std::fmt::Display;
use std::time::Duration;

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::plan::TaskKey;

#[derive(PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Pending,
    InProgress,
    Skipped,
    Failed,
}

pub struct StepContext {
    step_num: usize,
    steps: Vec<Step>,
    quiet: bool,
}

pub struct Step {
    desc: String,
    key: TaskKey,
    progress_bar: ProgressBar,
}

impl Step {
    fn new(desc: &str, key: TaskKey, quiet: bool) -> Self {
        let progress_bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        Self {
            desc: desc.to_string(),
            key,
            progress_bar,
        }
    }
}

impl StepContext {
    pub fn new(quiet: bool) -> Self {
        if !quiet {
            println!("Tasks:");
        }

        let mut steps = vec![
            Step::new("Generate plan", TaskKey::GeneratePlan, quiet),
            Step::new("Write header", TaskKey::WriteHeader, quiet),
            Step::new("Write netlist", TaskKey::WriteNetlist, quiet),
        ];
        let mp = MultiProgress::new();
        let num_steps = steps.len();
        let width = format!("{}", num_steps).len();
        for (i, step) in steps.iter_mut().enumerate() {
            if !quiet {
                mp.insert(i + 1, step.progress_bar.clone());
            }
            let msg = Some(format!(
                "[{:width$}/{:width$}] {}",
                i + 1,
                num_steps,
                step.desc
            ));
            step.set_status(StepStatus::Pending, msg);
        }
        steps[0].set_status(StepStatus::InProgress, None);
        StepContext {
            step_num: 0,
            steps,
            quiet,
        }
    }

    #[inline]
    pub fn current_step(&mut self) -> Option<&mut Step> {
        self.steps.get_mut(self.step_num)
    }

    /// Marks the current step failed and the remaining steps skipped if
    /// `res` is an error.
    pub fn check<T, E>(&mut self, res: Result<T, E>) -> Result<T, E> {
        if res.is_err() {
            if let Some(current_step) = self.current_step() {
                current_step.set_status(StepStatus::Failed, None);
                self.step_num += 1;
                while let Some(current_step) = self.current_step() {
                    current_step.set_status(StepStatus::Skipped, None);
                    self.step_num += 1;
                }
            }
            if !self.quiet {
                println!("\n");
            }
        }

        res
    }

    pub fn finish(&mut self, key: TaskKey) {
        if let Some(current_step) = self.current_step() {
            if current_step.key != key {
                panic!("A step was completed out of order");
            }

            current_step.set_status(StepStatus::Done, None);

            self.step_num += 1;

            if let Some(current_step) = self.current_step() {
                current_step.set_status(StepStatus::InProgress, None);
            } else {
                self.done();
            }
        } else {
            panic!("A step was completed after all steps were marked completed");
        }
    }

    pub fn done(&mut self) {
        if !self.quiet {
            println!("\n\nCompleted all tasks");
        }
    }
}

fn format_template(spinner: bool, status: impl Display) -> String {
    if spinner {
        format!("{{spinner:.green}} {:16} {{msg}}", status)
    } else {
        format!("  {:16} {{msg}}", status)
    }
}

impl Step {
    fn set_status(&mut self, status: StepStatus, msg: Option<String>) {
        let status_template = match status {
            StepStatus::Done => format_template(false, "Done".green().bold()),
            StepStatus::Failed => format_template(false, "Failed".bright_white().on_red().bold()),
            StepStatus::InProgress => format_template(true, "In Progress".bright_white().bold()),
            StepStatus::Pending => format_template(true, "Pending".blue().bold()),
            StepStatus::Skipped => format_template(false, "Skipped".yellow().bold()),
        };
        if let Ok(style) = ProgressStyle::with_template(&status_template) {
            self.progress_bar.set_style(style);
        }

        if let Some(msg) = msg {
            self.progress_bar.set_message(msg);
        }

        if status == StepStatus::InProgress {
            self.progress_bar
                .enable_steady_tick(Duration::from_millis(200));
        } else if status != StepStatus::Pending {
            self.progress_bar.finish();
        }
    }
}
