use colored::Colorize;

use crate::{
    Booster,
    LearnerInfo,
    error::Result,
};
use super::objective::LoggingObjective;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,Objective,TrainLoss,TestLoss,Time\n";


/// A booster that can hand out the ensemble built so far.
pub trait CurrentHypothesis {
    /// The type of the ensemble.
    type Output;


    /// Returns a snapshot of the ensemble built so far.
    fn current_hypothesis(&self) -> Self::Output;
}


/// Struct `Logger` provides a generic function that
/// logs objective value, train/test loss value, and running time
/// for each step of boosting.
///
/// `loss_func` is any closure `Fn(&[E], &S) -> f64`,
/// e.g., [`zero_one_loss`](crate::zero_one_loss).
///
/// The CSV file written by [`Logger::run`] has the header
/// `Round,Objective,TrainLoss,TestLoss,Time`,
/// the time being cumulative milliseconds spent in boosting.
pub struct Logger<'a, B, W, F, G, E> {
    booster: B,
    weak_learner: W,
    objective_func: F,
    loss_func: G,
    train: &'a [E],
    test: &'a [E],
    time_limit: u128,
    round: usize,
}


impl<'a, B, W, F, G, E> Logger<'a, B, W, F, G, E> {
    /// Create a new instance of `Logger`.
    pub fn new(
        booster: B,
        weak_learner: W,
        objective_func: F,
        loss_func: G,
        train: &'a [E],
        test: &'a [E],
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            objective_func,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    #[inline(always)]
    pub fn time_limit_as_secs(self, time_limit: u64) -> Self {
        self.time_limit_as_millis((time_limit as u128).saturating_mul(1_000))
    }


    /// Set the time limit for boosting algorithm as minutes.
    #[inline(always)]
    pub fn time_limit_as_mins(self, time_limit: u64) -> Self {
        self.time_limit_as_secs(time_limit.saturating_mul(60))
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }


    /// The booster being logged.
    #[inline]
    pub fn booster(&self) -> &B {
        &self.booster
    }


    /// Consumes the logger and returns the booster.
    #[inline]
    pub fn into_booster(self) -> B {
        self.booster
    }
}


impl<B, W, F, G, E, S> Logger<'_, B, W, F, G, E>
    where B: Booster<W> + CurrentHypothesis<Output = S>,
          W: LearnerInfo,
          F: LoggingObjective<E, S>,
          G: Fn(&[E], &S) -> f64,
{
    #[inline(always)]
    fn quiet(&self) -> bool {
        self.round == usize::MAX
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "OBJ.".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "VALUE".bold().blue(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        print_info(self.booster.info());

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        print_info(self.weak_learner.info());

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Objective".bold(),
            self.objective_func.name().bold().green(),
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    fn print_row(&self, tag: &str, iter: usize, row: [f64; 3], time: u128) {
        let [obj, train, test] = row;
        println!(
            "{} {}\t\t{}\t{}\t{}\t{}",
            tag,
            format!("{:>WIDTH$}", iter).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", obj).blue(),
            format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
            format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
            time_format(time).bold().cyan(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration
    /// and writes one CSV row per round to `filename`.
    pub fn run<P>(&mut self, filename: P)
        -> Result<<B as Booster<W>>::Output>
        where P: AsRef<Path>,
    {
        let mut file = BufWriter::new(File::create(filename)?);
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;
        if !self.quiet() {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        for iter in 1.. {
            let now = Instant::now();
            let flow = self.booster.boost(&self.weak_learner, iter)?;
            time_acc += now.elapsed().as_millis();

            let f = self.booster.current_hypothesis();
            let obj = self.objective_func.objective_value(self.train, &f);
            let train = (self.loss_func)(self.train, &f);
            let test = (self.loss_func)(self.test, &f);
            let row = [obj, train, test];

            // The booster added no hypothesis on this iteration.
            if flow.is_break() {
                if !self.quiet() {
                    let tag = "[FIN]".bold().bright_green().to_string();
                    self.print_row(&tag, iter - 1, row, time_acc);
                }
                break;
            }

            writeln!(file, "{iter},{obj},{train},{test},{time_acc}")?;

            if time_acc > self.time_limit {
                if !self.quiet() {
                    let tag = "[TLE]".bold().bright_red().to_string();
                    self.print_row(&tag, iter, row, time_acc);
                }
                break;
            }

            if !self.quiet() && iter % self.round == 0 {
                let tag = "[LOG]".bold().magenta().to_string();
                self.print_row(&tag, iter, row, time_acc);
            }
        }
        file.flush()?;

        Ok(self.booster.postprocess())
    }
}


fn print_info(info: Option<Vec<(&str, String)>>) {
    let Some(info) = info else { return; };
    let line = info.into_iter()
        .map(|(key, val)| {
            format!(
                "    + {:<STAT_WIDTH$}\t{:>width$}",
                key,
                val.bold().yellow(),
                width = STAT_WIDTH - 8
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    println!("{line}");
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::time_format;

    #[test]
    fn time_formatting() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(3_500), " 03.500s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(7_260_000), " 02h 01m");
    }
}
