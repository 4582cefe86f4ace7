use colored::Colorize;

use crate::{QLearningSession, Result};
use crate::qlearning::EpisodeReport;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

const DEFAULT_EPISODES: usize = 100;
const DEFAULT_ROUND: usize = 10;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 3;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Episode,TotalReward,Steps,Epsilon,Time\n";


/// Struct `Logger` trains a [`QLearningSession`] episode by episode,
/// writes total reward, steps, exploration rate and running time
/// of each episode to a CSV file,
/// and prints them to the console every few episodes.
///
/// # Example
/// ```no_run
/// use minilab::prelude::*;
///
/// let session = QLearningSession::new(
///     GridWorld::example(),
///     QLearningParams::default(),
/// ).unwrap();
///
/// let mut logger = Logger::new(session)
///     .episodes(500)
///     .print_every(50)
///     .time_limit_as_secs(10);
/// let reports = logger.run("qlearning.csv").unwrap();
/// ```
pub struct Logger {
    session: QLearningSession,
    episodes: usize,
    time_limit: u128,
    round: usize,
}


impl Logger {
    /// Create a new instance of `Logger`.
    pub fn new(session: QLearningSession) -> Self {
        Self {
            session,
            episodes: DEFAULT_EPISODES,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Set the number of episodes `run` trains.
    #[inline(always)]
    pub fn episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }


    /// Set the time limit as milliseconds.
    /// If training reaches this limit,
    /// breaks after the current episode.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit as seconds.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000);
        self
    }


    /// Set the time limit as minutes.
    #[inline(always)]
    pub fn time_limit_as_mins(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(60_000);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `10` episodes.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }


    /// Returns the session.
    #[inline]
    pub fn session(&self) -> &QLearningSession {
        &self.session
    }


    /// Consume the logger and return the trained session.
    #[inline]
    pub fn into_session(self) -> QLearningSession {
        self.session
    }


    #[inline(always)]
    fn verbose(&self) -> bool {
        self.round != usize::MAX
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "TOTAL".bold().blue(),
            "".bold().green(),
            "".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "EPISODE".bold().red(),
            "REWARD".bold().blue(),
            "STEPS".bold().green(),
            "EPSILON".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
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
            "Algorithm".bold(),
            self.session.name().bold().green(),
        );

        let line = self.session.info()
            .into_iter()
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

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Episodes".bold(),
            self.episodes.to_string().bold().green(),
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// The tag of the console row for `episode`, if one is printed.
    fn row_tag(&self, episode: usize, timed_out: bool) -> Option<String> {
        if !self.verbose() { return None; }

        if timed_out {
            Some("[TLE]".bold().bright_red().to_string())
        } else if episode % self.round == 0 {
            Some("[LOG]".bold().magenta().to_string())
        } else {
            None
        }
    }


    fn print_row(&self, tag: &str, episode: usize, report: &EpisodeReport, time: u128) {
        println!(
            "{} {}\t{}\t{}\t{}\t{}",
            tag,
            format!("{:>WIDTH$}", episode).red(),
            format!("{:>WIDTH$.PREC_WIDTH$}", report.total_reward).blue(),
            format!("{:>WIDTH$}", report.steps_taken).green(),
            format!("{:>WIDTH$.PREC_WIDTH$}", report.epsilon).yellow(),
            time_format(time).bold().cyan(),
        );
    }


    /// Train the session for the configured number of episodes
    /// and log each episode to `filename`.
    /// Returns the reports of the episodes run.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<Vec<EpisodeReport>>
    {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        if self.verbose() {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;
        let mut reports = Vec::with_capacity(self.episodes);

        for _ in 0..self.episodes {
            // Start measuring time
            let now = Instant::now();

            let report = self.session.train_episode();

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            let episode = self.session.episode();

            // Write the results to `file`.
            let line = format!(
                "{episode},{},{},{},{time_acc}\n",
                report.total_reward,
                report.steps_taken,
                report.epsilon,
            );
            file.write_all(line.as_bytes())?;
            reports.push(report);

            let timed_out = time_acc > self.time_limit;
            if let Some(tag) = self.row_tag(episode, timed_out) {
                self.print_row(&tag, episode, &report, time_acc);
            }
            if timed_out { break; }
        }

        if self.verbose() {
            if let Some(report) = reports.last() {
                let tag = "[FIN]".bold().bright_green().to_string();
                self.print_row(&tag, self.session.episode(), report, time_acc);
                println!();
            }
        }
        Ok(reports)
    }
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
