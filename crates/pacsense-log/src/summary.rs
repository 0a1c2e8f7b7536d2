//! Run configuration record and its start-of-run log block.

use crate::logger::Logger;

/// Width of the label column in [`initial_log`] output.
const LABEL_WIDTH: usize = 18;

/// Configuration of a training run, as logged at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Maze layout name.
    pub layout: String,
    /// Optimiser learning rate.
    pub learning_rate: f64,
    /// Whether the safety shield is enabled.
    pub shield: bool,
    /// Whether ghost detection runs on a learned detector.
    pub object_detection: bool,
    /// Reward for clearing the maze.
    pub reward_goal: f64,
    /// Reward for touching a ghost.
    pub reward_crash: f64,
    /// Reward per food pellet.
    pub reward_food: f64,
    /// Reward per time step.
    pub reward_time: f64,
    /// Training budget in environment steps.
    pub total_timesteps: u64,
    /// Name of the logger the run writes to.
    pub logger_name: String,
    /// Random seed.
    pub seed: u64,
    /// Discount factor.
    pub gamma: f64,
    /// Whether frames are rendered.
    pub render_or_not: bool,
}

impl RunSummary {
    /// The aligned `Label:  value` lines [`initial_log`] writes.
    ///
    /// Floats and flags are spelled the way the Python training scripts
    /// print them (`10.0`, `1e-05`, `True`), so logs of both stay
    /// comparable line by line.
    pub fn lines(&self) -> Vec<String> {
        let fields: [(&str, String); 13] = [
            ("Layout", self.layout.clone()),
            ("Learning rate", float_repr(self.learning_rate)),
            ("Shield", bool_repr(self.shield).to_owned()),
            ("Object detection", bool_repr(self.object_detection).to_owned()),
            ("Reward goal", float_repr(self.reward_goal)),
            ("Reward crash", float_repr(self.reward_crash)),
            ("Reward food", float_repr(self.reward_food)),
            ("Reward time", float_repr(self.reward_time)),
            ("Total timesteps", self.total_timesteps.to_string()),
            ("Logger", self.logger_name.clone()),
            ("Seed", self.seed.to_string()),
            ("Gamma", float_repr(self.gamma)),
            ("Render_or_not", bool_repr(self.render_or_not).to_owned()),
        ];
        fields
            .into_iter()
            .map(|(label, value)| format!("{:<LABEL_WIDTH$}{value}", format!("{label}:")))
            .collect()
    }
}

/// Shortest round-trip float text with a signed, two-digit exponent.
fn float_repr(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_owned();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    let s = format!("{v:?}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

fn bool_repr(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

/// Log `summary` to `logger` at info level, one field per line.
pub fn initial_log(logger: &Logger, summary: &RunSummary) {
    for line in summary.lines() {
        logger.info(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{init_logger, LogSink};
    use pacsense_test_utils::CaptureWriter;
    use tracing_subscriber::fmt::writer::BoxMakeWriter;

    fn summary() -> RunSummary {
        RunSummary {
            layout: "smallGrid".into(),
            learning_rate: 0.0003,
            shield: true,
            object_detection: false,
            reward_goal: 10.0,
            reward_crash: -10.0,
            reward_food: 1.0,
            reward_time: -0.01,
            total_timesteps: 500_000,
            logger_name: "pacman_raw".into(),
            seed: 42,
            gamma: 0.99,
            render_or_not: false,
        }
    }

    #[test]
    fn values_start_in_one_column() {
        let lines = summary().lines();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Layout:           smallGrid");
        assert_eq!(lines[1], "Learning rate:    0.0003");
        assert_eq!(lines[2], "Shield:           True");
        assert_eq!(lines[3], "Object detection: False");
        assert_eq!(lines[4], "Reward goal:      10.0");
        assert_eq!(lines[8], "Total timesteps:  500000");
        assert_eq!(lines[12], "Render_or_not:    False");
        assert!(lines.iter().all(|l| l.len() > LABEL_WIDTH));
    }

    #[test]
    fn logs_every_line_at_info() {
        let capture = CaptureWriter::new();
        let logger = init_logger(
            0,
            "summary",
            vec![LogSink::Writer(BoxMakeWriter::new(capture.clone()))],
        )
        .unwrap();
        // Warning threshold: info lines are filtered.
        initial_log(&logger, &summary());
        assert!(capture.contents().is_empty());

        let capture = CaptureWriter::new();
        let logger = init_logger(
            1,
            "summary",
            vec![LogSink::Writer(BoxMakeWriter::new(capture.clone()))],
        )
        .unwrap();
        initial_log(&logger, &summary());
        let lines = capture.lines();
        assert_eq!(lines.len(), 14);
        assert!(lines[1].ends_with("[INFO] Layout:           smallGrid"));
        assert!(lines[13].ends_with("[INFO] Render_or_not:    False"));
    }

    #[test]
    fn small_and_large_values_use_padded_exponents() {
        assert_eq!(float_repr(1e-5), "1e-05");
        assert_eq!(float_repr(2.5e-7), "2.5e-07");
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(1e-4), "0.0001");

        let small = RunSummary {
            learning_rate: 1e-5,
            ..summary()
        };
        assert_eq!(small.lines()[1], "Learning rate:    1e-05");
    }

    #[test]
    fn plain_values_keep_a_decimal_point() {
        assert_eq!(float_repr(10.0), "10.0");
        assert_eq!(float_repr(-0.01), "-0.01");
        assert_eq!(float_repr(0.99), "0.99");
        assert_eq!(float_repr(f64::NAN), "nan");
        assert_eq!(float_repr(f64::NEG_INFINITY), "-inf");
    }
}
