/// Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::entities::MotionModel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MotionArg {
    /// Original feel: fixed per-frame steps for ships and player shots.
    Mixed,
    /// Scale every mover by elapsed time.
    Elapsed,
}

impl From<MotionArg> for MotionModel {
    fn from(arg: MotionArg) -> Self {
        match arg {
            MotionArg::Mixed => MotionModel::Mixed,
            MotionArg::Elapsed => MotionModel::Elapsed,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sideways", about = "Side-scrolling terminal shooter")]
pub struct Config {
    /// Seed for the random source; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target frame rate.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(10..=240))]
    pub fps: u32,

    /// How ships and player shots advance between frames.
    #[arg(long, value_enum, default_value_t = MotionArg::Mixed)]
    pub motion: MotionArg,

    /// Write logs to this file (level from RUST_LOG, default info).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::parse_from(["sideways"]);
        assert_eq!(cfg.fps, 60);
        assert_eq!(cfg.motion, MotionArg::Mixed);
        assert!(cfg.seed.is_none());
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn explicit_options() {
        let cfg = Config::parse_from([
            "sideways", "--seed", "7", "--fps", "30", "--motion", "elapsed", "--log-file", "run.log",
        ]);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.fps, 30);
        assert_eq!(MotionModel::from(cfg.motion), MotionModel::Elapsed);
        assert_eq!(cfg.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn fps_out_of_range_is_rejected() {
        assert!(Config::try_parse_from(["sideways", "--fps", "1000"]).is_err());
    }
}
