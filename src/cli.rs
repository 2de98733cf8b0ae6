use crate::formatting::ColorMode;
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recursolve")]
#[command(about = "Classify the asymptotic complexity of recurrence relations", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to the nearest .recursolve.toml)
    #[arg(long, global = true, env = "RECURSOLVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Color mode (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Master Theorem: T(n) = a T(n/b) + Θ(n^k)
    Master {
        /// Number of subproblems (a >= 1)
        #[arg(short = 'a', long = "subproblems")]
        a: f64,

        /// Factor by which the input shrinks (b > 1)
        #[arg(short = 'b', long = "shrink")]
        b: f64,

        /// Exponent of the combine step (k >= 0)
        #[arg(short = 'k', long = "exponent")]
        k: f64,
    },

    /// Extended Master Theorem: T(n) = a T(n/b) + Θ(n^k (log n)^i)
    Extended {
        /// Number of subproblems (a >= 1)
        #[arg(short = 'a', long = "subproblems")]
        a: f64,

        /// Factor by which the input shrinks (b > 1)
        #[arg(short = 'b', long = "shrink")]
        b: f64,

        /// Exponent of n in the combine step (k >= 0)
        #[arg(short = 'k', long = "exponent")]
        k: f64,

        /// Exponent of log n in the combine step
        #[arg(short = 'i', long = "log-exponent", allow_negative_numbers = true)]
        i: f64,
    },

    /// Akra-Bazzi method: T(n) = Σ a_i T(n/b_i) + Θ(n^k)
    AkraBazzi {
        /// Subproblem coefficients, comma separated (e.g. 1,1)
        #[arg(short = 'a', long = "coefficients", value_delimiter = ',', required = true)]
        a: Vec<f64>,

        /// Shrink factor of each subproblem, comma separated (e.g. 3,1.5)
        #[arg(short = 'b', long = "shrinks", value_delimiter = ',', required = true)]
        b: Vec<f64>,

        /// Exponent of the combine step (k >= 0)
        #[arg(short = 'k', long = "exponent")]
        k: f64,
    },

    /// Subtractive Master Theorem: T(n) = a T(n-b) + Θ(n^k)
    Subtractive {
        /// Multiplier of the subproblem
        #[arg(short = 'a', long = "multiplier", allow_negative_numbers = true)]
        a: f64,

        /// Amount subtracted from the input size (b > 0)
        #[arg(short = 'b', long = "step")]
        b: f64,

        /// Exponent of the combine step (k >= 0)
        #[arg(short = 'k', long = "exponent")]
        k: f64,
    },

    /// Approximate bounds for mixed subproblem sizes: T(n) = Σ w_i T(s_i n) + Θ(n^k)
    Approximate {
        /// Subproblem size fractions, comma separated (e.g. 1/2,1/3 or 0.5,0.333)
        #[arg(
            short = 's',
            long = "sizes",
            value_delimiter = ',',
            value_parser = parse_fraction,
            required = true
        )]
        sizes: Vec<f64>,

        /// Weight of each subproblem, comma separated
        #[arg(
            short = 'w',
            long = "weights",
            value_delimiter = ',',
            allow_negative_numbers = true,
            required = true
        )]
        weights: Vec<f64>,

        /// Exponent of the combine step (k >= 0)
        #[arg(short = 'k', long = "exponent")]
        k: f64,
    },

    /// Solve a catalog of well-known recurrences
    Catalog,

    /// Write a default .recursolve.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parse `0.5` or `1/2`.
pub fn parse_fraction(s: &str) -> Result<f64, String> {
    let s = s.trim();
    match s.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator
                .trim()
                .parse()
                .map_err(|_| format!("invalid numerator in '{}'", s))?;
            let denominator: f64 = denominator
                .trim()
                .parse()
                .map_err(|_| format!("invalid denominator in '{}'", s))?;
            if denominator == 0.0 {
                return Err(format!("zero denominator in '{}'", s));
            }
            Ok(numerator / denominator)
        }
        None => s.parse().map_err(|_| format!("invalid number '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_fraction("1/2"), Ok(0.5));
        assert_eq!(parse_fraction(" 1 / 4 "), Ok(0.25));
        assert_eq!(parse_fraction("0.75"), Ok(0.75));
        assert!(parse_fraction("1/0").is_err());
        assert!(parse_fraction("one/two").is_err());
        assert!(parse_fraction("").is_err());
    }

    #[test]
    fn test_parse_extended_with_negative_log_exponent() {
        let cli = Cli::try_parse_from([
            "recursolve", "extended", "-a", "3", "-b", "3", "-k", "1", "-i", "-1",
        ])
        .unwrap();
        match cli.command {
            Commands::Extended { a, b, k, i } => {
                assert_eq!((a, b, k, i), (3.0, 3.0, 1.0, -1.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_approximate_fractions() {
        let cli = Cli::try_parse_from([
            "recursolve",
            "approximate",
            "--sizes",
            "1/2,1/4",
            "--weights",
            "2,3",
            "-k",
            "2",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Approximate { sizes, weights, k } => {
                assert_eq!(sizes, vec![0.5, 0.25]);
                assert_eq!(weights, vec![2.0, 3.0]);
                assert_eq!(k, 2.0);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
