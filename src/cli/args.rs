use clap::Parser;
use std::path::PathBuf;

/// Single-user account ledger with an interactive menu
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Single-user account ledger with an interactive menu", long_about = None)]
pub struct CliArgs {
    /// Location of the persisted ledger document
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = "bank-data.json",
        help = "Path to the JSON data file (created on first run)"
    )]
    pub data_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(&["program"], "bank-data.json")]
    #[case::custom(&["program", "--data-file", "/tmp/ledger.json"], "/tmp/ledger.json")]
    fn test_data_file_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.data_file, PathBuf::from(expected));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CliArgs::try_parse_from(["program", "--strategy", "sync"]).is_err());
    }
}
