use crate::command::rename::RenameArgs;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

const EXAMPLES: &str = r#"Examples:
  rr -r ./test "^t" "r"
      Search recursively in ./test and rename files starting with "t" to start with "r"

  rr ./test '(\d+)' '$1$1'
      Write every number in a file name twice ('test1.txt' -> 'test11.txt')

  rr -r -f ./test '\.JPG$' '.jpg'
      Lowercase the extension, overwriting files that already have the new name"#;

#[derive(Parser, Debug)]
#[command(
    name = "rr",
    version,
    about = "Rename files and directories by regular expression",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Directory whose entries are renamed
    #[arg(value_name = "ROOT_DIR")]
    pub root: Option<PathBuf>,

    /// Regular expression tested against each name
    #[arg(value_name = "MATCH_PATTERN", allow_hyphen_values = true)]
    pub match_pattern: Option<String>,

    /// Replacement; capture groups are available as $1 or ${name}
    #[arg(value_name = "REPLACE_PATTERN", allow_hyphen_values = true)]
    pub replace_pattern: Option<String>,

    /// Search recursively in directories
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Include directory names
    #[arg(short = 'd', long = "dirs")]
    pub include_dirs: bool,

    /// Exclude the file extension from matching and replacing
    #[arg(short = 'e', long = "exclude-ext")]
    pub exclude_extension: bool,

    /// Overwrite existing files without asking
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Perform the renames without any confirmation
    #[arg(short = 'q', long = "no-confirm")]
    pub no_confirm: bool,

    /// Show the planned renames without applying them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the rename arguments, or `None` if a positional is missing.
    pub fn rename_args(self) -> Option<RenameArgs> {
        Some(RenameArgs {
            root: self.root?,
            match_pattern: self.match_pattern?,
            replace_pattern: self.replace_pattern?,
            recursive: self.recursive,
            include_dirs: self.include_dirs,
            exclude_extension: self.exclude_extension,
            force: self.force,
            no_confirm: self.no_confirm,
            dry_run: self.dry_run,
        })
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from(["rr", "-r", "-d", "-e", "-f", "-q", "dir", "^t", "r"]).unwrap();
        let args = cli.rename_args().unwrap();
        assert!(args.recursive && args.include_dirs && args.exclude_extension);
        assert!(args.force && args.no_confirm);
        assert!(!args.dry_run);
        assert_eq!(args.root, PathBuf::from("dir"));
        assert_eq!(args.match_pattern, "^t");
        assert_eq!(args.replace_pattern, "r");
    }

    #[test]
    fn test_combined_short_flags() {
        let cli = Cli::try_parse_from(["rr", "-rfq", "dir", "a", "b"]).unwrap();
        assert!(cli.recursive && cli.force && cli.no_confirm);
        assert!(!cli.include_dirs);
    }

    #[test]
    fn test_missing_positionals() {
        let cli = Cli::try_parse_from(["rr", "dir", "^t"]).unwrap();
        assert!(cli.rename_args().is_none());
    }

    #[test]
    fn test_pattern_may_start_with_hyphen() {
        let cli = Cli::try_parse_from(["rr", "dir", "-old$", "-new"]).unwrap();
        let args = cli.rename_args().unwrap();
        assert_eq!(args.match_pattern, "-old$");
        assert_eq!(args.replace_pattern, "-new");
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::try_parse_from(["rr", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
