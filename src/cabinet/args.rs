use cabinet::validation::ValidationMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cabinet", version)]
#[command(about = "Interactive file cabinet for person records", long_about = None)]
pub struct Cli {
    /// Validation rules to run with: default or custom (overrides the config file)
    #[arg(short = 'v', long = "validation-rules", value_name = "RULES")]
    pub validation_rules: Option<ValidationMode>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Emit debug diagnostics on stderr
    #[arg(long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_flag_with_equals() {
        let cli = Cli::try_parse_from(["cabinet", "--validation-rules=CUSTOM"]).unwrap();
        assert_eq!(cli.validation_rules, Some(ValidationMode::Custom));
    }

    #[test]
    fn short_flag_with_separate_value() {
        let cli = Cli::try_parse_from(["cabinet", "-v", "Default"]).unwrap();
        assert_eq!(cli.validation_rules, Some(ValidationMode::Default));
    }

    #[test]
    fn no_flag_leaves_choice_to_config() {
        let cli = Cli::try_parse_from(["cabinet"]).unwrap();
        assert_eq!(cli.validation_rules, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn unknown_rules_are_rejected() {
        assert!(Cli::try_parse_from(["cabinet", "-v", "strict"]).is_err());
    }
}
