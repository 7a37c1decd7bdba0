//! Command-line definition.

use clap::Parser;

use crate::convert::OutputMode;

/// Convert a 6-digit hex color code into its red, green and blue channel values.
#[derive(Debug, Parser)]
#[command(name = "colorconvert", version, about, args_override_self = true)]
pub struct Cli {
    /// Hex color code, e.g. FF8000
    #[arg(allow_hyphen_values = true)]
    pub code: Option<String>,

    /// Print channels as fractions in [0, 1] with an 'f' suffix
    #[arg(short = 'f', long, overrides_with = "decimal")]
    pub floating: bool,

    /// Print channels as integers in 0..=255 (default)
    #[arg(short = 'd', long, overrides_with = "floating")]
    pub decimal: bool,

    /// Print channels as a JSON object
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Output mode selected by `-f` / `-d`.
    pub fn mode(&self) -> OutputMode {
        if self.floating {
            OutputMode::Floating
        } else {
            OutputMode::Decimal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn decimal_is_default() {
        let cli = Cli::try_parse_from(["colorconvert", "FFFFFF"]).unwrap();
        assert_eq!(cli.mode(), OutputMode::Decimal);
        assert_eq!(cli.code.as_deref(), Some("FFFFFF"));
    }

    #[test]
    fn floating_flag() {
        let cli = Cli::try_parse_from(["colorconvert", "-f", "FFFFFF"]).unwrap();
        assert_eq!(cli.mode(), OutputMode::Floating);
    }

    #[test]
    fn last_mode_flag_wins() {
        let cli = Cli::try_parse_from(["colorconvert", "-f", "-d", "000000"]).unwrap();
        assert_eq!(cli.mode(), OutputMode::Decimal);

        let cli = Cli::try_parse_from(["colorconvert", "-d", "-f", "000000"]).unwrap();
        assert_eq!(cli.mode(), OutputMode::Floating);
    }

    #[test]
    fn repeated_mode_flag_is_accepted() {
        let cli = Cli::try_parse_from(["colorconvert", "-f", "-f", "FFFFFF"]).unwrap();
        assert_eq!(cli.mode(), OutputMode::Floating);
    }

    #[test]
    fn hyphenated_code_is_a_value() {
        let cli = Cli::try_parse_from(["colorconvert", "-12345"]).unwrap();
        assert_eq!(cli.code.as_deref(), Some("-12345"));
        assert_eq!(cli.mode(), OutputMode::Decimal);

        let cli = Cli::try_parse_from(["colorconvert", "-f", "FFFFFF"]).unwrap();
        assert_eq!(cli.code.as_deref(), Some("FFFFFF"));
        assert_eq!(cli.mode(), OutputMode::Floating);
    }

    #[test]
    fn code_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["colorconvert"]).unwrap();
        assert!(cli.code.is_none());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["colorconvert", "000000", "FFFFFF"]).is_err());
    }
}
