use super::adjust::{handle_adjust_command, RunConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::error::CliError;
use argh::FromArgs;
use planar_adjust_kernels::{Adjustment, AdjustmentKind};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Choose an adjustment interactively and run it with the default parameters
#[argh(subcommand, name = "menu")]
pub struct MenuCmd {
    /// input image path [default: input.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_INPUT)")]
    pub input: PathBuf,

    /// output image path [default: output.ppm]
    #[argh(option, default = "PathBuf::from(DEFAULT_OUTPUT)")]
    pub output: PathBuf,
}

pub fn handle_menu_command(cmd: MenuCmd) -> Result<(), CliError> {
    let kind = prompt_for_adjustment(io::stdin().lock(), io::stdout().lock())?;

    handle_adjust_command(RunConfig {
        input: cmd.input,
        output: cmd.output,
        adjustment: Adjustment::with_defaults(kind),
    })
}

/// Prints the numbered menu to `output` and reads one choice from `input`.
pub fn prompt_for_adjustment<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<AdjustmentKind, CliError> {
    writeln!(output, "Choose an operation:")?;
    for &kind in AdjustmentKind::all_values() {
        writeln!(output, "{}. {}", kind.menu_choice(), kind.description())?;
    }
    write!(output, "Enter your choice: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    parse_menu_choice(&line)
}

/// Maps the text typed at the prompt to an adjustment.
pub fn parse_menu_choice(text: &str) -> Result<AdjustmentKind, CliError> {
    let text = text.trim();
    text.parse::<u32>()
        .ok()
        .and_then(AdjustmentKind::from_menu_choice)
        .ok_or_else(|| CliError::InvalidMenuChoice(text.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", AdjustmentKind::Brighten)]
    #[case("2\n", AdjustmentKind::Saturate)]
    #[case("  3\r\n", AdjustmentKind::Invert)]
    #[case("4", AdjustmentKind::Contrast)]
    fn valid_choices(#[case] text: &str, #[case] expected: AdjustmentKind) {
        assert_eq!(parse_menu_choice(text).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("5")]
    #[case("-1")]
    #[case("brighten")]
    #[case("1 2")]
    fn invalid_choices(#[case] text: &str) {
        assert!(matches!(
            parse_menu_choice(text),
            Err(CliError::InvalidMenuChoice(_))
        ));
    }

    #[test]
    fn prompt_lists_every_adjustment() {
        let mut shown = Vec::new();
        let kind = prompt_for_adjustment(&b"3\n"[..], &mut shown).unwrap();
        let shown = String::from_utf8(shown).unwrap();

        assert_eq!(kind, AdjustmentKind::Invert);
        assert_eq!(
            shown,
            "Choose an operation:\n\
             1. Increase brightness\n\
             2. Increase saturation\n\
             3. Perform color inversion\n\
             4. Increase contrast\n\
             Enter your choice: "
        );
    }

    #[test]
    fn end_of_input_is_an_invalid_choice() {
        let result = prompt_for_adjustment(&b""[..], io::sink());
        assert!(matches!(result, Err(CliError::InvalidMenuChoice(ref s)) if s.is_empty()));
    }
}
