use std::ffi::OsStr;
use std::ffi::OsString;

use lexarg::Arg;

use crate::Error;

pub(crate) const OPTIONS_HELP: &str = r#"
Options:
  -i, --interactive      run in interactive mode
  -c, --collect          list all test cases
  -u, --unittest NAME    run a single test case, by name or by index
  -h, --help             show the help text
"#;

/// What a command line asks the harness to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// No arguments: run everything
    Suite,
    Interactive,
    Help { bin: String },
    Collect,
    Unittest { key: String },
    /// The raw argument that matched no flag
    Unrecognized { arg: String },
}

/// Interpret `args` (binary name first)
///
/// Modes are exclusive: the first argument decides and the rest are left to
/// the interactive hook, if it is the one that ends up running.
pub(crate) fn parse(args: &[OsString]) -> Result<Mode, Error> {
    let mut parser = lexarg::Parser::new(&args);
    let bin = parser
        .next_raw()
        .ok()
        .flatten()
        .unwrap_or(OsStr::new("test"))
        .to_string_lossy()
        .into_owned();

    let Some(arg) = parser.next_arg() else {
        return Ok(Mode::Suite);
    };
    // Short flags only count as the whole argument; `-ci` is not `-c -i`
    let raw = args
        .get(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();
    let exact = |flag: &str| raw.strip_prefix('-') == Some(flag);
    let mode = match arg {
        Arg::Short("i") if exact("i") => Mode::Interactive,
        Arg::Long("interactive") => Mode::Interactive,
        Arg::Short("h") if exact("h") => Mode::Help { bin },
        Arg::Long("help") => Mode::Help { bin },
        Arg::Short("c") if exact("c") => Mode::Collect,
        Arg::Long("collect") => Mode::Collect,
        Arg::Short("u") if exact("u") => unittest(&mut parser)?,
        Arg::Long("unittest") => unittest(&mut parser)?,
        _ => Mode::Unrecognized { arg: raw },
    };
    tracing::debug!(?mode, "dispatching");
    Ok(mode)
}

fn unittest(parser: &mut lexarg::Parser<'_>) -> Result<Mode, Error> {
    let key = parser
        .next_flag_value()
        .ok_or(Error::MissingValue("unittest"))?;
    Ok(Mode::Unittest {
        key: key.to_string_lossy().into_owned(),
    })
}

pub(crate) fn write_help(writer: &mut dyn std::io::Write, bin: &str) -> std::io::Result<()> {
    let options_help = OPTIONS_HELP.trim();
    writeln!(
        writer,
        "usage: {bin} [-i] [-c] [-u NAME] [-h]

{options_help}

Without arguments every test case runs in registration order."
    )
}
