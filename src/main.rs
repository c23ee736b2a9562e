use anyhow::Context;
use argh::FromArgs;
use std::io::Write;
use surtur_tests::Runner;
use surtur_tests::selector::SELECTOR_VAR;

#[derive(FromArgs)]
/// Run the built-in checks selected by the SURTUR_TESTS environment variable.
struct Args {
    #[argh(option, short = 's')]
    /// selection to use instead of $SURTUR_TESTS, e.g. "lexer,parser" or "*"
    select: Option<String>,

    #[argh(switch, short = 'l')]
    /// print every test name and whether it is selected, then exit
    list: bool,

    #[argh(switch, short = 'i')]
    /// read selections interactively and show what they select
    interactive: bool,

    #[argh(switch)]
    /// do not color the output
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Args = argh::from_env();

    let mut runner = Runner::default().with_color(!args.no_color);
    if let Some(select) = args.select {
        runner.env_mut().set_var(SELECTOR_VAR, select);
    }

    if args.interactive {
        runner.repl().context("interactive prompt failed")?;
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list {
        return runner.list(&mut out);
    }

    let summary = runner.run(&mut out)?;
    if summary.passed == 0 && summary.failure.is_none() {
        log::warn!(
            "no test selected; set {} to a list of names or '*'",
            SELECTOR_VAR
        );
    }
    out.flush()?;
    std::process::exit(summary.exit_code());
}
