//! Line-driven form session.
//!
//! Each line is one input event:
//!
//! - `bill <text>` - replace the bill amount text
//! - `tip <text>` - replace the tip percentage text
//! - `round on|off|toggle` - set or flip the round-up switch
//! - `show` - print every field
//! - `quit` - end the session (EOF works too)

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use tiptime_core::{CurrencyFormatter, TipForm};
use tiptime_shared::AppResult;

const TITLE: &str = "Calculate Tip";
const USAGE: &str = "Commands: bill <amount>, tip <percent>, round on|off|toggle, show, quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundAction {
    On,
    Off,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Bill(&'a str),
    Tip(&'a str),
    Round(RoundAction),
    Show,
    Quit,
    Blank,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (keyword, rest) = line
        .split_once(|c: char| c.is_ascii_whitespace())
        .unwrap_or((line, ""));

    match keyword.trim_end() {
        "" => Command::Blank,
        "bill" => Command::Bill(rest),
        "tip" => Command::Tip(rest),
        "round" => match rest.trim() {
            "on" => Command::Round(RoundAction::On),
            "off" => Command::Round(RoundAction::Off),
            "" | "toggle" => Command::Round(RoundAction::Toggle),
            _ => Command::Unknown(line),
        },
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line),
    }
}

fn write_tip<W: Write>(output: &mut W, tip: &str) -> std::io::Result<()> {
    writeln!(output, "Tip Amount: {tip}")
}

/// Runs the session until `quit` or end of input.
pub fn run<R, W, F>(input: R, mut output: W, mut form: TipForm<F>) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    F: CurrencyFormatter,
{
    writeln!(output, "{TITLE}")?;
    write_tip(&mut output, &form.tip())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = parse_command(&line);
        debug!(?command, "input event");

        let tip = match command {
            Command::Bill(text) => form.set_bill_input(text),
            Command::Tip(text) => form.set_tip_percent_input(text),
            Command::Round(RoundAction::On) => form.set_round_up(true),
            Command::Round(RoundAction::Off) => form.set_round_up(false),
            Command::Round(RoundAction::Toggle) => form.toggle_round_up(),
            Command::Show => {
                let snapshot = form.snapshot();
                writeln!(output, "Bill Amount: {}", snapshot.bill_input)?;
                writeln!(output, "Tip Percentage: {}", snapshot.tip_percent_input)?;
                let switch = if snapshot.round_up { "on" } else { "off" };
                writeln!(output, "Round up tip? {switch}")?;
                snapshot.tip
            }
            Command::Quit => break,
            Command::Blank => continue,
            Command::Unknown(text) => {
                warn!(input = text, "unknown command");
                writeln!(output, "{USAGE}")?;
                continue;
            }
        };

        write_tip(&mut output, &tip)?;
        output.flush()?;
    }

    Ok(())
}
