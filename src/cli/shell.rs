// src/cli/shell.rs
//! Menu-driven session: pick an operation, answer its prompts, see the result.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::ports::{CommandLog, Panel};
use crate::reporting;
use crate::session::{Operation, Session};

/// Runs the menu loop until `q` or end of input.
///
/// Prompts and the menu go to `out`; results go to `panel`.
///
/// # Errors
/// Returns error if reading `input` or writing `out` fails.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
    panel: &mut dyn Panel,
    show_canvas: bool,
) -> Result<()> {
    let mut canvas = CommandLog::new();
    write_menu(&mut out)?;

    loop {
        let Some(choice) = ask(&mut input, &mut out, "choice")? else {
            break;
        };
        match choice.as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "?" | "h" | "help" => write_menu(&mut out)?,
            "i" | "info" => {
                let Some(id) = ask(&mut input, &mut out, "Author id")? else {
                    break;
                };
                match session.describe(&id) {
                    Ok(view) => panel.show(&view),
                    Err(e) => panel.notify(&e.to_string()),
                }
            }
            other => {
                let op = match other.parse::<Operation>() {
                    Ok(op) => op,
                    Err(e) => {
                        panel.notify(&e.to_string());
                        continue;
                    }
                };
                let request = session.request_inputs(op);
                let mut answers = Vec::with_capacity(request.prompts.len());
                for prompt in &request.prompts {
                    match ask(&mut input, &mut out, prompt)? {
                        Some(answer) => answers.push(answer),
                        None => {
                            session.cancel();
                            return Ok(());
                        }
                    }
                }
                let inputs: Vec<&str> = answers.iter().map(String::as_str).collect();
                // Failures were already reported to the panel.
                let _ = session.resolve(&inputs, &mut canvas, panel);

                let commands = canvas.take();
                if show_canvas {
                    reporting::print_commands(&commands);
                }
            }
        }
    }
    Ok(())
}

fn write_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Operations:")?;
    for op in Operation::ALL {
        writeln!(out, "  {}. {}", op.number(), op.title())?;
    }
    writeln!(out, "  i. Author details")?;
    writeln!(out, "  q. Quit")?;
    Ok(())
}

/// Prompts and reads one trimmed line. `None` at end of input.
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}> ")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
