use super::render::{OutputLine, Tone};
use super::shell::Shell;
use std::io::{self, BufRead, Write};

/// Run commands line by line, printing each reply as plain text.
///
/// Stops at end of input or after an `exit` command.
pub fn run_script<R: BufRead, W: Write>(shell: &mut Shell, input: R, mut out: W) -> io::Result<()> {
    for line in Shell::welcome() {
        write_line(&mut out, &line)?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        writeln!(out, "> {}", line.trim())?;
        let reply = shell.execute_line(&line);
        for output in &reply.lines {
            write_line(&mut out, output)?;
        }

        if reply.exit {
            break;
        }
    }

    out.flush()
}

fn write_line<W: Write>(out: &mut W, line: &OutputLine) -> io::Result<()> {
    match line.tone {
        Tone::Error => writeln!(out, "error: {}", line.text),
        _ => writeln!(out, "{}", line.text),
    }
}
