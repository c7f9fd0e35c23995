use std::io::{BufRead, Write};

use timeline_core::{session::Session, TimelineError};

const MENU: &str = "1. Display Timeline\n\
2. Select Tweet\n\
3. Add New Tweet\n\
4. Edit Selected Tweet\n\
5. Like Selected Tweet\n\
6. Delete Tweet\n\
7. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Display,
    Select,
    Add,
    Edit,
    Like,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Map the number typed by the user to a menu entry.
    pub fn from_number(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Display),
            2 => Some(Self::Select),
            3 => Some(Self::Add),
            4 => Some(Self::Edit),
            5 => Some(Self::Like),
            6 => Some(Self::Delete),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the user picks "Exit" or the input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    json: bool,
) -> anyhow::Result<()> {
    loop {
        write!(output, "{MENU}\nSelect: ")?;
        output.flush()?;
        let Some(choice) = read_number(input, output, "Select: ")? else {
            break;
        };
        let choice = match MenuChoice::from_number(choice) {
            Some(choice) => choice,
            None => {
                log::debug!("Ignoring unknown menu choice {choice}");
                continue;
            }
        };

        let keep_going = match choice {
            MenuChoice::Display => display(session, output, json)?,
            MenuChoice::Select => select(session, input, output)?,
            MenuChoice::Add => add(session, input, output)?,
            MenuChoice::Edit => edit(session, input, output)?,
            MenuChoice::Like => like(session, output)?,
            MenuChoice::Delete => delete(session, output)?,
            MenuChoice::Exit => false,
        };
        if !keep_going {
            break;
        }
    }
    Ok(())
}

// ***
// Menu handlers. Each returns `false` once the input has run dry.
// ***

fn display<W: Write>(session: &Session, output: &mut W, json: bool) -> anyhow::Result<bool> {
    let timeline = session.render();
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&timeline)?)?;
    } else {
        write!(output, "\nTweets: \n\n{timeline}\n")?;
    }
    Ok(true)
}

fn select<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<bool> {
    if session.store().is_empty() {
        report(output, &TimelineError::EmptyStore)?;
        return Ok(true);
    }

    let prompt = "Enter an ID for the tweet to be selected:\n";
    write!(output, "{prompt}")?;
    output.flush()?;
    let Some(id) = read_number(input, output, &format!("Error: Invalid ID\n{prompt}"))? else {
        return Ok(false);
    };

    match session.select(id) {
        Ok(idx) => log::debug!("Selected post {id} at index {idx}"),
        Err(err) => {
            report(output, &err)?;
            writeln!(output)?;
        }
    }
    Ok(true)
}

fn add<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<bool> {
    if session.store().is_full() {
        let err = TimelineError::CapacityExceeded {
            capacity: session.store().capacity(),
        };
        log::warn!("{err}");
        writeln!(output, "\nERROR: {err}")?;
        return Ok(true);
    }

    writeln!(output, "Enter a new tweet: ")?;
    output.flush()?;
    let Some(text) = read_line(input)? else {
        return Ok(false);
    };
    if let Err(err) = session.add(text) {
        log::warn!("{err}");
        writeln!(output, "\nERROR: {err}")?;
    }
    Ok(true)
}

fn edit<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<bool> {
    if let Err(err) = session.selected_post() {
        report(output, &err)?;
        return Ok(true);
    }

    writeln!(output, "Enter a new tweet message:")?;
    output.flush()?;
    let Some(text) = read_line(input)? else {
        return Ok(false);
    };
    if let Err(err) = session.edit(text) {
        report(output, &err)?;
    }
    Ok(true)
}

fn like<W: Write>(session: &mut Session, output: &mut W) -> anyhow::Result<bool> {
    if let Err(err) = session.like() {
        report(output, &err)?;
    }
    Ok(true)
}

fn delete<W: Write>(session: &mut Session, output: &mut W) -> anyhow::Result<bool> {
    match session.delete() {
        Ok(post) => {
            log::debug!("Removed post {}", post.id());
            writeln!(output, "Selected tweet has been deleted.")?;
        }
        Err(err) => report(output, &err)?,
    }
    Ok(true)
}

// ***
// Helpers
// ***

fn report<W: Write>(output: &mut W, err: &TimelineError) -> anyhow::Result<()> {
    log::warn!("{err}");
    writeln!(output, "{err}")?;
    Ok(())
}

/// Read one line without its line ending. `None` once the input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(len);
    Ok(Some(buf))
}

/// Keep reading lines until one holds a number, writing `reprompt` after
/// each bad line.
fn read_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    reprompt: &str,
) -> anyhow::Result<Option<i64>> {
    while let Some(line) = read_line(input)? {
        match line.trim().parse::<i64>() {
            Ok(number) => return Ok(Some(number)),
            Err(_) => {
                write!(output, "{reprompt}")?;
                output.flush()?;
            }
        }
    }
    Ok(None)
}
