//! Interactive menu loop
//!
//! The program's only control flow: print the command list, then repeatedly
//! prompt for a menu choice and dispatch it against the directory. Action
//! failures (empty name, unknown contact) are rendered as messages and never
//! terminate the loop; only I/O failures propagate.
//!
//! The loop is generic over its input and output streams so tests can script
//! a whole session without a child process.

use std::io::{BufRead, Write};

use crate::directory::ContactDirectory;
use crate::error::PhonebookResult;
use crate::storage::ContactStore;

const CHOICE_ADD_PERSON: &str = "1";
const CHOICE_ADD_NUMBER: &str = "2";
const CHOICE_FIND: &str = "3";
const CHOICE_LIST: &str = "4";
const CHOICE_QUIT: &str = "5";

/// Run the menu loop until the user quits or input ends
///
/// The directory is saved through the store after every successful mutation
/// and once more when the loop terminates.
pub fn run_menu<R: BufRead, W: Write>(
    directory: &mut ContactDirectory,
    store: &dyn ContactStore,
    mut input: R,
    mut output: W,
) -> PhonebookResult<()> {
    print_commands(&mut output)?;

    loop {
        writeln!(output)?;
        let choice = match prompt(&mut input, &mut output, ">>> ")? {
            Some(choice) => choice,
            // End of input quits like the menu choice would
            None => break,
        };

        match choice.as_str() {
            CHOICE_ADD_PERSON => {
                let name = match prompt(&mut input, &mut output, "Name: ")? {
                    Some(name) => name,
                    None => break,
                };

                if directory.find_person(&name).is_some() {
                    writeln!(output, "'{}' is already in the phone book.", name)?;
                    continue;
                }

                match directory.add_person(&name).map(|c| c.name.clone()) {
                    Ok(added) => {
                        store.save(directory)?;
                        writeln!(output, "Added '{}' to the phone book.", added)?;
                    }
                    Err(e) if e.is_validation() => {
                        writeln!(output, "Name cannot be empty.")?;
                    }
                    Err(e) => return Err(e),
                }
            }

            CHOICE_ADD_NUMBER => {
                let name = match prompt(&mut input, &mut output, "Name: ")? {
                    Some(name) => name,
                    None => break,
                };
                let number = match prompt(&mut input, &mut output, "Number: ")? {
                    Some(number) => number,
                    None => break,
                };

                match directory.add_phone_number(&name, &number) {
                    Ok(()) => {
                        store.save(directory)?;
                        writeln!(output, "Added number {} for {}.", number, name)?;
                    }
                    Err(e) if e.is_not_found() => {
                        writeln!(output, "No person found with the name {}.", name)?;
                    }
                    Err(e) => return Err(e),
                }
            }

            CHOICE_FIND => {
                let name = match prompt(&mut input, &mut output, "Name: ")? {
                    Some(name) => name,
                    None => break,
                };

                match directory.find_person(&name) {
                    Some(contact) => writeln!(output, "{}", contact)?,
                    None => writeln!(output, "No person found with the name {}.", name)?,
                }
            }

            CHOICE_LIST => {
                if directory.is_empty() {
                    writeln!(output, "The phone book is empty.")?;
                } else {
                    for contact in directory.contacts() {
                        writeln!(output, "{}", contact)?;
                    }
                }
            }

            CHOICE_QUIT => break,

            _ => writeln!(output, "Invalid choice, try again.")?,
        }
    }

    store.save(directory)?;
    writeln!(output, "Phone book saved.")?;

    Ok(())
}

/// Print the command list
fn print_commands<W: Write>(output: &mut W) -> PhonebookResult<()> {
    writeln!(output, "Phone book commands:")?;
    writeln!(output, "  {} - Add person", CHOICE_ADD_PERSON)?;
    writeln!(output, "  {} - Add phone number", CHOICE_ADD_NUMBER)?;
    writeln!(output, "  {} - Find person", CHOICE_FIND)?;
    writeln!(output, "  {} - List all", CHOICE_LIST)?;
    writeln!(output, "  {} - Quit", CHOICE_QUIT)?;
    Ok(())
}

/// Prompt for one line of input, trimmed; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> PhonebookResult<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
