//! The interactive shell's input handling: a quote-aware tokenizer and the
//! command dispatcher. Kept apart from `main.rs` so both can be exercised
//! against an in-memory backend.

use rolo::api::Assistant;
use rolo::error::Result;
use rolo::store::DataStore;

/// What the shell should do with a dispatched line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    /// `exit` / `close`: print the farewell and stop the loop.
    Farewell,
}

/// Split an input line into tokens, honoring double quotes so note titles
/// and content may contain spaces. A quoted empty string (`""`) is a real,
/// empty token. An unterminated quote runs to the end of the line.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in input.trim().chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    tokens
}

/// Route one tokenized command to the assistant. The command word is
/// case-insensitive; everything after it is passed through untouched.
pub fn respond<S: DataStore>(
    assistant: &mut Assistant<S>,
    command: &str,
    args: &[String],
) -> Result<Reply> {
    let reply = match command.to_lowercase().as_str() {
        "hello" => Ok("How can I help you?".to_string()),
        "add" => assistant.add_contact(args),
        "change" => assistant.change_contact(args),
        "find" => assistant.find_contact(args),
        "all" => assistant.show_all_contacts(),
        "delete" => assistant.delete_contact(args),
        "add-birthday" => assistant.add_birthday(args),
        "show-birthday" => assistant.show_birthday(args),
        "birthdays" => assistant.upcoming_birthdays(args),
        "add-note" => assistant.add_note(args),
        "remove-note" => assistant.remove_note(args),
        "edit-note" => assistant.edit_note(args),
        "find-notes" => assistant.find_notes(args),
        "find-notes-tags" => assistant.find_notes_by_tag(args),
        "all-notes" => assistant.show_all_notes(),
        "config" => assistant.configure(args),
        "help" => Ok(HELP.to_string()),
        "exit" | "close" => return Ok(Reply::Farewell),
        _ => Ok("Invalid command.".to_string()),
    }?;
    Ok(Reply::Message(reply))
}

pub const HELP: &str = "\
Available commands:
  hello                                   Greeting
  add [name] [phone]                      Add a contact or another number
  change [name] [new_phone]               Replace a contact's first number
  find [name or phone]                    Find contacts
  all                                     List all contacts
  delete [name]                           Delete a contact
  add-birthday [name] [DD.MM.YYYY]        Set a contact's birthday
  show-birthday [name]                    Show a contact's birthday
  birthdays [days]                        Upcoming birthdays (default window from config)
  add-note [title] [content] [tags...]    Add a note (quote multi-word values)
  remove-note [title]                     Remove notes with this title
  edit-note [title] [--content TEXT] [--tags TAG...]
                                          Edit the first note with this title
  find-notes [keyword]                    Search notes by keyword
  find-notes-tags [tag]                   Search notes by tag
  all-notes                               List all notes
  config [key] [value]                    Show or change settings
  help                                    This overview
  exit | close                            Leave the assistant";
