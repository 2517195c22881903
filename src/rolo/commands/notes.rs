use crate::error::{Result, RoloError};
use crate::notes::{Note, Notebook};

const EDIT_USAGE: &str = "Invalid command. Format: edit-note [title] [--content TEXT] [--tags TAG...]";

fn listing(notes: &[&Note]) -> String {
    notes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-note [title] [content] [tags...]`.
pub fn add(args: &[String], notes: &mut Notebook) -> Result<String> {
    if args.len() < 2 {
        return Err(RoloError::usage(
            "Invalid command. Format: add-note [title] [content] [tags...]",
        ));
    }
    let title = &args[0];
    let content = &args[1];
    let tags = args[2..].to_vec();

    notes.add_note(title.as_str(), content.as_str(), tags);
    Ok("Note added.".to_string())
}

/// `remove-note [title]`: drops every note with that title.
pub fn remove(args: &[String], notes: &mut Notebook) -> Result<String> {
    if args.len() != 1 {
        return Err(RoloError::usage("Invalid command. Format: remove-note [title]"));
    }
    let title = &args[0];

    if notes.remove_note(title) == 0 {
        Ok(format!("Note '{}' not found.", title))
    } else {
        Ok("Note removed.".to_string())
    }
}

/// `edit-note [title] [--content TEXT] [--tags TAG...]`: an omitted flag
/// leaves that part unchanged; `--tags` with no values clears the tags.
pub fn edit(args: &[String], notes: &mut Notebook) -> Result<String> {
    let Some((title, rest)) = args.split_first() else {
        return Err(RoloError::usage(EDIT_USAGE));
    };

    let mut new_content: Option<&str> = None;
    let mut new_tags: Option<Vec<String>> = None;
    let mut i = 0;
    while i < rest.len() {
        match rest[i].as_str() {
            "--content" => {
                let Some(text) = rest.get(i + 1) else {
                    return Err(RoloError::usage(EDIT_USAGE));
                };
                new_content = Some(text);
                i += 2;
            }
            "--tags" => {
                let mut tags = Vec::new();
                let mut j = i + 1;
                while j < rest.len() && !rest[j].starts_with("--") {
                    tags.push(rest[j].clone());
                    j += 1;
                }
                new_tags = Some(tags);
                i = j;
            }
            _ => return Err(RoloError::usage(EDIT_USAGE)),
        }
    }
    if new_content.is_none() && new_tags.is_none() {
        return Err(RoloError::usage(EDIT_USAGE));
    }

    if notes.edit_note(title, new_content, new_tags) {
        Ok("Note updated.".to_string())
    } else {
        Ok(format!("Note '{}' not found.", title))
    }
}

/// `find-notes [keyword...]`: the arguments joined with spaces form one
/// keyword.
pub fn find(args: &[String], notes: &Notebook) -> Result<String> {
    if args.is_empty() {
        return Err(RoloError::usage("Usage: find-notes <keyword>"));
    }
    let keyword = args.join(" ");

    let found = notes.find_notes(&keyword);
    if found.is_empty() {
        Ok("No notes found with the given keyword.".to_string())
    } else {
        Ok(listing(&found))
    }
}

/// `find-notes-tags [tag]`.
pub fn find_by_tag(args: &[String], notes: &Notebook) -> Result<String> {
    if args.is_empty() {
        return Err(RoloError::usage("Usage: find-notes-tags <tag>"));
    }
    let tag = &args[0];

    let found = notes.find_notes_by_tag(tag);
    if found.is_empty() {
        Ok("No notes found with the given tag.".to_string())
    } else {
        Ok(listing(&found))
    }
}

/// `all-notes`.
pub fn show_all(notes: &Notebook) -> Result<String> {
    if notes.is_empty() {
        return Ok("No notes found.".to_string());
    }
    Ok(notes
        .notes()
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
