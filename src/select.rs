use crate::format::{FormatContext, relative_age, truncate_with_ellipsis};
use crate::prompt::{Prompter, get_number};
use crate::scan::rel_display;
use chrono::{DateTime, Local};
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A note offered in the menu. `modified` is `None` only for the synthetic
/// entry offering to create a note that does not exist yet.
#[derive(Debug)]
pub struct NoteCandidate {
    pub path: PathBuf,
    pub rel: String,
    pub modified: Option<DateTime<Local>>,
}

/// Menu-ready candidates, oldest first. The final entry is always the one
/// labelled `0`: the exact-match note, the creatable note, or (without
/// search words) simply the newest note.
pub struct SelectionList {
    pub entries: Vec<NoteCandidate>,
    pub is_exact_match: bool,
    pub has_search: bool,
}

/// Sort matches by modification time and, when search words were given,
/// move or append the exact-match path to the bottom of the list.
pub fn build_selection(
    dir: &Path,
    paths: Vec<PathBuf>,
    words: &[String],
    extension: &str,
) -> io::Result<SelectionList> {
    let mut entries = Vec::with_capacity(paths.len() + 1);
    for path in paths {
        let modified = fs::metadata(&path)?.modified()?;
        entries.push(NoteCandidate {
            rel: rel_display(dir, &path),
            modified: Some(DateTime::<Local>::from(modified)),
            path,
        });
    }
    entries.sort_by_key(|entry| entry.modified);

    let mut is_exact_match = false;
    if !words.is_empty() {
        let target = dir.join(format!("{}{extension}", words.join(" ")));
        let tail = match entries.iter().position(|entry| entry.path == target) {
            Some(i) => {
                is_exact_match = true;
                entries.remove(i)
            }
            None => NoteCandidate {
                rel: rel_display(dir, &target),
                modified: None,
                path: target,
            },
        };
        entries.push(tail);
    }

    Ok(SelectionList {
        entries,
        is_exact_match,
        has_search: !words.is_empty(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn entry_line(
    ctx: &FormatContext,
    width: usize,
    label: i64,
    text: &str,
    modified: Option<DateTime<Local>>,
    now: DateTime<Local>,
) -> String {
    let label_width = label.to_string().chars().count() + 2;
    let age = modified.map(|then| relative_age(then, now));
    let age_width = age.as_ref().map(|a| a.chars().count() + 4).unwrap_or(0);
    let budget = width.saturating_sub(label_width + age_width).max(8);
    let shown = truncate_with_ellipsis(text, budget);
    match age {
        Some(a) => format!("{} {}  {}", ctx.format_label(label), shown, ctx.format_age(&a)),
        None => format!("{} {}", ctx.format_label(label), shown),
    }
}

/// Menu lines in display order. Labels count down to `0` at the bottom;
/// the bottom entry shows its bare file name, prefixed with "Create note"
/// when choosing it would make a new file.
pub fn render_lines(
    list: &SelectionList,
    ctx: &FormatContext,
    width: usize,
    now: DateTime<Local>,
) -> Vec<String> {
    let count = list.entries.len();
    let mut lines = Vec::with_capacity(count);
    for (i, entry) in list.entries.iter().enumerate() {
        let label = (count - 1 - i) as i64;
        let line = if i + 1 == count {
            let name = file_name(&entry.path);
            if list.is_exact_match || !list.has_search {
                entry_line(ctx, width, label, &name, entry.modified, now)
            } else {
                let text = format!("Create note: '{name}'");
                let shown = truncate_with_ellipsis(&text, width.saturating_sub(3).max(8));
                format!("{} {}", ctx.format_label(label), ctx.format_create(&shown))
            }
        } else {
            entry_line(ctx, width, label, &entry.rel, entry.modified, now)
        };
        lines.push(line);
    }
    lines
}

/// Print the menu and resolve the user's pick. A single-entry list is
/// chosen without prompting; `None` means the prompt was cancelled.
pub fn choose<'a>(
    list: &'a SelectionList,
    prompter: &mut dyn Prompter,
    ctx: &FormatContext,
    width: usize,
) -> Result<Option<&'a NoteCandidate>, Box<dyn Error>> {
    let count = list.entries.len();
    if count == 1 {
        return Ok(Some(&list.entries[0]));
    }

    for line in render_lines(list, ctx, width, Local::now()) {
        println!("{line}");
    }

    let Some(selected) = get_number(prompter, "Enter a number", 0)? else {
        return Ok(None);
    };
    if selected < 0 || selected as usize >= count {
        return Err("That number was out of range.".into());
    }
    Ok(Some(&list.entries[count - 1 - selected as usize]))
}
