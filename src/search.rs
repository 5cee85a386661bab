use crate::scan::rel_display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A word with no uppercase letters and at least one lowercase letter
/// matches case-insensitively; anything else ("Tofu", "TODO", "42") must
/// match exactly.
pub fn is_case_insensitive(word: &str) -> bool {
    !word.chars().any(char::is_uppercase) && word.chars().any(char::is_lowercase)
}

fn word_matches(word: &str, text: &str) -> bool {
    if is_case_insensitive(word) {
        text.to_lowercase().contains(word)
    } else {
        text.contains(word)
    }
}

/// Every word must hit either the relative path or the contents.
pub fn note_matches(words: &[String], rel_path: &str, contents: &str) -> bool {
    words
        .iter()
        .all(|word| word_matches(word, rel_path) || word_matches(word, contents))
}

/// Keep the notes matching every search word. Contents are read fully into
/// memory; a note that cannot be read fails the whole run.
pub fn filter_notes(
    dir: &Path,
    paths: Vec<PathBuf>,
    words: &[String],
) -> io::Result<Vec<PathBuf>> {
    let mut matching = Vec::new();
    for path in paths {
        let contents = fs::read_to_string(&path).map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("could not read {}: {err}", path.display()),
            )
        })?;
        if note_matches(words, &rel_display(dir, &path), &contents) {
            matching.push(path);
        }
    }
    Ok(matching)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn case_rule_per_word() {
        assert!(is_case_insensitive("tofu"));
        assert!(!is_case_insensitive("Tofu"));
        assert!(!is_case_insensitive("TODO"));
        // No cased characters at all means exact matching.
        assert!(!is_case_insensitive("42"));
    }

    #[test]
    fn lowercase_word_ignores_target_case() {
        assert!(note_matches(&words(&["tofu"]), "Tofu Recipe.txt", "ginger"));
        assert!(note_matches(&words(&["tofu"]), "shopping.txt", "Buy TOFU today"));
    }

    #[test]
    fn uppercase_word_is_exact() {
        assert!(note_matches(&words(&["Tofu"]), "Tofu Recipe.txt", ""));
        assert!(!note_matches(&words(&["Tofu"]), "tofu recipe.txt", "plain tofu"));
        assert!(note_matches(&words(&["Tofu"]), "tofu recipe.txt", "Tofu verbatim"));
    }

    #[test]
    fn all_words_must_match_somewhere() {
        let w = words(&["tofu", "ginger"]);
        // One word in the path, the other in the contents.
        assert!(note_matches(&w, "tofu recipe.txt", "add ginger"));
        assert!(!note_matches(&w, "tofu recipe.txt", "add garlic"));
    }

    #[test]
    fn empty_word_list_keeps_everything() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), "alpha").unwrap();
        fs::write(tmp.path().join("b.txt"), "beta").unwrap();
        let paths = vec![tmp.path().join("a.txt"), tmp.path().join("b.txt")];

        let kept = filter_notes(tmp.path(), paths, &[]).unwrap();
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn filters_against_relative_path_and_contents() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("recipes")).unwrap();
        fs::write(tmp.path().join("recipes/soup.txt"), "miso and tofu").unwrap();
        fs::write(tmp.path().join("todo.txt"), "dentist").unwrap();
        let paths = vec![
            tmp.path().join("recipes/soup.txt"),
            tmp.path().join("todo.txt"),
        ];

        // Matches the subdirectory part of the relative path.
        let kept = filter_notes(tmp.path(), paths.clone(), &words(&["recipes"])).unwrap();
        assert_eq!(kept.len(), 1);
        assert!(kept[0].ends_with("recipes/soup.txt"));

        let kept = filter_notes(tmp.path(), paths, &words(&["tofu"])).unwrap();
        assert_eq!(kept.len(), 1);
        assert!(kept[0].ends_with("recipes/soup.txt"));
    }

    #[test]
    fn unreadable_note_is_fatal() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("gone.txt");
        let err = filter_notes(tmp.path(), vec![path], &words(&["x"])).unwrap_err();
        assert!(err.to_string().contains("gone.txt"));
    }
}
