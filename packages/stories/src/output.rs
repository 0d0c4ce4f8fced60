//! YAML and one-line text rendering of parsed stories.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::types::Story;

/// Top-level YAML document.
#[derive(Debug, Serialize)]
struct YamlStories<'a> {
    count: usize,
    stories: &'a [Story],
}

/// Indent YAML sequences so items sit under their parent key.
///
/// The serializer places sequence items (`- `) at the same indent as their
/// parent key:
///
/// ```yaml
/// # Before:          # After:
/// stories:           stories:
/// - id: '1'            - id: '1'
///   title: foo           title: foo
/// ```
fn indent_yaml_sequences(yaml: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    // Indent levels at which the open sequences started
    let mut seq_indents: Vec<usize> = Vec::new();

    for line in yaml.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            result.push(line.to_string());
            continue;
        }

        let indent = line.len() - trimmed.len();
        let is_item = trimmed.starts_with("- ") || trimmed == "-";

        while let Some(&seq_indent) = seq_indents.last() {
            if indent < seq_indent || (indent == seq_indent && !is_item) {
                seq_indents.pop();
            } else {
                break;
            }
        }

        if is_item && seq_indents.last() != Some(&indent) {
            seq_indents.push(indent);
        }

        let extra = seq_indents.len() * 2;
        result.push(format!("{}{}", " ".repeat(indent + extra), trimmed));
    }

    result.join("\n")
}

/// Render stories as a YAML document.
///
/// The output starts with the `---` document marker, lists the stories in
/// parse order and carries no trailing whitespace.
pub fn generate_yaml(stories: &[Story]) -> Result<String> {
    let document = YamlStories {
        count: stories.len(),
        stories,
    };
    let yaml_string = serde_yaml_ng::to_string(&document)?;
    let yaml_string = indent_yaml_sequences(&yaml_string);

    let lines: Vec<&str> = yaml_string
        .lines()
        .map(str::trim_end)
        .filter(|l| *l != "---")
        .collect();
    Ok(format!("---\n{}\n", lines.join("\n")))
}

/// Save stories as a YAML file.
///
/// Writes to a temporary sibling first and renames it over `path`, so a
/// failed write never leaves a truncated file behind. Missing parent
/// directories are created.
///
/// # Arguments
/// * `stories` - Stories to save
/// * `path` - Destination file
pub fn save_yaml(stories: &[Story], path: &Path) -> Result<()> {
    let content = generate_yaml(stories)?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        fs::create_dir_all(dir)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stories.yaml".to_string());
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // Windows refuses to rename over an existing file
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::debug!(path = %path.display(), count = stories.len(), "Saved stories");

    Ok(())
}

/// One-line description of a story.
///
/// `[id] title (date)`, followed by the audio duration when the story has
/// a playable rendition.
///
/// # Examples
/// ```
/// use npr_stories::builder::StoryBuilder;
/// use npr_stories::output::summarize;
///
/// let mut builder = StoryBuilder::new("42");
/// builder.with_title("Headline").with_pub_date("Mon, 01 Mar 2010");
/// assert_eq!(summarize(&builder.build()), "[42] Headline (Mon, 01 Mar 2010)");
/// ```
#[must_use]
pub fn summarize(story: &Story) -> String {
    let title = story.title().filter(|t| !t.is_empty()).unwrap_or("(untitled)");
    let mut line = format!("[{}] {title}", story.id());

    if let Some(date) = story.story_date() {
        line.push_str(&format!(" ({date})"));
    }

    if story.playable().is_some() {
        match story.duration() {
            Some(duration) => line.push_str(&format!(" audio {duration}s")),
            None => line.push_str(" audio"),
        }
    }

    line
}
