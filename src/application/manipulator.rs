//! Readme manipulation facade
//!
//! Composes the domain into the named operations callers use: update the
//! active tag, insert a new tag section, manage the suppression list and
//! answer which tags a set of changed files touches. Operations are
//! synchronous and rebuild their view of the document on every call, so a
//! query after a mutation always observes fresh data.

use crate::domain::builder::FragmentBuilder;
use crate::domain::headings::code_block_index;
use crate::domain::markdown::MarkdownDocument;
use crate::domain::suppression::SuppressionItem;
use crate::domain::tags::{input_files, tag_settings};
use crate::domain::yaml::{read_yaml, write_yaml};
use crate::error::{Result, TagmarkError};
use serde_yaml::{Mapping, Value};

/// Injected logging capability; the facade only ever reports failures.
pub trait Logger {
    fn error(&self, message: &str);
}

const LATEST_HEADING: &str = "Basic Information";
const SUPPRESSION_HEADING: &str = "Suppression";
const TAG_SECTION_MARK: &str = "### Tag";

/// Provides operations that can be applied to readme documents.
///
/// Both capabilities are required; there is no default logger and no
/// default builder.
pub struct ReadMeManipulator<'a> {
    logger: &'a dyn Logger,
    builder: &'a dyn FragmentBuilder,
}

impl<'a> ReadMeManipulator<'a> {
    pub fn new(logger: &'a dyn Logger, builder: &'a dyn FragmentBuilder) -> Self {
        ReadMeManipulator { logger, builder }
    }

    /// Update the tag in the `Basic Information` block and serialize the
    /// whole document. Every byte outside that one code block is
    /// unchanged.
    pub fn update_latest_tag(&self, doc: &mut MarkdownDocument, new_tag: &str) -> Result<String> {
        let index = code_block_index(doc);
        let Some(&block) = index.get(LATEST_HEADING) else {
            self.logger
                .error(&format!("couldn't find a code block under '{LATEST_HEADING}'"));
            return Err(TagmarkError::SectionNotFound(LATEST_HEADING.to_string()));
        };
        let mut value = match read_yaml(doc, block) {
            Ok(value) => value,
            Err(err) => {
                self.logger
                    .error(&format!("couldn't parse the '{LATEST_HEADING}' code block: {err}"));
                return Err(TagmarkError::MalformedSection {
                    section: LATEST_HEADING.to_string(),
                    reason: err.to_string(),
                });
            }
        };
        let Some(slot) = value.get_mut("tag") else {
            self.logger
                .error(&format!("couldn't parse the '{LATEST_HEADING}' code block"));
            return Err(TagmarkError::MalformedSection {
                section: LATEST_HEADING.to_string(),
                reason: "expected a mapping with a `tag` field".to_string(),
            });
        };
        *slot = Value::String(new_tag.to_string());
        write_yaml(doc, block, &value)?;
        Ok(doc.render())
    }

    /// Splice a freshly rendered tag section into the raw text, ahead of
    /// the existing tag sections.
    ///
    /// This is a text splice rather than a tree edit: the builder emits
    /// text, and the new section must land before the first `### Tag`
    /// heading. When no tag section exists yet the fragment goes to the
    /// front of the document.
    pub fn insert_tag_definition(
        &self,
        readme_text: &str,
        tag_files: &[String],
        new_tag: &str,
    ) -> String {
        let mut body = Mapping::new();
        body.insert(
            Value::String("input-file".to_string()),
            Value::Sequence(tag_files.iter().cloned().map(Value::String).collect()),
        );
        let fragment = self
            .builder
            .version_definition(&Value::Mapping(body), new_tag);

        match readme_text.find(TAG_SECTION_MARK) {
            Some(at) => format!(
                "{}{}{}",
                &readme_text[..at],
                fragment,
                &readme_text[at..]
            ),
            None => format!("{fragment}{readme_text}"),
        }
    }

    /// Append an empty suppression section after a blank line.
    ///
    /// No pre-existing-section check happens here; callers consult
    /// [`has_suppression_block`](Self::has_suppression_block) first,
    /// otherwise a second call yields a second section.
    pub fn add_suppression_block(&self, readme_text: &str) -> String {
        format!("{}\n\n{}", readme_text, self.builder.suppression_section())
    }

    /// Tags whose input files intersect the changed paths, in first-seen
    /// order. A tag is affected when at least one of its input files is a
    /// substring of at least one changed path.
    pub fn get_tags_for_files_changed(
        &self,
        doc: &MarkdownDocument,
        changed_paths: &[String],
    ) -> Vec<String> {
        tag_settings(doc)
            .iter()
            .filter(|(_, settings)| {
                input_files(settings)
                    .iter()
                    .any(|file| changed_paths.iter().any(|path| path.contains(file.as_str())))
            })
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    /// All tag names, in first-seen order.
    pub fn get_all_tags(&self, doc: &MarkdownDocument) -> Vec<String> {
        tag_settings(doc).into_keys().collect()
    }

    /// Whether the document carries a `Suppression` section with a code
    /// block.
    pub fn has_suppression_block(&self, doc: &MarkdownDocument) -> bool {
        code_block_index(doc).contains_key(SUPPRESSION_HEADING)
    }

    /// Append `item` to the suppression directive list, preserving prior
    /// entries and any sibling keys of the block's mapping.
    ///
    /// A document without a suppression section is left untouched; not
    /// every readme carries suppressions. A present-but-malformed block is
    /// an error.
    pub fn add_suppression(
        &self,
        doc: &mut MarkdownDocument,
        item: &SuppressionItem,
    ) -> Result<()> {
        let index = code_block_index(doc);
        let Some(&block) = index.get(SUPPRESSION_HEADING) else {
            return Ok(());
        };
        let mut value = read_yaml(doc, block)?;
        match value.get_mut("directive").and_then(Value::as_sequence_mut) {
            Some(directive) => directive.push(serde_yaml::to_value(item)?),
            None => {
                self.logger.error(&format!(
                    "'{SUPPRESSION_HEADING}' code block has no directive list"
                ));
                return Err(TagmarkError::MalformedSection {
                    section: SUPPRESSION_HEADING.to_string(),
                    reason: "expected a mapping with a `directive` sequence".to_string(),
                });
            }
        }
        write_yaml(doc, block, &value)
    }
}
