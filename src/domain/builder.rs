//! Markdown fragment builder
//!
//! Renders the section templates spliced into readmes: a new tag
//! definition and an empty suppression section. Kept behind a trait so the
//! manipulator receives it as an injected capability.

use serde_yaml::Value;

use crate::domain::suppression::Suppression;

/// Renders new markdown+YAML section text from data.
pub trait FragmentBuilder {
    /// A `### Tag: {tag}` section whose fenced block carries `yaml_body`.
    fn version_definition(&self, yaml_body: &Value, tag: &str) -> String;

    /// A `## Suppression` section with an empty directive list.
    fn suppression_section(&self) -> String;
}

/// The stock templates.
#[derive(Debug, Default)]
pub struct ReadMeBuilder;

impl FragmentBuilder for ReadMeBuilder {
    fn version_definition(&self, yaml_body: &Value, tag: &str) -> String {
        format!(
            "\n### Tag: {tag}\n\n\
             These settings apply only when `--tag={tag}` is specified on the command line.\n\n\
             ```yaml $(tag) == '{tag}'\n{}```\n",
            to_yaml(yaml_body)
        )
    }

    fn suppression_section(&self) -> String {
        format!(
            "\n## Suppression\n\n```yaml\n{}```\n",
            to_yaml(&Suppression::default())
        )
    }
}

fn to_yaml<T: serde::Serialize>(value: &T) -> String {
    serde_yaml::to_string(value).unwrap_or_else(|_| String::new())
}
