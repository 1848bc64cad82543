use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single path segment. Non-ASCII bytes are
/// always percent-encoded.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Address of one plugin's configuration resource, parameterized by
/// organization, project, and plugin identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEndpoint {
    organization: String,
    project: String,
    plugin: String,
}

impl PluginEndpoint {
    pub fn new(
        organization: impl Into<String>,
        project: impl Into<String>,
        plugin: impl Into<String>,
    ) -> Self {
        Self {
            organization: organization.into(),
            project: project.into(),
            plugin: plugin.into(),
        }
    }

    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PluginEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/projects/{}/{}/plugins/{}/",
            utf8_percent_encode(&self.organization, SEGMENT),
            utf8_percent_encode(&self.project, SEGMENT),
            utf8_percent_encode(&self.plugin, SEGMENT),
        )
    }
}
