use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier assigned to a project when it is created.
///
/// Records are always addressed by ID, never by list position: the display
/// order changes under sorting and filtering while IDs do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProjectId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(ProjectId)
    }
}

/// The fixed technology vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technology {
    NodeJs,
    NextJs,
    ReactJs,
    Typescript,
}

impl Technology {
    pub const ALL: [Technology; 4] = [
        Technology::NodeJs,
        Technology::NextJs,
        Technology::ReactJs,
        Technology::Typescript,
    ];

    /// The identifier used in storage and on the CLI (e.g. `node-js`)
    pub fn slug(self) -> &'static str {
        match self {
            Technology::NodeJs => "node-js",
            Technology::NextJs => "next-js",
            Technology::ReactJs => "react-js",
            Technology::Typescript => "typescript",
        }
    }

    /// Parse a slug into a technology
    pub fn from_slug(s: &str) -> Option<Technology> {
        Technology::ALL.into_iter().find(|t| t.slug() == s)
    }

    /// Display form: first `-` becomes `.`, uppercased (`node-js` → `NODE.JS`)
    pub fn label(self) -> String {
        self.slug().replacen('-', ".", 1).to_uppercase()
    }
}

/// What kind of preview an attachment gets, derived from its data URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Pdf,
    Document,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Pdf => "pdf",
            MediaKind::Document => "document",
        }
    }
}

/// An uploaded file embedded as a self-describing data URI, plus the
/// original file name for downloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub data_uri: String,
}

impl Attachment {
    /// Media kind is detected from the URI prefix, not the file name.
    pub fn media_kind(&self) -> MediaKind {
        if self.data_uri.starts_with("data:image") {
            MediaKind::Image
        } else if self.data_uri.starts_with("data:application/pdf") {
            MediaKind::Pdf
        } else {
            MediaKind::Document
        }
    }
}

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub attachment: Option<Attachment>,
}

/// Record-shaped input from the form or the CLI: a project without an
/// identity yet. The store decides whether it replaces a record or appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub technologies: Vec<Technology>,
    pub attachment: Option<Attachment>,
}

impl ProjectDraft {
    /// Attach an identity, producing a storable record
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            technologies: self.technologies,
            attachment: self.attachment,
        }
    }

    /// The draft that re-submitting an unchanged edit form would produce
    pub fn from_project(project: &Project) -> ProjectDraft {
        ProjectDraft {
            name: project.name.clone(),
            start_date: project.start_date,
            end_date: project.end_date,
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            attachment: project.attachment.clone(),
        }
    }
}
