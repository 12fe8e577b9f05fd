use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

pub type ProposalId = i64;

/// Review status of a proposal. Anything the backend sends that we do not
/// recognise (including `null`) is read as `Pending`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// CSS modifier used by the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "status-pending",
            Self::Approved => "status-approved",
            Self::Rejected => "status-rejected",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn status_or_pending<'de, D>(deserializer: D) -> Result<ProposalStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ProposalStatus::parse).unwrap_or_default())
}

/// Proposal record as returned by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: ProposalId,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub project_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "status_or_pending")]
    pub status: ProposalStatus,
    #[serde(default)]
    pub review_comments: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl Proposal {
    /// Case-insensitive substring match over name, title and description.
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [&self.student_name, &self.project_title, &self.description]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn display_student_name(&self) -> &str {
        self.student_name.as_deref().filter(|s| !s.is_empty()).unwrap_or("N/A")
    }

    pub fn display_comments(&self) -> &str {
        self.review_comments.as_deref().filter(|s| !s.is_empty()).unwrap_or("No comments")
    }
}

/// The four fields a student fills in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProposalField {
    StudentName,
    StudentId,
    ProjectTitle,
    Description,
}

impl ProposalField {
    pub const ALL: [ProposalField; 4] = [
        Self::StudentName,
        Self::StudentId,
        Self::ProjectTitle,
        Self::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::StudentName => "Student Name",
            Self::StudentId => "Student ID",
            Self::ProjectTitle => "Project Title",
            Self::Description => "Project Description",
        }
    }
}

impl fmt::Display for ProposalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of create/update requests; also the inline edit buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDraft {
    pub student_name: String,
    pub student_id: String,
    pub project_title: String,
    pub description: String,
}

impl ProposalDraft {
    /// Seeds a draft from an existing row; missing fields become "".
    pub fn from_proposal(proposal: &Proposal) -> Self {
        Self {
            student_name: proposal.student_name.clone().unwrap_or_default(),
            student_id: proposal.student_id.clone().unwrap_or_default(),
            project_title: proposal.project_title.clone().unwrap_or_default(),
            description: proposal.description.clone().unwrap_or_default(),
        }
    }

    pub fn field(&self, field: ProposalField) -> &str {
        match field {
            ProposalField::StudentName => &self.student_name,
            ProposalField::StudentId => &self.student_id,
            ProposalField::ProjectTitle => &self.project_title,
            ProposalField::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: ProposalField, value: String) {
        match field {
            ProposalField::StudentName => self.student_name = value,
            ProposalField::StudentId => self.student_id = value,
            ProposalField::ProjectTitle => self.project_title = value,
            ProposalField::Description => self.description = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match ProposalField::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
        {
            Some(field) => Err(ValidationError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// Body of `PUT /proposals/{id}/review`; also the review modal buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewForm {
    pub status: ProposalStatus,
    pub review_comments: String,
}

impl ReviewForm {
    pub fn from_proposal(proposal: &Proposal) -> Self {
        Self {
            status: proposal.status,
            review_comments: proposal.review_comments.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending_when_missing_null_or_unknown() {
        let missing: Proposal = serde_json::from_str(r#"{"id":1}"#).unwrap();
        let null: Proposal = serde_json::from_str(r#"{"id":2,"status":null}"#).unwrap();
        let odd: Proposal = serde_json::from_str(r#"{"id":3,"status":"On Hold"}"#).unwrap();
        let approved: Proposal = serde_json::from_str(r#"{"id":4,"status":"Approved"}"#).unwrap();

        assert_eq!(missing.status, ProposalStatus::Pending);
        assert_eq!(null.status, ProposalStatus::Pending);
        assert_eq!(odd.status, ProposalStatus::Pending);
        assert_eq!(approved.status, ProposalStatus::Approved);
    }

    #[test]
    fn proposal_reads_camel_case_fields() {
        let json = r#"{
            "id": 7,
            "studentName": "Ada",
            "studentId": "S-001",
            "projectTitle": "Robot Arm",
            "description": "Six axis arm",
            "status": "Rejected",
            "reviewComments": "Too ambitious"
        }"#;
        let proposal: Proposal = serde_json::from_str(json).unwrap();

        assert_eq!(proposal.student_name.as_deref(), Some("Ada"));
        assert_eq!(proposal.project_title.as_deref(), Some("Robot Arm"));
        assert_eq!(proposal.review_comments.as_deref(), Some("Too ambitious"));
        assert!(!proposal.deleted);
    }

    #[test]
    fn draft_serializes_as_camel_case() {
        let draft = ProposalDraft {
            student_name: "Ada".into(),
            student_id: "S-001".into(),
            project_title: "Robot Arm".into(),
            description: "Six axis arm".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(value["studentName"], "Ada");
        assert_eq!(value["studentId"], "S-001");
        assert_eq!(value["projectTitle"], "Robot Arm");
    }

    #[test]
    fn validate_rejects_whitespace_only_fields() {
        let mut draft = ProposalDraft {
            student_name: "Ada".into(),
            student_id: "S-001".into(),
            project_title: "Robot Arm".into(),
            description: "   ".into(),
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField(ProposalField::Description))
        );

        draft.description = "Six axis arm".into();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn draft_from_proposal_uses_empty_strings_for_nulls() {
        let proposal: Proposal =
            serde_json::from_str(r#"{"id":1,"projectTitle":"Database"}"#).unwrap();
        let draft = ProposalDraft::from_proposal(&proposal);

        assert_eq!(draft.project_title, "Database");
        assert_eq!(draft.student_name, "");
        assert_eq!(draft.description, "");
    }

    #[test]
    fn search_matches_any_text_field_ignoring_case() {
        let proposal: Proposal = serde_json::from_str(
            r#"{"id":1,"studentName":"Grace","projectTitle":"Compiler","description":"A COBOL front end"}"#,
        )
        .unwrap();

        assert!(proposal.matches_search("grace"));
        assert!(proposal.matches_search("compil"));
        assert!(proposal.matches_search("cobol"));
        assert!(!proposal.matches_search("robot"));
    }

    #[test]
    fn review_form_serializes_status_as_label() {
        let form = ReviewForm {
            status: ProposalStatus::Approved,
            review_comments: "Go ahead".into(),
        };
        let value = serde_json::to_value(&form).unwrap();

        assert_eq!(value["status"], "Approved");
        assert_eq!(value["reviewComments"], "Go ahead");
    }
}
