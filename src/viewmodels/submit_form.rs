use crate::error::{ApiError, SubmitError};
use crate::models::{Proposal, ProposalDraft};
use crate::services::ProposalApi;

/// How long the success banner stays up
pub const SUCCESS_BANNER_MS: u32 = 4_000;

pub const SUCCESS_MESSAGE: &str = "Proposal submitted successfully!";

/// Validates the draft, then creates it. Nothing is sent when a field is blank.
pub async fn submit_proposal<G: ProposalApi>(
    gateway: &G,
    draft: &ProposalDraft,
    username: Option<&str>,
) -> Result<Proposal, SubmitError> {
    draft.validate()?;
    let created = gateway.create(draft, username).await.map_err(|e| {
        log::error!("❌ [SUBMIT] Create failed: {}", e);
        e
    })?;
    log::info!("📨 [SUBMIT] Proposal {} submitted", created.id);
    Ok(created)
}

/// Outcome line shown under the "Test Connection" button
pub fn probe_message(result: &Result<usize, ApiError>) -> String {
    match result {
        Ok(count) => format!("✅ Connected! Found {} proposals", count),
        Err(e) => format!("❌ Connection failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::ProposalField;
    use crate::services::mock::MockGateway;
    use futures::executor::block_on;

    fn draft() -> ProposalDraft {
        ProposalDraft {
            student_name: "Ada".into(),
            student_id: "S-001".into(),
            project_title: "Robot Arm".into(),
            description: "Six axis arm".into(),
        }
    }

    #[test]
    fn empty_description_fails_validation_without_a_request() {
        let gateway = MockGateway::default();
        let mut incomplete = draft();
        incomplete.description.clear();

        let err = block_on(submit_proposal(&gateway, &incomplete, Some("ada"))).unwrap_err();

        assert_eq!(
            err,
            SubmitError::Validation(ValidationError::MissingField(ProposalField::Description))
        );
        assert_eq!(err.user_message(8081), "All fields are required");
        assert_eq!(gateway.calls(), 0);
    }

    #[test]
    fn backend_down_names_the_port_and_adds_nothing() {
        let gateway = MockGateway::default();
        gateway.fail_next(ApiError::Network("Failed to fetch".into()));

        let err = block_on(submit_proposal(&gateway, &draft(), None)).unwrap_err();

        assert!(err.user_message(8081).contains("8081"));
        assert!(gateway.active().is_empty());
        assert!(block_on(gateway.list_all(None)).unwrap().is_empty());
    }

    #[test]
    fn created_proposal_starts_pending_under_the_user() {
        let gateway = MockGateway::default();

        let created = block_on(submit_proposal(&gateway, &draft(), Some("ada"))).unwrap();

        assert_eq!(created.status, crate::models::ProposalStatus::Pending);
        assert_eq!(gateway.last_username().as_deref(), Some("ada"));
        assert_eq!(gateway.active().len(), 1);
    }

    #[test]
    fn probe_reports_count_or_transport_error() {
        assert_eq!(probe_message(&Ok(3)), "✅ Connected! Found 3 proposals");
        assert_eq!(
            probe_message(&Err(ApiError::Network("timeout of 5000ms exceeded".into()))),
            "❌ Connection failed: Network Error: timeout of 5000ms exceeded"
        );
    }
}
