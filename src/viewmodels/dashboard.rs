use crate::models::{Proposal, ProposalStatus};

/// Counters shown on both dashboards
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProposalStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ProposalStats {
    pub fn from_proposals(proposals: &[Proposal]) -> Self {
        proposals.iter().fold(
            Self {
                total: proposals.len(),
                ..Self::default()
            },
            |mut stats, p| {
                match p.status {
                    ProposalStatus::Pending => stats.pending += 1,
                    ProposalStatus::Approved => stats.approved += 1,
                    ProposalStatus::Rejected => stats.rejected += 1,
                }
                stats
            },
        )
    }
}

/// First `limit` proposals in backend order
pub fn recent(proposals: &[Proposal], limit: usize) -> &[Proposal] {
    &proposals[..proposals.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::proposal;

    #[test]
    fn stats_count_each_status() {
        let mut rows: Vec<_> = (1..=6).map(|id| proposal(id, "P")).collect();
        rows[0].status = ProposalStatus::Approved;
        rows[1].status = ProposalStatus::Approved;
        rows[2].status = ProposalStatus::Rejected;

        let stats = ProposalStats::from_proposals(&rows);

        assert_eq!(
            stats,
            ProposalStats {
                total: 6,
                pending: 3,
                approved: 2,
                rejected: 1
            }
        );
    }

    #[test]
    fn recent_truncates_without_reordering() {
        let rows: Vec<_> = (1..=12).map(|id| proposal(id, "P")).collect();

        let ids: Vec<_> = recent(&rows, 10).iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert_eq!(recent(&rows[..3], 5).len(), 3);
        assert!(recent(&[], 5).is_empty());
    }
}
