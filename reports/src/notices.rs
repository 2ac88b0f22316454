use shared_types::Notice;

/// Notices addressed to `member_id`, in the order the backend sent them
pub fn resolve_for_member(notices: &[Notice], member_id: i64) -> Vec<Notice> {
    notices
        .iter()
        .filter(|notice| belongs_to(notice, member_id))
        .cloned()
        .collect()
}

pub fn resolve_first_for_member(notices: &[Notice], member_id: i64) -> Option<Notice> {
    notices
        .iter()
        .find(|notice| belongs_to(notice, member_id))
        .cloned()
}

/// Drives the home badge. There is no read/unread state.
pub fn has_notice_for_member(notices: &[Notice], member_id: i64) -> bool {
    notices.iter().any(|notice| belongs_to(notice, member_id))
}

fn belongs_to(notice: &Notice, member_id: i64) -> bool {
    notice.member_id == Some(member_id)
}
