#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEvent {
    pub id: String,
    pub user_id: String,
}
