use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::calendar::adapters::inbound::graphql::gql_error;
use crate::modules::calendar::use_cases::delete_event::command::DeleteEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEventMutation;

#[Object]
impl DeleteEventMutation {
    async fn delete_event(
        &self,
        context: &Context<'_>,
        id: ID,
        user_id: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();

        state
            .calendar
            .delete_event(DeleteEvent { id: id.0, user_id })
            .await
            .map_err(gql_error)?;

        Ok(true)
    }
}
