use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::calendar::adapters::inbound::dates::parse_command_date;
use crate::modules::calendar::adapters::inbound::graphql::{gql_date_error, gql_error};
use crate::modules::calendar::use_cases::update_event::command::UpdateEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateEventMutation;

#[Object]
impl UpdateEventMutation {
    async fn update_event(
        &self,
        context: &Context<'_>,
        id: ID,
        user_id: String,
        event: String,
        date: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let date = parse_command_date(&date).map_err(gql_date_error)?;

        state
            .calendar
            .update_event(UpdateEvent {
                id: id.0,
                user_id,
                event,
                date,
            })
            .await
            .map_err(gql_error)?;

        Ok(true)
    }
}
