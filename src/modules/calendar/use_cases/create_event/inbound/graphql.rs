use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::calendar::adapters::inbound::dates::parse_command_date;
use crate::modules::calendar::adapters::inbound::graphql::{gql_date_error, gql_error};
use crate::modules::calendar::use_cases::create_event::command::CreateEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CreateEventMutation;

#[Object]
impl CreateEventMutation {
    async fn create_event(
        &self,
        context: &Context<'_>,
        user_id: String,
        event: String,
        date: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let date = parse_command_date(&date).map_err(gql_date_error)?;

        let id = state
            .calendar
            .create_event(CreateEvent {
                user_id,
                event,
                date,
            })
            .await
            .map_err(gql_error)?;

        Ok(ID(id))
    }
}
