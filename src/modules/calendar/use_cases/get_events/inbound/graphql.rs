use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::calendar::adapters::inbound::dates::parse_query_date;
use crate::modules::calendar::adapters::inbound::graphql::{
    GqlCalendarEvent, gql_date_error, gql_error,
};
use crate::modules::calendar::use_cases::get_events::queries::{
    GetEventsForDay, GetEventsForMonth, GetEventsForWeek,
};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct CalendarQuery;

#[Object]
impl CalendarQuery {
    async fn events_for_day(
        &self,
        context: &Context<'_>,
        user_id: String,
        date: String,
    ) -> GqlResult<Vec<GqlCalendarEvent>> {
        let state = context.data_unchecked::<AppState>();
        let date = parse_query_date(&date).map_err(gql_date_error)?;
        let events = state
            .calendar
            .get_events_for_day(GetEventsForDay { user_id, date }, &state.cancellation)
            .await
            .map_err(gql_error)?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    async fn events_for_week(
        &self,
        context: &Context<'_>,
        user_id: String,
        date_start: String,
    ) -> GqlResult<Vec<GqlCalendarEvent>> {
        let state = context.data_unchecked::<AppState>();
        let date_start = parse_query_date(&date_start).map_err(gql_date_error)?;
        let events = state
            .calendar
            .get_events_for_week(
                GetEventsForWeek {
                    user_id,
                    date_start,
                },
                &state.cancellation,
            )
            .await
            .map_err(gql_error)?;
        Ok(events.into_iter().map(Into::into).collect())
    }

    async fn events_for_month(
        &self,
        context: &Context<'_>,
        user_id: String,
        date_start: String,
    ) -> GqlResult<Vec<GqlCalendarEvent>> {
        let state = context.data_unchecked::<AppState>();
        let date_start = parse_query_date(&date_start).map_err(gql_date_error)?;
        let events = state
            .calendar
            .get_events_for_month(
                GetEventsForMonth {
                    user_id,
                    date_start,
                },
                &state.cancellation,
            )
            .await
            .map_err(gql_error)?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
