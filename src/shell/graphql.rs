use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::calendar::use_cases::get_events::inbound::graphql::CalendarQuery as QueryRoot;
use crate::modules::calendar::use_cases::create_event::inbound::graphql::CreateEventMutation;
use crate::modules::calendar::use_cases::delete_event::inbound::graphql::DeleteEventMutation;
use crate::modules::calendar::use_cases::update_event::inbound::graphql::UpdateEventMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(CreateEventMutation, UpdateEventMutation, DeleteEventMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
