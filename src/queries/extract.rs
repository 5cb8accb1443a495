//! Axum binding for the `api:*` query parameters.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::config::schema::QueryParametersConfig;
use crate::http::error::ApiError;
use crate::queries::params::{
    QueryParameters, QueryParametersParser, RawQueryParameters, API_AGGREGATION, API_CONDITION,
    API_INDEX_FIELDS_ONLY, API_PAGE, API_PAGE_SIZE, API_QUERY, API_SEARCH, API_SORT,
};

/// State backing the [`QueryParameters`] extractor: immutable defaults
/// plus the parser collaborator, both handed over at construction.
#[derive(Clone)]
pub struct QueryParametersProviderState {
    pub config: QueryParametersConfig,
    pub parser: Arc<dyn QueryParametersParser>,
}

impl<S> FromRequestParts<S> for QueryParameters
where
    QueryParametersProviderState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let provider = QueryParametersProviderState::from_ref(state);
        let params = collect_query_params(parts.uri.query().unwrap_or(""));

        let raw = RawQueryParameters {
            page: int_param(&params, API_PAGE)?.unwrap_or(0),
            page_size: int_param(&params, API_PAGE_SIZE)?
                .unwrap_or(provider.config.default_page_size),
            max_page_size: provider.config.max_page_size,
            sort: string_param(&params, API_SORT),
            queries: list_param(&params, API_QUERY),
            conditions: list_param(&params, API_CONDITION),
            aggregation: string_param(&params, API_AGGREGATION),
            search: string_param(&params, API_SEARCH),
            index_fields_only: bool_param(&params, API_INDEX_FIELDS_ONLY),
        };

        provider
            .parser
            .create_query_parameters(raw)
            .map_err(ApiError::from)
    }
}

fn collect_query_params(query: &str) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

fn first<'a>(params: &'a HashMap<String, Vec<String>>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .and_then(|values| values.first())
        .map(String::as_str)
}

fn int_param(params: &HashMap<String, Vec<String>>, key: &str) -> Result<Option<i32>, ApiError> {
    match first(params, key) {
        Some(value) => value.parse::<i32>().map(Some).map_err(|_| {
            ApiError::bad_request("bad_request", format!("{key} must be an integer, got '{value}'"))
        }),
        None => Ok(None),
    }
}

fn string_param(params: &HashMap<String, Vec<String>>, key: &str) -> Option<String> {
    first(params, key).map(str::to_string)
}

fn list_param(params: &HashMap<String, Vec<String>>, key: &str) -> Option<Vec<String>> {
    params.get(key).cloned()
}

fn bool_param(params: &HashMap<String, Vec<String>>, key: &str) -> bool {
    first(params, key)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
