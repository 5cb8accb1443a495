//! Query-parameter model and parser contract.

use std::fmt;

use thiserror::Error;

pub const API_PAGE: &str = "api:page";
pub const API_PAGE_SIZE: &str = "api:pageSize";
pub const API_SORT: &str = "api:sort";
pub const API_QUERY: &str = "api:query";
pub const API_CONDITION: &str = "api:condition";
pub const API_AGGREGATION: &str = "api:aggregation";
pub const API_SEARCH: &str = "api:search";
pub const API_INDEX_FIELDS_ONLY: &str = "api:indexFieldsOnly";

/// Which query parameter failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryParameter {
    Page,
    PageSize,
    Sort,
    Query,
    Condition,
    Aggregation,
    Search,
}

impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryParameter::Page => "page",
            QueryParameter::PageSize => "page size",
            QueryParameter::Sort => "sort",
            QueryParameter::Query => "query",
            QueryParameter::Condition => "condition",
            QueryParameter::Aggregation => "aggregation",
            QueryParameter::Search => "search",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Error)]
#[error("invalid {parameter} parameter '{value}': {message}")]
pub struct InvalidParameterError {
    pub parameter: QueryParameter,
    pub value: String,
    pub message: String,
}

/// Raw, pre-validation parameter bundle handed to the parser.
#[derive(Debug, Clone, Default)]
pub struct RawQueryParameters {
    pub page: i32,
    pub page_size: i32,
    pub max_page_size: i32,
    pub sort: Option<String>,
    pub queries: Option<Vec<String>>,
    pub conditions: Option<Vec<String>>,
    pub aggregation: Option<String>,
    pub search: Option<String>,
    pub index_fields_only: bool,
}

/// Validated query parameters, ready for injection into handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameters {
    pub page: i32,
    pub page_size: i32,
    pub sort: Option<String>,
    pub queries: Option<Vec<String>>,
    pub conditions: Option<Vec<String>>,
    pub aggregation: Option<String>,
    pub search: Option<String>,
    pub index_fields_only: bool,
}

/// Validates raw parameters into a [`QueryParameters`].
///
/// Implementations own the expression grammar behind `api:query`,
/// `api:condition`, `api:aggregation` and `api:search`; this crate only
/// defines the binding contract.
pub trait QueryParametersParser: Send + Sync {
    fn create_query_parameters(
        &self,
        raw: RawQueryParameters,
    ) -> Result<QueryParameters, InvalidParameterError>;
}

/// Bounds-only parser: checks pagination ranges and passes expression
/// parameters through unparsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicQueryParametersParser;

impl QueryParametersParser for BasicQueryParametersParser {
    fn create_query_parameters(
        &self,
        raw: RawQueryParameters,
    ) -> Result<QueryParameters, InvalidParameterError> {
        if raw.page < 0 {
            return Err(InvalidParameterError {
                parameter: QueryParameter::Page,
                value: raw.page.to_string(),
                message: "page must not be negative".to_string(),
            });
        }
        if raw.page_size < 1 || raw.page_size > raw.max_page_size {
            return Err(InvalidParameterError {
                parameter: QueryParameter::PageSize,
                value: raw.page_size.to_string(),
                message: format!("page size must be between 1 and {}", raw.max_page_size),
            });
        }
        Ok(QueryParameters {
            page: raw.page,
            page_size: raw.page_size,
            sort: raw.sort,
            queries: raw.queries,
            conditions: raw.conditions,
            aggregation: raw.aggregation,
            search: raw.search,
            index_fields_only: raw.index_fields_only,
        })
    }
}
