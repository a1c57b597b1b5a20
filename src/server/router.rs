use crate::http::request::Request;
use crate::http::response::Response;
use crate::server::handler::AppContext;
use crate::server::render::{self, QueryPage};
use crate::server::static_files;

/// Query-string parameter carrying the search words.
pub const TERMS_PARAM: &str = "terms";

/// Produces the response for one request.
///
/// Targets under the static prefix are files; everything else is the search
/// page, with results when a `terms` parameter is present.
pub async fn route(req: &Request, ctx: &AppContext) -> Response {
    let path = req.path();
    if path.starts_with(&ctx.static_files.prefix) {
        return static_files::serve(path, &ctx.static_files).await;
    }

    search(req, ctx).await
}

/// Lowercased, whitespace-separated search words.
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_lowercase).collect()
}

async fn search(req: &Request, ctx: &AppContext) -> Response {
    let Some(raw) = req.query_param(TERMS_PARAM) else {
        return Response::html(render::search_page(None));
    };

    let terms = parse_terms(&raw);
    let (results, num_words) = ctx.index.query_with_stats(&terms).await;
    let index_empty = num_words == 0;

    tracing::debug!(?terms, hits = results.len(), "Query answered");

    let page = QueryPage {
        query: terms.join(" "),
        results,
        index_empty,
        static_prefix: ctx.static_files.prefix.clone(),
    };
    Response::html(render::search_page(Some(&page)))
}
