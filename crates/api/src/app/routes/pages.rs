//! Server-rendered inventory page: the add/remove forms and the list table.
//!
//! Form posts redirect back to `/` with a one-shot notice/error flash in the
//! query string, so a browser refresh never resubmits an operation.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::{Html, IntoResponse, Redirect},
    Form,
};

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::InventoryRow;

use crate::app::dto;
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub async fn index(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(params): Query<dto::PageParams>,
) -> impl IntoResponse {
    let rows = services.list_items(session.session_id());
    Html(render_page(
        &rows,
        params.notice.as_deref(),
        params.error.as_deref(),
    ))
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Form(form): Form<dto::AddItemForm>,
) -> Redirect {
    let outcome = parse_quantity(&form.quantity)
        .and_then(|quantity| services.add_item(session.session_id(), &form.name, quantity));

    match outcome {
        Ok((_position, item)) => with_notice(&format!(
            "Added {} (quantity {}).",
            item.name(),
            item.quantity()
        )),
        Err(e) => with_error(&e.to_string()),
    }
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Form(form): Form<dto::RemoveItemForm>,
) -> Redirect {
    let outcome = parse_position(&form.position)
        .and_then(|position| services.remove_item(session.session_id(), position));

    match outcome {
        Ok(item) => with_notice(&format!(
            "Removed {} (quantity {}).",
            item.name(),
            item.quantity()
        )),
        Err(e) => with_error(&e.to_string()),
    }
}

fn parse_quantity(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation("quantity must be a whole number"))
}

fn parse_position(raw: &str) -> DomainResult<usize> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::validation("position must be a positive whole number"))
}

fn with_notice(message: &str) -> Redirect {
    Redirect::to(&format!("/?notice={}", urlencoding::encode(message)))
}

fn with_error(message: &str) -> Redirect {
    Redirect::to(&format!("/?error={}", urlencoding::encode(message)))
}

const STYLE: &str = "<style>\n\
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }\n\
    form { margin-bottom: 1rem; }\n\
    label { display: block; margin: 0.25rem 0; }\n\
    table { border-collapse: collapse; width: 100%; }\n\
    th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }\n\
    .notice { color: #22632c; }\n\
    .error { color: #9c2121; }\n\
    .empty { color: #555; }\n\
    </style>\n";

fn render_page(rows: &[InventoryRow], notice: Option<&str>, error: Option<&str>) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Stockroom</title>\n");
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n<h1>Stockroom</h1>\n");

    if let Some(notice) = notice {
        html.push_str(&format!(
            "<p class=\"notice\">{}</p>\n",
            escape_html(notice)
        ));
    }
    if let Some(error) = error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }

    html.push_str("<h2>Add item</h2>\n");
    html.push_str(
        "<form method=\"post\" action=\"/items/add\">\n\
         <label>Name <input type=\"text\" name=\"name\" required></label>\n\
         <label>Quantity <input type=\"number\" name=\"quantity\" min=\"1\" step=\"1\" value=\"1\" required></label>\n\
         <button type=\"submit\">Add to inventory</button>\n\
         </form>\n",
    );

    html.push_str("<h2>Remove item</h2>\n");
    let max_position = rows.len().max(1);
    html.push_str(&format!(
        "<form method=\"post\" action=\"/items/remove\">\n\
         <label>Position (Lp.) <input type=\"number\" name=\"position\" min=\"1\" max=\"{max_position}\" step=\"1\" value=\"1\" required></label>\n\
         <button type=\"submit\">Remove from inventory</button>\n\
         </form>\n",
    ));

    html.push_str("<h2>Current inventory</h2>\n");
    if rows.is_empty() {
        html.push_str("<p class=\"empty\">The inventory is empty. Add the first item!</p>\n");
    } else {
        html.push_str(
            "<table>\n<thead><tr><th>Lp.</th><th>Name</th><th>Quantity</th></tr></thead>\n<tbody>\n",
        );
        for row in rows {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                row.position,
                escape_html(&row.name),
                row.quantity
            ));
        }
        html.push_str("</tbody>\n</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Minimal HTML escaping for user-entered names and flash text.
fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
