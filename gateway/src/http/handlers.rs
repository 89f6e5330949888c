//! Request handlers for the 8 endpoints in spec.md §6. Every handler
//! blocks its operation via `actix_web::web::block` (spec.md §6's
//! `[AMBIENT]` note — an async facade over a synchronous core, the
//! inverse of the teacher's `blocking_client.rs`). Response bodies follow
//! spec.md §6's documented object shapes exactly (`{ticks:[…]}`,
//! `{bars:[…]}`, `{positions:[…]}`, etc.), not bare arrays.
use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};

use crate::enums::Action;
use crate::error::GatewayError;
use crate::gateway::Gateway;
use crate::ops;

use super::dto::{
    json_to_field_bag, parse_account_summary_tags, AccountUpdateQuery, DeleteOrderQuery, ErrorBody, HistoryQuery,
};

fn err_response(e: GatewayError) -> HttpResponse {
    let body = ErrorBody { error: e.to_string() };
    HttpResponse::build(actix_web::http::StatusCode::from_u16(e.status_code()).unwrap()).json(body)
}

pub async fn get_market(path: web::Path<String>, gateway: web::Data<Arc<Gateway>>) -> HttpResponse {
    let symbol = path.into_inner();
    let gateway = gateway.get_ref().clone();
    match web::block(move || ops::get_market::get_market(&gateway, &symbol)).await {
        Ok(Ok(ticks)) => HttpResponse::Ok().json(json!({ "ticks": ticks })),
        Ok(Err(e)) => err_response(e),
        Err(_) => err_response(GatewayError::Transport("worker thread panicked".to_string())),
    }
}

pub async fn get_history(query: web::Query<HistoryQuery>, gateway: web::Data<Arc<Gateway>>) -> HttpResponse {
    let q = query.into_inner();
    let gateway = gateway.get_ref().clone();
    let req = ops::get_history::HistoryRequest {
        fields: q.contract_fields,
        end_date_time: q.end_date_time,
        duration: q.duration,
        bar_size: q.bar_size,
        what_to_show: q.what_to_show,
        use_rth: q.use_rth,
    };
    match web::block(move || ops::get_history::get_history(&gateway, req)).await {
        Ok(Ok(bars)) => HttpResponse::Ok().json(json!({ "bars": bars })),
        Ok(Err(e)) => err_response(e),
        Err(_) => err_response(GatewayError::Transport("worker thread panicked".to_string())),
    }
}

pub async fn get_orders(gateway: web::Data<Arc<Gateway>>) -> HttpResponse {
    let gateway = gateway.get_ref().clone();
    match web::block(move || ops::get_open_orders::get_open_orders(&gateway)).await {
        Ok(Ok(orders)) => {
            HttpResponse::Ok().json(json!({ "openOrder": orders.open_orders, "orderStatus": orders.statuses }))
        }
        Ok(Err(e)) => err_response(e),
        Err(_) => err_response(GatewayError::Transport("worker thread panicked".to_string())),
    }
}

pub async fn post_order(body: web::Json<Value>, gateway: web::Data<Arc<Gateway>>) -> HttpResponse {
    let fields = json_to_field_bag(&body);
    let Some(action_str) = fields.get("action") else {
        return err_response(GatewayError::Validation("missing required field: action".to_string()));
    };
    let action: Action = match action_str.parse() {
        Ok(a) => a,
        Err(_) => {
            return err_response(GatewayError::Validation(
                "action must be one of BUY, SELL, SSHORT".to_string(),
            ))
        }
    };
    let Some(qty_str) = fields.get("totalQuantity").or_else(|| fields.get("qty")) else {
        return err_response(GatewayError::Validation("missing required field: totalQuantity".to_string()));
    };
    let qty: rust_decimal::Decimal = match qty_str.parse() {
        Ok(q) => q,
        Err(_) => return err_response(GatewayError::Validation("totalQuantity must be numeric".to_string())),
    };

    let gateway = gateway.get_ref().clone();
    match web::block(move || ops::place_order::place_order(&gateway, action, qty, &fields)).await {
        Ok(Ok(result)) => HttpResponse::Ok().json(json!({
            "orderId": result.order_id,
            "openOrder": result.open_order,
            "orderStatus": result.status,
        })),
        Ok(Err(e)) => err_response(e),
        Err(_) => err_response(GatewayError::Transport("worker thread panicked".to_string())),
    }
}

pub async fn delete_order(query: web::Query<DeleteOrderQuery>, gateway: web::Data<Arc<Gateway>>) -> HttpResponse {
    let order_id = query.order_id;
    let gateway = gateway.get_ref().clone();
    match web::block(move || ops::cancel_order::cancel_order(&gateway, order_id)).await {
        Ok(Ok(result)) => HttpResponse::Ok().json(json!({
            "openOrder": result.open_order,
            "orderStatus": result.status,
            "error": result.error,
        })),
        Ok(Err(e)) => err_response(e),
        Err(_) => err_response(GatewayError::Transport("worker thread panicked".to_string())),
    }
}

pub async fn get_positions(gateway: web::Data<Arc<Gateway>>) -> HttpResponse {
    let gateway = gateway.get_ref().clone();
    match web::block(move || ops::get_positions::get_positions(&gateway)).await {
        Ok(Ok(positions)) => HttpResponse::Ok().json(json!({ "positions": positions })),
        Ok(Err(e)) => err_response(e),
        Err(_) => err_response(GatewayError::Transport("worker thread panicked".to_string())),
    }
}

pub async fn get_account_summary(req: HttpRequest, gateway: web::Data<Arc<Gateway>>) -> HttpResponse {
    let tags = match parse_account_summary_tags(req.query_string()) {
        Ok(tags) => tags,
        Err(e) => return err_response(e),
    };
    let gateway = gateway.get_ref().clone();
    match web::block(move || ops::get_account_summary::get_account_summary(&gateway, &tags)).await {
        Ok(Ok(result)) => {
            let mut body = serde_json::Map::new();
            for (tag, value) in result.values {
                body.insert(tag, Value::String(value));
            }
            body.insert("accountSummaryEnd".to_string(), Value::Bool(result.complete));
            HttpResponse::Ok().json(Value::Object(body))
        }
        Ok(Err(e)) => err_response(e),
        Err(_) => err_response(GatewayError::Transport("worker thread panicked".to_string())),
    }
}

pub async fn get_account_update(
    query: web::Query<AccountUpdateQuery>,
    gateway: web::Data<Arc<Gateway>>,
) -> HttpResponse {
    let account = query.into_inner().account;
    let gateway = gateway.get_ref().clone();
    match web::block(move || ops::get_account_update::get_account_update(&gateway, &account)).await {
        Ok(Ok(snapshot)) => HttpResponse::Ok().json(snapshot),
        Ok(Err(e)) => err_response(e),
        Err(_) => err_response(GatewayError::Transport("worker thread panicked".to_string())),
    }
}

pub async fn get_clients(gateway: web::Data<Arc<Gateway>>) -> HttpResponse {
    HttpResponse::Ok().json(ops::clients::list_clients(&gateway))
}
