//! Snapshot upload API endpoint

use api_types::upload::{INCOME_KEY, UploadAccepted};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{BudgetSnapshot, EngineError, MoneyCents, ResultEngine};
use serde_json::Value;

use crate::{ServerError, server::ServerState};

/// Handle requests for uploading a new budget snapshot.
///
/// The body is a flat JSON object: `income` plus one key per expense
/// category.
pub async fn upload(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<UploadAccepted>), ServerError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!("rejected upload body: {rejection}");
        ServerError::Generic("Invalid input: body must be a JSON object".to_string())
    })?;

    let snapshot = parse_snapshot(payload).inspect_err(|err| {
        tracing::warn!("rejected upload: {err}");
    })?;
    let categories = snapshot.expenses().len();
    let income = snapshot.income();

    let count = state.engine.write().await.upload(snapshot);
    tracing::info!(
        "Uploaded expenses: income {income}, {categories} categories (snapshot #{count})"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadAccepted {
            message: "Expenses uploaded successfully".to_string(),
        }),
    ))
}

fn parse_snapshot(payload: Value) -> ResultEngine<BudgetSnapshot> {
    let Value::Object(fields) = payload else {
        return Err(EngineError::InvalidInput(
            "body must be a JSON object".to_string(),
        ));
    };

    let mut income = None;
    let mut expenses = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let amount = parse_amount(&key, &value)?;
        if key == INCOME_KEY {
            income = Some(amount);
        } else {
            expenses.push((key, amount));
        }
    }

    BudgetSnapshot::new(income, expenses)
}

fn parse_amount(key: &str, value: &Value) -> ResultEngine<MoneyCents> {
    let invalid = || EngineError::InvalidInput(format!("\"{key}\" must be a number"));

    let Value::Number(number) = value else {
        return Err(invalid());
    };
    match number.as_i64() {
        Some(units) => MoneyCents::from_units(units),
        None => MoneyCents::from_major(number.as_f64().ok_or_else(invalid)?),
    }
}
