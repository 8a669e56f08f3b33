//! Summary API endpoint

use api_types::summary::Summary;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for the summary of the latest snapshot
pub async fn get_summary(State(state): State<ServerState>) -> Result<Json<Summary>, ServerError> {
    let summary = state.engine.read().await.summary()?;

    Ok(Json(Summary {
        income: summary.income.to_major(),
        total_expenses: summary.total_expenses.to_major(),
        savings: summary.savings.to_major(),
        savings_rate: summary.savings_rate.as_percent(),
        largest_expense: summary.largest_expense_category,
    }))
}
