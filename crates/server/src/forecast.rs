//! Forecast API endpoint

use api_types::forecast::Forecast;
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for the inflation forecast of the latest snapshot
pub async fn get_forecast(
    State(state): State<ServerState>,
) -> Result<Json<Forecast>, ServerError> {
    let forecast = state.engine.read().await.forecast()?;

    Ok(Json(Forecast {
        inflation_forecast: forecast
            .iter()
            .map(|(year, amount)| (year, amount.to_major()))
            .collect(),
    }))
}
