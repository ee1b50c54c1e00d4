//! HTTP handler functions for the carrier intelligence API.

use actix_web::{HttpResponse, web};
use carrier_intel_analytics::insights::{
    self, DEFAULT_INSIGHT_LIMIT, DEFAULT_RANKING_LIMIT, market_intelligence,
};
use carrier_intel_analytics::stats::{self, DEFAULT_HISTOGRAM_BINS};
use carrier_intel_analytics::summary::top_risk_regions;
use carrier_intel_analytics::{filter, summarize};
use carrier_intel_carrier_models::{CarrierRecord, Region};
use carrier_intel_generate::trend::{
    DEFAULT_HISTORY_MONTHS, DEFAULT_TREND_MONTHS, safety_trend, validate_months,
    violation_history,
};
use carrier_intel_generate::{carrier_rng, seeded_rng};
use carrier_intel_server_models::{
    ApiCarrierProfile, ApiHealth, ApiRegion, CarrierPage, CarrierQueryParams, CarrierTrend,
    DashboardResponse, FilterParams, HistogramQueryParams, HistoryQueryParams,
    InsightsQueryParams, SalesAction, SalesActionResponse, TrendQueryParams,
    ViolationHistoryResponse,
};

use crate::AppState;

/// Number of carriers shown in the safety trends chart.
const TREND_CARRIERS: usize = 5;

fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": message.to_string()
    }))
}

fn carrier_not_found(carrier_id: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("Unknown carrier {carrier_id}")
    }))
}

fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/regions`
///
/// Returns the region catalogue with per-region carrier counts.
pub async fn regions(state: web::Data<AppState>) -> HttpResponse {
    let regions: Vec<ApiRegion> = Region::all()
        .iter()
        .map(|region| ApiRegion {
            code: *region,
            name: region.name().to_string(),
            localities: region
                .localities()
                .iter()
                .map(ToString::to_string)
                .collect(),
            carrier_count: state
                .summaries
                .iter()
                .find(|s| s.region == *region)
                .map_or(0, |s| s.carrier_count),
        })
        .collect();

    HttpResponse::Ok().json(regions)
}

/// `GET /api/summary`
///
/// Region summaries of the whole population.
pub async fn summary(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.summaries)
}

/// `GET /api/insights`
///
/// The riskiest regions of the whole population.
pub async fn insights(
    state: web::Data<AppState>,
    params: web::Query<InsightsQueryParams>,
) -> HttpResponse {
    let limit = params.limit.unwrap_or(DEFAULT_INSIGHT_LIMIT);
    HttpResponse::Ok().json(top_risk_regions(&state.summaries, limit))
}

/// `GET /api/carriers`
///
/// Filtered, paginated carrier list.
pub async fn carriers(
    state: web::Data<AppState>,
    params: web::Query<CarrierQueryParams>,
) -> HttpResponse {
    let carrier_filter = FilterParams::from(&*params).to_filter();
    let selection = filter(&state.population, &carrier_filter);

    let limit = params.limit.unwrap_or(100) as usize;
    let offset = params.offset.unwrap_or(0) as usize;
    let total = selection.len();

    let carriers: Vec<CarrierRecord> = selection
        .into_iter()
        .skip(offset)
        .take(limit)
        .cloned()
        .collect();

    HttpResponse::Ok().json(CarrierPage {
        has_more: offset.saturating_add(carriers.len()) < total,
        carriers,
        total_count: total as u64,
    })
}

/// `GET /api/carriers/{id}`
pub async fn carrier(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let carrier_id = path.into_inner();
    match state.find(&carrier_id) {
        Some((_, record)) => HttpResponse::Ok().json(ApiCarrierProfile::from(record)),
        None => carrier_not_found(&carrier_id),
    }
}

/// `GET /api/carriers/{id}/history`
///
/// Monthly violation history of one carrier.
pub async fn history(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<HistoryQueryParams>,
) -> HttpResponse {
    let carrier_id = path.into_inner();
    let Some((index, _)) = state.find(&carrier_id) else {
        return carrier_not_found(&carrier_id);
    };

    let months = params.months.unwrap_or(DEFAULT_HISTORY_MONTHS);
    let mut rng = carrier_rng(state.seed, index);

    match violation_history(months, today(), &mut rng) {
        Ok(history) => HttpResponse::Ok().json(ViolationHistoryResponse {
            carrier_id,
            history,
        }),
        Err(e) => {
            log::warn!("Rejected history request for {carrier_id}: {e}");
            bad_request(e)
        }
    }
}

/// `GET /api/dashboard`
///
/// KPIs, market intelligence, savings ranking, and region summaries for
/// one filter selection.
pub async fn dashboard(
    state: web::Data<AppState>,
    params: web::Query<FilterParams>,
) -> HttpResponse {
    let carrier_filter = params.to_filter();
    let selection = filter(&state.population, &carrier_filter);

    let mut rng = seeded_rng(state.seed);
    let market = match market_intelligence(&selection, &mut rng) {
        Ok(market) => market,
        Err(e) => {
            log::error!("Failed to compute market intelligence: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to compute market intelligence"
            }));
        }
    };

    HttpResponse::Ok().json(DashboardResponse {
        kpis: insights::kpis(state.population.len(), &selection),
        market,
        ranking: insights::savings_ranking(&selection, DEFAULT_RANKING_LIMIT),
        regions: summarize(selection.iter().copied()),
    })
}

/// `GET /api/trends`
///
/// Current and prior-year safety trends of the riskiest filtered
/// carriers.
pub async fn trends(
    state: web::Data<AppState>,
    params: web::Query<TrendQueryParams>,
) -> HttpResponse {
    let carrier_filter = FilterParams::from(&*params).to_filter();
    let selection = filter(&state.population, &carrier_filter);
    let months = params.months.unwrap_or(DEFAULT_TREND_MONTHS);
    if let Err(e) = validate_months(months) {
        log::warn!("Rejected trend request: {e}");
        return bad_request(e);
    }
    let end = today();

    let mut trends = Vec::with_capacity(TREND_CARRIERS);
    for record in insights::riskiest(&selection, TREND_CARRIERS) {
        let Some((index, _)) = state.find(&record.carrier_id) else {
            continue;
        };
        let mut rng = carrier_rng(state.seed, index);
        match safety_trend(record, months, end, &mut rng) {
            Ok(points) => trends.push(CarrierTrend {
                carrier_id: record.carrier_id.clone(),
                carrier_name: record.carrier_name.clone(),
                risk_score: record.risk_score,
                points,
            }),
            Err(e) => {
                log::warn!("Rejected trend request: {e}");
                return bad_request(e);
            }
        }
    }

    HttpResponse::Ok().json(trends)
}

/// `GET /api/correlations`
pub async fn correlations(
    state: web::Data<AppState>,
    params: web::Query<FilterParams>,
) -> HttpResponse {
    let selection = filter(&state.population, &params.to_filter());
    HttpResponse::Ok().json(stats::correlation_matrix(&selection))
}

/// `GET /api/fleet-distribution`
pub async fn fleet_distribution(
    state: web::Data<AppState>,
    params: web::Query<HistogramQueryParams>,
) -> HttpResponse {
    let carrier_filter = FilterParams::from(&*params).to_filter();
    let selection = filter(&state.population, &carrier_filter);
    let bins = params.bins.unwrap_or(DEFAULT_HISTOGRAM_BINS);

    match stats::fleet_size_histogram(&selection, bins) {
        Ok(histogram) => HttpResponse::Ok().json(histogram),
        Err(e) => {
            log::warn!("Rejected fleet distribution request: {e}");
            bad_request(e)
        }
    }
}

/// `POST /api/actions/{action}`
///
/// Acknowledges a sales action. Nothing is exported or persisted.
pub async fn action(path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    match name.parse::<SalesAction>() {
        Ok(action) => {
            log::info!("Sales action requested: {action}");
            HttpResponse::Ok().json(SalesActionResponse {
                action,
                message: action.acknowledgement().to_string(),
            })
        }
        Err(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Unknown action {name}")
        })),
    }
}
