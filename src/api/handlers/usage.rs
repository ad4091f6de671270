//! Usage-family handlers: Atom XML feeds and entries
//!
//! Six resource collections under `/espi/1_1/resource`. Every list is a
//! 200 feed (possibly empty); every get is a 200 entry or a 404 naming
//! the resource type and requested id.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::api::atom::{payload_xml, render_entry, render_feed, AtomEntry, ATOM_CONTENT_TYPE};
use crate::api::dto::{
    meter_reading, reading_type, summaries, usage_point, ElectricPowerQualitySummaryDto,
    IntervalBlockDto, MeterReadingDto, ReadingTypeDto, UsagePointDto, UsageSummaryDto,
};
use crate::api::error::RestError;
use crate::api::router::ApiState;
use crate::domain::DomainError;
use crate::domain::{
    meter_reading::{INTERVAL_BLOCK, METER_READING},
    power_quality::RESOURCE as POWER_QUALITY,
    reading_type::RESOURCE as READING_TYPE,
    usage_point::RESOURCE as USAGE_POINT,
    usage_summary::RESOURCE as USAGE_SUMMARY,
};

fn collection_href(resource: &str) -> String {
    format!("/espi/1_1/resource/{}", resource)
}

fn atom(xml: String) -> Response {
    ([(header::CONTENT_TYPE, ATOM_CONTENT_TYPE)], xml).into_response()
}

/// List usage points
///
/// Atom feed of every usage point known to the custodian.
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/UsagePoint",
    tag = "Usage",
    responses(
        (status = 200, description = "Atom feed of usage points", content_type = "application/atom+xml")
    )
)]
pub async fn list_usage_points(State(state): State<ApiState>) -> Result<Response, RestError> {
    let points = state.repos.usage_points().find_all().await?;
    let mut entries = Vec::with_capacity(points.len());
    for up in &points {
        let content = payload_xml(usage_point::ROOT, &UsagePointDto::from_domain(up))?;
        entries.push(AtomEntry::from_resource(&up.resource, USAGE_POINT, content));
    }
    Ok(atom(render_feed(
        USAGE_POINT,
        &collection_href(USAGE_POINT),
        &entries,
    )))
}

/// Get one usage point
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/UsagePoint/{id}",
    tag = "Usage",
    params(("id" = Uuid, Path, description = "Usage point id")),
    responses(
        (status = 200, description = "Atom entry", content_type = "application/atom+xml"),
        (status = 404, description = "No usage point with this id")
    )
)]
pub async fn get_usage_point(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Response, RestError> {
    let up = state
        .repos
        .usage_points()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(USAGE_POINT, id))?;
    let content = payload_xml(usage_point::ROOT, &UsagePointDto::from_domain(&up))?;
    Ok(atom(render_entry(&AtomEntry::from_resource(
        &up.resource,
        USAGE_POINT,
        content,
    ))))
}

/// List meter readings
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/MeterReading",
    tag = "Usage",
    responses(
        (status = 200, description = "Atom feed of meter readings", content_type = "application/atom+xml")
    )
)]
pub async fn list_meter_readings(State(state): State<ApiState>) -> Result<Response, RestError> {
    let readings = state.repos.meter_readings().find_all().await?;
    let mut entries = Vec::with_capacity(readings.len());
    for mr in &readings {
        let content = payload_xml(
            meter_reading::METER_READING_ROOT,
            &MeterReadingDto::from_domain(mr),
        )?;
        entries.push(AtomEntry::from_resource(&mr.resource, METER_READING, content));
    }
    Ok(atom(render_feed(
        METER_READING,
        &collection_href(METER_READING),
        &entries,
    )))
}

/// Get one meter reading
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/MeterReading/{id}",
    tag = "Usage",
    params(("id" = Uuid, Path, description = "Meter reading id")),
    responses(
        (status = 200, description = "Atom entry", content_type = "application/atom+xml"),
        (status = 404, description = "No meter reading with this id")
    )
)]
pub async fn get_meter_reading(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Response, RestError> {
    let mr = state
        .repos
        .meter_readings()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(METER_READING, id))?;
    let content = payload_xml(
        meter_reading::METER_READING_ROOT,
        &MeterReadingDto::from_domain(&mr),
    )?;
    Ok(atom(render_entry(&AtomEntry::from_resource(
        &mr.resource,
        METER_READING,
        content,
    ))))
}

/// List interval blocks
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/IntervalBlock",
    tag = "Usage",
    responses(
        (status = 200, description = "Atom feed of interval blocks", content_type = "application/atom+xml")
    )
)]
pub async fn list_interval_blocks(State(state): State<ApiState>) -> Result<Response, RestError> {
    let blocks = state.repos.interval_blocks().find_all().await?;
    let mut entries = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let content = payload_xml(
            meter_reading::INTERVAL_BLOCK_ROOT,
            &IntervalBlockDto::from_domain(block),
        )?;
        entries.push(AtomEntry::from_resource(
            &block.resource,
            INTERVAL_BLOCK,
            content,
        ));
    }
    Ok(atom(render_feed(
        INTERVAL_BLOCK,
        &collection_href(INTERVAL_BLOCK),
        &entries,
    )))
}

/// Get one interval block
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/IntervalBlock/{id}",
    tag = "Usage",
    params(("id" = Uuid, Path, description = "Interval block id")),
    responses(
        (status = 200, description = "Atom entry", content_type = "application/atom+xml"),
        (status = 404, description = "No interval block with this id")
    )
)]
pub async fn get_interval_block(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Response, RestError> {
    let block = state
        .repos
        .interval_blocks()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(INTERVAL_BLOCK, id))?;
    let content = payload_xml(
        meter_reading::INTERVAL_BLOCK_ROOT,
        &IntervalBlockDto::from_domain(&block),
    )?;
    Ok(atom(render_entry(&AtomEntry::from_resource(
        &block.resource,
        INTERVAL_BLOCK,
        content,
    ))))
}

/// List reading types
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/ReadingType",
    tag = "Usage",
    responses(
        (status = 200, description = "Atom feed of reading types", content_type = "application/atom+xml")
    )
)]
pub async fn list_reading_types(State(state): State<ApiState>) -> Result<Response, RestError> {
    let types = state.repos.reading_types().find_all().await?;
    let mut entries = Vec::with_capacity(types.len());
    for rt in &types {
        let content = payload_xml(reading_type::ROOT, &ReadingTypeDto::from_domain(rt))?;
        entries.push(AtomEntry::from_resource(&rt.resource, READING_TYPE, content));
    }
    Ok(atom(render_feed(
        READING_TYPE,
        &collection_href(READING_TYPE),
        &entries,
    )))
}

/// Get one reading type
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/ReadingType/{id}",
    tag = "Usage",
    params(("id" = Uuid, Path, description = "Reading type id")),
    responses(
        (status = 200, description = "Atom entry", content_type = "application/atom+xml"),
        (status = 404, description = "No reading type with this id")
    )
)]
pub async fn get_reading_type(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Response, RestError> {
    let rt = state
        .repos
        .reading_types()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(READING_TYPE, id))?;
    let content = payload_xml(reading_type::ROOT, &ReadingTypeDto::from_domain(&rt))?;
    Ok(atom(render_entry(&AtomEntry::from_resource(
        &rt.resource,
        READING_TYPE,
        content,
    ))))
}

/// List electric power quality summaries
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/ElectricPowerQualitySummary",
    tag = "Usage",
    responses(
        (status = 200, description = "Atom feed of power quality summaries", content_type = "application/atom+xml")
    )
)]
pub async fn list_power_quality_summaries(
    State(state): State<ApiState>,
) -> Result<Response, RestError> {
    let summaries = state.repos.power_quality_summaries().find_all().await?;
    let mut entries = Vec::with_capacity(summaries.len());
    for s in &summaries {
        let content = payload_xml(
            summaries::POWER_QUALITY_ROOT,
            &ElectricPowerQualitySummaryDto::from_domain(s),
        )?;
        entries.push(AtomEntry::from_resource(&s.resource, POWER_QUALITY, content));
    }
    Ok(atom(render_feed(
        POWER_QUALITY,
        &collection_href(POWER_QUALITY),
        &entries,
    )))
}

/// Get one electric power quality summary
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/ElectricPowerQualitySummary/{id}",
    tag = "Usage",
    params(("id" = Uuid, Path, description = "Power quality summary id")),
    responses(
        (status = 200, description = "Atom entry", content_type = "application/atom+xml"),
        (status = 404, description = "No power quality summary with this id")
    )
)]
pub async fn get_power_quality_summary(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Response, RestError> {
    let s = state
        .repos
        .power_quality_summaries()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(POWER_QUALITY, id))?;
    let content = payload_xml(
        summaries::POWER_QUALITY_ROOT,
        &ElectricPowerQualitySummaryDto::from_domain(&s),
    )?;
    Ok(atom(render_entry(&AtomEntry::from_resource(
        &s.resource,
        POWER_QUALITY,
        content,
    ))))
}

/// List usage summaries
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/UsageSummary",
    tag = "Usage",
    responses(
        (status = 200, description = "Atom feed of usage summaries", content_type = "application/atom+xml")
    )
)]
pub async fn list_usage_summaries(State(state): State<ApiState>) -> Result<Response, RestError> {
    let items = state.repos.usage_summaries().find_all().await?;
    let mut entries = Vec::with_capacity(items.len());
    for s in &items {
        let content = payload_xml(summaries::USAGE_SUMMARY_ROOT, &UsageSummaryDto::from_domain(s))?;
        entries.push(AtomEntry::from_resource(&s.resource, USAGE_SUMMARY, content));
    }
    Ok(atom(render_feed(
        USAGE_SUMMARY,
        &collection_href(USAGE_SUMMARY),
        &entries,
    )))
}

/// Get one usage summary
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/UsageSummary/{id}",
    tag = "Usage",
    params(("id" = Uuid, Path, description = "Usage summary id")),
    responses(
        (status = 200, description = "Atom entry", content_type = "application/atom+xml"),
        (status = 404, description = "No usage summary with this id")
    )
)]
pub async fn get_usage_summary(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Response, RestError> {
    let s = state
        .repos
        .usage_summaries()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(USAGE_SUMMARY, id))?;
    let content = payload_xml(
        summaries::USAGE_SUMMARY_ROOT,
        &UsageSummaryDto::from_domain(&s),
    )?;
    Ok(atom(render_entry(&AtomEntry::from_resource(
        &s.resource,
        USAGE_SUMMARY,
        content,
    ))))
}
