//! Demonstration data seeding
//!
//! Populates an empty database with a small but complete ESPI graph: one
//! retail customer with a usage point, a day of interval data, a power
//! quality summary, a billing summary, a customer account, and a
//! registered third party with an active authorization and subscription.

use chrono::{TimeZone, Utc};
use tracing::{error, info};

use crate::domain::application_information::ApplicationInformation;
use crate::domain::authorization::{
    Authorization, AuthorizationStatus, GrantType, TokenType,
};
use crate::domain::codes::{
    AccumulationKind, CommodityKind, Currency, CustomerKind, DataQualifierKind, EnrollmentStatus,
    FlowDirectionKind, MeasurementKind, NotificationMethodKind, PhaseCode, QualityOfReading,
    ServiceKind, SupplierKind, UnitMultiplier, UnitSymbol, UsagePointConnectedKind,
};
use crate::domain::customer_account::{
    AccountNotification, CustomerAccount, Organisation,
};
use crate::domain::meter_reading::{IntervalBlock, IntervalReading, MeterReading};
use crate::domain::power_quality::ElectricPowerQualitySummary;
use crate::domain::reading_type::ReadingType;
use crate::domain::retail_customer::RetailCustomer;
use crate::domain::subscription::Subscription;
use crate::domain::usage_point::{ServiceDeliveryPoint, UsagePoint};
use crate::domain::usage_summary::{LineItem, TariffRiderRef, UsageSummary};
use crate::domain::values::{
    DateTimeInterval, ElectronicAddress, PerCent, Status, StreetAddress, SummaryMeasurement,
    TelephoneNumber,
};
use crate::domain::{DomainResult, RepositoryProvider, Resource};

const BASE: &str = "/espi/1_1/resource";

fn resource(type_name: &str, key: &str, description: Option<&str>) -> Resource {
    let published = Utc.timestamp_opt(1_704_067_200, 0).unwrap();
    Resource::from_href(
        &format!("{}/{}/{}", BASE, type_name, key),
        &format!("{}/{}", BASE, type_name),
        description.map(str::to_string),
        published,
        published,
    )
}

/// Seed the demonstration graph when no retail customers exist. Failures
/// are logged, never fatal; the server still serves whatever is stored.
pub async fn seed_demo_data(repos: &dyn RepositoryProvider) {
    match repos.retail_customers().find_all().await {
        Ok(existing) if !existing.is_empty() => return,
        Ok(_) => {}
        Err(e) => {
            error!("Seed check failed: {}", e);
            return;
        }
    }

    info!("Seeding demonstration ESPI data...");
    if let Err(e) = seed_graph(repos).await {
        error!("Failed to seed demonstration data: {}", e);
    } else {
        info!("Demonstration data seeded");
    }
}

async fn seed_graph(repos: &dyn RepositoryProvider) -> DomainResult<()> {
    let customer = RetailCustomer {
        resource: resource("RetailCustomer", "1", None),
        username: "alan".to_string(),
        first_name: Some("Alan".to_string()),
        last_name: Some("Turing".to_string()),
        enabled: true,
        role: "ROLE_USER".to_string(),
    };
    let customer_id = customer.resource.id;
    repos.retail_customers().save(customer).await?;

    let usage_point = build_usage_point(customer_id)?;
    let usage_point_id = usage_point.resource.id;
    repos.usage_points().save(usage_point).await?;

    let account = build_customer_account(customer_id);
    repos.customer_accounts().save(account).await?;

    let app_info = build_application_information();
    let app_info_id = app_info.resource.id;
    repos.application_information().save(app_info).await?;

    let authorization = build_authorization(customer_id, app_info_id);
    let authorization_id = authorization.resource.id;
    repos.authorizations().save(authorization).await?;

    let subscription = Subscription {
        resource: resource("Subscription", "1", None),
        hashed_id: Some("b3a1f".to_string()),
        last_update: Utc.timestamp_opt(1_704_067_200, 0).unwrap(),
        retail_customer_id: Some(customer_id),
        authorization_id: Some(authorization_id),
        application_information_id: Some(app_info_id),
    };
    repos.subscriptions().save(subscription).await?;

    // Quiet reference so readers see where the usage data hangs.
    log::debug!("Seeded usage point {}", usage_point_id);
    Ok(())
}

fn build_usage_point(customer_id: uuid::Uuid) -> DomainResult<UsagePoint> {
    let reading_type = ReadingType {
        resource: resource("ReadingType", "1", None),
        meter_reading_id: None,
        accumulation_behaviour: Some(AccumulationKind::DeltaData),
        commodity: Some(CommodityKind::ElectricitySecondaryMetered),
        consumption_tier: None,
        currency: Some(Currency::Usd),
        data_qualifier: Some(DataQualifierKind::Normal),
        default_quality: Some(QualityOfReading::Valid),
        flow_direction: Some(FlowDirectionKind::Forward),
        interval_length: Some(900),
        kind: Some(MeasurementKind::Energy),
        phase: None,
        power_of_ten_multiplier: Some(UnitMultiplier::None),
        time_attribute: None,
        uom: Some(UnitSymbol::WattHours),
        cpp: None,
        tou: None,
        argument: None,
        interharmonic: None,
    };

    // One hour of 15-minute readings starting 2024-01-01T00:00Z.
    let day_start = 1_704_067_200_i64;
    let readings = (0..4)
        .map(|i| IntervalReading {
            time_period: DateTimeInterval::new(day_start + i * 900, 900),
            value: 240 + i * 15,
            cost: Some((240 + i * 15) * 21),
            consumption_tier: None,
            tou: None,
            cpp: None,
            quality: Some(QualityOfReading::Valid),
        })
        .collect();

    let block = IntervalBlock {
        resource: resource("IntervalBlock", "1", None),
        meter_reading_id: None,
        readings,
    };

    let meter_reading = MeterReading {
        resource: resource("MeterReading", "1", Some("Fifteen Minute Electricity Consumption")),
        usage_point_id: None,
        reading_type: Some(reading_type),
        interval_blocks: vec![block],
    };

    let power_quality = ElectricPowerQualitySummary {
        resource: resource("ElectricPowerQualitySummary", "1", None),
        usage_point_id: None,
        flicker_plt: Some(80),
        flicker_pst: Some(90),
        harmonic_voltage: Some(1_400),
        long_interruptions: Some(0),
        mains_voltage: Some(240_000),
        measurement_protocol: Some(0),
        power_frequency: Some(60_000),
        rapid_voltage_changes: Some(0),
        short_interruptions: Some(1),
        summary_interval: DateTimeInterval::new(day_start, 86_400),
        supply_voltage_dips: Some(0),
        supply_voltage_imbalance: Some(PerCent::new(2)?),
        supply_voltage_variations: Some(0),
        temp_overvoltages: Some(0),
    };

    let usage_summary = UsageSummary {
        resource: resource("UsageSummary", "1", None),
        usage_point_id: None,
        billing_period: Some(DateTimeInterval::new(day_start, 2_592_000)),
        bill_last_period: Some(15_303_000),
        bill_to_date: Some(1_135_000),
        cost_additional_last_period: None,
        currency: Some(Currency::Usd),
        overall_consumption_last_period: Some(SummaryMeasurement::new(
            626,
            UnitSymbol::WattHours,
            UnitMultiplier::Kilo,
        )),
        current_billing_period_overall_consumption: Some(SummaryMeasurement::new(
            96,
            UnitSymbol::WattHours,
            UnitMultiplier::Kilo,
        )),
        current_day_net_consumption: None,
        current_day_overall_consumption: None,
        peak_demand: Some(SummaryMeasurement::new(
            9500,
            UnitSymbol::Watts,
            UnitMultiplier::None,
        )),
        previous_day_net_consumption: None,
        quality_of_reading: Some(QualityOfReading::Valid),
        read_cycle: Some("A".to_string()),
        status_time_stamp: day_start,
        tariff_profile: Some("Residential TOU".to_string()),
        billing_charge_source: None,
        line_items: vec![LineItem {
            amount: 1_135_000,
            rounding: None,
            date_time: day_start,
            note: "Energy charge".to_string(),
            measurement: None,
        }],
        tariff_rider_refs: vec![TariffRiderRef {
            rider_type: "Net Metering".to_string(),
            enrollment_status: EnrollmentStatus::Enrolled,
            effective_date: day_start,
        }],
    };

    Ok(UsagePoint {
        resource: resource("UsagePoint", "1", Some("Front Electric Meter")),
        role_flags: Some(vec![0x0d]),
        service_category: ServiceKind::Electricity,
        connection_state: Some(UsagePointConnectedKind::Connected),
        phase_code: Some(PhaseCode::AbcN),
        status: Some(1),
        service_delivery_point: Some(ServiceDeliveryPoint {
            name: Some("Front Electric Meter".to_string()),
            tariff_profile: Some("Residential TOU".to_string()),
            customer_agreement: Some("Agreement 1".to_string()),
        }),
        local_time_parameters: None,
        retail_customer_id: Some(customer_id),
        estimated_load: Some(SummaryMeasurement::new(
            9500,
            UnitSymbol::Watts,
            UnitMultiplier::None,
        )),
        nominal_service_voltage: Some(SummaryMeasurement::new(
            240,
            UnitSymbol::Volts,
            UnitMultiplier::None,
        )),
        rated_current: None,
        rated_power: None,
        acceptance_test: None,
        lifecycle: None,
        pnode_refs: vec![],
        aggregate_node_refs: vec![],
        meter_readings: vec![meter_reading],
        power_quality_summaries: vec![power_quality],
        usage_summaries: vec![usage_summary],
    })
}

fn build_customer_account(customer_id: uuid::Uuid) -> CustomerAccount {
    CustomerAccount {
        resource: resource("CustomerAccount", "1", Some("Primary Residence")),
        retail_customer_id: Some(customer_id),
        account_id: Some("ACC-0001".to_string()),
        customer_kind: Some(CustomerKind::Residential),
        supplier_kind: Some(SupplierKind::Utility),
        billing_cycle: Some("monthly".to_string()),
        budget_bill: None,
        last_bill_amount: Some(15_303_000),
        doc_status: None,
        status: Some(Status {
            value: Some("active".to_string()),
            date_time: Some(1_704_067_200),
            reason: None,
            remark: None,
        }),
        title: Some("Primary Residence".to_string()),
        organisation: Some(Organisation {
            organisation_name: Some("Alan Turing".to_string()),
            street_address: StreetAddress {
                street_detail: Some("1 Main St".to_string()),
                town_detail: Some("Springfield".to_string()),
                state_or_province: Some("CA".to_string()),
                postal_code: Some("94000".to_string()),
                country: Some("US".to_string()),
            },
            postal_address: StreetAddress::default(),
            phone1: TelephoneNumber {
                country_code: Some("1".to_string()),
                area_code: Some("555".to_string()),
                city_code: None,
                local_number: Some("0100".to_string()),
                extension: None,
            },
            phone2: TelephoneNumber::default(),
            electronic_address: ElectronicAddress {
                email1: Some("alan@example.com".to_string()),
                email2: None,
                web: None,
                radio: None,
            },
        }),
        notifications: vec![AccountNotification {
            method_kind: Some(NotificationMethodKind::Email),
            note: Some("Welcome letter sent".to_string()),
            time: Some(1_704_067_200),
        }],
    }
}

fn build_application_information() -> ApplicationInformation {
    ApplicationInformation {
        resource: resource("ApplicationInformation", "1", Some("Example Third Party")),
        client_id: "third_party_1".to_string(),
        client_secret: Some("secret".to_string()),
        client_name: Some("Example Third Party".to_string()),
        client_id_issued_at: Some(1_704_067_200),
        client_secret_expires_at: Some(0),
        third_party_application_description: Some(
            "Demonstration energy insights application".to_string(),
        ),
        third_party_notify_uri: Some("https://thirdparty.example/notify".to_string()),
        redirect_uri: Some("https://thirdparty.example/oauth/callback".to_string()),
        token_endpoint_auth_method: Some("client_secret_basic".to_string()),
        scope: Some("FB=1_3_4_5_13_14_39;IntervalDuration=900".to_string()),
        grant_types: vec![GrantType::AuthorizationCode, GrantType::RefreshToken],
        token_type: Some(TokenType::Bearer),
        authorization_server_uri: Some("https://custodian.example".to_string()),
        authorization_server_authorization_endpoint: Some(
            "https://custodian.example/oauth/authorize".to_string(),
        ),
        authorization_server_token_endpoint: Some(
            "https://custodian.example/oauth/token".to_string(),
        ),
        data_custodian_id: Some("custodian".to_string()),
        data_custodian_resource_endpoint: Some(
            "https://custodian.example/espi/1_1/resource".to_string(),
        ),
    }
}

fn build_authorization(
    customer_id: uuid::Uuid,
    app_info_id: uuid::Uuid,
) -> Authorization {
    let day_start = 1_704_067_200_i64;
    Authorization {
        resource: resource("Authorization", "1", None),
        access_token: Some("c4a0fc7c-ed0c-4b7d-b1d6-3f4a35b7f9a0".to_string()),
        refresh_token: Some("4f0e0b5e-33ba-4a26-93d1-2a1c8e4c42d1".to_string()),
        token_type: Some(TokenType::Bearer),
        grant_type: Some(GrantType::AuthorizationCode),
        scope: Some("FB=1_3_4_5_13_14_39;IntervalDuration=900".to_string()),
        status: AuthorizationStatus::Active,
        expires_at: Some(day_start + 31_536_000),
        authorized_period: Some(DateTimeInterval::new(day_start, 31_536_000)),
        published_period: Some(DateTimeInterval::new(day_start, 86_400)),
        error: None,
        error_description: None,
        resource_uri: Some(format!("{}/Subscription/1", BASE)),
        authorization_uri: Some(format!("{}/Authorization/1", BASE)),
        third_party: Some("third_party_1".to_string()),
        retail_customer_id: Some(customer_id),
        application_information_id: Some(app_info_id),
    }
}
