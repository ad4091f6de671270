//! SeaORM implementation of ReadingTypeRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::domain::codes::{
    AccumulationKind, CommodityKind, Currency, DataQualifierKind, FlowDirectionKind,
    MeasurementKind, PhaseCode, QualityOfReading, TimeAttributeKind, UnitMultiplier, UnitSymbol,
};
use crate::domain::reading_type::{ReadingType, ReadingTypeRepository};
use crate::domain::values::RationalNumber;
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::reading_type;

use super::{db_err, resource_from_columns};

pub struct SeaOrmReadingTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmReadingTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn rational_from_columns(numerator: Option<i64>, denominator: Option<i64>) -> Option<RationalNumber> {
    match (numerator, denominator) {
        (Some(numerator), Some(denominator)) => Some(RationalNumber {
            numerator,
            denominator,
        }),
        _ => None,
    }
}

pub(super) fn model_to_domain(m: reading_type::Model) -> DomainResult<ReadingType> {
    Ok(ReadingType {
        resource: resource_from_columns(
            m.id,
            m.description,
            m.published,
            m.updated,
            m.self_href,
            m.up_href,
        ),
        meter_reading_id: m.meter_reading_id,
        accumulation_behaviour: m
            .accumulation_behaviour
            .map(AccumulationKind::resolve)
            .transpose()?,
        commodity: m.commodity.map(CommodityKind::resolve).transpose()?,
        consumption_tier: m.consumption_tier,
        currency: m.currency.map(Currency::resolve).transpose()?,
        data_qualifier: m.data_qualifier.map(DataQualifierKind::resolve).transpose()?,
        default_quality: m
            .default_quality
            .map(QualityOfReading::resolve)
            .transpose()?,
        flow_direction: m.flow_direction.map(FlowDirectionKind::resolve).transpose()?,
        interval_length: m.interval_length,
        kind: m.kind.map(MeasurementKind::resolve).transpose()?,
        phase: m.phase.map(PhaseCode::resolve).transpose()?,
        power_of_ten_multiplier: m
            .power_of_ten_multiplier
            .map(UnitMultiplier::resolve)
            .transpose()?,
        time_attribute: m.time_attribute.map(TimeAttributeKind::resolve).transpose()?,
        uom: m.uom.map(UnitSymbol::resolve).transpose()?,
        cpp: m.cpp,
        tou: m.tou,
        argument: rational_from_columns(m.argument_numerator, m.argument_denominator),
        interharmonic: rational_from_columns(
            m.interharmonic_numerator,
            m.interharmonic_denominator,
        ),
    })
}

pub(super) async fn insert<C: ConnectionTrait>(conn: &C, rt: ReadingType) -> DomainResult<()> {
    let model = reading_type::ActiveModel {
        id: Set(rt.resource.id),
        description: Set(rt.resource.description),
        published: Set(rt.resource.published),
        updated: Set(rt.resource.updated),
        self_href: Set(rt.resource.self_href),
        up_href: Set(rt.resource.up_href),
        meter_reading_id: Set(rt.meter_reading_id),
        accumulation_behaviour: Set(rt.accumulation_behaviour.map(|c| c.code())),
        commodity: Set(rt.commodity.map(|c| c.code())),
        consumption_tier: Set(rt.consumption_tier),
        currency: Set(rt.currency.map(|c| c.code())),
        data_qualifier: Set(rt.data_qualifier.map(|c| c.code())),
        default_quality: Set(rt.default_quality.map(|c| c.code())),
        flow_direction: Set(rt.flow_direction.map(|c| c.code())),
        interval_length: Set(rt.interval_length),
        kind: Set(rt.kind.map(|c| c.code())),
        phase: Set(rt.phase.map(|c| c.code())),
        power_of_ten_multiplier: Set(rt.power_of_ten_multiplier.map(|c| c.code())),
        time_attribute: Set(rt.time_attribute.map(|c| c.code())),
        uom: Set(rt.uom.map(|c| c.code())),
        cpp: Set(rt.cpp),
        tou: Set(rt.tou),
        argument_numerator: Set(rt.argument.map(|r| r.numerator)),
        argument_denominator: Set(rt.argument.map(|r| r.denominator)),
        interharmonic_numerator: Set(rt.interharmonic.map(|r| r.numerator)),
        interharmonic_denominator: Set(rt.interharmonic.map(|r| r.denominator)),
    };
    model.insert(conn).await.map_err(db_err)?;
    Ok(())
}

#[async_trait]
impl ReadingTypeRepository for SeaOrmReadingTypeRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<ReadingType>> {
        let model = reading_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<ReadingType>> {
        let models = reading_type::Entity::find()
            .order_by_asc(reading_type::Column::SelfHref)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn save(&self, reading_type: ReadingType) -> DomainResult<()> {
        debug!("Saving reading type: {}", reading_type.resource.id);
        insert(&self.db, reading_type).await
    }
}
