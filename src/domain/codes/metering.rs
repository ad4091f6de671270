//! Metering coded domains (reading types, interval data, power quality).

use super::{coded_enum, string_coded_enum};

coded_enum! {
    /// Unit of measure (ESPI UomType subset of CIM UnitSymbol).
    UnitSymbol("UomType") {
        NotApplicable = 0,
        Amperes = 5,
        Volts = 29,
        Joules = 31,
        Hertz = 33,
        Watts = 38,
        VoltAmperes = 61,
        VoltAmperesReactive = 63,
        VoltAmpereHours = 71,
        WattHours = 72,
        VoltAmpereReactiveHours = 73,
        AmpereHours = 106,
        CubicFeet = 119,
        CubicMeters = 125,
    }
}

coded_enum! {
    /// Power-of-ten multiplier; the code is the exponent itself.
    UnitMultiplier("PowerOfTenMultiplier") {
        Pico = -12,
        Nano = -9,
        Micro = -6,
        Milli = -3,
        Centi = -2,
        Deci = -1,
        None = 0,
        Deca = 1,
        Hecto = 2,
        Kilo = 3,
        Mega = 6,
        Giga = 9,
    }
}

coded_enum! {
    /// How a reading accumulates over time.
    AccumulationKind("AccumulationBehaviour") {
        None = 0,
        BulkQuantity = 1,
        ContinuousCumulative = 2,
        Cumulative = 3,
        DeltaData = 4,
        Indicating = 6,
        Summation = 9,
        TimeDelay = 10,
        Instantaneous = 12,
        LatchingQuantity = 13,
        BoundedQuantity = 14,
    }
}

coded_enum! {
    /// Commodity being measured.
    CommodityKind("Commodity") {
        None = 0,
        ElectricitySecondaryMetered = 1,
        ElectricityPrimaryMetered = 2,
        CommunicationChannel = 3,
        Air = 4,
        NaturalGas = 7,
        Propane = 8,
        PotableWater = 9,
        Steam = 10,
        WasteWater = 11,
        HeatingFluid = 12,
        CoolingFluid = 13,
    }
}

coded_enum! {
    /// Salient attribute of the measured data.
    DataQualifierKind("DataQualifier") {
        None = 0,
        Average = 2,
        Excess = 4,
        HighThreshold = 5,
        LowThreshold = 7,
        Maximum = 8,
        Minimum = 9,
        Nominal = 11,
        Normal = 12,
        SecondMaximum = 16,
        SecondMinimum = 17,
    }
}

coded_enum! {
    /// Direction of flow relative to the usage point.
    FlowDirectionKind("FlowDirection") {
        None = 0,
        Forward = 1,
        Lateral = 2,
        Net = 4,
        Q1PlusQ2 = 5,
        Q1PlusQ3 = 7,
        Q1PlusQ4 = 8,
        Q1MinusQ4 = 9,
        Q2PlusQ3 = 10,
        Q2PlusQ4 = 11,
        Q2MinusQ3 = 12,
        Q3PlusQ4 = 13,
        Q3MinusQ2 = 14,
        Quadrant1 = 15,
        Quadrant2 = 16,
        Quadrant3 = 17,
        Quadrant4 = 18,
        Reverse = 19,
        Total = 20,
        TotalByPhase = 21,
    }
}

coded_enum! {
    /// Identity of what is being measured.
    MeasurementKind("MeasurementKind") {
        None = 0,
        ApparentPowerFactor = 2,
        Currency = 3,
        Current = 4,
        CurrentAngle = 5,
        Demand = 8,
        Energy = 12,
        Frequency = 15,
        Power = 37,
        PowerFactor = 38,
        Voltage = 54,
        VoltageAngle = 55,
    }
}

coded_enum! {
    /// Time attribute (measuring period) of interval data.
    TimeAttributeKind("TimeAttribute") {
        None = 0,
        TenMinute = 1,
        FifteenMinute = 2,
        OneMinute = 3,
        TwentyFourHour = 4,
        ThirtyMinute = 5,
        FiveMinute = 6,
        SixtyMinute = 7,
        TwoMinute = 10,
        ThreeMinute = 14,
        Present = 15,
        Previous = 16,
    }
}

coded_enum! {
    /// CIM phase code bitmask values.
    PhaseCode("PhaseCode") {
        AbcN = 225,
        Abc = 224,
        AbN = 193,
        AcN = 161,
        BcN = 97,
        Ab = 192,
        Ac = 160,
        Bc = 96,
        AN = 129,
        BN = 65,
        CN = 33,
        A = 128,
        B = 64,
        C = 32,
        N = 16,
    }
}

coded_enum! {
    /// Validation state of a reading.
    QualityOfReading("QualityOfReading") {
        Valid = 0,
        ManuallyEdited = 7,
        EstimatedUsingReferenceDay = 8,
        EstimatedUsingLinearInterpolation = 9,
        Questionable = 10,
        Derived = 11,
        Projected = 12,
        Mixed = 13,
        Raw = 14,
        NormalizedForWeather = 15,
        Other = 16,
        Validated = 17,
        Verified = 18,
    }
}

string_coded_enum! {
    /// Connection state of a usage point.
    UsagePointConnectedKind("UsagePointConnectedKind") {
        Connected = "connected",
        LogicallyDisconnected = "logicallyDisconnected",
        PhysicallyDisconnected = "physicallyDisconnected",
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    macro_rules! round_trip {
        ($name:ident, $ty:ty) => {
            #[test]
            fn $name() {
                for &v in <$ty>::ALL {
                    assert_eq!(<$ty>::resolve(v.code()).unwrap(), v);
                }
            }
        };
    }

    round_trip!(unit_symbol_round_trip, UnitSymbol);
    round_trip!(unit_multiplier_round_trip, UnitMultiplier);
    round_trip!(accumulation_round_trip, AccumulationKind);
    round_trip!(commodity_round_trip, CommodityKind);
    round_trip!(data_qualifier_round_trip, DataQualifierKind);
    round_trip!(flow_direction_round_trip, FlowDirectionKind);
    round_trip!(measurement_kind_round_trip, MeasurementKind);
    round_trip!(time_attribute_round_trip, TimeAttributeKind);
    round_trip!(phase_code_round_trip, PhaseCode);
    round_trip!(quality_of_reading_round_trip, QualityOfReading);

    #[test]
    fn codes_are_unique_per_domain() {
        let mut codes: Vec<i32> = UnitSymbol::ALL.iter().map(|v| v.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), UnitSymbol::ALL.len());
    }

    #[test]
    fn unknown_code_is_a_hard_error() {
        let err = UnitSymbol::resolve(9999).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidCode {
                domain: "UomType",
                code: "9999".into()
            }
        );
    }

    #[test]
    fn known_schema_codes() {
        assert_eq!(UnitSymbol::WattHours.code(), 72);
        assert_eq!(UnitSymbol::Watts.code(), 38);
        assert_eq!(UnitMultiplier::Kilo.code(), 3);
        assert_eq!(FlowDirectionKind::Reverse.code(), 19);
    }

    #[test]
    fn connected_kind_tokens() {
        assert_eq!(UsagePointConnectedKind::Connected.code(), "connected");
        assert_eq!(
            UsagePointConnectedKind::resolve("logicallyDisconnected").unwrap(),
            UsagePointConnectedKind::LogicallyDisconnected
        );
        assert!(UsagePointConnectedKind::resolve("unplugged").is_err());
    }
}
