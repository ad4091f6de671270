//! Commercial coded domains (currencies, service categories, customer and
//! supplier kinds).

use super::{coded_enum, string_coded_enum};

coded_enum! {
    /// ISO 4217 numeric currency codes used by ESPI.
    Currency("Currency") {
        None = 0,
        Aud = 36,
        Cad = 124,
        Jpy = 392,
        Chf = 756,
        Gbp = 826,
        Usd = 840,
        Eur = 978,
    }
}

coded_enum! {
    /// ESPI ServiceCategory kind.
    ServiceKind("ServiceCategory") {
        Electricity = 0,
        Gas = 1,
        Water = 2,
        Time = 3,
        Heat = 4,
        Refuse = 5,
        Sewerage = 6,
        Rates = 7,
        TvLicence = 8,
        Internet = 9,
    }
}

string_coded_enum! {
    /// CIM customer kind.
    CustomerKind("CustomerKind") {
        Residential = "residential",
        Commercial = "commercial",
        Industrial = "industrial",
        PumpingLoad = "pumpingLoad",
        WindMachine = "windMachine",
        EnergyServiceSupplier = "energyServiceSupplier",
        EnergyServiceScheduler = "energyServiceScheduler",
        InternalUse = "internalUse",
        Other = "other",
    }
}

string_coded_enum! {
    /// CIM supplier kind.
    SupplierKind("SupplierKind") {
        Retailer = "retailer",
        Utility = "utility",
        Other = "other",
    }
}

string_coded_enum! {
    /// Enrollment state of a tariff rider.
    EnrollmentStatus("EnrollmentStatus") {
        Enrolled = "enrolled",
        Unenrolled = "unenrolled",
    }
}

string_coded_enum! {
    /// Delivery channel for account notifications.
    NotificationMethodKind("NotificationMethodKind") {
        Call = "call",
        Email = "email",
        Letter = "letter",
        Other = "other",
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_round_trip() {
        for &c in Currency::ALL {
            assert_eq!(Currency::resolve(c.code()).unwrap(), c);
        }
    }

    #[test]
    fn service_kind_round_trip() {
        for &k in ServiceKind::ALL {
            assert_eq!(ServiceKind::resolve(k.code()).unwrap(), k);
        }
    }

    #[test]
    fn customer_and_supplier_kind_round_trip() {
        for &k in CustomerKind::ALL {
            assert_eq!(CustomerKind::resolve(k.code()).unwrap(), k);
        }
        for &k in SupplierKind::ALL {
            assert_eq!(SupplierKind::resolve(k.code()).unwrap(), k);
        }
    }

    #[test]
    fn usd_is_iso_4217_840() {
        assert_eq!(Currency::Usd.code(), 840);
        assert_eq!(Currency::resolve(840).unwrap(), Currency::Usd);
    }

    #[test]
    fn unknown_currency_names_the_domain() {
        let err = Currency::resolve(999).unwrap_err();
        assert_eq!(err.to_string(), "Unknown Currency code: 999");
    }

    #[test]
    fn unknown_customer_kind_is_rejected() {
        assert!(CustomerKind::resolve("cooperative").is_err());
    }
}
