//! ISO-3166 alpha-2 region to currency mapping.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Region code and the currency used there.
#[rustfmt::skip]
static REGIONS: &[(&str, &str)] = &[
    ("AD", "EUR"), ("AE", "AED"), ("AF", "AFN"), ("AG", "XCD"), ("AI", "XCD"),
    ("AL", "ALL"), ("AM", "AMD"), ("AO", "AOA"), ("AR", "ARS"), ("AS", "USD"),
    ("AT", "EUR"), ("AU", "AUD"), ("AW", "AWG"), ("AX", "EUR"), ("AZ", "AZN"),
    ("BA", "BAM"), ("BB", "BBD"), ("BD", "BDT"), ("BE", "EUR"), ("BF", "XOF"),
    ("BG", "BGN"), ("BH", "BHD"), ("BI", "BIF"), ("BJ", "XOF"), ("BL", "EUR"),
    ("BM", "BMD"), ("BN", "BND"), ("BO", "BOB"), ("BQ", "USD"), ("BR", "BRL"),
    ("BS", "BSD"), ("BT", "BTN"), ("BW", "BWP"), ("BY", "BYN"), ("BZ", "BZD"),
    ("CA", "CAD"), ("CC", "AUD"), ("CD", "CDF"), ("CF", "XAF"), ("CG", "XAF"),
    ("CH", "CHF"), ("CI", "XOF"), ("CK", "NZD"), ("CL", "CLP"), ("CM", "XAF"),
    ("CN", "CNY"), ("CO", "COP"), ("CR", "CRC"), ("CU", "CUP"), ("CV", "CVE"),
    ("CW", "XCG"), ("CX", "AUD"), ("CY", "EUR"), ("CZ", "CZK"), ("DE", "EUR"),
    ("DJ", "DJF"), ("DK", "DKK"), ("DM", "XCD"), ("DO", "DOP"), ("DZ", "DZD"),
    ("EC", "USD"), ("EE", "EUR"), ("EG", "EGP"), ("EH", "MAD"), ("ER", "ERN"),
    ("ES", "EUR"), ("ET", "ETB"), ("FI", "EUR"), ("FJ", "FJD"), ("FK", "FKP"),
    ("FM", "USD"), ("FO", "DKK"), ("FR", "EUR"), ("GA", "XAF"), ("GB", "GBP"),
    ("GD", "XCD"), ("GE", "GEL"), ("GF", "EUR"), ("GG", "GBP"), ("GH", "GHS"),
    ("GI", "GIP"), ("GL", "DKK"), ("GM", "GMD"), ("GN", "GNF"), ("GP", "EUR"),
    ("GQ", "XAF"), ("GR", "EUR"), ("GT", "GTQ"), ("GU", "USD"), ("GW", "XOF"),
    ("GY", "GYD"), ("HK", "HKD"), ("HN", "HNL"), ("HR", "EUR"), ("HT", "HTG"),
    ("HU", "HUF"), ("ID", "IDR"), ("IE", "EUR"), ("IL", "ILS"), ("IM", "GBP"),
    ("IN", "INR"), ("IO", "USD"), ("IQ", "IQD"), ("IR", "IRR"), ("IS", "ISK"),
    ("IT", "EUR"), ("JE", "GBP"), ("JM", "JMD"), ("JO", "JOD"), ("JP", "JPY"),
    ("KE", "KES"), ("KG", "KGS"), ("KH", "KHR"), ("KI", "AUD"), ("KM", "KMF"),
    ("KN", "XCD"), ("KP", "KPW"), ("KR", "KRW"), ("KW", "KWD"), ("KY", "KYD"),
    ("KZ", "KZT"), ("LA", "LAK"), ("LB", "LBP"), ("LC", "XCD"), ("LI", "CHF"),
    ("LK", "LKR"), ("LR", "LRD"), ("LS", "LSL"), ("LT", "EUR"), ("LU", "EUR"),
    ("LV", "EUR"), ("LY", "LYD"), ("MA", "MAD"), ("MC", "EUR"), ("MD", "MDL"),
    ("ME", "EUR"), ("MF", "EUR"), ("MG", "MGA"), ("MH", "USD"), ("MK", "MKD"),
    ("ML", "XOF"), ("MM", "MMK"), ("MN", "MNT"), ("MO", "MOP"), ("MP", "USD"),
    ("MQ", "EUR"), ("MR", "MRU"), ("MS", "XCD"), ("MT", "EUR"), ("MU", "MUR"),
    ("MV", "MVR"), ("MW", "MWK"), ("MX", "MXN"), ("MY", "MYR"), ("MZ", "MZN"),
    ("NA", "NAD"), ("NC", "XPF"), ("NE", "XOF"), ("NF", "AUD"), ("NG", "NGN"),
    ("NI", "NIO"), ("NL", "EUR"), ("NO", "NOK"), ("NP", "NPR"), ("NR", "AUD"),
    ("NU", "NZD"), ("NZ", "NZD"), ("OM", "OMR"), ("PA", "PAB"), ("PE", "PEN"),
    ("PF", "XPF"), ("PG", "PGK"), ("PH", "PHP"), ("PK", "PKR"), ("PL", "PLN"),
    ("PM", "EUR"), ("PN", "NZD"), ("PR", "USD"), ("PS", "ILS"), ("PT", "EUR"),
    ("PW", "USD"), ("PY", "PYG"), ("QA", "QAR"), ("RE", "EUR"), ("RO", "RON"),
    ("RS", "RSD"), ("RU", "RUB"), ("RW", "RWF"), ("SA", "SAR"), ("SB", "SBD"),
    ("SC", "SCR"), ("SD", "SDG"), ("SE", "SEK"), ("SG", "SGD"), ("SH", "SHP"),
    ("SI", "EUR"), ("SJ", "NOK"), ("SK", "EUR"), ("SL", "SLE"), ("SM", "EUR"),
    ("SN", "XOF"), ("SO", "SOS"), ("SR", "SRD"), ("SS", "SSP"), ("ST", "STN"),
    ("SV", "USD"), ("SX", "XCG"), ("SY", "SYP"), ("SZ", "SZL"), ("TC", "USD"),
    ("TD", "XAF"), ("TF", "EUR"), ("TG", "XOF"), ("TH", "THB"), ("TJ", "TJS"),
    ("TK", "NZD"), ("TL", "USD"), ("TM", "TMT"), ("TN", "TND"), ("TO", "TOP"),
    ("TR", "TRY"), ("TT", "TTD"), ("TV", "AUD"), ("TW", "TWD"), ("TZ", "TZS"),
    ("UA", "UAH"), ("UG", "UGX"), ("UM", "USD"), ("US", "USD"), ("UY", "UYU"),
    ("UZ", "UZS"), ("VA", "EUR"), ("VC", "XCD"), ("VE", "VES"), ("VG", "USD"),
    ("VI", "USD"), ("VN", "VND"), ("VU", "VUV"), ("WF", "XPF"), ("WS", "WST"),
    ("YE", "YER"), ("YT", "EUR"), ("ZA", "ZAR"), ("ZM", "ZMW"), ("ZW", "ZWG"),
];

static BY_REGION: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| REGIONS.iter().copied().collect());

/// Currency code used in an ISO-3166 alpha-2 region (case-insensitive).
pub(crate) fn currency_for_region(region: &str) -> Option<&'static str> {
    let region = region.trim().to_ascii_uppercase();
    BY_REGION.get(region.as_str()).copied()
}

/// Region part of a specific culture name: "nl-NL" gives "NL", "zh-Hans-CN"
/// gives "CN". Neutral cultures ("en") give `None`.
pub(crate) fn region_of_culture(name: &str) -> Option<&str> {
    let mut parts = name.trim().split(['-', '_']);
    let language = parts.next()?;
    if language.is_empty() {
        return None;
    }
    parts
        .next_back()
        .filter(|region| region.len() == 2 && region.bytes().all(|b| b.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::iso4217::find_current;
    use rstest::rstest;

    #[test]
    fn test_every_region_maps_to_a_current_currency() {
        for (region, code) in REGIONS {
            assert!(
                find_current(code).is_some(),
                "region {region} maps to unknown currency {code}"
            );
        }
    }

    #[test]
    fn test_regions_are_unique() {
        assert_eq!(BY_REGION.len(), REGIONS.len());
    }

    #[rstest]
    #[case("NL", Some("EUR"))]
    #[case("us", Some("USD"))]
    #[case(" JP ", Some("JPY"))]
    #[case("QQ", None)]
    #[case("", None)]
    fn test_currency_for_region(#[case] region: &str, #[case] expected: Option<&str>) {
        assert_eq!(currency_for_region(region), expected);
    }

    #[rstest]
    #[case("nl-NL", Some("NL"))]
    #[case("en_US", Some("US"))]
    #[case("zh-Hans-CN", Some("CN"))]
    #[case("en", None)]
    #[case("zh-Hans", None)]
    #[case("", None)]
    #[case("-US", None)]
    fn test_region_of_culture(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(region_of_culture(name), expected);
    }
}
